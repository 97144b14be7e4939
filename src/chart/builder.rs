//! Scatter chart builder
//!
//! [`build_chart`] is the entry point used by the page and the update
//! channel: it validates the two axis names and produces the dashboard's
//! scatter plot. [`ChartBuilder`] exposes the same construction with each
//! knob settable.

use crate::chart::error::{Axis, ChartError, ChartResult};
use crate::chart::spec::{
    ChartSpec, Encoding, FieldDef, Mark, MarkType, Param, PositionDef, VEGA_LITE_SCHEMA,
};
use crate::dataset::{Column, DatasetSource, FieldType, HORSEPOWER};

/// Title shown above every dashboard chart
pub const CHART_TITLE: &str = "Horsepower vs. Displacement";

pub const CHART_WIDTH: u32 = 500;
pub const CHART_HEIGHT: u32 = 350;

/// Point area in square pixels
pub const POINT_SIZE: f64 = 90.0;

/// Name of the pan/zoom selection parameter
pub const PAN_ZOOM_PARAM: &str = "grid";

/// Axis columns used on first page load
pub const DEFAULT_X: Column = Column::Displacement;
pub const DEFAULT_Y: Column = Column::Cylinders;

/// Build the dashboard scatter plot for two axis field names.
///
/// Both names must be selectable columns; anything else fails with
/// [`ChartError::UnknownColumn`] before a specification is assembled.
pub fn build_chart(x_field: &str, y_field: &str) -> ChartResult<ChartSpec> {
    let x = lookup(Axis::X, x_field)?;
    let y = lookup(Axis::Y, y_field)?;

    tracing::debug!(x = %x, y = %y, "Building scatter chart");
    Ok(ChartBuilder::new(x, y).build())
}

fn lookup(axis: Axis, name: &str) -> ChartResult<Column> {
    name.parse::<Column>().map_err(|_| ChartError::UnknownColumn {
        axis,
        name: name.to_string(),
    })
}

/// Builder for the scatter chart
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    x: Column,
    y: Column,
    title: String,
    width: u32,
    height: u32,
    interactive: bool,
}

impl ChartBuilder {
    /// Start from the dashboard defaults with the given axes
    pub fn new(x: Column, y: Column) -> Self {
        Self {
            x,
            y,
            title: CHART_TITLE.to_string(),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            interactive: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable pan/zoom
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Assemble the specification
    pub fn build(self) -> ChartSpec {
        // Horsepower is listed even when neither axis shows it.
        let tooltip = vec![
            FieldDef::from(self.x),
            FieldDef::new(HORSEPOWER, FieldType::Quantitative),
        ];

        let params = if self.interactive {
            vec![Param::pan_zoom(PAN_ZOOM_PARAM)]
        } else {
            Vec::new()
        };

        ChartSpec {
            schema: VEGA_LITE_SCHEMA.to_string(),
            data: DatasetSource::cars(),
            mark: Mark {
                kind: MarkType::Point,
                size: Some(POINT_SIZE),
            },
            encoding: Encoding {
                x: PositionDef::column(self.x),
                y: PositionDef::column(self.y),
                tooltip,
            },
            title: self.title,
            width: self.width,
            height: self.height,
            params,
        }
    }
}
