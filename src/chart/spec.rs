//! Vega-Lite chart specification types
//!
//! Typed subset of the Vega-Lite grammar covering what the dashboard emits:
//! a single point layer over URL data with x/y position channels, a tooltip
//! and an optional scale-bound interval selection.
//!
//! Field order in these structs is the order keys appear in the emitted JSON,
//! so serialization is stable across runs.

use serde::Serialize;

use crate::dataset::{Column, DatasetSource, FieldType};

/// Schema URL stamped on every specification
pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// A complete single-view chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub data: DatasetSource,
    pub mark: Mark,
    pub encoding: Encoding,
    pub title: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

impl ChartSpec {
    /// Serialize to compact Vega-Lite JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to indented Vega-Lite JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Whether pan/zoom is bound to the scales
    pub fn is_interactive(&self) -> bool {
        self.params.iter().any(|p| p.bind == Bind::Scales)
    }
}

/// Mark kinds the dashboard draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Point,
}

/// Mark definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// Encoding channels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encoding {
    pub x: PositionDef,
    pub y: PositionDef,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tooltip: Vec<FieldDef>,
}

/// Field bound to a position channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionDef {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PositionDef {
    /// Position on `column`, titled with the column name
    pub fn column(column: Column) -> Self {
        Self {
            field: column.name().to_string(),
            field_type: column.field_type(),
            title: Some(column.name().to_string()),
        }
    }
}

/// Plain field reference, used for tooltips
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDef {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
        }
    }
}

impl From<Column> for FieldDef {
    fn from(column: Column) -> Self {
        FieldDef::new(column.name(), column.field_type())
    }
}

/// Selection parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    pub select: Selection,
    pub bind: Bind,
}

impl Param {
    /// Interval selection over x and y bound to the scales (pan and zoom)
    pub fn pan_zoom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            select: Selection {
                kind: SelectionType::Interval,
                encodings: vec!["x".to_string(), "y".to_string()],
            },
            bind: Bind::Scales,
        }
    }
}

/// Selection definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    #[serde(rename = "type")]
    pub kind: SelectionType,
    pub encodings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    Interval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bind {
    Scales,
}
