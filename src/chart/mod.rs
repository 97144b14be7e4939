//! Cardash Charts
//!
//! Declarative chart construction:
//!
//! - **spec**: Typed Vega-Lite specification
//! - **builder**: Scatter plot builder and the `build_chart` entry point
//! - **theme**: Named style configurations and their registry
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use cardash::chart::{build_chart, ThemeRegistry};
//! use cardash::render::render;
//!
//! let themes = ThemeRegistry::dashboard();
//! let spec = build_chart("Displacement", "Cylinders").unwrap();
//! let html = render(&spec, themes.active()).unwrap();
//! assert!(html.contains("Horsepower vs. Displacement"));
//! ```

pub mod builder;
pub mod error;
pub mod spec;
pub mod theme;

pub use builder::{build_chart, ChartBuilder, CHART_TITLE, DEFAULT_X, DEFAULT_Y};
pub use error::{Axis, ChartError, ChartResult, ThemeError, ThemeResult};
pub use spec::{ChartSpec, Encoding, FieldDef, Mark, MarkType, Param, PositionDef};
pub use theme::{Theme, ThemeConfig, ThemeRegistry, MDS_SPECIAL};
