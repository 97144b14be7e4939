//! # Cardash
//!
//! A single-page dashboard that plots the public cars dataset as an
//! interactive Vega-Lite scatter chart. Two dropdowns pick the x and y
//! columns; each change round-trips to the server, which rebuilds the chart
//! and hands back a fresh document for the page's plot frame.
//!
//! ## Modules
//!
//! - [`dataset`]: Dataset location and selectable columns
//! - [`chart`]: Chart specification, builder and themes
//! - [`render`]: Chart specification to HTML document
//! - [`page`]: Page layout and the update handler
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cardash::{serve, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     serve(AppState::new(), &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod page;
pub mod render;

// Re-export top-level types for convenience
pub use dataset::{Column, DatasetError, DatasetSource, FieldType};

pub use chart::{
    build_chart, ChartBuilder, ChartError, ChartResult, ChartSpec, Theme, ThemeRegistry,
};

pub use render::{render, RenderError, RenderResult};

pub use page::{render_page, update_plot, PageError, PageResult};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoadReport, LoggingConfig, ServerConfig};
