//! Chart error types

use std::fmt;
use thiserror::Error;

/// Position channel a column was requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur while building a chart
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Axis field is not one of the selectable columns
    #[error("Unknown column {name:?} for {axis} axis")]
    UnknownColumn { axis: Axis, name: String },
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors from the theme registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Theme was enabled before being registered
    #[error("Theme not registered: {0}")]
    NotRegistered(String),
}

/// Result type for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;
