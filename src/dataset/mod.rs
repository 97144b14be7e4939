//! Cars Dataset
//!
//! The dashboard plots the public Vega "cars" dataset. The server never
//! downloads it: charts carry the dataset URL and the viewer resolves it.
//!
//! This module describes the columns the dashboard knows about:
//!
//! - **Column**: the three selectable axis columns
//! - **FieldType**: Vega-Lite measurement type of a column
//! - **DatasetSource**: where the viewer loads the rows from

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Public location of the cars dataset
pub const CARS_URL: &str = "https://cdn.jsdelivr.net/npm/vega-datasets@v1.29.0/data/cars.json";

/// Column shown in every tooltip regardless of the selected axes
pub const HORSEPOWER: &str = "Horsepower";

/// Dataset errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// Name does not match any selectable column
    #[error("Unknown column: {0:?} (expected one of Displacement, Cylinders, Miles_per_Gallon)")]
    UnknownColumn(String),
}

/// Vega-Lite measurement type of a data field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Ordinal,
    Nominal,
    Temporal,
}

impl FieldType {
    /// Vega-Lite type name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Quantitative => "quantitative",
            FieldType::Ordinal => "ordinal",
            FieldType::Nominal => "nominal",
            FieldType::Temporal => "temporal",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column that can drive a chart axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Displacement,
    Cylinders,
    #[serde(rename = "Miles_per_Gallon")]
    MilesPerGallon,
}

impl Column {
    /// Selectable columns in dropdown order
    pub const ALL: [Column; 3] = [Column::MilesPerGallon, Column::Cylinders, Column::Displacement];

    /// Field name as it appears in the dataset
    pub fn name(&self) -> &'static str {
        match self {
            Column::Displacement => "Displacement",
            Column::Cylinders => "Cylinders",
            Column::MilesPerGallon => "Miles_per_Gallon",
        }
    }

    /// Measurement type used when the column is encoded
    pub fn field_type(&self) -> FieldType {
        match self {
            Column::Displacement => FieldType::Quantitative,
            Column::Cylinders => FieldType::Quantitative,
            Column::MilesPerGallon => FieldType::Quantitative,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = DatasetError;

    /// Exact, case-sensitive match on the dataset field name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| DatasetError::UnknownColumn(s.to_string()))
    }
}

/// Where chart data comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSource {
    pub url: String,
}

impl DatasetSource {
    /// The public cars dataset
    pub fn cars() -> Self {
        Self {
            url: CARS_URL.to_string(),
        }
    }
}

impl Default for DatasetSource {
    fn default() -> Self {
        Self::cars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_columns() {
        assert_eq!("Displacement".parse::<Column>().unwrap(), Column::Displacement);
        assert_eq!("Cylinders".parse::<Column>().unwrap(), Column::Cylinders);
        assert_eq!(
            "Miles_per_Gallon".parse::<Column>().unwrap(),
            Column::MilesPerGallon
        );
    }

    #[test]
    fn test_parse_rejects_unknown_columns() {
        for name in ["Horsepower", "displacement", "", "Weight_in_lbs"] {
            assert_eq!(
                name.parse::<Column>(),
                Err(DatasetError::UnknownColumn(name.to_string()))
            );
        }
    }

    #[test]
    fn test_all_columns_are_quantitative() {
        for column in Column::ALL {
            assert_eq!(column.field_type(), FieldType::Quantitative);
        }
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for column in Column::ALL {
            assert_eq!(column.name().parse::<Column>().unwrap(), column);
            assert_eq!(column.to_string(), column.name());
        }
    }

    #[test]
    fn test_column_serde_uses_dataset_names() {
        let json = serde_json::to_string(&Column::MilesPerGallon).unwrap();
        assert_eq!(json, "\"Miles_per_Gallon\"");
        let col: Column = serde_json::from_str("\"Cylinders\"").unwrap();
        assert_eq!(col, Column::Cylinders);
    }

    #[test]
    fn test_default_source_is_cars() {
        assert_eq!(DatasetSource::default().url, CARS_URL);
    }
}
