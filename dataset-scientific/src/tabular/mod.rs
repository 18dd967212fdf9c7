//! Contains fallback readers for delimited rows and JSON documents.

#[cfg(test)]
#[path = "../../tests/unit/tabular/mod_test.rs"]
mod mod_test;

mod csv;
pub use self::csv::read_csv;

mod json;
pub use self::json::read_json;

use crate::common::{Coordinate, read_numeric_fields};
use dataset_core::prelude::{DatasetFormat, DatasetResult, Float};

/// A single data row: a coordinate with optional demand.
#[derive(Clone, Debug, PartialEq)]
pub struct TabularRow {
    /// Row coordinate.
    pub coordinate: Coordinate,
    /// Row demand, if specified.
    pub demand: Option<Float>,
}

/// Keeps data extracted by fallback readers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabularData {
    /// Instance name, if specified.
    pub name: Option<String>,
    /// Data rows in document order.
    pub rows: Vec<TabularRow>,
    /// Vehicle capacity, if specified.
    pub capacity: Option<Float>,
    /// Depot coordinate, if specified.
    pub depot: Option<Coordinate>,
}

impl TabularData {
    /// Returns row coordinates.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.rows.iter().map(|row| row.coordinate).collect()
    }

    /// Returns row demands if at least one row has it, missing demands are treated as zero.
    pub fn demands(&self) -> Vec<Float> {
        if self.rows.iter().any(|row| row.demand.is_some()) {
            self.rows.iter().map(|row| row.demand.unwrap_or(0.)).collect()
        } else {
            vec![]
        }
    }
}

/// Reads tabular data using the reader of given format. Without format, or with a format which has
/// no tabular reader, any line with at least two numeric fields is read as (x, y).
pub fn read_tabular(content: &str, format: Option<DatasetFormat>) -> DatasetResult<TabularData> {
    match format {
        Some(DatasetFormat::Json) => read_json(content),
        Some(DatasetFormat::Csv) => read_csv(content),
        _ => Ok(read_plain_rows(content)),
    }
}

/// Reads any line with at least two numeric fields as (x, y). Lines with other amount of numeric
/// fields are skipped.
pub fn read_plain_rows(content: &str) -> TabularData {
    let rows = content
        .lines()
        .map(read_numeric_fields)
        .filter(|fields| fields.len() >= 2)
        .map(|fields| TabularRow { coordinate: (fields[0], fields[1]), demand: None })
        .collect();

    TabularData { rows, ..TabularData::default() }
}
