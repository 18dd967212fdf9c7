#[cfg(test)]
#[path = "../../tests/unit/tsplib/header_test.rs"]
mod header_test;

use crate::common::{parse_float, parse_usize};
use dataset_core::prelude::{DatasetResult, Float, Metadata};
use serde_json::json;

/// Keeps header part of the TSPLIB95 file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TsplibHeader {
    /// Instance name.
    pub name: Option<String>,
    /// Problem type, e.g. `TSP` or `CVRP`.
    pub problem_type: Option<String>,
    /// A free text comment.
    pub comment: Option<String>,
    /// Declared node count.
    pub dimension: Option<usize>,
    /// Edge weight type, e.g. `EUC_2D`.
    pub edge_weight_type: Option<String>,
    /// Vehicle capacity.
    pub capacity: Option<Float>,
}

impl TsplibHeader {
    /// Accepts a header entry. Unknown keys are ignored.
    pub(crate) fn accept(&mut self, key: &str, value: &str, line_number: usize) -> DatasetResult<()> {
        let text = || if value.is_empty() { None } else { Some(value.to_string()) };

        match key {
            "NAME" => self.name = text(),
            "TYPE" => self.problem_type = text(),
            "COMMENT" => self.comment = text(),
            "EDGE_WEIGHT_TYPE" => self.edge_weight_type = text(),
            "DIMENSION" => self.dimension = Some(parse_usize(value, line_number, "cannot parse DIMENSION")?),
            "CAPACITY" => self.capacity = Some(parse_float(value, line_number, "cannot parse CAPACITY")?),
            _ => {}
        }

        Ok(())
    }

    /// Describes header as metadata.
    pub fn describe(&self) -> Metadata {
        let mut metadata = Metadata::default();
        metadata.insert("format".to_string(), json!("tsplib"));

        let mut insert = |key: &str, value: serde_json::Value| {
            metadata.insert(key.to_string(), value);
        };

        if let Some(name) = &self.name {
            insert("name", json!(name));
        }
        if let Some(problem_type) = &self.problem_type {
            insert("problem_type", json!(problem_type.to_lowercase()));
        }
        if let Some(comment) = &self.comment {
            insert("comment", json!(comment));
        }
        if let Some(dimension) = self.dimension {
            insert("dimension", json!(dimension));
        }
        if let Some(edge_weight_type) = &self.edge_weight_type {
            insert("distance_type", json!(edge_weight_type));
        }
        if let Some(capacity) = self.capacity {
            insert("vehicle_capacity", json!(capacity));
        }

        metadata
    }
}
