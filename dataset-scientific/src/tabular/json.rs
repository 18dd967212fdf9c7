#[cfg(test)]
#[path = "../../tests/unit/tabular/json_test.rs"]
mod json_test;

use super::{TabularData, TabularRow};
use crate::common::Coordinate;
use dataset_core::prelude::{DatasetError, DatasetResult, Float};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Keys under which a wrapping object keeps its rows, in lookup order.
const ROW_KEYS: [&str; 4] = ["cities", "nodes", "coordinates", "customers"];

/// Point fields which are never read as coordinates.
const SKIP_KEYS: [&str; 2] = ["id", "demand"];

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoint {
    Pair(Vec<Float>),
    Named { x: Float, y: Float, demand: Option<Float> },
    Fields(Map<String, Value>),
}

impl JsonPoint {
    fn into_row(self) -> Option<TabularRow> {
        match self {
            JsonPoint::Pair(values) if values.len() >= 2 => {
                Some(TabularRow { coordinate: (values[0], values[1]), demand: values.get(2).copied() })
            }
            JsonPoint::Pair(_) => None,
            JsonPoint::Named { x, y, demand } => Some(TabularRow { coordinate: (x, y), demand }),
            JsonPoint::Fields(fields) => {
                let demand = fields.get("demand").and_then(Value::as_f64);
                let mut values = fields.iter().filter(|(key, _)| !SKIP_KEYS.contains(&key.as_str())).filter_map(|(_, value)| value.as_f64());

                Some(TabularRow { coordinate: (values.next()?, values.next()?), demand })
            }
        }
    }
}

/// Reads a JSON document: either an array of points or an object which keeps points under one of
/// `cities`, `nodes`, `coordinates` or `customers` keys. A point is `{x, y}` object, an object with
/// any two numeric fields or `[x, y]` array. Optional `name`, `capacity`, `depot` and per point
/// `demand` are read as well. Points which cannot be read are skipped.
pub fn read_json(content: &str) -> DatasetResult<TabularData> {
    let document: Value =
        serde_json::from_str(content).map_err(|err| DatasetError::parse(format!("cannot read json: {err}")))?;

    match document {
        Value::Array(points) => Ok(TabularData { rows: read_rows(points), ..TabularData::default() }),
        Value::Object(object) => {
            let points = ROW_KEYS
                .iter()
                .find_map(|key| object.get(*key))
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();

            Ok(TabularData {
                name: object.get("name").and_then(Value::as_str).map(|name| name.to_string()),
                rows: read_rows(points),
                capacity: object.get("capacity").and_then(Value::as_f64),
                depot: object.get("depot").cloned().and_then(read_coordinate),
            })
        }
        _ => Err(DatasetError::parse("json document should be an array or an object")),
    }
}

fn read_rows(points: Vec<Value>) -> Vec<TabularRow> {
    points.into_iter().filter_map(|point| serde_json::from_value::<JsonPoint>(point).ok()?.into_row()).collect()
}

fn read_coordinate(value: Value) -> Option<Coordinate> {
    serde_json::from_value::<JsonPoint>(value).ok()?.into_row().map(|row| row.coordinate)
}
