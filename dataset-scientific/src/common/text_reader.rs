#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use dataset_core::format::get_header_key;
use dataset_core::prelude::{DatasetResult, Float};

/// Splits `KEY: value`, `KEY : value` or `KEY value` header line into key and value.
pub fn read_key_value(line: &str) -> Option<(&str, &str)> {
    let key = get_header_key(line)?;
    let line = line.trim();
    let rest = line[key.len()..].trim_start();
    let value = rest.strip_prefix(':').unwrap_or(rest).trim();

    Some((key, value))
}

/// Parses a floating point value, reporting line number on failure.
pub fn parse_float(data: &str, line_number: usize, err_msg: &str) -> DatasetResult<Float> {
    data.trim().parse::<Float>().map_err(|err| format!("{err_msg} at line {line_number}: '{data}': {err}").into())
}

/// Parses a non-negative integer value which may be written as float (e.g. `28.00000`).
pub fn parse_usize(data: &str, line_number: usize, err_msg: &str) -> DatasetResult<usize> {
    parse_float(data, line_number, err_msg).and_then(|value| {
        if value >= 0. && value.is_finite() {
            Ok(value.round() as usize)
        } else {
            Err(format!("{err_msg} at line {line_number}: '{data}' is not a non-negative number").into())
        }
    })
}

/// Returns numeric fields of a row split by any of common separators.
pub fn read_numeric_fields(line: &str) -> Vec<Float> {
    line.split(|ch: char| ch == ',' || ch == ';' || ch == '\t' || ch.is_whitespace())
        .filter(|field| !field.is_empty())
        .filter_map(|field| field.parse::<Float>().ok())
        .filter(|value| value.is_finite())
        .collect()
}
