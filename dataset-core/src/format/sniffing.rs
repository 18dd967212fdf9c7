#[cfg(test)]
#[path = "../../tests/unit/format/sniffing_test.rs"]
mod sniffing_test;

use crate::loading::Metadata;
use crate::utils::{DatasetError, DatasetResult};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies a format of the raw dataset content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// A coordinate section format (subset of TSPLIB95).
    #[serde(alias = "vrp", alias = "tsp")]
    Tsplib,
    /// A JSON document.
    Json,
    /// Delimited rows.
    Csv,
}

impl Display for DatasetFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DatasetFormat::Tsplib => "tsplib",
            DatasetFormat::Json => "json",
            DatasetFormat::Csv => "csv",
        };

        write!(f, "{name}")
    }
}

impl FromStr for DatasetFormat {
    type Err = DatasetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "tsplib" | "tsp" | "vrp" => Ok(DatasetFormat::Tsplib),
            "json" => Ok(DatasetFormat::Json),
            "csv" => Ok(DatasetFormat::Csv),
            other => Err(DatasetError::validation(format!("unknown dataset format: '{other}'"))),
        }
    }
}

/// Specifies how unrecognized or mismatching payloads are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatPolicy {
    /// Unknown payloads are accepted and readers extract whatever they can.
    #[default]
    Permissive,
    /// Unknown or mismatching payloads are rejected with validation error.
    Strict,
}

/// A format configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatConfig {
    /// An explicit format hint, content is sniffed when omitted.
    pub format: Option<DatasetFormat>,
    /// A format policy. Default is permissive.
    #[serde(default)]
    pub policy: FormatPolicy,
}

/// Returns format guessed from the content, if any.
///
/// Content is treated as coordinate section format if it declares both dimension and type, as JSON
/// if it parses as JSON, and as delimited rows if it has more than one line and the first line
/// contains a field separator.
pub fn sniff_format(content: &str) -> Option<DatasetFormat> {
    [DatasetFormat::Tsplib, DatasetFormat::Json, DatasetFormat::Csv]
        .into_iter()
        .find(|format| has_format_markers(content, *format))
}

/// Checks whether the content matches expected format. A format tag in metadata takes precedence
/// over content inspection.
pub fn matches_format(content: Option<&str>, metadata: &Metadata, expected: DatasetFormat) -> bool {
    let Some(content) = content.filter(|content| !content.is_empty()) else {
        return false;
    };

    let is_tagged = metadata
        .get("format")
        .and_then(|tag| tag.as_str())
        .and_then(|tag| tag.parse::<DatasetFormat>().ok())
        .is_some_and(|tag| tag == expected);

    is_tagged || has_format_markers(content, expected)
}

/// Decides which format should be used to read the content.
///
/// Returns `None` when the format cannot be determined and the policy allows to proceed anyway.
pub fn detect_format(
    content: &str,
    metadata: &Metadata,
    config: &FormatConfig,
) -> DatasetResult<Option<DatasetFormat>> {
    let tagged = match metadata.get("format").and_then(|tag| tag.as_str()) {
        Some(tag) => match (tag.parse::<DatasetFormat>(), config.policy) {
            (Ok(format), _) => Some(format),
            (Err(_), FormatPolicy::Permissive) => None,
            (Err(err), FormatPolicy::Strict) => return Err(err),
        },
        None => None,
    };

    match (config.format.or(tagged), config.policy) {
        (Some(format), FormatPolicy::Permissive) => Ok(Some(format)),
        (Some(format), FormatPolicy::Strict) => {
            if matches_format(Some(content), metadata, format) {
                Ok(Some(format))
            } else {
                Err(DatasetError::validation(format!("content does not match expected '{format}' format")))
            }
        }
        (None, policy) => match (sniff_format(content), policy) {
            (Some(format), _) => Ok(Some(format)),
            (None, FormatPolicy::Permissive) => Ok(None),
            (None, FormatPolicy::Strict) if content.trim().is_empty() => Ok(None),
            (None, FormatPolicy::Strict) => Err(DatasetError::validation("cannot recognize dataset format")),
        },
    }
}

fn has_format_markers(content: &str, format: DatasetFormat) -> bool {
    match format {
        DatasetFormat::Tsplib => {
            let keys = content.lines().filter_map(get_header_key).collect::<Vec<_>>();
            keys.contains(&"DIMENSION") && keys.contains(&"TYPE")
        }
        DatasetFormat::Json => serde_json::from_str::<serde_json::Value>(content).is_ok(),
        DatasetFormat::Csv => {
            let mut lines = content.trim().lines();
            let has_separator = lines.next().is_some_and(|first| first.contains(','));

            has_separator && lines.next().is_some()
        }
    }
}

/// Returns a key of `KEY: value` or `KEY value` header line.
pub fn get_header_key(line: &str) -> Option<&str> {
    let line = line.trim();
    let key = line.split(':').next().unwrap_or(line).split_whitespace().next()?;

    let is_key = key.starts_with(|ch: char| ch.is_ascii_uppercase())
        && key.chars().all(|ch| ch.is_ascii_uppercase() || ch == '_' || ch.is_ascii_digit());

    if is_key {
        Some(key)
    } else {
        None
    }
}
