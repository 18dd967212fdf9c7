#[cfg(test)]
#[path = "../../tests/unit/format/requirements_test.rs"]
mod requirements_test;

use super::DatasetFormat;
use crate::loading::Metadata;
use crate::utils::{DatasetError, DatasetResult};
use serde::Deserialize;

/// Metadata keys which are used to report dataset size.
pub const SIZE_KEYS: [&str; 4] = ["dimension", "num_cities", "num_customers", "num_vertices"];

/// Specifies what a problem expects from a dataset.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DatasetRequirements {
    /// An expected format.
    pub format: Option<DatasetFormat>,
    /// A minimum dataset size.
    pub min_size: Option<usize>,
    /// A maximum dataset size.
    pub max_size: Option<usize>,
    /// Metadata fields which have to be present (case insensitive).
    #[serde(default)]
    pub required_fields: Vec<String>,
    /// Accepted formats, any format is accepted when empty.
    #[serde(default)]
    pub supported_formats: Vec<DatasetFormat>,
}

impl DatasetRequirements {
    /// Validates dataset metadata against requirements, returns the first failed requirement.
    pub fn validate(&self, metadata: &Metadata) -> DatasetResult<()> {
        let format = metadata.get("format").and_then(|tag| tag.as_str()).map(|tag| tag.parse::<DatasetFormat>());

        match (self.format, &format) {
            (Some(expected), Some(Ok(actual))) if expected != *actual => {
                return Err(DatasetError::validation(format!("expecting '{expected}' format, got '{actual}'")));
            }
            (Some(expected), None) | (Some(expected), Some(Err(_))) => {
                return Err(DatasetError::validation(format!("expecting '{expected}' format, got none")));
            }
            _ => {}
        }

        if !self.supported_formats.is_empty() {
            match format {
                Some(Ok(actual)) if self.supported_formats.contains(&actual) => {}
                _ => {
                    let supported =
                        self.supported_formats.iter().map(|format| format.to_string()).collect::<Vec<_>>().join(", ");
                    return Err(DatasetError::validation(format!("dataset format is not one of: {supported}")));
                }
            }
        }

        if let Some(missing) = self.required_fields.iter().find(|field| {
            let field = field.to_lowercase();
            !metadata.keys().any(|key| key.to_lowercase() == field)
        }) {
            return Err(DatasetError::validation(format!("required field is missing: '{missing}'")));
        }

        if self.min_size.is_some() || self.max_size.is_some() {
            let size = get_dataset_size(metadata)
                .ok_or_else(|| DatasetError::validation("cannot determine dataset size from metadata"))?;

            if let Some(min_size) = self.min_size.filter(|&min_size| size < min_size) {
                return Err(DatasetError::validation(format!("dataset size {size} is less than {min_size}")));
            }

            if let Some(max_size) = self.max_size.filter(|&max_size| size > max_size) {
                return Err(DatasetError::validation(format!("dataset size {size} is greater than {max_size}")));
            }
        }

        Ok(())
    }
}

/// Returns dataset size declared in metadata using the first known size key.
pub fn get_dataset_size(metadata: &Metadata) -> Option<usize> {
    SIZE_KEYS.iter().find_map(|key| metadata.get(*key).and_then(|value| value.as_u64())).map(|size| size as usize)
}
