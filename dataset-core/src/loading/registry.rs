//! Registry fetch protocol specific models.

use super::Metadata;
use crate::utils::{DatasetError, DatasetResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RegistryResponse {
    dataset: RegistryDataset,
}

/// Describes dataset as it is returned by the registry lookup request.
#[derive(Debug, Deserialize)]
pub(crate) struct RegistryDataset {
    pub name: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

pub(crate) fn get_metadata_url(endpoint: &str, registry_id: &str) -> String {
    format!("{endpoint}/datasets/{registry_id}")
}

pub(crate) fn get_download_url(endpoint: &str, registry_id: &str) -> String {
    format!("{endpoint}/datasets/{registry_id}/download")
}

pub(crate) fn read_registry_dataset(body: &str) -> DatasetResult<RegistryDataset> {
    serde_json::from_str::<RegistryResponse>(body)
        .map(|response| response.dataset)
        .map_err(|err| DatasetError::parse(format!("unexpected registry response: {err}")))
}
