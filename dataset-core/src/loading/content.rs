#[cfg(test)]
#[path = "../../tests/unit/loading/content_test.rs"]
mod content_test;

use crate::utils::{DatasetError, DatasetResult, ErrorKind};
use serde_json::Value;
use std::collections::BTreeMap;

/// A mapping of string keys to scalar values which describes a dataset.
pub type Metadata = BTreeMap<String, Value>;

/// Specifies a state of the content load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing was fetched yet.
    #[default]
    NotLoaded,
    /// Content was fetched successfully (possibly empty content for `none` source).
    Loaded,
    /// Fetch failed: the captured error is kept and no retry happens.
    Failed(DatasetError),
}

/// Keeps the outcome of a content load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedContent {
    raw_text: Option<String>,
    name: Option<String>,
    metadata: Metadata,
    state: LoadState,
}

impl LoadedContent {
    /// Creates a successfully loaded content.
    pub fn loaded(raw_text: String, name: Option<String>, metadata: Metadata) -> Self {
        Self { raw_text: Some(raw_text), name, metadata, state: LoadState::Loaded }
    }

    /// Creates a successfully loaded but empty content.
    pub fn empty() -> Self {
        Self { raw_text: None, name: None, metadata: Metadata::default(), state: LoadState::Loaded }
    }

    /// Creates a failed content which retains the error.
    pub fn failed(error: DatasetError) -> Self {
        Self { raw_text: None, name: None, metadata: Metadata::default(), state: LoadState::Failed(error) }
    }

    /// Returns load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Returns true if content was loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// Returns a captured load error, if any.
    pub fn error(&self) -> Option<&DatasetError> {
        match &self.state {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Returns raw text or the stored load error.
    pub fn raw_text(&self) -> DatasetResult<Option<&str>> {
        self.ensure_loaded().map(|_| self.raw_text.as_deref())
    }

    /// Returns source provided metadata or the stored load error.
    pub fn metadata(&self) -> DatasetResult<&Metadata> {
        self.ensure_loaded().map(|_| &self.metadata)
    }

    /// Returns human readable dataset name as reported by the source.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn ensure_loaded(&self) -> DatasetResult<()> {
        match &self.state {
            LoadState::Loaded => Ok(()),
            LoadState::Failed(error) => Err(error.clone()),
            LoadState::NotLoaded => Err(DatasetError::new(ErrorKind::InvalidTransition, "content is not loaded yet")),
        }
    }
}
