#[cfg(test)]
#[path = "../../tests/unit/loading/loader_test.rs"]
mod loader_test;

use super::registry::*;
use super::*;
use crate::source::{SourceDescriptor, SourceKind};
use crate::utils::{DatasetError, DatasetResult, Environment, InfoLogger};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// A loader configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoaderConfig {
    /// A timeout of registry metadata request. Default is 30 seconds.
    #[serde(default = "default_metadata_timeout")]
    pub metadata_timeout_secs: u64,
    /// A timeout of registry payload request. Default is 60 seconds.
    #[serde(default = "default_payload_timeout")]
    pub payload_timeout_secs: u64,
    /// A timeout of external url request. Default is 60 seconds.
    #[serde(default = "default_payload_timeout")]
    pub url_timeout_secs: u64,
    /// A base directory to resolve relative local paths. Default is current working directory.
    pub base_dir: Option<PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            metadata_timeout_secs: default_metadata_timeout(),
            payload_timeout_secs: default_payload_timeout(),
            url_timeout_secs: default_payload_timeout(),
            base_dir: None,
        }
    }
}

fn default_metadata_timeout() -> u64 {
    30
}

fn default_payload_timeout() -> u64 {
    60
}

/// Performs actual fetch of the content described by source descriptor.
///
/// Loader never fails: any error is captured inside returned `LoadedContent`.
pub struct ContentLoader {
    config: LoaderConfig,
    transport: Arc<dyn DataTransport>,
    logger: InfoLogger,
}

impl ContentLoader {
    /// Creates a new instance of `ContentLoader`.
    pub fn new(config: LoaderConfig, environment: &Environment) -> Self {
        Self { config, transport: environment.transport.clone(), logger: environment.logger.clone() }
    }

    /// Loads content described by source descriptor.
    pub fn load(&self, descriptor: &SourceDescriptor) -> LoadedContent {
        let result = match descriptor.kind() {
            SourceKind::Registry => self.load_from_registry(descriptor),
            SourceKind::Url => self.load_from_url(descriptor),
            SourceKind::Local => self.load_from_local(descriptor),
            SourceKind::None => Ok(LoadedContent::empty()),
            SourceKind::Auto => Err(DatasetError::configuration("source kind is not resolved")),
        };

        result.unwrap_or_else(|err| {
            (self.logger)(format!("warning: cannot load dataset from {} source: {err}", descriptor.kind()).as_str());
            LoadedContent::failed(err)
        })
    }

    /// Resolves local path: absolute path is used as is, relative one is tried against base
    /// directory first and falls back to current working directory.
    pub fn resolve_local_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }

        self.config
            .base_dir
            .as_ref()
            .map(|base_dir| base_dir.join(path))
            .filter(|candidate| candidate.exists())
            .unwrap_or_else(|| path.to_path_buf())
    }

    fn load_from_registry(&self, descriptor: &SourceDescriptor) -> DatasetResult<LoadedContent> {
        let registry_id = descriptor
            .registry_id()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DatasetError::configuration("registry id is required for registry source"))?;
        let endpoint = descriptor.registry_endpoint();
        let bearer = descriptor.credential().map(|credential| credential.to_string());

        let body = self.transport.get(&FetchRequest {
            url: get_metadata_url(endpoint, registry_id),
            bearer: bearer.clone(),
            timeout: Duration::from_secs(self.config.metadata_timeout_secs),
        })?;
        let dataset = read_registry_dataset(body.as_str())?;

        let raw_text = self.transport.get(&FetchRequest {
            url: get_download_url(endpoint, registry_id),
            bearer,
            timeout: Duration::from_secs(self.config.payload_timeout_secs),
        })?;

        (self.logger)(
            format!("loaded dataset from registry: '{}'", dataset.name.as_deref().unwrap_or(registry_id)).as_str(),
        );

        Ok(LoadedContent::loaded(raw_text, dataset.name, dataset.metadata))
    }

    fn load_from_url(&self, descriptor: &SourceDescriptor) -> DatasetResult<LoadedContent> {
        let url = descriptor
            .url()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| DatasetError::configuration("url is required for url source"))?;

        let raw_text = self.transport.get(&FetchRequest {
            url: url.to_string(),
            bearer: None,
            timeout: Duration::from_secs(self.config.url_timeout_secs),
        })?;

        (self.logger)(format!("loaded dataset from url: '{url}'").as_str());

        Ok(LoadedContent::loaded(raw_text, None, Metadata::default()))
    }

    fn load_from_local(&self, descriptor: &SourceDescriptor) -> DatasetResult<LoadedContent> {
        let path = descriptor
            .local_path()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| DatasetError::configuration("local path is required for local source"))?;

        let path = self.resolve_local_path(path);
        let raw_text = self.transport.read_to_string(path.as_path())?;

        (self.logger)(format!("loaded dataset from local file: '{}'", path.display()).as_str());

        Ok(LoadedContent::loaded(raw_text, None, Metadata::default()))
    }
}

/// Wraps content loader with a cache: the first access triggers the fetch, all subsequent accesses
/// reuse the cached result including cached failures.
pub struct LazyContent {
    descriptor: SourceDescriptor,
    loader: ContentLoader,
    content: OnceLock<LoadedContent>,
}

impl LazyContent {
    /// Creates a new instance of `LazyContent`.
    pub fn new(descriptor: SourceDescriptor, loader: ContentLoader) -> Self {
        Self { descriptor, loader, content: OnceLock::new() }
    }

    /// Returns loaded content triggering the load on first access.
    pub fn get(&self) -> &LoadedContent {
        self.content.get_or_init(|| self.loader.load(&self.descriptor))
    }

    /// Returns loaded content only if load has already happened.
    pub fn peek(&self) -> Option<&LoadedContent> {
        self.content.get()
    }

    /// Returns source descriptor.
    pub fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }
}
