#[cfg(test)]
#[path = "../../tests/unit/source/descriptor_test.rs"]
mod descriptor_test;

use super::resolve_source_kind;
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// A default base address of the dataset registry.
pub const DEFAULT_REGISTRY_ENDPOINT: &str = "https://rastion.com/api";

/// Specifies where instance data comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A request to compute effective kind from given identifiers, never a resolved state.
    #[default]
    Auto,
    /// A hosted dataset registry.
    #[serde(alias = "platform")]
    Registry,
    /// An arbitrary external url.
    Url,
    /// A local file.
    Local,
    /// No data source at all.
    None,
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceKind::Auto => "auto",
            SourceKind::Registry => "registry",
            SourceKind::Url => "url",
            SourceKind::Local => "local",
            SourceKind::None => "none",
        };

        write!(f, "{name}")
    }
}

/// A source configuration as it is specified by the user.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SourceConfig {
    /// Source kind, `auto` when omitted.
    #[serde(default)]
    pub kind: SourceKind,
    /// A dataset id in the registry.
    pub registry_id: Option<String>,
    /// An external dataset url.
    pub url: Option<String>,
    /// A local file path.
    pub local_path: Option<PathBuf>,
    /// A base address for registry lookups.
    pub registry_endpoint: Option<String>,
    /// An opaque bearer token forwarded to registry requests.
    pub credential: Option<String>,
}

/// Captures which source to use and its parameters. Once created, its kind is always resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDescriptor {
    kind: SourceKind,
    registry_id: Option<String>,
    url: Option<String>,
    local_path: Option<PathBuf>,
    registry_endpoint: String,
    credential: Option<String>,
}

impl SourceDescriptor {
    /// Creates a new descriptor resolving its source kind from given configuration.
    pub fn new(config: SourceConfig) -> Self {
        let kind = resolve_source_kind(
            config.kind,
            config.registry_id.as_deref(),
            config.url.as_deref(),
            config.local_path.as_deref(),
        );

        Self {
            kind,
            registry_id: config.registry_id,
            url: config.url,
            local_path: config.local_path,
            registry_endpoint: config
                .registry_endpoint
                .map(|endpoint| endpoint.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_REGISTRY_ENDPOINT.to_string()),
            credential: config.credential,
        }
    }

    /// Creates a descriptor which points to a registry dataset.
    pub fn from_registry(registry_id: &str, credential: Option<&str>) -> Self {
        Self::new(SourceConfig {
            kind: SourceKind::Registry,
            registry_id: Some(registry_id.to_string()),
            credential: credential.map(|credential| credential.to_string()),
            ..SourceConfig::default()
        })
    }

    /// Creates a descriptor which points to an external url.
    pub fn from_url(url: &str) -> Self {
        Self::new(SourceConfig { kind: SourceKind::Url, url: Some(url.to_string()), ..SourceConfig::default() })
    }

    /// Creates a descriptor which points to a local file.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(SourceConfig { kind: SourceKind::Local, local_path: Some(path.into()), ..SourceConfig::default() })
    }

    /// Creates a descriptor without any data source.
    pub fn none() -> Self {
        Self::new(SourceConfig { kind: SourceKind::None, ..SourceConfig::default() })
    }

    /// Overrides registry endpoint.
    pub fn with_registry_endpoint(mut self, endpoint: &str) -> Self {
        self.registry_endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Returns resolved source kind.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Returns registry dataset id.
    pub fn registry_id(&self) -> Option<&str> {
        self.registry_id.as_deref()
    }

    /// Returns external url.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns local file path.
    pub fn local_path(&self) -> Option<&Path> {
        self.local_path.as_deref()
    }

    /// Returns registry endpoint.
    pub fn registry_endpoint(&self) -> &str {
        self.registry_endpoint.as_str()
    }

    /// Returns bearer credential.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }
}
