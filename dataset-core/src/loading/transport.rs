//! Transport abstraction for testability.

use crate::utils::{DatasetError, DatasetResult};
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;
use std::time::Duration;

/// Describes a single GET request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// A literal url to fetch.
    pub url: String,
    /// An optional bearer token for the `Authorization` header.
    pub bearer: Option<String>,
    /// A request timeout.
    pub timeout: Duration,
}

/// Performs actual I/O on behalf of the content loader.
///
/// This abstraction allows to replace network and file system access in tests.
pub trait DataTransport: Send + Sync {
    /// Performs GET request and returns response body as text regardless of its content type.
    fn get(&self, request: &FetchRequest) -> DatasetResult<String>;

    /// Reads a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> DatasetResult<String>;
}

/// A transport which uses blocking http client and local file system.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl DataTransport for HttpTransport {
    fn get(&self, request: &FetchRequest) -> DatasetResult<String> {
        let mut builder = self.client.get(request.url.as_str()).timeout(request.timeout);

        if let Some(bearer) = request.bearer.as_deref() {
            builder = builder.bearer_auth(bearer);
        }

        let response =
            builder.send().map_err(|err| DatasetError::network(format!("request to '{}' failed: {err}", request.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::network(format!("http {status} from '{}'", request.url)));
        }

        response
            .text()
            .map_err(|err| DatasetError::network(format!("cannot read response from '{}': {err}", request.url)))
    }

    fn read_to_string(&self, path: &Path) -> DatasetResult<String> {
        std::fs::read_to_string(path).map_err(|err| match err.kind() {
            IoErrorKind::NotFound => DatasetError::not_found(format!("dataset file not found: '{}'", path.display())),
            IoErrorKind::InvalidData => {
                DatasetError::parse(format!("dataset file is not valid UTF-8 text: '{}'", path.display()))
            }
            _ => DatasetError::not_found(format!("cannot read dataset file '{}': {err}", path.display())),
        })
    }
}
