//! Problem configuration.

#[cfg(test)]
#[path = "../../tests/unit/problem/config_test.rs"]
mod config_test;

use crate::format::FormatConfig;
use crate::loading::LoaderConfig;
use crate::source::SourceConfig;
use crate::utils::{DatasetError, DatasetResult};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A problem configuration: where data comes from, how it is fetched and how it is read.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProblemConfig {
    /// Specifies data source.
    #[serde(default)]
    pub source: SourceConfig,
    /// Specifies loader configuration.
    #[serde(default)]
    pub loading: LoaderConfig,
    /// Specifies format configuration.
    #[serde(default)]
    pub format: FormatConfig,
}

/// Reads problem configuration from json. Unknown fields are rejected.
pub fn read_problem_config<R: Read>(reader: BufReader<R>) -> DatasetResult<ProblemConfig> {
    serde_json::from_reader(reader).map_err(|err| DatasetError::configuration(format!("cannot read config: {err}")))
}
