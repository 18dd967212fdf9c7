//! This module reimports commonly used types.

pub use crate::format::{DatasetFormat, DatasetRequirements, FormatConfig, FormatPolicy};
pub use crate::loading::{ContentLoader, DataTransport, FetchRequest, HttpTransport, LoadState, LoadedContent};
pub use crate::loading::{LoaderConfig, Metadata};
pub use crate::problem::{DatasetProblem, Problem, ProblemConfig, ProblemInstance, ProblemState};
pub use crate::problem::{ParseContext, read_problem_config};
pub use crate::source::{SourceConfig, SourceDescriptor, SourceKind, resolve_source_kind};
pub use crate::utils::{DatasetError, DatasetResult, Environment, ErrorKind, Float, InfoLogger, Timer};
