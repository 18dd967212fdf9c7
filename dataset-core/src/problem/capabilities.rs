use crate::format::DatasetFormat;
use crate::loading::Metadata;
use crate::utils::{DatasetError, DatasetResult, Float, InfoLogger};
use rand::RngCore;

/// Specifies capabilities of an optimization problem.
///
/// Only evaluation is required: by default, any solution is considered valid and random solution
/// generation is not supported.
pub trait Problem {
    /// A type of the candidate solution.
    type Solution;

    /// Evaluates a solution returning its cost. Positive infinity means that a solution cannot be
    /// scored, e.g. it is empty or problem has no data.
    fn evaluate(&self, solution: &Self::Solution) -> Float;

    /// Checks whether a solution is valid for this problem.
    fn is_valid(&self, _solution: &Self::Solution) -> bool {
        true
    }

    /// Generates a random solution.
    fn random_solution(&self, _random: &mut dyn RngCore) -> DatasetResult<Self::Solution> {
        Err(DatasetError::unsupported("random solution generation is not implemented"))
    }
}

/// A context passed to the instance reader.
pub struct ParseContext<'a> {
    /// Raw content, absent when the source provides no data.
    pub content: Option<&'a str>,
    /// A dataset name reported by the source.
    pub name: Option<&'a str>,
    /// Source provided metadata.
    pub metadata: &'a Metadata,
    /// A detected or requested format, absent when it cannot be determined.
    pub format: Option<DatasetFormat>,
    /// An information logger.
    pub logger: &'a InfoLogger,
}

/// A structured problem instance which can be read from the raw content.
pub trait ProblemInstance: Problem + Send + Sync + Sized {
    /// A family specific options used by reader.
    type Options: Clone + Default + Send + Sync;

    /// Reads structured instance from the raw content.
    ///
    /// Readers are permissive: missing optional sections and dimension mismatches degrade the
    /// instance instead of failing.
    fn read(context: &ParseContext, options: &Self::Options) -> DatasetResult<Self>;

    /// Describes parsed instance.
    fn describe(&self) -> Metadata;
}
