//! Contains a problem factory keyed by problem type name.

#[cfg(test)]
#[path = "../tests/unit/factory_test.rs"]
mod factory_test;

use crate::routing::{RouteInstance, RouteOptions};
use crate::tour::{TourInstance, TourOptions};
use dataset_core::prelude::*;
use rand::RngCore;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A Euclidean traveling salesman problem backed by a dataset.
pub type TourProblem = DatasetProblem<TourInstance>;

/// A capacitated vehicle routing problem backed by a dataset.
pub type RouteProblem = DatasetProblem<RouteInstance>;

/// Specifies problem family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProblemType {
    /// Euclidean traveling salesman problem.
    Tour,
    /// Capacitated vehicle routing problem.
    Route,
}

impl FromStr for ProblemType {
    type Err = DatasetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "tsp" => Ok(ProblemType::Tour),
            "vrp" | "cvrp" => Ok(ProblemType::Route),
            other => Err(DatasetError::configuration(format!("unknown problem type: '{other}'"))),
        }
    }
}

impl Display for ProblemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemType::Tour => write!(f, "tsp"),
            ProblemType::Route => write!(f, "cvrp"),
        }
    }
}

/// Keeps family specific options.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FamilyOptions {
    /// Tour family options.
    #[serde(default)]
    pub tour: TourOptions,
    /// Route family options.
    #[serde(default)]
    pub route: RouteOptions,
}

/// A problem of any supported family.
pub enum AnyProblem {
    /// Euclidean traveling salesman problem.
    Tour(TourProblem),
    /// Capacitated vehicle routing problem.
    Route(RouteProblem),
}

impl AnyProblem {
    /// Returns problem type.
    pub fn problem_type(&self) -> ProblemType {
        match self {
            AnyProblem::Tour(_) => ProblemType::Tour,
            AnyProblem::Route(_) => ProblemType::Route,
        }
    }

    /// Loads and parses the instance if it has not happened yet.
    pub fn prepare(&self) -> DatasetResult<()> {
        match self {
            AnyProblem::Tour(problem) => problem.instance().map(|_| ()),
            AnyProblem::Route(problem) => problem.instance().map(|_| ()),
        }
    }

    /// Returns problem information, see [`DatasetProblem::problem_info`].
    pub fn problem_info(&self) -> Metadata {
        match self {
            AnyProblem::Tour(problem) => problem.problem_info(),
            AnyProblem::Route(problem) => problem.problem_info(),
        }
    }

    /// Returns problem size information, see [`DatasetProblem::size_info`].
    pub fn size_info(&self) -> DatasetResult<Metadata> {
        match self {
            AnyProblem::Tour(problem) => problem.size_info(),
            AnyProblem::Route(problem) => problem.size_info(),
        }
    }

    /// Evaluates a solution given as json value: an array of indices for tour family, an array of
    /// index arrays for route family. Returns cost and validity verdict.
    pub fn evaluate_value(&self, solution: &Value) -> DatasetResult<(Float, bool)> {
        match self {
            AnyProblem::Tour(problem) => evaluate_with(problem, solution),
            AnyProblem::Route(problem) => evaluate_with(problem, solution),
        }
    }

    /// Generates a random solution as json value.
    pub fn random_value(&self, random: &mut dyn RngCore) -> DatasetResult<Value> {
        match self {
            AnyProblem::Tour(problem) => Ok(serde_json::to_value(problem.random_solution(random)?)?),
            AnyProblem::Route(problem) => Ok(serde_json::to_value(problem.random_solution(random)?)?),
        }
    }
}

/// Creates a problem of given type. Unknown type results in configuration error.
pub fn create_problem(
    problem_type: &str,
    config: ProblemConfig,
    options: FamilyOptions,
    environment: &Environment,
) -> DatasetResult<AnyProblem> {
    Ok(match problem_type.parse::<ProblemType>()? {
        ProblemType::Tour => AnyProblem::Tour(TourProblem::new(config, options.tour, environment)),
        ProblemType::Route => AnyProblem::Route(RouteProblem::new(config, options.route, environment)),
    })
}

fn evaluate_with<I>(problem: &DatasetProblem<I>, solution: &Value) -> DatasetResult<(Float, bool)>
where
    I: ProblemInstance,
    I::Solution: for<'de> Deserialize<'de>,
{
    let solution = <I::Solution as Deserialize>::deserialize(solution)
        .map_err(|err| DatasetError::validation(format!("cannot read solution: {err}")))?;

    Ok((problem.evaluate(&solution)?, problem.is_valid(&solution)?))
}
