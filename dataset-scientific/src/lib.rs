//! Scientific crate contains logic to read instances of classic routing problems from raw text and
//! to score candidate solutions against them.
//!
//!
//! # Supported formats
//!
//! - **tsplib**: subset of TSPLIB95 format (node coordinates, demands, depots, capacity)
//! - **csv**: delimited rows with two numeric fields per row, optional `x`, `y`, `demand` header
//! - **json**: an array of `{x, y}` objects or `[x, y]` pairs, optionally wrapped into an object
//!
//! # Problem families
//!
//! - **tour**: Euclidean traveling salesman problem, a solution is a visiting permutation
//! - **routing**: capacitated vehicle routing problem, a solution is a list of customer routes

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub use dataset_core as core;

pub mod common;
pub mod factory;
pub mod routing;
pub mod tabular;
pub mod tour;
pub mod tsplib;
