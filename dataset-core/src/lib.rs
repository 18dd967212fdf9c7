//! Core crate contains building blocks to let an optimization problem obtain its instance data from
//! one of several sources without the rest of the problem logic knowing which source was used.
//!
//! # Sources
//!
//! - **registry**: a hosted dataset registry accessed by dataset id (metadata + payload requests)
//! - **url**: an arbitrary external url fetched with a single GET request
//! - **local**: a text file on local file system
//! - **none**: a problem which does not need any data
//!
//! Source kind is resolved eagerly and deterministically, content is loaded lazily once per
//! problem instance, and load failures are stored and surfaced only when content is requested.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod format;
pub mod loading;
pub mod prelude;
pub mod problem;
pub mod source;
pub mod utils;
