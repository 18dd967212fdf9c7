//! Contains Euclidean traveling salesman problem: instance reader and tour evaluation.

mod instance;
pub use self::instance::*;
