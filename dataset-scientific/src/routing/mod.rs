//! Contains capacitated vehicle routing problem: instance reader and route evaluation.

mod instance;
pub use self::instance::*;
