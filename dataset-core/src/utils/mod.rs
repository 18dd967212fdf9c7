//! A collection of various utility helpers.

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod timing;
pub use self::timing::*;

mod types;
pub use self::types::*;
