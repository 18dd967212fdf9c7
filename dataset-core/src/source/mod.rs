//! Contains source descriptor and source resolution logic.

mod descriptor;
pub use self::descriptor::*;

mod resolver;
pub use self::resolver::*;
