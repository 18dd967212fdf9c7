//! Contains format sniffing and dataset requirements validation logic.

mod requirements;
pub use self::requirements::*;

mod sniffing;
pub use self::sniffing::*;
