//! Contains problem capabilities, problem state machine and the problem facade which composes
//! source resolution, content loading, parsing and evaluation behind a stable interface.

mod capabilities;
pub use self::capabilities::*;

mod config;
pub use self::config::*;

mod facade;
pub use self::facade::*;

mod state;
pub use self::state::*;
