//! Contains content loading logic: transport abstraction, source specific fetching and lazy caching.

mod content;
pub use self::content::*;

mod loader;
pub use self::loader::*;

mod registry;

mod transport;
pub use self::transport::*;
