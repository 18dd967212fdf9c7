use crate::loading::{DataTransport, HttpTransport};
use crate::utils::InfoLogger;
use std::sync::Arc;

/// Keeps track of environment specific information which influences how data is fetched and
/// what is reported about it.
#[derive(Clone)]
pub struct Environment {
    /// A transport used to fetch remote payloads and read local files.
    pub transport: Arc<dyn DataTransport>,
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(transport: Arc<dyn DataTransport>, logger: InfoLogger) -> Self {
        Self { transport, logger }
    }

    /// Creates a new instance of `Environment` with default transport and given logger.
    pub fn with_logger(logger: InfoLogger) -> Self {
        Self { transport: Arc::new(HttpTransport::default()), logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::with_logger(Arc::new(|msg| println!("{msg}")))
    }
}
