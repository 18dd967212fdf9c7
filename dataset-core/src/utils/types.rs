use std::sync::Arc;

/// Alias to a scalar floating type.
pub type Float = f64;

/// A logger type which is called with various information regarding the work done by the loader.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;
