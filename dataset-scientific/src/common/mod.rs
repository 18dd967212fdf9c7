//! Contains common geometry and text reading functionality.

mod distance;
pub use self::distance::*;

mod text_reader;
pub use self::text_reader::*;

use dataset_core::utils::Float;

/// A planar coordinate (x, y).
pub type Coordinate = (Float, Float);
