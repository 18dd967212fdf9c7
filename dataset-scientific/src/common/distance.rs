#[cfg(test)]
#[path = "../../tests/unit/common/distance_test.rs"]
mod distance_test;

use super::Coordinate;
use dataset_core::prelude::{Float, InfoLogger, Timer};
use rayon::prelude::*;

/// Returns Euclidean distance between two coordinates.
pub fn euclidean_distance(from: Coordinate, to: Coordinate) -> Float {
    let x = from.0 - to.0;
    let y = from.1 - to.1;

    (x * x + y * y).sqrt()
}

/// A square symmetric matrix of Euclidean distances with zero diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// Derives a matrix from coordinates. When `is_rounded` is set, distances are rounded to the
    /// nearest integer as TSPLIB `EUC_2D` prescribes.
    pub fn from_coordinates(coordinates: &[Coordinate], is_rounded: bool, logger: &InfoLogger) -> Self {
        Timer::measure_duration_with_callback(
            || {
                let values = coordinates
                    .par_iter()
                    .enumerate()
                    .map(|(from_idx, &from)| {
                        coordinates
                            .iter()
                            .enumerate()
                            .map(|(to_idx, &to)| {
                                if from_idx == to_idx {
                                    return 0.;
                                }

                                let value = euclidean_distance(from, to);
                                if is_rounded { value.round() } else { value }
                            })
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>()
                    .concat();

                Self { size: coordinates.len(), values }
            },
            |duration| (logger)(format!("distance matrix created in {}ms", duration.as_millis()).as_str()),
        )
    }

    /// Returns distance between two nodes or `None` if any of them is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> Option<Float> {
        if from < self.size && to < self.size { Some(self.values[from * self.size + to]) } else { None }
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.size
    }
}
