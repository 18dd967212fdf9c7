#[cfg(test)]
#[path = "../../tests/unit/tour/instance_test.rs"]
mod instance_test;

use crate::common::{Coordinate, DistanceMatrix};
use crate::tabular::read_tabular;
use crate::tsplib::TsplibProblem;
use dataset_core::prelude::*;
use rand::RngCore;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::json;

/// Options used to read a tour instance.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TourOptions {
    /// Rounds distances to the nearest integer. Default is false.
    #[serde(default)]
    pub is_rounded: bool,
}

/// A Euclidean traveling salesman problem instance. A solution is a visiting order of node indices,
/// the tour is closed implicitly.
///
/// Evaluation follows the actual amount of read coordinates, the declared dimension is kept for
/// reporting only.
pub struct TourInstance {
    name: Option<String>,
    dimension: Option<usize>,
    coordinates: Vec<Coordinate>,
    distances: Option<DistanceMatrix>,
    header: Metadata,
}

impl TourInstance {
    /// Creates a new instance from coordinates.
    pub fn new(coordinates: Vec<Coordinate>, options: &TourOptions, logger: &InfoLogger) -> Self {
        let distances = if coordinates.is_empty() {
            None
        } else {
            Some(DistanceMatrix::from_coordinates(coordinates.as_slice(), options.is_rounded, logger))
        };

        Self { name: None, dimension: None, coordinates, distances, header: Metadata::default() }
    }

    /// Returns instance name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns declared dimension.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Returns coordinates.
    pub fn coordinates(&self) -> &[Coordinate] {
        self.coordinates.as_slice()
    }

    /// Returns distance matrix, it is absent when no coordinates were read.
    pub fn distances(&self) -> Option<&DistanceMatrix> {
        self.distances.as_ref()
    }

    /// Returns amount of nodes which can be visited.
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }
}

impl Problem for TourInstance {
    type Solution = Vec<usize>;

    fn evaluate(&self, solution: &Self::Solution) -> Float {
        let Some(distances) = self.distances.as_ref() else {
            return Float::INFINITY;
        };

        if solution.is_empty() {
            return Float::INFINITY;
        }

        solution
            .iter()
            .zip(solution.iter().cycle().skip(1))
            .try_fold(0., |total, (&from, &to)| distances.distance(from, to).map(|distance| total + distance))
            .unwrap_or(Float::INFINITY)
    }

    fn is_valid(&self, solution: &Self::Solution) -> bool {
        let size = self.size();
        if size == 0 || solution.len() != size {
            return false;
        }

        let mut visited = vec![false; size];

        solution.iter().all(|&idx| idx < size && !std::mem::replace(&mut visited[idx], true))
    }

    fn random_solution(&self, random: &mut dyn RngCore) -> DatasetResult<Self::Solution> {
        if self.coordinates.is_empty() {
            return Err(DatasetError::validation("cannot generate a tour: instance has no coordinates"));
        }

        let mut tour = (0..self.size()).collect::<Vec<_>>();
        tour.shuffle(random);

        Ok(tour)
    }
}

impl ProblemInstance for TourInstance {
    type Options = TourOptions;

    fn read(context: &ParseContext, options: &Self::Options) -> DatasetResult<Self> {
        let content = context.content.unwrap_or_default();

        let (name, dimension, coordinates, header) = match context.format {
            Some(DatasetFormat::Tsplib) | None => {
                let data = content.read_tsplib()?;
                let tabular = if data.coordinates.is_empty() && context.format.is_none() {
                    Some(read_tabular(content, None)?).filter(|tabular| !tabular.rows.is_empty())
                } else {
                    None
                };

                match tabular {
                    Some(tabular) => {
                        let coordinates = tabular.coordinates();
                        (tabular.name.or(data.header.name), data.header.dimension, coordinates, Metadata::default())
                    }
                    None => {
                        let mut header = data.header.describe();
                        header.insert("has_coordinates".to_string(), json!(data.has_coordinate_section));

                        let coordinates = data.coordinates.into_iter().map(|(_, coordinate)| coordinate).collect();
                        (data.header.name, data.header.dimension, coordinates, header)
                    }
                }
            }
            format @ Some(_) => {
                let tabular = read_tabular(content, format)?;
                let coordinates = tabular.coordinates();
                (tabular.name, None, coordinates, Metadata::default())
            }
        };

        if let Some(declared) = dimension.filter(|&declared| declared != coordinates.len()) {
            (context.logger)(&format!(
                "warning: declared dimension {declared} differs from read coordinates count {}",
                coordinates.len()
            ));
        }

        let mut instance = TourInstance::new(coordinates, options, context.logger);
        instance.name = name.or_else(|| context.name.map(|name| name.to_string()));
        instance.dimension = dimension;
        instance.header = header;

        Ok(instance)
    }

    fn describe(&self) -> Metadata {
        let mut metadata = self.header.clone();

        metadata.insert("problem_type".to_string(), json!("tsp"));
        metadata.insert("num_cities".to_string(), json!(self.size()));
        metadata.insert("dimension".to_string(), json!(self.dimension.unwrap_or(self.size())));
        metadata.insert("has_distances".to_string(), json!(self.distances.is_some()));
        if let Some(name) = &self.name {
            metadata.insert("name".to_string(), json!(name));
        }

        metadata
    }
}
