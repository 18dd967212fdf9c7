#[cfg(test)]
#[path = "../../tests/unit/routing/instance_test.rs"]
mod instance_test;

use crate::common::{Coordinate, euclidean_distance};
use crate::tabular::{TabularData, read_tabular};
use crate::tsplib::{TsplibData, TsplibProblem};
use dataset_core::prelude::*;
use rand::RngCore;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::json;

/// Specifies how customer indices outside of the known range are treated by evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// Such indices are dropped from the cost computation.
    #[default]
    Skip,
    /// Such indices make the whole solution unscorable.
    Reject,
}

/// Options used to read a route instance.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouteOptions {
    /// Vehicle capacity used when data has none. Default is 100.
    #[serde(default = "default_capacity")]
    pub default_capacity: Float,
    /// Depot used when data has none. Default is the origin.
    #[serde(default)]
    pub default_depot: Coordinate,
    /// Out of range index policy. Default is skip.
    #[serde(default)]
    pub index_policy: IndexPolicy,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self { default_capacity: default_capacity(), default_depot: (0., 0.), index_policy: IndexPolicy::default() }
    }
}

fn default_capacity() -> Float {
    100.
}

/// A capacitated vehicle routing problem instance. A solution is a list of routes, each route is a
/// list of customer indices. Every route starts and ends at the depot, distances are computed on
/// demand from raw coordinates.
pub struct RouteInstance {
    name: Option<String>,
    dimension: Option<usize>,
    depot: Coordinate,
    customers: Vec<Coordinate>,
    demands: Vec<Float>,
    vehicle_capacity: Float,
    index_policy: IndexPolicy,
    header: Metadata,
}

impl RouteInstance {
    /// Creates a new instance. Demands are either empty or index aligned with customers.
    pub fn new(
        depot: Coordinate,
        customers: Vec<Coordinate>,
        demands: Vec<Float>,
        vehicle_capacity: Float,
        index_policy: IndexPolicy,
    ) -> Self {
        Self {
            name: None,
            dimension: None,
            depot,
            customers,
            demands,
            vehicle_capacity,
            index_policy,
            header: Metadata::default(),
        }
    }

    /// Returns instance name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns declared dimension (depot included).
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Returns depot coordinate.
    pub fn depot(&self) -> Coordinate {
        self.depot
    }

    /// Returns customer coordinates.
    pub fn customers(&self) -> &[Coordinate] {
        self.customers.as_slice()
    }

    /// Returns customer demands, empty when data has no demands.
    pub fn demands(&self) -> &[Float] {
        self.demands.as_slice()
    }

    /// Returns vehicle capacity.
    pub fn vehicle_capacity(&self) -> Float {
        self.vehicle_capacity
    }

    fn has_demands(&self) -> bool {
        !self.customers.is_empty() && self.demands.len() == self.customers.len()
    }

    fn demand(&self, customer: usize) -> Float {
        if self.has_demands() { self.demands.get(customer).copied().unwrap_or(0.) } else { 0. }
    }
}

impl Problem for RouteInstance {
    type Solution = Vec<Vec<usize>>;

    fn evaluate(&self, solution: &Self::Solution) -> Float {
        if solution.is_empty() {
            return Float::INFINITY;
        }

        let mut total = 0.;

        for route in solution.iter() {
            let mut current = self.depot;

            for &customer in route.iter() {
                let Some(&next) = self.customers.get(customer) else {
                    match self.index_policy {
                        IndexPolicy::Skip => continue,
                        IndexPolicy::Reject => return Float::INFINITY,
                    }
                };

                total += euclidean_distance(current, next);
                current = next;
            }

            total += euclidean_distance(current, self.depot);
        }

        total
    }

    fn is_valid(&self, solution: &Self::Solution) -> bool {
        let size = self.customers.len();
        if size == 0 {
            return false;
        }

        let mut visits = vec![0_usize; size];
        let is_visited_once = solution.iter().flatten().all(|&customer| {
            customer < size && {
                visits[customer] += 1;
                visits[customer] == 1
            }
        });

        let is_capacity_respected = solution
            .iter()
            .all(|route| route.iter().map(|&customer| self.demand(customer)).sum::<Float>() <= self.vehicle_capacity);

        is_visited_once && visits.iter().all(|&count| count == 1) && is_capacity_respected
    }

    fn random_solution(&self, random: &mut dyn RngCore) -> DatasetResult<Self::Solution> {
        if self.customers.is_empty() {
            return Err(DatasetError::validation("cannot generate routes: instance has no customers"));
        }

        let mut customers = (0..self.customers.len()).collect::<Vec<_>>();
        customers.shuffle(random);

        let (mut routes, last, _) = customers.into_iter().fold(
            (Vec::new(), Vec::new(), 0.),
            |(mut routes, mut route, load): (Vec<Vec<usize>>, Vec<usize>, Float), customer| {
                let demand = self.demand(customer);

                if !route.is_empty() && load + demand > self.vehicle_capacity {
                    routes.push(std::mem::take(&mut route));
                    route.push(customer);
                    (routes, route, demand)
                } else {
                    route.push(customer);
                    (routes, route, load + demand)
                }
            },
        );
        routes.push(last);

        Ok(routes)
    }
}

impl ProblemInstance for RouteInstance {
    type Options = RouteOptions;

    fn read(context: &ParseContext, options: &Self::Options) -> DatasetResult<Self> {
        let content = context.content.unwrap_or_default();

        let mut instance = match context.format {
            Some(DatasetFormat::Tsplib) | None => {
                let data = content.read_tsplib()?;
                let tabular = if data.coordinates.is_empty() && context.format.is_none() {
                    Some(read_tabular(content, None)?).filter(|tabular| !tabular.rows.is_empty())
                } else {
                    None
                };

                match tabular {
                    Some(mut tabular) => {
                        tabular.name = tabular.name.or(data.header.name);
                        tabular.capacity = tabular.capacity.or(data.header.capacity);

                        let mut instance = from_tabular(tabular, options);
                        instance.dimension = data.header.dimension;
                        instance
                    }
                    None => from_tsplib(data, options, context.logger),
                }
            }
            format @ Some(_) => from_tabular(read_tabular(content, format)?, options),
        };

        if instance.name.is_none() {
            instance.name = context.name.map(|name| name.to_string());
        }

        Ok(instance)
    }

    fn describe(&self) -> Metadata {
        let mut metadata = self.header.clone();

        metadata.insert("problem_type".to_string(), json!("cvrp"));
        metadata.insert("num_customers".to_string(), json!(self.customers.len()));
        metadata.insert("dimension".to_string(), json!(self.dimension.unwrap_or(self.customers.len() + 1)));
        metadata.insert("vehicle_capacity".to_string(), json!(self.vehicle_capacity));
        metadata.insert("depot".to_string(), json!([self.depot.0, self.depot.1]));
        metadata.insert("has_demands".to_string(), json!(self.has_demands()));
        if let Some(name) = &self.name {
            metadata.insert("name".to_string(), json!(name));
        }

        metadata
    }
}

/// The first depot designated by depot section is excluded from customers and demands.
fn from_tsplib(data: TsplibData, options: &RouteOptions, logger: &InfoLogger) -> RouteInstance {
    let mut header = data.header.describe();
    header.insert("has_coordinates".to_string(), json!(data.has_coordinate_section));

    let depot_id = data.depots.first();
    let depot = depot_id
        .and_then(|depot_id| data.coordinates.iter().find(|(id, _)| id == depot_id))
        .map(|(_, coordinate)| *coordinate);

    if let (Some(depot_id), None) = (depot_id, depot) {
        (logger)(&format!("warning: depot '{depot_id}' has no coordinate, default depot is used"));
    }

    let is_customer = |id: &String| depot.is_none() || Some(id) != depot_id;

    let customers = data.coordinates.iter().filter(|(id, _)| is_customer(id)).map(|(_, coordinate)| *coordinate).collect();
    let demands = data.demands.iter().filter(|(id, _)| is_customer(id)).map(|(_, demand)| *demand).collect();

    let mut instance = RouteInstance::new(
        depot.unwrap_or(options.default_depot),
        customers,
        demands,
        data.header.capacity.unwrap_or(options.default_capacity),
        options.index_policy,
    );
    instance.name = data.header.name;
    instance.dimension = data.header.dimension;
    instance.header = header;

    instance
}

fn from_tabular(data: TabularData, options: &RouteOptions) -> RouteInstance {
    let demands = data.demands();
    let mut instance = RouteInstance::new(
        data.depot.unwrap_or(options.default_depot),
        data.coordinates(),
        demands,
        data.capacity.unwrap_or(options.default_capacity),
        options.index_policy,
    );
    instance.name = data.name;

    instance
}
