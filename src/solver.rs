//! Route sequencer: open-path ordering of one day's stops.
//!
//! Single walker, fixed start, no return leg. A cheapest-arc construction
//! from the start gives the baseline; 2-opt and relocate moves then improve
//! it, accepting strictly better tours only, so the result is never worse
//! than the greedy baseline. Everything is deterministic.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SequenceOptions;
use crate::error::InfeasibleRoute;
use crate::haversine::haversine_km;
use crate::model::{Coordinate, Poi};
use crate::traits::DistanceProvider;

/// An ordered day route. `stops` never includes the start point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub stops: Vec<Poi>,
    /// Walking distance from the start through every stop, in kilometers.
    pub distance_km: f64,
}

impl Route {
    pub fn names(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stops.iter().any(|stop| stop.name == name)
    }
}

/// Integer arc costs in meters. Node 0 is the start.
type CostMatrix = Vec<Vec<i64>>;

/// Order `bucket` starting from `start`, minimizing walking distance.
///
/// Never fails: if no tour can be built the bucket comes back in its input
/// order with its haversine length.
pub fn sequence<D>(bucket: &[Poi], start: Coordinate, distance: &D, options: &SequenceOptions) -> Route
where
    D: DistanceProvider + ?Sized,
{
    if bucket.len() <= 1 {
        return Route {
            stops: bucket.to_vec(),
            distance_km: 0.0,
        };
    }

    match solve_open_path(bucket, start, distance, options) {
        Ok((order, cost)) => {
            debug!(stops = bucket.len(), meters = cost, "sequenced route");
            Route {
                stops: order.iter().map(|&node| bucket[node - 1].clone()).collect(),
                distance_km: cost as f64 / 1000.0,
            }
        }
        Err(err) => {
            warn!(error = %err, "falling back to input order");
            fallback_route(bucket, start)
        }
    }
}

/// Input order, distance by great-circle estimate.
fn fallback_route(bucket: &[Poi], start: Coordinate) -> Route {
    let mut previous = start;
    let mut total = 0.0;
    for stop in bucket {
        total += haversine_km(previous, stop.location());
        previous = stop.location();
    }

    Route {
        stops: bucket.to_vec(),
        distance_km: total,
    }
}

/// Returns visiting order as node indices (1-based into `bucket`) and its cost.
fn solve_open_path<D>(
    bucket: &[Poi],
    start: Coordinate,
    distance: &D,
    options: &SequenceOptions,
) -> Result<(Vec<usize>, i64), InfeasibleRoute>
where
    D: DistanceProvider + ?Sized,
{
    let matrix = cost_matrix(bucket, start, distance)?;

    let mut order = cheapest_arc_path(&matrix)?;
    let mut cost = path_cost(&order, &matrix);
    let baseline = cost;

    local_search(&mut order, &mut cost, &matrix, options);

    debug!(baseline, improved = cost, "local search finished");
    Ok((order, cost))
}

fn cost_matrix<D>(bucket: &[Poi], start: Coordinate, distance: &D) -> Result<CostMatrix, InfeasibleRoute>
where
    D: DistanceProvider + ?Sized,
{
    let locations: Vec<Coordinate> = std::iter::once(start)
        .chain(bucket.iter().map(Poi::location))
        .collect();

    let n = locations.len();
    let mut matrix = vec![vec![0; n]; n];

    for (i, from) in locations.iter().enumerate() {
        for (j, to) in locations.iter().enumerate() {
            if i == j {
                continue;
            }
            let km = distance.estimate_distance(*from, *to);
            if !km.is_finite() || km < 0.0 {
                return Err(InfeasibleRoute(format!("invalid arc cost {km} between nodes {i} and {j}")));
            }
            matrix[i][j] = (km * 1000.0).round() as i64;
        }
    }

    Ok(matrix)
}

/// Greedy construction: from the current path end, take the cheapest arc to
/// an unvisited node. Ties go to the lower node index.
fn cheapest_arc_path(matrix: &CostMatrix) -> Result<Vec<usize>, InfeasibleRoute> {
    let n = matrix.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n.saturating_sub(1));
    let mut current = 0;
    visited[0] = true;

    while order.len() + 1 < n {
        let next = (1..n)
            .filter(|&node| !visited[node])
            .min_by_key(|&node| (matrix[current][node], node))
            .ok_or_else(|| InfeasibleRoute("no unvisited node reachable".to_string()))?;
        visited[next] = true;
        order.push(next);
        current = next;
    }

    Ok(order)
}

/// Cost of walking start -> order[0] -> ... -> order[last].
fn path_cost(order: &[usize], matrix: &CostMatrix) -> i64 {
    let mut previous = 0;
    let mut total = 0;
    for &node in order {
        total += matrix[previous][node];
        previous = node;
    }
    total
}

// ============================================================================
// Local Search Operators
// ============================================================================

/// 2-opt: Reverse a segment of the path to reduce walking distance.
/// Returns true if an improvement was made.
fn two_opt_improve(order: &mut Vec<usize>, cost: &mut i64, matrix: &CostMatrix) -> bool {
    let n = order.len();
    if n < 2 {
        return false;
    }

    for i in 0..n - 1 {
        for j in i + 1..n {
            let mut candidate = order.clone();
            candidate[i..=j].reverse();

            let candidate_cost = path_cost(&candidate, matrix);
            if candidate_cost < *cost {
                *order = candidate;
                *cost = candidate_cost;
                return true;
            }
        }
    }

    false
}

/// Relocate: Move one stop to another position in the path.
/// Returns true if an improvement was made.
fn relocate_improve(order: &mut Vec<usize>, cost: &mut i64, matrix: &CostMatrix) -> bool {
    let n = order.len();
    if n < 2 {
        return false;
    }

    for from in 0..n {
        for to in 0..n {
            if from == to {
                continue;
            }

            let mut candidate = order.clone();
            let node = candidate.remove(from);
            candidate.insert(to, node);

            let candidate_cost = path_cost(&candidate, matrix);
            if candidate_cost < *cost {
                *order = candidate;
                *cost = candidate_cost;
                return true;
            }
        }
    }

    false
}

/// Run local search improvement until no more improvements or max iterations reached.
fn local_search(order: &mut Vec<usize>, cost: &mut i64, matrix: &CostMatrix, options: &SequenceOptions) {
    for _ in 0..options.local_search_iterations {
        let mut improved = false;

        if two_opt_improve(order, cost, matrix) {
            improved = true;
        }

        if relocate_improve(order, cost, matrix) {
            improved = true;
        }

        if !improved {
            break;
        }
    }
}
