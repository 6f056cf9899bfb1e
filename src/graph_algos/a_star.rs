use std::cmp::Ordering;
use std::collections::BinaryHeap;

use num_traits::Float;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use super::PredecessorMap;
use super::shortest_path::reconstruct_path;
use crate::errors::GraphError;
use crate::graph::{Graph, Position};


/// Identify the shortest-cost path using the A* algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Same relaxation scheme as Dijkstra, guided by the straight-line
/// distance to the goal. Optimality holds when the heuristic never
/// overestimates the true remaining cost, which requires edge costs
/// commensurate with coordinate distance. Edges carrying the
/// untraversable cost are skipped. The resulting path is stored on the
/// graph and returned; an unreachable goal yields the empty path.
pub fn compute_astar<T: Float>(
    graph: &mut Graph<T>,
    start_position: Position,
    goal_position: Position,
) -> Result<Vec<Position>, GraphError> {
    graph.get_vertex(start_position)?;
    graph.get_vertex(goal_position)?;

    // Confirmed cost from the start, and estimated total through each vertex
    let mut g_score: FxHashMap<Position, f64> = FxHashMap::default();
    let mut f_score: FxHashMap<Position, f64> = FxHashMap::default();
    let mut came_from = PredecessorMap::default();

    // Open set ordered by estimated total cost, seeded with every vertex
    let mut open_set: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let start_estimate = graph.get_heuristic(start_position, goal_position)?;
    for position in graph.positions() {
        let (g, f) = if position == start_position {
            (0.0, start_estimate)
        } else {
            (f64::INFINITY, f64::INFINITY)
        };
        g_score.insert(position, g);
        f_score.insert(position, f);
        open_set.push(OpenEntry { f_cost: OrderedFloat(f), position });
    }

    while let Some(OpenEntry { f_cost, position }) = open_set.pop() {
        if f_cost.0.is_infinite() {
            break; // nothing reachable is left to expand
        }

        if position == goal_position {
            // Every vertex popped with a finite estimate was improved at
            // least once, so the predecessor walk is complete
            let path = reconstruct_path(&came_from, start_position, goal_position);
            log::debug!(
                "a* {start_position} -> {goal_position}: {} vertices on path",
                path.len()
            );
            graph.set_astar_path(path.clone());
            return Ok(path);
        }

        // Drop superseded entries; cheaper ones for the same vertex are
        // already in the open set
        let best = f_score.get(&position).copied().unwrap_or(f64::INFINITY);
        if f_cost.0 > best {
            continue;
        }

        let current_g = g_score.get(&position).copied().unwrap_or(f64::INFINITY);
        for edge in graph.get_vertex(position)?.edges() {
            if !edge.is_traversable() {
                continue;
            }
            let neighbor = edge.destination();
            let Some(&neighbor_g) = g_score.get(&neighbor) else {
                continue;
            };

            let tentative_g = current_g + edge.cost();
            if tentative_g < neighbor_g {
                let estimate = tentative_g + graph.get_heuristic(neighbor, goal_position)?;
                g_score.insert(neighbor, tentative_g);
                f_score.insert(neighbor, estimate);
                came_from.insert(neighbor, position);
                open_set.push(OpenEntry {
                    f_cost: OrderedFloat(estimate),
                    position: neighbor,
                });
            }
        }
    }

    log::debug!("a* {start_position} -> {goal_position}: no path");
    graph.set_astar_path(Vec::new());
    Ok(Vec::new())
}


/// Open-set entry ordered for a min-heap
/// Lower estimated total pops first; equal estimates prefer the lower
/// position
#[derive(Debug, PartialEq, Eq)]
struct OpenEntry {
    f_cost: OrderedFloat<f64>,
    position: Position,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}
impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::compute_dijkstra;

    /// Unit square where the direct edge to the goal is expensive
    /// Edge costs dominate coordinate distances, so the straight-line
    /// estimate stays admissible
    fn square_graph() -> Graph<f64> {
        Graph::from_elements(
            &[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)],
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (0, 3, 5.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_finds_cheapest_path_around_expensive_edge() {
        let mut graph = square_graph();
        let path = compute_astar(&mut graph, 0, 3).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(graph.get_path_cost(&path).unwrap(), 3.0);
        assert_eq!(graph.get_astar_path(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_agrees_with_dijkstra() {
        let mut graph = square_graph();
        let astar_path = compute_astar(&mut graph, 0, 3).unwrap();
        let dijkstra_path = compute_dijkstra(&mut graph, 0, 3).unwrap();
        assert_eq!(
            graph.get_path_cost(&astar_path).unwrap(),
            graph.get_path_cost(&dijkstra_path).unwrap()
        );
        // Both cached results survive side by side
        assert_eq!(graph.get_astar_path(), graph.get_dijkstra_path());
    }

    #[test]
    fn test_heuristic_guides_toward_goal() {
        // Two geometric routes of equal edge count; costs equal the leg
        // lengths, so the route that tracks the straight line wins
        let mut graph = Graph::from_elements(
            &[
                (0, 0.0, 0.0),
                (1, 2.0, 0.0),
                (2, 0.0, 3.0),
                (3, 4.0, 0.0),
            ],
            &[
                (0, 1, 2.0),
                (1, 3, 2.0),
                (0, 2, 3.0),
                (2, 3, 5.0),
            ],
        )
        .unwrap();
        let path = compute_astar(&mut graph, 0, 3).unwrap();
        assert_eq!(path, vec![0, 1, 3]);
        assert_eq!(graph.get_path_cost(&path).unwrap(), 4.0);
    }

    #[test]
    fn test_blocked_edge_forces_detour() {
        let mut graph = Graph::from_elements(
            &[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)],
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, -1.0), (0, 3, 5.0)],
        )
        .unwrap();
        let path = compute_astar(&mut graph, 0, 3).unwrap();
        assert_eq!(path, vec![0, 3]);
        assert_eq!(graph.get_path_cost(&path).unwrap(), 5.0);
    }

    #[test]
    fn test_blocked_edge_makes_goal_unreachable() {
        let mut graph = Graph::from_elements(
            &[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)],
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, -1.0)],
        )
        .unwrap();
        let path = compute_astar(&mut graph, 0, 3).unwrap();
        assert!(path.is_empty());
        assert!(graph.get_astar_path().is_empty());
    }

    #[test]
    fn test_start_is_goal() {
        let mut graph = square_graph();
        let path = compute_astar(&mut graph, 1, 1).unwrap();
        assert_eq!(path, vec![1]);
        assert_eq!(graph.get_path_cost(&path).unwrap(), 0.0);
    }

    #[test]
    fn test_unreachable_goal_yields_empty_path() {
        let mut graph = Graph::from_elements(
            &[(0, 0.0, 0.0), (1, 1.0, 0.0), (3, 9.0, 9.0)],
            &[(0, 1, 1.0)],
        )
        .unwrap();
        let path = compute_astar(&mut graph, 0, 3).unwrap();
        assert!(path.is_empty());
        assert!(graph.get_astar_path().is_empty());
    }

    #[test]
    fn test_missing_endpoint_is_an_error() {
        let mut graph = square_graph();
        assert!(compute_astar(&mut graph, 0, 42).is_err());
        assert!(compute_astar(&mut graph, 42, 0).is_err());
    }

    #[test]
    fn test_cycle_does_not_loop() {
        let mut graph = Graph::from_elements(
            &[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 2.0, 0.0), (3, 3.0, 0.0)],
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (2, 3, 2.0)],
        )
        .unwrap();
        let path = compute_astar(&mut graph, 0, 3).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(graph.get_path_cost(&path).unwrap(), 4.0);
    }
}
