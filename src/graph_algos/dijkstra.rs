use std::cmp::Ordering;
use std::collections::BinaryHeap;

use num_traits::Float;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use super::PredecessorMap;
use super::shortest_path::reconstruct_path;
use crate::errors::GraphError;
use crate::graph::{Graph, Position};


/// Identify the shortest-cost path using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Traverses the graph from the start vertex, always settling the
/// cheapest frontier vertex next. Edges carrying the untraversable cost
/// are skipped. The resulting path is stored on the graph and returned;
/// an unreachable goal yields the empty path rather than an error.
pub fn compute_dijkstra<T: Float>(
    graph: &mut Graph<T>,
    start_position: Position,
    end_position: Position,
) -> Result<Vec<Position>, GraphError> {
    graph.get_vertex(start_position)?;
    graph.get_vertex(end_position)?;

    // Best known cost from the start to each vertex
    let mut costs: FxHashMap<Position, f64> = FxHashMap::default();
    let mut predecessors = PredecessorMap::default();

    // Min-priority queue on (cost, position), seeded with every vertex
    let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::new();
    for position in graph.positions() {
        let cost = if position == start_position { 0.0 } else { f64::INFINITY };
        costs.insert(position, cost);
        queue.push(QueueEntry { cost: OrderedFloat(cost), position });
    }

    while let Some(QueueEntry { cost, position }) = queue.pop() {
        if cost.0.is_infinite() {
            break; // only unreachable vertices left in the queue
        }

        // A superseded entry stays in the queue when a cheaper path is
        // found later; drop it on pop instead of tracking a closed set
        let best = costs.get(&position).copied().unwrap_or(f64::INFINITY);
        if cost.0 > best {
            continue;
        }

        for edge in graph.get_vertex(position)?.edges() {
            if !edge.is_traversable() {
                continue;
            }
            let neighbor = edge.destination();
            let Some(&neighbor_cost) = costs.get(&neighbor) else {
                continue;
            };

            let candidate = cost.0 + edge.cost();
            if candidate < neighbor_cost {
                costs.insert(neighbor, candidate);
                predecessors.insert(neighbor, position);
                queue.push(QueueEntry {
                    cost: OrderedFloat(candidate),
                    position: neighbor,
                });
            }
        }
    }

    let path = reconstruct_path(&predecessors, start_position, end_position);
    log::debug!(
        "dijkstra {start_position} -> {end_position}: {} vertices on path",
        path.len()
    );
    graph.set_dijkstra_path(path.clone());
    Ok(path)
}


/// Queue entry ordered for a min-heap
/// Lower cost pops first; equal costs prefer the lower position
#[derive(Debug, PartialEq, Eq)]
struct QueueEntry {
    cost: OrderedFloat<f64>,
    position: Position,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
