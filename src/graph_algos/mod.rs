
pub mod dijkstra;
pub mod a_star;
mod shortest_path;

pub use dijkstra::compute_dijkstra;
pub use a_star::compute_astar;

use rustc_hash::FxHashMap;

use crate::graph::Position;

/// Per-vertex record of the previous vertex on the best path found so far
/// Only vertices that were actually improved have an entry
pub(crate) type PredecessorMap = FxHashMap<Position, Position>;
