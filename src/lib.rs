//! Weighted graph path planning
//!
//! A directed graph of positioned vertices with two single-pair
//! shortest-path solvers (Dijkstra and A*), connectivity and bounds
//! queries, and a line-oriented reader/writer for graph files.
//!
//! Edges carry a cost of -1 to mark themselves untraversable; both
//! solvers skip such edges. An unreachable goal is a defined result,
//! the empty path, not an error.
//!
//! ```
//! use meshpath::graph::Graph;
//! use meshpath::graph_algos::{compute_astar, compute_dijkstra};
//!
//! let mut graph = Graph::from_elements(
//!     &[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)],
//!     &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (0, 3, 5.0)],
//! )?;
//!
//! let path = compute_dijkstra(&mut graph, 0, 3)?;
//! assert_eq!(path, vec![0, 1, 2, 3]);
//! assert_eq!(graph.get_path_cost(&path)?, 3.0);
//!
//! compute_astar(&mut graph, 0, 3)?;
//! assert_eq!(graph.get_astar_path(), graph.get_dijkstra_path());
//! # Ok::<(), meshpath::errors::GraphError>(())
//! ```

mod collections;
pub mod errors;
pub mod generator;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod parser;

pub use errors::{GraphError, ParserError};
pub use graph::{Bounds, Edge, EdgeElement, Graph, Position, Vertex, VertexElement};
pub use graph_algos::{compute_astar, compute_dijkstra};
pub use parser::{GraphFileReader, GraphFileWriter};
