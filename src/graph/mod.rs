pub mod edge;
pub mod vertex;

pub use edge::Edge;
pub use vertex::Vertex;

use std::fmt;

use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;
use num_traits::Float;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::euclidean;


/// Unique vertex identifier within a graph
pub type Position = u32;

/// Vertex descriptor: (position, x, y)
pub type VertexElement<T> = (Position, T, T);

/// Edge descriptor: (source position, destination position, cost)
pub type EdgeElement = (Position, Position, f64);

/// Axis-aligned extent: (min_x, min_y, width, height)
pub type Bounds<T> = (T, T, T, T);


/// Directed weighted graph over positioned vertices
///
/// The graph owns every vertex and, through them, every edge. Edges refer
/// to their endpoints by position, so all lifetimes are tied to the graph
/// alone. The most recently computed solver paths are cached here so that
/// query and output code can read them back.
///
/// Traversals and solvers keep their bookkeeping local; the graph itself
/// holds no transient algorithm state.
pub struct Graph<T> {
    vertices: FxIndexMap<Position, Vertex<T>>,
    astar_path: Vec<Position>,
    dijkstra_path: Vec<Position>,
    optimal_path: Vec<Position>,
}

impl<T: Float> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Graph<T> {

    pub fn new() -> Self {
        Self {
            vertices: FxIndexMap::default(),
            astar_path: Vec::new(),
            dijkstra_path: Vec::new(),
            optimal_path: Vec::new(),
        }
    }

    /// Build a graph directly from vertex and edge descriptors
    pub fn from_elements(
        vertex_elems: &[VertexElement<T>],
        edge_elems: &[EdgeElement],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        graph.create_mesh(vertex_elems, edge_elems)?;
        Ok(graph)
    }

    /// Replace the graph contents with the given descriptors
    ///
    /// Every edge endpoint must name a declared vertex. Endpoints are
    /// validated before any edge is inserted, so a failed call never
    /// leaves half-wired edges behind.
    pub fn create_mesh(
        &mut self,
        vertex_elems: &[VertexElement<T>],
        edge_elems: &[EdgeElement],
    ) -> Result<(), GraphError> {
        self.clear_graph();
        self.create_vertices(vertex_elems);
        self.create_edges(edge_elems)?;
        log::debug!(
            "created mesh with {} vertices and {} edges",
            self.num_vertices(),
            self.num_edges()
        );
        Ok(())
    }

    /// Replace the graph contents with pre-built vertices plus edge descriptors
    pub fn create_mesh_from_vertices(
        &mut self,
        vertices: Vec<Vertex<T>>,
        edge_elems: &[EdgeElement],
    ) -> Result<(), GraphError> {
        self.clear_graph();
        for vertex in vertices {
            self.add_vertex(vertex);
        }
        self.create_edges(edge_elems)
    }

    /// Append vertices from descriptors
    pub fn create_vertices(&mut self, vertex_elems: &[VertexElement<T>]) {
        for &(position, x, y) in vertex_elems {
            self.add_vertex(Vertex::new(position, x, y));
        }
    }

    /// Append edges from descriptors
    ///
    /// Fails with InvalidEdge when an endpoint names an unknown vertex;
    /// no placeholder vertex is ever created for a missed lookup
    pub fn create_edges(&mut self, edge_elems: &[EdgeElement]) -> Result<(), GraphError> {
        for &(source, destination, _) in edge_elems {
            if !self.vertex_exists(source) || !self.vertex_exists(destination) {
                return Err(GraphError::InvalidEdge { source, destination });
            }
        }
        for &(source, destination, cost) in edge_elems {
            if let Some(vertex) = self.vertices.get_mut(&source) {
                vertex.add_edge(Edge::new(source, destination, cost));
            }
        }
        Ok(())
    }

    /// Insert a vertex, keeping the existing one if the position is taken
    pub fn add_vertex(&mut self, vertex: Vertex<T>) {
        self.vertices.entry(vertex.position()).or_insert(vertex);
    }

    /// Remove a vertex and every edge referencing it
    /// Returns false when the position was not present
    pub fn remove_vertex(&mut self, position: Position) -> bool {
        if self.vertices.shift_remove(&position).is_none() {
            return false;
        }
        for vertex in self.vertices.values_mut() {
            vertex.remove_edges_to(position);
        }
        true
    }

    pub fn vertex_exists(&self, position: Position) -> bool {
        self.vertices.contains_key(&position)
    }

    pub fn get_vertex(&self, position: Position) -> Result<&Vertex<T>, GraphError> {
        self.vertices
            .get(&position)
            .ok_or(GraphError::VertexNotFound(position))
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.vertices.values().map(Vertex::num_edges).sum()
    }

    /// Vertex positions in insertion order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.vertices.keys().copied()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.values()
    }

    /// Vertex descriptors for the current contents, in insertion order
    pub fn vertex_elements(&self) -> Vec<VertexElement<T>> {
        self.vertices
            .values()
            .map(|vertex| (vertex.position(), vertex.x(), vertex.y()))
            .collect()
    }

    /// Edge descriptors for the current contents, in insertion order
    pub fn edge_elements(&self) -> Vec<EdgeElement> {
        self.vertices
            .values()
            .flat_map(|vertex| vertex.edges())
            .map(|edge| (edge.source(), edge.destination(), edge.cost()))
            .collect()
    }

    /// Extent of all vertex coordinates as (min_x, min_y, width, height)
    /// An empty graph reports (0, 0, 0, 0)
    pub fn get_bounds(&self) -> Bounds<T> {
        let mut iter = self.vertices.values();
        let Some(first) = iter.next() else {
            return (T::zero(), T::zero(), T::zero(), T::zero());
        };
        let (mut min_x, mut max_x) = (first.x(), first.x());
        let (mut min_y, mut max_y) = (first.y(), first.y());
        for vertex in iter {
            min_x = min_x.min(vertex.x());
            max_x = max_x.max(vertex.x());
            min_y = min_y.min(vertex.y());
            max_y = max_y.max(vertex.y());
        }
        (min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Euclidean distance between two vertices
    pub fn get_distance(&self, v1: Position, v2: Position) -> Result<T, GraphError> {
        let from = self.get_vertex(v1)?;
        let to = self.get_vertex(v2)?;
        Ok(euclidean(from.x(), from.y(), to.x(), to.y()))
    }

    /// Straight-line distance estimate in cost space
    ///
    /// Same computation as get_distance, surfaced as f64 so it can be
    /// combined with edge costs. Only admissible when edge costs are
    /// commensurate with coordinate distance, which is up to the caller.
    pub fn get_heuristic(&self, from: Position, to: Position) -> Result<f64, GraphError> {
        let distance = self.get_distance(from, to)?;
        Ok(num_traits::cast(distance).unwrap_or(f64::INFINITY))
    }

    /// Derived geometric length of an edge
    pub fn edge_length(&self, edge: &Edge) -> Result<T, GraphError> {
        self.get_distance(edge.source(), edge.destination())
    }

    /// Edges along an explicit position sequence
    ///
    /// For each consecutive pair the first outgoing edge (in insertion
    /// order) whose destination matches is taken; parallel edges beyond
    /// the first are ignored. Pairs with no connecting edge contribute
    /// nothing.
    pub fn get_path_edges(&self, path: &[Position]) -> Result<Vec<&Edge>, GraphError> {
        let mut path_edges = Vec::new();
        for pair in path.windows(2) {
            let vertex = self.get_vertex(pair[0])?;
            self.get_vertex(pair[1])?;
            if let Some(edge) = vertex
                .edges()
                .iter()
                .find(|edge| edge.destination() == pair[1])
            {
                path_edges.push(edge);
            }
        }
        Ok(path_edges)
    }

    /// Descriptor projection of get_path_edges
    pub fn get_path_edge_elements(&self, path: &[Position]) -> Result<Vec<EdgeElement>, GraphError> {
        let edges = self.get_path_edges(path)?;
        Ok(edges
            .into_iter()
            .map(|edge| (edge.source(), edge.destination(), edge.cost()))
            .collect())
    }

    /// Sum of edge costs along an explicit path
    pub fn get_path_cost(&self, path: &[Position]) -> Result<f64, GraphError> {
        let edges = self.get_path_edges(path)?;
        Ok(edges.iter().map(|edge| edge.cost()).sum())
    }

    /// Sum of derived edge lengths along an explicit path
    pub fn get_path_distance(&self, path: &[Position]) -> Result<T, GraphError> {
        let edges = self.get_path_edges(path)?;
        let mut distance = T::zero();
        for edge in edges {
            distance = distance + self.edge_length(edge)?;
        }
        Ok(distance)
    }

    /// Positions reachable from start, treating every edge as undirected
    /// Iterative depth-first search; the visited set is local to the call
    fn reachable_from(&self, start: Position) -> FxHashSet<Position> {
        let mut adjacency: FxHashMap<Position, Vec<Position>> = FxHashMap::default();
        for vertex in self.vertices.values() {
            for edge in vertex.edges() {
                adjacency.entry(edge.source()).or_default().push(edge.destination());
                adjacency.entry(edge.destination()).or_default().push(edge.source());
            }
        }

        let mut visited = FxHashSet::default();
        let mut stack = vec![start];
        while let Some(position) = stack.pop() {
            if !visited.insert(position) {
                continue;
            }
            if let Some(neighbors) = adjacency.get(&position) {
                for &neighbor in neighbors {
                    if !visited.contains(&neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }
        visited
    }

    /// Whether a path of edges (in either direction) links the two vertices
    pub fn are_vertices_connected(
        &self,
        start_position: Position,
        end_position: Position,
    ) -> Result<bool, GraphError> {
        self.get_vertex(start_position)?;
        self.get_vertex(end_position)?;
        Ok(self.reachable_from(start_position).contains(&end_position))
    }

    /// Whether the whole graph forms a single component
    /// Vacuously true for an empty graph
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.vertices.keys().next() else {
            return true;
        };
        let visited = self.reachable_from(start);
        self.vertices.keys().all(|position| visited.contains(position))
    }

    /// Position of the vertex closest to the given point
    pub fn nearest_vertex(&self, x: T, y: T) -> Result<Position, GraphError> {
        if self.vertices.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let mut tree: KdTree<f64, Position, [f64; 2]> = KdTree::new(2);
        for vertex in self.vertices.values() {
            let vx = num_traits::cast(vertex.x()).unwrap_or(f64::INFINITY);
            let vy = num_traits::cast(vertex.y()).unwrap_or(f64::INFINITY);
            tree.add([vx, vy], vertex.position())?;
        }
        let qx = num_traits::cast(x).unwrap_or(f64::INFINITY);
        let qy = num_traits::cast(y).unwrap_or(f64::INFINITY);
        let found = tree.nearest(&[qx, qy], 1, &kt_squared_euclidean)?;
        found
            .first()
            .map(|&(_, &position)| position)
            .ok_or(GraphError::EmptyGraph)
    }

    pub fn get_astar_path(&self) -> &[Position] {
        &self.astar_path
    }

    pub fn get_dijkstra_path(&self) -> &[Position] {
        &self.dijkstra_path
    }

    pub fn get_optimal_path(&self) -> &[Position] {
        &self.optimal_path
    }

    pub fn set_astar_path(&mut self, path: Vec<Position>) {
        self.astar_path = path;
    }

    pub fn set_dijkstra_path(&mut self, path: Vec<Position>) {
        self.dijkstra_path = path;
    }

    pub fn set_optimal_path(&mut self, path: Vec<Position>) {
        self.optimal_path = path;
    }

    /// Destroy every vertex and edge and forget cached paths
    pub fn clear_graph(&mut self) {
        self.vertices.clear();
        self.astar_path.clear();
        self.dijkstra_path.clear();
        self.optimal_path.clear();
    }
}

impl<T: Float + fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices.values() {
            writeln!(f, "{vertex}")?;
            for edge in vertex.edges() {
                writeln!(f, "  {edge}")?;
            }
        }
        Ok(())
    }
}
