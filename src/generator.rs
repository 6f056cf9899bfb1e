use num_traits::Float;
use rand::Rng;

use crate::graph::{EdgeElement, VertexElement};


/// Generate a random mesh as vertex and edge descriptors
///
/// Positions run 0..num_vertices with coordinates drawn from
/// 1..=max_bound, and edges connect uniformly random endpoint pairs with
/// integral costs below max_cost. The output feeds Graph::create_mesh or
/// the graph file writer directly. Zero requested vertices yields empty
/// descriptor lists.
pub fn random_mesh<T, R>(
    num_vertices: u32,
    num_edges: usize,
    max_bound: u32,
    max_cost: u32,
    rng: &mut R,
) -> (Vec<VertexElement<T>>, Vec<EdgeElement>)
where
    T: Float,
    R: Rng + ?Sized,
{
    if num_vertices == 0 {
        return (Vec::new(), Vec::new());
    }

    let mut vertices = Vec::with_capacity(num_vertices as usize);
    for position in 0..num_vertices {
        let x = 1 + rng.random_range(0..max_bound);
        let y = 1 + rng.random_range(0..max_bound);
        vertices.push((
            position,
            T::from(x).unwrap_or_else(T::zero),
            T::from(y).unwrap_or_else(T::zero),
        ));
    }

    let mut edges = Vec::with_capacity(num_edges);
    for _ in 0..num_edges {
        let source = rng.random_range(0..num_vertices);
        let destination = rng.random_range(0..num_vertices);
        let cost = rng.random_range(0..max_cost) as f64;
        edges.push((source, destination, cost));
    }

    (vertices, edges)
}
