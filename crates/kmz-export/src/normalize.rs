//! Graph-wide extrema used to scale icon sizes and line widths.

use kmz_core::Graph;

#[cfg(not(feature = "parallel"))]
use kmz_core::{Edge, Node};

/// Size and weight extrema for one export run.
///
/// The node and edge passes are independent associative reductions; with the
/// `parallel` feature they run concurrently on Rayon's thread pool and
/// produce identical results in any evaluation order.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScaleStats {
    /// Largest node size in the graph; 0 when the graph has no nodes or all
    /// sizes are 0.
    pub max_node_size:   f32,
    /// Smallest strictly positive edge weight; 0 when no edge has one.
    /// A zero-weight edge never becomes the minimum, whatever its position
    /// in iteration order.
    pub min_edge_weight: f64,
    /// Largest positive edge weight; 0 when no edge has one.
    pub max_edge_weight: f64,
}

impl ScaleStats {
    /// Single pass over nodes and single pass over edges.
    pub fn compute(graph: &Graph) -> Self {
        #[cfg(not(feature = "parallel"))]
        {
            let max_node_size = max_size(graph.nodes());
            let (min_edge_weight, max_edge_weight) = edge_extrema(graph.edges());
            Self { max_node_size, min_edge_weight, max_edge_weight }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let (max_node_size, (min_edge_weight, max_edge_weight)) = rayon::join(
                || {
                    graph
                        .nodes()
                        .par_iter()
                        .map(|n| n.size)
                        .reduce(|| 0.0, |a, b| if b > a { b } else { a })
                },
                || {
                    graph
                        .edges()
                        .par_iter()
                        .map(|e| (positive(e.weight), e.weight))
                        .reduce(
                            || (0.0, 0.0),
                            |(amin, amax), (bmin, bmax)| {
                                (merge_min(amin, bmin), merge_max(amax, bmax))
                            },
                        )
                },
            );
            Self { max_node_size, min_edge_weight, max_edge_weight }
        }
    }

    /// All edge weights are effectively equal (or there are no edges).
    pub fn uniform_weights(&self) -> bool {
        self.min_edge_weight == self.max_edge_weight
    }
}

// Weight reductions ignore non-positive weights: `positive` maps them to 0,
// and `merge_min` treats 0 as "unset".  This keeps both folds associative
// and commutative, which the parallel path requires.

fn positive(w: f64) -> f64 {
    if w > 0.0 { w } else { 0.0 }
}

fn merge_max(a: f64, b: f64) -> f64 {
    if b > a { b } else { a }
}

fn merge_min(a: f64, b: f64) -> f64 {
    match (a == 0.0, b == 0.0) {
        (true, _)      => b,
        (_, true)      => a,
        (false, false) => a.min(b),
    }
}

#[cfg(not(feature = "parallel"))]
fn max_size(nodes: &[Node]) -> f32 {
    nodes.iter().fold(0.0, |max, n| if n.size > max { n.size } else { max })
}

#[cfg(not(feature = "parallel"))]
fn edge_extrema(edges: &[Edge]) -> (f64, f64) {
    edges.iter().fold((0.0, 0.0), |(min, max), e| {
        (merge_min(min, positive(e.weight)), merge_max(max, e.weight))
    })
}
