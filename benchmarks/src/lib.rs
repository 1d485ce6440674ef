//! Shared graph generators for mapcolor benchmark suites.
//!
//! All generators are deterministic so runs are comparable.

use mapcolor_kernel::graph::{ConstraintGraph, GraphBuilder};
use mapcolor_kernel::region::{regions_from_names, RegionState};

/// King's-move grid: each cell touches its 8 neighbors. Always 4-colorable,
/// and every interior region has degree 8, so it resembles a dense map.
///
/// # Panics
///
/// Never in practice; edges are generated in range.
#[must_use]
pub fn king_grid(rows: usize, cols: usize) -> ConstraintGraph {
    let idx = |r: usize, c: usize| r * cols + c;
    let mut builder = GraphBuilder::new(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                builder.add_edge(idx(r, c), idx(r, c + 1)).expect("in range");
            }
            if r + 1 < rows {
                builder.add_edge(idx(r, c), idx(r + 1, c)).expect("in range");
                if c + 1 < cols {
                    builder
                        .add_edge(idx(r, c), idx(r + 1, c + 1))
                        .expect("in range");
                }
                if c > 0 {
                    builder
                        .add_edge(idx(r, c), idx(r + 1, c - 1))
                        .expect("in range");
                }
            }
        }
    }
    builder.build()
}

/// Path of `tail` nodes hanging off a `K_5` at the end of the index order.
///
/// Unsatisfiable, and plain backtracking only discovers it after coloring
/// the whole path first.
///
/// # Panics
///
/// Never in practice; edges are generated in range.
#[must_use]
pub fn tail_then_k5(tail: usize) -> ConstraintGraph {
    let n = tail + 5;
    let mut builder = GraphBuilder::new(n);
    for i in 1..tail {
        builder.add_edge(i - 1, i).expect("in range");
    }
    for u in tail..n {
        for v in (u + 1)..n {
            builder.add_edge(u, v).expect("in range");
        }
    }
    if tail > 0 {
        builder.add_edge(tail - 1, tail).expect("in range");
    }
    builder.build()
}

/// Fresh regions named `R0..R{n-1}`.
#[must_use]
pub fn fresh_regions(node_count: usize) -> Vec<RegionState> {
    let names: Vec<String> = (0..node_count).map(|i| format!("R{i}")).collect();
    regions_from_names(&names)
}

/// Map text for `graph` with regions `R0..` and the given selector.
#[must_use]
pub fn map_text(graph: &ConstraintGraph, selector: char) -> String {
    let mut text = format!("{} {selector}\n", graph.node_count());
    for u in 0..graph.node_count() {
        let neighbors: Vec<String> = graph.neighbors(u).iter().map(|v| format!("R{v}")).collect();
        text.push_str(&format!("R{u}: {}.\n", neighbors.join(", ")));
    }
    text
}
