//! Seeded graph generators, a brute-force oracle, and map-text rendering.
//!
//! Everything here is deterministic in its seed so that failures reproduce
//! exactly.

use mapcolor_kernel::graph::{ConstraintGraph, GraphBuilder};
use mapcolor_kernel::palette::PALETTE_SIZE;
use mapcolor_kernel::region::{regions_from_names, RegionState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Erdős–Rényi graph on `node_count` nodes with edge probability `density`.
///
/// # Panics
///
/// Panics if `density` is outside `0.0..=1.0`.
#[must_use]
pub fn random_graph(seed: u64, node_count: usize, density: f64) -> ConstraintGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new(node_count);
    for u in 0..node_count {
        for v in (u + 1)..node_count {
            if rng.gen_bool(density) {
                builder.add_edge(u, v).unwrap();
            }
        }
    }
    builder.build()
}

/// `K_n` with `pendants` extra nodes each attached to one clique member.
#[must_use]
pub fn clique_with_pendants(clique: usize, pendants: usize) -> ConstraintGraph {
    let mut builder = GraphBuilder::new(clique + pendants);
    for u in 0..clique {
        for v in (u + 1)..clique {
            builder.add_edge(u, v).unwrap();
        }
    }
    for p in 0..pendants {
        builder.add_edge(clique + p, p % clique.max(1)).unwrap();
    }
    builder.build()
}

/// Whether `graph` admits a proper coloring with the palette, by exhaustive
/// enumeration. Only meant for graphs of a handful of nodes.
///
/// # Panics
///
/// Panics if the graph has more than 10 nodes.
#[must_use]
pub fn brute_force_colorable(graph: &ConstraintGraph) -> bool {
    let n = graph.node_count();
    assert!(n <= 10, "brute force oracle limited to 10 nodes, got {n}");
    let mut colors = vec![0usize; n];
    loop {
        if graph.edges().all(|(u, v)| colors[u] != colors[v]) {
            return true;
        }
        // Odometer increment over base PALETTE_SIZE.
        let mut i = 0;
        loop {
            if i == n {
                return false;
            }
            colors[i] += 1;
            if colors[i] < PALETTE_SIZE {
                break;
            }
            colors[i] = 0;
            i += 1;
        }
    }
}

/// Fresh regions named `R0..R{n-1}`.
#[must_use]
pub fn fresh_regions(node_count: usize) -> Vec<RegionState> {
    let names: Vec<String> = (0..node_count).map(|i| format!("R{i}")).collect();
    regions_from_names(&names)
}

/// Render `graph` as map text with regions `R0..` and the given selector.
///
/// Every node gets a declaration line listing all of its neighbors, so the
/// parsed instance has the same edge set (node indices may be permuted by
/// first-appearance order).
#[must_use]
pub fn map_text(graph: &ConstraintGraph, selector: char) -> String {
    let mut text = format!("{} {selector}\n", graph.node_count());
    for u in 0..graph.node_count() {
        let neighbors: Vec<String> = graph
            .neighbors(u)
            .iter()
            .map(|v| format!("R{v}"))
            .collect();
        if neighbors.is_empty() {
            text.push_str(&format!("R{u}.\n"));
        } else {
            text.push_str(&format!("R{u}: {}.\n", neighbors.join(", ")));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_graph() {
        let a: Vec<_> = random_graph(7, 8, 0.5).edges().collect();
        let b: Vec<_> = random_graph(7, 8, 0.5).edges().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn oracle_agrees_on_cliques() {
        assert!(brute_force_colorable(&ConstraintGraph::complete(4)));
        assert!(!brute_force_colorable(&ConstraintGraph::complete(5)));
        assert!(brute_force_colorable(&ConstraintGraph::complete(0)));
    }

    #[test]
    fn pendants_attach_to_clique() {
        let g = clique_with_pendants(5, 3);
        assert_eq!(g.node_count(), 8);
        assert_eq!(g.edge_count(), 10 + 3);
        assert!(g.adjacent(5, 0));
        assert!(g.adjacent(7, 2));
    }
}
