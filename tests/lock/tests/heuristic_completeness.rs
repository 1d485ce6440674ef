//! Heuristics change exploration order only: on seeded random graphs every
//! algorithm agrees with a brute-force oracle, leaves a valid coloring on
//! success and pristine regions on failure, and satisfies the auditor.

use lock_tests::graph_helpers::{
    brute_force_colorable, clique_with_pendants, fresh_regions, random_graph,
};
use mapcolor_kernel::graph::ConstraintGraph;
use mapcolor_search::audit::{verify_coloring, InvariantAuditor};
use mapcolor_search::engine::ColoringEngine;
use mapcolor_search::outcome::ColoringOutcome;
use mapcolor_search::policy::Algorithm;

fn corpus() -> Vec<ConstraintGraph> {
    let mut graphs = Vec::new();
    for seed in 0..40u64 {
        let n = 1 + (seed as usize % 8);
        for density in [0.3, 0.6, 0.9] {
            graphs.push(random_graph(seed, n, density));
        }
    }
    graphs.push(clique_with_pendants(5, 3));
    graphs.push(clique_with_pendants(4, 4));
    graphs.push(ConstraintGraph::complete(6));
    graphs
}

#[test]
fn outcome_matches_oracle_for_all_algorithms() {
    let mut unsat_seen = 0;
    for (i, graph) in corpus().iter().enumerate() {
        let expected = if brute_force_colorable(graph) {
            ColoringOutcome::Colored
        } else {
            unsat_seen += 1;
            ColoringOutcome::Unsatisfiable
        };
        for algorithm in Algorithm::ALL {
            let mut regions = fresh_regions(graph.node_count());
            let result = ColoringEngine::new(algorithm.policy())
                .unwrap()
                .color(graph, &mut regions)
                .unwrap();
            assert_eq!(result.outcome, expected, "graph #{i} under {algorithm:?}");
            match result.outcome {
                ColoringOutcome::Colored => {
                    assert!(
                        verify_coloring(graph, &regions).is_empty(),
                        "graph #{i} under {algorithm:?}"
                    );
                }
                ColoringOutcome::Unsatisfiable => {
                    assert!(
                        regions.iter().all(|r| r.is_pristine()),
                        "graph #{i} under {algorithm:?} left state behind"
                    );
                }
            }
        }
    }
    assert!(unsat_seen >= 2, "corpus should include unsatisfiable graphs");
}

#[test]
fn auditor_clean_on_random_graphs() {
    for seed in 100..130u64 {
        let graph = random_graph(seed, 10, 0.45);
        for algorithm in Algorithm::ALL {
            let mut regions = fresh_regions(graph.node_count());
            let mut auditor = InvariantAuditor::new();
            ColoringEngine::new(algorithm.policy())
                .unwrap()
                .color_observed(&graph, &mut regions, &mut auditor)
                .unwrap();
            assert!(
                auditor.is_clean(),
                "seed {seed} under {algorithm:?}: {:?}",
                auditor.violations()
            );
        }
    }
}

#[test]
fn restored_regions_can_be_reused() {
    let graph = clique_with_pendants(5, 2);
    let mut regions = fresh_regions(graph.node_count());
    for algorithm in Algorithm::ALL {
        let engine = ColoringEngine::new(algorithm.policy()).unwrap();
        let first = engine.color(&graph, &mut regions).unwrap();
        let second = engine.color(&graph, &mut regions).unwrap();
        assert_eq!(first, second, "{algorithm:?}");
        assert_eq!(first.outcome, ColoringOutcome::Unsatisfiable);
    }
}

#[test]
fn stats_stay_within_structural_bounds() {
    for seed in 200..230u64 {
        let graph = random_graph(seed, 9, 0.5);
        let n = graph.node_count();
        for algorithm in Algorithm::ALL {
            let mut regions = fresh_regions(n);
            let result = ColoringEngine::new(algorithm.policy())
                .unwrap()
                .color(&graph, &mut regions)
                .unwrap();
            let stats = result.stats;
            assert!(stats.max_depth <= n, "seed {seed} under {algorithm:?}");
            if result.is_colored() {
                assert!(stats.attempts >= n as u64, "seed {seed} under {algorithm:?}");
            }
            if algorithm.policy().mrv {
                assert!(stats.frontier_high_water <= n);
            } else {
                assert_eq!(stats.frontier_high_water, 0);
            }
            if !algorithm.policy().forward_check {
                assert_eq!(stats.wipeouts, 0);
            }
        }
    }
}
