//! End-to-end scenarios through the harness: parse, run, format.

use std::collections::BTreeSet;

use mapcolor_harness::input::parse_instance;
use mapcolor_harness::output::format_lines;
use mapcolor_harness::runner::{run, RunOptions};
use mapcolor_search::outcome::ColoringOutcome;
use mapcolor_search::policy::Algorithm;

const TRIANGLE: &str = "3 a\nA: B, C.\nB: A, C.\nC: A, B.\n";
const K5: &str = "5 a\nA: B, C, D, E.\nB: A, C, D, E.\nC: A, B, D, E.\nD: A, B, C, E.\nE: A, B, C, D.\n";

#[test]
fn triangle_colors_under_every_algorithm() {
    let instance = parse_instance(TRIANGLE).unwrap();
    for algorithm in Algorithm::ALL {
        let report = run(&instance, algorithm, RunOptions { audit: true }).unwrap();
        assert_eq!(report.result.outcome, ColoringOutcome::Colored, "{algorithm:?}");
        let distinct: BTreeSet<_> = report.regions.iter().map(|r| r.color()).collect();
        assert_eq!(distinct.len(), 3, "{algorithm:?}");
        assert!(distinct.iter().all(Option::is_some));
    }
}

#[test]
fn triangle_output_is_descending() {
    let instance = parse_instance(TRIANGLE).unwrap();
    let report = run(&instance, instance.algorithm, RunOptions::default()).unwrap();
    let lines = format_lines(&report.regions);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("C: "));
    assert!(lines[1].starts_with("B: "));
    assert!(lines[2].starts_with("A: "));
    assert!(lines.iter().all(|l| l.ends_with('.')));
    // First-fit order under plain backtracking.
    assert_eq!(lines, vec!["C: Azul.", "B: Verde.", "A: Vermelho."]);
}

#[test]
fn k5_fails_under_every_algorithm() {
    let instance = parse_instance(K5).unwrap();
    for algorithm in Algorithm::ALL {
        let report = run(&instance, algorithm, RunOptions { audit: true }).unwrap();
        assert_eq!(
            report.result.outcome,
            ColoringOutcome::Unsatisfiable,
            "{algorithm:?}"
        );
        assert!(report.regions.iter().all(|r| r.is_pristine()));
        assert!(format_lines(&report.regions)
            .iter()
            .all(|l| l.ends_with(": Sem cor.")));
    }
}

#[test]
fn undeclared_neighbors_are_colored_too() {
    // D and E only appear as neighbors.
    let instance = parse_instance("2 d\nA: B, D.\nB: E, D.\n").unwrap();
    assert_eq!(instance.names.len(), 4);
    let report = run(&instance, instance.algorithm, RunOptions { audit: true }).unwrap();
    assert!(report.result.is_colored());
    assert!(report.regions.iter().all(|r| r.is_assigned()));
}

#[test]
fn isolated_regions_all_take_red() {
    let instance = parse_instance("3 c\nX.\nY:\nZ.\n").unwrap();
    let report = run(&instance, instance.algorithm, RunOptions::default()).unwrap();
    assert_eq!(
        format_lines(&report.regions),
        vec!["Z: Vermelho.", "Y: Vermelho.", "X: Vermelho."]
    );
}
