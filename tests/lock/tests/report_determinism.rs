//! Report digests depend only on the instance and algorithm.

use lock_tests::graph_helpers::{map_text, random_graph};
use mapcolor_harness::input::parse_instance;
use mapcolor_harness::report::{read_report_digest, write_report_dir, SCHEMA_VERSION};
use mapcolor_harness::runner::{run, RunOptions};
use mapcolor_search::policy::Algorithm;

#[test]
fn repeated_runs_write_identical_reports() {
    let text = map_text(&random_graph(42, 10, 0.4), 'a');
    let instance = parse_instance(&text).unwrap();
    for algorithm in Algorithm::ALL {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let a = run(&instance, algorithm, RunOptions::default()).unwrap();
        let b = run(&instance, algorithm, RunOptions { audit: true }).unwrap();
        let da = write_report_dir(&a, first.path()).unwrap();
        let db = write_report_dir(&b, second.path()).unwrap();
        assert_eq!(da, db, "{algorithm:?}");
        assert_eq!(
            std::fs::read(first.path().join("report.json")).unwrap(),
            std::fs::read(second.path().join("report.json")).unwrap()
        );
        assert_eq!(read_report_digest(first.path()).unwrap(), da);
    }
}

#[test]
fn graph_digest_is_shared_across_algorithms() {
    let text = map_text(&random_graph(9, 8, 0.5), 'a');
    let instance = parse_instance(&text).unwrap();
    let digests: Vec<_> = Algorithm::ALL
        .iter()
        .map(|&alg| run(&instance, alg, RunOptions::default()).unwrap().graph_digest)
        .collect();
    assert!(digests.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn report_json_parses_with_schema_tag() {
    let instance = parse_instance("2 b\nA: B.\nB.\n").unwrap();
    let report = run(&instance, instance.algorithm, RunOptions::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&report, dir.path()).unwrap();
    let bytes = std::fs::read(dir.path().join("report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["schema_version"], SCHEMA_VERSION);
    assert_eq!(value["algorithm"], "b");
    assert_eq!(value["policy"]["forward_check"], true);
    assert_eq!(value["stats"]["attempts"], 2);
    assert!(value.get("elapsed_ns").is_none());
    let timing = std::fs::read(dir.path().join("timing.json")).unwrap();
    let timing: serde_json::Value = serde_json::from_slice(&timing).unwrap();
    assert!(timing["elapsed_ns"].is_u64());
}
