//! Binary that colors a fixed set of maps under every algorithm and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `coloring_fixture`
//!
//! Output: key=value lines, one block per (case, algorithm).

use lock_tests::graph_helpers::{clique_with_pendants, map_text, random_graph};
use mapcolor_harness::input::parse_instance;
use mapcolor_harness::output::format_lines;
use mapcolor_harness::runner::{run, RunOptions};
use mapcolor_search::policy::Algorithm;

fn main() {
    let cases = [
        ("triangle", "3 a\nA: B, C.\nB: A, C.\nC: A, B.\n".to_string()),
        ("k5_pendants", map_text(&clique_with_pendants(5, 2), 'a')),
        ("random_12", map_text(&random_graph(0x5eed, 12, 0.35), 'a')),
    ];

    for (case, text) in &cases {
        let instance = parse_instance(text).expect("fixture map parses");
        for algorithm in Algorithm::ALL {
            let report =
                run(&instance, algorithm, RunOptions { audit: true }).expect("run succeeds");
            let prefix = format!("{case}.{}", algorithm.selector());
            println!("{prefix}.outcome={}", report.result.outcome.as_str());
            println!("{prefix}.attempts={}", report.result.stats.attempts);
            println!("{prefix}.backtracks={}", report.result.stats.backtracks);
            println!("{prefix}.wipeouts={}", report.result.stats.wipeouts);
            println!("{prefix}.graph_digest={}", report.graph_digest);
            println!(
                "{prefix}.coloring_digest={}",
                report
                    .coloring_digest
                    .as_ref()
                    .map_or("none", |d| d.as_str())
            );
            println!(
                "{prefix}.report_digest={}",
                report.digest().expect("report canonicalizes")
            );
            println!("{prefix}.lines={}", format_lines(&report.regions).join("|"));
        }
    }
}
