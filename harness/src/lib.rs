//! mapcolor harness: everything around the search engine.
//!
//! The harness turns a textual map description into a graph and region
//! list, runs the engine, checks the result, and packages it for output.
//! It does NOT implement search logic; that lives in `mapcolor_search`.
//!
//! # Pipeline
//!
//! ```text
//! parse_instance() → run() [engine + optional InvariantAuditor + verify_coloring]
//!   → write_output()            (stdout lines)
//!   → write_report_dir()        (canonical JSON report + digest)
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod input;
pub mod output;
pub mod report;
pub mod runner;
