// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod logging;
pub mod options;
pub mod presentation;

use anyhow::Context;

use crate::config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan and print the report for one invocation.
///
/// # Errors
///
/// Fails only if the report cannot be written to stdout; traversal problems
/// are absorbed by the engine.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let session = lln_engine::run(&config.scan);
    presentation::print_report(session, config.sort_by, config.scan.days_back)
        .context("failed to write report")
}
