//! Scanning engine for `lln`: walks a tree and collects files modified
//! within the last few days.
//!
//! Depth is measured from the starting path for every branch, so disabling
//! recursion limits the report to the starting directory's direct children.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod mode;
pub mod options;
pub mod owner;
pub mod stats;

use crate::config::ScanConfig;
use crate::filesystem::Scanner;
use crate::stats::ScanSession;

/// Scan `config.root` and return every qualifying file.
///
/// Per-entry failures never abort the scan; the ones worth reporting end up
/// in [`ScanSession::errors`].
pub fn run(config: &ScanConfig) -> ScanSession {
    log::debug!(
        "scanning {} for files from the last {} days",
        config.root.display(),
        config.days_back
    );
    let session = Scanner::new(config).scan();
    log::debug!(
        "scan finished: {} files, {} errors",
        session.len(),
        session.errors.len()
    );
    session
}
