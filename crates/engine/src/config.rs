use derive_builder::Builder;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanConfig {
    /// Starting path, either a directory or a single file.
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "true")]
    pub recursive: bool,
    #[builder(default)]
    pub show_hidden: bool,
    #[builder(default = "3")]
    pub days_back: u64,
    #[builder(default = "true")]
    pub skip_symbolic: bool,
    #[builder(default)]
    pub debug: bool,
    /// Reference instant the age window is measured back from.
    #[builder(default = "SystemTime::now()")]
    pub now: SystemTime,
}

impl ScanConfig {
    /// Oldest modification time still inside the age window.
    pub fn cutoff(&self) -> SystemTime {
        let window = Duration::from_secs(self.days_back.saturating_mul(SECONDS_PER_DAY));
        self.now.checked_sub(window).unwrap_or(UNIX_EPOCH)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            recursive: true,
            show_hidden: false,
            days_back: 3,
            skip_symbolic: true,
            debug: false,
            now: SystemTime::now(),
        }
    }
}
