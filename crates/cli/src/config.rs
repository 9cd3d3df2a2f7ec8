// crates/cli/src/config.rs
use crate::args::Args;
use anyhow::Context;
pub use lln_engine::config::{ScanConfig, ScanConfigBuilder};
use lln_engine::options::SortKey;

/// Everything one invocation needs: what to scan and how to order the report.
#[derive(Debug, Clone)]
pub struct Config {
    pub scan: ScanConfig,
    pub sort_by: SortKey,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> anyhow::Result<Self> {
        let root = match args.dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("cannot determine current working directory")?,
        };

        let scan = ScanConfigBuilder::default()
            .root(root)
            .recursive(!args.no_recursion)
            .show_hidden(args.all)
            .days_back(args.days_back)
            .skip_symbolic(!args.show_symbolic)
            .debug(args.debug)
            .build()
            .context("failed to build scan config")?;

        Ok(Self {
            scan,
            sort_by: args.sort_by.into(),
        })
    }
}
