// crates/cli/src/args.rs
use crate::options::SortBy;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "lln",
    version = crate::VERSION,
    about = "List Long New (lln) - List new files in directory tree"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// File path, leave empty for current working directory
    #[arg(value_hint = ValueHint::AnyPath)]
    pub dir: Option<PathBuf>,

    /// Files from the last N days
    #[arg(short = 'd', long, default_value_t = 3)]
    pub days_back: u64,

    /// Do not ignore entries starting with .
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Show errors and warnings
    #[arg(short = 'v', long)]
    pub debug: bool,

    /// Show symbolic links
    #[arg(short = 'l', long)]
    pub show_symbolic: bool,

    /// Do not list subdirectories recursively
    #[arg(short = 'f', long)]
    pub no_recursion: bool,

    /// Specify file list sort
    #[arg(short = 's', long, value_enum, default_value = "filename")]
    pub sort_by: SortBy,
}
