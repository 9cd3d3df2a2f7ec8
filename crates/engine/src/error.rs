use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-entry failure seen while scanning. None of these abort a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The entry disappeared between being listed and being inspected.
    #[error("No such file or directory: '{path}'")]
    Vanished { path: PathBuf },

    #[error("Permission denied: '{path}'")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source}: '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Walker failure with no underlying I/O error, e.g. a symbolic link loop.
    #[error("{source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

impl ScanError {
    /// Classify an I/O failure on `path` by its error kind.
    pub fn classify(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::Vanished { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Classify a walker error, attributing it to `fallback` when it names no path.
    pub fn from_walk(err: ignore::Error, fallback: &Path) -> Self {
        let path = walk_error_path(&err).unwrap_or(fallback).to_path_buf();
        if let Some(io_err) = err.io_error() {
            let source = io::Error::new(io_err.kind(), io_err.to_string());
            return Self::classify(&path, source);
        }
        Self::Walk { path, source: err }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Vanished { path }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. }
            | Self::Walk { path, .. } => path,
        }
    }

    pub const fn is_vanished(&self) -> bool {
        matches!(self, Self::Vanished { .. })
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
