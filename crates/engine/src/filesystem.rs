use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::mode::filemode;
use crate::owner::{IdResolver, SystemIds};
use crate::stats::{FileRecord, ScanSession};
use chrono::{DateTime, Local, Utc};
use ignore::{DirEntry, Walk, WalkBuilder};
use std::io;
use std::os::unix::fs::MetadataExt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Display format of [`FileRecord::modified`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format `mtime` in local time, or `None` if it is outside the representable range.
pub fn format_mtime(mtime: SystemTime) -> Option<String> {
    let since_epoch = mtime.duration_since(UNIX_EPOCH).ok()?;
    let secs = i64::try_from(since_epoch.as_secs()).ok()?;
    let utc = DateTime::<Utc>::from_timestamp(secs, since_epoch.subsec_nanos())?;
    Some(utc.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string())
}

/// Depth-first walker that collects recently modified files.
///
/// The starting path is taken as given: it is followed if it is a symbolic link
/// and is never treated as hidden. Every entry found below it goes through the
/// hidden, symbolic-link and age filters.
pub struct Scanner<'a, R = SystemIds> {
    config: &'a ScanConfig,
    cutoff: SystemTime,
    ids: R,
}

impl<'a> Scanner<'a, SystemIds> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self::with_resolver(config, SystemIds::new())
    }
}

impl<'a, R: IdResolver> Scanner<'a, R> {
    pub fn with_resolver(config: &'a ScanConfig, ids: R) -> Self {
        Self {
            config,
            cutoff: config.cutoff(),
            ids,
        }
    }

    /// Sequential walk over the root. Hidden entries are pruned with their
    /// subtrees, and symbolic links are either dropped or followed.
    fn walker(&self) -> Walk {
        let config = self.config;
        let mut builder = WalkBuilder::new(&config.root);

        builder
            .standard_filters(false)
            .hidden(!config.show_hidden)
            .follow_links(!config.skip_symbolic)
            .max_depth((!config.recursive).then_some(1));

        if config.skip_symbolic {
            builder.filter_entry(|entry| !entry.path_is_symlink());
        }

        builder.build()
    }

    /// Scan from the configured root into a fresh session.
    pub fn scan(&mut self) -> ScanSession {
        let mut session = ScanSession::new();
        let config = self.config;

        for entry in self.walker() {
            match entry {
                Ok(entry) => self.visit(&entry, &mut session),
                Err(err) => self.absorb(ScanError::from_walk(err, &config.root), &mut session),
            }
        }
        session
    }

    /// Record one walked entry if it is a file inside the age window.
    /// Directories are only traversed, never reported.
    pub fn visit(&mut self, entry: &DirEntry, session: &mut ScanSession) {
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return;
        }

        match self.inspect(entry) {
            Ok(Some(record)) => session.push(record),
            Ok(None) => {}
            Err(err) => self.absorb(err, session),
        }
    }

    /// Build a record for a non-directory entry, or `None` if it is too old.
    fn inspect(&mut self, entry: &DirEntry) -> Result<Option<FileRecord>> {
        let path = entry.path();
        let meta = entry
            .metadata()
            .map_err(|e| ScanError::from_walk(e, path))?;
        let mtime = meta.modified().map_err(|e| ScanError::classify(path, e))?;
        if mtime < self.cutoff {
            return Ok(None);
        }

        let modified = format_mtime(mtime).ok_or_else(|| ScanError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, "modification time out of range"),
        })?;

        Ok(Some(FileRecord::new(
            path.to_path_buf(),
            filemode(meta.mode()),
            modified,
            self.ids.owner_or_id(meta.uid()),
            self.ids.group_or_id(meta.gid()),
            meta.len(),
        )))
    }

    fn absorb(&self, err: ScanError, session: &mut ScanSession) {
        match &err {
            ScanError::Vanished { path } => {
                log::trace!("vanished before it could be read: {}", path.display());
                return;
            }
            ScanError::PermissionDenied { .. } => {
                if self.config.debug {
                    log::warn!("Permission error on path {}", err.path().display());
                }
            }
            ScanError::Io { .. } | ScanError::Walk { .. } => {
                if self.config.debug {
                    log::warn!("Error: {err}");
                }
            }
        }
        session.record_error(err);
    }
}
