use crate::error::ScanError;
use std::path::PathBuf;

/// Sizes below this many bytes are shown as [`BELOW_ONE_K`].
pub const BYTES_PER_K: u64 = 1000;
pub const BELOW_ONE_K: &str = "<1K";

/// Size in whole kilobytes (truncated), or `<1K`.
pub fn size_display(size: u64) -> String {
    match size / BYTES_PER_K {
        0 => BELOW_ONE_K.to_string(),
        k => format!("{k}K"),
    }
}

/// One qualifying file, ready to be printed as a report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub path_display: String,
    /// File type indicator followed by the nine permission bits, as in `ls -l`.
    pub permissions: String,
    /// Modification time, `YYYY-MM-DD HH:MM` local time.
    pub modified: String,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub size_display: String,
}

impl FileRecord {
    pub fn new(
        path: PathBuf,
        permissions: String,
        modified: String,
        owner: String,
        group: String,
        size: u64,
    ) -> Self {
        let path_display = path.display().to_string();
        Self {
            path,
            path_display,
            permissions,
            modified,
            owner,
            group,
            size,
            size_display: size_display(size),
        }
    }

    /// First character of the permission string (`-`, `l`, `p`, ...).
    pub fn type_indicator(&self) -> char {
        self.permissions.chars().next().unwrap_or('?')
    }
}

/// Accumulator for a single invocation.
///
/// Column widths are tracked as records arrive so the report can align
/// owner, group and size without a second pass.
#[derive(Debug, Default)]
pub struct ScanSession {
    pub records: Vec<FileRecord>,
    pub max_owner_len: usize,
    pub max_group_len: usize,
    pub max_size_len: usize,
    /// Failures absorbed during traversal, vanished entries excluded.
    pub errors: Vec<ScanError>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FileRecord) {
        self.max_owner_len = self.max_owner_len.max(record.owner.chars().count());
        self.max_group_len = self.max_group_len.max(record.group.chars().count());
        self.max_size_len = self.max_size_len.max(record.size_display.chars().count());
        self.records.push(record);
    }

    pub fn record_error(&mut self, err: ScanError) {
        self.errors.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(owner: &str, group: &str, size: u64) -> FileRecord {
        FileRecord::new(
            PathBuf::from("/srv/data/report.txt"),
            "-rw-r--r--".into(),
            "2024-03-01 12:30".into(),
            owner.into(),
            group.into(),
            size,
        )
    }

    #[test]
    fn size_display_truncates_to_whole_kilobytes() {
        assert_eq!(size_display(0), "<1K");
        assert_eq!(size_display(999), "<1K");
        assert_eq!(size_display(1000), "1K");
        assert_eq!(size_display(1999), "1K");
        assert_eq!(size_display(123_456_789), "123456K");
    }

    #[test]
    fn push_tracks_column_maxima() {
        let mut session = ScanSession::new();
        assert!(session.is_empty());

        session.push(record("www-data", "adm", 10));
        session.push(record("root", "developers", 45_000));

        assert_eq!(session.len(), 2);
        assert_eq!(session.max_owner_len, 8);
        assert_eq!(session.max_group_len, 10);
        assert_eq!(session.max_size_len, 3);
    }

    #[test]
    fn record_exposes_type_indicator_and_display_path() {
        let r = record("root", "root", 1);
        assert_eq!(r.type_indicator(), '-');
        assert_eq!(r.path_display, "/srv/data/report.txt");
        assert_eq!(r.size_display, "<1K");
    }
}
