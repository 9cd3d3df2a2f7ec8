use crate::stats::FileRecord;

/// Secondary ordering applied inside each file-type group of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Full path as traversed.
    #[default]
    Filename,
    /// Formatted modification timestamp.
    Created,
    /// Size display string, compared lexically.
    Size,
    User,
    Group,
}

impl SortKey {
    pub fn field<'a>(&self, record: &'a FileRecord) -> &'a str {
        match self {
            Self::Filename => &record.path_display,
            Self::Created => &record.modified,
            Self::Size => &record.size_display,
            Self::User => &record.owner,
            Self::Group => &record.group,
        }
    }
}
