// crates/cli/src/presentation.rs
use lln_engine::options::SortKey;
use lln_engine::stats::{FileRecord, ScanSession};
use std::cmp::Ordering;
use std::io::{self, Write};

/// Width of the permission column.
const MODE_WIDTH: usize = 10;
/// Width of the timestamp column, `YYYY-MM-DD HH:MM`.
const TIME_WIDTH: usize = 16;

/// Regular files rank after every other file type.
fn type_rank(record: &FileRecord) -> char {
    match record.type_indicator() {
        '-' => char::MAX,
        other => other,
    }
}

fn compare(a: &FileRecord, b: &FileRecord, key: SortKey) -> Ordering {
    type_rank(a)
        .cmp(&type_rank(b))
        .then_with(|| key.field(a).cmp(key.field(b)))
}

/// Group records by file type, then order each group lexically by `key`.
pub fn sort_records(records: &mut [FileRecord], key: SortKey) {
    records.sort_by(|a, b| compare(a, b, key));
}

/// Render the report for a finished scan.
pub fn write_report<W: Write>(
    out: &mut W,
    session: ScanSession,
    key: SortKey,
    days_back: u64,
) -> io::Result<()> {
    let ScanSession {
        mut records,
        max_owner_len: owner_w,
        max_group_len: group_w,
        max_size_len: size_w,
        ..
    } = session;
    sort_records(&mut records, key);

    writeln!(out, "Files from last {days_back} days")?;
    if records.is_empty() {
        writeln!(out, "None found...")?;
    }

    for r in &records {
        writeln!(
            out,
            "{:<MODE_WIDTH$} {:<owner_w$} {:<group_w$} {:<TIME_WIDTH$} {:>size_w$} {}",
            r.permissions, r.owner, r.group, r.modified, r.size_display, r.path_display
        )?;
    }
    Ok(())
}

pub fn print_report(session: ScanSession, key: SortKey, days_back: u64) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, session, key, days_back)?;
    stdout.flush()
}
