//! Append-only duplicate-suppression log.
//!
//! Each bot action is keyed by an identifier (a feed link or a tweet id).
//! Identifiers that have already been acted upon are recorded in a plain-text
//! file, one identifier per line, UTF-8, never rotated or compacted. A lookup
//! reads the whole file and scans for an exact line match; this is O(file
//! size) per check, which is fine for the small batches (tens of items) this
//! bot processes per run.
//!
//! There is a deliberate check-then-act gap between [`DedupLog::contains`] and
//! [`DedupLog::record`]: a crash between the two, or a concurrent run against
//! the same file, can produce a duplicate action on the next run. The bot
//! assumes at most one instance runs at a time against a given log file.

use log::warn;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// A line-oriented, append-only log of identifiers already acted upon.
#[derive(Debug, Clone)]
pub struct DedupLog {
    path: PathBuf,
}

impl DedupLog {
    /// Creates a handle for the log file at `path`. The file itself is only
    /// created on the first [`record`](DedupLog::record).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DedupLog { path: path.into() }
    }

    /// Returns true if `id` has already been recorded in this log.
    ///
    /// A missing log file means nothing has been recorded yet, so this returns
    /// false rather than an error. Any other read failure is logged and also
    /// treated as "not seen" -- the worst case is a duplicate action, which
    /// the upstream service tolerates.
    pub fn contains(&self, id: &str) -> bool {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents.lines().any(|line| line == id),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                warn!(
                    "Failed to read dedup log {}: {}",
                    self.path.display(),
                    e
                );
                false
            }
        }
    }

    /// Appends `id` on its own line, creating the file if absent.
    ///
    /// Callers log a failure and continue: the action this record refers to
    /// has already succeeded upstream, so losing the record only risks a
    /// future duplicate.
    pub fn record(&self, id: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{}", id)
    }
}
