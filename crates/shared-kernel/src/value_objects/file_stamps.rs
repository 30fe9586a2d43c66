// crates/shared-kernel/src/value_objects/file_stamps.rs
use chrono::{DateTime, Local};

/// Creation and modification times captured from filesystem metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamps {
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
}

impl FileStamps {
    pub fn new(created: DateTime<Local>, modified: DateTime<Local>) -> Self {
        Self { created, modified }
    }

    /// Birth time is not available on every filesystem; fall back to the
    /// modification time when the platform cannot report it.
    pub fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        let modified = metadata
            .modified()
            .map(DateTime::<Local>::from)
            .unwrap_or_else(|_| Local::now());
        let created = metadata
            .created()
            .map(DateTime::<Local>::from)
            .unwrap_or(modified);
        Self { created, modified }
    }
}
