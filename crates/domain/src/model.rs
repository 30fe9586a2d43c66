// crates/domain/src/model.rs
use chrono::{DateTime, Local};
use poem_site_shared_kernel::DocPath;
use serde::Serialize;

/// Resolved metadata for one document.
///
/// `created`/`modified` are already reconciled between the front-matter
/// header and the filesystem stamps; `title` already fell back to the
/// document name when the header had none.
#[derive(Debug, Clone, Serialize)]
pub struct PoemMeta {
    pub title: String,
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    /// Unrecognized header fields, preserved opaquely for pass-through.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A document together with its metadata and body. Built fresh on every
/// scan and discarded with it; nothing is cached between requests.
#[derive(Debug, Clone, Serialize)]
pub struct PoemEntry {
    pub path: DocPath,
    pub meta: PoemMeta,
    pub body: String,
}
