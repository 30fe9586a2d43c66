// crates/ports/src/store.rs
use std::path::PathBuf;

use chrono::{DateTime, Local};
use poem_site_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling a document scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPlan {
    /// Directory the corpus lives under.
    pub root: PathBuf,
    /// File extension (without dot) identifying documents.
    pub extension: String,
}

impl ScanPlan {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self { root: root.into(), extension: extension.into() }
    }
}

/// DTO representing one document discovered by a scan, metadata already
/// reconciled between the embedded header and the filesystem stamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDto {
    pub segments: Vec<String>,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
    pub extra: serde_json::Map<String, serde_json::Value>,
    pub body: String,
}

/// Port for scanning the document store.
pub trait DocumentSource: Send + Sync {
    fn collect(&self, plan: &ScanPlan) -> Result<Vec<DocumentDto>>;
}
