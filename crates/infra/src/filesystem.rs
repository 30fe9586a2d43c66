// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use poem_site_ports::{DocumentDto, DocumentSource, ScanPlan};
use poem_site_shared_kernel::{FileStamps, InfrastructureError, Result};
use tracing::warn;

use crate::metadata;

/// Filesystem adapter implementing the `DocumentSource` port. Stateless:
/// every `collect` call walks the corpus from scratch.
#[derive(Debug, Default)]
pub struct FsDocumentSource;

impl FsDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for FsDocumentSource {
    fn collect(&self, plan: &ScanPlan) -> Result<Vec<DocumentDto>> {
        // The root itself must be readable; anything below it degrades to
        // partial results instead of failing the scan.
        std::fs::read_dir(&plan.root).map_err(|source| InfrastructureError::DirectoryRead {
            path: plan.root.clone(),
            source,
        })?;

        let files = enumerate_files(plan);
        Ok(files
            .iter()
            .filter_map(|path| load_document(path, plan))
            .collect())
    }
}

/// All document files under the root, in canonical path order. The
/// corpus is plain content, not a source tree: git-based filtering is
/// off, hidden entries stay skipped.
fn enumerate_files(plan: &ScanPlan) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(&plan.root);
    builder
        .hidden(true)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false);

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "walk error; subtree skipped");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(plan.extension.as_str()) {
            files.push(path);
        }
    }

    files.sort();
    files
}

fn load_document(path: &Path, plan: &ScanPlan) -> Option<DocumentDto> {
    let mut segments = doc_segments(&plan.root, path)?;

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "document read failed; skipping");
            return None;
        }
    };
    let stat = match std::fs::metadata(path) {
        Ok(stat) => stat,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "document stat failed; skipping");
            return None;
        }
    };

    let stamps = FileStamps::from_metadata(&stat);
    let doc = match metadata::extract(&raw, &stamps) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "front matter rejected; using filename metadata");
            metadata::fallback(raw, &stamps)
        }
    };

    if let Some(slug) = doc.slug
        && let Some(last) = segments.last_mut()
    {
        *last = slug;
    }
    let title = doc
        .title
        .unwrap_or_else(|| segments.last().cloned().unwrap_or_default());

    Some(DocumentDto {
        segments,
        title,
        description: doc.description,
        tags: doc.tags,
        created: doc.created,
        modified: doc.modified,
        extra: doc.extra,
        body: doc.body,
    })
}

/// Path segments relative to the root, extension stripped from the final
/// segment. Non-UTF-8 names cannot become URL segments and are skipped.
fn doc_segments(root: &Path, path: &Path) -> Option<Vec<String>> {
    let relative = path.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in relative.components() {
        match component.as_os_str().to_str() {
            Some(name) => segments.push(name.to_string()),
            None => {
                warn!(path = %path.display(), "non-utf8 path component; skipping document");
                return None;
            }
        }
    }
    let stem = path.file_stem()?.to_str()?.to_string();
    *segments.last_mut()? = stem;
    Some(segments)
}
