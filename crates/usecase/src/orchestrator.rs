// crates/usecase/src/orchestrator.rs
use poem_site_domain::model::{PoemEntry, PoemMeta};
use poem_site_domain::options::SortOption;
use poem_site_domain::tree::{self, TreeNode};
use poem_site_domain::{random, sort};
use poem_site_ports::{DocumentDto, DocumentSource, ScanPlan};
use poem_site_shared_kernel::{ApplicationError, DocPath, ErrorContext, Result};

/// Everything the presentation layer needs for one render: the pruned
/// navigation forest plus the flat list in the requested global order.
#[derive(Debug, Clone)]
pub struct LibraryView {
    pub tree: Vec<TreeNode>,
    pub entries: Vec<PoemEntry>,
}

/// Request-scoped query facade over a document source. Every call performs
/// a fresh scan so filesystem edits show up immediately; no state survives
/// between calls.
pub struct LibraryQuery<'a> {
    source: &'a dyn DocumentSource,
}

impl<'a> LibraryQuery<'a> {
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self { source }
    }

    pub fn run(&self, plan: &ScanPlan, option: SortOption) -> Result<LibraryView> {
        let entries = sort::sorted(self.load(plan)?, option);
        let tree = tree::build_forest(&entries, option);
        Ok(LibraryView { tree, entries })
    }

    /// Exact-match lookup: all segments equal, in order.
    pub fn find(&self, plan: &ScanPlan, segments: &[String]) -> Result<PoemEntry> {
        self.load(plan)?
            .into_iter()
            .find(|entry| entry.path.segments() == segments)
            .ok_or_else(|| {
                ApplicationError::DocumentNotFound { path: segments.join("/") }.into()
            })
    }

    /// All document paths in scan order.
    pub fn paths(&self, plan: &ScanPlan) -> Result<Vec<DocPath>> {
        Ok(self.load(plan)?.into_iter().map(|entry| entry.path).collect())
    }

    /// Uniform random pick, plus the full path list for the caller's
    /// payload. An empty corpus is an explicit error, not an invalid path.
    pub fn random_path(&self, plan: &ScanPlan, entropy: u64) -> Result<(DocPath, Vec<DocPath>)> {
        let paths = self.paths(plan)?;
        let picked = random::pick(&paths, entropy)
            .cloned()
            .ok_or(ApplicationError::EmptyCorpus)?;
        Ok((picked, paths))
    }

    fn load(&self, plan: &ScanPlan) -> Result<Vec<PoemEntry>> {
        let documents = self
            .source
            .collect(plan)
            .context("collecting poem documents")?;
        Ok(documents.into_iter().map(dto_to_entry).collect())
    }
}

fn dto_to_entry(dto: DocumentDto) -> PoemEntry {
    let meta = PoemMeta {
        title: dto.title,
        created: dto.created,
        modified: dto.modified,
        description: dto.description,
        tags: dto.tags,
        extra: dto.extra,
    };
    PoemEntry {
        path: DocPath::new(dto.segments),
        meta,
        body: dto.body,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};
    use poem_site_shared_kernel::PoemSiteError;

    use super::*;

    struct StubSource {
        documents: Vec<DocumentDto>,
    }

    impl StubSource {
        fn new(documents: Vec<DocumentDto>) -> Self {
            Self { documents }
        }
    }

    impl DocumentSource for StubSource {
        fn collect(&self, _plan: &ScanPlan) -> Result<Vec<DocumentDto>> {
            Ok(self.documents.clone())
        }
    }

    fn date(year: i32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .expect("valid test date")
    }

    fn dto(segments: &[&str], title: &str, created: DateTime<Local>) -> DocumentDto {
        DocumentDto {
            segments: segments.iter().map(|s| s.to_string()).collect(),
            title: title.to_string(),
            description: None,
            tags: Vec::new(),
            created,
            modified: created,
            extra: serde_json::Map::new(),
            body: "body".to_string(),
        }
    }

    fn plan() -> ScanPlan {
        ScanPlan::new("content", "mdx")
    }

    #[test]
    fn run_sorts_entries_and_builds_the_forest() {
        let stub = StubSource::new(vec![
            dto(&["reflections"], "On Time", date(2021)),
            dto(&["nature", "ocean"], "ocean", date(2022)),
        ]);
        let query = LibraryQuery::new(&stub);

        let view = query.run(&plan(), SortOption::default()).expect("run succeeds");
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].meta.title, "ocean");
        assert_eq!(view.entries[1].meta.title, "On Time");
        assert_eq!(view.tree.len(), 2);
        assert_eq!(view.tree[0].name(), "nature");
    }

    #[test]
    fn find_matches_every_segment_in_order() {
        let stub = StubSource::new(vec![
            dto(&["nature", "ocean"], "ocean", date(2022)),
            dto(&["ocean"], "shallows", date(2022)),
        ]);
        let query = LibraryQuery::new(&stub);

        let hit = query
            .find(&plan(), &["nature".to_string(), "ocean".to_string()])
            .expect("lookup succeeds");
        assert_eq!(hit.meta.title, "ocean");

        let miss = query
            .find(&plan(), &["nature".to_string()])
            .expect_err("partial path must not match");
        assert!(matches!(
            miss,
            PoemSiteError::Application(ApplicationError::DocumentNotFound { .. })
        ));
    }

    #[test]
    fn random_path_on_empty_corpus_is_an_explicit_signal() {
        let stub = StubSource::new(Vec::new());
        let query = LibraryQuery::new(&stub);

        let err = query.random_path(&plan(), 7).expect_err("empty corpus errors");
        assert!(matches!(
            err,
            PoemSiteError::Application(ApplicationError::EmptyCorpus)
        ));
    }

    #[test]
    fn random_path_returns_pick_and_full_listing() {
        let stub = StubSource::new(vec![
            dto(&["a"], "a", date(2020)),
            dto(&["b"], "b", date(2020)),
        ]);
        let query = LibraryQuery::new(&stub);

        let (picked, all) = query.random_path(&plan(), 1).expect("pick succeeds");
        assert_eq!(all.len(), 2);
        assert_eq!(picked, all[1]);
    }
}
