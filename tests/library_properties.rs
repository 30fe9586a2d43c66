//! End-to-end properties of the scan → sort → tree pipeline, driven
//! through the real filesystem source over throwaway corpora.

use std::path::Path;

use poem_site_domain::options::{SortField, SortOption, SortOrder};
use poem_site_domain::tree::{self, TreeNode};
use poem_site_infra::FsDocumentSource;
use poem_site_ports::ScanPlan;
use poem_site_shared_kernel::{ApplicationError, PoemSiteError};
use poem_site_usecase::LibraryQuery;
use tempfile::{TempDir, tempdir};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write fixture");
}

fn plan_for(dir: &TempDir) -> ScanPlan {
    ScanPlan::new(dir.path(), "mdx")
}

#[test]
fn worked_example_tree_and_flat_list() {
    let dir = tempdir().expect("temp dir");
    write(dir.path(), "nature/ocean.mdx", "salt and light\n");
    write(dir.path(), "reflections.mdx", "---\ntitle: On Time\n---\nslow hours\n");

    let source = FsDocumentSource::new();
    let view = LibraryQuery::new(&source)
        .run(&plan_for(&dir), SortOption::default())
        .expect("scan succeeds");

    assert_eq!(
        view.tree,
        vec![
            TreeNode::branch("nature", vec![TreeNode::leaf("ocean")]),
            TreeNode::leaf("reflections"),
        ]
    );

    let titles: Vec<&str> = view.entries.iter().map(|e| e.meta.title.as_str()).collect();
    assert_eq!(titles, vec!["ocean", "On Time"]);
}

#[test]
fn tree_flatten_matches_flat_list_count() {
    let dir = tempdir().expect("temp dir");
    write(dir.path(), "one.mdx", "1\n");
    write(dir.path(), "a/two.mdx", "2\n");
    write(dir.path(), "a/b/three.mdx", "3\n");
    write(dir.path(), "c/four.mdx", "4\n");

    let source = FsDocumentSource::new();
    for option in SortOption::ALL {
        let view = LibraryQuery::new(&source)
            .run(&plan_for(&dir), option)
            .expect("scan succeeds");
        assert_eq!(
            tree::flatten(&view.tree).len(),
            view.entries.len(),
            "flatten count diverged under {option}"
        );
    }
}

#[test]
fn rescans_are_structurally_identical() {
    let dir = tempdir().expect("temp dir");
    write(dir.path(), "alpha.mdx", "---\ncreated: 2021-01-01\n---\n");
    write(dir.path(), "beta/gamma.mdx", "---\ncreated: 2022-01-01\n---\n");

    let source = FsDocumentSource::new();
    let option = SortOption::new(SortField::Created, SortOrder::Desc);
    let first = LibraryQuery::new(&source).run(&plan_for(&dir), option).expect("first scan");
    let second = LibraryQuery::new(&source).run(&plan_for(&dir), option).expect("second scan");

    assert_eq!(first.tree, second.tree);
    let first_paths: Vec<String> = first.entries.iter().map(|e| e.path.to_string()).collect();
    let second_paths: Vec<String> = second.entries.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(first_paths, second_paths);
}

#[test]
fn directories_without_documents_are_pruned() {
    let dir = tempdir().expect("temp dir");
    write(dir.path(), "kept/poem.mdx", "x\n");
    std::fs::create_dir_all(dir.path().join("empty/nested")).expect("create empty dirs");
    write(dir.path(), "prose/notes.txt", "not indexed\n");

    let source = FsDocumentSource::new();
    let view = LibraryQuery::new(&source)
        .run(&plan_for(&dir), SortOption::default())
        .expect("scan succeeds");

    let names: Vec<&str> = view.tree.iter().map(TreeNode::name).collect();
    assert_eq!(names, vec!["kept"]);

    fn no_empty_branch(node: &TreeNode) {
        assert!(node.leaf_count() >= 1, "pruning violated at {}", node.name());
        if let TreeNode::Branch { children, .. } = node {
            children.iter().for_each(no_empty_branch);
        }
    }
    view.tree.iter().for_each(no_empty_branch);
}

#[test]
fn created_desc_orders_by_pinned_dates() {
    let dir = tempdir().expect("temp dir");
    write(dir.path(), "a.mdx", "---\ncreated: 2021-03-01\n---\n");
    write(dir.path(), "b.mdx", "---\ncreated: 2023-03-01\n---\n");
    write(dir.path(), "c.mdx", "---\ncreated: 2022-03-01\n---\n");

    let source = FsDocumentSource::new();
    let view = LibraryQuery::new(&source)
        .run(&plan_for(&dir), SortOption::new(SortField::Created, SortOrder::Desc))
        .expect("scan succeeds");

    let names: Vec<&str> = view.entries.iter().map(|e| e.path.name()).collect();
    assert_eq!(names, vec!["b", "c", "a"]);
}

#[test]
fn timestamp_ties_keep_scan_order() {
    let dir = tempdir().expect("temp dir");
    for name in ["delta", "alpha", "omega"] {
        write(
            dir.path(),
            &format!("{name}.mdx"),
            "---\ncreated: 2020-05-05\nmodified: 2020-06-06\n---\n",
        );
    }

    let source = FsDocumentSource::new();
    for field in [SortField::Created, SortField::Modified] {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let view = LibraryQuery::new(&source)
                .run(&plan_for(&dir), SortOption::new(field, order))
                .expect("scan succeeds");
            let names: Vec<&str> = view.entries.iter().map(|e| e.path.name()).collect();
            // all keys equal: stable sort must preserve scan order
            assert_eq!(names, vec!["alpha", "delta", "omega"]);
        }
    }
}

#[test]
fn empty_root_yields_empty_views_and_an_empty_corpus_signal() {
    let dir = tempdir().expect("temp dir");

    let source = FsDocumentSource::new();
    let query = LibraryQuery::new(&source);
    let view = query.run(&plan_for(&dir), SortOption::default()).expect("scan succeeds");
    assert!(view.tree.is_empty());
    assert!(view.entries.is_empty());

    let err = query.random_path(&plan_for(&dir), 3).expect_err("no documents to pick");
    assert!(matches!(
        err,
        PoemSiteError::Application(ApplicationError::EmptyCorpus)
    ));
}

#[test]
fn malformed_header_only_degrades_its_own_document() {
    let dir = tempdir().expect("temp dir");
    write(dir.path(), "first.mdx", "---\ntitle: First\n---\n");
    write(dir.path(), "second.mdx", "---\ntitle: [unclosed\n---\n");
    write(dir.path(), "third.mdx", "---\ntitle: Third\n---\n");

    let source = FsDocumentSource::new();
    let view = LibraryQuery::new(&source)
        .run(&plan_for(&dir), SortOption::default())
        .expect("scan succeeds");

    assert_eq!(view.entries.len(), 3);
    let titles: Vec<&str> = view.entries.iter().map(|e| e.meta.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "second", "Third"]);
}

#[test]
fn lookup_requires_every_segment_to_match() {
    let dir = tempdir().expect("temp dir");
    write(dir.path(), "nature/ocean.mdx", "deep\n");

    let source = FsDocumentSource::new();
    let query = LibraryQuery::new(&source);

    let hit = query
        .find(&plan_for(&dir), &["nature".to_string(), "ocean".to_string()])
        .expect("exact path matches");
    assert_eq!(hit.path.route(), "/nature/ocean");

    let err = query
        .find(&plan_for(&dir), &["ocean".to_string()])
        .expect_err("suffix alone must not match");
    assert!(matches!(
        err,
        PoemSiteError::Application(ApplicationError::DocumentNotFound { .. })
    ));
}
