// crates/domain/src/tree.rs
use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::PoemEntry;
use crate::options::SortOption;
use crate::sort;

/// Navigation tree node mirroring directory nesting: a Branch is a
/// directory, a Leaf is a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Leaf { name: String },
    Branch { name: String, children: Vec<TreeNode> },
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Leaf { name: name.into() }
    }

    pub fn branch(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self::Branch { name: name.into(), children }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Leaf { name } | Self::Branch { name, .. } => name,
        }
    }

    /// Number of documents beneath this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { children, .. } => children.iter().map(TreeNode::leaf_count).sum(),
        }
    }
}

/// Depth-first document names of a forest, visiting each level in its
/// stored order (Branches precede Leaves by construction).
pub fn flatten(forest: &[TreeNode]) -> Vec<&str> {
    let mut names = Vec::new();
    for node in forest {
        match node {
            TreeNode::Leaf { name } => names.push(name.as_str()),
            TreeNode::Branch { children, .. } => names.extend(flatten(children)),
        }
    }
    names
}

/// Build the pruned display forest for a set of entries.
///
/// Sibling Branches are ordered lexicographically ascending regardless of
/// the sort option; within one level Branches precede Leaves, and Leaves
/// follow the active sort option. A Branch only exists because at least
/// one document lies beneath it, so empty subtrees cannot appear.
pub fn build_forest(entries: &[PoemEntry], option: SortOption) -> Vec<TreeNode> {
    let refs: Vec<&PoemEntry> = entries.iter().collect();
    build_level(&refs, 0, option)
}

fn build_level(entries: &[&PoemEntry], depth: usize, option: SortOption) -> Vec<TreeNode> {
    let mut groups: BTreeMap<&str, Vec<&PoemEntry>> = BTreeMap::new();
    let mut here: Vec<&PoemEntry> = Vec::new();

    for entry in entries {
        let segments = entry.path.segments();
        let Some(segment) = segments.get(depth) else {
            continue;
        };
        if segments.len() == depth + 1 {
            here.push(entry);
        } else {
            groups.entry(segment.as_str()).or_default().push(entry);
        }
    }

    let mut nodes = Vec::new();
    for (name, group) in groups {
        let children = build_level(&group, depth + 1, option);
        if !children.is_empty() {
            nodes.push(TreeNode::branch(name, children));
        }
    }

    sort::apply_refs(&mut here, option);
    nodes.extend(here.into_iter().map(|entry| TreeNode::leaf(entry.path.name())));
    nodes
}
