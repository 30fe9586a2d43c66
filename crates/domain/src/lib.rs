// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;
pub mod random;
pub mod sort;
pub mod tree;

pub use model::{PoemEntry, PoemMeta};
pub use options::{SortField, SortOption, SortOrder};
pub use tree::TreeNode;
