// crates/usecase/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::{LibraryQuery, LibraryView};
