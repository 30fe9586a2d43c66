//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! The one port defined here, [`store`], abstracts the document store so
//! the domain and application layers stay independent of the filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod store;

pub use store::{DocumentDto, DocumentSource, ScanPlan};
