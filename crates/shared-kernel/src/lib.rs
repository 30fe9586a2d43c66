// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, ErrorContext, InfrastructureError, PoemSiteError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{DocPath, FileStamps};
