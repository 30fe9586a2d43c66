// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PoemSiteError {
    /// Adds human context while preserving the original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PoemSiteError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, PoemSiteError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unknown sort option: {value}")]
    InvalidSortOption { value: String },
}

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("No document found at '{path}'")]
    DocumentNotFound { path: String },

    #[error("The content root holds no documents")]
    EmptyCorpus,
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front matter: {details}")]
    HeaderParse { details: String },
}

impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::HeaderParse { details: err.to_string() }
    }
}

impl From<serde_yaml::Error> for PoemSiteError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PoemSiteError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PoemSiteError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PoemSiteError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
