//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    /// Creating a directory (and any missing parents)
    CreateDir,
    /// Writing a generated file
    WriteFile,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir => write!(f, "create directory"),
            Self::WriteFile => write!(f, "write file"),
        }
    }
}

/// Scaffold error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Content type name cannot be used as a path segment and module reference
    #[error("Invalid content type name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Field spec string could not be parsed
    #[error("Invalid field spec '{spec}': {reason}")]
    InvalidFieldSpec {
        /// The rejected spec
        spec: String,
        /// Why it was rejected
        reason: String,
    },

    /// Filesystem error, carrying the failing path and operation
    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        /// Operation that failed
        op: IoOperation,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Template registration error
    #[error("Template error: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),

    /// Template rendering error
    #[error("Template render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ScaffoldError {
    /// Build a [`ScaffoldError::Io`] for `path`
    pub fn io(op: IoOperation, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn field_spec(spec: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFieldSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<handlebars::TemplateError> for ScaffoldError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::TemplateRegistration(Box::new(err))
    }
}
