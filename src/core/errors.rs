//! PP-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Top-level error type for the premium predictor client.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("[PP-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[PP-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[PP-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[PP-2001] {message}")]
    Validation { field: &'static str, message: String },

    #[error("[PP-2002] could not connect to {endpoint}: {details}")]
    Connection { endpoint: String, details: String },

    #[error("[PP-2003] API error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("[PP-2004] malformed response: {details}")]
    MalformedResponse { details: String },

    #[error("[PP-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[PP-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[PP-3900] runtime failure: {details}")]
    Runtime { details: String },
}

impl PredictorError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "PP-1001",
            Self::MissingConfig { .. } => "PP-1002",
            Self::ConfigParse { .. } => "PP-1003",
            Self::Validation { .. } => "PP-2001",
            Self::Connection { .. } => "PP-2002",
            Self::Http { .. } => "PP-2003",
            Self::MalformedResponse { .. } => "PP-2004",
            Self::Serialization { .. } => "PP-2101",
            Self::Io { .. } => "PP-3002",
            Self::Runtime { .. } => "PP-3900",
        }
    }

    /// Whether retrying might resolve the failure.
    ///
    /// Informational only: submissions are never retried automatically.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::Io { .. } | Self::Runtime { .. }
        )
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for a response that lacks an expected shape.
    #[must_use]
    pub fn malformed(details: impl Into<String>) -> Self {
        Self::MalformedResponse {
            details: details.into(),
        }
    }
}

impl From<serde_json::Error> for PredictorError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for PredictorError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
