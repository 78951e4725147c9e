// src/error.rs

//! Unified error handling for the application.

use std::fmt;

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// The remote catalog has no record for the requested resource
    #[error("not found: {0}")]
    NotFound(String),

    /// The remote catalog returned a payload missing required fields
    #[error("malformed response: missing {context}")]
    Malformed { context: String },

    /// Render template did not contain exactly one placeholder marker
    #[error("template marker error: expected exactly one occurrence, found {occurrences}")]
    Template { occurrences: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a not-found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a malformed-response error naming the missing field.
    pub fn malformed(context: impl Into<String>) -> Self {
        Self::Malformed {
            context: context.into(),
        }
    }

    /// Create a template marker error.
    pub fn template(occurrences: usize) -> Self {
        Self::Template { occurrences }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl fmt::Display) -> Self {
        Self::Validation(message.to_string())
    }
}
