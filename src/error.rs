//! Error types for the microCMS SDK.
//!
//! This module contains the configuration error raised while building a
//! client. Per-request failures live in [`crate::clients::HttpError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use microcms::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the SDK.
///
/// Each variant carries a message that points at the offending parameter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Service domain cannot be empty.
    #[error("parameter is required (check serviceDomain and apiKey): service domain cannot be empty")]
    EmptyServiceDomain,

    /// API key cannot be empty.
    #[error("parameter is required (check serviceDomain and apiKey): API key cannot be empty")]
    EmptyApiKey,

    /// Global draft key was supplied but is empty.
    #[error("Global draft key cannot be empty. Omit it instead of passing an empty value.")]
    EmptyDraftKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL override is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The underlying HTTP transport could not be initialized.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClientInit {
        /// Description of the transport failure.
        reason: String,
    },
}
