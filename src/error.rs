//! Error types for the Inertia protocol engine.
//!
//! Errors fall into two families:
//!
//! | Family | Variants | Meaning |
//! |--------|----------|---------|
//! | Configuration | [`InertiaError::Configuration`], [`InertiaError::NotInstalled`] | The engine was wired up wrong. Raised as soon as it is detected. |
//! | Adapter failure | everything else | A collaborator (serializer, template renderer, version resolver) failed. |
//!
//! The engine never retries and never substitutes a fallback body: adapter
//! failures travel back to the caller untouched.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InertiaError>;

/// Errors produced while negotiating an Inertia response.
#[derive(Debug, Error)]
pub enum InertiaError {
    /// The engine is missing a required collaborator or was given invalid settings.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An [`Inertia`](crate::server::Inertia) extractor ran on a router without [`InertiaLayer`](crate::server::InertiaLayer).
    #[error("Inertia layer was not installed")]
    NotInstalled,

    /// Render options cannot describe a valid page object.
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),

    /// The page serializer failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The template file backing a [`SimpleTemplateRenderer`](crate::template::SimpleTemplateRenderer) could not be read.
    #[error("Could not load template {}: {source}", path.display())]
    TemplateRendering {
        /// Template location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A template renderer failed to produce a document.
    #[error("Template error: {0}")]
    Template(String),

    /// The version resolver could not produce the current asset version.
    #[error("Version resolution error: {0}")]
    VersionResolution(String),

    /// A response header value cannot be represented on the wire.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl InertiaError {
    /// Whether this error signals a wiring problem rather than a collaborator failure.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::NotInstalled)
    }
}

impl IntoResponse for InertiaError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "inertia response failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_classification() {
        assert!(InertiaError::NotInstalled.is_configuration());
        assert!(InertiaError::Configuration("no template".into()).is_configuration());
        assert!(!InertiaError::Template("boom".into()).is_configuration());
        assert!(!InertiaError::VersionResolution("gone".into()).is_configuration());
    }

    #[test]
    fn test_error_maps_to_500() {
        let response = InertiaError::Template("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_template_error_message_names_path() {
        let err = InertiaError::TemplateRendering {
            path: PathBuf::from("templates/app.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("templates/app.html"));
    }
}
