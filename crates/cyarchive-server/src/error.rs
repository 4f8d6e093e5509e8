//! Error handling for the HTTP front.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body of every not-found response.
pub const NOT_FOUND_BODY: &str = "Page not found";

/// Body of a failed render.
pub const RENDER_FAILED_BODY: &str = "Internal server error";

/// Request-time errors.
///
/// Malformed input and missing data are not told apart: both become a 404.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Page segment is neither a number nor `all`.
    #[error("invalid page number: {0}")]
    InvalidPage(String),

    /// No games on the requested page.
    #[error("no games on page {0}")]
    EmptyPage(String),

    /// No game with this folder identifier.
    #[error("requested game that doesn't exist: {0}")]
    GameNotFound(String),

    /// A template failed while rendering.
    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),
}

impl ArchiveError {
    /// The request input that caused the error, if any.
    pub fn requested(&self) -> Option<&str> {
        match self {
            ArchiveError::InvalidPage(input)
            | ArchiveError::EmptyPage(input)
            | ArchiveError::GameNotFound(input) => Some(input),
            ArchiveError::Render(_) => None,
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ArchiveError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ArchiveError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.requested() {
            Some(requested) => tracing::error!(requested = %requested, "{}", self),
            None => tracing::error!("{}", self),
        }

        let body = if status == StatusCode::NOT_FOUND {
            NOT_FOUND_BODY
        } else {
            RENDER_FAILED_BODY
        };
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Startup errors while loading page templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid template: {0}")]
    Syntax(#[from] minijinja::Error),
}
