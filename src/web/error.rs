//! HTTP error responses.
//!
//! Every failure is answered with a JSON body `{ "error": ..., "details": ... }`.
//! Missing rows become 404, failed creates and updates become 400 and anything
//! else is logged and reported as 500.

use crate::errors::Error;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

/// Error message for a failed create form submission.
pub const CREATION_FAILED: &str = "Task creation failed";

/// Error message for a failed edit form submission.
pub const UPDATE_FAILED: &str = "Task update failed";

/// JSON body of an error response
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Short error label
    pub error: String,
    /// Underlying error message, when useful to the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error type returned by route handlers
#[derive(Debug)]
pub enum WebError {
    /// Requested row does not exist (404)
    NotFound {
        /// Kind of row (`"game"`, `"publisher"`, `"genre"`)
        resource: &'static str,
        /// The id or name that was looked up
        id: String,
    },
    /// A form submission could not be applied (400)
    BadRequest {
        /// Short error label
        error: &'static str,
        /// Underlying error message
        details: Option<String>,
    },
    /// Anything else (500, logged)
    Internal(Error),
}

impl WebError {
    /// Wraps the failure of a create form submission.
    pub fn creation_failed(err: &Error) -> Self {
        error!("Creation failed: {}", err);
        Self::BadRequest {
            error: CREATION_FAILED,
            details: Some(err.to_string()),
        }
    }

    /// Wraps the failure of an edit form submission.
    pub fn update_failed(err: &Error) -> Self {
        error!("Update failed: {}", err);
        Self::BadRequest {
            error: UPDATE_FAILED,
            details: Some(err.to_string()),
        }
    }

    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "not_found".to_string(),
                    details: Some(format!("{resource} '{id}' not found")),
                },
            ),
            Self::BadRequest { error, details } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: (*error).to_string(),
                    details: details.clone(),
                },
            ),
            Self::Internal(e) => {
                error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal_error".to_string(),
                        details: None,
                    },
                )
            }
        }
    }
}

impl From<Error> for WebError {
    fn from(e: Error) -> Self {
        match e {
            Error::GameNotFound { id } => Self::NotFound {
                resource: "game",
                id: id.to_string(),
            },
            Error::PublisherNotFound { name } => Self::NotFound {
                resource: "publisher",
                id: name,
            },
            Error::GenreNotFound { name } => Self::NotFound {
                resource: "genre",
                id: name,
            },
            other => Self::Internal(other),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
