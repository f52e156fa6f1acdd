//! Error handling for the bundled handlers.
//!
//! Internal detail (database errors, lookup misconfiguration) is logged
//! through `tracing` and never sent to clients; responses carry a sanitized
//! message and the appropriate status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::filter::MissingParamError;

/// Handler error with automatic logging and sanitized responses.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found, also used for records outside the addressed parent's
    /// scope.
    NotFound {
        /// Resource name, e.g. "child".
        resource: String,
        /// Id that wasn't found, when known.
        id: Option<String>,
    },

    /// 400 Bad Request, invalid input such as an unparseable id.
    BadRequest {
        /// User-facing error message.
        message: String,
    },

    /// 500 Internal Server Error from the database. Details are logged, not
    /// exposed.
    Database {
        /// User-facing generic message.
        message: String,
        /// Internal error, logged only.
        internal: DbErr,
    },

    /// 500 Internal Server Error. Details are logged, not exposed.
    Internal {
        /// User-facing generic message.
        message: String,
        /// Internal detail, logged only.
        internal: Option<String>,
    },
}

impl ApiError {
    /// Create a 404 Not Found error.
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Create a 400 Bad Request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a 500 error from a database error. The database detail is
    /// logged but not sent to the user.
    #[must_use]
    pub fn database(err: DbErr) -> Self {
        Self::Database {
            message: "A database error occurred".to_string(),
            internal: err,
        }
    }

    /// Create a 500 error with optional internal detail.
    pub fn internal(message: impl Into<String>, internal: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            internal,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Database { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => match id {
                Some(id) => format!("{resource} with ID '{id}' not found"),
                None => format!("{resource} not found"),
            },
            Self::BadRequest { message }
            | Self::Database { message, .. }
            | Self::Internal { message, .. } => message.clone(),
        }
    }

    /// Log internal error details. Only emits if the application set up a
    /// `tracing` subscriber.
    fn log_internal(&self) {
        match self {
            Self::Database { internal, .. } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            Self::Internal {
                internal: Some(details),
                ..
            } => {
                tracing::error!(details = %details, "Internal error occurred");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

/// Error body sent to clients.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Sanitized error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// `DbErr::RecordNotFound` becomes 404; every other database error becomes a
/// sanitized 500 with the original error logged.
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(msg) => {
                let resource = msg.split_whitespace().next().unwrap_or("Resource");
                Self::NotFound {
                    resource: resource.to_string(),
                    id: None,
                }
            }
            _ => Self::Database {
                message: "A database error occurred".to_string(),
                internal: err,
            },
        }
    }
}

/// A lookup placeholder missing from the request is a route/mapping
/// mismatch on the server side: a 500 whose parameter name goes to the log,
/// not the response.
impl From<MissingParamError> for ApiError {
    fn from(err: MissingParamError) -> Self {
        Self::Internal {
            message: "Server error".to_string(),
            internal: Some(err.to_string()),
        }
    }
}
