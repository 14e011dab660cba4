use axum::{
    response::{IntoResponse, Response},
    Json,
};
use deadpool_sqlite::InteractError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Placeholder for routes that have no route-specific failure modes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Error)]
pub enum Nothing {}

/// Everything a route can fail with: a typed route error carrying its
/// mapped status code, or one of the store failures every data-touching
/// route shares
#[derive(Debug, Error)]
pub enum ServerError<T: std::error::Error> {
    #[error("{inner}")]
    Inner { code: StatusCode, inner: T },
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("database interaction failed: {0}")]
    Interact(String),
    #[error("{message}")]
    Other { message: String },
}

impl<T: std::error::Error> From<InteractError> for ServerError<T> {
    fn from(err: InteractError) -> Self {
        Self::Interact(err.to_string())
    }
}

/// Body shape shared by every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl<T: std::error::Error> IntoResponse for ServerError<T> {
    fn into_response(self) -> Response {
        let code = match &self {
            Self::Inner { code, .. } => *code,
            Self::Database(_) | Self::Interact(_) | Self::Other { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = self.to_string();
        if code.is_server_error() {
            error!("request failed: {message}");
        }
        (code, Json(ErrorBody { error: message })).into_response()
    }
}

#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other {
            message: format!($($arg)*),
        }
    };
}
