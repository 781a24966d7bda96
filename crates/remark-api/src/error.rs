use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use remark_crypto::CryptoError;
use remark_db::StoreError;

/// Errors surfaced by the comment lifecycle operations.
///
/// `NotFound`, `InvalidToken`, `IllegalArgument`, `Unauthorized` and
/// `Forbidden` are expected and map to client errors. The rest are logged in
/// full and reach the client only as a generic internal error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unknown or expired token; the two cases are deliberately indistinguishable.
    #[error("invalid token")]
    InvalidToken,

    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("no valid session")]
    Unauthorized,

    #[error("comment {comment_id} does not belong to user {user_id}")]
    Forbidden { user_id: i64, comment_id: i64 },

    #[error("stored data failed authentication")]
    AuthenticationFailure,

    #[error("delete affected {0} rows")]
    IntegrityViolation(usize),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => ApiError::NotFound(what),
            StoreError::IntegrityViolation { affected } => ApiError::IntegrityViolation(affected),
            StoreError::Crypto(CryptoError::AuthenticationFailure) => ApiError::AuthenticationFailure,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidToken | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::IllegalArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::AuthenticationFailure
            | ApiError::IntegrityViolation(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::NotFound(_) => "Resource not found".to_string(),
            ApiError::InvalidToken => "Invalid token".to_string(),
            ApiError::IllegalArgument(msg) => msg.clone(),
            ApiError::Unauthorized => "Authentication required".to_string(),
            ApiError::Forbidden { .. } => {
                tracing::warn!("{}", self);
                "Not allowed".to_string()
            }
            ApiError::AuthenticationFailure
            | ApiError::IntegrityViolation(_)
            | ApiError::Internal(_) => {
                tracing::error!("{}", self);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
