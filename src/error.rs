use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Invalid credential: {0}")]
    InvalidCredential(#[from] jsonwebtoken::errors::Error),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("Payload too large: limit is {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Missing content type for field {0}")]
    MissingContentType(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    #[error("Not owner: user {user_id} does not own video {video_id}")]
    NotOwner { user_id: String, video_id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: i32, message: &str) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.to_string(),
            data: None,
        }
    }
}

impl AppError {
    /// Status code and client-facing message.
    /// Messages never carry the underlying cause; that goes to the log.
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidIdentifier(_) => (StatusCode::BAD_REQUEST, "Invalid ID"),
            AppError::MissingCredential(_) => (StatusCode::UNAUTHORIZED, "Couldn't find JWT"),
            AppError::InvalidCredential(_) => (StatusCode::UNAUTHORIZED, "Couldn't validate JWT"),
            AppError::MalformedRequest(_) => {
                (StatusCode::BAD_REQUEST, "Error parsing thumbnail for video")
            }
            AppError::FieldNotFound(_) => (StatusCode::BAD_REQUEST, "Couldn't find file in request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "Thumbnail is too large"),
            AppError::MissingContentType(_) => {
                (StatusCode::BAD_REQUEST, "No media type found in header")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Video does not exist"),
            AppError::StoreUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error accessing video metadata")
            }
            AppError::NotOwner { .. } => (StatusCode::UNAUTHORIZED, "This is not your video"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::StoreUnavailable(e) => {
                tracing::error!("Store error: {:?}", e);
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
            AppError::InvalidCredential(e) => {
                tracing::warn!("JWT error: {:?}", e.kind());
            }
            AppError::MissingCredential(_) | AppError::NotOwner { .. } => {
                tracing::warn!("{}", self);
            }
            _ => {
                tracing::debug!("{}", self);
            }
        }

        let body = Json(ApiResponse::<()>::error(status.as_u16() as i32, message));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
