use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::error::{ApiResponse, AppError, Result};
use crate::models::{CurrentUser, Video};
use crate::services::VideoService;
use crate::AppState;

/// Parse a `{videoID}` path segment
pub fn parse_video_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::InvalidIdentifier(format!("{}: {}", raw, e)))
}

/// Get a video
/// GET /api/videos/:video_id
pub async fn get_video(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(video_id): Path<String>,
) -> Result<Json<ApiResponse<Video>>> {
    let video_id = parse_video_id(&video_id)?;
    let video = VideoService::get_owned_video(state.store.as_ref(), &current_user, video_id).await?;
    Ok(Json(ApiResponse::success(video)))
}
