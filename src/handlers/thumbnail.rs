use axum::{
    body::Body,
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::{header, StatusCode},
    response::Response,
    Extension, Json,
};

use crate::error::{ApiResponse, AppError, Result};
use crate::handlers::video::parse_video_id;
use crate::models::{CurrentUser, Video};
use crate::services::thumbnail::THUMBNAIL_FIELD;
use crate::services::{ThumbnailService, UploadService};
use crate::AppState;

/// Upload a thumbnail for a video
/// POST /api/videos/:video_id/thumbnail
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(video_id): Path<String>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<Video>>> {
    let video_id = parse_video_id(&video_id)?;
    let mut multipart = multipart.map_err(|e| AppError::MalformedRequest(e.body_text()))?;

    let part = UploadService::read_file_field(
        &mut multipart,
        THUMBNAIL_FIELD,
        state.config.upload.max_thumbnail_bytes,
    )
    .await?;

    tracing::info!(
        "Uploading thumbnail {:?} for video {} by user {}",
        part.file_name,
        video_id,
        current_user.id
    );

    let video =
        ThumbnailService::upload_thumbnail(state.store.as_ref(), &current_user, video_id, part).await?;

    Ok(Json(ApiResponse::success(video)))
}

/// Serve a video's thumbnail (public)
/// GET /api/thumbnails/:video_id
pub async fn get_thumbnail(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Response> {
    let video_id = parse_video_id(&video_id)?;
    let (media_type, data) = ThumbnailService::get_thumbnail(state.store.as_ref(), video_id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, media_type)
        .header(header::X_CONTENT_TYPE_OPTIONS, "nosniff")
        .header(header::CONTENT_DISPOSITION, "inline")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(data))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
