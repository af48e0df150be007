use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CurrentUser, Video};
use crate::services::upload::UploadedPart;
use crate::services::VideoService;
use crate::store::VideoStore;

/// Form field carrying the thumbnail file
pub const THUMBNAIL_FIELD: &str = "thumbnail";

/// Embed bytes and their media type in a `data:` URL
pub fn encode_data_url(data: &[u8], media_type: &str) -> String {
    format!(
        "data:{};base64,{}",
        media_type,
        general_purpose::STANDARD.encode(data)
    )
}

/// Inverse of [`encode_data_url`]. Returns `(media_type, bytes)`.
pub fn decode_data_url(url: &str) -> Option<(String, Vec<u8>)> {
    let (media_type, payload) = url.strip_prefix("data:")?.rsplit_once(";base64,")?;
    let data = general_purpose::STANDARD.decode(payload).ok()?;
    Some((media_type.to_string(), data))
}

/// Thumbnail service
pub struct ThumbnailService;

impl ThumbnailService {
    /// Attach an uploaded thumbnail to a video the caller owns.
    ///
    /// Each step returns on failure, nothing is written unless every earlier
    /// step succeeded. Concurrent uploads for one video are last-writer-wins.
    pub async fn upload_thumbnail(
        store: &dyn VideoStore,
        user: &CurrentUser,
        video_id: Uuid,
        part: UploadedPart,
    ) -> Result<Video> {
        let media_type = part.media_type()?;

        let mut video = store.get_video(video_id).await?;
        VideoService::ensure_owner(&video, user)?;

        // The image lives inside the metadata row; fine for thumbnails, not for large media.
        video.thumbnail_url = Some(encode_data_url(&part.data, media_type));
        video.updated_at = Utc::now().to_rfc3339();

        store.update_video(&video).await?;

        tracing::info!(
            "Stored {} byte {} thumbnail for video {}",
            part.data.len(),
            media_type,
            video_id
        );

        Ok(video)
    }

    /// Decode the stored thumbnail of a video into `(media_type, bytes)`
    pub async fn get_thumbnail(store: &dyn VideoStore, video_id: Uuid) -> Result<(String, Vec<u8>)> {
        let video = store.get_video(video_id).await?;
        let url = video
            .thumbnail_url
            .ok_or_else(|| AppError::NotFound(format!("thumbnail for video {}", video_id)))?;

        decode_data_url(&url).ok_or_else(|| {
            AppError::Internal(format!("stored thumbnail for video {} is not a data URL", video_id))
        })
    }
}
