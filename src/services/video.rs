use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CurrentUser, Video};
use crate::store::VideoStore;

/// Video metadata service
pub struct VideoService;

impl VideoService {
    /// Only the creator of a video may read or mutate it through the API
    pub fn ensure_owner(video: &Video, user: &CurrentUser) -> Result<()> {
        if video.is_owned_by(&user.id) {
            Ok(())
        } else {
            Err(AppError::NotOwner {
                user_id: user.id.to_string(),
                video_id: video.id.clone(),
            })
        }
    }

    /// Fetch a video the caller owns
    pub async fn get_owned_video(
        store: &dyn VideoStore,
        user: &CurrentUser,
        video_id: Uuid,
    ) -> Result<Video> {
        let video = store.get_video(video_id).await?;
        Self::ensure_owner(&video, user)?;
        Ok(video)
    }
}
