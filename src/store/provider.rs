use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Video;

/// Video metadata store
///
/// No version column is compared on update: two concurrent writers to the
/// same video race and the later update wins.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Fetch a video. `AppError::NotFound` if no such id exists.
    async fn get_video(&self, id: Uuid) -> Result<Video>;

    /// Persist the mutable fields of a video. The owner column is never written.
    async fn update_video(&self, video: &Video) -> Result<()>;
}
