use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Video metadata record
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Video {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    /// Inline `data:` URL, see `services::thumbnail::encode_data_url`
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Video {
    /// Whether the given user owns this video.
    /// An owner column that is not a UUID matches nobody.
    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        Uuid::parse_str(&self.user_id).is_ok_and(|owner| owner == *user_id)
    }
}
