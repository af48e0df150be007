use async_trait::async_trait;
use uuid::Uuid;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::Video;
use crate::store::VideoStore;

#[async_trait]
impl VideoStore for Database {
    async fn get_video(&self, id: Uuid) -> Result<Video> {
        let video: Video = sqlx::query_as("SELECT * FROM videos WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("video {}", id)))?;

        Ok(video)
    }

    async fn update_video(&self, video: &Video) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET title = ?, description = ?, thumbnail_url = ?, video_url = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .bind(&video.updated_at)
        .bind(&video.id)
        .execute(self.pool())
        .await?;

        // Deleted between lookup and update
        if result.rows_affected() == 0 {
            return Err(AppError::StoreUnavailable(sqlx::Error::RowNotFound));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_database;

    async fn insert_video(db: &Database, id: Uuid, owner: Uuid) {
        sqlx::query("INSERT INTO videos (id, user_id, title) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(owner.to_string())
            .bind("My clip")
            .execute(db.pool())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn get_video_returns_stored_row() {
        let db = memory_database().await;
        let (id, owner) = (Uuid::new_v4(), Uuid::new_v4());
        insert_video(&db, id, owner).await;

        let video = db.get_video(id).await.unwrap();
        assert_eq!(video.id, id.to_string());
        assert!(video.is_owned_by(&owner));
        assert_eq!(video.title, "My clip");
        assert!(video.thumbnail_url.is_none());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let db = memory_database().await;
        let err = db.get_video(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_persists_thumbnail_and_keeps_owner() {
        let db = memory_database().await;
        let (id, owner) = (Uuid::new_v4(), Uuid::new_v4());
        insert_video(&db, id, owner).await;

        let mut video = db.get_video(id).await.unwrap();
        video.thumbnail_url = Some("data:image/png;base64,AAEC".to_string());
        video.user_id = Uuid::new_v4().to_string();
        db.update_video(&video).await.unwrap();

        let stored = db.get_video(id).await.unwrap();
        assert_eq!(stored.thumbnail_url.as_deref(), Some("data:image/png;base64,AAEC"));
        assert!(stored.is_owned_by(&owner));
    }

    #[tokio::test]
    async fn update_of_missing_row_fails() {
        let db = memory_database().await;
        let (id, owner) = (Uuid::new_v4(), Uuid::new_v4());
        insert_video(&db, id, owner).await;
        let video = db.get_video(id).await.unwrap();

        sqlx::query("DELETE FROM videos").execute(db.pool()).await.unwrap();

        let err = db.update_video(&video).await.unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn closed_pool_is_store_unavailable() {
        let db = memory_database().await;
        db.pool().close().await;

        let err = db.get_video(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }
}
