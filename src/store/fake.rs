use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Video;
use crate::store::VideoStore;

/// In-memory VideoStore that records how often it was called
#[derive(Default)]
pub struct FakeVideoStore {
    videos: RwLock<HashMap<Uuid, Video>>,
    lookups: AtomicUsize,
    updates: AtomicUsize,
    unavailable: AtomicBool,
    failing_updates: AtomicBool,
}

impl FakeVideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video owned by `owner` and return it
    pub fn fake_add_video(&self, id: Uuid, owner: Uuid) -> Video {
        let video = Video {
            id: id.to_string(),
            user_id: owner.to_string(),
            title: "Boot.dev beats".to_string(),
            description: String::new(),
            thumbnail_url: None,
            video_url: None,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        self.videos.write().unwrap().insert(id, video.clone());
        video
    }

    pub fn fake_video(&self, id: Uuid) -> Option<Video> {
        self.videos.read().unwrap().get(&id).cloned()
    }

    /// Make every subsequent call fail as if the database were down
    pub fn fake_set_unavailable(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    /// Lookups keep working, every update fails
    pub fn fake_fail_updates(&self) {
        self.failing_updates.store(true, Ordering::SeqCst);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoStore for FakeVideoStore {
    async fn get_video(&self, id: Uuid) -> Result<Video> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolTimedOut));
        }

        self.videos
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("video {}", id)))
    }

    async fn update_video(&self, video: &Video) -> Result<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) || self.failing_updates.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolTimedOut));
        }

        let id = Uuid::parse_str(&video.id)
            .map_err(|_| AppError::StoreUnavailable(sqlx::Error::RowNotFound))?;
        let mut videos = self.videos.write().unwrap();
        let stored = videos
            .get_mut(&id)
            .ok_or(AppError::StoreUnavailable(sqlx::Error::RowNotFound))?;
        stored.thumbnail_url = video.thumbnail_url.clone();
        stored.title = video.title.clone();
        stored.description = video.description.clone();
        stored.video_url = video.video_url.clone();
        Ok(())
    }
}
