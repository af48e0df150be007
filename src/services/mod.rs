pub mod auth;
pub mod thumbnail;
pub mod upload;
pub mod video;

pub use auth::AuthService;
pub use thumbnail::ThumbnailService;
pub use upload::UploadService;
pub use video::VideoService;
