use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub storage: StorageSettings,
    pub api: ApiSettings,
    pub secrets: SecretSettings,
    pub constants: RawConstants,
}

/// Defines paths for the media bucket and local durable data.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub media_folder: PathBuf,
    pub data_folder: PathBuf,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
    pub public_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub jwt: String,
    pub database_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawConstants {
    pub database: DatabaseConstants,
    pub auth: AuthConstants,
    pub carousel: CarouselConstants,
    pub guestbook: GuestbookConstants,
    pub images: ImageConstants,
}

/// Database connection pool configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConstants {
    pub max_connections: u32,
    pub acquire_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConstants {
    pub access_token_expiry_minutes: i64,
    pub refresh_token_expiry_days: i64,
}

/// Timing and window bounds for the photo carousel.
#[derive(Debug, Deserialize, Clone)]
pub struct CarouselConstants {
    pub advance_interval_ms: u64,
    pub default_photos_count: usize,
    pub min_photos_count: usize,
    pub max_photos_count: usize,
    /// How many upcoming photos to pre-resolve around the rotation position.
    pub preload_count: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GuestbookConstants {
    pub display_interval_ms: u64,
    pub fade_ms: u64,
}

/// Target dimensions and JPEG qualities for derived image variants.
#[derive(Debug, Deserialize, Clone)]
pub struct ImageConstants {
    pub thumbnail_max_dimension: u32,
    /// JPEG quality in (0, 1].
    pub thumbnail_quality: f32,
    pub carousel_max_dimension: u32,
    pub carousel_quality: f32,
}
