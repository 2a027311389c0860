use chrono::{DateTime, Utc};
use common_types::SizeClass;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// A photo record. The stored binary (storage path or inline original) is
/// the durable source of truth; `thumbnail_data` and `carousel_data` are
/// regenerable base64 caches of it at reduced dimensions.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Photo {
    pub id: Uuid,
    pub filename: String,
    pub storage_path: Option<String>,
    pub original_data: Option<String>,
    pub thumbnail_data: Option<String>,
    pub carousel_data: Option<String>,
    pub mime_type: Option<String>,
    pub file_size_bytes: Option<i64>,
    pub is_visible: bool,
    pub uploaded_at: DateTime<Utc>,
}

impl Photo {
    /// Content type of the stored bytes, defaulting to JPEG when absent.
    #[must_use]
    pub fn mime_or_default(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(DEFAULT_MIME_TYPE)
    }

    /// The inline base64 payload for a size class, if present.
    #[must_use]
    pub fn inline_data(&self, size: SizeClass) -> Option<&str> {
        match size {
            SizeClass::Thumbnail => self.thumbnail_data.as_deref(),
            SizeClass::Carousel => self.carousel_data.as_deref(),
            SizeClass::Original => self.original_data.as_deref(),
        }
    }
}

/// Fields for inserting a new photo record.
#[derive(Debug, Clone)]
pub struct CreatePhoto {
    pub filename: String,
    pub storage_path: Option<String>,
    pub original_data: Option<String>,
    pub thumbnail_data: Option<String>,
    pub carousel_data: Option<String>,
    pub mime_type: Option<String>,
    pub file_size_bytes: Option<i64>,
    pub is_visible: bool,
}
