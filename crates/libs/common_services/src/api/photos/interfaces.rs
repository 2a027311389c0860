use crate::api::photos::pipeline::LoadPhase;
use crate::database::tables::photo::Photo;
use chrono::{DateTime, Utc};
use common_types::SizeClass;
use image_transforms::DisplayHandle;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// A photo as rendered to clients: record metadata plus its resolved
/// display URL.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoView {
    pub id: Uuid,
    pub filename: String,
    pub mime_type: String,
    pub is_visible: bool,
    pub file_size_bytes: Option<i64>,
    pub uploaded_at: DateTime<Utc>,
    pub url: Option<String>,
}

impl PhotoView {
    #[must_use]
    pub fn from_photo(photo: &Photo, handle: &DisplayHandle) -> Self {
        Self {
            id: photo.id,
            filename: photo.filename.clone(),
            mime_type: photo.mime_or_default().to_string(),
            is_visible: photo.is_visible,
            file_size_bytes: photo.file_size_bytes,
            uploaded_at: photo.uploaded_at,
            url: handle.url().map(ToString::to_string),
        }
    }
}

/// The public photo list together with the pipeline's load phase, so
/// clients can tell "loading", "failed to load" and "no photos available"
/// apart.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoListResponse {
    pub phase: LoadPhase,
    pub photos: Vec<PhotoView>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PhotoQuery {
    /// Requested size class, defaults to `carousel`.
    pub size: Option<SizeClass>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityPayload {
    pub visible: bool,
}

/// Outcome for one file of a bulk upload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub filename: String,
    pub id: Option<Uuid>,
    pub error: Option<String>,
}

/// Aggregate result of a bulk upload: one bad file never fails the batch.
#[derive(Debug, Serialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<UploadOutcome>,
}
