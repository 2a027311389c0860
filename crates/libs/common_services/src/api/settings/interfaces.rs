use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Durable display settings, persisted locally as a small JSON file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub carousel_photos_count: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    pub carousel_photos_count: usize,
}
