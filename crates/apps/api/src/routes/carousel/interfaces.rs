use common_services::api::photos::interfaces::PhotoView;
use common_services::api::photos::pipeline::LoadPhase;
use rotation::SlotTransform;
use serde::Serialize;
use utoipa::ToSchema;

/// One rendered slot of the carousel: the photo plus how to draw it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSlot {
    pub slot: usize,
    pub absolute_index: usize,
    pub transform: SlotTransform,
    pub photo: PhotoView,
}

/// A full carousel frame for the current rotation position.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarouselFrame {
    pub phase: LoadPhase,
    pub current_index: usize,
    pub total: usize,
    /// Configured window size (clamped to its allowed range).
    pub window_size: usize,
    pub slots: Vec<CarouselSlot>,
}
