use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::api::guestbook::display::GuestbookDisplay;
use common_services::api::guestbook::error::GuestbookError;
use common_services::api::photos::error::PhotosError;
use common_services::api::photos::pipeline::PhotoPipeline;
use common_services::api::settings::service::SettingsStore;
use common_services::storage::MediaStore;
use common_types::SizeClass;
use rotation::Rotator;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    pub pool: PgPool,
    pub settings: AppSettings,
    pub media: MediaStore,
    pub pipeline: Arc<PhotoPipeline>,
    pub carousel: Arc<Rotator>,
    pub guestbook: Arc<GuestbookDisplay>,
    pub system_settings: SettingsStore,
    /// How many upcoming photos to pre-resolve on every rotation step.
    pub preload_count: usize,
}

impl ApiContext {
    /// Reloads the public photo list and realigns the carousel with it.
    /// Runs on start and after every admin photo mutation.
    pub async fn refresh_photos(&self) -> Result<usize, PhotosError> {
        let count = match self.pipeline.reload().await {
            Ok(count) => count,
            Err(e) => {
                self.carousel.set_len(0);
                return Err(e);
            }
        };
        self.carousel.set_len(count);
        self.pipeline
            .preload_window(0, self.preload_count, SizeClass::Carousel)
            .await;
        Ok(count)
    }

    /// Reloads the guestbook rotation. Runs on start and after every admin
    /// message mutation.
    pub async fn refresh_guestbook(&self) -> Result<usize, GuestbookError> {
        self.guestbook.reload().await
    }
}

// These impls let extractors and middleware pull just the part of the state
// they need.
impl FromRef<ApiContext> for PgPool {
    fn from_ref(state: &ApiContext) -> Self {
        state.pool.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}

impl FromRef<ApiContext> for MediaStore {
    fn from_ref(state: &ApiContext) -> Self {
        state.media.clone()
    }
}

impl FromRef<ApiContext> for SettingsStore {
    fn from_ref(state: &ApiContext) -> Self {
        state.system_settings.clone()
    }
}
