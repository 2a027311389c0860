use crate::api::photos::error::PhotosError;
use crate::api::photos::handle_cache::HandleCache;
use crate::database::PhotoStore;
use crate::database::tables::photo::Photo;
use crate::storage::MediaStore;
use common_types::SizeClass;
use image_transforms::{DisplayHandle, decode_base64};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Asset served when a photo has no resolvable representation.
pub const PLACEHOLDER_URL: &str = "/static/placeholder.svg";

/// Load-cycle state of the pipeline. `Failed` is a settled state (the list
/// is empty and the failure was reported), distinct from both `Loading` and
/// an empty `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Produces the definitive ordered, visibility-filtered public photo list
/// and resolves renderable display handles for it.
///
/// The handle cache is the only shared mutable resource here: written
/// during resolution, read by frame rendering, and fully invalidated on
/// every reload.
pub struct PhotoPipeline {
    pool: PgPool,
    cache: HandleCache,
    photos: RwLock<Arc<Vec<Photo>>>,
    phase: RwLock<LoadPhase>,
}

impl PhotoPipeline {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            cache: HandleCache::new(),
            photos: RwLock::new(Arc::new(Vec::new())),
            phase: RwLock::new(LoadPhase::Idle),
        }
    }

    /// Reloads the public photo list.
    ///
    /// Runs on start and after every admin mutation. All cached handles are
    /// released first, so late resolutions against the old list cannot
    /// repopulate the cache. A query failure settles as an empty `Failed`
    /// list and is returned to the caller for reporting; it is not retried.
    pub async fn reload(&self) -> Result<usize, PhotosError> {
        *self.phase.write().await = LoadPhase::Loading;
        self.cache.invalidate();

        match PhotoStore::list_public(&self.pool).await {
            Ok(list) => {
                let count = list.len();
                *self.photos.write().await = Arc::new(list);
                *self.phase.write().await = LoadPhase::Ready;
                info!(count, "photo list reloaded");
                Ok(count)
            }
            Err(e) => {
                *self.photos.write().await = Arc::new(Vec::new());
                *self.phase.write().await = LoadPhase::Failed;
                warn!("photo reload failed: {e:?}");
                Err(e.into())
            }
        }
    }

    /// The current ready list (empty while loading or after a failure).
    pub async fn photos(&self) -> Arc<Vec<Photo>> {
        Arc::clone(&*self.photos.read().await)
    }

    pub async fn phase(&self) -> LoadPhase {
        *self.phase.read().await
    }

    /// Resolves a renderable handle for one photo, going through the cache.
    ///
    /// A resolution that finishes after the list was reloaded is handed to
    /// the caller but not cached; it dies with its last reference.
    pub async fn resolve(&self, photo: &Photo, size: SizeClass) -> Arc<DisplayHandle> {
        if let Some(handle) = self.cache.get(photo.id, size) {
            return handle;
        }
        let generation = self.cache.generation();
        let handle = Arc::new(resolve_display_source(photo, size));
        self.cache
            .insert_if_current(generation, photo.id, size, Arc::clone(&handle));
        handle
    }

    /// Pre-resolves handles for the `count` photos starting at `start`, so
    /// advancing the rotation never blocks on decode.
    pub async fn preload_window(&self, start: usize, count: usize, size: SizeClass) {
        let photos = self.photos().await;
        if photos.is_empty() {
            return;
        }
        for offset in 0..count.min(photos.len()) {
            let photo = &photos[(start + offset) % photos.len()];
            self.resolve(photo, size).await;
        }
    }

    /// Looks a photo up in the current list by id.
    pub async fn find(&self, id: Uuid) -> Option<Photo> {
        self.photos().await.iter().find(|p| p.id == id).cloned()
    }

    #[must_use]
    pub fn cached_handles(&self) -> usize {
        self.cache.len()
    }
}

/// Resolves the best renderable source for a photo, in precedence order:
/// inline derived variant for the requested size class, inline original,
/// stored object's public URL, placeholder. Inline data wins over the
/// storage reference because it renders without another round trip.
#[must_use]
pub fn resolve_display_source(photo: &Photo, size: SizeClass) -> DisplayHandle {
    let mime = photo.mime_or_default();

    if let Some(handle) = photo.inline_data(size).and_then(|data| inline_handle(data, mime)) {
        return handle;
    }
    if size != SizeClass::Original
        && let Some(handle) = photo
            .inline_data(SizeClass::Original)
            .and_then(|data| inline_handle(data, mime))
    {
        return handle;
    }
    if let Some(path) = &photo.storage_path {
        return DisplayHandle::from_url(MediaStore::public_url(path));
    }

    warn!(id = %photo.id, "photo has no resolvable representation, using placeholder");
    DisplayHandle::from_url(PLACEHOLDER_URL)
}

/// Builds an inline data-URL handle, treating malformed base64 as absent so
/// resolution falls through to the next representation.
fn inline_handle(encoded: &str, mime: &str) -> Option<DisplayHandle> {
    let bytes = decode_base64(encoded);
    if bytes.is_empty() {
        None
    } else {
        Some(DisplayHandle::from_bytes(&bytes, mime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use image_transforms::encode_base64;

    fn photo() -> Photo {
        Photo {
            id: Uuid::new_v4(),
            filename: "foto (1).jpg".into(),
            storage_path: None,
            original_data: None,
            thumbnail_data: None,
            carousel_data: None,
            mime_type: None,
            file_size_bytes: None,
            is_visible: true,
            uploaded_at: Utc::now(),
        }
    }

    fn url(handle: &DisplayHandle) -> String {
        handle.url().unwrap().to_string()
    }

    #[test]
    fn variant_for_the_requested_size_wins() {
        let mut p = photo();
        p.carousel_data = Some(encode_base64(b"carousel"));
        p.original_data = Some(encode_base64(b"original"));
        p.storage_path = Some("admin-uploads/a.jpg".into());

        let handle = resolve_display_source(&p, SizeClass::Carousel);
        assert_eq!(
            url(&handle),
            format!("data:image/jpeg;base64,{}", encode_base64(b"carousel"))
        );
    }

    #[test]
    fn missing_variant_falls_back_to_inline_original() {
        let mut p = photo();
        p.original_data = Some(encode_base64(b"original"));
        p.storage_path = Some("admin-uploads/a.jpg".into());

        let handle = resolve_display_source(&p, SizeClass::Thumbnail);
        assert_eq!(
            url(&handle),
            format!("data:image/jpeg;base64,{}", encode_base64(b"original"))
        );
    }

    #[test]
    fn storage_reference_is_next() {
        let mut p = photo();
        p.storage_path = Some("admin-uploads/a.jpg".into());
        let handle = resolve_display_source(&p, SizeClass::Carousel);
        assert_eq!(url(&handle), "/media/admin-uploads/a.jpg");
    }

    #[test]
    fn no_representation_degrades_to_placeholder() {
        let handle = resolve_display_source(&photo(), SizeClass::Carousel);
        assert_eq!(url(&handle), PLACEHOLDER_URL);
    }

    #[test]
    fn malformed_variant_data_falls_through() {
        let mut p = photo();
        p.carousel_data = Some("!!! corrupt !!!".into());
        p.storage_path = Some("admin-uploads/a.jpg".into());
        let handle = resolve_display_source(&p, SizeClass::Carousel);
        assert_eq!(url(&handle), "/media/admin-uploads/a.jpg");
    }

    #[test]
    fn declared_mime_type_is_used_for_data_urls() {
        let mut p = photo();
        p.mime_type = Some("image/png".into());
        p.thumbnail_data = Some(encode_base64(b"png bytes"));
        let handle = resolve_display_source(&p, SizeClass::Thumbnail);
        assert!(url(&handle).starts_with("data:image/png;base64,"));
    }
}
