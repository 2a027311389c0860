use common_types::SizeClass;
use image_transforms::DisplayHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

/// Size-keyed cache of resolved display handles, keyed by record id.
///
/// The pipeline owns exactly one of these. Every reload bumps the
/// generation, which releases and drops all cached handles; resolutions
/// started against an older generation are refused at insert time so a late
/// decode can never repopulate a cache that belongs to a newer record set.
#[derive(Debug, Default)]
pub struct HandleCache {
    generation: AtomicU64,
    handles: Mutex<HashMap<(Uuid, SizeClass), Arc<DisplayHandle>>>,
}

impl HandleCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Invalidates the cache: releases every handle, drops them, and moves
    /// to the next generation.
    pub fn invalidate(&self) -> u64 {
        let mut handles = self.lock_handles();
        for handle in handles.values() {
            handle.release();
        }
        let released = handles.len();
        handles.clear();
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(released, generation, "handle cache invalidated");
        generation
    }

    #[must_use]
    pub fn get(&self, id: Uuid, size: SizeClass) -> Option<Arc<DisplayHandle>> {
        self.lock_handles().get(&(id, size)).cloned()
    }

    /// Inserts a resolved handle if it still belongs to the current
    /// generation. Returns `false` (and leaves the cache untouched) for a
    /// stale resolution.
    pub fn insert_if_current(
        &self,
        generation: u64,
        id: Uuid,
        size: SizeClass,
        handle: Arc<DisplayHandle>,
    ) -> bool {
        let mut handles = self.lock_handles();
        if self.generation.load(Ordering::Acquire) != generation {
            debug!(%id, "discarding stale handle resolution");
            return false;
        }
        handles.insert((id, size), handle);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_handles().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_handles().is_empty()
    }

    fn lock_handles(
        &self,
    ) -> std::sync::MutexGuard<'_, HashMap<(Uuid, SizeClass), Arc<DisplayHandle>>> {
        self.handles.lock().expect("handle cache lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Arc<DisplayHandle> {
        Arc::new(DisplayHandle::from_url("/media/x.jpg"))
    }

    #[test]
    fn insert_and_get_within_a_generation() {
        let cache = HandleCache::new();
        let id = Uuid::new_v4();
        let generation = cache.generation();
        assert!(cache.insert_if_current(generation, id, SizeClass::Carousel, handle()));
        assert!(cache.get(id, SizeClass::Carousel).is_some());
        // Size classes are cached independently.
        assert!(cache.get(id, SizeClass::Thumbnail).is_none());
    }

    #[test]
    fn stale_resolution_is_refused() {
        let cache = HandleCache::new();
        let id = Uuid::new_v4();
        let old_generation = cache.generation();
        cache.invalidate();
        assert!(!cache.insert_if_current(old_generation, id, SizeClass::Carousel, handle()));
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_releases_cached_handles() {
        let cache = HandleCache::new();
        let id = Uuid::new_v4();
        let cached = handle();
        cache.insert_if_current(cache.generation(), id, SizeClass::Carousel, cached.clone());
        cache.invalidate();
        assert!(cached.is_released());
        assert!(cache.get(id, SizeClass::Carousel).is_none());
    }
}
