use crate::encode_base64;
use std::sync::atomic::{AtomicBool, Ordering};

/// An ephemeral, revocable reference used to render image bytes.
///
/// The owner (normally the pipeline's handle cache) must call [`release`]
/// when the handle leaves the cache; a released handle stops resolving so
/// repeated `build_display_url` calls cannot accumulate live renderable
/// payloads indefinitely.
///
/// [`release`]: DisplayHandle::release
#[derive(Debug)]
pub struct DisplayHandle {
    url: String,
    released: AtomicBool,
}

impl DisplayHandle {
    /// Builds an inline `data:` URL handle over raw image bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            url: format!("data:{mime_type};base64,{}", encode_base64(bytes)),
            released: AtomicBool::new(false),
        }
    }

    /// Builds a handle over an already-encoded base64 payload.
    #[must_use]
    pub fn from_base64(encoded: &str, mime_type: &str) -> Self {
        Self {
            url: format!("data:{mime_type};base64,{encoded}"),
            released: AtomicBool::new(false),
        }
    }

    /// Builds a handle pointing at a served URL (media bucket or placeholder).
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            released: AtomicBool::new(false),
        }
    }

    /// The renderable URL, or `None` once the handle has been released.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        if self.released.load(Ordering::Acquire) {
            None
        } else {
            Some(&self.url)
        }
    }

    /// Revokes the handle. Idempotent.
    pub fn release(&self) {
        self.released.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }
}

/// Produces an ephemeral display handle for raw bytes.
#[must_use]
pub fn build_display_url(bytes: &[u8], mime_type: &str) -> DisplayHandle {
    DisplayHandle::from_bytes(bytes, mime_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_carries_mime_and_payload() {
        let handle = build_display_url(b"abc", "image/jpeg");
        let url = handle.url().unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn released_handle_stops_resolving() {
        let handle = build_display_url(b"abc", "image/jpeg");
        handle.release();
        assert!(handle.url().is_none());
        assert!(handle.is_released());
        // Releasing twice is fine.
        handle.release();
    }
}
