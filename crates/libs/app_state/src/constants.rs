use crate::{
    AuthConstants, CarouselConstants, DatabaseConstants, GuestbookConstants, ImageConstants,
    RawSettings,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConstants {
    pub database: DatabaseConstants,
    pub auth: AuthConstants,
    pub carousel: CarouselConstants,
    pub guestbook: GuestbookConstants,
    pub images: ImageConstants,
}

impl From<RawSettings> for AppConstants {
    fn from(raw: RawSettings) -> Self {
        Self {
            database: raw.constants.database,
            auth: raw.constants.auth,
            carousel: raw.constants.carousel,
            guestbook: raw.constants.guestbook,
            images: raw.constants.images,
        }
    }
}

impl CarouselConstants {
    /// Clamps a requested window size to the allowed `[min, max]` range.
    #[must_use]
    pub fn clamp_photos_count(&self, count: usize) -> usize {
        count.clamp(self.min_photos_count, self.max_photos_count)
    }
}
