use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which rendered size of a photo a consumer is asking for.
///
/// `Thumbnail` and `Carousel` map to derived variants; `Original` is the
/// stored source bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Thumbnail,
    Carousel,
    Original,
}

impl SizeClass {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Carousel => "carousel",
            Self::Original => "original",
        }
    }
}
