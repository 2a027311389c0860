#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! Pure image transforms for the photo pipeline: aspect-preserving JPEG
//! resizing, base64 round-tripping, and ephemeral display handles.
//!
//! Every function here is synchronous and CPU-bound; callers on the async
//! side run them through `spawn_blocking`.

mod encode;
mod error;
mod handle;
mod resize;

pub use encode::*;
pub use error::*;
pub use handle::*;
pub use resize::*;
