//! Carousel rotation: pure window/transform math plus thin timer schedulers.
//!
//! The math ([`RotationState`], [`slot_transform`], [`compute_frame`]) is
//! deterministic and runtime-free so it can be unit tested without any
//! rendering or timer environment. The schedulers ([`Rotator`],
//! [`GuestbookRotator`]) only own the tick loop and teardown.

mod frame;
mod guestbook;
mod scheduler;
mod state;

pub use frame::*;
pub use guestbook::*;
pub use scheduler::*;
pub use state::*;
