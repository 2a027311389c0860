#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation
)]

pub mod api_state;
pub mod routes;
mod server;

pub use routes::*;
pub use server::serve;
