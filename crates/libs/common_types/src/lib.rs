#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod dev_constants;
mod size_class;

pub use size_class::*;
