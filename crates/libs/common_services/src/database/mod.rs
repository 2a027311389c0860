mod error;
mod stores;
pub mod tables;

pub use error::*;
pub use stores::*;
pub use tables::*;
