//! Storage module for the incoming and outgoing file areas
//!
//! Both areas are flat local directories addressed by file name.

mod local;
mod types;

pub use local::StorageAreas;
pub use types::*;
