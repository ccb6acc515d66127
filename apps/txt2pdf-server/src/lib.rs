//! txt2pdf Server Library
//!
//! Upload a plain-text file, get it back once as a PDF. Both the upload and
//! the generated PDF are deleted shortly after use.
//!
//! # Modules
//!
//! - `pdf`: Text layout and PDF writing
//! - `storage`: Incoming and outgoing file areas
//! - `cleanup`: Delayed deletion of artifacts
//! - `routes`: HTTP handlers and the router

pub mod cleanup;
pub mod config;
pub mod error;
pub mod pdf;
pub mod routes;
pub mod state;
pub mod storage;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
