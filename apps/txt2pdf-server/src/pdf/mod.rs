//! PDF conversion module
//!
//! Turns plain text into a paginated PDF using lopdf.
//! Includes page geometry, Helvetica metrics, wrapping and document assembly.

mod converter;
mod error;
mod layout;
mod metrics;
mod types;
mod writer;

pub use converter::{Converter, TextPdfConverter};
pub use error::ConvertError;
pub use layout::{lay_out, wrap_text};
pub use types::{LaidOutPage, PageLayout, PlacedLine};
