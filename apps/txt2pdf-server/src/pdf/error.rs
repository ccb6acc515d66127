//! Conversion error types

use thiserror::Error;

/// Failure turning a text file into a PDF
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source file could not be read
    #[error("failed to read input file: {0}")]
    ReadInput(#[source] std::io::Error),

    /// Destination file could not be written
    #[error("failed to write output file: {0}")]
    WriteOutput(#[source] std::io::Error),

    /// Document assembly or serialization failed
    #[error("failed to render document: {0}")]
    Render(String),
}
