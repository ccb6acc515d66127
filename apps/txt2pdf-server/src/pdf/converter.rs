//! Text to PDF conversion

use std::path::Path;

use super::error::ConvertError;
use super::layout::lay_out;
use super::types::PageLayout;
use super::writer::write_document;

/// Converts a source file on disk into a PDF at a destination path
///
/// Implementations are synchronous; async callers run them on a blocking
/// thread.
pub trait Converter: Send + Sync {
    fn convert_file(&self, source: &Path, destination: &Path) -> Result<(), ConvertError>;
}

/// Plain-text renderer: Helvetica, left-aligned, wrapped and paginated
#[derive(Debug, Clone, Default)]
pub struct TextPdfConverter {
    layout: PageLayout,
}

impl TextPdfConverter {
    /// Render raw text bytes into a PDF document
    ///
    /// Bytes are not validated; invalid UTF-8 is decoded lossily.
    pub fn convert(&self, content: &[u8]) -> Result<Vec<u8>, ConvertError> {
        self.render(content, None)
    }

    fn render(&self, content: &[u8], title: Option<&str>) -> Result<Vec<u8>, ConvertError> {
        let text = String::from_utf8_lossy(content);
        let pages = lay_out(&text, &self.layout);

        tracing::debug!(
            bytes = content.len(),
            pages = pages.len(),
            "Rendered text layout"
        );

        write_document(&pages, &self.layout, title)
    }
}

impl Converter for TextPdfConverter {
    fn convert_file(&self, source: &Path, destination: &Path) -> Result<(), ConvertError> {
        let content = std::fs::read(source).map_err(ConvertError::ReadInput)?;
        let title = source.file_stem().map(|s| s.to_string_lossy());

        let pdf = self.render(&content, title.as_deref())?;
        std::fs::write(destination, pdf).map_err(ConvertError::WriteOutput)
    }
}
