//! Text extraction — turns raw document bytes into plain resume text.
//!
//! The pipeline depends on the `TextExtractor` trait only; `PdfTextExtractor`
//! is the production implementation.

use crate::errors::ScreenError;

/// Converts a document's raw bytes into plain text.
///
/// Multi-page content must be concatenated in page order with newline
/// separation. Unreadable input and empty extraction results are failures:
/// a resume the pipeline cannot read is a `Failed` record, not an empty one.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ScreenError>;
}

/// PDF extraction via the `pdf-extract` crate, which joins pages with
/// newlines in page order.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ScreenError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ScreenError::ExtractionFailed(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(ScreenError::ExtractionFailed(
                "document produced no extractable text".to_string(),
            ));
        }

        Ok(text)
    }
}
