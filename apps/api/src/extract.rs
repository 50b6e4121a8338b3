//! Page-text extraction collaborator.
//!
//! The pipeline only ever sees a document as an ordered sequence of page
//! texts; the PDF backend sits behind a trait so the pipeline does not care
//! where the text comes from.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read document: {0}")]
    Unreadable(String),
}

pub trait TextExtractor: Send + Sync {
    /// Returns the text of every page in document order.
    fn load(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

/// PDF-backed extractor used in production.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn load(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        pdf_extract::extract_text_by_pages(path).map_err(|e| ExtractError::Unreadable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_is_unreadable() {
        let err = PdfTextExtractor
            .load(Path::new("/nonexistent/resume.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Unreadable(_)));
    }

    #[test]
    fn test_garbage_bytes_are_unreadable() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut tmp, b"this is not a pdf").unwrap();
        let err = PdfTextExtractor.load(tmp.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Unreadable(_)));
    }
}
