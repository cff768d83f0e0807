//! Resume text extraction.
//!
//! Extraction is best effort: any failure is turned into `Extraction::Empty`
//! with a reason, so scoring always receives text (possibly empty) and never
//! an error.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

/// Outcome of pulling text out of an uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Extraction {
    Text {
        #[serde(skip)]
        text: String,
        chars: usize,
    },
    Empty {
        reason: String,
    },
}

impl Extraction {
    pub fn text(text: String) -> Self {
        if text.trim().is_empty() {
            return Extraction::Empty {
                reason: "document contains no extractable text".to_string(),
            };
        }
        let chars = text.chars().count();
        Extraction::Text { text, chars }
    }

    pub fn empty(reason: impl Into<String>) -> Self {
        Extraction::Empty {
            reason: reason.into(),
        }
    }

    /// The extracted text, or `""` when extraction failed.
    pub fn as_str(&self) -> &str {
        match self {
            Extraction::Text { text, .. } => text,
            Extraction::Empty { .. } => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Extraction::Empty { .. })
    }
}

pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Extraction;
}

pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Extraction {
        if bytes.is_empty() {
            return Extraction::empty("uploaded file is empty");
        }
        // The parser panics on some malformed documents instead of erroring.
        match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
            Ok(Ok(text)) => Extraction::text(text),
            Ok(Err(e)) => Extraction::empty(format!("failed to read PDF: {e}")),
            Err(_) => Extraction::empty("failed to read PDF: parser panicked"),
        }
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Extraction {
        if bytes.is_empty() {
            return Extraction::empty("uploaded file is empty");
        }
        Extraction::text(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Picks an extractor from the upload's content type and file name.
/// Anything not recognizably plain text is treated as a PDF.
pub fn extractor_for(
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Arc<dyn TextExtractor> {
    let is_text = content_type
        .map(|ct| ct.to_ascii_lowercase().starts_with("text/"))
        .unwrap_or(false)
        || file_name
            .map(|name| name.to_ascii_lowercase().ends_with(".txt"))
            .unwrap_or(false);

    if is_text {
        Arc::new(PlainTextExtractor)
    } else {
        Arc::new(PdfTextExtractor)
    }
}

/// Runs the extractor on the blocking pool. A panic inside the parser is
/// reported as an empty extraction like any other failure.
pub async fn extract_resume_text(extractor: Arc<dyn TextExtractor>, bytes: Vec<u8>) -> Extraction {
    let extraction = match tokio::task::spawn_blocking(move || extractor.extract(&bytes)).await {
        Ok(extraction) => extraction,
        Err(e) => Extraction::empty(format!("text extraction aborted: {e}")),
    };

    if let Extraction::Empty { reason } = &extraction {
        warn!("Resume extraction produced no text: {reason}");
    }
    extraction
}
