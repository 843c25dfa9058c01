//! Document decoding: turns uploaded bytes into plain resume text.
//!
//! The decoder never fails. Anything it cannot read (scanned images, corrupt
//! files, non-PDF bytes) comes back as an empty string, which the analysis
//! pipeline treats as "no text": every field falls back to its sentinel and
//! the score collapses to 0.

use std::panic::{self, AssertUnwindSafe};

/// Pluggable text decoder. Carried in `AppState` as `Arc<dyn DocumentDecoder>`.
pub trait DocumentDecoder: Send + Sync {
    /// Best-effort text for `bytes`, or `""` when nothing can be extracted.
    fn decode(&self, bytes: &[u8]) -> String;
}

/// Default decoder backed by `pdf-extract`.
pub struct PdfTextDecoder;

impl DocumentDecoder for PdfTextDecoder {
    fn decode(&self, bytes: &[u8]) -> String {
        if bytes.is_empty() {
            return String::new();
        }

        // pdf-extract panics on some malformed inputs instead of returning Err.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        match outcome {
            Ok(Ok(text)) => {
                let text = text.trim().to_string();
                tracing::debug!(bytes = bytes.len(), chars = text.len(), "PDF decoded");
                text
            }
            Ok(Err(e)) => {
                tracing::warn!(bytes = bytes.len(), "PDF text extraction failed: {e}");
                String::new()
            }
            Err(_) => {
                tracing::warn!(bytes = bytes.len(), "PDF text extraction panicked");
                String::new()
            }
        }
    }
}
