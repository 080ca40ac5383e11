//! Upload-to-text extraction seam.
//!
//! Carried in `AppState` as `Arc<dyn TextExtractor>` so a richer backend
//! (DOCX, OCR) can be swapped in without touching handlers.

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, filename: &str, data: &[u8]) -> Result<String, AppError>;
}

/// Default extractor: PDF via `pdf-extract`, UTF-8 passthrough for plain
/// text. Anything else is rejected as unsupported.
pub struct DefaultExtractor;

#[async_trait]
impl TextExtractor for DefaultExtractor {
    async fn extract(&self, filename: &str, data: &[u8]) -> Result<String, AppError> {
        match extension(filename).as_deref() {
            Some("pdf") => pdf_extract::extract_text_from_mem(data)
                .map_err(|e| AppError::Extraction(format!("{filename}: {e}"))),
            Some("txt") | Some("md") | Some("text") => {
                Ok(String::from_utf8_lossy(data).into_owned())
            }
            Some(other) => Err(AppError::UnsupportedFormat(format!(
                "'.{other}' files are not supported; upload PDF or plain text"
            ))),
            None => Err(AppError::UnsupportedFormat(
                "file has no extension; upload PDF or plain text".to_string(),
            )),
        }
    }
}

fn extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
