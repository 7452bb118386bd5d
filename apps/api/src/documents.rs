//! Resume upload → plain text.
//!
//! `.pdf` files go through `pdf-extract` (page texts in order); everything
//! else is decoded as UTF-8 with invalid sequences replaced. Content is not
//! validated beyond that.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not read PDF '{file_name}': {reason}")]
    Pdf { file_name: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.to_ascii_lowercase().ends_with(".pdf") {
            DocumentKind::Pdf
        } else {
            DocumentKind::Text
        }
    }
}

pub fn extract_text(file_name: &str, data: &[u8]) -> Result<String, DocumentError> {
    match DocumentKind::from_file_name(file_name) {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(data).map_err(|e| DocumentError::Pdf {
                file_name: file_name.to_string(),
                reason: e.to_string(),
            })
        }
        DocumentKind::Text => Ok(String::from_utf8_lossy(data).into_owned()),
    }
}
