//! Turns uploaded documents into plain text before they reach the analyzer.
//!
//! PDFs go through `pdf-extract`; anything else must already be UTF-8 text.
//! A failure here stops the request: the analyzer never sees partial input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not read PDF '{filename}': {reason}")]
    Pdf { filename: String, reason: String },

    #[error("'{filename}' is not valid UTF-8 text")]
    NotUtf8 { filename: String },

    #[error("'{filename}' contains no readable text")]
    Empty { filename: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Content type wins when it names PDF; otherwise the file extension decides.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Self {
        let is_pdf_type = content_type
            .map(|ct| ct.eq_ignore_ascii_case("application/pdf"))
            .unwrap_or(false);
        let is_pdf_name = filename.to_ascii_lowercase().ends_with(".pdf");

        if is_pdf_type || is_pdf_name {
            DocumentKind::Pdf
        } else {
            DocumentKind::Text
        }
    }
}

pub fn extract_text(
    filename: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, DocumentError> {
    let text = match DocumentKind::detect(filename, content_type) {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Pdf {
                filename: filename.to_string(),
                reason: e.to_string(),
            })?
        }
        DocumentKind::Text => String::from_utf8(bytes.to_vec()).map_err(|_| DocumentError::NotUtf8 {
            filename: filename.to_string(),
        })?,
    };

    if text.trim().is_empty() {
        return Err(DocumentError::Empty {
            filename: filename.to_string(),
        });
    }
    Ok(text)
}
