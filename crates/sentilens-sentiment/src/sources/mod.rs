//! Source extraction: turns each input variant into plain text.
//!
//! Request-shape problems (blank text, disallowed extension) fail here
//! immediately. Content-quality problems (unreachable host, image-only PDF
//! page) yield empty text instead, which the minimum-length gate rejects
//! further down the pipeline.

mod document;
mod web;

pub use document::{DocumentError, DocumentKind};

use std::path::PathBuf;

use sentilens_core::SourceKind;

use crate::error::AnalysisError;
use crate::types::ExtractorConfig;
use document::extract_document;
use web::WebFetcher;

/// One analysis request's input. Consumed by [`SourceExtractor::extract`].
#[derive(Debug, Clone)]
pub enum RawInput {
    Text(String),
    /// Uploaded bytes plus the client-supplied file name; only the
    /// extension of the name is trusted, and only to pick a parser.
    Document { bytes: Vec<u8>, filename: String },
    Url(String),
}

impl RawInput {
    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self {
            RawInput::Text(_) => SourceKind::Text,
            RawInput::Document { .. } => SourceKind::File,
            RawInput::Url(_) => SourceKind::Url,
        }
    }
}

/// Converts [`RawInput`] into plain text.
pub struct SourceExtractor {
    web: WebFetcher,
    spool_dir: Option<PathBuf>,
}

impl SourceExtractor {
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the HTTP client cannot be constructed.
    pub fn new(config: &ExtractorConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            web: WebFetcher::new(config.fetch_timeout, &config.user_agent)?,
            spool_dir: config.spool_dir.clone(),
        })
    }

    /// Extract plain text from one input.
    ///
    /// The returned text may be empty or short; callers gate it with
    /// [`crate::PlainText::new`].
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyInput`] for blank text or a blank URL.
    /// - [`AnalysisError::UnsupportedType`] for a file name outside
    ///   `txt`/`pdf`/`docx`, before any bytes are read.
    /// - [`AnalysisError::ExtractionFailure`] when a document container
    ///   cannot be opened at all.
    pub async fn extract(&self, input: RawInput) -> Result<String, AnalysisError> {
        match input {
            RawInput::Text(text) => extract_text(&text),
            RawInput::Document { bytes, filename } => {
                let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
                    AnalysisError::UnsupportedType {
                        extension: document::extension_of(&filename),
                    }
                })?;
                let text = extract_document(kind, bytes, self.spool_dir.clone())
                    .await
                    .inspect_err(|e| {
                        tracing::warn!(
                            file = %filename,
                            kind = kind.as_str(),
                            error = %e,
                            "document extraction failed"
                        );
                    })?;
                Ok(text)
            }
            RawInput::Url(url) => {
                let url = url.trim();
                if url.is_empty() {
                    return Err(AnalysisError::EmptyInput);
                }
                Ok(self.web.fetch_text(url).await)
            }
        }
    }
}

fn extract_text(text: &str) -> Result<String, AnalysisError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(trimmed.to_string())
}
