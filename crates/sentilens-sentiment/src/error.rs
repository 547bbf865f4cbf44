use thiserror::Error;

use crate::sources::DocumentError;

/// Every way an analysis request can fail.
///
/// `Display` is the short message shown to users; lower-level causes stay
/// reachable through [`std::error::Error::source`] for logging.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No text provided")]
    EmptyInput,

    #[error("Invalid file type (allowed: txt, pdf, docx)")]
    UnsupportedType { extension: Option<String> },

    #[error("Could not read the uploaded document")]
    ExtractionFailure {
        #[source]
        source: DocumentError,
    },

    #[error("Provide more text for analysis")]
    NoUsableContent { min_chars: usize },
}

impl AnalysisError {
    /// Stable machine-readable category, used by transports for status mapping.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => "empty_input",
            AnalysisError::UnsupportedType { .. } => "unsupported_type",
            AnalysisError::ExtractionFailure { .. } => "extraction_failure",
            AnalysisError::NoUsableContent { .. } => "no_usable_content",
        }
    }
}

impl From<DocumentError> for AnalysisError {
    fn from(source: DocumentError) -> Self {
        AnalysisError::ExtractionFailure { source }
    }
}
