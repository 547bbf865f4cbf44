//! Analysis pipeline orchestration.

use sentilens_core::{AnalysisResult, SourceKind};

use crate::error::AnalysisError;
use crate::fusion::fuse;
use crate::scorer::score;
use crate::sources::{RawInput, SourceExtractor};
use crate::types::{ExtractorConfig, PlainText};

/// A finished analysis plus the source it came from.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub source_kind: SourceKind,
    /// Full extracted text, before preview truncation.
    pub text: String,
    pub result: AnalysisResult,
}

/// Runs one request end to end. Cheap to share; holds no per-request state.
pub struct Analyzer {
    extractor: SourceExtractor,
}

impl Analyzer {
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the HTTP client cannot be constructed.
    pub fn new(config: &ExtractorConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            extractor: SourceExtractor::new(config)?,
        })
    }

    /// Run the full pipeline for one input.
    ///
    /// 1. Extract plain text from the source.
    /// 2. Reject text below the minimum length.
    /// 3. Score it with both models.
    /// 4. Fuse the scores into a labelled result.
    ///
    /// # Errors
    ///
    /// Returns the first [`AnalysisError`] hit; nothing is scored after a
    /// failure.
    pub async fn analyze(&self, input: RawInput) -> Result<AnalysisOutcome, AnalysisError> {
        let source_kind = input.kind();
        let text = self.extractor.extract(input).await?;

        let text = PlainText::new(text).inspect_err(|_| {
            tracing::debug!(source = source_kind.as_str(), "extracted text too short");
        })?;

        let scores = score(&text);
        let result = fuse(&text, scores);

        tracing::info!(
            source = source_kind.as_str(),
            sentiment = result.sentiment.as_str(),
            confidence = result.confidence_level.as_str(),
            words = result.word_count,
            "analysis complete"
        );

        Ok(AnalysisOutcome {
            source_kind,
            text: text.into_inner(),
            result,
        })
    }
}
