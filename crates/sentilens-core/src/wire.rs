//! JSON shapes returned to callers of the analysis pipeline.
//!
//! Shared by the HTTP server and the CLI so both emit identical envelopes.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisResult, ConfidenceLevel, RawScores, Sentiment, SourceKind};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Flattened, display-oriented view of an [`AnalysisResult`].
///
/// Scores are rounded to three decimals. Presentation fields (`emoji`,
/// `color`, `details`) are derived and optional on the way back in, so a
/// client can post a trimmed object to the report endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    pub sentiment: Sentiment,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub color: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub vader_compound: f64,
    pub confidence: ConfidenceLevel,
    pub word_count: usize,
    pub character_count: usize,
    #[serde(default)]
    pub details: String,
}

impl From<&AnalysisResult> for AnalysisPayload {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            sentiment: result.sentiment,
            emoji: result.sentiment.emoji().to_string(),
            color: result.sentiment.color().to_string(),
            polarity: round3(result.raw_scores.polarity),
            subjectivity: round3(result.raw_scores.subjectivity),
            vader_compound: round3(result.raw_scores.compound),
            confidence: result.confidence_level,
            word_count: result.word_count,
            character_count: result.char_count,
            details: result.details(),
        }
    }
}

impl AnalysisPayload {
    /// Rebuild an [`AnalysisResult`] from a payload a client sent back,
    /// pairing it with the preview text that accompanied it.
    #[must_use]
    pub fn into_result(self, text_preview: String) -> AnalysisResult {
        AnalysisResult {
            sentiment: self.sentiment,
            confidence_level: self.confidence,
            raw_scores: RawScores {
                polarity: self.polarity,
                subjectivity: self.subjectivity,
                compound: self.vader_compound,
            },
            word_count: self.word_count,
            char_count: self.character_count,
            text_preview,
        }
    }
}

/// Success envelope for one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    /// The result's text preview.
    pub text: String,
    pub analysis: AnalysisPayload,
    pub analysis_type: SourceKind,
}

impl AnalyzeResponse {
    #[must_use]
    pub fn new(source_kind: SourceKind, result: &AnalysisResult) -> Self {
        Self {
            status: STATUS_SUCCESS,
            text: result.text_preview.clone(),
            analysis: AnalysisPayload::from(result),
            analysis_type: source_kind,
        }
    }
}

/// Failure envelope. `code` is a stable machine-readable category.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            code: code.into(),
            message: message.into(),
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
