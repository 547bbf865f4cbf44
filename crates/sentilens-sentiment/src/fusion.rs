//! Fusion engine: combines the two model outputs into one verdict.

use sentilens_core::{
    truncate_with_ellipsis, AnalysisResult, ConfidenceLevel, RawScores, Sentiment,
};

use crate::types::PlainText;

/// Compound score at or beyond which the valence model alone decides.
pub const COMPOUND_THRESHOLD: f64 = 0.05;
/// Polarity strictly beyond which the polarity model alone decides.
pub const POLARITY_THRESHOLD: f64 = 0.1;
pub const HIGH_CONFIDENCE: f64 = 0.5;
pub const MEDIUM_CONFIDENCE: f64 = 0.2;
/// Characters of source text kept in [`AnalysisResult::text_preview`].
pub const PREVIEW_CHARS: usize = 500;

/// Label the scores. Positive is checked first, so a positive polarity
/// outranks a negative compound and vice versa.
#[must_use]
pub fn classify(scores: &RawScores) -> Sentiment {
    if scores.compound >= COMPOUND_THRESHOLD || scores.polarity > POLARITY_THRESHOLD {
        Sentiment::Positive
    } else if scores.compound <= -COMPOUND_THRESHOLD || scores.polarity < -POLARITY_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Strength of the stronger signal, in `[0.0, 1.0]`.
#[must_use]
pub fn confidence(scores: &RawScores) -> f64 {
    scores.polarity.abs().max(scores.compound.abs())
}

#[must_use]
pub fn confidence_level(confidence: f64) -> ConfidenceLevel {
    if confidence > HIGH_CONFIDENCE {
        ConfidenceLevel::High
    } else if confidence > MEDIUM_CONFIDENCE {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Build the final [`AnalysisResult`]. Counts use the full text; only the
/// preview is truncated.
#[must_use]
pub fn fuse(text: &PlainText, scores: RawScores) -> AnalysisResult {
    let text = text.as_str();
    AnalysisResult {
        sentiment: classify(&scores),
        confidence_level: confidence_level(confidence(&scores)),
        raw_scores: scores,
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
        text_preview: truncate_with_ellipsis(text, PREVIEW_CHARS),
    }
}
