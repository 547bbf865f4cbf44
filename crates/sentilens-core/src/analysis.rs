use serde::{Deserialize, Serialize};

/// Overall sentiment label decided by the fusion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Sentiment::Positive => "\u{1F60A}",
            Sentiment::Negative => "\u{1F61E}",
            Sentiment::Neutral => "\u{1F610}",
        }
    }

    /// Display colour used by front ends, as a CSS hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Sentiment::Positive => "#28a745",
            Sentiment::Negative => "#dc3545",
            Sentiment::Neutral => "#6c757d",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse strength bucket of the stronger of the two model signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw outputs of the two scoring models for one text.
///
/// `polarity` and `subjectivity` come from the lexicon polarity model,
/// `compound` from the valence model. Never mutated after scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScores {
    /// Signed strength in `[-1.0, 1.0]`.
    pub polarity: f64,
    /// `0.0` fully objective to `1.0` fully subjective.
    pub subjectivity: f64,
    /// Normalized valence aggregate in `[-1.0, 1.0]`.
    pub compound: f64,
}

/// Where the analyzed text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Text,
    File,
    Url,
}

impl SourceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Text => "text",
            SourceKind::File => "file",
            SourceKind::Url => "url",
        }
    }
}

/// Fused outcome of one analysis. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence_level: ConfidenceLevel,
    pub raw_scores: RawScores,
    /// Whitespace-delimited tokens in the full, untruncated text.
    pub word_count: usize,
    /// Characters in the full, untruncated text.
    pub char_count: usize,
    /// At most 500 characters, `"..."`-terminated when truncated.
    pub text_preview: String,
}

impl AnalysisResult {
    /// One-sentence human summary, e.g.
    /// `"The text shows positive sentiment with high confidence."`.
    #[must_use]
    pub fn details(&self) -> String {
        format!(
            "The text shows {} sentiment with {} confidence.",
            self.sentiment.as_str().to_lowercase(),
            self.confidence_level.as_str().to_lowercase()
        )
    }
}

/// First `max_chars` characters of `text`, with `"..."` appended when
/// anything was cut. Text at or under the limit is returned unchanged.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
