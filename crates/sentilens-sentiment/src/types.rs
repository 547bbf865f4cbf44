use std::path::PathBuf;
use std::time::Duration;

use sentilens_core::{AppConfig, DEFAULT_FETCH_USER_AGENT};

use crate::error::AnalysisError;

/// Minimum number of characters (ignoring surrounding whitespace) a text
/// must have before either model is run.
pub const MIN_TEXT_CHARS: usize = 5;

/// Upper bound on text pulled from a web page, in characters.
pub const MAX_URL_TEXT_CHARS: usize = 5000;

/// Configuration for the source extractor.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// Directory for temporary upload files. `None` uses the system temp dir.
    pub spool_dir: Option<PathBuf>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_FETCH_USER_AGENT.to_string(),
            spool_dir: None,
        }
    }
}

impl ExtractorConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            fetch_timeout: Duration::from_secs(config.fetch_timeout_secs),
            user_agent: config.fetch_user_agent.clone(),
            spool_dir: config.upload_dir.clone(),
        }
    }
}

/// Extracted text that has passed the minimum-length gate.
///
/// The only way to build one is [`PlainText::new`], so the scorer can never
/// see text shorter than [`MIN_TEXT_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText(String);

impl PlainText {
    /// Apply the minimum-length gate.
    ///
    /// The original text is kept as-is; only the length check ignores
    /// leading and trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoUsableContent`] when the trimmed text has
    /// fewer than [`MIN_TEXT_CHARS`] characters.
    pub fn new(text: String) -> Result<Self, AnalysisError> {
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            return Err(AnalysisError::NoUsableContent {
                min_chars: MIN_TEXT_CHARS,
            });
        }
        Ok(Self(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PlainText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
