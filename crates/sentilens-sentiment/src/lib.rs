//! Sentiment analysis pipeline for SentiLens.
//!
//! Turns one of three sources (typed text, an uploaded document, a web page)
//! into plain text, scores it with two independent lexicon models, and fuses
//! both signals into a single label with a confidence grade.

pub mod error;
pub mod fusion;
pub mod models;
pub mod pipeline;
pub mod scorer;
pub mod sources;
pub mod types;

pub use error::AnalysisError;
pub use fusion::fuse;
pub use pipeline::{AnalysisOutcome, Analyzer};
pub use scorer::score;
pub use sources::{DocumentError, DocumentKind, RawInput, SourceExtractor};
pub use types::{ExtractorConfig, PlainText, MIN_TEXT_CHARS};
