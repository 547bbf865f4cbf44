//! Shared domain types and configuration for SentiLens.
//!
//! Everything here is plain data: the analysis record produced by the
//! fusion engine, its wire representation, and the environment-driven
//! application config. No I/O beyond reading env vars.

mod analysis;
mod app_config;
mod config;
mod wire;

pub use analysis::{
    truncate_with_ellipsis, AnalysisResult, ConfidenceLevel, RawScores, Sentiment, SourceKind,
};
pub use app_config::{AppConfig, Environment, DEFAULT_FETCH_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env, MAX_FETCH_TIMEOUT_SECS};
pub use wire::{AnalysisPayload, AnalyzeResponse, ErrorResponse, STATUS_ERROR, STATUS_SUCCESS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
