//! `analyze` and `report` command handlers.
//!
//! Both print the same JSON envelopes the HTTP server returns, so scripts can
//! treat the two front ends alike.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::Args;
use sentilens_core::{AnalyzeResponse, AppConfig, ErrorResponse};
use sentilens_sentiment::{AnalysisOutcome, Analyzer, ExtractorConfig, RawInput};

/// Exactly one input source.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Text to analyze
    #[arg(long)]
    pub text: Option<String>,

    /// Path to a .txt, .pdf or .docx document
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Web page to fetch and analyze
    #[arg(long)]
    pub url: Option<String>,
}

impl SourceArgs {
    /// Turn the chosen source into pipeline input, reading the file if one
    /// was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read from disk.
    pub async fn into_input(self) -> anyhow::Result<RawInput> {
        match (self.text, self.file, self.url) {
            (Some(text), _, _) => Ok(RawInput::Text(text)),
            (_, Some(path), _) => {
                let bytes = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Ok(RawInput::Document { bytes, filename })
            }
            (_, _, Some(url)) => Ok(RawInput::Url(url)),
            (None, None, None) => anyhow::bail!("one of --text, --file or --url is required"),
        }
    }
}

/// Run one analysis, printing the error envelope on failure.
async fn analyze_source(
    config: &AppConfig,
    source: SourceArgs,
) -> anyhow::Result<AnalysisOutcome> {
    let analyzer = Analyzer::new(&ExtractorConfig::from_app_config(config))?;
    let input = source.into_input().await?;

    match analyzer.analyze(input).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            let envelope = ErrorResponse::new(e.code(), e.to_string());
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            Err(anyhow::anyhow!("analysis failed: {e}"))
        }
    }
}

/// Analyze a source and print the success envelope.
///
/// # Errors
///
/// Returns an error if the source cannot be read or analysis fails.
pub(crate) async fn run_analyze(config: &AppConfig, source: SourceArgs) -> anyhow::Result<()> {
    let outcome = analyze_source(config, source).await?;
    let response = AnalyzeResponse::new(outcome.source_kind, &outcome.result);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Analyze a source and write a PDF report into `out_dir`.
///
/// # Errors
///
/// Returns an error if analysis fails, the report cannot be rendered, or
/// the file cannot be written.
pub(crate) async fn run_report(
    config: &AppConfig,
    source: SourceArgs,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let outcome = analyze_source(config, source).await?;
    let generated_at = Local::now();
    let bytes = sentilens_report::render_at(&outcome.result, &outcome.text, generated_at)?;

    let path = out_dir.join(sentilens_report::report_filename(generated_at));
    write_report(&path, &bytes).await?;

    tracing::info!(path = %path.display(), size = bytes.len(), "report written");
    println!("{}", path.display());
    Ok(())
}

async fn write_report(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}
