mod analyze;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::analyze::SourceArgs;

#[derive(Debug, Parser)]
#[command(name = "sentilens-cli")]
#[command(about = "SentiLens command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze text, a document or a web page and print the JSON result
    Analyze {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Analyze a source and write a PDF report
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory the report is written to
        #[arg(long, default_value = ".")]
        out: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = sentilens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Analyze { source }) => analyze::run_analyze(&config, source).await,
        Some(Commands::Report { source, out }) => {
            analyze::run_report(&config, source, &out).await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
