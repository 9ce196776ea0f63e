use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use carbon::config::Config;

/// Carbon: multi-level plagiarism detection for pairs of documents.
///
/// Scores two texts with TF-IDF cosine similarity, flags copied sentences
/// by lexical overlap, and surfaces likely paraphrases.
#[derive(Parser)]
#[command(name = "carbon", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two text files and print a similarity report
    Check {
        /// The source document (matches are reported against this)
        file1: PathBuf,

        /// The document to scan for copied or paraphrased sentences
        file2: PathBuf,

        /// Emit the raw JSON report instead of the terminal rendering
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides CARBON_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides CARBON_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("carbon=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file1, file2, json } => {
            let config = Config::load()?;

            let text1 = std::fs::read_to_string(&file1)
                .with_context(|| format!("Failed to read {}", file1.display()))?;
            let text2 = std::fs::read_to_string(&file2)
                .with_context(|| format!("Failed to read {}", file2.display()))?;

            for (path, text) in [(&file1, &text1), (&file2, &text2)] {
                if text.chars().count() > config.max_text_len {
                    anyhow::bail!(
                        "{} is longer than {} characters. Sentence matching is \
                         quadratic in sentence count; set CARBON_MAX_TEXT_LEN to override.",
                        path.display(),
                        config.max_text_len
                    );
                }
            }

            let report = carbon::detect::detect(&text1, &text2)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                carbon::output::terminal::display_report(&report);
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            carbon::web::run_server(config).await?;
        }
    }

    Ok(())
}
