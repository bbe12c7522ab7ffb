//! Command-line access to the insight workflow
//!
//! `inspect` renders an exported output file as text; `run` calls the live
//! webhook and prints the extracted report as JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use insight_core::config::Config;
use insight_core::runs::{inspect, run_live, Document};
use webhook_client::WebhookClient;

#[derive(Parser)]
#[command(name = "insight")]
#[command(about = "Madison Market Insight Engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the prompt, metadata and report from an exported output file
    Inspect {
        /// JSON file to read, or `-` for stdin
        file: PathBuf,
        /// Print the extracted fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the live workflow for a brand and goal
    Run {
        #[arg(long)]
        brand: String,
        #[arg(long)]
        goal: String,
    },
}

fn read_input(file: &Path) -> Result<Vec<u8>> {
    if file.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn print_inspection(file: &Path, json: bool) -> Result<()> {
    let bytes = read_input(file)?;
    let inspection = inspect(Document::Upload(&bytes))?;
    let result = &inspection.result;

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("== Run Metadata");
    if result.metadata.is_empty() {
        println!("No metadata found in this output (okay).");
    } else {
        for (key, value) in &result.metadata {
            println!("{key}: {value}");
        }
    }

    println!("\n== Prompt");
    if result.prompt.is_empty() {
        println!("Prompt not found in this output.");
    } else {
        println!("{}", result.prompt_preview());
    }

    println!("\n== Executive Insight Report");
    if result.report_text.is_empty() {
        println!("Could not detect the AI report text.");
    } else {
        println!("{}", result.report_text);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { file, json } => print_inspection(&file, json),
        Commands::Run { brand, goal } => {
            let config = Config::from_env().context("Failed to load configuration")?;
            let client = WebhookClient::new(config.webhook)?;
            let run = run_live(&client, &brand, &goal).await?;
            println!("{}", serde_json::to_string_pretty(&run.report)?);
            Ok(())
        }
    }
}
