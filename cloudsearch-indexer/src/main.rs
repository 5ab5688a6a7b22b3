use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use cloudsearch_indexer::records::read_export;
use cloudsearch_indexer::telemetry::{init_tracing, LogFormat};
use cloudsearch_indexer::{AppConfig, Dependencies};
use cloudsearch_indexer_pipeline::{LoadSummary, MappingSource, SchemaBuilder};

#[derive(Parser)]
#[command(name = "cloudsearch-indexer")]
#[command(about = "Index blog posts into an Amazon CloudSearch domain", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the index field definitions as JSON
    Schema {
        /// Print field names only
        #[arg(long)]
        names_only: bool,
    },
    /// Define the index fields on the domain and request re-indexing
    Provision,
    /// Index the posts of a JSON export
    Index {
        /// Path to the post export
        records: PathBuf,
    },
    /// Remove the posts of a JSON export from the index
    Delete {
        /// Path to the post export
        records: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(LogFormat::parse(env::var("LOG_FORMAT").ok().as_deref()));

    let result = match cli.command {
        Commands::Schema { names_only } => print_schema(&SchemaBuilder::new(config.settings), names_only),
        Commands::Provision => provision(config).await,
        Commands::Index { records } => index(config, records).await,
        Commands::Delete { records } => delete(config, records).await,
    };

    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}

fn print_schema(builder: &SchemaBuilder, names_only: bool) -> Result<()> {
    let output = if names_only {
        serde_json::to_string_pretty(&builder.field_names()?)?
    } else {
        serde_json::to_string_pretty(&builder.build()?)?
    };
    println!("{}", output);
    Ok(())
}

async fn provision(config: AppConfig) -> Result<()> {
    let dependencies = Dependencies::new(config).await?;
    let summary = dependencies.provisioner()?.provision().await?;

    for failure in &summary.failed {
        error!(field = %failure.field, message = %failure.message, "Index field not defined");
    }
    info!(
        defined = summary.defined.len(),
        failed = summary.failed.len(),
        "Provisioning finished"
    );

    if !summary.is_complete() {
        bail!("{} index fields could not be defined", summary.failed.len());
    }
    Ok(())
}

async fn index(config: AppConfig, path: PathBuf) -> Result<()> {
    let (store, records) = read_export(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let dependencies = Dependencies::new(config).await?;
    let loader = dependencies.loader(Arc::new(store))?;
    let summary = loader
        .index_records(&records, MappingSource::Persisted)
        .await?;

    report(&summary)
}

async fn delete(config: AppConfig, path: PathBuf) -> Result<()> {
    let (store, records) = read_export(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let dependencies = Dependencies::new(config).await?;
    let loader = dependencies.loader(Arc::new(store))?;
    let summary = loader.delete_records(&records).await?;

    report(&summary)
}

fn report(summary: &LoadSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&summary_json(summary))?);

    if !summary.is_complete() {
        bail!(
            "{} records skipped, {} batches failed",
            summary.skipped,
            summary.batches_failed
        );
    }
    Ok(())
}

fn summary_json(summary: &LoadSummary) -> serde_json::Value {
    serde_json::json!({
        "total": summary.total,
        "mapped": summary.mapped,
        "skipped": summary.skipped,
        "batches_submitted": summary.batches_submitted,
        "batches_failed": summary.batches_failed,
    })
}
