mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod screening;
mod source;

use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::PdfTextExtractor;
use crate::llm_client::LlmClient;
use crate::screening::exemplars::ExemplarBank;
use crate::screening::pipeline::ScreeningPipeline;
use crate::source::{DocumentSource, S3DocumentSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener v{}", env!("CARGO_PKG_VERSION"));

    // Initialize S3 / MinIO
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Load the exemplar bank (fatal here if a custom bank were empty)
    let bank = ExemplarBank::builtin();
    info!("Exemplar bank loaded ({} criteria)", bank.criteria().len());

    let source = Arc::new(S3DocumentSource::new(s3, config.s3_bucket.clone()));

    let resume_ids = source.list(&config.resume_prefix).await?;

    if resume_ids.is_empty() {
        info!(
            "No resumes found under s3://{}/{}",
            config.s3_bucket, config.resume_prefix
        );
        return Ok(());
    }
    info!("Found {} resume(s) to screen", resume_ids.len());

    let pipeline = ScreeningPipeline::new(
        source,
        Arc::new(PdfTextExtractor),
        Arc::new(llm),
        bank,
    );

    let records = pipeline.process_batch(&resume_ids).await;

    let file = File::create(&config.results_path)
        .with_context(|| format!("Failed to create {}", config.results_path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)
        .context("Failed to serialize screening records")?;

    info!(
        "Screening complete: {} record(s) written to {}",
        records.len(),
        config.results_path
    );

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "screener-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
