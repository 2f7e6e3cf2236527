mod config;
mod errors;
mod extraction;
mod ingest;
mod llm_client;
mod models;
mod pipeline;
mod ranking;
mod report;
mod resume;
mod scoring;
mod sources;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, SourceConfig};
use crate::errors::PipelineError;
use crate::llm_client::LlmClient;
use crate::pipeline::run_pipeline;
use crate::report::{render_markdown, write_report};
use crate::sources::apify::ApifyJobSource;
use crate::sources::file::FileJobSource;
use crate::sources::JobSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; missing required env vars abort here
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobmatch v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let source = build_source(&config.source)?;
    info!("Job source: {}", source.name());

    let now = Utc::now();
    let run = run_pipeline(&llm, source.as_ref(), &config.resume_path, &config.pipeline, now).await?;
    info!(
        "Matched against profile: skills [{}], languages [{}], domains [{}]",
        run.profile.skills.join(", "),
        run.profile.languages.join(", "),
        run.profile.domains.join(", ")
    );
    info!(
        "Run complete: {} records fetched, {} unique jobs, {} scored, {} skipped",
        run.stats.records_fetched,
        run.stats.jobs_after_dedup,
        run.stats.jobs_scored,
        run.stats.jobs_skipped
    );

    let date = now.format("%Y-%m-%d").to_string();
    let markdown = render_markdown(&run.results, &date, config.pipeline.top_k);
    let path = write_report(&config.report_dir, &date, &markdown).map_err(PipelineError::Report)?;
    info!(
        "Wrote top {} of {} matches to {}",
        config.pipeline.top_k.min(run.results.len()),
        run.results.len(),
        path.display()
    );

    Ok(())
}

fn build_source(source: &SourceConfig) -> Result<Box<dyn JobSource>, PipelineError> {
    let source: Box<dyn JobSource> = match source {
        SourceConfig::Apify {
            api_token,
            actor_id,
            max_polls,
        } => Box::new(
            ApifyJobSource::new(api_token.clone(), actor_id.clone())?.with_max_polls(*max_polls),
        ),
        SourceConfig::File(path) => {
            let file_source = FileJobSource::load(path)?;
            info!("Reading job records from {}", file_source.path().display());
            Box::new(file_source)
        }
    };
    Ok(source)
}
