use anyhow::Context;
use auction_harvester::config::Cli;
use auction_harvester::{export, logging, pipeline, scrapers};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config(chrono::Local::now().date_naive());

    // Initialize logging
    let _guard = logging::init_logging(&config.log_path)?;

    info!("🏠 Auction Harvester - bailiff real-estate auctions");
    info!("Catalog: {}", config.pipeline.catalog_url);

    if let Err(e) = run(&config).await {
        error!("Run aborted: {:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run(config: &auction_harvester::config::RunConfig) -> anyhow::Result<()> {
    info!("Start {:?} renderer.", config.renderer);
    let renderer = scrapers::build_renderer(config.renderer, &config.render)
        .context("Failed to start page renderer")?;

    let report = pipeline::run(renderer.as_ref(), &config.pipeline)
        .await
        .context("Pipeline failed")?;

    info!(
        "✅ Collected {} offers from {} pages ({} listings skipped)",
        report.processed, report.pages, report.skipped
    );

    export::write_csv(&config.csv_path, &report.records)
        .await
        .context("Failed to write CSV")?;

    if let Some(json_path) = &config.json_path {
        export::write_json(json_path, &report.records)
            .await
            .context("Failed to write JSON snapshot")?;
    }

    info!("Close {} renderer.", renderer.backend_name());
    drop(renderer);

    Ok(())
}
