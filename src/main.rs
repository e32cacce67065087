use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tripplanner::config::PlannerConfig;
use tripplanner::gemini::GeminiClient;
use tripplanner::web;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing GEMINI_API_KEY halts here, before the server binds
    let config = PlannerConfig::load()?;

    // RUST_LOG wins over the configured level when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    tracing::info!(
        "Starting Smart Travel Planner AI (model '{}')",
        config.gemini.model
    );

    let model = GeminiClient::new(config.gemini.clone())?;

    web::run(config.server.port, Arc::new(model)).await
}
