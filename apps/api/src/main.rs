mod applications;
mod config;
mod db;
mod documents;
mod errors;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod profiles;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::matching::scorer::{KeywordMatchScorer, LlmMatchScorer, MatchScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job board API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url, config.database_max_connections).await?;

    let match_scorer: Arc<dyn MatchScorer> = if config.llm_scoring_enabled() {
        let llm = LlmClient::new(config.anthropic_api_key.clone())?;
        info!("Match scoring: LLM ({}) with keyword fallback", llm_client::MODEL);
        Arc::new(LlmMatchScorer::new(llm))
    } else {
        info!("Match scoring: keyword heuristic only");
        Arc::new(KeywordMatchScorer)
    };

    let state = AppState { db, match_scorer };

    // TODO: restrict CORS origins once the web client's domain is fixed
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
