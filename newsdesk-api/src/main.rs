//! Newsdesk API server
//!
//! HTTP adapter for the news analysis pipeline: validates a request from
//! the interaction surface, runs the search-then-analyze service, and
//! serializes the response.

mod routes;

use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;

use newsdesk_services::AnalysisService;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,newsdesk_api=debug")),
        )
        .init();

    info!("Starting Newsdesk API");

    // Client construction failures are fatal to the session.
    let analysis_service = match AnalysisService::new() {
        Ok(service) => Arc::new(service),
        Err(e) => {
            anyhow::bail!(
                "Failed to initialize the analysis service: {}\n\n\
                 Please ensure:\n\
                 1. GROQ_API_KEY is set in the environment or in .env.local\n\
                 2. GROQ_MODEL is set if you want a model other than the default\n\
                 3. You have internet connectivity for DuckDuckGo searches",
                e
            );
        }
    };

    let state = AppState { analysis_service };

    // Configure CORS for the interaction surface
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Build router
    let app = Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors)
        .with_state(state);

    // Start server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
