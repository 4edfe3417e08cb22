use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibe2go::cache::PlaceCache;
use vibe2go::config::Config;
use vibe2go::services::overpass::OverpassClient;
use vibe2go::services::suggestions::SuggestionService;
use vibe2go::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibe2go=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Vibe2Go API server");
    tracing::info!("Configuration loaded successfully");

    // Initialize services
    let overpass = if let Some(ref url) = config.overpass_url {
        tracing::info!("Using configured Overpass endpoint: {}", url);
        OverpassClient::with_endpoints(vec![url.clone()])
    } else {
        OverpassClient::new()
    };
    let cache = PlaceCache::new(config.place_cache_ttl, config.place_cache_max_entries);
    let suggestions = SuggestionService::new(overpass, cache);

    // Create application state
    let state = Arc::new(AppState { suggestions });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api", vibe2go::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
