//! Axum application setup.

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::error::handle_panic;
use super::handlers;
use super::state::AppState;

/// Listener and access settings for the web server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

/// Build the CORS layer for a static origin allow-list.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return Ok(cors.allow_origin(Any));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cors.allow_origin(AllowOrigin::list(origins)))
}

/// Create the Axum router with all routes.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/metadata", get(handlers::get_metadata))
        // Lookup
        .route("/student/:sbd", get(handlers::get_student))
        .route("/students/search", post(handlers::search_students))
        // Statistics
        .route("/statistics/score-range", get(handlers::score_range))
        .route(
            "/statistics/by-council/:ma_hd",
            get(handlers::council_statistics),
        )
        .route("/top-scores", get(handlers::top_scores));

    let router = Router::new()
        .route("/", get(handlers::service_index))
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes)
        .fallback(handlers::endpoint_not_found);

    with_middleware(router, cors).with_state(state)
}

/// Apply panic recovery, security headers, compression, request tracing
/// and CORS.
pub fn with_middleware<S>(router: Router<S>, cors: CorsLayer) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the web server and run until Ctrl+C.
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let cors = cors_layer(&config.allowed_origins)?;
    let app = create_router(state, cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
