//! Stock News API server.
//!
//! HTTP API over a fixed list of 20 NASDAQ symbols: `/api/stocks` lists
//! them, `/api/news/:symbol` returns scraped headlines with sentiment
//! attached, `/api/sentiment/:symbol` returns an aggregate score. A static
//! landing page is served from `public/`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use news_core::{NewsError, NewsProvider, RouteInfo};
use news_provider::{FixedProvider, ScriptProvider};
use sentiment_scorer::SentimentScorer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

mod news_routes;
mod port;
mod sentiment_routes;
mod stock_routes;


pub use port::{fallback_port, resolve_port};

pub const DEFAULT_PORT: u16 = 3007;

/// Shared per-request context. The provider handle and scorer are the only
/// cross-request state, and both are immutable.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn NewsProvider>,
    pub scorer: SentimentScorer,
}

/// Error type returned by handlers. Wraps the domain taxonomy and converts
/// it to an HTTP status plus a JSON body at the router boundary; nothing
/// propagates past here.
pub struct ApiError(NewsError);

impl From<NewsError> for ApiError {
    fn from(err: NewsError) -> Self {
        Self(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(NewsError::Internal(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self.0 {
            NewsError::InvalidSymbol => (
                StatusCode::BAD_REQUEST,
                "Invalid NASDAQ symbol".to_string(),
                None,
            ),
            NewsError::NoNewsFound => {
                (StatusCode::NOT_FOUND, "No news found".to_string(), None)
            }
            NewsError::ProviderTimeout(secs) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "News provider timed out".to_string(),
                Some(format!("scraper exceeded the {}s time budget", secs)),
            ),
            NewsError::Provider(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "News provider failed".to_string(),
                Some(msg),
            ),
            NewsError::ParseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse provider output".to_string(),
                Some(msg),
            ),
            NewsError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(msg),
            ),
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {} ({:?})", error, details);
        }

        let mut body = serde_json::json!({ "error": error });
        if let Some(details) = details {
            body["details"] = serde_json::Value::String(details);
        }

        (status, Json(body)).into_response()
    }
}

/// Static route table for startup diagnostics. Kept separate from router
/// construction so listing routes never touches request handling.
pub fn list_routes() -> Vec<RouteInfo> {
    vec![
        RouteInfo { method: "GET", path: "/api/stocks" },
        RouteInfo { method: "GET", path: "/api/news/:symbol" },
        RouteInfo { method: "GET", path: "/api/sentiment/:symbol" },
        RouteInfo { method: "GET", path: "/" },
    ]
}

/// Build the application router. CORS is open to all origins on every
/// endpoint; unmatched paths fall through to the static `public/` directory
/// (which serves the landing page at `/`).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(stock_routes::stock_routes())
        .merge(news_routes::news_routes())
        .merge(sentiment_routes::sentiment_routes())
        .fallback_service(ServeDir::new("public"))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn init_tracing() {
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }
}

/// Bind the listener, retrying exactly once on `port + 1` when the
/// configured port is already taken. Any other bind error is fatal.
async fn bind_with_fallback(port: u16) -> anyhow::Result<tokio::net::TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            let next = fallback_port(port)
                .ok_or_else(|| anyhow::anyhow!("Port {} in use and no fallback available", port))?;
            tracing::warn!("Port {} already in use, falling back to {}", port, next);
            let fallback = SocketAddr::from(([0, 0, 0, 0], next));
            Ok(tokio::net::TcpListener::bind(fallback).await?)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let port = resolve_port(&args, std::env::var("PORT").ok().as_deref(), DEFAULT_PORT);

    let provider: Arc<dyn NewsProvider> = match std::env::var("SCRAPER_CMD")
        .ok()
        .and_then(|cmd| ScriptProvider::from_command_line(&cmd))
    {
        Some(script) => {
            tracing::info!("News provider: external scraper from SCRAPER_CMD");
            Arc::new(script)
        }
        None => {
            tracing::info!("News provider: generated headlines (SCRAPER_CMD not set)");
            Arc::new(FixedProvider)
        }
    };

    let state = AppState {
        provider,
        scorer: SentimentScorer::new(),
    };
    let app = build_router(state);

    for route in list_routes() {
        tracing::info!("Route: {} {}", route.method, route.path);
    }

    let listener = bind_with_fallback(port).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Stock News API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
