//! Stocks listing route.

use axum::{routing::get, Json, Router};

use crate::AppState;

pub fn stock_routes() -> Router<AppState> {
    Router::new().route("/api/stocks", get(list_stocks))
}

/// All supported symbols, in fixed declaration order.
async fn list_stocks() -> Json<Vec<&'static str>> {
    Json(symbol_registry::all().to_vec())
}
