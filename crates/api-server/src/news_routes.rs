//! News route: validate the symbol, fetch headlines from the provider,
//! annotate each one with sentiment, and return them in provider order.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use news_core::{NewsError, NewsResponse};

use crate::{ApiError, AppState};

pub fn news_routes() -> Router<AppState> {
    Router::new().route("/api/news/:symbol", get(get_news))
}

async fn get_news(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<NewsResponse>, ApiError> {
    let symbol = symbol.to_uppercase();

    // Validate before touching the provider; no scraper run for junk input.
    if !symbol_registry::is_valid(&symbol) {
        return Err(NewsError::InvalidSymbol.into());
    }

    let items = state.provider.fetch_news(&symbol).await?;
    if items.is_empty() {
        return Err(NewsError::NoNewsFound.into());
    }

    let news = items
        .into_iter()
        .map(|mut item| {
            item.sentiment = Some(state.scorer.score(&item.title));
            item
        })
        .collect();

    Ok(Json(NewsResponse { symbol, news }))
}
