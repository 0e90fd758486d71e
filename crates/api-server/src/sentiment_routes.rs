//! Sentiment summary route.
//!
//! Fetches news through the provider directly (an internal call, not a
//! round-trip through the news endpoint) and aggregates per-headline
//! scores into a mean plus a breakdown.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use news_core::{NewsError, SentimentBreakdownEntry, SentimentSummary};

use crate::{ApiError, AppState};

pub fn sentiment_routes() -> Router<AppState> {
    Router::new().route("/api/sentiment/:symbol", get(get_sentiment))
}

async fn get_sentiment(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<SentimentSummary>, ApiError> {
    let symbol = symbol.to_uppercase();

    if !symbol_registry::is_valid(&symbol) {
        return Err(NewsError::InvalidSymbol.into());
    }

    let items = state.provider.fetch_news(&symbol).await?;
    // Empty maps to 404 before any aggregation, so the mean below never
    // divides by zero.
    if items.is_empty() {
        return Err(NewsError::NoNewsFound.into());
    }

    let news_count = items.len();
    let mut total: i64 = 0;
    let mut breakdown = Vec::with_capacity(news_count);

    for item in &items {
        let result = state.scorer.score(&item.title);
        total += result.score;
        breakdown.push(SentimentBreakdownEntry {
            title: item.title.clone(),
            score: result.score,
        });
    }

    let sentiment_score = total as f64 / news_count as f64;

    Ok(Json(SentimentSummary {
        symbol,
        sentiment_score,
        news_count,
        breakdown,
    }))
}
