use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news headline for a symbol.
///
/// `sentiment` is absent on the wire coming out of a scraper; the router
/// fills it in before responding. The `date` alias accepts legacy scraper
/// output that predates the `publishedAt` field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub source: String,
    pub title: String,
    #[serde(alias = "date")]
    pub published_at: DateTime<Utc>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
}

/// Sentiment of a piece of text.
///
/// `score` is the raw positive-minus-negative hit count; `comparative` is
/// that score divided by the token count (0.0 for empty text).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    pub score: i64,
    pub comparative: f64,
    pub positive_terms: Vec<String>,
    pub negative_terms: Vec<String>,
}

impl SentimentResult {
    /// Neutral result for unscorable text.
    pub fn neutral() -> Self {
        Self {
            score: 0,
            comparative: 0.0,
            positive_terms: Vec::new(),
            negative_terms: Vec::new(),
        }
    }
}

/// Response body for the news endpoint. Item order follows provider output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub symbol: String,
    pub news: Vec<NewsItem>,
}

/// One headline's contribution to a sentiment summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentBreakdownEntry {
    pub title: String,
    pub score: i64,
}

/// Response body for the sentiment endpoint. `sentiment_score` is the mean
/// of per-item scores; only ever computed for a non-empty item set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    pub symbol: String,
    pub sentiment_score: f64,
    pub news_count: usize,
    pub breakdown: Vec<SentimentBreakdownEntry>,
}

/// A routable endpoint, for startup diagnostics.
#[derive(Debug, Clone)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
}
