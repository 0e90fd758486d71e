use crate::{NewsError, NewsItem};
use async_trait::async_trait;

/// Trait for news sources. Implementations may shell out to a scraper
/// process or generate items locally; the router only sees this seam.
///
/// An empty result means "no news for this symbol", not a failure.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>, NewsError>;
}
