//! News provider implementations.
//!
//! `ScriptProvider` shells out to an external scraper process and parses
//! its stdout as JSON. `FixedProvider` generates deterministic headlines
//! and is the default when no scraper command is configured.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use news_core::{NewsError, NewsItem, NewsProvider};
use tokio::process::Command;

/// Time budget for one scraper invocation.
pub const SCRAPE_TIMEOUT_SECS: u64 = 15;

/// Invokes an external scraper command with the symbol as its final
/// argument. The scraper contract on stdout:
///
/// - JSON array of news items: success (an empty array means "no news")
/// - JSON object with an `error` field: scraper-side failure
/// - anything else, a non-zero exit, or a timeout: failure
pub struct ScriptProvider {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ScriptProvider {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: Duration::from_secs(SCRAPE_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from a whitespace-separated command line, e.g.
    /// `"python3 scripts/scrape_news.py"`. Returns `None` for a blank line.
    pub fn from_command_line(cmdline: &str) -> Option<Self> {
        let mut parts = cmdline.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }
}

#[async_trait]
impl NewsProvider for ScriptProvider {
    async fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>, NewsError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(symbol)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the wait future on timeout must not leave an
            // orphaned scraper behind.
            .kill_on_drop(true);

        tracing::debug!("Spawning scraper: {} {:?} {}", self.program, self.args, symbol);

        let child = cmd.spawn().map_err(|e| {
            NewsError::Provider(format!("failed to spawn scraper '{}': {}", self.program, e))
        })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result
                .map_err(|e| NewsError::Provider(format!("error waiting on scraper: {}", e)))?,
            Err(_) => {
                tracing::warn!(
                    "Scraper for {} exceeded {}s timeout, killing it",
                    symbol,
                    self.timeout.as_secs()
                );
                return Err(NewsError::ProviderTimeout(self.timeout.as_secs()));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                format!("scraper exited with {}", output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(NewsError::Provider(detail));
        }

        parse_scraper_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse scraper stdout into news items. Pure function, independent of
/// process handling so the wire contract is testable on its own.
pub fn parse_scraper_output(stdout: &str) -> Result<Vec<NewsItem>, NewsError> {
    let value: serde_json::Value = serde_json::from_str(stdout.trim())
        .map_err(|e| NewsError::ParseError(format!("scraper output is not valid JSON: {}", e)))?;

    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map_err(|e| NewsError::ParseError(format!("unexpected news item shape: {}", e))),
        serde_json::Value::Object(ref map) if map.contains_key("error") => {
            let msg = map
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown scraper error");
            Err(NewsError::Provider(msg.to_string()))
        }
        _ => Err(NewsError::ParseError(
            "expected a JSON array of news items or an error object".to_string(),
        )),
    }
}

/// Deterministic headline generator, matching the shape a real scraper
/// would emit. Default provider when `SCRAPER_CMD` is not set.
pub struct FixedProvider;

#[async_trait]
impl NewsProvider for FixedProvider {
    async fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>, NewsError> {
        let now = Utc::now();
        Ok(vec![
            NewsItem {
                source: "Yahoo Finance".to_string(),
                title: format!("{} surges on earnings beat", symbol),
                published_at: now,
                url: format!("https://finance.yahoo.com/quote/{}", symbol),
                sentiment: None,
            },
            NewsItem {
                source: "MarketWatch".to_string(),
                title: format!("Analysts raise {} price target", symbol),
                published_at: now - chrono::Duration::days(1),
                url: format!("https://www.marketwatch.com/investing/stock/{}", symbol),
                sentiment: None,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_array() {
        let out = r#"[
            {"source": "Yahoo Finance", "title": "AAPL surges", "publishedAt": "2024-01-05T12:00:00Z", "url": "https://example.com/1"},
            {"source": "MarketWatch", "title": "AAPL dips", "date": "2024-01-04T09:30:00Z", "url": "https://example.com/2"}
        ]"#;
        let items = parse_scraper_output(out).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source, "Yahoo Finance");
        assert_eq!(items[1].title, "AAPL dips");
        assert!(items[0].sentiment.is_none());
    }

    #[test]
    fn test_parse_empty_array() {
        let items = parse_scraper_output("[]").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_error_object() {
        let err = parse_scraper_output(r#"{"error": "blocked by site"}"#).unwrap_err();
        match err {
            NewsError::Provider(msg) => assert_eq!(msg, "blocked by site"),
            other => panic!("expected Provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_scraper_output("not json at all").unwrap_err();
        assert!(matches!(err, NewsError::ParseError(_)));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_scraper_output(r#"{"news": []}"#).unwrap_err();
        assert!(matches!(err, NewsError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_fixed_provider_generates_two_items() {
        let items = FixedProvider.fetch_news("NVDA").await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].title.contains("NVDA"));
        assert!(items[0].published_at >= items[1].published_at);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_script_provider_success() {
        let provider = ScriptProvider::new(
            "sh",
            vec![
                "-c".to_string(),
                r#"echo '[{"source":"Test","title":"hello '"$0"'","publishedAt":"2024-01-05T12:00:00Z","url":"https://example.com"}]'"#.to_string(),
            ],
        );
        let items = provider.fetch_news("AAPL").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "hello AAPL");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_script_provider_nonzero_exit() {
        let provider = ScriptProvider::new(
            "sh",
            vec!["-c".to_string(), "echo scrape failed >&2; exit 3".to_string()],
        );
        let err = provider.fetch_news("AAPL").await.unwrap_err();
        match err {
            NewsError::Provider(msg) => assert!(msg.contains("scrape failed")),
            other => panic!("expected Provider error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_script_provider_timeout() {
        let provider = ScriptProvider::new("sh", vec!["-c".to_string(), "sleep 5".to_string()])
            .with_timeout(Duration::from_millis(100));
        let err = provider.fetch_news("AAPL").await.unwrap_err();
        assert!(matches!(err, NewsError::ProviderTimeout(_)));
    }

    #[tokio::test]
    async fn test_script_provider_spawn_failure() {
        let provider = ScriptProvider::new("definitely-not-a-real-binary", vec![]);
        let err = provider.fetch_news("AAPL").await.unwrap_err();
        assert!(matches!(err, NewsError::Provider(_)));
    }

    #[test]
    fn test_from_command_line() {
        let provider = ScriptProvider::from_command_line("python3 scripts/scrape_news.py").unwrap();
        assert_eq!(provider.program, "python3");
        assert_eq!(provider.args, vec!["scripts/scrape_news.py"]);
        assert!(ScriptProvider::from_command_line("   ").is_none());
    }
}
