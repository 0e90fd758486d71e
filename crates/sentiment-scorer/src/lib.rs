//! Word-list sentiment scoring for news headlines.
//!
//! Scores are raw positive-minus-negative hit counts against fixed
//! financial word lists; `comparative` normalizes by token count so short
//! and long headlines are comparable. Always returns a result — text with
//! no recognized terms scores neutral.

use news_core::SentimentResult;

const POSITIVE_WORDS: &[&str] = &[
    "upgrade", "beat", "surge", "rally", "gain", "growth", "profit", "bullish",
    "outperform", "strong", "record", "high", "positive", "optimistic", "buy",
    "boost", "rise", "jump", "soar", "breakout", "momentum", "upbeat", "exceeds",
    "dividend", "innovative", "partnership", "expansion", "recovery", "rebound",
    "upside", "robust", "accretive",
];

const NEGATIVE_WORDS: &[&str] = &[
    "downgrade", "miss", "plunge", "crash", "loss", "decline", "bearish",
    "underperform", "weak", "low", "negative", "pessimistic", "sell",
    "drop", "fall", "slump", "warning", "risk", "lawsuit", "fraud",
    "bankruptcy", "default", "layoff", "cut", "recession", "investigation",
    "recall", "debt", "concern", "headwind", "dilution", "probe",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a piece of text. Pure function of the input; matched terms are
    /// returned in encounter order.
    pub fn score(&self, text: &str) -> SentimentResult {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '.' | '!' | '?' | ':'))
            .filter(|w| !w.is_empty())
            .collect();

        if tokens.is_empty() {
            return SentimentResult::neutral();
        }

        let mut positive_terms = Vec::new();
        let mut negative_terms = Vec::new();

        for token in &tokens {
            let clean: String = token.chars().filter(|c| c.is_alphanumeric()).collect();
            if POSITIVE_WORDS.contains(&clean.as_str()) {
                positive_terms.push(clean);
            } else if NEGATIVE_WORDS.contains(&clean.as_str()) {
                negative_terms.push(clean);
            }
        }

        let score = positive_terms.len() as i64 - negative_terms.len() as i64;
        let comparative = score as f64 / tokens.len() as f64;

        SentimentResult {
            score,
            comparative,
            positive_terms,
            negative_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_headline() {
        let result = SentimentScorer::new().score("Shares surge on record profit");
        assert_eq!(result.score, 3);
        assert_eq!(result.positive_terms, vec!["surge", "record", "profit"]);
        assert!(result.negative_terms.is_empty());
        assert!((result.comparative - 3.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_headline() {
        let result = SentimentScorer::new().score("Lawsuit risk triggers sharp decline");
        assert_eq!(result.score, -3);
        assert_eq!(result.negative_terms, vec!["lawsuit", "risk", "decline"]);
    }

    #[test]
    fn test_mixed_headline() {
        let result = SentimentScorer::new().score("Profit growth despite lawsuit");
        assert_eq!(result.score, 1);
        assert_eq!(result.positive_terms.len(), 2);
        assert_eq!(result.negative_terms.len(), 1);
    }

    #[test]
    fn test_neutral_headline() {
        let result = SentimentScorer::new().score("Quarterly report due Tuesday");
        assert_eq!(result.score, 0);
        assert_eq!(result.comparative, 0.0);
        assert!(result.positive_terms.is_empty());
        assert!(result.negative_terms.is_empty());
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let result = SentimentScorer::new().score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.comparative, 0.0);
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        let result = SentimentScorer::new().score("SURGE! Rally, momentum.");
        assert_eq!(result.score, 3);
    }
}
