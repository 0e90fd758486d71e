//! Fixed allow-list of supported NASDAQ symbols.
//!
//! Top 20 NASDAQ stocks by market cap. The list is declaration-ordered and
//! immutable; the stocks endpoint returns it verbatim.

const NASDAQ_STOCKS: &[&str] = &[
    "AAPL", "MSFT", "AMZN", "NVDA", "GOOGL",
    "META", "TSLA", "AVGO", "PEP", "COST",
    "CSCO", "ADBE", "INTC", "CMCSA", "AMD",
    "TXN", "QCOM", "AMGN", "HON", "INTU",
];

/// All supported symbols in declaration order.
pub fn all() -> &'static [&'static str] {
    NASDAQ_STOCKS
}

/// Whether `symbol` is in the allow-list. Case-insensitive: input is
/// upper-cased before lookup.
pub fn is_valid(symbol: &str) -> bool {
    let upper = symbol.to_uppercase();
    NASDAQ_STOCKS.contains(&upper.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_twenty_symbols() {
        assert_eq!(all().len(), 20);
    }

    #[test]
    fn test_declaration_order_preserved() {
        assert_eq!(all()[0], "AAPL");
        assert_eq!(all()[4], "GOOGL");
        assert_eq!(all()[19], "INTU");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert!(is_valid("AAPL"));
        assert!(is_valid("aapl"));
        assert!(is_valid("TsLa"));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert!(!is_valid("ZZZZ"));
        assert!(!is_valid(""));
        assert!(!is_valid("AAPL "));
    }
}
