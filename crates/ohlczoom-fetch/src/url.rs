//! Market-data endpoint construction.

/// Base URL of the market-data mock service.
pub const BASE_URL: &str = "https://mock.apidog.com/m1/892843-874692-default";

/// Symbol fetched when none is configured.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Builds the history URL for a symbol.
///
/// URL format: `{base}/marketdata/history/{SYMBOL}`
///
/// # Example
///
/// ```
/// use ohlczoom_fetch::url::{BASE_URL, history_url};
///
/// let url = history_url(BASE_URL, "aapl");
/// assert_eq!(url, "https://mock.apidog.com/m1/892843-874692-default/marketdata/history/AAPL");
/// ```
#[must_use]
pub fn history_url(base: &str, symbol: &str) -> String {
    format!(
        "{}/marketdata/history/{}",
        base.trim_end_matches('/'),
        symbol.trim().to_uppercase()
    )
}

/// Returns the default history URL.
#[must_use]
pub fn default_url() -> String {
    history_url(BASE_URL, DEFAULT_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_url_uppercase() {
        let url = history_url("https://example.com", "msft");
        assert_eq!(url, "https://example.com/marketdata/history/MSFT");
    }

    #[test]
    fn test_history_url_trailing_slash() {
        let url = history_url("https://example.com/", "AAPL");
        assert_eq!(url, "https://example.com/marketdata/history/AAPL");
    }

    #[test]
    fn test_default_url() {
        assert!(default_url().ends_with("/marketdata/history/AAPL"));
    }
}
