use chrono::{DateTime, Utc};

/// A point-in-time exchange-rate observation.
#[derive(Debug, Clone)]
pub struct RateQuote {
    /// Units of the quote currency per one unit of the base currency.
    pub rate: f64,
    pub from_currency: String,
    pub to_currency: String,
    /// When this process fetched the quote.
    pub fetched_at: DateTime<Utc>,
    /// The oracle's own refresh timestamp, passed through verbatim when it
    /// was present in the response.
    pub last_refreshed: Option<String>,
}
