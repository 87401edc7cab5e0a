use async_trait::async_trait;
use thiserror::Error;

use crate::models::rate::RateQuote;

/// Errors surfaced by an exchange-rate source.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("network error reaching the rate oracle: {0}")]
    Transport(String),

    #[error("rate oracle did not answer within {0} seconds")]
    Timeout(u64),

    #[error("rate oracle answered HTTP {0}")]
    Status(u16),

    #[error("rate oracle envelope is malformed: {0}")]
    Envelope(String),

    #[error("rate oracle returned an unparseable rate {0:?}")]
    Rate(String),

    #[error("no oracle credential configured: {0}")]
    Credential(String),
}

impl RateError {
    /// Whether retrying the lookup is sensible. Transport faults, timeouts
    /// and server-side failures are; a malformed envelope or rate is not,
    /// since the same bytes would come back again.
    pub fn is_retryable(&self) -> bool {
        match self {
            RateError::Transport(_) | RateError::Timeout(_) => true,
            RateError::Status(code) => *code >= 500,
            RateError::Envelope(_) | RateError::Rate(_) | RateError::Credential(_) => false,
        }
    }
}

/// Live source of the exchange rate used to value new registrations.
///
/// Implementations answer with the current quote or fail; there is no
/// caching and no retrying at this seam.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn quote(&self) -> Result<RateQuote, RateError>;
}

#[async_trait]
impl<T: RateSource + ?Sized> RateSource for Box<T> {
    async fn quote(&self) -> Result<RateQuote, RateError> {
        (**self).quote().await
    }
}
