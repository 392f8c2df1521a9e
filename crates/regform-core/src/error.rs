// crates/regform-core/src/error.rs
use thiserror::Error;

/// Failure taxonomy for the country load sequence.
///
/// Every variant funnels into the same fallback branch of
/// [`CountrySelector::apply`](crate::selector::CountrySelector::apply);
/// the tags exist so callers can differentiate logging or retry policy
/// without changing that contract.
#[derive(Debug, Error)]
pub enum FormError {
    /// The request itself failed: DNS, refused connection, timeout, or a
    /// broken transfer while reading the body.
    #[cfg(feature = "remote")]
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote answered, but with a non-success HTTP status.
    #[error("unexpected HTTP status {status}")]
    Protocol { status: u16 },

    /// The response body is not the expected list of countries.
    #[error("malformed country payload: {0}")]
    Data(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
