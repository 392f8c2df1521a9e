// crates/regform-core/src/source.rs

//! # Country Acquisition
//!
//! Handles the Transport Layer (HTTP, status checks) and delegates
//! payload decoding to [`parse_payload`]. The [`CountrySource`] trait is
//! the seam between acquisition and rendering: the selector consumes any
//! source, test harnesses substitute their own.

use crate::error::{FormError, Result};
use crate::model::{self, CountryRecord};

#[cfg(feature = "remote")]
use std::time::Duration;

/// Where the list of selectable countries comes from.
pub trait CountrySource {
    /// Produces the (unsorted) country records, or the tagged failure
    /// that prevented it.
    fn fetch(&self) -> Result<Vec<CountryRecord>>;
}

/// Decodes a remote payload body into country records.
///
/// The expected shape is a list of objects carrying `name.common` and
/// `cca2`; anything else is a [`FormError::Data`].
pub fn parse_payload(body: &str) -> Result<Vec<CountryRecord>> {
    let raw: Vec<model::CountryRaw> = serde_json::from_str(body)?;
    Ok(model::from_raw(raw))
}

/// Source that always yields the fallback table. Used by offline
/// tooling and demos; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl CountrySource for StaticSource {
    fn fetch(&self) -> Result<Vec<CountryRecord>> {
        Ok(model::fallback_records())
    }
}

// -----------------------------------------------------------------------------
// REMOTE SOURCE (feature = "remote")
// -----------------------------------------------------------------------------

/// The public country-metadata endpoint, restricted to the two fields
/// the form needs.
#[cfg(feature = "remote")]
pub const COUNTRY_API_URL: &str = "https://restcountries.com/v3.1/all?fields=name,cca2";

/// Cap on the whole request. The load sequence has no retry, so an
/// unresponsive remote would otherwise stall the success path
/// indefinitely.
#[cfg(feature = "remote")]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP GET source for the remote country list.
///
/// One read-only request per fetch: no authentication, no request body,
/// no retries. All failure modes map onto the [`FormError`] taxonomy:
/// transport errors to `Network`, non-success statuses to `Protocol`,
/// undecodable bodies to `Data`.
#[cfg(feature = "remote")]
#[derive(Debug, Clone)]
pub struct RestCountriesSource {
    endpoint: String,
    timeout: Duration,
}

#[cfg(feature = "remote")]
impl RestCountriesSource {
    /// Source pointed at [`COUNTRY_API_URL`] with [`DEFAULT_TIMEOUT`].
    pub fn new() -> Self {
        Self::with_endpoint(COUNTRY_API_URL)
    }

    /// Source pointed at a custom endpoint (tests, self-hosted mirrors).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "remote")]
impl Default for RestCountriesSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "remote")]
impl CountrySource for RestCountriesSource {
    fn fetch(&self) -> Result<Vec<CountryRecord>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let response = client.get(&self.endpoint).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FormError::Protocol {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        parse_payload(&body)
    }
}
