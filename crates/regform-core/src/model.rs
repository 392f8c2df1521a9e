// crates/regform-core/src/model.rs

use crate::text::fold_key;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single selectable country: display name plus ISO 3166-1 alpha-2 code.
///
/// Produced either by decoding a remote payload entry or by selecting
/// from the fixed fallback table. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub iso2: String,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, iso2: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iso2: iso2.into(),
        }
    }
}

/// Raw country structure as it comes from the remote payload.
/// NOTE: This type mirrors the external API and is *not* exposed from
/// the public API. Unknown fields are ignored, so richer responses
/// (official names, translations, ...) still decode.
#[derive(Debug, Deserialize)]
pub(crate) struct CountryRaw {
    pub name: CountryNameRaw,
    pub cca2: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CountryNameRaw {
    pub common: String,
}

/// **Standard Converter:** Raw -> Record.
pub(crate) fn from_raw(raw_countries: Vec<CountryRaw>) -> Vec<CountryRecord> {
    raw_countries
        .into_iter()
        .map(|c| CountryRecord {
            name: c.name.common,
            iso2: c.cca2,
        })
        .collect()
}

/// The fixed fallback table, in its fixed order. Rendered verbatim when
/// the remote source cannot be used.
pub const FALLBACK_COUNTRIES: [(&str, &str); 10] = [
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("JP", "Japan"),
    ("CN", "China"),
    ("IN", "India"),
    ("BR", "Brazil"),
];

static FALLBACK_RECORDS: Lazy<Vec<CountryRecord>> = Lazy::new(|| {
    FALLBACK_COUNTRIES
        .iter()
        .map(|(iso2, name)| CountryRecord::new(*name, *iso2))
        .collect()
});

/// Materializes [`FALLBACK_COUNTRIES`] as records, preserving order.
pub fn fallback_records() -> Vec<CountryRecord> {
    FALLBACK_RECORDS.clone()
}

/// Sorts records ascending by display name.
///
/// Collation is accent-insensitive and case-insensitive via
/// [`fold_key`]; the raw name breaks ties so the order is total and
/// deterministic for a given input.
pub fn sort_records(records: &mut [CountryRecord]) {
    records.sort_by(|a, b| {
        fold_key(&a.name)
            .cmp(&fold_key(&b.name))
            .then_with(|| a.name.cmp(&b.name))
    });
}
