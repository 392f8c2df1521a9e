// crates/regform-core/src/selector.rs

//! # Country Selector
//!
//! View model owning the rendered entry state of the country control.
//! The load sequence is: insert the placeholder synchronously, fetch,
//! then replace the placeholder with either the sorted remote list or
//! the fixed fallback list. By the time a load completes, exactly one of
//! the two lists is rendered; never both, never neither, never partial.

use crate::error::Result;
use crate::model::{self, sort_records, CountryRecord};
use crate::source::CountrySource;
use serde::Serialize;

/// Label of the transient, non-selectable entry shown while data loads.
pub const PLACEHOLDER_LABEL: &str = "Loading countries...";

/// One rendered entry of the selection control: submitted value (ISO
/// code) plus visible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorEntry {
    pub value: String,
    pub label: String,
}

impl From<CountryRecord> for SelectorEntry {
    fn from(record: CountryRecord) -> Self {
        Self {
            value: record.iso2,
            label: record.name,
        }
    }
}

/// Which branch of the load sequence produced the final entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The source yielded records; the control holds that many entries.
    Loaded(usize),
    /// The source failed; the control holds the 10 fallback entries.
    Fallback,
}

/// The country selection control.
#[derive(Debug, Clone, Default)]
pub struct CountrySelector {
    entries: Vec<SelectorEntry>,
    placeholder: bool,
}

impl CountrySelector {
    /// Empty control, no placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronously renders the single placeholder entry. First step of
    /// the load sequence.
    pub fn begin_loading(&mut self) {
        self.entries.clear();
        self.entries.push(SelectorEntry {
            value: String::new(),
            label: PLACEHOLDER_LABEL.to_string(),
        });
        self.placeholder = true;
    }

    /// Completes the load sequence with the result of a fetch.
    ///
    /// On success the records are sorted ascending by display name and
    /// rendered one entry per record. On any failure, one diagnostic
    /// record is emitted (operator visibility only) and the fixed
    /// fallback entries are rendered instead. Either way the placeholder
    /// is absent afterwards.
    pub fn apply(&mut self, fetched: Result<Vec<CountryRecord>>) -> LoadOutcome {
        // The placeholder (and any previously rendered list) is discarded
        // before the final list renders; the control never holds a mixture.
        self.entries.clear();
        self.placeholder = false;

        match fetched {
            Ok(mut records) => {
                sort_records(&mut records);
                self.entries
                    .extend(records.into_iter().map(SelectorEntry::from));
                LoadOutcome::Loaded(self.entries.len())
            }
            Err(err) => {
                tracing::warn!(error = %err, "country list fetch failed; rendering fallback list");
                self.entries.extend(
                    model::fallback_records()
                        .into_iter()
                        .map(SelectorEntry::from),
                );
                LoadOutcome::Fallback
            }
        }
    }

    /// Runs the whole sequence against a source: placeholder, fetch,
    /// replace. Re-running it replaces the state wholesale, so an
    /// unchanged response yields an identical final list.
    pub fn load_from(&mut self, source: &dyn CountrySource) -> LoadOutcome {
        self.begin_loading();
        self.apply(source.fetch())
    }

    /// Currently rendered entries, in render order.
    pub fn entries(&self) -> &[SelectorEntry] {
        &self.entries
    }

    /// True while the placeholder entry is rendered.
    pub fn has_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
