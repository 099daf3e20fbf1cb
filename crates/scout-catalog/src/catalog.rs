//! Event catalog trait and the JSON-backed in-memory implementation.
//!
//! - [`Catalog`] is the seam the conversation engine searches through.
//! - [`MemoryCatalog`] loads the bundled JSON dataset and answers filtered
//!   queries over it. This is the production backend.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::info;

use scout_core::{Event, Filter, FilterKind};

use crate::dates;
use crate::error::CatalogError;

/// Read access to the event inventory.
///
/// A search is conjunctive: every filter must hold for an event to match,
/// except that keyword filters are OR'd among themselves. Event type and
/// organizer compare by case-insensitive equality, location by substring.
/// Matching nothing is a normal outcome; [`CatalogError::Unavailable`] is
/// reserved for a backend that cannot answer at all.
pub trait Catalog {
    /// Events matching all of the given filters, in stable catalog order.
    fn search(&self, filters: &[Filter]) -> Result<Vec<Event>, CatalogError>;

    /// Look up a single event by id.
    fn get_by_id(&self, id: u32) -> Result<Option<Event>, CatalogError>;

    /// Every event, in catalog order.
    fn all(&self) -> Result<Vec<Event>, CatalogError>;
}

// ---------------------------------------------------------------------------
// MemoryCatalog - JSON-backed in-memory catalog
// ---------------------------------------------------------------------------

/// The catalog file wraps each event in a single-key record, so feeds can
/// interleave other record types without breaking the reader:
///
/// ```json
/// { "events": [ { "event": { "id": 1, ... } }, { "notice": { ... } } ] }
/// ```
///
/// Records keyed by anything other than `"event"` are skipped.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    events: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// In-memory catalog over a fixed event list.
///
/// Date filters are resolved against the current local date unless a
/// reference date is pinned with [`MemoryCatalog::with_reference_date`],
/// which tests use to stay deterministic.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    events: Vec<Event>,
    reference_date: Option<NaiveDate>,
}

impl MemoryCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            reference_date: None,
        }
    }

    /// Parse the nested catalog JSON format.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut events = Vec::with_capacity(file.events.len());
        for record in file.events {
            let Some(body) = record.get("event") else {
                continue;
            };
            let event: Event = serde_json::from_value(body.clone())?;
            events.push(event);
        }
        Ok(Self::new(events))
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), events = catalog.len(), "Loaded event catalog");
        Ok(catalog)
    }

    /// Pin the date that "today" resolves against.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Catalog for MemoryCatalog {
    fn search(&self, filters: &[Filter]) -> Result<Vec<Event>, CatalogError> {
        let today = self.today();
        let results: Vec<Event> = self
            .events
            .iter()
            .filter(|event| matches(event, filters, today))
            .cloned()
            .collect();
        tracing::debug!(
            filters = filters.len(),
            matched = results.len(),
            "Catalog search"
        );
        Ok(results)
    }

    fn get_by_id(&self, id: u32) -> Result<Option<Event>, CatalogError> {
        Ok(self.events.iter().find(|e| e.id == id).cloned())
    }

    fn all(&self) -> Result<Vec<Event>, CatalogError> {
        Ok(self.events.clone())
    }
}

fn matches(event: &Event, filters: &[Filter], today: NaiveDate) -> bool {
    let mut any_keyword = false;
    let mut keyword_hit = false;

    for filter in filters {
        match filter.kind {
            FilterKind::Keyword => {
                any_keyword = true;
                if keyword_matches(event, &filter.value) {
                    keyword_hit = true;
                }
            }
            FilterKind::EventType => {
                if !event.event_type.eq_ignore_ascii_case(&filter.value) {
                    return false;
                }
            }
            FilterKind::Organizer => {
                if !event.organizer.eq_ignore_ascii_case(&filter.value) {
                    return false;
                }
            }
            FilterKind::Location => {
                if !contains_ci(&event.location, &filter.value) {
                    return false;
                }
            }
            FilterKind::Date => {
                if let Some((start, end)) = dates::resolve_window(&filter.value, today) {
                    if event.date < start || event.date > end {
                        return false;
                    }
                }
            }
        }
    }

    !any_keyword || keyword_hit
}

fn keyword_matches(event: &Event, keyword: &str) -> bool {
    contains_ci(&event.title, keyword)
        || contains_ci(&event.description, keyword)
        || event.tags.iter().any(|tag| contains_ci(tag, keyword))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
