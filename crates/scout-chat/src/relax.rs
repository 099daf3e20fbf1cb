//! Progressive filter relaxation around empty search results.

use scout_catalog::{Catalog, CatalogError};
use scout_core::{Event, Filter};

/// What a relaxed search settled on.
///
/// `applied` is always a prefix of the filters the search started with, and
/// `dropped` holds the rest in the order they were given up (most specific,
/// i.e. last-applied, first).
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxedSearch {
    pub matched: Vec<Event>,
    pub applied: Vec<Filter>,
    pub dropped: Vec<Filter>,
}

/// Search with the full filter set, then drop filters from the end one at a
/// time until something matches or nothing is left to drop.
///
/// The caller's filters are untouched; relaxation works on a copy and
/// reports what it gave up. With `n` filters the catalog is consulted at
/// most `n + 1` times. Backend failures propagate immediately: an
/// unreachable catalog must never read as "no events".
pub fn search_with_relaxation<C: Catalog>(
    catalog: &C,
    filters: &[Filter],
) -> Result<RelaxedSearch, CatalogError> {
    let mut applied: Vec<Filter> = filters.to_vec();
    let mut dropped: Vec<Filter> = Vec::new();

    loop {
        let matched = catalog.search(&applied)?;
        if !matched.is_empty() || applied.is_empty() {
            return Ok(RelaxedSearch {
                matched,
                applied,
                dropped,
            });
        }
        if let Some(filter) = applied.pop() {
            tracing::debug!(dropped = %filter, "relaxing search");
            dropped.push(filter);
        }
    }
}
