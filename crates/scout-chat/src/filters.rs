//! The active filter set: ordered, undoable, with one saved preset.

use scout_core::{Filter, FilterKind, FilterSet};

/// Holds the filters a search runs with, in the order they were applied.
///
/// Order is load-bearing: relaxation removes filters strictly from the end,
/// so position encodes how reluctantly a filter is given up. A single saved
/// preset lives alongside the active set and survives [`FilterStore::clear`].
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    filters: FilterSet,
    saved: Option<FilterSet>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Append a filter as-is. Never rejects, never deduplicates; callers
    /// that want merge semantics use [`FilterStore::apply`].
    pub fn add(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Merge one filter into the set. Scalar kinds replace an existing
    /// entry of the same kind in place, keeping its position; keywords
    /// accumulate, with exact duplicates ignored.
    pub fn apply(&mut self, filter: Filter) {
        if filter.kind == FilterKind::Keyword {
            if !self.filters.iter().any(|f| *f == filter) {
                self.add(filter);
            }
            return;
        }
        if let Some(existing) = self.filters.iter_mut().find(|f| f.kind == filter.kind) {
            existing.value = filter.value;
        } else {
            self.add(filter);
        }
    }

    /// Undo the most recent filter.
    pub fn remove_last(&mut self) -> Option<Filter> {
        self.filters.pop()
    }

    /// Replace the whole active set.
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }

    /// Drop everything except filters of the given kind.
    pub fn retain_kind(&mut self, kind: FilterKind) {
        self.filters.retain(|f| f.kind == kind);
    }

    /// Clear the active set. The saved preset is untouched.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn save_preset(&mut self) {
        self.saved = Some(self.filters.clone());
    }

    pub fn has_preset(&self) -> bool {
        self.saved.is_some()
    }

    /// Restore the saved preset into the active set. Returns false when
    /// nothing has been saved.
    pub fn load_preset(&mut self) -> bool {
        match &self.saved {
            Some(preset) => {
                self.filters = preset.clone();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(kind: FilterKind, value: &str) -> Filter {
        Filter::new(kind, value)
    }

    // ---- Append semantics ----

    #[test]
    fn test_add_keeps_duplicates() {
        let mut store = FilterStore::new();
        store.add(f(FilterKind::Date, "today"));
        store.add(f(FilterKind::Date, "today"));
        store.add(f(FilterKind::Date, "tomorrow"));
        assert_eq!(store.len(), 3);
        assert_eq!(store.filters()[2], f(FilterKind::Date, "tomorrow"));
    }

    // ---- Apply semantics ----

    #[test]
    fn test_apply_preserves_insertion_order() {
        let mut store = FilterStore::new();
        store.apply(f(FilterKind::EventType, "workshop"));
        store.apply(f(FilterKind::Keyword, "hike"));
        store.apply(f(FilterKind::Date, "tomorrow"));
        let kinds: Vec<FilterKind> = store.filters().iter().map(|x| x.kind).collect();
        assert_eq!(
            kinds,
            vec![FilterKind::EventType, FilterKind::Keyword, FilterKind::Date]
        );
    }

    #[test]
    fn test_apply_scalar_replaces_in_place() {
        let mut store = FilterStore::new();
        store.apply(f(FilterKind::Date, "today"));
        store.apply(f(FilterKind::EventType, "workshop"));
        store.apply(f(FilterKind::Date, "tomorrow"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.filters()[0], f(FilterKind::Date, "tomorrow"));
    }

    #[test]
    fn test_apply_keywords_accumulate() {
        let mut store = FilterStore::new();
        store.apply(f(FilterKind::Keyword, "hike"));
        store.apply(f(FilterKind::Keyword, "swim"));
        store.apply(f(FilterKind::Keyword, "hike"));
        assert_eq!(store.len(), 2);
    }

    // ---- Undo ----

    #[test]
    fn test_remove_last_is_lifo() {
        let mut store = FilterStore::new();
        store.apply(f(FilterKind::EventType, "workshop"));
        store.apply(f(FilterKind::Date, "tomorrow"));
        assert_eq!(store.remove_last(), Some(f(FilterKind::Date, "tomorrow")));
        assert_eq!(store.remove_last(), Some(f(FilterKind::EventType, "workshop")));
        assert_eq!(store.remove_last(), None);
    }

    // ---- Selective reset ----

    #[test]
    fn test_retain_kind() {
        let mut store = FilterStore::new();
        store.apply(f(FilterKind::EventType, "workshop"));
        store.apply(f(FilterKind::Keyword, "hike"));
        store.apply(f(FilterKind::Date, "tomorrow"));
        store.retain_kind(FilterKind::Date);
        assert_eq!(store.filters(), &[f(FilterKind::Date, "tomorrow")]);
    }

    #[test]
    fn test_retain_kind_with_no_match_empties_the_store() {
        let mut store = FilterStore::new();
        store.apply(f(FilterKind::EventType, "workshop"));
        store.retain_kind(FilterKind::Location);
        assert!(store.is_empty());
    }

    // ---- Presets ----

    #[test]
    fn test_preset_survives_clear() {
        let mut store = FilterStore::new();
        store.apply(f(FilterKind::EventType, "workshop"));
        store.save_preset();
        store.clear();
        assert!(store.is_empty());
        assert!(store.load_preset());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_without_preset() {
        let mut store = FilterStore::new();
        assert!(!store.has_preset());
        assert!(!store.load_preset());
    }

    #[test]
    fn test_preset_is_a_snapshot() {
        let mut store = FilterStore::new();
        store.apply(f(FilterKind::EventType, "workshop"));
        store.apply(f(FilterKind::Date, "tomorrow"));
        store.save_preset();
        store.remove_last();
        store.apply(f(FilterKind::Keyword, "chess"));
        assert!(store.load_preset());
        assert_eq!(
            store.filters(),
            &[
                f(FilterKind::EventType, "workshop"),
                f(FilterKind::Date, "tomorrow")
            ]
        );
    }
}
