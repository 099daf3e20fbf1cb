// =============================================================================
// Filter extraction: normalized tokens -> search criteria
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use scout_core::{Filter, FilterKind};

use crate::vocabulary::Vocabulary;

/// "3 days", "in 10 days". Runs over the raw text because digits and their
/// spacing survive there.
static N_DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)\s+days?\b").expect("Invalid n-days regex"));

/// "in Kensington", "at Sydney", "near Randwick". Case-sensitive on the
/// captured word: place names are capitalized in raw text, ordinary nouns
/// are not, and that distinction is the whole signal.
static LOCATION_PREP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[Ii]n|[Aa]t|[Nn]ear)\s+(?:[Tt]he\s+)?([A-Z][A-Za-z]+)")
        .expect("Invalid location regex")
});

/// Explicit "location: kensington" style, any capitalization.
static LOCATION_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\blocation\b:?\s*([A-Za-z]+)").expect("Invalid location label regex")
});

static WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Tokens consumed without becoming keywords: connectives plus the
/// structural words that only ever introduce a criterion.
static SKIP_TOKENS: &[&str] = &[
    "about", "for", "with", "on", "at", "in", "from", "near", "around", "by",
    "to", "of", "and", "or", "location", "place",
];

/// Date words that ride along with a bigram or digit form and carry no
/// value of their own.
static DATE_NOISE: &[&str] = &["week", "day", "weekend", "this", "next", "upcoming"];

/// Criteria pulled out of a single turn. Scalar slots hold at most one
/// value (first mention wins); keywords keep mention order, deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterDelta {
    pub event_type: Option<String>,
    pub date: Option<String>,
    pub organizer: Option<String>,
    pub location: Option<String>,
    pub keywords: Vec<String>,
}

impl FilterDelta {
    pub fn is_empty(&self) -> bool {
        self.event_type.is_none()
            && self.date.is_none()
            && self.organizer.is_none()
            && self.location.is_none()
            && self.keywords.is_empty()
    }

    /// Flattens the delta into filters in the order they are applied to a
    /// search: event type, organizer, location, keywords, then date. The
    /// date goes last so it is the first thing relaxation gives up.
    pub fn ordered_filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(value) = &self.event_type {
            filters.push(Filter::new(FilterKind::EventType, value));
        }
        if let Some(value) = &self.organizer {
            filters.push(Filter::new(FilterKind::Organizer, value));
        }
        if let Some(value) = &self.location {
            filters.push(Filter::new(FilterKind::Location, value));
        }
        for keyword in &self.keywords {
            filters.push(Filter::new(FilterKind::Keyword, keyword));
        }
        if let Some(value) = &self.date {
            filters.push(Filter::new(FilterKind::Date, value));
        }
        filters
    }
}

/// Single-pass extractor over normalized tokens, with two regex passes over
/// the raw text for the shapes normalization destroys (capitalized place
/// names, digit counts).
#[derive(Debug, Clone, Default)]
pub struct FilterExtractor {
    vocabulary: Vocabulary,
}

impl FilterExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Scans the tokens once, left to right. Every token is either claimed
    /// by a criterion slot, skipped as noise, or accumulated as a keyword.
    pub fn extract(&self, raw: &str, tokens: &[String]) -> FilterDelta {
        let mut delta = FilterDelta {
            location: location_value(raw, &self.vocabulary),
            ..FilterDelta::default()
        };
        if let Some(caps) = N_DAYS_RE.captures(raw) {
            delta.date = Some(format!("{}_days", &caps[1]));
        }

        let mut keywords: Vec<String> = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].as_str();

            if (token == "this" || token == "next")
                && tokens.get(i + 1).map(String::as_str) == Some("week")
            {
                if delta.date.is_none() {
                    let value = if token == "next" { "next_week" } else { "this_week" };
                    delta.date = Some(value.to_string());
                }
                i += 2;
                continue;
            }
            if self.vocabulary.is_event_type(token) {
                if delta.event_type.is_none() {
                    delta.event_type = Some(token.to_string());
                }
                i += 1;
                continue;
            }
            if let Some(organizer) = self.vocabulary.organizer_value(token) {
                if delta.organizer.is_none() {
                    delta.organizer = Some(organizer.to_string());
                }
                i += 1;
                continue;
            }
            if token == "today" || token == "tomorrow" || WEEKDAYS.contains(&token) {
                if delta.date.is_none() {
                    delta.date = Some(token.to_string());
                }
                i += 1;
                continue;
            }
            if SKIP_TOKENS.contains(&token)
                || DATE_NOISE.contains(&token)
                || token.chars().all(|c| c.is_ascii_digit())
                || delta.location.as_deref() == Some(token)
            {
                i += 1;
                continue;
            }
            if !keywords.iter().any(|k| k == token) {
                keywords.push(token.to_string());
            }
            i += 1;
        }

        delta.keywords = keywords;
        delta
    }
}

/// Pulls a place name out of the raw text, labelled form first. Captures
/// that collide with the event-type or organizer vocabulary are discarded;
/// those words are criteria of their own.
pub(crate) fn location_value(raw: &str, vocabulary: &Vocabulary) -> Option<String> {
    if let Some(caps) = LOCATION_LABEL_RE.captures(raw) {
        let value = caps[1].to_lowercase();
        if !vocabulary.is_event_type(&value) && !vocabulary.is_organizer(&value) {
            return Some(value);
        }
    }
    for caps in LOCATION_PREP_RE.captures_iter(raw) {
        let value = caps[1].to_lowercase();
        if vocabulary.is_event_type(&value) || vocabulary.is_organizer(&value) {
            continue;
        }
        return Some(value);
    }
    None
}

/// True when the turn carries any date expression at all. The search rule
/// in the intent cascade uses this.
pub(crate) fn mentions_date(raw: &str, tokens: &[String]) -> bool {
    if N_DAYS_RE.is_match(raw) {
        return true;
    }
    tokens.iter().any(|t| {
        t == "today" || t == "tomorrow" || t == "week" || WEEKDAYS.contains(&t.as_str())
    })
}
