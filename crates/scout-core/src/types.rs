//! Core types and value objects shared across the Scout crates.
//!
//! Defines the event record, typed search filters, and the conversation
//! state enumeration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Enums
// =============================================================================

/// The kind of a search filter extracted from user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    EventType,
    Date,
    Organizer,
    Location,
    Keyword,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::EventType => write!(f, "event_type"),
            FilterKind::Date => write!(f, "date"),
            FilterKind::Organizer => write!(f, "organizer"),
            FilterKind::Location => write!(f, "location"),
            FilterKind::Keyword => write!(f, "keyword"),
        }
    }
}

impl std::str::FromStr for FilterKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event_type" => Ok(FilterKind::EventType),
            "date" => Ok(FilterKind::Date),
            "organizer" => Ok(FilterKind::Organizer),
            "location" => Ok(FilterKind::Location),
            "keyword" => Ok(FilterKind::Keyword),
            _ => Err(format!("Unknown filter kind: {}", s)),
        }
    }
}

/// Conversation lifecycle states.
///
/// Owned by the conversation engine; intent handlers are the only writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Initial,
    Searching,
    AwaitingClarification,
    AwaitingRandomResponse,
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationState::Initial => write!(f, "initial"),
            ConversationState::Searching => write!(f, "searching"),
            ConversationState::AwaitingClarification => write!(f, "awaiting_clarification"),
            ConversationState::AwaitingRandomResponse => write!(f, "awaiting_random_response"),
        }
    }
}

impl std::str::FromStr for ConversationState {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initial" => Ok(ConversationState::Initial),
            "searching" => Ok(ConversationState::Searching),
            "awaiting_clarification" => Ok(ConversationState::AwaitingClarification),
            "awaiting_random_response" => Ok(ConversationState::AwaitingRandomResponse),
            _ => Err(format!("Unknown conversation state: {}", s)),
        }
    }
}

// =============================================================================
// Domain Structs
// =============================================================================

/// A single typed search constraint.
///
/// Filters are kept in insertion order everywhere; "most recent" always means
/// highest index, which is what undo and relaxation rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub kind: FilterKind,
    pub value: String,
}

impl Filter {
    pub fn new(kind: FilterKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

/// An ordered sequence of filters.
pub type FilterSet = Vec<Filter>;

/// A catalog event record.
///
/// The JSON catalog spells the type field `"type"`; `description`, `tags`,
/// `time`, and `registration` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    pub location: String,
    pub organizer: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub registration: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- FilterKind ----

    #[test]
    fn test_filter_kind_display() {
        assert_eq!(FilterKind::EventType.to_string(), "event_type");
        assert_eq!(FilterKind::Date.to_string(), "date");
        assert_eq!(FilterKind::Organizer.to_string(), "organizer");
        assert_eq!(FilterKind::Location.to_string(), "location");
        assert_eq!(FilterKind::Keyword.to_string(), "keyword");
    }

    #[test]
    fn test_filter_kind_from_str() {
        assert_eq!("event_type".parse::<FilterKind>().unwrap(), FilterKind::EventType);
        assert_eq!("date".parse::<FilterKind>().unwrap(), FilterKind::Date);
        assert_eq!("organizer".parse::<FilterKind>().unwrap(), FilterKind::Organizer);
        assert_eq!("location".parse::<FilterKind>().unwrap(), FilterKind::Location);
        assert_eq!("keyword".parse::<FilterKind>().unwrap(), FilterKind::Keyword);
        assert!("invalid".parse::<FilterKind>().is_err());
    }

    #[test]
    fn test_filter_kind_from_str_error_message() {
        let err = "bogus".parse::<FilterKind>().unwrap_err();
        assert_eq!(err, "Unknown filter kind: bogus");
    }

    #[test]
    fn test_filter_kind_case_sensitive() {
        assert!("EventType".parse::<FilterKind>().is_err());
        assert!("DATE".parse::<FilterKind>().is_err());
    }

    // ---- ConversationState ----

    #[test]
    fn test_conversation_state_display() {
        assert_eq!(ConversationState::Initial.to_string(), "initial");
        assert_eq!(ConversationState::Searching.to_string(), "searching");
        assert_eq!(
            ConversationState::AwaitingClarification.to_string(),
            "awaiting_clarification"
        );
        assert_eq!(
            ConversationState::AwaitingRandomResponse.to_string(),
            "awaiting_random_response"
        );
    }

    #[test]
    fn test_conversation_state_display_from_str_round_trip() {
        for state in [
            ConversationState::Initial,
            ConversationState::Searching,
            ConversationState::AwaitingClarification,
            ConversationState::AwaitingRandomResponse,
        ] {
            let parsed: ConversationState = state.to_string().parse().unwrap();
            assert_eq!(state, parsed);
        }
    }

    #[test]
    fn test_conversation_state_serde_json_format() {
        assert_eq!(
            serde_json::to_string(&ConversationState::AwaitingRandomResponse).unwrap(),
            "\"awaiting_random_response\""
        );
        assert_eq!(
            serde_json::to_string(&ConversationState::Initial).unwrap(),
            "\"initial\""
        );
    }

    // ---- Filter ----

    #[test]
    fn test_filter_display() {
        let filter = Filter::new(FilterKind::EventType, "workshop");
        assert_eq!(filter.to_string(), "event_type: workshop");

        let filter = Filter::new(FilterKind::Keyword, "hike");
        assert_eq!(filter.to_string(), "keyword: hike");
    }

    #[test]
    fn test_filter_serde_json_format() {
        let filter = Filter::new(FilterKind::Date, "tomorrow");
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"kind":"date","value":"tomorrow"}"#);
    }

    // ---- Event ----

    #[test]
    fn test_event_deserialize_full_record() {
        let json = r#"{
            "id": 3,
            "title": "Rust Workshop",
            "type": "workshop",
            "date": "2026-09-01",
            "time": "18:00",
            "location": "Kensington campus",
            "organizer": "arc",
            "description": "Hands-on introduction to Rust.",
            "tags": ["coding", "rust"],
            "registration": "https://example.org/rust"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 3);
        assert_eq!(event.event_type, "workshop");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        assert_eq!(event.time.as_deref(), Some("18:00"));
        assert_eq!(event.tags, vec!["coding", "rust"]);
        assert_eq!(event.registration.as_deref(), Some("https://example.org/rust"));
    }

    #[test]
    fn test_event_deserialize_minimal_record() {
        let json = r#"{
            "id": 1,
            "title": "Trivia Night",
            "type": "social",
            "date": "2026-09-05",
            "location": "Roundhouse",
            "organizer": "club"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.description, "");
        assert!(event.tags.is_empty());
        assert!(event.time.is_none());
        assert!(event.registration.is_none());
    }

    #[test]
    fn test_event_rejects_bad_date() {
        let json = r#"{
            "id": 1,
            "title": "Trivia Night",
            "type": "social",
            "date": "not-a-date",
            "location": "Roundhouse",
            "organizer": "club"
        }"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }
}
