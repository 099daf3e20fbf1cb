// =============================================================================
// Vocabulary: the closed word lists the rule pipeline matches against
// =============================================================================

use serde::{Deserialize, Serialize};

/// Event categories the catalog knows about. A token equal to one of these
/// becomes an `event_type` filter rather than a keyword.
static EVENT_TYPES: &[&str] = &[
    "workshop",
    "meetup",
    "lecture",
    "seminar",
    "party",
    "social",
    "networking",
];

/// Organizer names recognized in user text, in the form the catalog spells
/// them (lowercased). Singularization turns "founders" into "founder"
/// before lookup, so matching re-tries each name with its plural `s`
/// stripped.
static ORGANIZERS: &[&str] = &[
    "arc",
    "library",
    "clubs",
    "founders",
    "makerspace",
    "unsw",
];

/// Word lists shared by the classifier and the extractor.
///
/// The defaults cover the campus event catalog this assistant ships with.
/// Both lists are data, not code: swapping in a different catalog only
/// means constructing a `Vocabulary` with different entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vocabulary {
    pub event_types: Vec<String>,
    pub organizers: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            event_types: EVENT_TYPES.iter().map(|s| s.to_string()).collect(),
            organizers: ORGANIZERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    pub fn is_event_type(&self, token: &str) -> bool {
        self.event_types.iter().any(|t| t == token)
    }

    pub fn is_organizer(&self, token: &str) -> bool {
        self.organizer_value(token).is_some()
    }

    /// The catalog-form organizer name for a recognized token. A token that
    /// lost its plural `s` to singularization still resolves to the full
    /// name ("founder" -> "founders").
    pub fn organizer_value(&self, token: &str) -> Option<&str> {
        self.organizers
            .iter()
            .map(String::as_str)
            .find(|o| *o == token || o.strip_suffix('s') == Some(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_event_types() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_event_type("workshop"));
        assert!(vocab.is_event_type("networking"));
        assert!(!vocab.is_event_type("concert"));
    }

    #[test]
    fn test_default_organizers() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_organizer("arc"));
        assert!(vocab.is_organizer("makerspace"));
        assert!(!vocab.is_organizer("acme"));
    }

    #[test]
    fn test_organizer_value_restores_plural_names() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.organizer_value("founder"), Some("founders"));
        assert_eq!(vocab.organizer_value("club"), Some("clubs"));
        assert_eq!(vocab.organizer_value("arc"), Some("arc"));
        assert_eq!(vocab.organizer_value("acme"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Tokens are lowercased upstream; the tables only hold lowercase.
        let vocab = Vocabulary::default();
        assert!(!vocab.is_event_type("Workshop"));
        assert!(!vocab.is_organizer("Arc"));
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocab = Vocabulary {
            event_types: vec!["concert".to_string()],
            organizers: vec!["acme".to_string()],
        };
        assert!(vocab.is_event_type("concert"));
        assert!(!vocab.is_event_type("workshop"));
        assert!(vocab.is_organizer("acme"));
    }
}
