// =============================================================================
// Normalizer: raw user text -> lowercase, content-bearing tokens
// =============================================================================

/// Words dropped outright during normalization. Includes the search-helper
/// verbs ("find", "show", "looking") so that "find me the events" reduces
/// to nothing and only genuine criteria survive as tokens.
static FILLER_WORDS: &[&str] = &[
    "the", "a", "an", "uh", "um", "like", "just", "please", "find", "search",
    "show", "looking", "me", "i", "you", "my", "im", "can", "could", "would",
    "want", "do", "are", "is", "some", "any", "what", "whats", "event",
    "events",
];

/// Plural forms the suffix rules get wrong.
static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("parties", "party"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("people", "person"),
];

/// Gerunds reduced to their activity stem. Only listed forms are touched,
/// so "during" or "evening" never lose their ending.
static GERUND_STEMS: &[(&str, &str)] = &[
    ("hiking", "hike"),
    ("biking", "bike"),
    ("coding", "code"),
    ("dancing", "dance"),
    ("gaming", "game"),
    ("baking", "bake"),
    ("skating", "skate"),
    ("climbing", "climb"),
    ("cooking", "cook"),
    ("painting", "paint"),
    ("swimming", "swim"),
    ("running", "run"),
    ("writing", "write"),
];

/// Word lists driving [`Normalizer`]. The defaults suit the campus event
/// domain; tests and alternative deployments can supply their own.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    pub filler_words: Vec<String>,
    pub irregular_plurals: Vec<(String, String)>,
    pub gerund_stems: Vec<(String, String)>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        let own = |pairs: &[(&str, &str)]| -> Vec<(String, String)> {
            pairs
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect()
        };
        Self {
            filler_words: FILLER_WORDS.iter().map(|s| s.to_string()).collect(),
            irregular_plurals: own(IRREGULAR_PLURALS),
            gerund_stems: own(GERUND_STEMS),
        }
    }
}

/// Turns raw user text into the token sequence the classifier and extractor
/// operate on: lowercase, punctuation stripped, fillers removed, plurals
/// and known gerunds reduced to a canonical form.
///
/// Normalization never reorders or deduplicates; downstream stages rely on
/// the original word order.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline over one utterance.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| !self.config.filler_words.iter().any(|f| f == word))
            .map(|word| self.singularize(word))
            .collect()
    }

    // Suffix rules are ordered: irregulars win, then -ies, then listed
    // gerunds, then the generic -s/-es strip. Tokens of three characters
    // or fewer are never altered.
    fn singularize(&self, token: &str) -> String {
        for (plural, singular) in &self.config.irregular_plurals {
            if token == plural {
                return singular.clone();
            }
        }
        if token.len() > 4 && token.ends_with("ies") {
            return format!("{}y", &token[..token.len() - 3]);
        }
        for (gerund, stem) in &self.config.gerund_stems {
            if token == gerund {
                return stem.clone();
            }
        }
        if token.len() <= 3 || !token.ends_with('s') {
            return token.to_string();
        }
        if token.ends_with("ss") {
            return token.to_string();
        }
        if ["sses", "ches", "shes", "xes", "zes"]
            .iter()
            .any(|suffix| token.ends_with(suffix))
        {
            return token[..token.len() - 2].to_string();
        }
        token[..token.len() - 1].to_string()
    }
}
