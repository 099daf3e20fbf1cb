// =============================================================================
// Intent classification: one intent per turn, first matching rule wins
// =============================================================================

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use scout_core::{ConversationState, FilterKind};

use crate::extract;
use crate::vocabulary::Vocabulary;

// -----------------------------------------------------------------------------
// Pattern tables
// -----------------------------------------------------------------------------

struct IntentPatterns {
    uncertainty: Vec<Regex>,
    affirmative: Vec<Regex>,
    negative: Vec<Regex>,
    language: Vec<Regex>,
    help: Vec<Regex>,
    cancel: Vec<Regex>,
    reset: Vec<Regex>,
    remember: Vec<Regex>,
    use_saved: Vec<Regex>,
    details: Vec<Regex>,
    more: Vec<Regex>,
    greeting: Vec<Regex>,
    search: Vec<Regex>,
}

static INTENT_PATTERNS: LazyLock<IntentPatterns> = LazyLock::new(|| {
    let mk = |pats: &[&str]| -> Vec<Regex> {
        pats.iter()
            .map(|p| Regex::new(p).expect("Invalid intent regex"))
            .collect()
    };

    IntentPatterns {
        uncertainty: mk(&[
            r"(?i)\bdon'?t\s+know\b",
            r"(?i)\bnot\s+sure\b",
            r"(?i)\bno\s+idea\b",
            r"(?i)\bdunno\b",
            r"(?i)\bunsure\b",
            r"(?i)^\s*idk\s*[.!?]*\s*$",
            r"(?i)\bsurprise\s+me\b",
            r"(?i)\banything\s+is\s+fine\b",
        ]),
        // Anchored: a polar reply is the whole utterance, never a fragment
        // of a longer request.
        affirmative: mk(&[
            r"(?i)^\s*(?:yes|yeah|yep|yup|sure|ok|okay|alright|sounds\s+good|why\s+not|go\s+ahead|yes\s+please|please\s+do)\s*[.!?]*\s*$",
            r"(?i)^\s*(?:that\s+works|go\s+for\s+it)\s*[.!?]*\s*$",
        ]),
        negative: mk(&[
            r"(?i)^\s*(?:no|nope|nah|no\s+thanks?|no\s+thank\s+you|not\s+really|not\s+now|maybe\s+later)\s*[.!?]*\s*$",
        ]),
        language: mk(&[
            r"(?i)\b(?:change|switch|set)\s+(?:the\s+)?language\b",
            r"(?i)^\s*language\b",
            r"(?i)\bspeak\s+(?:in\s+)?(?:english|chinese|mandarin|french)\b",
            r"(?i)\btranslate\s+to\b",
        ]),
        help: mk(&[
            r"(?i)\bhelp\b",
            r"(?i)\bwhat\s+can\s+you\s+do\b",
            r"(?i)\bhow\s+do(?:es)?\s+(?:this|it)\s+work\b",
            r"(?i)^\s*\?+\s*$",
        ]),
        cancel: mk(&[
            r"(?i)^\s*(?:cancel|undo)\b",
            r"(?i)\bnever\s*mind\b",
            r"(?i)^\s*(?:go\s+)?back\s*[.!?]*\s*$",
        ]),
        reset: mk(&[
            r"(?i)^\s*(?:reset|restart)\b",
            r"(?i)\bstart\s+over\b",
            r"(?i)^\s*clear\b",
            r"(?i)\bclear\s+(?:all\s+|my\s+)?filters\b",
        ]),
        remember: mk(&[
            r"(?i)\bremember\b",
            r"(?i)\bsave\s+(?:these\s+|my\s+|the\s+)?filters\b",
            r"(?i)\bsave\s+(?:this\s+)?search\b",
        ]),
        use_saved: mk(&[
            r"(?i)\buse\s+(?:my\s+|the\s+)?saved\b",
            r"(?i)\b(?:load|apply)\s+(?:my\s+|the\s+)?(?:saved\s+)?(?:filters|preset|search)\b",
            r"(?i)\bsaved\s+filters\b",
        ]),
        details: mk(&[
            r"(?i)\bdetails?\b",
            r"(?i)\bmore\s+(?:info|information)\b",
            r"(?i)\btell\s+me\s+(?:more\s+)?about\b",
            r"(?i)\bmore\s+about\b",
            r"(?i)\bevent\s+\d+\b",
            r"(?i)\b(?:first|second|third|fourth|fifth)\s+(?:one|event)\b",
        ]),
        more: mk(&[
            r"(?i)^\s*(?:show\s+(?:me\s+)?)?(?:more|next)\s*(?:page)?\s*[.!?]*\s*$",
            r"(?i)\bmore\s+(?:events|results|options)\b",
            r"(?i)\b(?:anything|what)\s+else\b",
        ]),
        greeting: mk(&[
            r"(?i)^\s*(?:hi|hello|hey|howdy|greetings|good\s+(?:morning|afternoon|evening))\b",
        ]),
        search: mk(&[
            r"(?i)\b(?:find|search|show|discover|browse)\b",
            r"(?i)\bevents?\b",
            r"(?i)\b(?:looking|look)\s+for\b",
            r"(?i)\bwhat'?s\s+(?:on|happening)\b",
            r"(?i)\bhappening\b",
            r"(?i)\bon\s+campus\b",
        ]),
    }
});

static RESET_EXCEPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:reset|restart|clear|start\s+over)\b.*\bexcept\s+(?:my\s+|the\s+|for\s+)*(\w+)")
        .expect("Invalid reset-except regex")
});

static EVENT_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:event|number|no\.?|#)\s*(\d+)\b").expect("Invalid event number regex")
});

static BARE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*[.!?]*\s*$").expect("Invalid bare number regex"));

static LANGUAGE_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:language\s+to|switch\s+to|change\s+to|translate\s+to|speak\s+in|speak)\s+([A-Za-z]+)\b")
        .expect("Invalid language target regex")
});

static ORDINAL_WORDS: &[(&str, usize)] = &[
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
];

/// Tokens that phrase a detail request without naming the event.
static DETAIL_PHRASE_WORDS: &[&str] = &[
    "tell", "more", "about", "detail", "details", "info", "information", "on",
    "of", "one", "number", "no", "give", "that",
];

// -----------------------------------------------------------------------------
// Intent
// -----------------------------------------------------------------------------

/// Every label a turn can resolve to. `Affirmative` and `Negative` are only
/// produced while the conversation is waiting on a yes/no answer; elsewhere
/// a bare "yes" means nothing actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    FindEvent,
    MoreResults,
    GetDetails,
    Cancel,
    Reset,
    ResetExcept,
    Help,
    Uncertainty,
    RememberFilters,
    UseSavedFilters,
    ChangeLanguage,
    Affirmative,
    Negative,
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intent::Greeting => "greeting",
            Intent::FindEvent => "find_event",
            Intent::MoreResults => "more_results",
            Intent::GetDetails => "get_details",
            Intent::Cancel => "cancel",
            Intent::Reset => "reset",
            Intent::ResetExcept => "reset_except",
            Intent::Help => "help",
            Intent::Uncertainty => "uncertainty",
            Intent::RememberFilters => "remember_filters",
            Intent::UseSavedFilters => "use_saved_filters",
            Intent::ChangeLanguage => "change_language",
            Intent::Affirmative => "affirmative",
            Intent::Negative => "negative",
            Intent::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greeting" => Ok(Intent::Greeting),
            "find_event" => Ok(Intent::FindEvent),
            "more_results" => Ok(Intent::MoreResults),
            "get_details" => Ok(Intent::GetDetails),
            "cancel" => Ok(Intent::Cancel),
            "reset" => Ok(Intent::Reset),
            "reset_except" => Ok(Intent::ResetExcept),
            "help" => Ok(Intent::Help),
            "uncertainty" => Ok(Intent::Uncertainty),
            "remember_filters" => Ok(Intent::RememberFilters),
            "use_saved_filters" => Ok(Intent::UseSavedFilters),
            "change_language" => Ok(Intent::ChangeLanguage),
            "affirmative" => Ok(Intent::Affirmative),
            "negative" => Ok(Intent::Negative),
            "unknown" => Ok(Intent::Unknown),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}

/// How a detail request names its event: by position in the last result
/// listing, or by words from the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRef {
    Ordinal(usize),
    Title(Vec<String>),
}

// -----------------------------------------------------------------------------
// Classifier
// -----------------------------------------------------------------------------

/// Assigns exactly one [`Intent`] per turn by walking an ordered rule
/// cascade over the raw text and the normalized tokens. Earlier rules win:
/// "cancel workshops" is a cancel, not a search.
#[derive(Debug, Clone, Default)]
pub struct IntentClassifier {
    vocabulary: Vocabulary,
}

impl IntentClassifier {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn classify(&self, raw: &str, tokens: &[String], state: ConversationState) -> Intent {
        let intent = self.run_cascade(raw, tokens, state);
        tracing::debug!(intent = %intent, "classified turn");
        intent
    }

    fn run_cascade(&self, raw: &str, tokens: &[String], state: ConversationState) -> Intent {
        let patterns = &*INTENT_PATTERNS;

        // Uncertainty first: "I don't know, maybe workshops?" is a shrug,
        // not a search.
        for re in &patterns.uncertainty {
            if re.is_match(raw) {
                return Intent::Uncertainty;
            }
        }

        // Polar replies only count while a question is pending.
        if matches!(
            state,
            ConversationState::AwaitingRandomResponse | ConversationState::AwaitingClarification
        ) {
            for re in &patterns.affirmative {
                if re.is_match(raw) {
                    return Intent::Affirmative;
                }
            }
            for re in &patterns.negative {
                if re.is_match(raw) {
                    return Intent::Negative;
                }
            }
        }

        for re in &patterns.language {
            if re.is_match(raw) {
                return Intent::ChangeLanguage;
            }
        }

        for re in &patterns.help {
            if re.is_match(raw) {
                return Intent::Help;
            }
        }

        // Controls. Cancel outranks everything here, and the except-form
        // must be tried before the plain reset patterns claim the turn.
        for re in &patterns.cancel {
            if re.is_match(raw) {
                return Intent::Cancel;
            }
        }
        if RESET_EXCEPT_RE.is_match(raw) {
            return Intent::ResetExcept;
        }
        for re in &patterns.reset {
            if re.is_match(raw) {
                return Intent::Reset;
            }
        }
        for re in &patterns.remember {
            if re.is_match(raw) {
                return Intent::RememberFilters;
            }
        }
        for re in &patterns.use_saved {
            if re.is_match(raw) {
                return Intent::UseSavedFilters;
            }
        }

        // Details before pagination ("tell me more about..." vs "more").
        for re in &patterns.details {
            if re.is_match(raw) {
                return Intent::GetDetails;
            }
        }
        for re in &patterns.more {
            if re.is_match(raw) {
                return Intent::MoreResults;
            }
        }

        for re in &patterns.greeting {
            if re.is_match(raw) {
                return Intent::Greeting;
            }
        }

        // Anything that names a search criterion is a search, even without
        // a verb: "workshops tomorrow" stands on its own.
        for re in &patterns.search {
            if re.is_match(raw) {
                return Intent::FindEvent;
            }
        }
        if tokens
            .iter()
            .any(|t| self.vocabulary.is_event_type(t) || self.vocabulary.is_organizer(t))
        {
            return Intent::FindEvent;
        }
        if extract::mentions_date(raw, tokens) {
            return Intent::FindEvent;
        }
        if extract::location_value(raw, &self.vocabulary).is_some() {
            return Intent::FindEvent;
        }

        Intent::Unknown
    }

    // ----- Payload parsers -----

    /// Which filter kind a "reset except ..." turn wants to keep.
    pub fn reset_except_kind(&self, raw: &str) -> Option<FilterKind> {
        let caps = RESET_EXCEPT_RE.captures(raw)?;
        kind_from_word(&caps[1].to_lowercase())
    }

    /// How a detail request names its event. Numbers win over ordinal words,
    /// ordinal words over title text; a request that names nothing at all
    /// yields `None` and the caller asks which event was meant.
    pub fn detail_reference(&self, raw: &str, tokens: &[String]) -> Option<DetailRef> {
        for re in [&*EVENT_NUMBER_RE, &*BARE_NUMBER_RE] {
            if let Some(caps) = re.captures(raw) {
                if let Ok(n) = caps[1].parse::<usize>() {
                    if n >= 1 {
                        return Some(DetailRef::Ordinal(n));
                    }
                }
            }
        }
        for (word, n) in ORDINAL_WORDS {
            if tokens.iter().any(|t| t == word) {
                return Some(DetailRef::Ordinal(*n));
            }
        }
        let title_words: Vec<String> = tokens
            .iter()
            .filter(|t| {
                !DETAIL_PHRASE_WORDS.contains(&t.as_str())
                    && !t.chars().all(|c| c.is_ascii_digit())
            })
            .cloned()
            .collect();
        if title_words.is_empty() {
            None
        } else {
            Some(DetailRef::Title(title_words))
        }
    }

    /// The language named in a change-language turn, if any.
    pub fn language_request(&self, raw: &str) -> Option<String> {
        let caps = LANGUAGE_TARGET_RE.captures(raw)?;
        Some(caps[1].to_lowercase())
    }
}

fn kind_from_word(word: &str) -> Option<FilterKind> {
    let kind = match word {
        "type" | "types" | "event" | "events" | "category" | "categories" => FilterKind::EventType,
        "date" | "dates" | "day" | "days" | "time" | "times" => FilterKind::Date,
        "organizer" | "organizers" | "organiser" | "organisers" | "host" | "hosts" => {
            FilterKind::Organizer
        }
        "location" | "locations" | "place" | "places" | "venue" | "venues" => FilterKind::Location,
        "keyword" | "keywords" | "topic" | "topics" | "interest" | "interests" => {
            FilterKind::Keyword
        }
        _ => return None,
    };
    Some(kind)
}
