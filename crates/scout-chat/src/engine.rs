//! Conversation engine: one session's turn loop over the NLU pipeline,
//! filter store, catalog, and reply templates.
//!
//! Routes each turn by intent, keeps the active filters and the saved
//! preset, pages through cached results, and advances the conversation
//! state machine.

use rand::seq::SliceRandom;
use uuid::Uuid;

use scout_catalog::Catalog;
use scout_core::{ChatConfig, ConversationState, Event, Filter};
use scout_nlu::{DetailRef, FilterExtractor, Intent, IntentClassifier, Normalizer, Vocabulary};

use crate::error::ChatError;
use crate::filters::FilterStore;
use crate::language;
use crate::relax::{search_with_relaxation, RelaxedSearch};
use crate::response;
use crate::types::{TurnOutcome, TurnReport};

/// Maximum message length in characters.
const MAX_MESSAGE_LENGTH: usize = 2000;

/// One user/bot exchange kept in the session transcript.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub user: String,
    pub reply: String,
}

/// Drives a single conversation session.
///
/// Owns every piece of session state: the filter store, the conversation
/// state, the cached result list with its pagination cursor, the selected
/// reply language, and the transcript. Turns are processed one at a time to
/// completion; there is no internal concurrency to guard against.
pub struct ConversationEngine<C: Catalog> {
    session_id: Uuid,
    catalog: C,
    normalizer: Normalizer,
    classifier: IntentClassifier,
    extractor: FilterExtractor,
    store: FilterStore,
    state: ConversationState,
    language: String,
    last_results: Vec<Event>,
    last_applied: Vec<Filter>,
    last_dropped: Vec<Filter>,
    next_index: usize,
    history: Vec<TurnRecord>,
    config: ChatConfig,
}

impl<C: Catalog> ConversationEngine<C> {
    /// Create an engine for a fresh session over the given catalog.
    pub fn new(catalog: C, config: ChatConfig) -> Self {
        let vocabulary = Vocabulary::default();
        let language = language::language_code(&config.default_language)
            .unwrap_or("en")
            .to_string();

        Self {
            session_id: Uuid::new_v4(),
            catalog,
            normalizer: Normalizer::default(),
            classifier: IntentClassifier::new(vocabulary.clone()),
            extractor: FilterExtractor::new(vocabulary),
            store: FilterStore::new(),
            state: ConversationState::Initial,
            language,
            last_results: Vec::new(),
            last_applied: Vec::new(),
            last_dropped: Vec::new(),
            next_index: 0,
            history: Vec::new(),
            config,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// The active filters, in application order.
    pub fn filters(&self) -> &[Filter] {
        self.store.filters()
    }

    /// The selected reply language code ("en", "zh-CN", "fr").
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Process one user turn: validate, normalize, classify, route to the
    /// intent handler, and record the exchange.
    pub fn process_turn(&mut self, message: &str) -> Result<TurnReport, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(ChatError::MessageTooLong(MAX_MESSAGE_LENGTH));
        }

        let tokens = self.normalizer.normalize(message);
        let intent = self.classifier.classify(message, &tokens, self.state);
        tracing::debug!(
            session = %self.session_id,
            intent = %intent,
            state = %self.state,
            "Processing turn"
        );

        let (summary, outcome) = match intent {
            Intent::Greeting => (response::greeting(), TurnOutcome::Control),
            Intent::FindEvent => self.handle_find_event(message, &tokens)?,
            Intent::MoreResults => self.handle_more_results(),
            Intent::GetDetails => self.handle_get_details(message, &tokens)?,
            Intent::Cancel => self.handle_cancel()?,
            Intent::Reset => self.handle_reset(),
            Intent::ResetExcept => self.handle_reset_except(message)?,
            Intent::Help => (
                response::help_text(self.store.filters()),
                TurnOutcome::Control,
            ),
            Intent::Uncertainty => self.handle_uncertainty(),
            Intent::RememberFilters => self.handle_remember(),
            Intent::UseSavedFilters => self.handle_use_saved()?,
            Intent::ChangeLanguage => self.handle_change_language(message),
            Intent::Affirmative => self.handle_affirmative()?,
            Intent::Negative => self.handle_negative(),
            Intent::Unknown => self.handle_unknown(),
        };

        self.remember_turn(message, &summary);
        Ok(TurnReport {
            intent,
            summary,
            outcome,
            state: self.state,
        })
    }

    // -- Intent handlers --

    fn handle_find_event(
        &mut self,
        raw: &str,
        tokens: &[String],
    ) -> Result<(String, TurnOutcome), ChatError> {
        let delta = self.extractor.extract(raw, tokens);
        if delta.is_empty() && self.store.is_empty() {
            self.state = ConversationState::AwaitingClarification;
            return Ok((
                response::ask_for_criteria(self.store.filters()),
                TurnOutcome::Clarification,
            ));
        }
        for filter in delta.ordered_filters() {
            self.store.apply(filter);
        }
        self.run_search()
    }

    fn handle_more_results(&mut self) -> (String, TurnOutcome) {
        if self.last_results.is_empty() {
            return (response::no_results_cached(), TurnOutcome::Clarification);
        }
        if self.next_index >= self.last_results.len() {
            return (response::no_more_pages(), TurnOutcome::Control);
        }
        let start = self.next_index;
        let end = (start + self.config.page_size).min(self.last_results.len());
        let page = self.last_results[start..end].to_vec();
        self.next_index = end;
        let remaining = self.last_results.len() - end;
        (
            response::more_reply(&page, start, remaining),
            TurnOutcome::Results {
                events: page,
                applied: self.last_applied.clone(),
                dropped: self.last_dropped.clone(),
                has_more: remaining > 0,
            },
        )
    }

    fn handle_get_details(
        &mut self,
        raw: &str,
        tokens: &[String],
    ) -> Result<(String, TurnOutcome), ChatError> {
        let Some(reference) = self.classifier.detail_reference(raw, tokens) else {
            self.state = ConversationState::AwaitingClarification;
            return Ok((response::which_event(), TurnOutcome::Clarification));
        };
        let found = match reference {
            DetailRef::Ordinal(n) => self.last_results.get(n - 1).cloned(),
            DetailRef::Title(words) => self.find_by_title(&words)?,
        };
        match found {
            Some(event) => Ok((
                response::event_details(&event),
                TurnOutcome::Details { event },
            )),
            None => {
                self.state = ConversationState::AwaitingClarification;
                Ok((response::details_not_found(), TurnOutcome::Clarification))
            }
        }
    }

    fn handle_cancel(&mut self) -> Result<(String, TurnOutcome), ChatError> {
        let Some(removed) = self.store.remove_last() else {
            return Ok((response::nothing_to_cancel(), TurnOutcome::Control));
        };
        let (summary, outcome) = self.run_search()?;
        Ok((
            format!("{}\n\n{}", response::removed_filter(&removed), summary),
            outcome,
        ))
    }

    fn handle_reset(&mut self) -> (String, TurnOutcome) {
        self.store.clear();
        self.clear_results();
        self.state = ConversationState::Initial;
        (response::conversation_reset(), TurnOutcome::Control)
    }

    fn handle_reset_except(&mut self, raw: &str) -> Result<(String, TurnOutcome), ChatError> {
        // "reset except <something unrecognizable>" degrades to a plain reset.
        let Some(kind) = self.classifier.reset_except_kind(raw) else {
            return Ok(self.handle_reset());
        };
        self.store.retain_kind(kind);
        if self.store.is_empty() {
            self.clear_results();
            self.state = ConversationState::Initial;
            return Ok((response::nothing_kept(kind), TurnOutcome::Control));
        }
        let (summary, outcome) = self.run_search()?;
        Ok((
            format!("{}\n\n{}", response::kept_only(kind), summary),
            outcome,
        ))
    }

    fn handle_uncertainty(&mut self) -> (String, TurnOutcome) {
        match self.state {
            ConversationState::Initial => {
                self.state = ConversationState::AwaitingRandomResponse;
                (response::offer_random(), TurnOutcome::Clarification)
            }
            ConversationState::AwaitingRandomResponse => {
                (response::offer_random(), TurnOutcome::Clarification)
            }
            ConversationState::AwaitingClarification => (
                response::ask_for_criteria(self.store.filters()),
                TurnOutcome::Clarification,
            ),
            ConversationState::Searching => {
                (response::uncertainty_nudge(), TurnOutcome::Control)
            }
        }
    }

    fn handle_remember(&mut self) -> (String, TurnOutcome) {
        if self.store.is_empty() {
            return (response::no_filters_to_save(), TurnOutcome::Control);
        }
        self.store.save_preset();
        (response::filters_saved(), TurnOutcome::Control)
    }

    fn handle_use_saved(&mut self) -> Result<(String, TurnOutcome), ChatError> {
        if !self.store.load_preset() {
            return Ok((response::no_saved_filters(), TurnOutcome::Control));
        }
        self.run_search()
    }

    fn handle_change_language(&mut self, raw: &str) -> (String, TurnOutcome) {
        let Some(name) = self.classifier.language_request(raw) else {
            return (response::language_menu(), TurnOutcome::Clarification);
        };
        match language::language_code(&name) {
            Some(code) => {
                self.language = code.to_string();
                (response::language_switched(code), TurnOutcome::Control)
            }
            None => (response::unsupported_language(&name), TurnOutcome::Control),
        }
    }

    fn handle_affirmative(&mut self) -> Result<(String, TurnOutcome), ChatError> {
        match self.state {
            ConversationState::AwaitingRandomResponse => self.random_pick(),
            ConversationState::AwaitingClarification => self.run_search(),
            // The classifier only yields this intent in awaiting states.
            _ => Ok((response::uncertainty_nudge(), TurnOutcome::Control)),
        }
    }

    fn handle_negative(&mut self) -> (String, TurnOutcome) {
        match self.state {
            ConversationState::AwaitingRandomResponse | ConversationState::AwaitingClarification => {
                self.state = ConversationState::Initial;
                (response::negative_farewell(), TurnOutcome::Control)
            }
            _ => (response::uncertainty_nudge(), TurnOutcome::Control),
        }
    }

    fn handle_unknown(&mut self) -> (String, TurnOutcome) {
        if self.state == ConversationState::Initial {
            self.state = ConversationState::AwaitingClarification;
        }
        (
            response::unknown_reply(self.store.filters()),
            TurnOutcome::Clarification,
        )
    }

    // -- Private helpers --

    /// Search with the current store, cache the outcome, and compose the
    /// first page. Pagination restarts on every new search.
    fn run_search(&mut self) -> Result<(String, TurnOutcome), ChatError> {
        let RelaxedSearch {
            matched,
            applied,
            dropped,
        } = search_with_relaxation(&self.catalog, self.store.filters())?;
        self.state = ConversationState::Searching;
        self.last_results = matched;
        self.last_applied = applied;
        self.last_dropped = dropped;

        if self.last_results.is_empty() {
            self.next_index = 0;
            return Ok((
                response::no_matches_anywhere(),
                TurnOutcome::Results {
                    events: Vec::new(),
                    applied: self.last_applied.clone(),
                    dropped: self.last_dropped.clone(),
                    has_more: false,
                },
            ));
        }

        let page_end = self.config.page_size.min(self.last_results.len());
        self.next_index = page_end;
        let has_more = page_end < self.last_results.len();
        let page = self.last_results[..page_end].to_vec();
        let summary = response::search_reply(
            &self.last_applied,
            &self.last_dropped,
            &page,
            self.last_results.len(),
            has_more,
        );
        Ok((
            summary,
            TurnOutcome::Results {
                events: page,
                applied: self.last_applied.clone(),
                dropped: self.last_dropped.clone(),
                has_more,
            },
        ))
    }

    /// Pick one event at random and present it as a one-item search result,
    /// so "more" and ordinal detail requests keep working afterwards.
    fn random_pick(&mut self) -> Result<(String, TurnOutcome), ChatError> {
        let all = self.catalog.all()?;
        match all.choose(&mut rand::thread_rng()).cloned() {
            Some(event) => {
                self.state = ConversationState::Searching;
                self.last_results = vec![event.clone()];
                self.last_applied.clear();
                self.last_dropped.clear();
                self.next_index = 1;
                Ok((response::random_pick(&event), TurnOutcome::Details { event }))
            }
            None => {
                self.state = ConversationState::Initial;
                Ok((response::no_matches_anywhere(), TurnOutcome::Control))
            }
        }
    }

    /// Find an event whose title carries every given word, checking the
    /// cached results first so "the hiking one" means what was just shown.
    /// Titles are compared in normalized token space, so stemmed query
    /// words line up with their surface forms.
    fn find_by_title(&self, words: &[String]) -> Result<Option<Event>, ChatError> {
        let matches = |event: &Event| {
            let title_tokens = self.normalizer.normalize(&event.title);
            words
                .iter()
                .all(|word| title_tokens.iter().any(|t| t.contains(word.as_str())))
        };
        if let Some(event) = self.last_results.iter().find(|&e| matches(e)) {
            return Ok(Some(event.clone()));
        }
        Ok(self.catalog.all()?.into_iter().find(|e| matches(e)))
    }

    fn clear_results(&mut self) {
        self.last_results.clear();
        self.last_applied.clear();
        self.last_dropped.clear();
        self.next_index = 0;
    }

    fn remember_turn(&mut self, user: &str, reply: &str) {
        self.history.push(TurnRecord {
            user: user.to_string(),
            reply: reply.to_string(),
        });
        if self.history.len() > self.config.max_history_turns {
            let excess = self.history.len() - self.config.max_history_turns;
            self.history.drain(..excess);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
