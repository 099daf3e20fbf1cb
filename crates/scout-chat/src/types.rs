//! Turn-level output types.

use serde::{Deserialize, Serialize};

use scout_core::{ConversationState, Event, Filter};
use scout_nlu::Intent;

/// Everything a single processed turn produces: the intent the turn
/// resolved to, the reply text shown to the user, a structured outcome for
/// programmatic callers, and the state the conversation moved to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReport {
    pub intent: Intent,
    pub summary: String,
    pub outcome: TurnOutcome,
    pub state: ConversationState,
}

/// Structured side of a turn's reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// A page of search results. `applied` and `dropped` describe what
    /// relaxation settled on; `dropped` is empty when every filter held.
    Results {
        events: Vec<Event>,
        applied: Vec<Filter>,
        dropped: Vec<Filter>,
        has_more: bool,
    },
    /// Full details of one event.
    Details { event: Event },
    /// The engine needs something from the user before it can act.
    Clarification,
    /// A control acknowledgment (reset, cancel, help, language, presets).
    Control,
}
