//! Scout Chat crate - the conversation engine for the event finder.
//!
//! One [`ConversationEngine`] owns the whole loop for a session: it runs the
//! NLU pipeline over each turn, keeps the active filter set and the saved
//! preset, pages through cached results, and advances a small state machine
//! (initial, searching, awaiting clarification, awaiting a yes/no on a
//! random pick). Replies are composed from fixed templates; given the same
//! catalog and the same turns, the conversation is identical every run.

pub mod engine;
pub mod error;
pub mod filters;
pub mod language;
pub mod relax;
pub mod response;
pub mod types;

pub use engine::{ConversationEngine, TurnRecord};
pub use error::ChatError;
pub use filters::FilterStore;
pub use relax::{search_with_relaxation, RelaxedSearch};
pub use types::{TurnOutcome, TurnReport};
