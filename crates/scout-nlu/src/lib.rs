// =============================================================================
// Scout NLU: rule-based language understanding for the event finder
// =============================================================================
//
// Everything in this crate is deterministic. A user turn is lowercased,
// stripped of punctuation and filler words, and singularized by the
// [`Normalizer`]; the [`IntentClassifier`] then assigns exactly one intent
// from an ordered rule cascade, and the [`FilterExtractor`] pulls search
// criteria (event type, date, organizer, location, keywords) out of the
// same tokens. No model inference, no network calls.

pub mod extract;
pub mod intent;
pub mod normalize;
pub mod vocabulary;

pub use extract::{FilterDelta, FilterExtractor};
pub use intent::{DetailRef, Intent, IntentClassifier};
pub use normalize::{Normalizer, NormalizerConfig};
pub use vocabulary::Vocabulary;
