//! Reply templates for the event finder.
//!
//! Every piece of user-facing text is assembled here from fixed strings and
//! turn data. Template selection is deterministic: the same situation always
//! reads the same way, which keeps conversations reproducible and testable.

use scout_core::{Event, Filter, FilterKind};

use crate::language;

// =============================================================================
// Greetings and help
// =============================================================================

pub fn greeting() -> String {
    "Hi there! I can help you find events happening at the university. \
     What are you looking for?"
        .to_string()
}

/// Capability overview plus the session's current filters.
pub fn help_text(filters: &[Filter]) -> String {
    format!(
        "I help you discover UNSW society events based on event type, date, \
         location, organizer, or topics.\n\n\
         You can search by:\n\
         - Event type (workshop, meetup, lecture, seminar, party, social, networking)\n\
         - Date (today, tomorrow, this week, next week, a weekday, or YYYY-MM-DD)\n\
         - Organizer (Arc, Library, Clubs, Founders, Makerspace)\n\
         - Location ('in Kensington')\n\
         - Topics or keywords ('hiking', 'coding')\n\n\
         You can also say:\n\
         - 'more' for the next page of results\n\
         - 'tell me about event 2' for details\n\
         - 'cancel' to undo the last filter, 'reset' to start over\n\
         - 'remember my filters' and 'use saved filters'\n\
         - 'language french' to switch languages\n\n\
         {}",
        current_filters_line(filters)
    )
}

pub fn farewell() -> String {
    "Thanks for using Society Scout! Have a great day!".to_string()
}

// =============================================================================
// Search results
// =============================================================================

/// The full reply for a fresh search: grounding header, filter summary, a
/// relaxation notice when filters were set aside, the first page of results,
/// and a footer that either points at 'more' or invites a detail request.
pub fn search_reply(
    applied: &[Filter],
    dropped: &[Filter],
    page: &[Event],
    total: usize,
    has_more: bool,
) -> String {
    let mut sections = vec![results_header(applied, total), filter_summary(applied)];

    if !dropped.is_empty() {
        sections.push(format!(
            "I couldn't match everything, so I set aside {}.",
            list_values(dropped)
        ));
    }

    sections.push(format!(
        "Here are events closest matching your search:\n\n{}",
        results_page(page, 0)
    ));

    let mut footer = if has_more {
        format!(
            "... and {} more events. Say 'more' to see them.",
            total - page.len()
        )
    } else {
        "Would you like to know more about any of these events?".to_string()
    };
    if let Some(hint) = refine_hint(applied) {
        footer = format!("{}\n{}", hint, footer);
    }
    sections.push(footer);

    sections.join("\n\n")
}

/// A follow-up page from the cached results. Numbering continues where the
/// previous page stopped.
pub fn more_reply(page: &[Event], start_index: usize, remaining: usize) -> String {
    let mut sections = vec![results_page(page, start_index)];
    if remaining > 0 {
        sections.push(format!(
            "... and {} more events. Say 'more' to see them.",
            remaining
        ));
    } else {
        sections.push(format!(
            "{} Would you like to know more about any of these events?",
            results_exhausted()
        ));
    }
    sections.join("\n\n")
}

/// One listing block per event, numbered from `start_index + 1`.
pub fn results_page(events: &[Event], start_index: usize) -> String {
    let blocks: Vec<String> = events
        .iter()
        .enumerate()
        .map(|(offset, event)| {
            format!(
                "{}. {}\n   Type: {}\n   Date: {}\n   Location: {}\n   Organizer: {}",
                start_index + offset + 1,
                event.title,
                event.event_type,
                event.date,
                event.location,
                event.organizer
            )
        })
        .collect();
    blocks.join("\n\n")
}

pub fn no_matches_anywhere() -> String {
    "I couldn't find any events matching those exact criteria.\n\n\
     Try broadening your search by removing some filters, or try different keywords."
        .to_string()
}

pub fn results_exhausted() -> String {
    "That's every event I have for this search.".to_string()
}

pub fn no_more_pages() -> String {
    format!(
        "{} You can add another filter or say 'reset' to start over.",
        results_exhausted()
    )
}

pub fn no_results_cached() -> String {
    "I haven't shown you any events yet. Tell me what you're looking for first.".to_string()
}

// =============================================================================
// Event details
// =============================================================================

/// The detail card for one event. Description and registration lines only
/// appear when the catalog has them.
pub fn event_details(event: &Event) -> String {
    let mut lines = vec![format!("Here's what I have on '{}':", event.title)];
    lines.push(format!("Type: {}", event.event_type));
    match &event.time {
        Some(time) => lines.push(format!("Date: {} at {}", event.date, time)),
        None => lines.push(format!("Date: {}", event.date)),
    }
    lines.push(format!("Location: {}", event.location));
    lines.push(format!("Organizer: {}", event.organizer));
    if !event.description.is_empty() {
        lines.push(format!("Description: {}", event.description));
    }
    if let Some(url) = &event.registration {
        lines.push(format!("Register: {}", url));
    }
    lines.join("\n")
}

pub fn random_pick(event: &Event) -> String {
    format!("Here's one picked at random:\n\n{}", event_details(event))
}

pub fn which_event() -> String {
    "Please specify which event you'd like to know more about. \
     You can give its number or its title."
        .to_string()
}

pub fn details_not_found() -> String {
    "I couldn't find that event. Try the number from the list or part of its title.".to_string()
}

// =============================================================================
// Filter management
// =============================================================================

/// Search replies restate the filters as "Filters set: ...".
pub fn filter_summary(filters: &[Filter]) -> String {
    format!("Filters set: {}", filter_list(filters))
}

/// Control confirmations restate them as "Your current filters are: ...".
pub fn current_filters_line(filters: &[Filter]) -> String {
    format!("Your current filters are: {}", filter_list(filters))
}

pub fn removed_filter(filter: &Filter) -> String {
    format!("Removed '{}' from your filters.", filter.value)
}

pub fn nothing_to_cancel() -> String {
    "There's nothing to cancel.".to_string()
}

pub fn conversation_reset() -> String {
    "Conversation reset! How can I help you find events today?".to_string()
}

pub fn kept_only(kind: FilterKind) -> String {
    format!(
        "Keeping your {} filters and clearing the rest.",
        kind_label(kind)
    )
}

pub fn nothing_kept(kind: FilterKind) -> String {
    format!(
        "You had no {} filters to keep, so everything was cleared. \
         What are you looking for?",
        kind_label(kind)
    )
}

pub fn filters_saved() -> String {
    "Saved your current filters. Say 'use saved filters' to bring them back.".to_string()
}

pub fn no_filters_to_save() -> String {
    "There are no filters to save yet. Tell me what you're looking for first.".to_string()
}

pub fn no_saved_filters() -> String {
    "You don't have any saved filters yet. Say 'remember my filters' after setting some."
        .to_string()
}

// =============================================================================
// Clarification and fallback
// =============================================================================

/// A targeted prompt for whatever the search is still missing, prioritized
/// event type, then date, then organizer/location.
pub fn ask_for_criteria(filters: &[Filter]) -> String {
    let described = describe_filters(filters);
    let acknowledgment = if described.is_empty() {
        "I'd be happy to help you find events! ".to_string()
    } else {
        format!("I see you're looking for {}. ", described)
    };

    let has = |kind: FilterKind| filters.iter().any(|f| f.kind == kind);
    let (question, examples) = if !has(FilterKind::EventType) {
        (
            "What type of event are you interested in?",
            "workshop, meetup, lecture, seminar, party, social, networking",
        )
    } else if !has(FilterKind::Date) {
        (
            "When would you like to attend?",
            "today, tomorrow, this week, next week",
        )
    } else if !has(FilterKind::Organizer) && !has(FilterKind::Location) {
        (
            "Any preference for organizer or location?",
            "Arc, Library, Clubs, Founders, Makerspace, or a specific location",
        )
    } else {
        return format!(
            "{}Let me search for events matching your criteria.",
            acknowledgment
        );
    };

    format!("{}{}\n\nFor example: {}", acknowledgment, question, examples)
}

pub fn offer_random() -> String {
    "No worries! Would you like me to pick something at random for you?".to_string()
}

pub fn uncertainty_nudge() -> String {
    "Take your time. You can add another filter, say 'more' for the next page, \
     or 'reset' to start over."
        .to_string()
}

pub fn negative_farewell() -> String {
    "No problem. Tell me whenever you'd like to look for events!".to_string()
}

/// Purpose reminder with actionable suggestions, used when no rule claims
/// the turn. Names the filters gathered so far when there are any.
pub fn unknown_reply(filters: &[Filter]) -> String {
    let purpose = "Sorry, I didn't quite catch that. I help you discover UNSW society \
                   events based on event type, date, location, organizer, or topics.";
    let suggestions = "Try prompts like:\n\
                       - 'workshops this week'\n\
                       - 'Arc events tomorrow'\n\
                       - 'help' for more examples\n\
                       - 'more events' to see additional matches";
    if filters.is_empty() {
        format!("{}\n\n{}", purpose, suggestions)
    } else {
        format!(
            "{}\n\nSo far we have: {}.\n\n{}",
            purpose,
            filter_list(filters),
            suggestions
        )
    }
}

// =============================================================================
// Language
// =============================================================================

pub fn language_switched(code: &str) -> String {
    format!("Language set to {}.", language::language_name(code))
}

pub fn language_menu() -> String {
    "Choose your language / 选择语言 / Choisissez votre langue:\n\
     \x20 1. English\n\
     \x20 2. 中文 (Chinese - Mandarin)\n\
     \x20 3. Français (French)\n\n\
     Type: 'language english' or 'language chinese' or 'language french'"
        .to_string()
}

pub fn unsupported_language(name: &str) -> String {
    format!("I can't speak {} yet.\n\n{}", name, language_menu())
}

// =============================================================================
// Helpers
// =============================================================================

fn results_header(applied: &[Filter], total: usize) -> String {
    let first = |kind: FilterKind| applied.iter().find(|f| f.kind == kind);
    if let Some(f) = first(FilterKind::EventType) {
        format!("Showing {} events", f.value)
    } else if let Some(f) = first(FilterKind::Date) {
        format!("Here are some events {}", date_label(&f.value))
    } else if let Some(f) = first(FilterKind::Organizer) {
        format!("Events organized by {}", f.value)
    } else {
        format!("I found {} matching your criteria", count_phrase(total))
    }
}

/// Which of the narrowing filter kinds the search is still missing, if any.
fn refine_hint(applied: &[Filter]) -> Option<String> {
    let has = |kind: FilterKind| applied.iter().any(|f| f.kind == kind);
    let mut missing = Vec::new();
    if !has(FilterKind::EventType) {
        missing.push("an event type");
    }
    if !has(FilterKind::Date) {
        missing.push("a date");
    }
    if !has(FilterKind::Organizer) && !has(FilterKind::Location) {
        missing.push("an organizer or location");
    }
    if missing.is_empty() {
        None
    } else {
        Some(format!(
            "You can still add {} to narrow things down.",
            join_or(&missing)
        ))
    }
}

fn describe_filters(filters: &[Filter]) -> String {
    let mut parts = Vec::new();
    let mut keywords = Vec::new();
    for filter in filters {
        match filter.kind {
            FilterKind::EventType => parts.push(format!("{} events", filter.value)),
            FilterKind::Date => parts.push(format!("events {}", date_label(&filter.value))),
            FilterKind::Organizer => parts.push(format!("events by {}", filter.value)),
            FilterKind::Location => parts.push(format!("events at {}", filter.value)),
            FilterKind::Keyword => keywords.push(filter.value.clone()),
        }
    }
    if !keywords.is_empty() {
        parts.push(format!("events about {}", keywords.join(", ")));
    }
    parts.join(", ")
}

/// Turns a stored date value back into conversational English.
fn date_label(value: &str) -> String {
    match value {
        "today" | "tomorrow" => value.to_string(),
        "this_week" | "next_week" => value.replace('_', " "),
        _ => {
            if let Some(n) = value
                .strip_suffix("_days")
                .or_else(|| value.strip_suffix("_day"))
            {
                if !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) {
                    return format!("in the next {} days", n);
                }
            }
            format!("on {}", value)
        }
    }
}

fn filter_list(filters: &[Filter]) -> String {
    if filters.is_empty() {
        return "none".to_string();
    }
    filters
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn list_values(filters: &[Filter]) -> String {
    filters
        .iter()
        .map(|f| format!("'{}'", f.value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn count_phrase(n: usize) -> String {
    if n == 1 {
        "1 event".to_string()
    } else {
        format!("{} events", n)
    }
}

fn kind_label(kind: FilterKind) -> &'static str {
    match kind {
        FilterKind::EventType => "event type",
        FilterKind::Date => "date",
        FilterKind::Organizer => "organizer",
        FilterKind::Location => "location",
        FilterKind::Keyword => "keyword",
    }
}

fn join_or(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [head @ .., last] => format!("{} or {}", head.join(", "), last),
    }
}

// =============================================================================
// Tests
// =============================================================================
