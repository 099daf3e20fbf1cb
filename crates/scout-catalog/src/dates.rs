// =============================================================================
// Date windows: filter values -> inclusive date ranges
// =============================================================================

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Resolves a date filter value to an inclusive `(start, end)` window
/// anchored at `today`.
///
/// Recognized forms:
/// - `today`, `tomorrow`
/// - `this_week` (today through six days out), `next_week` (the seven days
///   after that)
/// - `<n>_days` (today through `today + n`)
/// - weekday names, resolving to the next occurrence; a name matching today
///   means next week's
/// - ISO dates (`2025-07-01`)
///
/// Anything else returns `None`; unrecognized values never narrow a search.
pub fn resolve_window(value: &str, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    match value {
        "today" => return Some((today, today)),
        "tomorrow" => {
            let d = today + Duration::days(1);
            return Some((d, d));
        }
        "this_week" => return Some((today, today + Duration::days(6))),
        "next_week" => return Some((today + Duration::days(7), today + Duration::days(13))),
        _ => {}
    }

    if let Some(n) = value
        .strip_suffix("_days")
        .or_else(|| value.strip_suffix("_day"))
        .and_then(|n| n.parse::<i64>().ok())
    {
        return Some((today, today + Duration::days(n)));
    }

    if let Ok(weekday) = value.parse::<Weekday>() {
        let d = next_occurrence(weekday, today);
        return Some((d, d));
    }

    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some((d, d));
    }

    None
}

fn next_occurrence(weekday: Weekday, today: NaiveDate) -> NaiveDate {
    let mut ahead = (weekday.num_days_from_monday() as i64
        - today.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);
    // Saying "monday" on a Monday asks for next week's, not today.
    if ahead == 0 {
        ahead = 7;
    }
    today + Duration::days(ahead)
}
