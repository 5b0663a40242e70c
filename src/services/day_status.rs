//! Venue day-status resolution.
//!
//! Decides whether the venue is open for ordinary reservations on a calendar
//! date, given the recurring weekly hours, date-specific overrides, and
//! private events. This logic was historically duplicated across several
//! dashboard views; it lives here once so every consumer agrees on a day's
//! status.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{HourRuleKind, PrivateEvent, VenueHourRule};

/// Split a mixed rule fetch into base (weekly) and exceptional rules,
/// dropping malformed rows.
pub fn partition_rules(rules: &[VenueHourRule]) -> (Vec<&VenueHourRule>, Vec<&VenueHourRule>) {
    let mut base = Vec::new();
    let mut exceptional = Vec::new();
    for rule in rules {
        if !rule.is_well_formed() {
            warn!(rule_id = rule.id, "skipping malformed venue hour rule");
            continue;
        }
        match rule.kind {
            HourRuleKind::Base => base.push(rule),
            HourRuleKind::ExceptionalOpen | HourRuleKind::ExceptionalClosure => {
                exceptional.push(rule)
            }
        }
    }
    (base, exceptional)
}

/// Pick the exceptional rule governing `date`.
///
/// Well-formed data has at most one per date; when duplicates occur the most
/// recently created rule wins, rows without `created_at` lose to rows with
/// it, and a final tie falls to the last row in input order.
fn exceptional_rule_for<'a>(
    date: NaiveDate,
    exceptional_rules: &[&'a VenueHourRule],
) -> Option<&'a VenueHourRule> {
    let mut winner: Option<&'a VenueHourRule> = None;
    for &rule in exceptional_rules {
        if !rule.matches_date(date) {
            continue;
        }
        winner = match winner {
            None => Some(rule),
            // The previous winner survives only when strictly newer, so
            // equal timestamps (or two `None`s) fall to the later row.
            Some(prev) if prev.created_at > rule.created_at => Some(prev),
            Some(_) => Some(rule),
        };
    }
    winner
}

/// Whether the venue is open for ordinary reservations on `date`.
///
/// Priority order, first match wins:
/// 1. A full-day private event on the date closes it.
/// 2. A full-day exceptional closure (or one without explicit ranges)
///    closes it. A partial closure with explicit ranges does not close the
///    day; it narrows bookable slots, which is below day granularity.
/// 3. An exceptional open rule opens it.
/// 4. A base rule matching the date's weekday opens it.
/// 5. Otherwise closed.
///
/// Total and deterministic: malformed rows are skipped, never panicked on.
pub fn is_day_open(
    date: NaiveDate,
    base_rules: &[&VenueHourRule],
    exceptional_rules: &[&VenueHourRule],
    private_events: &[PrivateEvent],
) -> bool {
    if private_events
        .iter()
        .any(|ev| ev.full_day && ev.covers_date(date))
    {
        return false;
    }

    if let Some(rule) = exceptional_rule_for(date, exceptional_rules) {
        if rule.closes_full_day() {
            return false;
        }
        if rule.kind == HourRuleKind::ExceptionalOpen {
            return true;
        }
        // Partial-day closure: fall through to the weekly schedule.
    }

    base_rules.iter().any(|rule| rule.matches_weekday(date))
}

/// Convenience wrapper taking the raw rule fetch.
pub fn is_day_open_with_rules(
    date: NaiveDate,
    rules: &[VenueHourRule],
    private_events: &[PrivateEvent],
) -> bool {
    let (base, exceptional) = partition_rules(rules);
    is_day_open(date, &base, &exceptional, private_events)
}

#[cfg(test)]
#[path = "day_status_tests.rs"]
mod day_status_tests;
