//! Reservation/event aggregation into per-day calendar summaries.

use chrono::NaiveDate;

use crate::api::{CalendarOverview, DaySummary};
use crate::config::EngineConfig;
use crate::models::{PrivateEvent, Reservation, VenueHourRule};
use crate::services::day_status;

/// Aggregate one day's reservations and private events.
///
/// `covers` sums party sizes over regular reservations dated `date`
/// (private-event and cancelled bookings excluded). The revenue figure is a
/// placeholder multiplier from [`EngineConfig`], not real pricing.
pub fn aggregate_day(
    date: NaiveDate,
    reservations: &[Reservation],
    private_events: &[PrivateEvent],
    is_open: bool,
    cfg: &EngineConfig,
) -> DaySummary {
    let covers: u32 = reservations
        .iter()
        .filter(|r| r.counts_for_covers(date))
        .map(|r| r.party_size)
        .sum();

    let private_event_count = private_events
        .iter()
        .filter(|ev| ev.covers_date(date))
        .count();

    DaySummary {
        date,
        is_open,
        covers,
        private_event_count,
        estimated_revenue: covers as f64 * cfg.revenue_per_cover,
    }
}

/// Aggregate an inclusive date range into a [`CalendarOverview`].
///
/// Each date is resolved independently through the day-status resolver; no
/// state is carried across days besides the output list. An inverted range
/// yields an empty overview.
pub fn aggregate_range(
    from: NaiveDate,
    to: NaiveDate,
    rules: &[VenueHourRule],
    reservations: &[Reservation],
    private_events: &[PrivateEvent],
    cfg: &EngineConfig,
) -> CalendarOverview {
    let (base, exceptional) = day_status::partition_rules(rules);

    let mut days = Vec::new();
    let mut date = from;
    while date <= to {
        let is_open = day_status::is_day_open(date, &base, &exceptional, private_events);
        days.push(aggregate_day(date, reservations, private_events, is_open, cfg));
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    let total_covers = days.iter().map(|d| d.covers).sum();
    let open_day_count = days.iter().filter(|d| d.is_open).count();

    CalendarOverview {
        from,
        to,
        days,
        total_covers,
        open_day_count,
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod calendar_tests;
