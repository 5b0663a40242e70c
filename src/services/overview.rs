//! Async orchestration over the repository.
//!
//! Each function here mirrors one dashboard view: issue the view's fetches
//! concurrently, degrade any failure to an empty collection, then reduce
//! with the pure functions. Partial data renders as zeroes; no read path is
//! fatal.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use tracing::warn;

use crate::api::{BusinessSummary, CalendarOverview, CampaignSchedule, CampaignSendPlan, DaySummary, SendTiming};
use crate::config::EngineConfig;
use crate::db::{RepositoryResult, VenueRepository};
use crate::services::{business_summary, calendar, campaign_timing, day_status};

/// Unwrap a fetch, degrading failure to an empty collection with a warning.
fn or_empty<T>(result: RepositoryResult<Vec<T>>, entity: &str) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(err) => {
            warn!(entity, error = %err, "fetch failed, rendering without this collection");
            Vec::new()
        }
    }
}

/// Build the calendar overview for an inclusive date range.
pub async fn calendar_overview(
    repo: &dyn VenueRepository,
    from: NaiveDate,
    to: NaiveDate,
    cfg: &EngineConfig,
) -> CalendarOverview {
    let (rules, events, reservations) = tokio::join!(
        repo.fetch_hour_rules(),
        repo.fetch_private_events(from, to),
        repo.fetch_reservations(from, to),
    );
    let rules = or_empty(rules, "hour_rule");
    let events = or_empty(events, "private_event");
    let reservations = or_empty(reservations, "reservation");

    calendar::aggregate_range(from, to, &rules, &reservations, &events, cfg)
}

/// Resolve a single day's open/closed status and summary.
pub async fn day_summary(
    repo: &dyn VenueRepository,
    date: NaiveDate,
    cfg: &EngineConfig,
) -> DaySummary {
    let (rules, events, reservations) = tokio::join!(
        repo.fetch_hour_rules(),
        repo.fetch_private_events(date, date),
        repo.fetch_reservations(date, date),
    );
    let rules = or_empty(rules, "hour_rule");
    let events = or_empty(events, "private_event");
    let reservations = or_empty(reservations, "reservation");

    let is_open = day_status::is_day_open_with_rules(date, &rules, &events);
    calendar::aggregate_day(date, &reservations, &events, is_open, cfg)
}

/// Build the business summary for a period against the prior one.
///
/// Billing runs monthly, so the prior window starts one calendar month
/// before `period_start` and ends the day before it; member revenue is
/// keyed by that prior start.
pub async fn business_overview(
    repo: &dyn VenueRepository,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> BusinessSummary {
    let prior_end = period_start - Duration::days(1);
    let prior_start = period_start
        .checked_sub_months(Months::new(1))
        .unwrap_or(prior_end);

    let (members, prior_members, ledger, prior_ledger) = tokio::join!(
        repo.fetch_member_revenue(period_start),
        repo.fetch_member_revenue(prior_start),
        repo.fetch_ledger_entries(period_start, period_end),
        repo.fetch_ledger_entries(prior_start, prior_end),
    );
    let members = or_empty(members, "member_revenue");
    let prior_members = or_empty(prior_members, "member_revenue");
    let ledger = or_empty(ledger, "ledger_entry");
    let prior_ledger = or_empty(prior_ledger, "ledger_entry");

    business_summary::compute_business_summary(&members, &prior_members, &ledger, &prior_ledger)
}

/// Resolve every campaign template's next send time against `now`.
///
/// Recurring and specific-time templates are anchored on `now` itself;
/// relative templates are dispatched per trigger elsewhere, so here they
/// are resolved with `now` as a representative trigger for diagnostics.
pub async fn campaign_schedule(
    repo: &dyn VenueRepository,
    now: DateTime<Utc>,
    cfg: &EngineConfig,
) -> CampaignSchedule {
    let templates = or_empty(repo.fetch_campaign_templates().await, "campaign_template");

    let mut plans = Vec::with_capacity(templates.len());
    let mut unconfigured_template_ids = Vec::new();
    for template in &templates {
        let timing = campaign_timing::next_send_time(template, now, now, cfg);
        if timing == SendTiming::Unconfigured {
            unconfigured_template_ids.push(template.id);
        }
        plans.push(CampaignSendPlan {
            template_id: template.id,
            template_name: template.name.clone(),
            timing,
        });
    }

    CampaignSchedule {
        evaluated_at: now,
        plans,
        unconfigured_template_ids,
    }
}
