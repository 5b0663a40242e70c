//! Financial and retention aggregation: MRR bridge, NRR/GRR, logo churn,
//! ledger rollups, and display deltas.
//!
//! All rate computations guard the zero-denominator case and return `0.0`
//! rather than NaN; the dashboard renders a zero, never an error.

use std::collections::HashMap;

use crate::api::{
    BusinessSummary, DeltaDirection, LedgerRollup, MetricDelta, MrrBridge, RetentionRates,
};
use crate::models::{LedgerEntry, LedgerKind, MemberRevenueRow};

/// Decompose the period-over-period MRR change into its bridge components.
///
/// Each member's current recurring charge is diffed against their
/// prior-period charge and the delta bucketed:
/// - absent -> present: new
/// - present -> absent: churned
/// - present -> higher: expansion
/// - present -> lower (non-zero, or zero without a pause): contraction
/// - present -> zero with the paused flag: paused
pub fn compute_mrr_bridge(
    period_members: &[MemberRevenueRow],
    prior_members: &[MemberRevenueRow],
) -> MrrBridge {
    let prior: HashMap<i64, &MemberRevenueRow> =
        prior_members.iter().map(|m| (m.member_id, m)).collect();
    let current: HashMap<i64, &MemberRevenueRow> =
        period_members.iter().map(|m| (m.member_id, m)).collect();

    let starting_mrr: f64 = prior_members.iter().map(|m| m.recurring_charge).sum();

    let mut new_mrr = 0.0;
    let mut expansion_mrr = 0.0;
    let mut contraction_mrr = 0.0;
    let mut churned_mrr = 0.0;
    let mut paused_mrr = 0.0;

    for member in period_members {
        match prior.get(&member.member_id) {
            None => new_mrr += member.recurring_charge,
            Some(before) => {
                let was = before.recurring_charge;
                let is_now = member.recurring_charge;
                if is_now > was {
                    expansion_mrr += is_now - was;
                } else if is_now < was {
                    if is_now == 0.0 && member.paused {
                        paused_mrr += was;
                    } else {
                        contraction_mrr += was - is_now;
                    }
                }
            }
        }
    }

    for member in prior_members {
        if !current.contains_key(&member.member_id) {
            churned_mrr += member.recurring_charge;
        }
    }

    let ending_mrr =
        starting_mrr + new_mrr + expansion_mrr - contraction_mrr - churned_mrr - paused_mrr;

    MrrBridge {
        starting_mrr,
        new_mrr,
        expansion_mrr,
        contraction_mrr,
        churned_mrr,
        paused_mrr,
        ending_mrr,
    }
}

/// Revenue and logo retention rates from a bridge and starting member counts.
pub fn compute_retention_rates(
    bridge: &MrrBridge,
    starting_active_count: usize,
    churned_member_count: usize,
) -> RetentionRates {
    let nrr = safe_ratio(
        bridge.starting_mrr + bridge.expansion_mrr - bridge.contraction_mrr - bridge.churned_mrr,
        bridge.starting_mrr,
    );
    let grr = safe_ratio(
        bridge.starting_mrr - bridge.contraction_mrr - bridge.churned_mrr,
        bridge.starting_mrr,
    );
    let logo_churn_rate = safe_ratio(churned_member_count as f64, starting_active_count as f64);

    RetentionRates {
        nrr,
        grr,
        logo_churn_rate,
    }
}

fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Sum a period's ledger into payments/purchases totals.
pub fn rollup_ledger(entries: &[LedgerEntry]) -> LedgerRollup {
    let mut payments_total = 0.0;
    let mut purchases_total = 0.0;
    for entry in entries {
        match entry.kind {
            LedgerKind::Payment => payments_total += entry.amount,
            LedgerKind::Purchase => purchases_total += entry.amount,
        }
    }
    LedgerRollup {
        payments_total,
        purchases_total,
        net: payments_total - purchases_total,
    }
}

/// Classify a current-vs-prior value for display.
pub fn metric_delta(current: f64, prior: f64) -> MetricDelta {
    let delta = current - prior;
    let direction = if delta > 0.0 {
        DeltaDirection::Positive
    } else if delta < 0.0 {
        DeltaDirection::Negative
    } else {
        DeltaDirection::Neutral
    };
    MetricDelta {
        current,
        prior,
        delta,
        direction,
    }
}

/// Render a currency metric, falling back to a placeholder for missing data.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${:.2}", v),
        _ => "—".to_string(),
    }
}

/// Render a rate as a percentage, with the same missing-data placeholder.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.1}%", v * 100.0),
        _ => "—".to_string(),
    }
}

/// Build the full business summary for a period against the prior period.
pub fn compute_business_summary(
    period_members: &[MemberRevenueRow],
    prior_members: &[MemberRevenueRow],
    period_ledger: &[LedgerEntry],
    prior_ledger: &[LedgerEntry],
) -> BusinessSummary {
    let bridge = compute_mrr_bridge(period_members, prior_members);

    let current_ids: std::collections::HashSet<i64> =
        period_members.iter().map(|m| m.member_id).collect();
    let prior_ids: std::collections::HashSet<i64> =
        prior_members.iter().map(|m| m.member_id).collect();

    let starting_member_count = prior_members.iter().filter(|m| m.is_active()).count();
    let ending_member_count = period_members.iter().filter(|m| m.is_active()).count();
    let new_member_count = period_members
        .iter()
        .filter(|m| !prior_ids.contains(&m.member_id))
        .count();
    let churned_member_count = prior_members
        .iter()
        .filter(|m| !current_ids.contains(&m.member_id))
        .count();

    let retention = compute_retention_rates(&bridge, starting_member_count, churned_member_count);

    let ledger = rollup_ledger(period_ledger);
    let prior_ledger = rollup_ledger(prior_ledger);

    let mrr_delta = metric_delta(bridge.ending_mrr, bridge.starting_mrr);
    let payments_delta = metric_delta(ledger.payments_total, prior_ledger.payments_total);

    BusinessSummary {
        bridge,
        retention,
        starting_member_count,
        ending_member_count,
        new_member_count,
        churned_member_count,
        ledger,
        prior_ledger,
        mrr_delta,
        payments_delta,
    }
}

#[cfg(test)]
#[path = "business_summary_tests.rs"]
mod business_summary_tests;
