//! Result records shared across the service and HTTP layers.
//!
//! These are plain aggregation outputs computed fresh per request, never
//! persisted. Everything derives `Serialize`/`Deserialize` so the HTTP layer
//! can return them directly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Calendar
// =============================================================================

/// Per-day aggregation of reservations and private events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Whether the venue accepts ordinary reservations on this date.
    pub is_open: bool,
    /// Sum of party sizes over regular (non-private-event) reservations.
    pub covers: u32,
    /// Number of private events falling on this date.
    pub private_event_count: usize,
    /// Placeholder revenue figure: `covers * revenue_per_cover`.
    pub estimated_revenue: f64,
}

/// A date range of day summaries with range-level totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarOverview {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days: Vec<DaySummary>,
    pub total_covers: u32,
    pub open_day_count: usize,
}

// =============================================================================
// Campaign timing
// =============================================================================

/// Outcome of resolving a campaign template's next send time.
///
/// `Unconfigured` is the non-throwing sentinel for a template missing a
/// field its `timing_type` requires; callers must check for it before
/// scheduling anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SendTiming {
    Unconfigured,
    Scheduled {
        target_send_time: DateTime<Utc>,
        /// True when `now` is within the dispatch window of the target.
        should_send_now: bool,
        /// Signed minutes from `now` to the target (positive = future).
        time_diff_minutes: i64,
    },
}

impl SendTiming {
    pub fn is_due_now(&self) -> bool {
        matches!(
            self,
            SendTiming::Scheduled {
                should_send_now: true,
                ..
            }
        )
    }
}

/// Resolved send plan for one campaign template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSendPlan {
    pub template_id: i64,
    pub template_name: String,
    pub timing: SendTiming,
}

/// All templates resolved against one evaluation instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSchedule {
    pub evaluated_at: DateTime<Utc>,
    pub plans: Vec<CampaignSendPlan>,
    /// Template IDs skipped because their timing is not configured.
    pub unconfigured_template_ids: Vec<i64>,
}

// =============================================================================
// Business analytics
// =============================================================================

/// Decomposition of month-over-month MRR change.
///
/// Satisfies `ending_mrr = starting_mrr + new_mrr + expansion_mrr
/// - contraction_mrr - churned_mrr - paused_mrr`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MrrBridge {
    pub starting_mrr: f64,
    pub new_mrr: f64,
    pub expansion_mrr: f64,
    pub contraction_mrr: f64,
    pub churned_mrr: f64,
    pub paused_mrr: f64,
    pub ending_mrr: f64,
}

/// Revenue and logo retention rates for one period.
///
/// All rates are `0.0` (never NaN) when the starting base is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetentionRates {
    /// Net Revenue Retention: credits expansion against contraction/churn.
    pub nrr: f64,
    /// Gross Revenue Retention: contraction/churn only.
    pub grr: f64,
    /// Churn rate in member count rather than revenue.
    pub logo_churn_rate: f64,
}

/// Payments/purchases totals for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerRollup {
    pub payments_total: f64,
    pub purchases_total: f64,
    /// Payments minus purchases (negative = receivables grew).
    pub net: f64,
}

/// Display classification of a period-over-period delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaDirection {
    Positive,
    Negative,
    Neutral,
}

/// A current-vs-prior metric with its display classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    pub current: f64,
    pub prior: f64,
    pub delta: f64,
    pub direction: DeltaDirection,
}

/// Full business summary for a period against the prior period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub bridge: MrrBridge,
    pub retention: RetentionRates,
    pub starting_member_count: usize,
    pub ending_member_count: usize,
    pub new_member_count: usize,
    pub churned_member_count: usize,
    pub ledger: LedgerRollup,
    pub prior_ledger: LedgerRollup,
    pub mrr_delta: MetricDelta,
    pub payments_delta: MetricDelta,
}
