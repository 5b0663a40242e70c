//! Data Transfer Objects for the HTTP API.
//!
//! The aggregation results in [`crate::api`] already derive
//! `Serialize`/`Deserialize` and are returned directly; this module holds
//! the request-side query types plus the health response.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{
    BusinessSummary, CalendarOverview, CampaignSchedule, CampaignSendPlan, DaySummary,
    LedgerRollup, MetricDelta, MrrBridge, RetentionRates, SendTiming,
};

/// Query parameters for the calendar overview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarQuery {
    /// Inclusive range start
    pub from: NaiveDate,
    /// Inclusive range end
    pub to: NaiveDate,
}

/// Query parameters for the business summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessSummaryQuery {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Data API connection status
    pub data_api: String,
}
