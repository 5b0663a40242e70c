//! Campaign/reminder message templates (timing-relevant subset).
//!
//! A template carries exactly one of three timing shapes, selected by
//! `timing_type`: a one-off specific time, a recurring cadence, or an offset
//! relative to some trigger event (e.g. a reservation). The optional fields
//! here are the union of what each shape needs; the timing resolver treats a
//! missing required field as "timing not configured" rather than an error.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingType {
    SpecificTime,
    Recurring,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Which occurrence within the month a monthly cadence targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyOrdinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// How `recurring_monthly_value` is interpreted for a monthly cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyDayKind {
    /// A fixed day-of-month (1-31, clamped to the month's length).
    Day,
    /// The Nth weekday of the month; the value is a Sunday-based weekday
    /// index (e.g. first Monday = `First` + `1`).
    Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeProximity {
    Before,
    After,
}

/// A campaign message template as returned by the data API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignTemplate {
    pub id: i64,
    pub name: String,
    pub timing_type: TimingType,

    // specific_time shape
    #[serde(default)]
    pub specific_time: Option<NaiveTime>,
    #[serde(default)]
    pub specific_date: Option<NaiveDate>,

    // recurring shape
    #[serde(default)]
    pub recurring_type: Option<RecurringKind>,
    #[serde(default)]
    pub recurring_time: Option<NaiveTime>,
    /// Sunday-based weekday indices for a weekly cadence.
    #[serde(default)]
    pub recurring_weekdays: Option<Vec<u8>>,
    #[serde(default)]
    pub recurring_monthly_type: Option<MonthlyOrdinal>,
    #[serde(default)]
    pub recurring_monthly_day: Option<MonthlyDayKind>,
    #[serde(default)]
    pub recurring_monthly_value: Option<u32>,
    /// Fixed calendar date for a yearly cadence (year component ignored).
    #[serde(default)]
    pub recurring_yearly_date: Option<NaiveDate>,

    // relative shape
    #[serde(default)]
    pub relative_quantity: Option<i64>,
    #[serde(default)]
    pub relative_unit: Option<RelativeUnit>,
    #[serde(default)]
    pub relative_proximity: Option<RelativeProximity>,
    /// Optional time-of-day override applied after the offset.
    #[serde(default)]
    pub relative_time: Option<NaiveTime>,
}

impl CampaignTemplate {
    /// A blank template with the given timing shape, for tests and seeding.
    pub fn blank(id: i64, name: impl Into<String>, timing_type: TimingType) -> Self {
        Self {
            id,
            name: name.into(),
            timing_type,
            specific_time: None,
            specific_date: None,
            recurring_type: None,
            recurring_time: None,
            recurring_weekdays: None,
            recurring_monthly_type: None,
            recurring_monthly_day: None,
            recurring_monthly_value: None,
            recurring_yearly_date: None,
            relative_quantity: None,
            relative_unit: None,
            relative_proximity: None,
            relative_time: None,
        }
    }
}
