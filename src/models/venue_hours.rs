//! Venue operating-hour rules.
//!
//! The venue's calendar is described by three kinds of rule: recurring weekly
//! `base` hours, and date-specific `exceptional_open` / `exceptional_closure`
//! overrides. Weekday numbering is Sunday-based (0 = Sunday .. 6 = Saturday),
//! matching the data API.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of an operating-hour rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourRuleKind {
    /// Recurring weekly hours keyed on `day_of_week`.
    Base,
    /// Date-specific override opening the venue.
    ExceptionalOpen,
    /// Date-specific override closing the venue.
    ExceptionalClosure,
}

/// A time-of-day interval within one service day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// One operating-hour rule as returned by the data API.
///
/// Well-formed data carries `day_of_week` for [`HourRuleKind::Base`] rules
/// and `date` for exceptional rules, never both. Rows violating that
/// invariant are skipped (with a warning) by the day-status resolver rather
/// than rejected upfront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueHourRule {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: HourRuleKind,
    /// Sunday-based weekday index, 0-6. Set for `base` rules only.
    #[serde(default)]
    pub day_of_week: Option<u8>,
    /// Calendar date. Set for exceptional rules only.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Whether the rule covers the whole service day.
    #[serde(default)]
    pub full_day: bool,
    /// Explicit time ranges when not a full-day rule.
    #[serde(default)]
    pub time_ranges: Option<Vec<TimeRange>>,
    /// Creation timestamp, used to tie-break duplicate exceptional rules
    /// for the same date (most recently created wins).
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl VenueHourRule {
    /// Whether the rule satisfies the kind/day/date invariant.
    pub fn is_well_formed(&self) -> bool {
        match self.kind {
            HourRuleKind::Base => self.day_of_week.map(|d| d <= 6).unwrap_or(false),
            HourRuleKind::ExceptionalOpen | HourRuleKind::ExceptionalClosure => {
                self.date.is_some()
            }
        }
    }

    /// Whether a `base` rule applies to `date`'s weekday.
    pub fn matches_weekday(&self, date: NaiveDate) -> bool {
        self.kind == HourRuleKind::Base
            && self.day_of_week == Some(date.weekday().num_days_from_sunday() as u8)
    }

    /// Whether an exceptional rule targets `date`.
    pub fn matches_date(&self, date: NaiveDate) -> bool {
        self.kind != HourRuleKind::Base && self.date == Some(date)
    }

    /// Whether a closure rule blocks the entire day.
    ///
    /// A closure with explicit `time_ranges` is a partial carve-out and does
    /// not block the day at day granularity.
    pub fn closes_full_day(&self) -> bool {
        self.kind == HourRuleKind::ExceptionalClosure
            && (self.full_day || self.time_ranges.as_ref().map(|r| r.is_empty()).unwrap_or(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(kind: HourRuleKind) -> VenueHourRule {
        VenueHourRule {
            id: 1,
            kind,
            day_of_week: None,
            date: None,
            full_day: false,
            time_ranges: None,
            created_at: None,
        }
    }

    #[test]
    fn test_base_rule_requires_weekday() {
        let mut r = rule(HourRuleKind::Base);
        assert!(!r.is_well_formed());
        r.day_of_week = Some(5);
        assert!(r.is_well_formed());
        r.day_of_week = Some(7);
        assert!(!r.is_well_formed());
    }

    #[test]
    fn test_exceptional_rule_requires_date() {
        let mut r = rule(HourRuleKind::ExceptionalClosure);
        assert!(!r.is_well_formed());
        r.date = NaiveDate::from_ymd_opt(2024, 6, 10);
        assert!(r.is_well_formed());
    }

    #[test]
    fn test_closure_with_ranges_is_partial() {
        let mut r = rule(HourRuleKind::ExceptionalClosure);
        r.date = NaiveDate::from_ymd_opt(2024, 6, 10);
        assert!(r.closes_full_day());

        r.time_ranges = Some(vec![TimeRange {
            start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }]);
        assert!(!r.closes_full_day());

        r.full_day = true;
        assert!(r.closes_full_day());
    }

    #[test]
    fn test_matches_weekday_sunday_based() {
        let mut r = rule(HourRuleKind::Base);
        r.day_of_week = Some(5); // Friday
        let friday = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(r.matches_weekday(friday));
        assert!(!r.matches_weekday(monday));
    }
}
