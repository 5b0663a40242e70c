//! Recurring campaign/reminder send-time resolution.
//!
//! Given a template's timing configuration and a trigger timestamp, computes
//! the next concrete send time and whether "now" falls inside the dispatch
//! window. A template missing a field its `timing_type` requires resolves to
//! [`SendTiming::Unconfigured`] instead of an error; the dispatcher checks
//! for that sentinel before scheduling.
//!
//! Weekday indices are Sunday-based (0 = Sunday .. 6 = Saturday), the same
//! convention as venue hour rules.

use chrono::{
    DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc, Weekday,
};
use tracing::debug;

use crate::api::SendTiming;
use crate::config::EngineConfig;
use crate::models::{
    CampaignTemplate, MonthlyDayKind, MonthlyOrdinal, RecurringKind, RelativeProximity,
    RelativeUnit, TimingType,
};

/// Resolve the next send time for `template`.
///
/// - `trigger` is the event the template is anchored to (a reservation, a
///   membership action); only `relative` templates and date-less
///   `specific_time` templates consult it.
/// - `now` is the evaluation instant; recurring cadences produce their next
///   occurrence at or after it.
///
/// `time_diff_minutes` is signed, `target - now`, so a positive value means
/// the send is still in the future. `should_send_now` is true when the
/// absolute difference is within `cfg.dispatch_window_minutes`.
pub fn next_send_time(
    template: &CampaignTemplate,
    trigger: DateTime<Utc>,
    now: DateTime<Utc>,
    cfg: &EngineConfig,
) -> SendTiming {
    let Some(target) = resolve_target(template, trigger, now) else {
        debug!(
            template_id = template.id,
            timing_type = ?template.timing_type,
            "campaign template timing not configured"
        );
        return SendTiming::Unconfigured;
    };

    let time_diff_minutes = target.signed_duration_since(now).num_minutes();
    SendTiming::Scheduled {
        target_send_time: target,
        should_send_now: time_diff_minutes.abs() <= cfg.dispatch_window_minutes,
        time_diff_minutes,
    }
}

fn resolve_target(
    template: &CampaignTemplate,
    trigger: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match template.timing_type {
        TimingType::SpecificTime => {
            let time = template.specific_time?;
            let date = template.specific_date.unwrap_or_else(|| trigger.date_naive());
            Some(at(date, time))
        }
        TimingType::Recurring => resolve_recurring(template, now),
        TimingType::Relative => resolve_relative(template, trigger),
    }
}

fn at(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(time))
}

// =============================================================================
// Recurring cadences
// =============================================================================

fn resolve_recurring(template: &CampaignTemplate, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match template.recurring_type? {
        RecurringKind::Daily => {
            let time = template.recurring_time?;
            let today = at(now.date_naive(), time);
            if today >= now {
                Some(today)
            } else {
                Some(at(now.date_naive().succ_opt()?, time))
            }
        }
        RecurringKind::Weekly => {
            let time = template.recurring_time?;
            let weekdays: Vec<u8> = template
                .recurring_weekdays
                .as_ref()?
                .iter()
                .copied()
                .filter(|w| *w <= 6)
                .collect();
            if weekdays.is_empty() {
                return None;
            }
            // Offset 0 keeps today's slot alive while its time has not
            // passed; 7 days out is always a hit for a non-empty list.
            for offset in 0..=7i64 {
                let date = now.date_naive().checked_add_signed(Duration::days(offset))?;
                if weekdays.contains(&(date.weekday().num_days_from_sunday() as u8)) {
                    let candidate = at(date, time);
                    if candidate >= now {
                        return Some(candidate);
                    }
                }
            }
            None
        }
        RecurringKind::Monthly => {
            let time = template.recurring_time?;
            let ordinal = template.recurring_monthly_type?;
            let day_kind = template.recurring_monthly_day?;
            let value = template.recurring_monthly_value?;

            let mut anchor = now.date_naive().with_day(1)?;
            // This month may already be past its occurrence; thirteen
            // anchors guarantee a hit for any resolvable configuration.
            for _ in 0..13 {
                if let Some(date) = monthly_date(anchor.year(), anchor.month(), ordinal, day_kind, value)
                {
                    let candidate = at(date, time);
                    if candidate >= now {
                        return Some(candidate);
                    }
                }
                anchor = anchor.checked_add_months(Months::new(1))?;
            }
            None
        }
        RecurringKind::Yearly => {
            let time = template.recurring_time?;
            let yearly = template.recurring_yearly_date?;
            for extra_years in 0..=1 {
                let year = now.year() + extra_years;
                let date = clamped_ymd(year, yearly.month(), yearly.day())?;
                let candidate = at(date, time);
                if candidate >= now {
                    return Some(candidate);
                }
            }
            None
        }
    }
}

/// The concrete day a monthly cadence lands on within one month, if any.
fn monthly_date(
    year: i32,
    month: u32,
    ordinal: MonthlyOrdinal,
    day_kind: MonthlyDayKind,
    value: u32,
) -> Option<NaiveDate> {
    match day_kind {
        MonthlyDayKind::Day => {
            // "Last day" ignores the value; otherwise the value is a fixed
            // day-of-month, clamped to the month's length.
            if ordinal == MonthlyOrdinal::Last {
                return last_day_of_month(year, month);
            }
            if value == 0 {
                return None;
            }
            clamped_ymd(year, month, value)
        }
        MonthlyDayKind::Weekday => {
            let weekday = weekday_from_sunday_index(value)?;
            let n = match ordinal {
                MonthlyOrdinal::First => 1,
                MonthlyOrdinal::Second => 2,
                MonthlyOrdinal::Third => 3,
                MonthlyOrdinal::Fourth => 4,
                MonthlyOrdinal::Last => return last_weekday_of_month(year, month, weekday),
            };
            nth_weekday_of_month(year, month, weekday, n)
        }
    }
}

fn weekday_from_sunday_index(index: u32) -> Option<Weekday> {
    Some(match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => return None,
    })
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    first_of_next.pred_opt()
}

/// A day-of-month clamped to the month's length (Feb 30 -> Feb 28/29).
fn clamped_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        let last = last_day_of_month(year, month)?;
        if day > last.day() {
            Some(last)
        } else {
            None
        }
    })
}

fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (weekday.num_days_from_sunday() + 7 - first.weekday().num_days_from_sunday()) % 7;
    let day = 1 + offset + 7 * (n - 1);
    let last = last_day_of_month(year, month)?;
    if day <= last.day() {
        NaiveDate::from_ymd_opt(year, month, day)
    } else {
        None
    }
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last = last_day_of_month(year, month)?;
    let back = (last.weekday().num_days_from_sunday() + 7 - weekday.num_days_from_sunday()) % 7;
    last.checked_sub_signed(Duration::days(back as i64))
}

// =============================================================================
// Relative offsets
// =============================================================================

fn resolve_relative(
    template: &CampaignTemplate,
    trigger: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let quantity = template.relative_quantity?;
    let unit = template.relative_unit?;
    let proximity = template.relative_proximity?;
    if quantity < 0 {
        return None;
    }

    let target = match unit {
        RelativeUnit::Minute => shift(trigger, Duration::minutes(quantity), proximity)?,
        RelativeUnit::Hour => shift(trigger, Duration::hours(quantity), proximity)?,
        RelativeUnit::Day => shift(trigger, Duration::days(quantity), proximity)?,
        RelativeUnit::Week => shift(trigger, Duration::weeks(quantity), proximity)?,
        RelativeUnit::Month => shift_months(trigger, u32::try_from(quantity).ok()?, proximity)?,
        RelativeUnit::Year => {
            let months = u32::try_from(quantity).ok()?.checked_mul(12)?;
            shift_months(trigger, months, proximity)?
        }
    };

    // Time-of-day override keeps the computed date.
    Some(match template.relative_time {
        Some(time) => at(target.date_naive(), time),
        None => target,
    })
}

fn shift(
    origin: DateTime<Utc>,
    amount: Duration,
    proximity: RelativeProximity,
) -> Option<DateTime<Utc>> {
    match proximity {
        RelativeProximity::Before => origin.checked_sub_signed(amount),
        RelativeProximity::After => origin.checked_add_signed(amount),
    }
}

fn shift_months(
    origin: DateTime<Utc>,
    months: u32,
    proximity: RelativeProximity,
) -> Option<DateTime<Utc>> {
    match proximity {
        RelativeProximity::Before => origin.checked_sub_months(Months::new(months)),
        RelativeProximity::After => origin.checked_add_months(Months::new(months)),
    }
}

#[cfg(test)]
#[path = "campaign_timing_tests.rs"]
mod campaign_timing_tests;
