//! Reservations and private events.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a reservation.
///
/// Unknown values deserialize to [`ReservationStatus::Other`] so a new status
/// added upstream never fails a whole fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
    NoShow,
    #[serde(other)]
    Other,
}

/// A booking for a party on a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub party_size: u32,
    /// Set when the reservation belongs to a private event; such
    /// reservations are excluded from regular cover counts.
    #[serde(default)]
    pub private_event_id: Option<i64>,
    #[serde(default)]
    pub status: Option<ReservationStatus>,
}

impl Reservation {
    /// Whether this reservation contributes to the regular covers sum for
    /// `date`: dated on that day, not attached to a private event, and not
    /// cancelled or a no-show.
    pub fn counts_for_covers(&self, date: NaiveDate) -> bool {
        self.start_time.date_naive() == date
            && self.private_event_id.is_none()
            && !matches!(
                self.status,
                Some(ReservationStatus::Cancelled) | Some(ReservationStatus::NoShow)
            )
    }
}

/// A private event blocking part or all of the venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateEvent {
    pub id: i64,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// A full-day private event closes the venue to ordinary reservations
    /// on every date it spans.
    #[serde(default)]
    pub full_day: bool,
}

impl PrivateEvent {
    /// Whether the event falls on `date`.
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        let start = self.start_time.date_naive();
        let end = self.end_time.date_naive().max(start);
        start <= date && date <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_counts_for_covers_excludes_private_event_links() {
        let r = Reservation {
            id: 1,
            start_time: dt(2024, 6, 10, 19),
            party_size: 4,
            private_event_id: Some(9),
            status: Some(ReservationStatus::Confirmed),
        };
        assert!(!r.counts_for_covers(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
    }

    #[test]
    fn test_counts_for_covers_excludes_cancellations() {
        let mut r = Reservation {
            id: 1,
            start_time: dt(2024, 6, 10, 19),
            party_size: 4,
            private_event_id: None,
            status: Some(ReservationStatus::Cancelled),
        };
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(!r.counts_for_covers(date));
        r.status = Some(ReservationStatus::NoShow);
        assert!(!r.counts_for_covers(date));
        r.status = Some(ReservationStatus::Seated);
        assert!(r.counts_for_covers(date));
        r.status = None;
        assert!(r.counts_for_covers(date));
    }

    #[test]
    fn test_private_event_spans_dates() {
        let ev = PrivateEvent {
            id: 1,
            title: "Wedding".to_string(),
            start_time: dt(2024, 6, 10, 18),
            end_time: dt(2024, 6, 12, 2),
            full_day: true,
        };
        assert!(ev.covers_date(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
        assert!(ev.covers_date(NaiveDate::from_ymd_opt(2024, 6, 11).unwrap()));
        assert!(ev.covers_date(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()));
        assert!(!ev.covers_date(NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()));
    }

    #[test]
    fn test_private_event_inverted_span_falls_back_to_start() {
        let ev = PrivateEvent {
            id: 1,
            title: "Bad data".to_string(),
            start_time: dt(2024, 6, 10, 18),
            end_time: dt(2024, 6, 9, 2),
            full_day: true,
        };
        assert!(ev.covers_date(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
        assert!(!ev.covers_date(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap()));
    }
}
