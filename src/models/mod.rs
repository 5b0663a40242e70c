//! Domain entities fetched from the hosted data API.
//!
//! Every type here is a read-only input to the pure functions in
//! [`crate::services`]; nothing is mutated or persisted by this crate.

pub mod campaign;
pub mod ledger;
pub mod reservation;
pub mod venue_hours;

pub use campaign::{
    CampaignTemplate, MonthlyDayKind, MonthlyOrdinal, RecurringKind, RelativeProximity,
    RelativeUnit, TimingType,
};
pub use ledger::{LedgerEntry, LedgerKind, MemberRevenueRow};
pub use reservation::{PrivateEvent, Reservation, ReservationStatus};
pub use venue_hours::{HourRuleKind, TimeRange, VenueHourRule};
