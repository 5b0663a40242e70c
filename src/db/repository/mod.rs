//! Repository trait for the external data API.
//!
//! The dashboard owns no persistence: every collection is fetched fresh per
//! request from the hosted backend. This trait is the single seam between
//! the computational services and that collaborator, and it is passed in
//! explicitly (held in `AppState`, handed to service functions) rather than
//! reached through a module-level singleton.

pub mod error;

use async_trait::async_trait;
use chrono::NaiveDate;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::{
    CampaignTemplate, LedgerEntry, MemberRevenueRow, PrivateEvent, Reservation, VenueHourRule,
};

/// Read-only repository over the venue's hosted data API.
///
/// Date-ranged fetches are inclusive on both ends. Implementations must be
/// `Send + Sync` to work with async Rust.
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Fetch all operating-hour rules (base and exceptional together).
    async fn fetch_hour_rules(&self) -> RepositoryResult<Vec<VenueHourRule>>;

    /// Fetch private events overlapping the date range.
    async fn fetch_private_events(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<PrivateEvent>>;

    /// Fetch reservations dated within the range.
    async fn fetch_reservations(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<Reservation>>;

    /// Fetch all campaign message templates.
    async fn fetch_campaign_templates(&self) -> RepositoryResult<Vec<CampaignTemplate>>;

    /// Fetch ledger entries dated within the range.
    async fn fetch_ledger_entries(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<LedgerEntry>>;

    /// Fetch per-member recurring charges for the billing period starting
    /// on `period_start`.
    async fn fetch_member_revenue(
        &self,
        period_start: NaiveDate,
    ) -> RepositoryResult<Vec<MemberRevenueRow>>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
