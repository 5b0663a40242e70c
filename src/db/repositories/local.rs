//! In-memory repository for unit testing and local development.
//!
//! Collections are seeded directly and filtered in memory; date-ranged
//! fetches apply the same inclusive-bounds semantics the hosted API does.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::db::repository::{RepositoryResult, VenueRepository};
use crate::models::{
    CampaignTemplate, LedgerEntry, MemberRevenueRow, PrivateEvent, Reservation, VenueHourRule,
};

#[derive(Default)]
struct Store {
    hour_rules: Vec<VenueHourRule>,
    private_events: Vec<PrivateEvent>,
    reservations: Vec<Reservation>,
    campaign_templates: Vec<CampaignTemplate>,
    ledger_entries: Vec<LedgerEntry>,
    /// Member revenue keyed by billing period start.
    member_revenue: Vec<(NaiveDate, Vec<MemberRevenueRow>)>,
}

/// In-memory implementation of [`VenueRepository`].
#[derive(Default)]
pub struct LocalRepository {
    store: RwLock<Store>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_hour_rules(&self, rules: Vec<VenueHourRule>) {
        self.store.write().await.hour_rules = rules;
    }

    pub async fn seed_private_events(&self, events: Vec<PrivateEvent>) {
        self.store.write().await.private_events = events;
    }

    pub async fn seed_reservations(&self, reservations: Vec<Reservation>) {
        self.store.write().await.reservations = reservations;
    }

    pub async fn seed_campaign_templates(&self, templates: Vec<CampaignTemplate>) {
        self.store.write().await.campaign_templates = templates;
    }

    pub async fn seed_ledger_entries(&self, entries: Vec<LedgerEntry>) {
        self.store.write().await.ledger_entries = entries;
    }

    pub async fn seed_member_revenue(&self, period_start: NaiveDate, rows: Vec<MemberRevenueRow>) {
        let mut store = self.store.write().await;
        store.member_revenue.retain(|(start, _)| *start != period_start);
        store.member_revenue.push((period_start, rows));
    }
}

#[async_trait]
impl VenueRepository for LocalRepository {
    async fn fetch_hour_rules(&self) -> RepositoryResult<Vec<VenueHourRule>> {
        Ok(self.store.read().await.hour_rules.clone())
    }

    async fn fetch_private_events(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<PrivateEvent>> {
        Ok(self
            .store
            .read()
            .await
            .private_events
            .iter()
            .filter(|ev| {
                let start = ev.start_time.date_naive();
                let end = ev.end_time.date_naive().max(start);
                start <= to && end >= from
            })
            .cloned()
            .collect())
    }

    async fn fetch_reservations(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<Reservation>> {
        Ok(self
            .store
            .read()
            .await
            .reservations
            .iter()
            .filter(|r| {
                let date = r.start_time.date_naive();
                from <= date && date <= to
            })
            .cloned()
            .collect())
    }

    async fn fetch_campaign_templates(&self) -> RepositoryResult<Vec<CampaignTemplate>> {
        Ok(self.store.read().await.campaign_templates.clone())
    }

    async fn fetch_ledger_entries(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<LedgerEntry>> {
        Ok(self
            .store
            .read()
            .await
            .ledger_entries
            .iter()
            .filter(|e| from <= e.date && e.date <= to)
            .cloned()
            .collect())
    }

    async fn fetch_member_revenue(
        &self,
        period_start: NaiveDate,
    ) -> RepositoryResult<Vec<MemberRevenueRow>> {
        Ok(self
            .store
            .read()
            .await
            .member_revenue
            .iter()
            .find(|(start, _)| *start == period_start)
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    #[tokio::test]
    async fn test_reservation_range_filter_is_inclusive() {
        let repo = LocalRepository::new();
        let mk = |id: i64, day: u32| Reservation {
            id,
            start_time: Utc.with_ymd_and_hms(2024, 6, day, 19, 0, 0).unwrap(),
            party_size: 2,
            private_event_id: None,
            status: None,
        };
        repo.seed_reservations(vec![mk(1, 9), mk(2, 10), mk(3, 12), mk(4, 13)])
            .await;

        let from = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let rows = repo.fetch_reservations(from, to).await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_member_revenue_keyed_by_period() {
        let repo = LocalRepository::new();
        let june = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let may = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        repo.seed_member_revenue(june, vec![MemberRevenueRow::new(1, 100.0)])
            .await;
        repo.seed_member_revenue(may, vec![MemberRevenueRow::new(1, 80.0)])
            .await;

        assert_eq!(repo.fetch_member_revenue(june).await.unwrap()[0].recurring_charge, 100.0);
        assert_eq!(repo.fetch_member_revenue(may).await.unwrap()[0].recurring_charge, 80.0);
        let other = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert!(repo.fetch_member_revenue(other).await.unwrap().is_empty());
    }
}
