//! Service-layer integration tests against the in-memory repository.

#![cfg(feature = "local-repo")]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use venueboard::config::EngineConfig;
use venueboard::db::{LocalRepository, RepositoryError, RepositoryResult, VenueRepository};
use venueboard::models::{
    CampaignTemplate, HourRuleKind, LedgerEntry, LedgerKind, MemberRevenueRow, PrivateEvent,
    RecurringKind, Reservation, TimingType, VenueHourRule,
};
use venueboard::services;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn base_rule(day_of_week: u8) -> VenueHourRule {
    VenueHourRule {
        id: day_of_week as i64,
        kind: HourRuleKind::Base,
        day_of_week: Some(day_of_week),
        date: None,
        full_day: true,
        time_ranges: None,
        created_at: None,
    }
}

fn reservation(id: i64, y: i32, m: u32, day: u32, party_size: u32) -> Reservation {
    Reservation {
        id,
        start_time: Utc.with_ymd_and_hms(y, m, day, 19, 0, 0).unwrap(),
        party_size,
        private_event_id: None,
        status: None,
    }
}

#[tokio::test]
async fn calendar_overview_resolves_days_from_seeded_data() {
    let repo = LocalRepository::new();
    // Open Friday and Saturday (Sunday-based 5, 6).
    repo.seed_hour_rules(vec![base_rule(5), base_rule(6)]).await;
    repo.seed_reservations(vec![
        reservation(1, 2024, 6, 14, 4),
        reservation(2, 2024, 6, 15, 6),
        reservation(3, 2024, 6, 16, 2),
    ])
    .await;
    repo.seed_private_events(vec![PrivateEvent {
        id: 1,
        title: "Buyout".to_string(),
        start_time: Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 6, 15, 23, 0, 0).unwrap(),
        full_day: true,
    }])
    .await;

    let overview = services::calendar_overview(
        &repo,
        d(2024, 6, 14),
        d(2024, 6, 16),
        &EngineConfig::default(),
    )
    .await;

    assert_eq!(overview.days.len(), 3);
    // Friday open, Saturday closed by the buyout, Sunday closed by schedule.
    assert!(overview.days[0].is_open);
    assert!(!overview.days[1].is_open);
    assert!(!overview.days[2].is_open);
    assert_eq!(overview.open_day_count, 1);
    assert_eq!(overview.total_covers, 12);
    assert_eq!(overview.days[1].private_event_count, 1);
}

#[tokio::test]
async fn business_overview_compares_against_prior_period() {
    let repo = LocalRepository::new();
    let june = d(2024, 6, 1);
    let may = d(2024, 5, 1);

    repo.seed_member_revenue(
        june,
        vec![
            MemberRevenueRow::new(1, 100.0),
            MemberRevenueRow::new(2, 150.0),
        ],
    )
    .await;
    repo.seed_member_revenue(
        may,
        vec![
            MemberRevenueRow::new(1, 100.0),
            MemberRevenueRow::new(3, 90.0),
        ],
    )
    .await;
    repo.seed_ledger_entries(vec![
        LedgerEntry {
            id: 1,
            kind: LedgerKind::Payment,
            date: d(2024, 6, 5),
            amount: 250.0,
        },
        LedgerEntry {
            id: 2,
            kind: LedgerKind::Purchase,
            date: d(2024, 6, 7),
            amount: 40.0,
        },
        LedgerEntry {
            id: 3,
            kind: LedgerKind::Payment,
            date: d(2024, 5, 20),
            amount: 180.0,
        },
    ])
    .await;

    // June 1-30 compares against May 1-31; the prior member fetch is keyed
    // by May 1.
    let summary = services::business_overview(&repo, june, d(2024, 6, 30)).await;

    assert_eq!(summary.bridge.starting_mrr, 190.0);
    assert_eq!(summary.bridge.new_mrr, 150.0);
    assert_eq!(summary.bridge.churned_mrr, 90.0);
    assert_eq!(summary.bridge.ending_mrr, 250.0);
    assert_eq!(summary.ledger.payments_total, 250.0);
    assert_eq!(summary.ledger.net, 210.0);
}

#[tokio::test]
async fn campaign_schedule_reports_unconfigured_templates() {
    let repo = LocalRepository::new();
    let mut daily = CampaignTemplate::blank(1, "daily digest", TimingType::Recurring);
    daily.recurring_type = Some(RecurringKind::Daily);
    daily.recurring_time = NaiveTime::from_hms_opt(10, 0, 0);
    let broken = CampaignTemplate::blank(2, "broken", TimingType::Recurring);
    repo.seed_campaign_templates(vec![daily, broken]).await;

    let now = Utc.with_ymd_and_hms(2024, 6, 11, 8, 0, 0).unwrap();
    let schedule = services::campaign_schedule(&repo, now, &EngineConfig::default()).await;

    assert_eq!(schedule.plans.len(), 2);
    assert_eq!(schedule.unconfigured_template_ids, vec![2]);
    assert!(schedule.plans[0].timing != venueboard::api::SendTiming::Unconfigured);
}

// =============================================================================
// Degradation policy
// =============================================================================

struct FailingRepository;

#[async_trait]
impl VenueRepository for FailingRepository {
    async fn fetch_hour_rules(&self) -> RepositoryResult<Vec<VenueHourRule>> {
        Err(RepositoryError::connection("data api unreachable"))
    }

    async fn fetch_private_events(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> RepositoryResult<Vec<PrivateEvent>> {
        Err(RepositoryError::connection("data api unreachable"))
    }

    async fn fetch_reservations(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> RepositoryResult<Vec<Reservation>> {
        Err(RepositoryError::connection("data api unreachable"))
    }

    async fn fetch_campaign_templates(&self) -> RepositoryResult<Vec<CampaignTemplate>> {
        Err(RepositoryError::connection("data api unreachable"))
    }

    async fn fetch_ledger_entries(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> RepositoryResult<Vec<LedgerEntry>> {
        Err(RepositoryError::connection("data api unreachable"))
    }

    async fn fetch_member_revenue(
        &self,
        _period_start: NaiveDate,
    ) -> RepositoryResult<Vec<MemberRevenueRow>> {
        Err(RepositoryError::connection("data api unreachable"))
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(false)
    }
}

#[tokio::test]
async fn failed_fetches_degrade_to_zeroed_summaries() {
    let repo = FailingRepository;

    let overview = services::calendar_overview(
        &repo,
        d(2024, 6, 14),
        d(2024, 6, 16),
        &EngineConfig::default(),
    )
    .await;
    assert_eq!(overview.days.len(), 3);
    assert_eq!(overview.total_covers, 0);
    assert_eq!(overview.open_day_count, 0);
    assert!(overview.days.iter().all(|day| !day.is_open));

    let summary = services::business_overview(&repo, d(2024, 6, 1), d(2024, 6, 30)).await;
    assert_eq!(summary.bridge.starting_mrr, 0.0);
    assert_eq!(summary.bridge.ending_mrr, 0.0);
    assert_eq!(summary.retention.nrr, 0.0);
    assert!(!summary.retention.nrr.is_nan());

    let schedule = services::campaign_schedule(
        &repo,
        Utc.with_ymd_and_hms(2024, 6, 11, 8, 0, 0).unwrap(),
        &EngineConfig::default(),
    )
    .await;
    assert!(schedule.plans.is_empty());
}
