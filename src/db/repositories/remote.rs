//! HTTP client repository over the hosted data API.
//!
//! Thin GET wrapper per endpoint: authenticate with a bearer token when one
//! is configured, normalize the response envelope through
//! [`crate::db::envelope`], and decode rows individually so one malformed
//! row never fails a batch.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::db::envelope;
use crate::db::repository::{
    ErrorContext, RepositoryError, RepositoryResult, VenueRepository,
};
use crate::models::{
    CampaignTemplate, LedgerEntry, MemberRevenueRow, PrivateEvent, Reservation, VenueHourRule,
};

/// Repository backed by the hosted data API.
pub struct RemoteRepository {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl RemoteRepository {
    /// Create a repository against `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    /// Build from `DATA_API_URL` and optional `DATA_API_TOKEN`.
    pub fn from_env() -> RepositoryResult<Self> {
        let base_url = std::env::var("DATA_API_URL").map_err(|_| {
            RepositoryError::configuration("DATA_API_URL is not set")
        })?;
        let token = std::env::var("DATA_API_TOKEN").ok();
        Ok(Self::new(base_url, token))
    }

    async fn get_rows(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> RepositoryResult<Vec<serde_json::Value>> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            RepositoryError::ConnectionError {
                message: e.to_string(),
                context: ErrorContext::new("get_rows").with_details(url.clone()).retryable(),
            }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RepositoryError::unauthorized(format!(
                "{} returned {}",
                url, status
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::query_with_context(
                format!("{} returned {}", url, status),
                ErrorContext::new("get_rows").with_details(body),
            ));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            RepositoryError::validation_with_context(
                e.to_string(),
                ErrorContext::new("get_rows").with_details(url),
            )
        })?;
        envelope::extract_rows(body)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        entity: &str,
    ) -> RepositoryResult<Vec<T>> {
        let rows = self.get_rows(path, query).await?;
        Ok(envelope::decode_rows(rows, entity))
    }
}

fn range_query(from: NaiveDate, to: NaiveDate) -> Vec<(&'static str, String)> {
    vec![("from", from.to_string()), ("to", to.to_string())]
}

#[async_trait]
impl VenueRepository for RemoteRepository {
    async fn fetch_hour_rules(&self) -> RepositoryResult<Vec<VenueHourRule>> {
        self.fetch("/api/venue-hours", &[], "hour_rule").await
    }

    async fn fetch_private_events(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<PrivateEvent>> {
        self.fetch("/api/private-events", &range_query(from, to), "private_event")
            .await
    }

    async fn fetch_reservations(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<Reservation>> {
        self.fetch("/api/reservations", &range_query(from, to), "reservation")
            .await
    }

    async fn fetch_campaign_templates(&self) -> RepositoryResult<Vec<CampaignTemplate>> {
        self.fetch("/api/campaign-messages", &[], "campaign_template")
            .await
    }

    async fn fetch_ledger_entries(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<LedgerEntry>> {
        self.fetch("/api/ledger", &range_query(from, to), "ledger_entry")
            .await
    }

    async fn fetch_member_revenue(
        &self,
        period_start: NaiveDate,
    ) -> RepositoryResult<Vec<MemberRevenueRow>> {
        self.fetch(
            "/api/members",
            &[("period_start", period_start.to_string())],
            "member_revenue",
        )
        .await
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        match self.get_rows("/api/venue-hours", &[]).await {
            Ok(_) => Ok(true),
            Err(RepositoryError::ConnectionError { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
