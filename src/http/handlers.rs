//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one dashboard view and delegates to the
//! service layer for the actual computation. Read paths never fail on
//! degraded data; the only client errors here are malformed parameters.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};

use super::dto::{
    BusinessSummary, BusinessSummaryQuery, CalendarOverview, CalendarQuery, CampaignSchedule,
    DaySummary, HealthResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint verifying the service is running and the data API
/// is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let data_api = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        data_api,
    }))
}

/// GET /v1/calendar/overview?from=YYYY-MM-DD&to=YYYY-MM-DD
///
/// Per-day covers, private events, and open/closed status for the range.
pub async fn calendar_overview(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> HandlerResult<CalendarOverview> {
    if query.from > query.to {
        return Err(AppError::BadRequest(format!(
            "range start {} is after range end {}",
            query.from, query.to
        )));
    }

    let overview =
        services::calendar_overview(state.repository.as_ref(), query.from, query.to, &state.config)
            .await;
    Ok(Json(overview))
}

/// GET /v1/calendar/{date}/status
///
/// Single-day open/closed status and summary.
pub async fn day_status(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> HandlerResult<DaySummary> {
    let date: NaiveDate = date
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid date: {}", date)))?;

    let summary = services::day_summary(state.repository.as_ref(), date, &state.config).await;
    Ok(Json(summary))
}

/// GET /v1/campaigns/schedule
///
/// Next send time for every campaign template, evaluated against now.
pub async fn campaign_schedule(State(state): State<AppState>) -> HandlerResult<CampaignSchedule> {
    let schedule =
        services::campaign_schedule(state.repository.as_ref(), Utc::now(), &state.config).await;
    Ok(Json(schedule))
}

/// GET /v1/analytics/business-summary?period_start=...&period_end=...
///
/// MRR bridge, retention rates, and ledger rollups for the period against
/// the prior billing month.
pub async fn business_summary(
    State(state): State<AppState>,
    Query(query): Query<BusinessSummaryQuery>,
) -> HandlerResult<BusinessSummary> {
    if query.period_start > query.period_end {
        return Err(AppError::BadRequest(format!(
            "period start {} is after period end {}",
            query.period_start, query.period_end
        )));
    }

    let summary = services::business_overview(
        state.repository.as_ref(),
        query.period_start,
        query.period_end,
    )
    .await;
    Ok(Json(summary))
}
