//! # Venueboard Backend
//!
//! Analytics and scheduling engine for a hospitality venue admin dashboard.
//!
//! This crate provides the computational core behind the dashboard's calendar,
//! campaign, and business-analytics views: resolving whether the venue is open
//! on a given date, aggregating reservations into per-day cover counts,
//! computing the next send time for recurring campaign messages, and building
//! the monthly MRR/retention summary. The backend exposes a REST API via Axum
//! for the dashboard frontend.
//!
//! ## Architecture
//!
//! - [`api`]: Result records and Data Transfer Objects (DTOs) shared across layers
//! - [`models`]: Domain entities fetched from the hosted data API
//! - [`services`]: Pure computations plus async orchestration over the repository
//! - [`db`]: Repository pattern over the external data API (local and remote backends)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! All domain entities are read-only inputs fetched fresh per request; this
//! crate owns no persistence. Every computation in [`services`] is a total
//! function: malformed rows are skipped with a warning, and a failed fetch
//! degrades to an empty collection rather than an error (dashboards render
//! zeroes, never crash).

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
