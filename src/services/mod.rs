//! Service layer: pure computations plus repository orchestration.
//!
//! The four computational modules (`day_status`, `calendar`,
//! `campaign_timing`, `business_summary`) are pure, stateless functions over
//! already-fetched rows. `overview` is the async layer that fetches from the
//! repository, degrades failed fetches to empty collections, and feeds the
//! pure functions.

pub mod business_summary;
pub mod calendar;
pub mod campaign_timing;
pub mod day_status;
pub mod overview;

pub use business_summary::compute_business_summary;
pub use calendar::{aggregate_day, aggregate_range};
pub use campaign_timing::next_send_time;
pub use day_status::is_day_open;
pub use overview::{business_overview, calendar_overview, campaign_schedule, day_summary};
