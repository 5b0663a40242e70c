//! Engine tunables for the aggregation and timing services.

use serde::{Deserialize, Serialize};

/// Configuration for the computational services.
///
/// Both values were hard-coded literals in the original dashboard scripts;
/// they are deliberately configurable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Placeholder revenue attributed to each cover, in venue currency.
    /// A stand-in for real pricing, not an actual tariff.
    pub revenue_per_cover: f64,
    /// Tolerance around a campaign's target send time within which the
    /// message is considered due now. Matches the dispatcher cron interval.
    pub dispatch_window_minutes: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            revenue_per_cover: 85.0,
            dispatch_window_minutes: 10,
        }
    }
}

impl EngineConfig {
    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// - `REVENUE_PER_COVER`: per-cover revenue placeholder
    /// - `DISPATCH_WINDOW_MINUTES`: campaign dispatch tolerance
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            revenue_per_cover: std::env::var("REVENUE_PER_COVER")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.revenue_per_cover),
            dispatch_window_minutes: std::env::var("DISPATCH_WINDOW_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.dispatch_window_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EngineConfig;

    #[test]
    fn test_defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.revenue_per_cover, 85.0);
        assert_eq!(cfg.dispatch_window_minutes, 10);
    }
}
