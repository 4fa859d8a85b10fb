use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::defaults;

/// Polling loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between polling cycles.
    pub interval_secs: u64,
    /// Days to look back when no start time is given.
    pub lookback_days: i64,
    /// Cursor seed; overrides the lookback when set.
    pub start_time: Option<DateTime<Utc>>,
    /// Instrument IDs to monitor. Empty means all instruments.
    pub instrument_ids: Vec<i64>,
    /// Seconds to sleep after a failed listing query before the next attempt.
    pub error_retry_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: defaults::DEFAULT_POLL_INTERVAL_SECS,
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
            start_time: None,
            instrument_ids: defaults::DEFAULT_INSTRUMENT_IDS.to_vec(),
            error_retry_secs: defaults::DEFAULT_ERROR_RETRY_SECS,
        }
    }
}
