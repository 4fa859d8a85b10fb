use serde::{Deserialize, Serialize};

/// Result reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Append results to this log file when set.
    pub results_log: Option<String>,
    /// Post the best classification back to the source as a comment.
    pub publish: bool,
}
