use serde::{Deserialize, Serialize};

use super::defaults;

/// Processed-spectrum cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding the processed-ID file.
    pub dir: String,
    /// Disable persistence entirely (in-memory dedup only).
    pub disabled: bool,
    /// Truncate the cache file at startup.
    pub clear_on_start: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: defaults::DEFAULT_CACHE_DIR.to_string(),
            disabled: false,
            clear_on_start: false,
        }
    }
}
