//! Duplicate guard for processed spectra.
//!
//! SkyPortal re-lists a spectrum every time its record is touched, so the
//! listener keeps the set of already-processed IDs across cycles and, with
//! persistence on, across restarts.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use cider_core::config::defaults::DEFAULT_CACHE_FILENAME;
use cider_core::config::CacheConfig;
use cider_core::errors::CacheError;
use tracing::{debug, warn};

/// Set of spectrum IDs that already produced a report.
///
/// Optionally backed by a one-ID-per-line text file that is appended on
/// every [`record`](Self::record) and re-read at startup. Lines that do
/// not parse as IDs are ignored, so a truncated write cannot poison the
/// whole cache.
#[derive(Debug)]
pub struct ProcessedCache {
    seen: HashSet<i64>,
    file: Option<PathBuf>,
}

impl ProcessedCache {
    /// Cache without a backing file; forgets everything on restart.
    pub fn in_memory() -> Self {
        Self {
            seen: HashSet::new(),
            file: None,
        }
    }

    /// Open the persistent cache under `config.dir`, creating the
    /// directory as needed.
    ///
    /// Honors `config.disabled` (memory only) and `config.clear_on_start`
    /// (truncate the backing file before loading).
    pub fn open(config: &CacheConfig) -> Result<Self, CacheError> {
        if config.disabled {
            return Ok(Self::in_memory());
        }

        fs::create_dir_all(&config.dir).map_err(|e| CacheError::DirUnusable {
            path: config.dir.clone(),
            reason: e.to_string(),
        })?;
        let file = PathBuf::from(&config.dir).join(DEFAULT_CACHE_FILENAME);

        if config.clear_on_start && file.exists() {
            fs::write(&file, "").map_err(|e| CacheError::WriteFailed {
                path: file.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        let mut seen = HashSet::new();
        if file.exists() {
            let content = fs::read_to_string(&file).map_err(|e| CacheError::DirUnusable {
                path: file.display().to_string(),
                reason: e.to_string(),
            })?;
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match line.parse::<i64>() {
                    Ok(id) => {
                        seen.insert(id);
                    }
                    Err(_) => warn!(line, "ignoring unparseable cache line"),
                }
            }
        }

        debug!(
            entries = seen.len(),
            path = %file.display(),
            "processed cache loaded"
        );
        Ok(Self {
            seen,
            file: Some(file),
        })
    }

    /// Whether this spectrum already produced a report.
    pub fn contains(&self, id: i64) -> bool {
        self.seen.contains(&id)
    }

    /// Mark a spectrum as processed, appending to the backing file when
    /// persistence is on. Recording an ID twice is a no-op.
    pub fn record(&mut self, id: i64) -> Result<(), CacheError> {
        if !self.seen.insert(id) {
            return Ok(());
        }
        if let Some(ref path) = self.file {
            let mut f = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| CacheError::WriteFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            writeln!(f, "{id}").map_err(|e| CacheError::WriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Number of processed spectra known to the cache.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
