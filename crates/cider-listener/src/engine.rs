//! The polling engine.
//!
//! Windows the listing API with a monotonic cursor, classifies every new
//! spectrum through the trait seams, and hands results to the reporter.
//! All failure policy lives here: what is retried, what is skipped, and
//! when the cursor may move.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use cider_core::catalog::{ClassificationReport, SpectrumSummary};
use cider_core::config::{PollConfig, ReportConfig};
use cider_core::spectra::Cursor;
use cider_core::traits::{IClassifier, ISpectrumCatalog};
use cider_core::CiderResult;

use crate::cache::ProcessedCache;
use crate::report::{comment_text, Reporter};

/// Counters for one polling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleOutcome {
    /// New spectra listed after the cache filter.
    pub listed: usize,
    /// Reports emitted this cycle.
    pub classified: usize,
    /// Spectra skipped permanently (bad data).
    pub skipped: usize,
    /// Spectra deferred to the next cycle (transient failures).
    pub deferred: usize,
}

/// Polling engine over a catalog and a classifier.
///
/// Failure policy per cycle:
/// - listing failure: cursor untouched, error returned to the caller;
/// - transient per-spectrum failure (network, 5xx): spectrum deferred,
///   cursor held so the next window re-lists it;
/// - data failure (malformed spectrum, model rejection): spectrum recorded
///   as processed and never retried;
/// - publish or enrichment failure: warned, report still counts.
///
/// The cursor advances to the window end only in cycles with no deferrals.
pub struct Listener<'a> {
    catalog: &'a dyn ISpectrumCatalog,
    classifier: &'a dyn IClassifier,
    config: PollConfig,
    reporter: Reporter,
    publish: bool,
    cache: ProcessedCache,
    cursor: Cursor,
}

impl<'a> Listener<'a> {
    /// Build a listener.
    ///
    /// The cursor seeds from `config.start_time` when given, otherwise
    /// `now - lookback_days`.
    pub fn new(
        catalog: &'a dyn ISpectrumCatalog,
        classifier: &'a dyn IClassifier,
        config: PollConfig,
        report_config: &ReportConfig,
        cache: ProcessedCache,
    ) -> Self {
        let start = config
            .start_time
            .unwrap_or_else(|| Utc::now() - chrono::Duration::days(config.lookback_days));
        Self {
            catalog,
            classifier,
            reporter: Reporter::new(report_config),
            publish: report_config.publish,
            cache,
            cursor: Cursor::starting_at(start),
            config,
        }
    }

    /// Current watermark, for observability and tests.
    pub fn cursor_position(&self) -> chrono::DateTime<Utc> {
        self.cursor.position()
    }

    /// Poll forever.
    ///
    /// Listing failures get the short error sleep and a fresh attempt;
    /// everything else waits out the regular interval.
    pub fn run(&mut self) {
        info!(
            interval_secs = self.config.interval_secs,
            cursor = %self.cursor.position(),
            "listener started"
        );
        loop {
            match self.run_cycle() {
                Ok(outcome) => {
                    if outcome.listed > 0 {
                        info!(
                            classified = outcome.classified,
                            skipped = outcome.skipped,
                            deferred = outcome.deferred,
                            "cycle complete"
                        );
                    } else {
                        debug!(cursor = %self.cursor.position(), "no new spectra");
                    }
                    thread::sleep(Duration::from_secs(self.config.interval_secs));
                }
                Err(e) => {
                    warn!(error = %e, "listing failed; retrying shortly");
                    thread::sleep(Duration::from_secs(self.config.error_retry_secs));
                }
            }
        }
    }

    /// One polling cycle over the window `[cursor, now]`.
    pub fn run_cycle(&mut self) -> CiderResult<CycleOutcome> {
        let window_end = Utc::now();
        let summaries = self.catalog.recent_spectra(
            &self.config.instrument_ids,
            self.cursor.position(),
            window_end,
        )?;

        let fresh: Vec<SpectrumSummary> = summaries
            .into_iter()
            .filter(|s| !self.cache.contains(s.id))
            .collect();

        let mut outcome = CycleOutcome {
            listed: fresh.len(),
            ..CycleOutcome::default()
        };

        if !fresh.is_empty() {
            info!(count = fresh.len(), until = %window_end, "found new spectra");
        }

        for summary in &fresh {
            match self.process_one(summary) {
                Ok(()) => {
                    outcome.classified += 1;
                    self.record(summary.id);
                }
                Err(e) if e.is_transient() => {
                    warn!(
                        spectrum = summary.id,
                        error = %e,
                        "transient failure; will re-list next cycle"
                    );
                    outcome.deferred += 1;
                }
                Err(e) => {
                    warn!(spectrum = summary.id, error = %e, "skipping spectrum");
                    outcome.skipped += 1;
                    self.record(summary.id);
                }
            }
        }

        if outcome.deferred == 0 {
            self.cursor.advance_to(window_end);
        }
        Ok(outcome)
    }

    /// Fetch, classify, and report a single spectrum.
    fn process_one(&self, summary: &SpectrumSummary) -> CiderResult<()> {
        debug!(spectrum = summary.id, obj = %summary.obj_id, "fetching spectrum");
        let spectrum = self.catalog.spectrum(summary.id)?;
        let scores = self.classifier.classify(&spectrum)?;

        let mut report =
            ClassificationReport::new(spectrum.obj_id.clone(), spectrum.id, scores);
        match self.catalog.source(&spectrum.obj_id) {
            Ok(source) => report = report.with_source(source),
            Err(e) => warn!(
                obj = %spectrum.obj_id,
                error = %e,
                "source enrichment failed; reporting without it"
            ),
        }

        self.reporter.emit(&report);

        if self.publish {
            if let Err(e) = self
                .catalog
                .post_comment(&report.obj_id, &comment_text(&report))
            {
                warn!(obj = %report.obj_id, error = %e, "publish failed; report kept locally");
            }
        }
        Ok(())
    }

    /// Mark a spectrum processed; cache write trouble must not stop the loop.
    fn record(&mut self, id: i64) {
        if let Err(e) = self.cache.record(id) {
            warn!(spectrum = id, error = %e, "failed to record in processed cache");
        }
    }
}
