//! Rendering and delivery of classification reports.
//!
//! Three renderings of the same result: a human block on stdout, an entry
//! in the long-lived append-only results log, and the comment text for
//! publish-back. The log format is stable; downstream tooling parses it
//! with line-anchored patterns, so the field labels must not change.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use cider_core::catalog::ClassificationReport;
use cider_core::config::ReportConfig;
use cider_core::spectra::Probability;
use tracing::warn;

/// Emits classification reports.
#[derive(Debug)]
pub struct Reporter {
    results_log: Option<PathBuf>,
}

impl Reporter {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            results_log: config.results_log.as_ref().map(PathBuf::from),
        }
    }

    /// Deliver one report.
    ///
    /// stdout is the primary output; a results-log write failure is logged
    /// and dropped so a full disk cannot stall the pipeline.
    pub fn emit(&self, report: &ClassificationReport) {
        print!("{}", render_stdout(report));
        if let Some(ref path) = self.results_log {
            if let Err(e) = append_log_entry(path, report) {
                warn!(path = %path.display(), error = %e, "results log write failed");
            }
        }
    }
}

/// Human-readable stdout block: all class probabilities plus the winner.
fn render_stdout(report: &ClassificationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} spectrum {}\n",
        report.obj_id, report.spectrum_id
    ));
    for (class, prob) in report.scores.iter() {
        out.push_str(&format!(
            "  {:<24}{:>10}\n",
            class.label(),
            prob.as_percent()
        ));
    }
    let (best, prob) = report.scores.best();
    out.push_str(&format!("  best: {} ({})\n", best.label(), prob.as_percent()));
    out
}

/// Results-log entry. One record per report, closed by a 40-dash rule.
fn render_log_entry(report: &ClassificationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Object ID: {}\n", report.obj_id));
    out.push_str(&format!("Spectra ID: {}\n", report.spectrum_id));

    let tns = report
        .source
        .as_ref()
        .and_then(|s| s.tns_name.as_deref())
        .unwrap_or("N/A");
    out.push_str(&format!("TNS name: {tns}\n"));

    let mut prior = String::new();
    if let Some(ref source) = report.source {
        for c in &source.classifications {
            match c.probability {
                Some(p) => prior.push_str(&format!(
                    "{} (prob={}) - ",
                    c.classification,
                    Probability::new(p).as_percent()
                )),
                None => prior.push_str(&format!("{} (prob=N/A) - ", c.classification)),
            }
        }
    }
    out.push_str(&format!("SkyPortal classifications: {prior}\n"));

    let (best, prob) = report.scores.best();
    out.push_str(&format!(
        "cider classification: {} (prob={})\n",
        best.label(),
        prob.as_percent()
    ));
    out.push_str(&"-".repeat(40));
    out.push('\n');
    out
}

fn append_log_entry(path: &Path, report: &ClassificationReport) -> std::io::Result<()> {
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    f.write_all(render_log_entry(report).as_bytes())
}

/// Comment body for publish-back: best class and probability only.
pub fn comment_text(report: &ClassificationReport) -> String {
    let (best, prob) = report.scores.best();
    format!(
        "Machine Learning Classification using spectra:\n\n\
         Best result: '{}' with probability {:.2}%\n\n",
        best.label(),
        prob.value() * 100.0
    )
}
