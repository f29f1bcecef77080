use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use colored::*;
use indicatif::ProgressStyle;
use subreach_common::{Domain, HostReport};
use subreach_core::ProbeCallback;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS)
}

/// Counters behind the scan spinner, shared with the probe workers.
#[derive(Default)]
struct Tally {
    probed: AtomicUsize,
    live: AtomicUsize,
}

/// A spinner attached to a tracing span, so log lines print above it.
#[derive(Clone)]
pub struct ScanSpinner {
    span: Span,
    tally: Arc<Tally>,
}

impl ScanSpinner {
    pub fn start(domains: usize) -> Self {
        let span = info_span!("scan", indicatif.pb_show = true);
        span.pb_set_style(&spinner_style());
        span.pb_set_message(&format!("Scanning {domains} domains..."));
        Self {
            span,
            tally: Arc::new(Tally::default()),
        }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    fn record(&self, domain: &Domain, report: &HostReport) {
        let probed = self.tally.probed.fetch_add(1, Ordering::Relaxed) + 1;
        let live = if report.result.is_live() {
            self.tally.live.fetch_add(1, Ordering::Relaxed) + 1
        } else {
            self.tally.live.load(Ordering::Relaxed)
        };

        self.span.pb_set_message(&format!(
            "{domain}: probed {} hosts, {} live so far...",
            probed.to_string().bold(),
            live.to_string().green().bold()
        ));
    }

    /// Progress hook for the orchestrator.
    pub fn callback(&self) -> ProbeCallback {
        let spinner = self.clone();
        Arc::new(move |domain: &Domain, report: &HostReport| spinner.record(domain, report))
    }
}
