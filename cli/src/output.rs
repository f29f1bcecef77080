//! Result files.
//!
//! One `<domain>.txt` per scanned domain with its live URLs and DNS-only
//! hosts, plus one aggregate file of every live URL, recreated on each run.
//! Domains with archived live hosts also get a `<domain>.history.txt`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use subreach_common::ScanReport;
use subreach_common::report::live_urls;

pub const AGGREGATE_FILE: &str = "all_live_subdomains.txt";

pub fn domain_file(dir: &Path, report: &ScanReport) -> PathBuf {
    dir.join(format!("{}.txt", report.domain))
}

pub fn history_file(dir: &Path, report: &ScanReport) -> PathBuf {
    dir.join(format!("{}.history.txt", report.domain))
}

fn write_lines(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    let mut body = lines.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}

/// Leaves no history file behind when nothing was archived.
fn write_history(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    if !lines.is_empty() {
        return write_lines(path, lines);
    }
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => {
            Err(e).with_context(|| format!("removing {}", path.display()))
        }
        _ => Ok(()),
    }
}

/// Writes every result file under `dir` and returns the aggregate file's path.
pub fn write_results(dir: &Path, reports: &[ScanReport]) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    for report in reports {
        write_lines(&domain_file(dir, report), &report.output_lines())?;
        write_history(&history_file(dir, report), &report.history_lines())?;
    }

    let aggregate = dir.join(AGGREGATE_FILE);
    write_lines(&aggregate, &live_urls(reports))?;
    Ok(aggregate)
}
