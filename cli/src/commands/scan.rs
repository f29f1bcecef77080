use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use colored::*;
use subreach_common::report::live_urls;
use subreach_common::target::parse_domain_list;
use subreach_common::{Domain, HostReport, ProbeResult, ScanError, ScanReport};
use subreach_core::ScanOrchestrator;
use tracing::{Instrument, info};

use crate::commands::CommandLine;
use crate::output;
use crate::terminal::{colors, print, spinner::ScanSpinner};
use crate::mprint;

type Detail = (String, ColoredString);

pub fn list_sources() {
    for name in subreach_plugins::source_names() {
        print::print_status(name);
    }
}

pub fn read_domains(path: &Path) -> Result<Vec<Domain>, ScanError> {
    let text = fs::read_to_string(path).map_err(|source| ScanError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let domains = parse_domain_list(&text);
    if domains.is_empty() {
        return Err(ScanError::NoInput);
    }
    Ok(domains)
}

pub async fn scan(commands: &CommandLine) -> anyhow::Result<()> {
    let domains = read_domains(&commands.input)?;
    let cfg = commands.to_config();

    info!(
        "Loaded {} domains from {}",
        domains.len(),
        commands.input.display()
    );
    print::header("starting scan", commands.quiet);

    let start_time: Instant = Instant::now();
    let reports = {
        let spinner = ScanSpinner::start(domains.len());
        let orchestrator =
            ScanOrchestrator::from_config(&cfg)?.with_progress(spinner.callback());
        orchestrator
            .scan_all(&domains)
            .instrument(spinner.span())
            .await?
    };

    let aggregate = output::write_results(&commands.out, &reports)?;

    if commands.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        scan_ends(&reports, commands.quiet);
    }
    print_summary(&reports, start_time.elapsed(), commands.quiet);
    info!("Results saved to {}", aggregate.display());
    Ok(())
}

fn scan_ends(reports: &[ScanReport], q_level: u8) {
    if reports.iter().all(|r| r.live().next().is_none()) {
        print::header("zero live subdomains", q_level);
        print::no_results();
        return;
    }

    if q_level > 0 {
        mprint!();
    }

    print::header("scan results", q_level);
    for (idx, report) in reports.iter().enumerate() {
        print::tree_head(idx, report.domain.as_str());
        if q_level < 2 {
            print::as_tree_one_level(report_details(report));
        }
        if idx + 1 != reports.len() {
            mprint!();
        }
    }
}

fn report_details(report: &ScanReport) -> Vec<Detail> {
    let mut details: Vec<Detail> = Vec::new();
    for host in report.live() {
        details.push(live_detail(host));
        if let Some(record) = &host.history {
            details.push(("archive".to_string(), record.url.color(colors::HISTORY)));
        }
    }

    details.extend(report.dns_only().map(|host| {
        (
            "dns".to_string(),
            host.hostname.as_str().color(colors::DNS_ONLY),
        )
    }));

    details.push((
        "found".to_string(),
        format!(
            "{} hosts from {} candidates, {} unresolvable",
            report.len(),
            report.candidates_seen,
            report.unresolvable().count()
        )
        .normal(),
    ));
    details
}

fn live_detail(host: &HostReport) -> Detail {
    let (scheme, url) = match &host.result {
        ProbeResult::Live { scheme, url } => (scheme.as_str(), url.as_str()),
        _ => ("?", host.hostname.as_str()),
    };

    let value = match &host.history {
        Some(record) => format!(
            "{} {}",
            url.color(colors::LIVE),
            format!("(archived {})", record.year).color(colors::HISTORY)
        ),
        None => url.color(colors::LIVE).to_string(),
    };
    (scheme.to_string(), value.normal())
}

fn print_summary(reports: &[ScanReport], total_time: Duration, q_level: u8) {
    let live: ColoredString = format!("{} live subdomains", live_urls(reports).len())
        .bold()
        .green();
    let domains: ColoredString = format!("{} domains", reports.len()).bold();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Scan Complete: {live} across {domains} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match q_level {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            mprint!();
            print::print(&output);
        }
    }
}
