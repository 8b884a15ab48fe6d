//! `logwarden scan` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use logwarden_core::config::WardenConfig;
use logwarden_detector::{LogScanner, ScanStats};

use crate::cli::ScanArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `scan` command.
///
/// Scans the access log file once, renders the report, and returns
/// an error carrying exit code 4 when intrusion alerts were found.
pub async fn execute(
    args: ScanArgs,
    config: &WardenConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    info!(path = %args.path.display(), "starting access log scan");

    let mut scanner = LogScanner::new(&config.extractor);
    scanner.scan_file(&args.path).await?;
    let report = build_scan_report(args.path.display().to_string(), scanner);

    writer.render(&report)?;

    if !report.alerts.is_empty() {
        return Err(CliError::AlertsFound(report.alerts.len()));
    }

    Ok(())
}

fn build_scan_report(path: String, scanner: LogScanner) -> ScanCommandReport {
    let report = scanner.finish();

    let alerts = report
        .alerts
        .into_iter()
        .map(|a| AlertEntry {
            address: a.address,
            pattern: a.category.pattern_name().to_owned(),
            description: a.description,
        })
        .collect();

    ScanCommandReport {
        path,
        alerts,
        stats: report.stats,
    }
}

#[derive(Serialize)]
pub struct ScanCommandReport {
    pub path: String,
    pub alerts: Vec<AlertEntry>,
    pub stats: ScanStats,
}

#[derive(Serialize)]
pub struct AlertEntry {
    pub address: String,
    pub pattern: String,
    pub description: String,
}

impl Render for ScanCommandReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "Scan: {}", self.path)?;
        writeln!(
            w,
            "Lines read: {} ({} events, {} ignored, {} rejected)",
            self.stats.lines_read,
            self.stats.events_extracted,
            self.stats.lines_ignored,
            self.stats.lines_rejected
        )?;
        writeln!(w)?;

        if self.alerts.is_empty() {
            writeln!(w, "No intrusion patterns detected.")?;
            return Ok(());
        }

        writeln!(w, "Intrusions ({} unique):", self.alerts.len())?;
        for alert in &self.alerts {
            writeln!(w)?;
            writeln!(w, "IP: {}", alert.address)?;
            writeln!(w, "Intrusion Detected: {}", alert.description)?;
        }

        Ok(())
    }
}
