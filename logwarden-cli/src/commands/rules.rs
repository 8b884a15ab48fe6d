//! `logwarden rules` command handler

use std::io::Write;

use serde::Serialize;

use logwarden_detector::Rule;

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `rules` command.
///
/// Rules are compiled into the binary, so this just renders the table.
pub fn execute(writer: &OutputWriter) -> Result<(), CliError> {
    let rules: Vec<RuleEntry> = Rule::table()
        .into_iter()
        .map(|(category, rule)| RuleEntry {
            pattern: category.pattern_name().to_owned(),
            window_secs: rule.window_secs,
            threshold: rule.threshold,
            alert: category.alert_description().to_owned(),
        })
        .collect();

    let report = RuleListReport {
        total: rules.len(),
        rules,
    };

    writer.render(&report)?;
    Ok(())
}

#[derive(Serialize)]
pub struct RuleListReport {
    pub total: usize,
    pub rules: Vec<RuleEntry>,
}

#[derive(Serialize)]
pub struct RuleEntry {
    pub pattern: String,
    pub window_secs: i64,
    pub threshold: u64,
    pub alert: String,
}

impl Render for RuleListReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "Detection Rules ({} total)", self.total)?;
        writeln!(w)?;
        writeln!(
            w,
            "{:<18} {:<12} {:<10} Alert",
            "Pattern", "Window (s)", "Threshold"
        )?;
        writeln!(w, "{}", "-".repeat(75))?;

        for r in &self.rules {
            writeln!(
                w,
                "{:<18} {:<12} {:<10} {}",
                r.pattern, r.window_secs, r.threshold, r.alert
            )?;
        }

        Ok(())
    }
}
