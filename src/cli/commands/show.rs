//! Show command handler.

use anyhow::{Context, Result};
use std::fmt::Write;

use crate::config::{OutputFormat, Settings};
use crate::paths::{Report, Xdg};
use crate::ui::Style;

/// Column width of the role name in plain output.
const LABEL_WIDTH: usize = 12;

/// Prints every resolved directory for the configured application.
pub fn run_show(settings: &Settings) -> Result<()> {
    let report = Xdg::new(settings.app.as_str()).report();
    print!("{}", render_report(&report, settings.format)?);
    Ok(())
}

/// Renders a report in the requested format.
pub fn render_report(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(report)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            Ok(json + "\n")
        }
        OutputFormat::Toml => toml::to_string(report).context("Failed to serialize report"),
    }
}

fn render_plain(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", Style::header(&report.app));

    for (role, resolved) in report.entries() {
        let label = Style::label(format!("{:<LABEL_WIDTH$}", role.name()));
        let dirs = resolved.dirs();
        if dirs.is_empty() {
            let _ = writeln!(out, "  {label} {}", Style::unset());
            continue;
        }
        for (i, dir) in dirs.iter().enumerate() {
            if i == 0 {
                let _ = writeln!(out, "  {label} {}", Style::value(dir));
            } else {
                let _ = writeln!(out, "  {:LABEL_WIDTH$} {}", "", Style::value(dir));
            }
        }
    }

    if report.runtime.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            Style::hint("XDG_RUNTIME_DIR is not set; the runtime directory has no default.")
        );
    }
    out
}
