//! Human-readable report formatter.
//!
//! Formats a completeness report for terminal display: a progress bar, a
//! comma-joined list of missing fields, and a logo-upload note. The missing
//! banner is suppressed entirely for complete profiles.

use std::io::Write;

use console::style;

use super::{Report, ReportFormatter};

const BAR_WIDTH: usize = 20;

/// Formats completeness reports for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: String, color: Paint) -> String {
        if !self.use_color {
            return text;
        }
        match color {
            Paint::Green => style(text).green().to_string(),
            Paint::Yellow => style(text).yellow().to_string(),
            Paint::Dim => style(text).dim().to_string(),
        }
    }

    fn progress_bar(percent: u8) -> String {
        let filled = (percent as usize * BAR_WIDTH) / 100;
        format!(
            "[{}{}]",
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled)
        )
    }
}

enum Paint {
    Green,
    Yellow,
    Dim,
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        // Header line
        if !report.profile_found {
            writeln!(writer, "No company profile found")?;
        } else if let Some(ref name) = report.company_name {
            writeln!(writer, "Company profile: {}", name)?;
        } else {
            writeln!(writer, "Company profile")?;
        }

        let result = &report.result;

        if result.is_complete {
            // Complete profiles get a single confirmation line, no banner.
            let line = format!("  Profile complete ({}%)", result.completion_percent);
            writeln!(writer, "{}", self.paint(line, Paint::Green))?;
        } else {
            let bar = format!(
                "  {} {}% complete",
                Self::progress_bar(result.completion_percent),
                result.completion_percent
            );
            writeln!(writer, "{}", self.paint(bar, Paint::Yellow))?;

            if !result.missing_fields.is_empty() {
                writeln!(writer)?;
                writeln!(writer, "  Missing: {}", result.missing_fields.join(", "))?;
            }
        }

        if report.profile_found && !report.logo_uploaded {
            let note = "  note: no logo uploaded".to_string();
            writeln!(writer, "{}", self.paint(note, Paint::Dim))?;
        }

        Ok(())
    }
}
