//! JSON report formatter.
//!
//! Formats a completeness report as machine-readable JSON for dashboard and
//! tooling integration.

use std::io::Write;

use serde::Serialize;

use super::{Report, ReportFormatter};

/// Formats completeness reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    profile_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    company_name: Option<&'a str>,
    complete: bool,
    completion_percent: u8,
    missing_fields: &'a [String],
    logo_uploaded: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let output = JsonReport {
            profile_found: report.profile_found,
            company_name: report.company_name.as_deref(),
            complete: report.result.is_complete,
            completion_percent: report.result.completion_percent,
            missing_fields: &report.result.missing_fields,
            logo_uploaded: report.logo_uploaded,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
