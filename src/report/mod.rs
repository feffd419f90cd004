//! Completeness report formatters.
//!
//! This module provides formatters for presenting a completeness evaluation
//! in different formats (human-readable terminal text, JSON).

pub mod human;
pub mod json;

use std::io::Write;

use crate::completeness::CompletenessResult;
use crate::profile::CompanyProfile;

/// Output format for completeness reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Everything the presentation layer needs to render one evaluation.
///
/// Built explicitly from the evaluation inputs rather than read from ambient
/// state, so formatters stay trivially testable.
#[derive(Debug, Clone)]
pub struct Report {
    /// Display name, when the profile carries one.
    pub company_name: Option<String>,
    /// Whether a profile record existed at all.
    pub profile_found: bool,
    /// Whether a logo has been uploaded (display signal only, never scored).
    pub logo_uploaded: bool,
    /// The evaluation outcome.
    pub result: CompletenessResult,
}

impl Report {
    /// Assemble a report from a (possibly absent) profile and its evaluation.
    pub fn new(profile: Option<&CompanyProfile>, result: CompletenessResult) -> Self {
        Self {
            company_name: profile.and_then(|p| p.company_name.clone()),
            profile_found: profile.is_some(),
            logo_uploaded: profile.is_some_and(CompanyProfile::has_logo),
            result,
        }
    }
}

/// Trait for formatting completeness reports.
pub trait ReportFormatter {
    /// Format a report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::Checklist;
    use crate::completeness::evaluate;

    #[test]
    fn report_captures_profile_presence() {
        let result = evaluate(None, &Checklist::standard());
        let report = Report::new(None, result);
        assert!(!report.profile_found);
        assert!(!report.logo_uploaded);
        assert!(report.company_name.is_none());
    }

    #[test]
    fn report_captures_logo_signal() {
        let profile = CompanyProfile {
            company_name: Some("Acme".into()),
            logo: Some("uploads/acme.png".into()),
            ..Default::default()
        };
        let result = evaluate(Some(&profile), &Checklist::standard());
        let report = Report::new(Some(&profile), result);
        assert!(report.profile_found);
        assert!(report.logo_uploaded);
        assert_eq!(report.company_name.as_deref(), Some("Acme"));
    }
}
