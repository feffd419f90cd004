//! Plumline - Company profile completeness checking for job boards.
//!
//! Plumline scores a company profile against a fixed, ordered checklist of
//! required fields and reports which fields are missing together with an
//! integer completion percentage, the way a job board surfaces a
//! "complete your profile" banner.
//!
//! # Modules
//!
//! - [`checklist`] - Field vocabulary and ordered checklist policies
//! - [`cli`] - Command-line interface and argument parsing
//! - [`completeness`] - The completeness evaluator
//! - [`error`] - Error types and result aliases
//! - [`profile`] - Company profile schema and file loading
//! - [`report`] - Human-readable and JSON report formatters
//!
//! # Example
//!
//! ```
//! use plumline::checklist::Checklist;
//! use plumline::completeness::evaluate;
//! use plumline::profile::CompanyProfile;
//!
//! let profile = CompanyProfile {
//!     company_name: Some("Acme".into()),
//!     location: Some("Kathmandu".into()),
//!     ..Default::default()
//! };
//!
//! let result = evaluate(Some(&profile), &Checklist::standard());
//! assert!(!result.is_complete);
//! assert_eq!(result.completion_percent, 29);
//! ```
//!
//! For file-based profile loading, see the integration tests.

pub mod checklist;
pub mod cli;
pub mod completeness;
pub mod error;
pub mod profile;
pub mod report;

pub use error::{PlumlineError, Result};
