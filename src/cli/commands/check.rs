//! Check command implementation.
//!
//! The `plumline check` command loads a profile file, evaluates its
//! completeness, and renders the result.
//!
//! The command plays the data-access role for the evaluator: a missing or
//! unparseable profile file is degraded to "no profile" with a logged
//! warning rather than aborting, so the output always reflects a valid
//! evaluation.

use crate::checklist::Checklist;
use crate::cli::args::CheckArgs;
use crate::completeness::evaluate;
use crate::error::{PlumlineError, Result};
use crate::profile::{load_profile, CompanyProfile};
use crate::report::{HumanFormatter, JsonFormatter, Report, ReportFormatter};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Load the active checklist: custom file when given, standard otherwise.
    fn load_checklist(&self) -> Result<Checklist> {
        match &self.args.checklist {
            Some(path) => Checklist::load(path),
            None => Ok(Checklist::standard()),
        }
    }

    /// Load the profile, degrading fetch failures to "no profile".
    fn load_profile_or_none(&self) -> Result<Option<CompanyProfile>> {
        match load_profile(&self.args.profile) {
            Ok(profile) => Ok(Some(profile)),
            Err(PlumlineError::ProfileNotFound { path }) => {
                tracing::warn!("No profile at {}, reporting 0% complete", path.display());
                Ok(None)
            }
            Err(PlumlineError::ProfileParseError { path, message }) => {
                tracing::warn!(
                    "Could not parse profile at {} ({}), reporting 0% complete",
                    path.display(),
                    message
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Format the report using the requested formatter.
    fn format_output(&self, report: &Report) -> String {
        let mut output = Vec::new();

        match self.args.format.as_str() {
            "json" => {
                let formatter = JsonFormatter::new();
                formatter.format(report, &mut output).ok();
            }
            _ => {
                let formatter = HumanFormatter::new(true);
                formatter.format(report, &mut output).ok();
            }
        }

        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let checklist = self.load_checklist()?;
        let profile = self.load_profile_or_none()?;

        let result = evaluate(profile.as_ref(), &checklist);
        let report = Report::new(profile.as_ref(), result);

        print!("{}", self.format_output(&report));

        if self.args.strict && !report.result.is_complete {
            return Ok(CommandResult::failure(2));
        }

        Ok(CommandResult::success())
    }
}
