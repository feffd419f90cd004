//! Fields command implementation.
//!
//! The `plumline fields` command lists the active completeness checklist so
//! the scoring policy can be inspected without evaluating anything.

use serde::Serialize;

use crate::checklist::Checklist;
use crate::cli::args::FieldsArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The fields command implementation.
pub struct FieldsCommand {
    args: FieldsArgs,
}

#[derive(Serialize)]
struct JsonField {
    key: &'static str,
    label: &'static str,
}

impl FieldsCommand {
    /// Create a new fields command.
    pub fn new(args: FieldsArgs) -> Self {
        Self { args }
    }

    fn load_checklist(&self) -> Result<Checklist> {
        match &self.args.checklist {
            Some(path) => Checklist::load(path),
            None => Ok(Checklist::standard()),
        }
    }

    fn render(&self, checklist: &Checklist) -> String {
        if self.args.json {
            let fields: Vec<_> = checklist
                .fields
                .iter()
                .map(|f| JsonField {
                    key: f.key(),
                    label: f.label(),
                })
                .collect();
            serde_json::to_string_pretty(&fields).unwrap_or_default()
        } else {
            let mut out = format!("Completeness checklist ({} fields):\n", checklist.total());
            for field in &checklist.fields {
                out.push_str(&format!("  {:<14} {}\n", field.key(), field.label()));
            }
            out
        }
    }
}

impl Command for FieldsCommand {
    fn execute(&self) -> Result<CommandResult> {
        let checklist = self.load_checklist()?;
        println!("{}", self.render(&checklist).trim_end());
        Ok(CommandResult::success())
    }
}
