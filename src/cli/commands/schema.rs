//! Schema command implementation.
//!
//! The `plumline schema` command prints the JSON Schema for profile files
//! (or, with `--checklist`, for checklist files) so editors and pipelines
//! can validate them.

use anyhow::Context;
use schemars::schema_for;

use crate::checklist::Checklist;
use crate::cli::args::SchemaArgs;
use crate::error::Result;
use crate::profile::CompanyProfile;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }

    fn render(&self) -> Result<String> {
        let schema = if self.args.checklist {
            schema_for!(Checklist)
        } else {
            schema_for!(CompanyProfile)
        };
        let json = serde_json::to_string_pretty(&schema)
            .context("serializing JSON schema")?;
        Ok(json)
    }
}

impl Command for SchemaCommand {
    fn execute(&self) -> Result<CommandResult> {
        println!("{}", self.render()?);
        Ok(CommandResult::success())
    }
}
