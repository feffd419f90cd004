//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Plumline - Company profile completeness checking.
#[derive(Debug, Parser)]
#[command(name = "plumline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a profile's completeness (default if no command specified)
    Check(CheckArgs),

    /// List the fields on the active completeness checklist
    Fields(FieldsArgs),

    /// Print the JSON Schema for profile files
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Profile file to evaluate (YAML or JSON)
    #[arg(default_value = "profile.yml")]
    pub profile: PathBuf,

    /// Custom checklist file (defaults to the standard seven-field policy)
    #[arg(long, value_name = "FILE")]
    pub checklist: Option<PathBuf>,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Exit non-zero when the profile is incomplete
    #[arg(long)]
    pub strict: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            profile: PathBuf::from("profile.yml"),
            checklist: None,
            format: "human".to_string(),
            strict: false,
        }
    }
}

/// Arguments for the `fields` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FieldsArgs {
    /// Custom checklist file (defaults to the standard seven-field policy)
    #[arg(long, value_name = "FILE")]
    pub checklist: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    /// Print the checklist file schema instead of the profile schema
    #[arg(long)]
    pub checklist: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_check_with_defaults() {
        let cli = Cli::parse_from(["plumline", "check"]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.profile, PathBuf::from("profile.yml"));
                assert_eq!(args.format, "human");
                assert!(!args.strict);
                assert!(args.checklist.is_none());
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn parses_check_with_flags() {
        let cli = Cli::parse_from([
            "plumline",
            "check",
            "acme.json",
            "--format",
            "json",
            "--strict",
            "--checklist",
            "policy.yml",
        ]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.profile, PathBuf::from("acme.json"));
                assert_eq!(args.format, "json");
                assert!(args.strict);
                assert_eq!(args.checklist, Some(PathBuf::from("policy.yml")));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["plumline"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::parse_from(["plumline", "fields", "--no-color", "--debug"]);
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn check_args_default_matches_clap_default() {
        let defaults = CheckArgs::default();
        assert_eq!(defaults.profile, PathBuf::from("profile.yml"));
        assert_eq!(defaults.format, "human");
    }
}
