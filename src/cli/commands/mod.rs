//! Command implementations.
//!
//! Each CLI subcommand lives in its own module and implements the
//! [`Command`] trait; [`CommandDispatcher`] routes parsed arguments to the
//! right implementation.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod fields;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
