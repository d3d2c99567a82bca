//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed to by
//! [`CommandDispatcher`]. Running with no subcommand is the same as `run`.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
