//! Command-line interface for meshportal.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigArgs, FilesArgs, StatusArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
