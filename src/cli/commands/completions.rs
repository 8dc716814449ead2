//! Shell completions generation.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;
use clap::CommandFactory;

/// The completions command implementation.
///
/// Generates the completion script for the requested shell and emits it
/// through the UI like any other machine-readable payload, so `--quiet`
/// cannot swallow it.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl super::dispatcher::Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<super::dispatcher::CommandResult> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "meshportal", &mut buf);
        ui.emit(String::from_utf8_lossy(&buf).trim_end());
        Ok(super::dispatcher::CommandResult::success())
    }
}
