//! Files command implementation.
//!
//! The `meshportal files` command lists the downloads directory that backs
//! the portal's raw `/files/` view.

use std::path::{Path, PathBuf};

use crate::cli::args::FilesArgs;
use crate::config::load_config;
use crate::downloads::scan_directory;
use crate::error::{PortalError, Result};
use crate::ui::theme::should_use_colors;
use crate::ui::{PortalTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The files command implementation.
pub struct FilesCommand {
    portal_root: PathBuf,
    config_path: Option<PathBuf>,
    args: FilesArgs,
}

impl FilesCommand {
    /// Create a new files command.
    pub fn new(portal_root: &Path, config_path: Option<PathBuf>, args: FilesArgs) -> Self {
        Self {
            portal_root: portal_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for FilesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(self.config_path.as_deref(), &self.portal_root)?;

        let dir = self
            .args
            .dir
            .clone()
            .or_else(|| config.settings.files_dir.clone())
            .ok_or_else(|| PortalError::ConfigValidationError {
                message: "no downloads directory (pass DIR or set settings.files_dir)".to_string(),
            })?;
        let base_url = self
            .args
            .base_url
            .clone()
            .unwrap_or_else(|| config.settings.files_base_url.clone());

        let entries = scan_directory(&dir, &base_url)?;

        if self.args.json {
            let payload = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.emit(&payload);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            PortalTheme::new()
        } else {
            PortalTheme::plain()
        };

        if entries.is_empty() {
            ui.message(&format!(
                "  {}",
                theme.dim.apply_to("No files published.")
            ));
            return Ok(CommandResult::success());
        }

        let width = entries
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0);

        for entry in &entries {
            let padded = format!("{:<width$}", entry.name, width = width);
            ui.message(&format!(
                "  {}  {:>9}  {}  {}",
                theme.highlight.apply_to(padded),
                entry.human_size(),
                entry.modified.format("%Y-%m-%d %H:%M"),
                theme.dim.apply_to(&entry.url),
            ));
        }

        Ok(CommandResult::success())
    }
}
