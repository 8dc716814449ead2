//! Config command implementation.
//!
//! The `meshportal config` command shows the resolved check configuration —
//! including the built-in table when no portal.yml supplies groups — so a
//! field operator can see exactly what the status page will probe.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, PortalConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    portal_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(portal_root: &Path, config_path: Option<PathBuf>, args: ConfigArgs) -> Self {
        Self {
            portal_root: portal_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(self.config_path.as_deref(), &self.portal_root)?;
        let resolved = PortalConfig {
            settings: config.settings.clone(),
            groups: config.effective_groups(),
        };

        let payload = if self.args.json {
            serde_json::to_string_pretty(&resolved).map_err(anyhow::Error::from)?
        } else {
            serde_yaml::to_string(&resolved).map_err(anyhow::Error::from)?
        };
        ui.emit(payload.trim_end());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUi;
    use tempfile::TempDir;

    #[test]
    fn shows_builtin_table_when_no_config_exists() {
        let root = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(root.path(), None, ConfigArgs::default());
        let mut ui = MockUi::default();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        let yaml = &ui.emitted[0];
        assert!(yaml.contains("Mesh stack"));
        assert!(yaml.contains("rnsd"));
        assert!(yaml.contains("Supporting tools"));
    }

    #[test]
    fn json_output_parses() {
        let root = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(root.path(), None, ConfigArgs { json: true });
        let mut ui = MockUi::default();
        cmd.execute(&mut ui).unwrap();
        let value: serde_json::Value = serde_json::from_str(&ui.emitted[0]).unwrap();
        assert_eq!(value["groups"].as_array().unwrap().len(), 3);
    }
}
