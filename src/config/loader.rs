//! Configuration file discovery and loading.
//!
//! The config file lives next to the portal, not in $HOME: by default
//! `portal.yml` (or `portal.yaml`) under the portal root, overridable with
//! `--config` / `MESHPORTAL_CONFIG`. A missing default file is not an error —
//! the built-in check table applies — but an explicitly requested file that
//! does not exist is.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::PortalConfig;
use crate::error::{PortalError, Result};

/// Default config file names checked under the portal root, in order.
const CONFIG_FILE_NAMES: &[&str] = &["portal.yml", "portal.yaml"];

/// Find the config file under the portal root, if any.
pub fn find_config(portal_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| portal_root.join(name))
        .find(|path| path.is_file())
}

/// Load configuration.
///
/// With `explicit` set, that file must exist and parse. Otherwise the portal
/// root is searched; no file at all yields the defaults.
pub fn load_config(explicit: Option<&Path>, portal_root: &Path) -> Result<PortalConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(PortalError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match find_config(portal_root) {
            Some(path) => path,
            None => {
                tracing::debug!(root = %portal_root.display(), "no portal.yml, using built-in checks");
                return Ok(PortalConfig::default());
            }
        },
    };

    let config = parse_config_file(&path)?;
    validate(&config)?;
    tracing::debug!(path = %path.display(), groups = config.groups.len(), "loaded config");
    Ok(config)
}

/// Parse a single YAML config file.
pub fn parse_config_file(path: &Path) -> Result<PortalConfig> {
    let contents = fs::read_to_string(path).map_err(|e| PortalError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_yaml::from_str(&contents).map_err(|e| PortalError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reject configs the status page could not render meaningfully.
fn validate(config: &PortalConfig) -> Result<()> {
    for group in &config.groups {
        if group.name.trim().is_empty() {
            return Err(PortalError::ConfigValidationError {
                message: "check group with empty name".to_string(),
            });
        }
        for check in &group.checks {
            if check.label.trim().is_empty() {
                return Err(PortalError::ConfigValidationError {
                    message: format!("check in group '{}' has empty label", group.name),
                });
            }
            if check.target.trim().is_empty() {
                return Err(PortalError::ConfigValidationError {
                    message: format!("check '{}' has empty target", check.label),
                });
            }
        }
    }
    if config.settings.probe_timeout_secs == 0 {
        return Err(PortalError::ConfigValidationError {
            message: "probe_timeout_secs must be at least 1".to_string(),
        });
    }
    Ok(())
}
