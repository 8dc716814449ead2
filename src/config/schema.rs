//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the `portal.yml`
//! configuration file, plus the built-in check table used when a node ships
//! without one.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::status::check::{CheckDefinition, CheckGroup, CheckKind};

/// Root configuration structure for portal.yml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Global settings.
    pub settings: Settings,

    /// Check groups in presentation order. Empty means "use the built-in
    /// table" — a node without a portal.yml still gets a full status page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<CheckGroup>,
}

/// Global settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per-probe timeout in seconds.
    #[serde(
        default = "default_probe_timeout",
        skip_serializing_if = "is_default_probe_timeout"
    )]
    pub probe_timeout_secs: u64,

    /// Directory the portal's raw file listing is generated from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_dir: Option<PathBuf>,

    /// URL prefix for generated download links.
    #[serde(
        default = "default_files_base_url",
        skip_serializing_if = "is_default_files_base_url"
    )]
    pub files_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            probe_timeout_secs: default_probe_timeout(),
            files_dir: None,
            files_base_url: default_files_base_url(),
        }
    }
}

fn default_probe_timeout() -> u64 {
    2
}

fn is_default_probe_timeout(v: &u64) -> bool {
    *v == default_probe_timeout()
}

fn default_files_base_url() -> String {
    "/files/".to_string()
}

fn is_default_files_base_url(v: &str) -> bool {
    v == default_files_base_url()
}

fn service(label: &str, target: &str) -> CheckDefinition {
    CheckDefinition {
        label: label.to_string(),
        kind: CheckKind::Service,
        target: target.to_string(),
    }
}

fn command(label: &str, target: &str) -> CheckDefinition {
    CheckDefinition {
        label: label.to_string(),
        kind: CheckKind::Command,
        target: target.to_string(),
    }
}

/// The built-in check table, mirroring what a stock mesh node deploys.
pub fn default_groups() -> Vec<CheckGroup> {
    vec![
        CheckGroup {
            name: "Mesh stack".to_string(),
            description: Some(
                "Core services and tooling deployed via install_mesh.sh.".to_string(),
            ),
            checks: vec![
                service("Mesh supervisor (mesh)", "mesh"),
                service("Reticulum daemon (rnsd)", "rnsd"),
                service("Meshtastic daemon", "meshtasticd"),
                command("Reticulum CLI (rns)", "rns"),
                command("Meshtastic CLI", "meshtastic"),
            ],
        },
        CheckGroup {
            name: "LAN portal".to_string(),
            description: Some(
                "Services required to keep the local web portal responsive.".to_string(),
            ),
            checks: vec![
                service("Web server (nginx)", "nginx"),
                service("PHP FastCGI (php-fpm)", "php-fpm"),
                service("Database server (mariadb)", "mariadb"),
                service("Flask bridge (flask-app)", "flask-app"),
                service("Firewall (nftables)", "nftables"),
            ],
        },
        CheckGroup {
            name: "Supporting tools".to_string(),
            description: Some(
                "Utility binaries used for maintenance and diagnostics.".to_string(),
            ),
            checks: vec![
                command("Git client", "git"),
                command("batctl utility", "batctl"),
                command("Python 3", "python3"),
            ],
        },
    ]
}

impl PortalConfig {
    /// The check groups to render: configured groups, or the built-in table.
    pub fn effective_groups(&self) -> Vec<CheckGroup> {
        if self.groups.is_empty() {
            default_groups()
        } else {
            self.groups.clone()
        }
    }

    /// Per-probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.settings.probe_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_three_groups() {
        let groups = default_groups();
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Mesh stack", "LAN portal", "Supporting tools"]);
    }

    #[test]
    fn default_table_mixes_services_and_commands() {
        let groups = default_groups();
        let mesh = &groups[0];
        assert_eq!(mesh.checks[0].kind, CheckKind::Service);
        assert_eq!(mesh.checks[3].kind, CheckKind::Command);
        // The LAN portal group is services only.
        assert!(groups[1].checks.iter().all(|c| c.kind == CheckKind::Service));
    }

    #[test]
    fn empty_config_falls_back_to_default_groups() {
        let config = PortalConfig::default();
        assert_eq!(config.effective_groups().len(), 3);
    }

    #[test]
    fn configured_groups_replace_the_default_table() {
        let yaml = "groups:\n  - name: Only group\n    checks:\n      - label: Git client\n        kind: command\n        target: git\n";
        let config: PortalConfig = serde_yaml::from_str(yaml).unwrap();
        let groups = config.effective_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Only group");
    }

    #[test]
    fn probe_timeout_defaults_to_two_seconds() {
        let config = PortalConfig::default();
        assert_eq!(config.probe_timeout(), std::time::Duration::from_secs(2));
    }

    #[test]
    fn settings_parse_overrides() {
        let yaml = "settings:\n  probe_timeout_secs: 5\n  files_dir: /srv/files\n  files_base_url: /downloads/\n";
        let config: PortalConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.settings.probe_timeout_secs, 5);
        assert_eq!(config.settings.files_dir, Some(PathBuf::from("/srv/files")));
        assert_eq!(config.settings.files_base_url, "/downloads/");
    }
}
