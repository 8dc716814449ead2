//! Integration tests for config module public API.

use meshportal::config::{default_groups, load_config, PortalConfig};
use meshportal::status::CheckKind;
use meshportal::PortalError;
use std::fs;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let config = PortalConfig::default();
    assert!(config.groups.is_empty());
    assert_eq!(config.settings.files_base_url, "/files/");
}

#[test]
fn builtin_table_matches_the_stock_node() {
    let groups = default_groups();
    assert_eq!(groups.len(), 3);

    let targets: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.checks.iter())
        .map(|c| c.target.as_str())
        .collect();
    for expected in ["mesh", "rnsd", "meshtasticd", "nginx", "php-fpm", "git", "batctl"] {
        assert!(targets.contains(&expected), "missing target {}", expected);
    }
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("portal.yml"),
        r#"
settings:
  probe_timeout_secs: 1
groups:
  - name: Mesh stack
    description: Field radios.
    checks:
      - label: Reticulum daemon (rnsd)
        kind: service
        target: rnsd
      - label: Reticulum CLI (rns)
        kind: command
        target: rns
"#,
    )
    .unwrap();

    let config = load_config(None, temp.path()).unwrap();
    assert_eq!(config.probe_timeout(), std::time::Duration::from_secs(1));

    let groups = config.effective_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].checks[0].kind, CheckKind::Service);
    assert_eq!(groups[0].checks[1].kind, CheckKind::Command);
}

#[test]
fn resolved_config_round_trips_through_yaml() {
    let resolved = PortalConfig {
        settings: Default::default(),
        groups: default_groups(),
    };
    let yaml = serde_yaml::to_string(&resolved).unwrap();
    let reparsed: PortalConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(reparsed.groups, default_groups());
}

#[test]
fn validation_errors_name_the_offending_check() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("portal.yml"),
        "groups:\n  - name: G\n    checks:\n      - label: \"\"\n        kind: command\n        target: git\n",
    )
    .unwrap();

    let err = load_config(None, temp.path()).unwrap_err();
    assert!(matches!(err, PortalError::ConfigValidationError { .. }));
    assert!(err.to_string().contains("G"));
}
