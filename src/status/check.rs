//! Check definitions.
//!
//! A check names one thing to probe: a long-running service or a command-line
//! tool. Checks are declarative configuration — the aggregator never mutates
//! them and the probe never interprets them as anything but opaque names.

use serde::{Deserialize, Serialize};

/// How a check's target is probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Query the service manager for the target unit's state.
    Service,
    /// Look the target up on the executable search path.
    Command,
}

/// A single named thing to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDefinition {
    /// Human-readable name shown on the status page.
    pub label: String,

    /// Probe strategy.
    pub kind: CheckKind,

    /// Service unit name or executable name.
    pub target: String,
}

/// An ordered, named section of checks (e.g. "Mesh stack").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckGroup {
    /// Section heading.
    pub name: String,

    /// Short blurb shown under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Checks in presentation order.
    pub checks: Vec<CheckDefinition>,
}
