//! The status aggregator.
//!
//! Maps each check through the probe matching its kind and folds the answer
//! into the tri-state result with its fixed message. Checks are classified
//! independently, one probe attempt each, in the caller's order — this is a
//! point-in-time snapshot, not a monitoring pipeline, so there are no retries
//! and no coupling between checks.

use crate::status::check::{CheckDefinition, CheckGroup, CheckKind};
use crate::status::probe::{ServiceState, StatusProbe};
use crate::status::report::{CheckResult, CheckStatus, GroupReport, HealthState, StatusReport};

/// Classifies checks against an injected probe.
pub struct Aggregator<'a> {
    probe: &'a dyn StatusProbe,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator over the given probe.
    pub fn new(probe: &'a dyn StatusProbe) -> Self {
        Self { probe }
    }

    /// Classify a single check.
    pub fn classify(&self, check: &CheckDefinition) -> CheckResult {
        let result = match check.kind {
            CheckKind::Service => match self.probe.service_state(&check.target) {
                ServiceState::Active => CheckResult {
                    state: HealthState::Online,
                    message: "Running",
                },
                ServiceState::Inactive => CheckResult {
                    state: HealthState::Offline,
                    message: "Not running",
                },
                ServiceState::Unavailable => CheckResult {
                    state: HealthState::Unknown,
                    message: "Status unavailable",
                },
            },
            // Presence on the search path is always determinable, so command
            // checks never classify Unknown.
            CheckKind::Command => {
                if self.probe.command_exists(&check.target) {
                    CheckResult {
                        state: HealthState::Online,
                        message: "Available",
                    }
                } else {
                    CheckResult {
                        state: HealthState::Offline,
                        message: "Not available",
                    }
                }
            }
        };

        tracing::debug!(
            label = %check.label,
            target = %check.target,
            state = %result.state,
            "classified check"
        );
        result
    }

    /// Classify every check in a group, preserving order.
    pub fn classify_group(&self, group: &CheckGroup) -> GroupReport {
        GroupReport {
            name: group.name.clone(),
            description: group.description.clone(),
            checks: group
                .checks
                .iter()
                .map(|check| CheckStatus {
                    label: check.label.clone(),
                    result: self.classify(check),
                })
                .collect(),
        }
    }

    /// Classify all groups into the full status-page payload.
    pub fn classify_all(&self, groups: &[CheckGroup]) -> StatusReport {
        StatusReport {
            groups: groups.iter().map(|g| self.classify_group(g)).collect(),
        }
    }
}
