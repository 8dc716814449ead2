//! Status report types.
//!
//! One [`CheckStatus`] per configured check, partitioned by the caller's
//! grouping. State values map 1:1 onto the portal's CSS indicator classes
//! (`online` / `offline` / `unknown`), which is also how they serialize.

use serde::Serialize;

/// Tri-state health of a single check.
///
/// `Unknown` means "no mechanism available to answer", not "probe failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Online,
    Offline,
    Unknown,
}

impl HealthState {
    /// The portal's CSS indicator class for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one check: state plus its fixed explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub state: HealthState,
    pub message: &'static str,
}

/// A classified check with the label the portal renders next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckStatus {
    pub label: String,
    #[serde(flatten)]
    pub result: CheckResult,
}

/// Results for one named section, in the caller's original check order.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub checks: Vec<CheckStatus>,
}

/// The full status-page payload.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub groups: Vec<GroupReport>,
}

impl StatusReport {
    /// Count checks in each state, for the summary line.
    pub fn tally(&self) -> StateTally {
        let mut tally = StateTally::default();
        for group in &self.groups {
            for check in &group.checks {
                match check.result.state {
                    HealthState::Online => tally.online += 1,
                    HealthState::Offline => tally.offline += 1,
                    HealthState::Unknown => tally.unknown += 1,
                }
            }
        }
        tally
    }
}

/// Per-state check counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateTally {
    pub online: usize,
    pub offline: usize,
    pub unknown: usize,
}

impl StateTally {
    pub fn total(&self) -> usize {
        self.online + self.offline + self.unknown
    }
}
