//! Host probes for command presence and service state.
//!
//! Two ambient host facilities answer the status page's questions: the
//! executable search path ("is this tool installed?") and the service manager
//! ("is this unit active?"). Both are abstracted behind [`StatusProbe`] so the
//! aggregator can be tested against a fake instead of real process execution.
//!
//! The production [`SystemProbe`] resolves PATH itself rather than shelling
//! out to `which` — `which` behavior varies across systems and is sometimes a
//! shell builtin with inconsistent error handling. Service queries go through
//! `systemctl is-active` first and fall back to the legacy `service <name>
//! status` interface on hosts without systemd.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shell::{run_probe, ProbeOutput};

/// Per-probe timeout. A hung service manager call must not stall the render;
/// total aggregation time stays bounded by checks x attempts x timeout.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// What the service-management facilities said about a unit.
///
/// `Unavailable` is reserved for "no mechanism could answer" — a mechanism
/// that exists but reports the unit down is `Inactive`. Keeping the two cases
/// distinct at this boundary is what lets the aggregator tell Offline from
/// Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// A mechanism answered: the unit is active.
    Active,
    /// A mechanism answered: the unit is not active.
    Inactive,
    /// Neither the service manager nor the legacy interface exists here.
    Unavailable,
}

/// Read-only host probes behind the status aggregator.
pub trait StatusProbe {
    /// Whether an executable with this name resolves on the search path.
    fn command_exists(&self, name: &str) -> bool;

    /// Current state of a service unit. Must not mutate service state.
    fn service_state(&self, name: &str) -> ServiceState;
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Resolve an executable by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Lookup failure of
/// any kind is "not found", never an error.
pub fn resolve_on_path(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Interpret the legacy `service <name> status` result.
///
/// Exit 0 means active. Some init scripts exit nonzero from `status` yet
/// print a "running"/"started" line, so the combined output is also matched
/// case-insensitively before concluding the unit is down.
pub fn interpret_legacy_status(output: &ProbeOutput) -> ServiceState {
    if output.timed_out {
        return ServiceState::Inactive;
    }
    if output.success() {
        return ServiceState::Active;
    }
    let text = output.combined_output().to_lowercase();
    if text.contains("running") || text.contains("started") {
        ServiceState::Active
    } else {
        ServiceState::Inactive
    }
}

/// Production probe backed by PATH lookup and the host's service facilities.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    path_entries: Vec<PathBuf>,
    timeout: Duration,
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe {
    /// Probe against the real system PATH with the default timeout.
    pub fn new() -> Self {
        Self::with_path_entries(system_path(), PROBE_TIMEOUT)
    }

    /// Probe against an explicit set of PATH entries.
    ///
    /// Tests point this at a directory of fake `systemctl`/`service` scripts
    /// to exercise the fallback chain without touching the host.
    pub fn with_path_entries(path_entries: Vec<PathBuf>, timeout: Duration) -> Self {
        Self {
            path_entries,
            timeout,
        }
    }

    /// Override the per-probe timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn query(&self, program: &Path, args: &[&str]) -> Option<ProbeOutput> {
        match run_probe(program, args, self.timeout) {
            Ok(output) => {
                tracing::debug!(
                    program = %program.display(),
                    exit_code = ?output.exit_code,
                    timed_out = output.timed_out,
                    "probe finished"
                );
                Some(output)
            }
            Err(err) => {
                tracing::debug!(program = %program.display(), %err, "probe failed to spawn");
                None
            }
        }
    }
}

impl StatusProbe for SystemProbe {
    fn command_exists(&self, name: &str) -> bool {
        resolve_on_path(name, &self.path_entries).is_some()
    }

    fn service_state(&self, name: &str) -> ServiceState {
        // Primary mechanism: systemd. A failing or timed-out `is-active` does
        // not immediately mean Inactive — the unit may be managed by the
        // legacy interface instead, so fall through before concluding.
        let mut mechanism_answered = false;

        if let Some(systemctl) = resolve_on_path("systemctl", &self.path_entries) {
            mechanism_answered = true;
            if let Some(output) = self.query(&systemctl, &["is-active", name]) {
                if output.success() {
                    return ServiceState::Active;
                }
            }
        }

        // Legacy mechanism: SysV-style `service <name> status`.
        if let Some(service) = resolve_on_path("service", &self.path_entries) {
            if let Some(output) = self.query(&service, &[name, "status"]) {
                return interpret_legacy_status(&output);
            }
            mechanism_answered = true;
        }

        if mechanism_answered {
            ServiceState::Inactive
        } else {
            ServiceState::Unavailable
        }
    }
}
