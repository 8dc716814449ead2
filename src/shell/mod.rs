//! External process invocation.
//!
//! Probes call host facilities (`systemctl`, `service`) strictly as black-box,
//! read-only queries. Commands are always invoked with an argument vector —
//! never through a shell — so configuration-supplied target names cannot be
//! interpreted as shell syntax.
//!
//! Every invocation carries a timeout: a hung service manager would otherwise
//! stall the whole status render.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Poll interval while waiting for a probe process to exit.
const WAIT_POLL: Duration = Duration::from_millis(20);

/// Extra time granted after process exit for the output pipes to flush.
const DRAIN_GRACE: Duration = Duration::from_millis(100);

/// Result of running a probe process.
#[derive(Debug, Clone)]
pub struct ProbeOutput {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the process was killed after exceeding the timeout.
    pub timed_out: bool,
}

impl ProbeOutput {
    /// Whether the process ran to completion with exit code 0.
    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }

    /// Stdout and stderr combined, for substring matching on legacy
    /// status output that interleaves the two streams.
    pub fn combined_output(&self) -> String {
        let mut text = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&self.stderr);
        }
        text
    }
}

/// Run a program with an argument vector, capturing output.
///
/// Stdin is closed, stdout and stderr are captured. If the process has not
/// exited when `timeout` elapses it is killed and the result is marked
/// `timed_out`. Spawn failures surface as `Err`; callers fold them into the
/// tri-state health result rather than propagating.
pub fn run_probe(program: &Path, args: &[&str], timeout: Duration) -> std::io::Result<ProbeOutput> {
    let start = Instant::now();

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Drain pipes on threads so a chatty probe can't deadlock on a full pipe
    // while we poll for exit.
    let stdout_rx = spawn_reader(child.stdout.take());
    let stderr_rx = spawn_reader(child.stderr.take());

    let deadline = start + timeout;
    let (status, timed_out) = loop {
        match child.try_wait()? {
            Some(status) => break (Some(status), false),
            None => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    break (None, true);
                }
                thread::sleep(WAIT_POLL);
            }
        }
    };
    let duration = start.elapsed();

    // Killing the probe does not reliably close its pipes: an orphaned
    // grandchild may still hold the write ends open, and waiting for EOF
    // there would stall the render past the timeout. Bound the drain to the
    // remaining budget and return with whatever was captured.
    let drain_deadline = deadline + DRAIN_GRACE;
    let stdout = recv_until(&stdout_rx, drain_deadline);
    let stderr = recv_until(&stderr_rx, drain_deadline);

    Ok(ProbeOutput {
        exit_code: status.and_then(|s| s.code()),
        stdout,
        stderr,
        duration,
        timed_out,
    })
}

/// Read a pipe to EOF on a detached thread, delivering the captured text
/// through a channel so the caller can stop waiting without blocking on EOF.
fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        let _ = tx.send(buf);
    });
    rx
}

/// Wait for a reader's buffer up to `deadline`; an unfinished reader yields
/// an empty capture.
fn recv_until(rx: &mpsc::Receiver<String>, deadline: Instant) -> String {
    let remaining = deadline.saturating_duration_since(Instant::now());
    rx.recv_timeout(remaining).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sh() -> PathBuf {
        PathBuf::from("/bin/sh")
    }

    #[cfg(unix)]
    #[test]
    fn run_probe_captures_stdout() {
        let result = run_probe(&sh(), &["-c", "echo hello"], Duration::from_secs(5)).unwrap();
        assert!(result.success());
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn run_probe_reports_nonzero_exit() {
        let result = run_probe(&sh(), &["-c", "exit 3"], Duration::from_secs(5)).unwrap();
        assert!(!result.success());
        assert_eq!(result.exit_code, Some(3));
        assert!(!result.timed_out);
    }

    #[cfg(unix)]
    #[test]
    fn run_probe_captures_stderr() {
        let result = run_probe(&sh(), &["-c", "echo oops >&2"], Duration::from_secs(5)).unwrap();
        assert!(result.stderr.contains("oops"));
        assert!(result.combined_output().contains("oops"));
    }

    #[cfg(unix)]
    #[test]
    fn run_probe_kills_on_timeout() {
        let result = run_probe(&sh(), &["-c", "sleep 30"], Duration::from_millis(200)).unwrap();
        assert!(result.timed_out);
        assert!(!result.success());
        // Bounded latency is the contract: killed at the deadline, not later.
        assert!(result.duration < Duration::from_secs(2));
    }

    #[cfg(unix)]
    #[test]
    fn orphaned_grandchild_cannot_stall_past_timeout() {
        // The backgrounded sleep inherits the pipe write ends and outlives
        // the killed shell, so EOF never arrives within the test window.
        let start = Instant::now();
        let result = run_probe(
            &sh(),
            &["-c", "sleep 10 & sleep 10"],
            Duration::from_millis(200),
        )
        .unwrap();
        assert!(result.timed_out);
        assert!(result.duration < Duration::from_secs(2));
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn run_probe_spawn_failure_is_err() {
        let missing = Path::new("/nonexistent/bin/definitely-not-here");
        assert!(run_probe(missing, &[], Duration::from_secs(1)).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn arguments_are_not_shell_interpreted() {
        // A hostile target name passed as an argv token must arrive verbatim.
        let hostile = "nginx; touch /tmp/injected";
        let result = run_probe(&sh(), &["-c", "echo \"$1\"", "sh", hostile], Duration::from_secs(5))
            .unwrap();
        assert!(result.stdout.contains(hostile));
    }

    #[cfg(unix)]
    #[test]
    fn combined_output_joins_streams() {
        let result = run_probe(
            &sh(),
            &["-c", "echo out; echo err >&2"],
            Duration::from_secs(5),
        )
        .unwrap();
        let combined = result.combined_output();
        assert!(combined.contains("out"));
        assert!(combined.contains("err"));
    }
}
