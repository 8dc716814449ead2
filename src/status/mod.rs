//! System status aggregation.
//!
//! The status page's core: declarative [`CheckDefinition`]s are probed via a
//! [`StatusProbe`] and classified into tri-state [`CheckResult`]s, grouped
//! the way the caller grouped them.
//!
//! - [`check`] - Check and group definitions
//! - [`probe`] - The `StatusProbe` trait and the PATH/systemd-backed
//!   production implementation
//! - [`aggregator`] - Classification and grouping
//! - [`report`] - Result and report types the portal consumes

pub mod aggregator;
pub mod check;
pub mod probe;
pub mod report;

pub use aggregator::Aggregator;
pub use check::{CheckDefinition, CheckGroup, CheckKind};
pub use probe::{ServiceState, StatusProbe, SystemProbe, PROBE_TIMEOUT};
pub use report::{CheckResult, CheckStatus, GroupReport, HealthState, StateTally, StatusReport};
