//! Meshportal - status and download-listing helper for a mesh node LAN portal.
//!
//! Meshportal is the CLI behind the local web portal of a field-deployed
//! mesh-networking node. It probes a declarative list of services and
//! command-line tools, classifies each into a tri-state health result, and
//! renders the grouped report either as styled terminal output or as JSON for
//! the portal's status page. It also generates the portal's raw file listing
//! from a downloads directory.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Check configuration loading and the built-in check table
//! - [`downloads`] - Downloads directory scanning and formatting
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External process invocation with timeouts
//! - [`status`] - Probes, the status aggregator, and report types
//! - [`ui`] - Terminal output, theme, and state indicators
//!
//! # Example
//!
//! ```
//! use meshportal::status::{Aggregator, CheckDefinition, CheckKind, HealthState, SystemProbe};
//!
//! let probe = SystemProbe::new();
//! let aggregator = Aggregator::new(&probe);
//! let check = CheckDefinition {
//!     label: "Git client".to_string(),
//!     kind: CheckKind::Command,
//!     target: "git".to_string(),
//! };
//! let result = aggregator.classify(&check);
//! // Command checks are always determinable, never Unknown.
//! assert_ne!(result.state, HealthState::Unknown);
//! ```

pub mod cli;
pub mod config;
pub mod downloads;
pub mod error;
pub mod shell;
pub mod status;
pub mod ui;

pub use error::{PortalError, Result};
