//! Check configuration.
//!
//! - [`schema`] - Structs mapping to `portal.yml`, plus the built-in check table
//! - [`loader`] - File discovery, parsing, and validation

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, parse_config_file};
pub use schema::{default_groups, PortalConfig, Settings};
