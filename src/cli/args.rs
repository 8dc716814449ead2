//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Meshportal - status and download-listing helper for a mesh node LAN portal.
#[derive(Debug, Parser)]
#[command(name = "meshportal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides portal.yml discovery)
    #[arg(short, long, global = true, env = "MESHPORTAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the portal root (overrides current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe configured services and tools and render the status report
    /// (default if no command specified)
    Status(StatusArgs),

    /// List the downloads directory the portal's /files/ view is built from
    Files(FilesArgs),

    /// Show the resolved check configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show only the named group (case-insensitive)
    #[arg(long)]
    pub group: Option<String>,
}

/// Arguments for the `files` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FilesArgs {
    /// Directory to list (defaults to settings.files_dir)
    pub dir: Option<PathBuf>,

    /// URL prefix for download links (defaults to settings.files_base_url)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
