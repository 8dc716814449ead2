//! Status command implementation.
//!
//! The `meshportal status` command probes every configured check and renders
//! the grouped report, either styled for the terminal or as JSON for the
//! portal's status page. Rendering always completes: individual checks
//! degrade to their best-known state rather than failing the report.

use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::status::{Aggregator, StatusReport, SystemProbe};
use crate::ui::theme::should_use_colors;
use crate::ui::{indicator, PortalTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    portal_root: PathBuf,
    config_path: Option<PathBuf>,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(portal_root: &Path, config_path: Option<PathBuf>, args: StatusArgs) -> Self {
        Self {
            portal_root: portal_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(self.config_path.as_deref(), &self.portal_root)?;

        let mut groups = config.effective_groups();
        if let Some(wanted) = &self.args.group {
            groups.retain(|g| g.name.eq_ignore_ascii_case(wanted));
            if groups.is_empty() {
                ui.error(&format!("No check group named '{}'", wanted));
                return Ok(CommandResult::failure(2));
            }
        }

        let probe = SystemProbe::new().with_timeout(config.probe_timeout());
        let aggregator = Aggregator::new(&probe);
        let report = aggregator.classify_all(&groups);

        if self.args.json {
            let payload = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.emit(&payload);
        } else {
            render_report(&report, ui);
        }

        // The page-equivalent contract: the report always renders fully, and
        // offline rows are content, not a command failure.
        Ok(CommandResult::success())
    }
}

/// Render the report as grouped, aligned status rows.
fn render_report(report: &StatusReport, ui: &mut dyn UserInterface) {
    let theme = if should_use_colors() {
        PortalTheme::new()
    } else {
        PortalTheme::plain()
    };

    for group in &report.groups {
        ui.message(&format!("  {}", theme.header.apply_to(&group.name)));
        if let Some(desc) = &group.description {
            ui.message(&format!("  {}", theme.dim.apply_to(desc)));
        }

        let width = group
            .checks
            .iter()
            .map(|c| c.label.chars().count())
            .max()
            .unwrap_or(0);

        for check in &group.checks {
            ui.message(&format!(
                "    {} {:<width$}  {}",
                indicator::styled(check.result.state, &theme),
                check.label,
                theme.dim.apply_to(check.result.message),
                width = width,
            ));
        }
        ui.message("");
    }

    let tally = report.tally();
    let mut parts = vec![format!(
        "{}",
        theme.success.apply_to(format!("{} online", tally.online))
    )];
    if tally.offline > 0 {
        parts.push(format!(
            "{}",
            theme.error.apply_to(format!("{} offline", tally.offline))
        ));
    }
    if tally.unknown > 0 {
        parts.push(format!(
            "{}",
            theme.warning.apply_to(format!("{} unknown", tally.unknown))
        ));
    }
    ui.message(&format!(
        "  {} {}",
        theme.highlight.apply_to(format!("{} checks:", tally.total())),
        parts.join(", ")
    ));
}
