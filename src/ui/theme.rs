//! Visual theme and styling.

use console::Style;

/// Meshportal's visual theme.
#[derive(Debug, Clone)]
pub struct PortalTheme {
    /// Style for online/success elements (green).
    pub success: Style,
    /// Style for unknown/degraded elements (orange).
    pub warning: Style,
    /// Style for offline/error elements (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for group headers (cyan bold).
    pub header: Style,
}

impl Default for PortalTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PortalTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }
}

/// Whether styled output should be used.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}
