//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction (mockable in tests)
//! - [`ConsoleUi`] for terminal usage
//! - Output modes, theme, and status-state indicators
//!
//! The tool is strictly non-interactive: it renders and exits, so the trait
//! covers output only. `emit` is for machine-readable payloads and prints in
//! every mode; `message` respects `--quiet`.

pub mod indicator;
pub mod output;
pub mod theme;

pub use output::OutputMode;
pub use theme::{should_use_colors, PortalTheme};

/// Trait for user-facing output.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message (suppressed in quiet mode).
    fn message(&mut self, msg: &str);

    /// Print machine-readable output (never suppressed).
    fn emit(&mut self, payload: &str);

    /// Display an error to stderr (never suppressed).
    fn error(&mut self, msg: &str);
}

/// Terminal-backed implementation of [`UserInterface`].
pub struct ConsoleUi {
    mode: OutputMode,
    theme: PortalTheme,
}

impl ConsoleUi {
    /// Create a console UI.
    pub fn new(mode: OutputMode, colored: bool) -> Self {
        let theme = if colored {
            PortalTheme::new()
        } else {
            PortalTheme::plain()
        };
        Self { mode, theme }
    }

    /// The active theme.
    pub fn theme(&self) -> &PortalTheme {
        &self.theme
    }
}

impl UserInterface for ConsoleUi {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn emit(&mut self, payload: &str) {
        println!("{}", payload);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }
}

/// Create the UI for the current invocation.
pub fn create_ui(mode: OutputMode, colored: bool) -> ConsoleUi {
    ConsoleUi::new(mode, colored)
}

/// Capturing implementation of [`UserInterface`] for tests.
#[derive(Default)]
pub struct MockUi {
    pub messages: Vec<String>,
    pub emitted: Vec<String>,
    pub errors: Vec<String>,
}

impl UserInterface for MockUi {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn emit(&mut self, payload: &str) {
        self.emitted.push(payload.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
