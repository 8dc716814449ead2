//! State indicators for status rows.
//!
//! One canonical mapping from tri-state health to icon, bracket text, and
//! theme style, used by every rendering path.

use crate::status::report::HealthState;
use crate::ui::theme::PortalTheme;

/// Unicode icon for TTY output.
pub fn icon(state: HealthState) -> &'static str {
    match state {
        HealthState::Online => "●",
        HealthState::Offline => "●",
        HealthState::Unknown => "◌",
    }
}

/// Bracketed text for non-TTY output.
pub fn bracketed(state: HealthState) -> &'static str {
    match state {
        HealthState::Online => "[online]",
        HealthState::Offline => "[OFFLINE]",
        HealthState::Unknown => "[unknown]",
    }
}

/// Styled icon string using the given theme.
pub fn styled(state: HealthState, theme: &PortalTheme) -> String {
    let glyph = icon(state);
    match state {
        HealthState::Online => theme.success.apply_to(glyph).to_string(),
        HealthState::Offline => theme.error.apply_to(glyph).to_string(),
        HealthState::Unknown => theme.warning.apply_to(glyph).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_state_has_a_distinct_bracket() {
        let states = [
            HealthState::Online,
            HealthState::Offline,
            HealthState::Unknown,
        ];
        let brackets: Vec<&str> = states.iter().map(|s| bracketed(*s)).collect();
        assert_eq!(brackets.len(), 3);
        assert!(brackets.iter().all(|b| b.starts_with('[')));
        assert_ne!(brackets[0], brackets[1]);
        assert_ne!(brackets[1], brackets[2]);
    }

    #[test]
    fn styled_plain_theme_is_just_the_icon() {
        let theme = PortalTheme::plain();
        assert_eq!(styled(HealthState::Unknown, &theme), icon(HealthState::Unknown));
    }
}
