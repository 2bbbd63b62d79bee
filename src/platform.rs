//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the form hints
/// - macOS: "Cmd+S"
/// - Linux/Windows: "Ctrl+S"
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Whether the held modifiers trigger the submit shortcut
pub fn is_submit_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(SUBMIT_MODIFIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_submits_on_every_platform() {
        assert!(is_submit_modifier(KeyModifiers::CONTROL));
        assert!(is_submit_modifier(SUBMIT_MODIFIER));
    }

    #[test]
    fn test_plain_and_shift_do_not_submit() {
        assert!(!is_submit_modifier(KeyModifiers::NONE));
        assert!(!is_submit_modifier(KeyModifiers::SHIFT));
    }
}
