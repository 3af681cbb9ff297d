//! Key bindings.
//!
//! | Key            | Action                      |
//! |----------------|-----------------------------|
//! | `Space`, `P`   | switch the heater on or off |
//! | `I`            | show or hide instructions   |
//! | `D`            | show or hide the debug page |
//! | `Return`       | close the modal alert       |
//! | `Escape`       | quit                        |

use embedded_graphics_simulator::sdl2::Keycode;

/// Something the user asked for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    TogglePower,
    ToggleInstructions,
    ToggleDebug,
    Acknowledge,
    Quit,
}

/// Map a key press to an action. Unbound keys return `None`.
pub fn action_for(keycode: Keycode) -> Option<Action> {
    match keycode {
        Keycode::Space | Keycode::P => Some(Action::TogglePower),
        Keycode::I => Some(Action::ToggleInstructions),
        Keycode::D => Some(Action::ToggleDebug),
        Keycode::Return | Keycode::KpEnter => Some(Action::Acknowledge),
        Keycode::Escape => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_keys() {
        assert_eq!(action_for(Keycode::Space), Some(Action::TogglePower));
        assert_eq!(action_for(Keycode::P), Some(Action::TogglePower));
    }

    #[test]
    fn test_page_keys() {
        assert_eq!(action_for(Keycode::I), Some(Action::ToggleInstructions));
        assert_eq!(action_for(Keycode::D), Some(Action::ToggleDebug));
    }

    #[test]
    fn test_modal_and_quit_keys() {
        assert_eq!(action_for(Keycode::Return), Some(Action::Acknowledge));
        assert_eq!(action_for(Keycode::Escape), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(action_for(Keycode::X), None);
    }
}
