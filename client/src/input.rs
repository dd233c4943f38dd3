//! Keyboard and touch input handling

use game_core::InputState;

/// On-screen touch buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Up,
    Down,
}

/// Handle key down event
pub fn handle_key_down(key: &str, input: &mut InputState) {
    match key {
        "ArrowUp" | "w" | "W" => input.move_up = true,
        "ArrowDown" | "s" | "S" => input.move_down = true,
        _ => {}
    }
}

/// Handle key up event
pub fn handle_key_up(key: &str, input: &mut InputState) {
    match key {
        "ArrowUp" | "w" | "W" => input.move_up = false,
        "ArrowDown" | "s" | "S" => input.move_down = false,
        _ => {}
    }
}

/// Handle touchstart (`pressed = true`) and touchend on a control button
pub fn handle_touch(button: TouchButton, pressed: bool, input: &mut InputState) {
    match button {
        TouchButton::Up => input.move_up = pressed,
        TouchButton::Down => input.move_down = pressed,
    }
}
