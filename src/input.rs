use raylib::prelude::*;

use crate::layout::Layout;
use crate::state::Navigation;

pub fn navigation_for_key(key: KeyboardKey) -> Option<Navigation> {
    match key {
        KeyboardKey::KEY_LEFT => Some(Navigation::Previous),
        KeyboardKey::KEY_RIGHT => Some(Navigation::Next),
        _ => None,
    }
}

/// Drains this frame's key presses and clicks, in arrival order.
pub fn poll(rl: &mut RaylibHandle, layout: &Layout) -> Vec<Navigation> {
    let mut requests = Vec::new();

    while let Some(key) = rl.get_key_pressed() {
        requests.extend(navigation_for_key(key));
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        requests.extend(layout.hit_test(rl.get_mouse_position()));
    }

    requests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(navigation_for_key(KeyboardKey::KEY_LEFT), Some(Navigation::Previous));
        assert_eq!(navigation_for_key(KeyboardKey::KEY_RIGHT), Some(Navigation::Next));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        for key in [
            KeyboardKey::KEY_UP,
            KeyboardKey::KEY_DOWN,
            KeyboardKey::KEY_SPACE,
            KeyboardKey::KEY_ENTER,
            KeyboardKey::KEY_A,
        ] {
            assert_eq!(navigation_for_key(key), None);
        }
    }
}
