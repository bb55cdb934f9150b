//! Platform keyboard polling.
//!
//! Raylib reports key transitions per physical key; the game talks in DOM key
//! names. [`key_from_name`] maps one to the other and [`poll_keyboard`] turns
//! this frame's transitions into [`KeyboardEvent`]s for the names of
//! interest. Held keys produce repeated down events at the OS repeat rate.
use raylib::RaylibHandle;
use raylib::ffi::KeyboardKey;

use crate::events::keyboard::KeyboardEvent;

/// Raylib key for a DOM key name, if it has one.
///
/// Letters match in either case.
pub fn key_from_name(name: &str) -> Option<KeyboardKey> {
    use KeyboardKey::*;
    let key = match name {
        "ArrowLeft" => KEY_LEFT,
        "ArrowRight" => KEY_RIGHT,
        "ArrowUp" => KEY_UP,
        "ArrowDown" => KEY_DOWN,
        "Escape" => KEY_ESCAPE,
        "Enter" => KEY_ENTER,
        " " => KEY_SPACE,
        "Tab" => KEY_TAB,
        "Backspace" => KEY_BACKSPACE,
        "Delete" => KEY_DELETE,
        "Insert" => KEY_INSERT,
        "Home" => KEY_HOME,
        "End" => KEY_END,
        "PageUp" => KEY_PAGE_UP,
        "PageDown" => KEY_PAGE_DOWN,
        "Shift" => KEY_LEFT_SHIFT,
        "Control" => KEY_LEFT_CONTROL,
        "Alt" => KEY_LEFT_ALT,
        "F1" => KEY_F1,
        "F2" => KEY_F2,
        "F3" => KEY_F3,
        "F4" => KEY_F4,
        "F5" => KEY_F5,
        "F6" => KEY_F6,
        "F7" => KEY_F7,
        "F8" => KEY_F8,
        "F9" => KEY_F9,
        "F10" => KEY_F10,
        "F11" => KEY_F11,
        "F12" => KEY_F12,
        _ => return single_char_key(name),
    };
    Some(key)
}

fn single_char_key(name: &str) -> Option<KeyboardKey> {
    use KeyboardKey::*;
    let mut chars = name.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let key = match c.to_ascii_lowercase() {
        'a' => KEY_A,
        'b' => KEY_B,
        'c' => KEY_C,
        'd' => KEY_D,
        'e' => KEY_E,
        'f' => KEY_F,
        'g' => KEY_G,
        'h' => KEY_H,
        'i' => KEY_I,
        'j' => KEY_J,
        'k' => KEY_K,
        'l' => KEY_L,
        'm' => KEY_M,
        'n' => KEY_N,
        'o' => KEY_O,
        'p' => KEY_P,
        'q' => KEY_Q,
        'r' => KEY_R,
        's' => KEY_S,
        't' => KEY_T,
        'u' => KEY_U,
        'v' => KEY_V,
        'w' => KEY_W,
        'x' => KEY_X,
        'y' => KEY_Y,
        'z' => KEY_Z,
        '0' => KEY_ZERO,
        '1' => KEY_ONE,
        '2' => KEY_TWO,
        '3' => KEY_THREE,
        '4' => KEY_FOUR,
        '5' => KEY_FIVE,
        '6' => KEY_SIX,
        '7' => KEY_SEVEN,
        '8' => KEY_EIGHT,
        '9' => KEY_NINE,
        _ => return None,
    };
    Some(key)
}

/// Collect this frame's key transitions for `names`.
///
/// Names without a raylib key are skipped.
pub fn poll_keyboard<'a>(
    rl: &RaylibHandle,
    names: impl IntoIterator<Item = &'a str>,
) -> Vec<KeyboardEvent> {
    let mut events = Vec::new();
    for name in names {
        let Some(key) = key_from_name(name) else {
            continue;
        };
        if rl.is_key_pressed(key) || rl.is_key_pressed_repeat(key) {
            events.push(KeyboardEvent::down(name));
        }
        if rl.is_key_released(key) {
            events.push(KeyboardEvent::up(name));
        }
    }
    events
}
