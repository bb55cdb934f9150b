//! Per-key tracking components.
//!
//! Every tracked key lives on its own entity carrying:
//! - [`KeyState`] – the key name and its up/down flag
//! - [`KeyCallbacks`] – optional edge-triggered press/release callbacks
//! - [`KeyListeners`] – the two observer entities subscribed to
//!   [`KeyDownEvent`](crate::events::keyboard::KeyDownEvent) and
//!   [`KeyUpEvent`](crate::events::keyboard::KeyUpEvent)
//!
//! Despawning the listener entities detaches the key from the keyboard; see
//! [`crate::systems::keyboard`] for registration and dispatch.

use bevy_ecs::prelude::*;

/// Callback run on a key edge.
pub type KeyCallback = Box<dyn FnMut() + Send + Sync>;

/// Up/down state of one tracked key.
///
/// Exactly one of [`is_down`](Self::is_down) and [`is_up`](Self::is_up) holds
/// at any time. New keys start up.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct KeyState {
    name: String,
    down: bool,
}

impl KeyState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            down: false,
        }
    }

    /// Platform key name this state tracks (e.g. `"ArrowLeft"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn is_up(&self) -> bool {
        !self.down
    }

    /// Mark the key down. Returns true only on the up -> down edge.
    pub fn press(&mut self) -> bool {
        let edge = !self.down;
        self.down = true;
        edge
    }

    /// Mark the key up. Returns true only on the down -> up edge.
    pub fn release(&mut self) -> bool {
        let edge = self.down;
        self.down = false;
        edge
    }
}

/// Optional callbacks fired on key edges.
#[derive(Component, Default)]
pub struct KeyCallbacks {
    pub on_press: Option<KeyCallback>,
    pub on_release: Option<KeyCallback>,
}

impl std::fmt::Debug for KeyCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyCallbacks")
            .field("on_press", &self.on_press.is_some())
            .field("on_release", &self.on_release.is_some())
            .finish()
    }
}

/// Observer entities subscribed on behalf of one key.
#[derive(Component, Debug, Clone, Copy)]
pub struct KeyListeners {
    pub down: Entity,
    pub up: Entity,
}

/// Handle returned when a key is registered.
///
/// Points at the key entity. After the same name is registered again the old
/// handle refers to a despawned entity and no longer receives events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyHandle {
    pub entity: Entity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystate_starts_up() {
        let key = KeyState::new("ArrowUp");
        assert_eq!(key.name(), "ArrowUp");
        assert!(key.is_up());
        assert!(!key.is_down());
    }

    #[test]
    fn test_press_reports_edge_once() {
        let mut key = KeyState::new("a");
        assert!(key.press());
        assert!(!key.press());
        assert!(!key.press());
        assert!(key.is_down());
        assert!(!key.is_up());
    }

    #[test]
    fn test_release_reports_edge_once() {
        let mut key = KeyState::new("a");
        assert!(!key.release());
        key.press();
        assert!(key.release());
        assert!(!key.release());
        assert!(key.is_up());
    }

    #[test]
    fn test_callbacks_debug_shows_presence() {
        let callbacks = KeyCallbacks {
            on_press: Some(Box::new(|| {})),
            on_release: None,
        };
        let text = format!("{:?}", callbacks);
        assert!(text.contains("on_press: true"));
        assert!(text.contains("on_release: false"));
    }
}
