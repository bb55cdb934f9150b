//! Keyboard events.
//!
//! The platform layer produces [`KeyboardEvent`]s (one per key transition it
//! observes). [`dispatch_key_event`](crate::systems::keyboard::dispatch_key_event)
//! turns each into a [`KeyDownEvent`] or [`KeyUpEvent`] trigger, which every
//! tracked key's listener observes and filters by name.
//!
//! Key names follow the DOM `KeyboardEvent.key` values: `"ArrowLeft"`,
//! `"Escape"`, `"a"`, `" "` (space), `"F10"`, ...

use bevy_ecs::prelude::*;

/// Direction of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// Platform keyboard signal, before delivery to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// Platform key name.
    pub key: String,
    /// Whether the key went down (or repeated) or up.
    pub kind: KeyEventKind,
}

impl KeyboardEvent {
    pub fn down(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: KeyEventKind::Down,
        }
    }

    pub fn up(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: KeyEventKind::Up,
        }
    }
}

/// Global key-down signal observed by key listeners.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct KeyDownEvent {
    pub key: String,
}

/// Global key-up signal observed by key listeners.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct KeyUpEvent {
    pub key: String,
}
