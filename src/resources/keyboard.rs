//! Platform default handling for keys.
//!
//! Some keys have a default action when nobody claims them: Escape closes the
//! game and F10 toggles fullscreen. A tracked key claims every event it
//! receives by recording it in [`PreventedDefaults`]; the dispatcher then
//! skips the default action.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Action the platform performs for an unclaimed key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultKeyAction {
    Quit,
    ToggleFullscreen,
}

/// Default action per key name.
#[derive(Resource, Debug, Clone)]
pub struct KeyDefaults {
    actions: FxHashMap<String, DefaultKeyAction>,
}

impl Default for KeyDefaults {
    fn default() -> Self {
        let mut actions = FxHashMap::default();
        actions.insert("Escape".to_string(), DefaultKeyAction::Quit);
        actions.insert("F10".to_string(), DefaultKeyAction::ToggleFullscreen);
        Self { actions }
    }
}

impl KeyDefaults {
    /// No default actions at all.
    pub fn empty() -> Self {
        Self {
            actions: FxHashMap::default(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, action: DefaultKeyAction) {
        self.actions.insert(key.into(), action);
    }

    pub fn get(&self, key: &str) -> Option<DefaultKeyAction> {
        self.actions.get(key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }
}

/// Keys whose current event had its default handling suppressed.
///
/// Filled by key listeners while an event is delivered and drained by the
/// dispatcher right after.
#[derive(Resource, Debug, Default)]
pub struct PreventedDefaults {
    keys: FxHashSet<String>,
}

impl PreventedDefaults {
    pub fn prevent(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    /// Whether `key` was suppressed; clears the mark.
    pub fn take(&mut self, key: &str) -> bool {
        self.keys.remove(key)
    }
}
