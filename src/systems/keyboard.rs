//! Key tracking on top of ECS observers.
//!
//! [`register_key`] spawns a key entity and two [`Observer`]s, one for
//! [`KeyDownEvent`] and one for [`KeyUpEvent`]. Each observer ignores events
//! for other key names, flips the key's [`KeyState`], runs the edge callback
//! and marks the event's default handling as prevented.
//!
//! [`dispatch_key_event`] is the only way platform input reaches the
//! observers.

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::keystate::{KeyCallback, KeyCallbacks, KeyHandle, KeyListeners, KeyState};
use crate::error::EngineError;
use crate::events::keyboard::{KeyDownEvent, KeyEventKind, KeyUpEvent, KeyboardEvent};
use crate::resources::keyboard::{DefaultKeyAction, KeyDefaults, PreventedDefaults};
use crate::resources::keyregistry::KeyRegistry;

/// Start tracking `name` and return its handle.
///
/// Registering a name that is already tracked replaces the previous tracker:
/// its listeners are unsubscribed and its entity despawned first, so callbacks
/// set on the old handle never run again.
pub fn register_key(world: &mut World, name: &str) -> KeyHandle {
    world.init_resource::<KeyRegistry>();
    world.init_resource::<PreventedDefaults>();

    let previous = world.resource::<KeyRegistry>().get(name);
    if let Some(old) = previous {
        let handle = KeyHandle { entity: old };
        unsubscribe_key(world, handle);
        world.despawn(old);
        debug!("Replaced tracker for key {:?}", name);
    }

    let key_entity = world
        .spawn((KeyState::new(name), KeyCallbacks::default()))
        .id();

    let down_name = name.to_string();
    let down = world
        .spawn(Observer::new(
            move |trigger: On<KeyDownEvent>,
                  mut keys: Query<(&mut KeyState, &mut KeyCallbacks)>,
                  mut prevented: ResMut<PreventedDefaults>| {
                let event = trigger.event();
                if event.key != down_name {
                    return;
                }
                let Ok((mut state, mut callbacks)) = keys.get_mut(key_entity) else {
                    return;
                };
                if state.press() {
                    if let Some(on_press) = callbacks.on_press.as_mut() {
                        on_press();
                    }
                }
                prevented.prevent(&event.key);
            },
        ))
        .id();

    let up_name = name.to_string();
    let up = world
        .spawn(Observer::new(
            move |trigger: On<KeyUpEvent>,
                  mut keys: Query<(&mut KeyState, &mut KeyCallbacks)>,
                  mut prevented: ResMut<PreventedDefaults>| {
                let event = trigger.event();
                if event.key != up_name {
                    return;
                }
                let Ok((mut state, mut callbacks)) = keys.get_mut(key_entity) else {
                    return;
                };
                if state.release() {
                    if let Some(on_release) = callbacks.on_release.as_mut() {
                        on_release();
                    }
                }
                prevented.prevent(&event.key);
            },
        ))
        .id();

    world.entity_mut(key_entity).insert(KeyListeners { down, up });
    world.resource_mut::<KeyRegistry>().insert(name, key_entity);
    // Observers must be registered before the next dispatch.
    world.flush();

    debug!("Tracking key {:?} on {:?}", name, key_entity);
    KeyHandle { entity: key_entity }
}

/// Detach a key from the keyboard.
///
/// The key entity keeps its last state; it just stops receiving events.
/// Unsubscribing twice is harmless.
pub fn unsubscribe_key(world: &mut World, handle: KeyHandle) {
    let listeners = match world.get_entity_mut(handle.entity) {
        Ok(mut key) => key.take::<KeyListeners>(),
        Err(_) => return,
    };
    if let Some(listeners) = listeners {
        world.despawn(listeners.down);
        world.despawn(listeners.up);
        world.flush();
    }
}

/// Set the callback fired when the key goes from up to down.
pub fn set_on_press(world: &mut World, handle: KeyHandle, callback: KeyCallback) {
    if let Some(mut callbacks) = world.get_mut::<KeyCallbacks>(handle.entity) {
        callbacks.on_press = Some(callback);
    }
}

/// Set the callback fired when the key goes from down to up.
pub fn set_on_release(world: &mut World, handle: KeyHandle, callback: KeyCallback) {
    if let Some(mut callbacks) = world.get_mut::<KeyCallbacks>(handle.entity) {
        callbacks.on_release = Some(callback);
    }
}

fn key_state<'w>(world: &'w World, name: &str) -> Result<&'w KeyState, EngineError> {
    world
        .get_resource::<KeyRegistry>()
        .and_then(|registry| registry.get(name))
        .and_then(|entity| world.get::<KeyState>(entity))
        .ok_or_else(|| EngineError::UnregisteredKey(name.to_string()))
}

/// Whether the tracked key `name` is currently down.
pub fn key_is_down(world: &World, name: &str) -> Result<bool, EngineError> {
    key_state(world, name).map(KeyState::is_down)
}

/// Whether the tracked key `name` is currently up.
pub fn key_is_up(world: &World, name: &str) -> Result<bool, EngineError> {
    key_state(world, name).map(KeyState::is_up)
}

fn handle_state(world: &World, handle: KeyHandle) -> Result<&KeyState, EngineError> {
    world
        .get::<KeyState>(handle.entity)
        .ok_or_else(|| EngineError::UnregisteredKey(format!("{:?}", handle.entity)))
}

/// Whether the key behind `handle` is down.
///
/// Fails once the handle was replaced by registering its name again.
pub fn handle_is_down(world: &World, handle: KeyHandle) -> Result<bool, EngineError> {
    handle_state(world, handle).map(KeyState::is_down)
}

/// Whether the key behind `handle` is up.
pub fn handle_is_up(world: &World, handle: KeyHandle) -> Result<bool, EngineError> {
    handle_state(world, handle).map(KeyState::is_up)
}

/// Deliver one platform keyboard event to every key listener.
///
/// Returns `true` when a tracked key claimed the event, meaning the platform
/// default action must be skipped.
pub fn dispatch_key_event(world: &mut World, event: &KeyboardEvent) -> bool {
    world.init_resource::<PreventedDefaults>();
    match event.kind {
        KeyEventKind::Down => world.trigger(KeyDownEvent {
            key: event.key.clone(),
        }),
        KeyEventKind::Up => world.trigger(KeyUpEvent {
            key: event.key.clone(),
        }),
    }
    world.flush();
    let prevented = world.resource_mut::<PreventedDefaults>().take(&event.key);
    debug!(
        "Dispatched {:?} {:?} (default prevented: {})",
        event.kind, event.key, prevented
    );
    prevented
}

/// Dispatch `event` and return the default action the platform should run.
///
/// Only unclaimed key-down events have a default action.
pub fn dispatch_with_defaults(world: &mut World, event: &KeyboardEvent) -> Option<DefaultKeyAction> {
    let prevented = dispatch_key_event(world, event);
    if prevented || event.kind != KeyEventKind::Down {
        return None;
    }
    world
        .get_resource::<KeyDefaults>()
        .and_then(|defaults| defaults.get(&event.key))
}
