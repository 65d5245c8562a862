// ABOUTME: Per-target key-press handler slots and the Enter-key binder.
// ABOUTME: Registering a handler replaces the previous one for that target; handlers never suppress defaults.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use super::{extract_key_code, EventFlow, KeyEvent, ENTER_KEY_CODE};

/// A key-press handler. Receives the event the host passed, if any, and the ambient event.
pub type KeyPressHandler = Box<dyn FnMut(Option<&KeyEvent>, Option<&KeyEvent>) -> EventFlow>;

/// Key-press handlers keyed by target, one slot per target.
///
/// `K` identifies an element, e.g. a [`dom_query::NodeId`] or an element id string.
pub struct KeyBindings<K> {
    handlers: HashMap<K, KeyPressHandler>,
    ambient: Option<KeyEvent>,
}

impl<K> Default for KeyBindings<K> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
            ambient: None,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for KeyBindings<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBindings")
            .field("targets", &self.handlers.keys().collect::<Vec<_>>())
            .field("ambient", &self.ambient)
            .finish()
    }
}

impl<K: Eq + Hash + fmt::Debug> KeyBindings<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handler` as the key-press handler of `target`, replacing any previous one.
    pub fn on_key_press<F>(&mut self, target: K, handler: F)
    where
        F: FnMut(Option<&KeyEvent>, Option<&KeyEvent>) -> EventFlow + 'static,
    {
        debug!(?target, "installing key-press handler");
        if let Some(_previous) = self.handlers.insert(target, Box::new(handler)) {
            trace!("replaced existing key-press handler");
        }
    }

    /// Calls `callback` whenever Enter is pressed on `target`.
    ///
    /// Replaces whatever key-press handler `target` had. The installed handler
    /// always lets the default action proceed.
    pub fn register_enter<F>(&mut self, target: K, mut callback: F)
    where
        F: FnMut() + 'static,
    {
        self.on_key_press(target, move |event, ambient| {
            if extract_key_code(event, ambient) == Some(ENTER_KEY_CODE) {
                callback();
            }
            EventFlow::Continue
        });
    }

    /// Removes the handler of `target`. Returns true if one was installed.
    pub fn unbind(&mut self, target: &K) -> bool {
        self.handlers.remove(target).is_some()
    }

    pub fn is_bound(&self, target: &K) -> bool {
        self.handlers.contains_key(target)
    }

    /// Sets the host's current event, used when a dispatch carries no event of its own.
    pub fn set_ambient_event(&mut self, event: Option<KeyEvent>) {
        self.ambient = event;
    }

    /// Delivers a key press to `target`'s handler.
    ///
    /// Targets without a handler keep the default action.
    pub fn dispatch_key_press(&mut self, target: &K, event: Option<&KeyEvent>) -> EventFlow {
        let ambient = self.ambient;
        match self.handlers.get_mut(target) {
            Some(handler) => {
                let flow = handler(event, ambient.as_ref());
                trace!(?target, ?flow, "dispatched key press");
                flow
            }
            None => EventFlow::Continue,
        }
    }
}
