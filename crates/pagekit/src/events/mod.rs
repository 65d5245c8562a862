// ABOUTME: Keyboard event model and key-code normalization.
// ABOUTME: extract_key_code hides the event/ambient-event and key_code/which fallbacks behind one function.

//! Key events.
//!
//! Hosts do not agree on where the key code of a key press lives. Some pass
//! the event to the handler, others only expose it as an ambient
//! "current event"; some fill `key_code`, others `which`. [`extract_key_code`]
//! resolves all of that in one place with a fixed precedence:
//!
//! 1. the event handed to the handler, otherwise the ambient event;
//! 2. within that event, `key_code` when present and non-zero, otherwise `which`.

pub mod bindings;

use serde::{Deserialize, Serialize};

/// Key code reported for the Enter key.
pub const ENTER_KEY_CODE: u32 = 13;

/// A single key press as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key_code: Option<u32>,
    pub which: Option<u32>,
}

impl KeyEvent {
    /// Event carrying `code` in `key_code`.
    pub fn key_code(code: u32) -> Self {
        Self {
            key_code: Some(code),
            which: None,
        }
    }

    /// Event carrying `code` only in `which`.
    pub fn which(code: u32) -> Self {
        Self {
            key_code: None,
            which: Some(code),
        }
    }

    /// The code of this event, preferring a non-zero `key_code` over `which`.
    pub fn code(&self) -> Option<u32> {
        self.key_code.filter(|c| *c != 0).or(self.which)
    }
}

/// What the host should do after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    /// Keep the default action.
    Continue,
    /// Suppress the default action.
    PreventDefault,
}

impl EventFlow {
    pub fn is_default_prevented(self) -> bool {
        self == EventFlow::PreventDefault
    }
}

/// Resolves the key code of a key press.
///
/// `event` is what the handler received; `ambient` is the host's current
/// event, consulted only when `event` is absent.
pub fn extract_key_code(event: Option<&KeyEvent>, ambient: Option<&KeyEvent>) -> Option<u32> {
    event.or(ambient)?.code()
}

/// True if the resolved key code is Enter.
pub fn is_enter(event: Option<&KeyEvent>, ambient: Option<&KeyEvent>) -> bool {
    extract_key_code(event, ambient) == Some(ENTER_KEY_CODE)
}
