#![forbid(unsafe_code)]

//! Keyed listener registries for state-change notifications.
//!
//! Each panel owns two independent registries: one fired synchronously
//! when the display state is set, one fired when the host reports the
//! visual transition finished. Subscribers are addressed by an opaque
//! string key so they can be removed later; keys can be supplied by the
//! caller or auto-generated.
//!
//! # Invariants
//!
//! 1. Keys are unique within one registry; subscribing under an existing
//!    key replaces the previous callback.
//! 2. Auto-generated keys never collide with keys already present.
//! 3. `notify_all` invokes every currently subscribed callback exactly
//!    once with the same `(previous, current)` pair; iteration order is
//!    unspecified.
//! 4. Unsubscribing an absent key is a no-op.

use ahash::AHashMap;
use slideout_core::DisplayState;

/// Opaque handle addressing one subscribed callback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenerKey(String);

impl ListenerKey {
    /// Create a key from a caller-chosen tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The underlying tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListenerKey {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

type StateCallback = Box<dyn FnMut(DisplayState, DisplayState)>;

/// A keyed fan-out registry of `(previous, current)` callbacks.
///
/// One instance per concern per widget; owned by the widget and dropped
/// with it. No global registry exists.
pub struct StateListeners {
    entries: AHashMap<ListenerKey, StateCallback>,
    next_auto: u64,
}

impl StateListeners {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
            next_auto: 0,
        }
    }

    /// Subscribe under an auto-generated unique key.
    ///
    /// Returns the key for later removal.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(DisplayState, DisplayState) + 'static,
    ) -> ListenerKey {
        let key = loop {
            let candidate = ListenerKey(format!("listener-{}", self.next_auto));
            self.next_auto += 1;
            if !self.entries.contains_key(&candidate) {
                break candidate;
            }
        };
        self.entries.insert(key.clone(), Box::new(callback));
        key
    }

    /// Subscribe under a caller-chosen key, replacing any callback
    /// already stored there.
    pub fn subscribe_keyed(
        &mut self,
        key: ListenerKey,
        callback: impl FnMut(DisplayState, DisplayState) + 'static,
    ) {
        self.entries.insert(key, Box::new(callback));
    }

    /// Remove the callback under `key`.
    ///
    /// Returns `true` if something was removed; absent keys are a no-op.
    pub fn unsubscribe(&mut self, key: &ListenerKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Invoke every subscribed callback with the transition pair.
    pub fn notify_all(&mut self, previous: DisplayState, current: DisplayState) {
        for callback in self.entries.values_mut() {
            callback(previous, current);
        }
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StateListeners {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateListeners")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
