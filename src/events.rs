//! Global pointer listener bookkeeping.
//!
//! Widgets subscribe when they mount and unsubscribe when they are torn down.
//! The host only delivers an event kind to the dismissal logic while a
//! subscription for it exists.

use std::collections::BTreeMap;

/// Kinds of global pointer listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer-down anywhere; used to dismiss on outside interaction
    OutsidePointerDown,
}

/// Identifier returned by [`PointerListeners::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Registry of active global listeners
#[derive(Debug, Clone, Default)]
pub struct PointerListeners {
    next_id: u64,
    active: BTreeMap<ListenerId, ListenerKind>,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active.insert(id, kind);
        tracing::debug!(?kind, id = id.0, "listener subscribed");
        id
    }

    /// Remove a subscription. Returns false if it was not active.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let removed = self.active.remove(&id);
        if let Some(kind) = removed {
            tracing::debug!(?kind, id = id.0, "listener unsubscribed");
        }
        removed.is_some()
    }

    pub fn is_subscribed(&self, kind: ListenerKind) -> bool {
        self.active.values().any(|k| *k == kind)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
