//! Per-conversation document store.
//!
//! Every operation is keyed by [`ConversationId`]. An id that is unknown or
//! already closed turns the operation into a no-op: the backend may still
//! emit events for a conversation while tearing it down.

mod conversation;
mod document;

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::format::StyledRun;

pub use self::conversation::{Conversation, ConversationId, ConversationKind};
pub use self::document::Document;

/// Owns every open conversation.
#[derive(Clone, Debug, Default)]
pub struct ConversationStore {
    conversations: HashMap<ConversationId, Conversation>,
}

impl ConversationStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a conversation. Returns false, leaving the existing one
    /// untouched, if `id` is already open.
    pub fn open(&mut self, id: ConversationId, kind: ConversationKind, name: &str) -> bool {
        if self.conversations.contains_key(&id) {
            debug!(%id, name, "conversation already open");
            return false;
        }
        self.conversations
            .insert(id, Conversation::new(id, kind, name));
        true
    }

    /// Drop a conversation with its document and roster.
    pub fn close(&mut self, id: ConversationId) -> Option<Conversation> {
        let closed = self.conversations.remove(&id);
        if closed.is_none() {
            debug!(%id, "close for unknown conversation");
        }
        closed
    }

    /// Look a conversation up.
    #[must_use]
    pub fn get(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.get(&id)
    }

    /// Look a conversation up mutably. Absence is logged.
    pub fn get_mut(&mut self, id: ConversationId) -> Option<&mut Conversation> {
        let conversation = self.conversations.get_mut(&id);
        if conversation.is_none() {
            debug!(%id, "event for unknown conversation");
        }
        conversation
    }

    /// True if `id` is open.
    #[must_use]
    pub fn contains(&self, id: ConversationId) -> bool {
        self.conversations.contains_key(&id)
    }

    /// Number of open conversations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// True if nothing is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Open conversation ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = ConversationId> + '_ {
        self.conversations.keys().copied()
    }

    /// Append runs to a conversation's document and return the newly
    /// appended slice.
    pub fn append(&mut self, id: ConversationId, runs: Vec<StyledRun>) -> Option<&[StyledRun]> {
        let document = &mut self.get_mut(id)?.document;
        let start = document.len();
        trace!(%id, runs = runs.len(), "append");
        document.append(runs);
        Some(&document.runs()[start..])
    }

    /// Empty a conversation's document. Other conversations are untouched.
    pub fn clear(&mut self, id: ConversationId) -> bool {
        match self.get_mut(id) {
            Some(conversation) => {
                conversation.document.clear();
                true
            }
            None => false,
        }
    }

    /// Read-only view of a conversation's document.
    #[must_use]
    pub fn snapshot(&self, id: ConversationId) -> Option<&[StyledRun]> {
        self.get(id).map(|c| c.document.runs())
    }

    /// Replace a conversation's topic.
    pub fn set_topic(&mut self, id: ConversationId, topic: &str) -> bool {
        match self.get_mut(id) {
            Some(conversation) => {
                conversation.topic = topic.to_string();
                true
            }
            None => false,
        }
    }

    /// Place the marker line at the end of a conversation's document.
    pub fn set_marker(&mut self, id: ConversationId) -> bool {
        match self.get_mut(id) {
            Some(conversation) => {
                conversation.document.set_marker();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::compile;

    const A: ConversationId = ConversationId(1);
    const B: ConversationId = ConversationId(2);

    fn store() -> ConversationStore {
        let mut store = ConversationStore::new();
        store.open(A, ConversationKind::Channel, "#a");
        store.open(B, ConversationKind::Channel, "#b");
        store
    }

    #[test]
    fn test_append_returns_new_runs() {
        let mut store = store();
        store.append(A, compile(b"first"));
        let appended = store.append(A, compile(b"\x02second")).unwrap();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].text(), "second");
        assert_eq!(store.snapshot(A).unwrap().len(), 2);
    }

    #[test]
    fn test_clear_is_scoped() {
        let mut store = store();
        store.append(A, compile(b"a"));
        store.append(B, compile(b"b"));

        assert!(store.clear(A));
        assert!(store.snapshot(A).unwrap().is_empty());
        assert_eq!(store.snapshot(B).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = store();
        let ghost = ConversationId(99);
        assert!(store.append(ghost, compile(b"x")).is_none());
        assert!(!store.clear(ghost));
        assert!(store.snapshot(ghost).is_none());
        assert!(!store.set_topic(ghost, "t"));
        assert!(store.close(ghost).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_close_drops_state() {
        let mut store = store();
        store.append(A, compile(b"a"));
        let closed = store.close(A).unwrap();
        assert_eq!(closed.document().len(), 1);
        assert!(!store.contains(A));
        assert!(store.append(A, compile(b"late")).is_none());
    }

    #[test]
    fn test_open_twice_keeps_existing() {
        let mut store = store();
        store.append(A, compile(b"keep"));
        assert!(!store.open(A, ConversationKind::Query, "other"));
        assert_eq!(store.get(A).unwrap().name(), "#a");
        assert_eq!(store.snapshot(A).unwrap().len(), 1);
    }
}
