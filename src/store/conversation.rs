//! One open conversation: a channel, query or server tab.

use std::fmt;

use super::document::Document;
use crate::roster::Roster;

/// Stable identity of a conversation, issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversationId(pub u64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ConversationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// What a conversation is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConversationKind {
    /// The server's own status tab.
    Server,
    /// A channel.
    Channel,
    /// A private conversation with one nick.
    Query,
}

/// State owned by one conversation. Dropped together when it closes.
#[derive(Clone, Debug)]
pub struct Conversation {
    id: ConversationId,
    kind: ConversationKind,
    name: String,
    pub(crate) document: Document,
    pub(crate) roster: Roster,
    pub(crate) draft_input: String,
    pub(crate) topic: String,
    /// Set once the conversation has been pushed to the sinks at least once.
    pub(crate) attached: bool,
}

impl Conversation {
    /// A fresh, never-displayed conversation.
    pub fn new(id: ConversationId, kind: ConversationKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            document: Document::new(),
            roster: Roster::new(),
            draft_input: String::new(),
            topic: String::new(),
            attached: false,
        }
    }

    /// Identity.
    #[must_use]
    pub fn id(&self) -> ConversationId {
        self.id
    }

    /// Kind of tab.
    #[must_use]
    pub fn kind(&self) -> ConversationKind {
        self.kind
    }

    /// Channel, nick or server name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scrollback.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Member list.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Unsent input saved while the conversation was not displayed.
    #[must_use]
    pub fn draft_input(&self) -> &str {
        &self.draft_input
    }

    /// Topic line.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Whether the conversation has ever been bound to the viewport.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
