//! Inbound backend events in queueable form.

use crate::store::{ConversationId, ConversationKind};

/// Something the backend reports about a conversation.
///
/// Each variant mirrors one `SessionController::on_*` method and is applied
/// by [`SessionController::handle`](crate::session::SessionController::handle).
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// A conversation was created.
    Open {
        /// New conversation id.
        id: ConversationId,
        /// Kind of tab.
        kind: ConversationKind,
        /// Channel, nick or server name.
        name: String,
        /// Server it belongs to, for the listing.
        server: String,
        /// Display it immediately.
        focus: bool,
    },
    /// A conversation was closed.
    Close(ConversationId),
    /// Raw message text to compile and append.
    Text(ConversationId, Vec<u8>),
    /// The scrollback was cleared.
    Clear(ConversationId),
    /// The topic changed.
    Topic(ConversationId, String),
    /// A member joined or changed status.
    RosterInsert(ConversationId, String, Option<char>),
    /// A member left.
    RosterRemove(ConversationId, String),
    /// A member changed nick.
    RosterRename(ConversationId, String, String),
    /// The whole member list was replaced.
    RosterRehash(ConversationId, Vec<(String, Option<char>)>),
    /// The member list was emptied.
    RosterClear(ConversationId),
    /// The network announced its `PREFIX` token.
    RosterPrefixes(ConversationId, String),
    /// The conversation should become visible.
    Activate(ConversationId),
    /// Place the marker line at the end of the scrollback.
    Marker(ConversationId),
}

impl Event {
    /// The conversation the event concerns.
    #[must_use]
    pub fn conversation(&self) -> ConversationId {
        match self {
            Event::Open { id, .. } => *id,
            Event::Close(id)
            | Event::Text(id, _)
            | Event::Clear(id)
            | Event::Topic(id, _)
            | Event::RosterInsert(id, _, _)
            | Event::RosterRemove(id, _)
            | Event::RosterRename(id, _, _)
            | Event::RosterRehash(id, _)
            | Event::RosterClear(id)
            | Event::RosterPrefixes(id, _)
            | Event::Activate(id)
            | Event::Marker(id) => *id,
        }
    }
}
