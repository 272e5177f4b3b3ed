//! Cross-context event delivery.
//!
//! The backend usually runs on a network task while the controller lives on
//! the UI context. [`EventSender`] lets the backend queue events without
//! blocking; the owning context applies them with
//! [`SessionController::drain`] or [`SessionController::run`].
//!
//! All senders feed one FIFO channel, so events for a single conversation
//! are applied in the order they were sent. Senders cloned onto different
//! tasks race each other, so no order is promised between them.
//!
//! # Example
//!
//! ```
//! use slirc_view::dispatch;
//! use slirc_view::session::SessionController;
//! use slirc_view::sink::NullSink;
//! use slirc_view::store::{ConversationId, ConversationKind};
//!
//! let (tx, mut rx) = dispatch::channel();
//! let mut session = SessionController::with_defaults(NullSink);
//! let id = ConversationId(7);
//!
//! tx.open(id, ConversationKind::Channel, "#rust", "libera", true).unwrap();
//! tx.text(id, b"hello").unwrap();
//!
//! assert_eq!(session.drain(&mut rx), 2);
//! assert_eq!(session.store().snapshot(id).unwrap().len(), 1);
//! ```

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::DispatchError;
use crate::event::Event;
use crate::session::SessionController;
use crate::sink::RenderSink;
use crate::store::{ConversationId, ConversationKind};

/// Create a connected sender/receiver pair.
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, EventReceiver { rx })
}

/// Queues events for the owning context. Cheap to clone, never blocks.
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<Event>,
}

impl EventSender {
    /// Queue any event.
    pub fn send(&self, event: Event) -> Result<(), DispatchError> {
        self.tx.send(event).map_err(|_| DispatchError::Closed)
    }

    /// Queue the creation of a conversation.
    pub fn open(
        &self,
        id: ConversationId,
        kind: ConversationKind,
        name: &str,
        server: &str,
        focus: bool,
    ) -> Result<(), DispatchError> {
        self.send(Event::Open {
            id,
            kind,
            name: name.to_string(),
            server: server.to_string(),
            focus,
        })
    }

    /// Queue a conversation's closing.
    pub fn close(&self, id: ConversationId) -> Result<(), DispatchError> {
        self.send(Event::Close(id))
    }

    /// Queue raw message text.
    pub fn text(&self, id: ConversationId, raw: impl Into<Vec<u8>>) -> Result<(), DispatchError> {
        self.send(Event::Text(id, raw.into()))
    }

    /// Queue a scrollback clear.
    pub fn clear(&self, id: ConversationId) -> Result<(), DispatchError> {
        self.send(Event::Clear(id))
    }

    /// Queue a topic change.
    pub fn topic(&self, id: ConversationId, topic: &str) -> Result<(), DispatchError> {
        self.send(Event::Topic(id, topic.to_string()))
    }

    /// Queue a member insert.
    pub fn roster_insert(
        &self,
        id: ConversationId,
        nick: &str,
        prefix: Option<char>,
    ) -> Result<(), DispatchError> {
        self.send(Event::RosterInsert(id, nick.to_string(), prefix))
    }

    /// Queue a member removal.
    pub fn roster_remove(&self, id: ConversationId, nick: &str) -> Result<(), DispatchError> {
        self.send(Event::RosterRemove(id, nick.to_string()))
    }

    /// Queue a nick change.
    pub fn roster_rename(
        &self,
        id: ConversationId,
        old: &str,
        new: &str,
    ) -> Result<(), DispatchError> {
        self.send(Event::RosterRename(id, old.to_string(), new.to_string()))
    }

    /// Queue a full member list.
    pub fn roster_rehash(
        &self,
        id: ConversationId,
        members: Vec<(String, Option<char>)>,
    ) -> Result<(), DispatchError> {
        self.send(Event::RosterRehash(id, members))
    }

    /// Queue a member list clear.
    pub fn roster_clear(&self, id: ConversationId) -> Result<(), DispatchError> {
        self.send(Event::RosterClear(id))
    }

    /// Queue an activation request.
    pub fn activate(&self, id: ConversationId) -> Result<(), DispatchError> {
        self.send(Event::Activate(id))
    }

    /// True once the receiving side has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// The owning context's end of the queue.
#[derive(Debug)]
pub struct EventReceiver {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventReceiver {
    /// Take the next event if one is ready.
    pub fn try_next(&mut self) -> Option<Event> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next event. `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl<S: RenderSink> SessionController<S> {
    /// Apply every event already queued, without waiting. Returns how many
    /// were applied.
    pub fn drain(&mut self, rx: &mut EventReceiver) -> usize {
        let mut applied = 0;
        while let Some(event) = rx.try_next() {
            self.handle(event);
            applied += 1;
        }
        applied
    }

    /// Apply events as they arrive until every sender is dropped.
    pub async fn run(&mut self, mut rx: EventReceiver) {
        while let Some(event) = rx.next().await {
            self.handle(event);
        }
        debug!("event queue closed");
    }
}
