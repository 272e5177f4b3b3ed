//! The session controller: the one context that owns display state.
//!
//! Every conversation's document, roster and draft, the active binding and
//! the completion state live here. Backend events and input-box events come
//! in through `on_*` methods (or queued [`Event`]s); updates for the
//! displayed conversation go out through the [`RenderSink`].
//!
//! # Example
//!
//! ```
//! use slirc_view::session::SessionController;
//! use slirc_view::sink::NullSink;
//! use slirc_view::store::{ConversationId, ConversationKind};
//!
//! let mut session = SessionController::with_defaults(NullSink);
//! let rust = ConversationId(1);
//!
//! session.open(rust, ConversationKind::Channel, "#rust", "libera");
//! session.on_activate(rust);
//! session.on_roster_insert(rust, "alice", Some('@'));
//! session.on_text(rust, b"<\x02alice\x02> hi");
//!
//! let done = session.on_completion_request(rust, "al", 2).unwrap();
//! assert_eq!(done.line, "alice: ");
//! ```

use tracing::debug;

use crate::completion::{Completed, CompletionEngine};
use crate::config::ViewConfig;
use crate::error::ConfigError;
use crate::event::Event;
use crate::format::Scanner;
use crate::roster::{PrefixMap, Roster};
use crate::sink::RenderSink;
use crate::store::{ConversationId, ConversationKind, ConversationStore};
use crate::tree::{ConversationNode, NetworkTree};
use crate::viewport::{Activation, Viewport};

/// Owns every conversation and the binding between them and the display.
#[derive(Debug)]
pub struct SessionController<S> {
    config: ViewConfig,
    scanner: Scanner,
    store: ConversationStore,
    viewport: Viewport,
    tree: NetworkTree,
    completion: CompletionEngine,
    input_line: String,
    sink: S,
}

impl<S: RenderSink> SessionController<S> {
    /// Create a controller with validated settings.
    pub fn new(config: ViewConfig, sink: S) -> Result<Self, ConfigError> {
        let scanner = config.scanner()?;
        Ok(Self {
            config,
            scanner,
            store: ConversationStore::new(),
            viewport: Viewport::new(),
            tree: NetworkTree::new(),
            completion: CompletionEngine::new(),
            input_line: String::new(),
            sink,
        })
    }

    /// Create a controller with the default settings.
    pub fn with_defaults(sink: S) -> Self {
        Self {
            config: ViewConfig::default(),
            scanner: Scanner::new(),
            store: ConversationStore::new(),
            viewport: Viewport::new(),
            tree: NetworkTree::new(),
            completion: CompletionEngine::new(),
            input_line: String::new(),
            sink,
        }
    }

    /// Settings in use.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Every open conversation.
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// The server/conversation listing.
    pub fn tree(&self) -> &NetworkTree {
        &self.tree
    }

    /// The conversation on screen, if any.
    pub fn active(&self) -> Option<ConversationId> {
        self.viewport.active()
    }

    /// The conversation the backend last labelled as current.
    pub fn current(&self) -> Option<ConversationId> {
        self.viewport.current()
    }

    /// The input line as last reported or set.
    pub fn input_line(&self) -> &str {
        &self.input_line
    }

    /// Completion in progress, if any.
    pub fn completion(&self) -> &CompletionEngine {
        &self.completion
    }

    /// The output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The output sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the controller, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Apply a queued event.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Open {
                id,
                kind,
                name,
                server,
                focus,
            } => {
                self.open(id, kind, &name, &server);
                if focus {
                    self.on_activate(id);
                }
            }
            Event::Close(id) => self.close(id),
            Event::Text(id, raw) => self.on_text(id, &raw),
            Event::Clear(id) => self.on_clear(id),
            Event::Topic(id, topic) => self.on_topic(id, &topic),
            Event::RosterInsert(id, nick, prefix) => self.on_roster_insert(id, &nick, prefix),
            Event::RosterRemove(id, nick) => self.on_roster_remove(id, &nick),
            Event::RosterRename(id, old, new) => self.on_roster_rename(id, &old, &new),
            Event::RosterRehash(id, members) => self.on_roster_rehash(id, members),
            Event::RosterClear(id) => self.on_roster_clear(id),
            Event::RosterPrefixes(id, value) => self.on_roster_prefixes(id, &value),
            Event::Activate(id) => self.on_activate(id),
            Event::Marker(id) => self.set_marker(id),
        }
    }

    /// Register a new conversation under `server`.
    pub fn open(&mut self, id: ConversationId, kind: ConversationKind, name: &str, server: &str) {
        if self.store.open(id, kind, name) {
            self.tree.add_conversation(
                server,
                ConversationNode {
                    id,
                    kind,
                    name: name.to_string(),
                },
            );
        }
    }

    /// Drop a conversation and everything it owns.
    pub fn close(&mut self, id: ConversationId) {
        if self.store.close(id).is_none() {
            return;
        }
        self.tree.remove_conversation(id);
        let displayed = self.viewport.is_active(id);
        self.viewport.release(id);
        if displayed {
            self.completion.invalidate();
            self.sink.render_replace_all(&[]);
            self.sink.topic_set("");
            self.sink.roster_update(&[], &Default::default());
        }
    }

    /// Record `id` as current without displaying it, as backends do while
    /// setting up a new tab. Whatever is on screen stays bound, and the next
    /// [`on_activate`](Self::on_activate) for `id` performs a full bind.
    pub fn note_current(&mut self, id: ConversationId) {
        self.viewport.note_current(id);
    }

    /// Compile raw text and append it to the conversation.
    pub fn on_text(&mut self, id: ConversationId, raw: &[u8]) {
        let runs = self.scanner.compile(raw);
        if runs.is_empty() {
            return;
        }
        let displayed = self.is_displayed(id);
        if let Some(appended) = self.store.append(id, runs) {
            if displayed {
                self.sink.render_append(appended);
            }
        }
    }

    /// Empty the conversation's scrollback.
    pub fn on_clear(&mut self, id: ConversationId) {
        if self.store.clear(id) && self.is_displayed(id) {
            self.sink.render_replace_all(&[]);
        }
    }

    /// Replace the conversation's topic.
    pub fn on_topic(&mut self, id: ConversationId, topic: &str) {
        if self.store.set_topic(id, topic) && self.is_displayed(id) {
            self.sink.topic_set(topic);
        }
    }

    /// Add a member or update its status.
    pub fn on_roster_insert(&mut self, id: ConversationId, nick: &str, prefix: Option<char>) {
        self.update_roster(id, |roster| roster.insert(nick, prefix));
    }

    /// Remove exactly the member named `nick`.
    pub fn on_roster_remove(&mut self, id: ConversationId, nick: &str) {
        self.update_roster(id, |roster| {
            roster.remove(nick);
        });
    }

    /// Rename a member in place.
    pub fn on_roster_rename(&mut self, id: ConversationId, old: &str, new: &str) {
        self.update_roster(id, |roster| {
            roster.rename(old, new);
        });
    }

    /// Replace the whole member list.
    pub fn on_roster_rehash(&mut self, id: ConversationId, members: Vec<(String, Option<char>)>) {
        self.update_roster(id, |roster| roster.rehash(members));
    }

    /// Empty the member list.
    pub fn on_roster_clear(&mut self, id: ConversationId) {
        self.update_roster(id, Roster::clear);
    }

    /// Apply a network's `PREFIX` token to the conversation's roster.
    pub fn on_roster_prefixes(&mut self, id: ConversationId, value: &str) {
        let map = PrefixMap::from_isupport(value);
        self.update_roster(id, |roster| roster.set_prefix_map(map));
    }

    /// Display `id`, saving the outgoing input line as its conversation's
    /// draft and restoring the target's.
    pub fn on_activate(&mut self, id: ConversationId) {
        let result = self
            .viewport
            .activate(id, &mut self.store, &mut self.sink, &self.input_line);
        if let Activation::Bound { .. } = result {
            self.completion.invalidate();
            if let Some(conversation) = self.store.get(id) {
                self.input_line = conversation.draft_input().to_string();
            }
        }
    }

    /// The user edited the input line.
    pub fn on_input_edited(&mut self, text: &str) {
        self.input_line = text.to_string();
        self.completion.invalidate();
    }

    /// Complete the nick before `cursor` (in characters), or cycle to the
    /// next candidate when nothing changed since the previous request.
    pub fn on_completion_request(
        &mut self,
        id: ConversationId,
        line: &str,
        cursor: usize,
    ) -> Option<Completed> {
        if !self.viewport.is_active(id) {
            debug!(%id, "completion for inactive conversation");
            return None;
        }
        let roster = &self.store.get(id)?.roster;
        let completed = self
            .completion
            .request(line, cursor, roster, &self.config.completion_suffix)?
            .clone();

        self.input_line.clone_from(&completed.line);
        self.sink.input_line_set(&completed.line);
        Some(completed)
    }

    /// Place the marker line at the end of the conversation's scrollback.
    pub fn set_marker(&mut self, id: ConversationId) {
        self.store.set_marker(id);
    }

    fn is_displayed(&self, id: ConversationId) -> bool {
        self.viewport.is_active(id)
    }

    fn update_roster<F>(&mut self, id: ConversationId, f: F)
    where
        F: FnOnce(&mut Roster),
    {
        let displayed = self.is_displayed(id);
        let Some(conversation) = self.store.get_mut(id) else {
            return;
        };
        f(&mut conversation.roster);
        if displayed {
            let roster = &conversation.roster;
            self.sink.roster_update(&roster.decorate(), &roster.counts());
        }
    }
}
