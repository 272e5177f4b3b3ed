//! Which conversation the display currently shows.
//!
//! Binding is a swap of one id. The document itself never moves; the sink
//! gets a borrowed view of it, so switching costs the same for an empty
//! tab and one with a day of scrollback.

use tracing::debug;

use crate::sink::RenderSink;
use crate::store::{ConversationId, ConversationStore};

/// Result of [`Viewport::activate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The conversation was already bound and displayed; nothing happened.
    Unchanged,
    /// The conversation is now bound. `previous` is what was bound before.
    Bound {
        /// The outgoing conversation, if any.
        previous: Option<ConversationId>,
    },
    /// No such conversation.
    Unknown,
}

/// The display binding.
///
/// `bound` is the conversation whose state was last pushed to the sink, i.e.
/// what is on screen. `current` is the backend's notion of the current tab,
/// which may run ahead of `bound` while a new tab is being set up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    bound: Option<ConversationId>,
    current: Option<ConversationId>,
}

impl Viewport {
    /// A viewport with nothing bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The conversation on screen.
    #[must_use]
    pub fn active(&self) -> Option<ConversationId> {
        self.bound
    }

    /// The conversation the backend last labelled as current.
    #[must_use]
    pub fn current(&self) -> Option<ConversationId> {
        self.current
    }

    /// True if `id` is on screen.
    #[must_use]
    pub fn is_active(&self, id: ConversationId) -> bool {
        self.bound == Some(id)
    }

    /// Record `id` as current without pushing anything to the sinks.
    ///
    /// Backends do this while creating a tab, before asking for it to be
    /// shown. The conversation on screen stays bound until
    /// [`Viewport::activate`] swaps it out.
    pub fn note_current(&mut self, id: ConversationId) {
        self.current = Some(id);
    }

    /// Forget every reference to `id`.
    pub fn release(&mut self, id: ConversationId) {
        if self.bound == Some(id) {
            self.bound = None;
        }
        if self.current == Some(id) {
            self.current = None;
        }
    }

    /// Bind `id` and push its state to `sink`.
    ///
    /// `current_input` is the input line as it is now; it becomes the draft
    /// of the conversation being swapped out.
    pub fn activate<S>(
        &mut self,
        id: ConversationId,
        store: &mut ConversationStore,
        sink: &mut S,
        current_input: &str,
    ) -> Activation
    where
        S: RenderSink + ?Sized,
    {
        if !store.contains(id) {
            debug!(%id, "activate for unknown conversation");
            return Activation::Unknown;
        }
        self.current = Some(id);
        if self.bound == Some(id) {
            debug!(%id, "already active");
            return Activation::Unchanged;
        }

        let previous = self.bound.replace(id);
        if let Some(outgoing) = previous {
            if let Some(conversation) = store.get_mut(outgoing) {
                conversation.draft_input = current_input.to_string();
            }
        }

        let Some(target) = store.get_mut(id) else {
            return Activation::Unknown;
        };
        target.attached = true;
        sink.render_replace_all(target.document.runs());
        sink.topic_set(&target.topic);
        sink.roster_update(&target.roster.decorate(), &target.roster.counts());
        sink.input_line_set(&target.draft_input);

        debug!(%id, ?previous, "bound");
        Activation::Bound { previous }
    }
}
