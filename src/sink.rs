//! Outbound interface to the widgets that actually draw things.
//!
//! The core never touches a window. It tells a [`RenderSink`] what changed
//! and the embedding frontend turns that into text-view, nick-list and
//! input-box updates.

use crate::format::StyledRun;
use crate::roster::{RosterCounts, RosterEntry};

/// Receives presentation updates for the displayed conversation.
///
/// Calls only ever concern the conversation currently bound to the viewport.
pub trait RenderSink {
    /// New runs at the end of the displayed document.
    fn render_append(&mut self, runs: &[StyledRun]);

    /// Replace the whole displayed document.
    fn render_replace_all(&mut self, runs: &[StyledRun]);

    /// Replace the nick list and its summary counts.
    fn roster_update(&mut self, entries: &[RosterEntry], counts: &RosterCounts);

    /// Replace the input line's content.
    fn input_line_set(&mut self, text: &str);

    /// Replace the topic bar.
    fn topic_set(&mut self, _topic: &str) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render_append(&mut self, runs: &[StyledRun]) {
        (**self).render_append(runs);
    }

    fn render_replace_all(&mut self, runs: &[StyledRun]) {
        (**self).render_replace_all(runs);
    }

    fn roster_update(&mut self, entries: &[RosterEntry], counts: &RosterCounts) {
        (**self).roster_update(entries, counts);
    }

    fn input_line_set(&mut self, text: &str) {
        (**self).input_line_set(text);
    }

    fn topic_set(&mut self, topic: &str) {
        (**self).topic_set(topic);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn render_append(&mut self, runs: &[StyledRun]) {
        (**self).render_append(runs);
    }

    fn render_replace_all(&mut self, runs: &[StyledRun]) {
        (**self).render_replace_all(runs);
    }

    fn roster_update(&mut self, entries: &[RosterEntry], counts: &RosterCounts) {
        (**self).roster_update(entries, counts);
    }

    fn input_line_set(&mut self, text: &str) {
        (**self).input_line_set(text);
    }

    fn topic_set(&mut self, topic: &str) {
        (**self).topic_set(topic);
    }
}

/// A sink that discards everything, for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render_append(&mut self, _runs: &[StyledRun]) {}

    fn render_replace_all(&mut self, _runs: &[StyledRun]) {}

    fn roster_update(&mut self, _entries: &[RosterEntry], _counts: &RosterCounts) {}

    fn input_line_set(&mut self, _text: &str) {}
}
