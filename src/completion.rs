//! Nick completion against a conversation's roster.
//!
//! The first request completes the word before the cursor to the first
//! matching nick; each further request with no edit in between cycles to
//! the next match, replacing exactly the text the previous step inserted.
//!
//! Candidates are the roster's nicks in roster insertion order (join order,
//! or `NAMES` order after a rehash) whose leading characters match the typed
//! word under RFC 1459 case folding (see [`crate::casemap`] for how letters
//! outside ASCII are folded).
//!
//! Cursor positions are counted in characters, not bytes.

use tracing::debug;

use crate::casemap::{irc_common_prefix_len, irc_starts_with};
use crate::roster::Roster;

/// Input line after a completion step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completed {
    /// The new input line.
    pub line: String,
    /// Cursor position in characters, just after the inserted separator.
    pub cursor: usize,
}

/// An in-progress completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionState {
    prefix: String,
    matches: Vec<String>,
    index: usize,
    token_start: usize,
    inserted_len: usize,
    separator: String,
    applied: Completed,
}

impl CompletionState {
    /// Start completing the word that ends at `cursor`.
    ///
    /// Returns `None`, creating no state, when there is no word before the
    /// cursor or no nick matches it. `suffix` follows a nick completed at the
    /// start of the line (before the usual single space).
    #[must_use]
    pub fn begin(line: &str, cursor: usize, roster: &Roster, suffix: &str) -> Option<Self> {
        let chars: Vec<char> = line.chars().collect();
        let cursor = cursor.min(chars.len());

        let mut token_start = cursor;
        while token_start > 0 && !chars[token_start - 1].is_whitespace() {
            token_start -= 1;
        }
        if token_start == cursor {
            return None;
        }

        let prefix: String = chars[token_start..cursor].iter().collect();
        let matches: Vec<String> = roster
            .nicks()
            .filter(|nick| irc_starts_with(nick, &prefix))
            .map(str::to_string)
            .collect();
        if matches.is_empty() {
            debug!(prefix, "no completion candidates");
            return None;
        }

        let separator = if token_start == 0 {
            format!("{} ", suffix)
        } else {
            " ".to_string()
        };

        let mut state = Self {
            prefix,
            matches,
            index: 0,
            token_start,
            inserted_len: cursor - token_start,
            separator,
            applied: Completed {
                line: String::new(),
                cursor: 0,
            },
        };
        state.apply(line);
        Some(state)
    }

    /// Advance to the next match, wrapping around, and rewrite `line`.
    pub fn cycle(&mut self, line: &str) -> &Completed {
        self.index = (self.index + 1) % self.matches.len();
        self.apply(line);
        &self.applied
    }

    /// The line and cursor produced by the latest step.
    #[must_use]
    pub fn applied(&self) -> &Completed {
        &self.applied
    }

    /// The word being completed, as typed.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Every candidate, in the order they are cycled through.
    #[must_use]
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Index of the candidate currently inserted.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Character offset where the completed word starts.
    #[must_use]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// The longest case-insensitive prefix shared by all candidates, taken
    /// from the first candidate.
    #[must_use]
    pub fn common_prefix(&self) -> &str {
        let first = &self.matches[0];
        let len = self
            .matches
            .iter()
            .skip(1)
            .map(|m| irc_common_prefix_len(first, m))
            .min()
            .unwrap_or_else(|| first.chars().count());
        &first[..byte_offset(first, len)]
    }

    fn apply(&mut self, line: &str) {
        let insert = format!("{}{}", self.matches[self.index], self.separator);
        let start = byte_offset(line, self.token_start);
        let end = byte_offset(line, self.token_start + self.inserted_len);

        let mut out = String::with_capacity(line.len() + insert.len());
        out.push_str(&line[..start]);
        out.push_str(&insert);
        out.push_str(&line[end..]);

        self.inserted_len = insert.chars().count();
        self.applied = Completed {
            line: out,
            cursor: self.token_start + self.inserted_len,
        };
    }
}

/// Completion for one input line, kept across repeated requests.
#[derive(Clone, Debug, Default)]
pub struct CompletionEngine {
    state: Option<CompletionState>,
}

impl CompletionEngine {
    /// An engine with no completion in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a completion request.
    ///
    /// If the line and cursor are exactly what the previous step produced,
    /// this cycles; otherwise it starts over. Returns `None` and leaves
    /// everything unchanged when there is nothing to complete.
    pub fn request(
        &mut self,
        line: &str,
        cursor: usize,
        roster: &Roster,
        suffix: &str,
    ) -> Option<&Completed> {
        let repeat = self
            .state
            .as_ref()
            .is_some_and(|s| s.applied.line == line && s.applied.cursor == cursor);
        if repeat {
            return self.state.as_mut().map(|s| s.cycle(line));
        }

        let state = CompletionState::begin(line, cursor, roster, suffix)?;
        Some(&self.state.insert(state).applied)
    }

    /// Drop any completion in progress.
    pub fn invalidate(&mut self) {
        self.state = None;
    }

    /// The completion in progress, if any.
    #[must_use]
    pub fn state(&self) -> Option<&CompletionState> {
        self.state.as_ref()
    }
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}
