//! Append-only styled text buffer.

use crate::format::StyledRun;

/// The scrollback of one conversation.
///
/// Runs are only ever appended or dropped all at once, so a sink that has
/// seen the first `n` runs can stay in sync with appends alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    runs: Vec<StyledRun>,
    marker: usize,
}

impl Document {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append runs. Cost is proportional to `runs.len()`.
    pub fn append<I>(&mut self, runs: I)
    where
        I: IntoIterator<Item = StyledRun>,
    {
        self.runs.extend(runs);
    }

    /// Drop every run and reset the marker.
    pub fn clear(&mut self) {
        self.runs.clear();
        self.marker = 0;
    }

    /// Read-only view of every run.
    #[must_use]
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Runs appended after the marker.
    #[must_use]
    pub fn since_marker(&self) -> &[StyledRun] {
        &self.runs[self.marker..]
    }

    /// Number of runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// True if the document holds no runs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Place the marker line after the last run.
    pub fn set_marker(&mut self) {
        self.marker = self.runs.len();
    }

    /// Run index the marker line sits before.
    #[must_use]
    pub fn marker_offset(&self) -> usize {
        self.marker
    }
}
