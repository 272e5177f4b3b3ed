//! Styled text runs.

use super::palette::Palette;
use super::style::{ResolvedStyle, StyleState};

/// A span of text sharing one style.
///
/// Runs are immutable once compiled; a document only ever appends them or
/// drops them all.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledRun {
    text: String,
    style: StyleState,
    resolved: ResolvedStyle,
}

impl StyledRun {
    /// Create a run, resolving `style` against `palette`.
    #[must_use]
    pub fn new(text: impl Into<String>, style: StyleState, palette: &Palette) -> Self {
        Self {
            text: text.into(),
            resolved: style.resolve(palette),
            style,
        }
    }

    /// An unformatted run, for lines the client generates itself.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleState::default(), &Palette::mirc())
    }

    /// The visible text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The formatting state the run was flushed with.
    #[must_use]
    pub fn style(&self) -> &StyleState {
        &self.style
    }

    /// Colors and font as they should be drawn.
    #[must_use]
    pub fn resolved(&self) -> &ResolvedStyle {
        &self.resolved
    }
}
