//! Formatting state and its resolution into displayable colors.

use super::palette::{Palette, Rgb, PALETTE_SIZE};

/// Formatting attributes in effect at some point of a line.
///
/// The default value means "no formatting".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleState {
    /// Foreground palette index, always below 16.
    pub fg: Option<u8>,
    /// Background palette index, always below 16.
    pub bg: Option<u8>,
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Struck-through text.
    pub strikethrough: bool,
    /// Foreground and background swapped.
    pub reverse: bool,
}

impl StyleState {
    /// Clear every attribute.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set the foreground, wrapping the index into the palette.
    pub fn set_fg(&mut self, index: u8) {
        self.fg = Some(wrap(index));
    }

    /// Set the background, wrapping the index into the palette.
    pub fn set_bg(&mut self, index: u8) {
        self.bg = Some(wrap(index));
    }

    /// Drop both colors, keeping the other attributes.
    pub fn clear_colors(&mut self) {
        self.fg = None;
        self.bg = None;
    }

    /// True when no attribute is set.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Compute the displayable style against `palette`.
    #[must_use]
    pub fn resolve(&self, palette: &Palette) -> ResolvedStyle {
        let color = |index: Option<u8>| index.map(|i| palette.get(usize::from(i)));

        let (fg, bg) = if self.reverse {
            (
                color(self.bg).unwrap_or_else(|| palette.inverted_fg()),
                Some(color(self.fg).unwrap_or_else(|| palette.default_fg())),
            )
        } else {
            (
                color(self.fg).unwrap_or_else(|| palette.default_fg()),
                color(self.bg),
            )
        };

        ResolvedStyle {
            fg,
            bg,
            font: FontStyle::new(self.bold, self.italic),
            underline: self.underline,
            strikethrough: self.strikethrough,
        }
    }
}

#[inline]
fn wrap(index: u8) -> u8 {
    // PALETTE_SIZE is 16, so the result always fits.
    index % PALETTE_SIZE as u8
}

/// Font weight and slant of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontStyle {
    /// Neither bold nor italic.
    #[default]
    Regular,
    /// Bold only.
    Bold,
    /// Italic only.
    Italic,
    /// Bold and italic together.
    BoldItalic,
}

impl FontStyle {
    /// Combine the two flags into one font variant.
    #[must_use]
    pub fn new(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Self::Regular,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (true, true) => Self::BoldItalic,
        }
    }

    /// Whether the font is bold.
    #[must_use]
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Whether the font is italic.
    #[must_use]
    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

/// Concrete style handed to the rendering sink, with reverse already applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedStyle {
    /// Text color.
    pub fg: Rgb,
    /// Background color, `None` for no background.
    pub bg: Option<Rgb>,
    /// Font variant.
    pub font: FontStyle,
    /// Underlined text.
    pub underline: bool,
    /// Struck-through text.
    pub strikethrough: bool,
}
