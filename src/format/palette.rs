//! The 16-entry mIRC color palette.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Number of entries in a palette. Color indices wrap modulo this value.
pub const PALETTE_SIZE: usize = 16;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `#rrggbb` (the leading `#` is optional).
impl FromStr for Rgb {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// The standard mIRC colors, in index order.
const MIRC: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0xff, 0xff, 0xff), // 0 white
    Rgb::new(0x00, 0x00, 0x00), // 1 black
    Rgb::new(0x00, 0x00, 0x7f), // 2 navy
    Rgb::new(0x00, 0x93, 0x00), // 3 green
    Rgb::new(0xff, 0x00, 0x00), // 4 red
    Rgb::new(0x7f, 0x00, 0x00), // 5 maroon
    Rgb::new(0x9c, 0x00, 0x9c), // 6 purple
    Rgb::new(0xfc, 0x7f, 0x00), // 7 orange
    Rgb::new(0xff, 0xff, 0x00), // 8 yellow
    Rgb::new(0x00, 0xfc, 0x00), // 9 light green
    Rgb::new(0x00, 0x93, 0x93), // 10 teal
    Rgb::new(0x00, 0xff, 0xff), // 11 cyan
    Rgb::new(0x00, 0x00, 0xfc), // 12 blue
    Rgb::new(0xff, 0x00, 0xff), // 13 pink
    Rgb::new(0x7f, 0x7f, 0x7f), // 14 grey
    Rgb::new(0xd2, 0xd2, 0xd2), // 15 light grey
];

/// A constant, ordered set of 16 colors plus the two fixed defaults used
/// when a run carries no explicit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
    default_fg: Rgb,
    inverted_fg: Rgb,
}

impl Palette {
    /// The standard mIRC palette with dark text on a light background.
    #[must_use]
    pub const fn mirc() -> Self {
        Self {
            colors: MIRC,
            default_fg: Rgb::new(0x00, 0x00, 0x00),
            inverted_fg: Rgb::new(0xff, 0xff, 0xff),
        }
    }

    /// Build a palette from `#rrggbb` strings, keeping the mIRC defaults for
    /// uncolored text.
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self, ConfigError> {
        if entries.len() != PALETTE_SIZE {
            return Err(ConfigError::PaletteLength(entries.len()));
        }
        let mut colors = MIRC;
        for (index, (slot, entry)) in colors.iter_mut().zip(entries).enumerate() {
            let value = entry.as_ref();
            *slot = value.parse().map_err(|_| ConfigError::InvalidColor {
                index,
                value: value.to_string(),
            })?;
        }
        Ok(Self {
            colors,
            ..Self::mirc()
        })
    }

    /// Look up a color. The index wraps, so every value is valid.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Rgb {
        self.colors[index % PALETTE_SIZE]
    }

    /// Foreground for text with no color code.
    #[must_use]
    pub fn default_fg(&self) -> Rgb {
        self.default_fg
    }

    /// Foreground for reversed text with no background color code.
    #[must_use]
    pub fn inverted_fg(&self) -> Rgb {
        self.inverted_fg
    }

    /// All 16 colors in index order.
    #[must_use]
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::mirc()
    }
}
