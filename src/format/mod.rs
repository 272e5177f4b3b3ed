//! mIRC formatting: palette, style state, and the scanner that compiles
//! raw protocol text into styled runs.
//!
//! # Example
//!
//! ```
//! use slirc_view::format::{compile, FontStyle};
//!
//! let runs = compile(b"\x02bold\x02 and \x0304red");
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[0].text(), "bold");
//! assert_eq!(runs[0].resolved().font, FontStyle::Bold);
//! assert_eq!(runs[2].style().fg, Some(4));
//! ```

mod decode;
mod palette;
mod run;
pub mod scanner;
mod style;

pub use self::decode::Fallback;
pub use self::palette::{Palette, Rgb, PALETTE_SIZE};
pub use self::run::StyledRun;
pub use self::scanner::Scanner;
pub use self::style::{FontStyle, ResolvedStyle, StyleState};

/// Compile `raw` with the mIRC palette and Latin-1 fallback.
#[must_use]
pub fn compile(raw: &[u8]) -> Vec<StyledRun> {
    Scanner::new().compile(raw)
}

/// Remove every control code from `raw`, keeping only visible text.
#[must_use]
pub fn strip_formatting(raw: &[u8]) -> String {
    Scanner::new().strip(raw)
}

/// Extension methods for strings that may carry mIRC formatting.
pub trait FormattedStringExt {
    /// True if the string contains any control code.
    fn is_formatted(&self) -> bool;

    /// The string with every control code removed.
    fn strip_formatting(&self) -> String;
}

impl FormattedStringExt for str {
    fn is_formatted(&self) -> bool {
        self.bytes().any(scanner::is_control)
    }

    fn strip_formatting(&self) -> String {
        strip_formatting(self.as_bytes())
    }
}
