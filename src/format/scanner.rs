//! mIRC control-code scanner.
//!
//! A single left-to-right pass over decoded text. Plain characters
//! accumulate into a pending span; every control byte flushes that span
//! with the style in effect *before* the byte, then updates the style for
//! what follows.
//!
//! | byte   | meaning        |
//! |--------|----------------|
//! | `0x02` | bold           |
//! | `0x03` | color          |
//! | `0x0F` | reset          |
//! | `0x16` | reverse        |
//! | `0x1D` | italic         |
//! | `0x1E` | strikethrough  |
//! | `0x1F` | underline      |
//! | `0x08` | hidden (legacy, no style change) |
//!
//! Any other C0 control byte except TAB, LF and CR, and DEL, is dropped with
//! a flush boundary.

use super::decode::Fallback;
use super::palette::Palette;
use super::run::StyledRun;
use super::style::StyleState;

/// Bold toggle.
pub const BOLD: u8 = 0x02;
/// Color introducer, followed by `fg[,bg]` digits.
pub const COLOR: u8 = 0x03;
/// Legacy hidden-text marker.
pub const HIDDEN: u8 = 0x08;
/// Reset all formatting.
pub const RESET: u8 = 0x0F;
/// Reverse toggle.
pub const REVERSE: u8 = 0x16;
/// Italic toggle.
pub const ITALIC: u8 = 0x1D;
/// Strikethrough toggle.
pub const STRIKETHROUGH: u8 = 0x1E;
/// Underline toggle.
pub const UNDERLINE: u8 = 0x1F;

/// True for every byte that ends the pending plain-text span.
#[inline]
pub fn is_control(b: u8) -> bool {
    (b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r')) || b == 0x7f
}

/// Compiles raw protocol text into styled runs.
///
/// A scanner only carries configuration. Each call to [`Scanner::compile`]
/// starts from a default [`StyleState`], so calls never influence each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scanner {
    palette: Palette,
    fallback: Fallback,
    strip: bool,
}

impl Scanner {
    /// A scanner with the mIRC palette and Latin-1 fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `palette` to resolve colors.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Decode non-UTF-8 input with `fallback`.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Consume control codes without applying them, so every run is plain.
    #[must_use]
    pub fn with_strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    /// The palette runs are resolved against.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Compile `raw` into an ordered list of runs.
    ///
    /// Empty input, or input made only of control codes, yields no runs.
    #[must_use]
    pub fn compile(&self, raw: &[u8]) -> Vec<StyledRun> {
        let text = self.fallback.decode(raw);
        let bytes = text.as_bytes();

        let mut runs = Vec::new();
        let mut style = StyleState::default();
        let mut start = 0;
        let mut i = 0;

        // Control bytes are ASCII, so every index we stop at is a char boundary.
        while i < bytes.len() {
            let b = bytes[i];
            if !is_control(b) {
                i += 1;
                continue;
            }

            self.flush(&text[start..i], &style, &mut runs);
            i += 1;

            match b {
                BOLD => style.bold = !style.bold,
                COLOR => i += parse_color(&bytes[i..], &mut style),
                RESET => style.reset(),
                REVERSE => style.reverse = !style.reverse,
                ITALIC => style.italic = !style.italic,
                STRIKETHROUGH => style.strikethrough = !style.strikethrough,
                UNDERLINE => style.underline = !style.underline,
                _ => {}
            }
            start = i;
        }
        self.flush(&text[start..], &style, &mut runs);

        runs
    }

    /// Visible text of `raw` with every control code removed.
    #[must_use]
    pub fn strip(&self, raw: &[u8]) -> String {
        self.with_strip(true)
            .compile(raw)
            .iter()
            .map(StyledRun::text)
            .collect()
    }

    fn flush(&self, pending: &str, style: &StyleState, runs: &mut Vec<StyledRun>) {
        if pending.is_empty() {
            return;
        }
        let style = if self.strip {
            StyleState::default()
        } else {
            *style
        };
        runs.push(StyledRun::new(pending, style, &self.palette));
    }
}

/// Parse the argument of a color code from the bytes following it.
///
/// Returns how many bytes were consumed. With no digits both colors are
/// cleared. A comma not followed by a digit is left as plain text.
fn parse_color(rest: &[u8], style: &mut StyleState) -> usize {
    let Some((fg, mut used)) = parse_digits(rest) else {
        style.clear_colors();
        return 0;
    };
    style.set_fg(fg);

    if rest.get(used) == Some(&b',') {
        if let Some((bg, len)) = parse_digits(&rest[used + 1..]) {
            style.set_bg(bg);
            used += 1 + len;
        }
    }
    used
}

/// Read one or two ASCII digits.
fn parse_digits(bytes: &[u8]) -> Option<(u8, usize)> {
    let first = *bytes.first().filter(|b| b.is_ascii_digit())?;
    let mut value = first - b'0';
    let mut len = 1;
    if let Some(&second) = bytes.get(1).filter(|b| b.is_ascii_digit()) {
        value = value * 10 + (second - b'0');
        len = 2;
    }
    Some((value, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FontStyle;

    fn texts(runs: &[StyledRun]) -> Vec<&str> {
        runs.iter().map(StyledRun::text).collect()
    }

    #[test]
    fn test_plain_text_single_run() {
        let runs = Scanner::new().compile(b"hello world");
        assert_eq!(texts(&runs), vec!["hello world"]);
        assert!(runs[0].style().is_plain());
    }

    #[test]
    fn test_empty_input() {
        assert!(Scanner::new().compile(b"").is_empty());
        assert!(Scanner::new().compile(b"\x02\x0304\x0f\x1f").is_empty());
    }

    #[test]
    fn test_bold_toggle() {
        let runs = Scanner::new().compile(b"\x02bold\x02plain");
        assert_eq!(texts(&runs), vec!["bold", "plain"]);
        assert!(runs[0].style().bold);
        assert!(!runs[1].style().bold);
        assert_eq!(runs[0].resolved().font, FontStyle::Bold);
    }

    #[test]
    fn test_color_then_reset() {
        let runs = Scanner::new().compile(b"\x0304red\x0fafter");
        assert_eq!(texts(&runs), vec!["red", "after"]);
        assert_eq!(runs[0].style().fg, Some(4));
        assert!(runs[1].style().is_plain());
    }

    #[test]
    fn test_color_wraps() {
        let runs = Scanner::new().compile(b"\x0317x");
        assert_eq!(runs[0].style().fg, Some(1));
        assert_eq!(runs[0].text(), "x");
    }

    #[test]
    fn test_color_with_background() {
        let runs = Scanner::new().compile(b"\x033,12text");
        assert_eq!(runs[0].style().fg, Some(3));
        assert_eq!(runs[0].style().bg, Some(12));
        assert_eq!(runs[0].text(), "text");
    }

    #[test]
    fn test_color_consumes_at_most_two_digits() {
        let runs = Scanner::new().compile(b"\x03123");
        assert_eq!(runs[0].style().fg, Some(12));
        assert_eq!(runs[0].text(), "3");

        let runs = Scanner::new().compile(b"\x031,234");
        assert_eq!(runs[0].style().bg, Some(7));
        assert_eq!(runs[0].text(), "4");
    }

    #[test]
    fn test_comma_without_digit_is_text() {
        let runs = Scanner::new().compile(b"\x034,x");
        assert_eq!(runs[0].style().fg, Some(4));
        assert_eq!(runs[0].style().bg, None);
        assert_eq!(runs[0].text(), ",x");
    }

    #[test]
    fn test_bare_color_clears_colors_only() {
        let runs = Scanner::new().compile(b"\x02\x034,5a\x03b");
        assert_eq!(texts(&runs), vec!["a", "b"]);
        assert_eq!(runs[1].style().fg, None);
        assert_eq!(runs[1].style().bg, None);
        assert!(runs[1].style().bold);
    }

    #[test]
    fn test_all_toggles() {
        let runs = Scanner::new().compile(b"\x1di\x1fu\x1es\x16r");
        assert_eq!(texts(&runs), vec!["i", "u", "s", "r"]);
        let last = runs[3].style();
        assert!(last.italic && last.underline && last.strikethrough && last.reverse);
        assert!(!runs[0].style().underline);
    }

    #[test]
    fn test_hidden_forces_boundary() {
        let runs = Scanner::new().compile(b"ab\x08cd");
        assert_eq!(texts(&runs), vec!["ab", "cd"]);
        assert_eq!(runs[0].style(), runs[1].style());
    }

    #[test]
    fn test_unknown_control_dropped() {
        let runs = Scanner::new().compile(b"a\x01b\x7fc");
        assert_eq!(texts(&runs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_whitespace_controls_are_text() {
        let runs = Scanner::new().compile(b"a\tb\r\n");
        assert_eq!(texts(&runs), vec!["a\tb\r\n"]);
    }

    #[test]
    fn test_reverse_resolution() {
        let scanner = Scanner::new();
        let runs = scanner.compile(b"\x032,5\x16x");
        let resolved = runs[0].resolved();
        assert_eq!(resolved.fg, scanner.palette().get(5));
        assert_eq!(resolved.bg, Some(scanner.palette().get(2)));
    }

    #[test]
    fn test_latin1_input() {
        let runs = Scanner::new().compile(b"\x02caf\xe9");
        assert_eq!(runs[0].text(), "café");
        assert!(runs[0].style().bold);
    }

    #[test]
    fn test_multibyte_text_around_codes() {
        let runs = Scanner::new().compile("日本\x02語".as_bytes());
        assert_eq!(texts(&runs), vec!["日本", "語"]);
    }

    #[test]
    fn test_no_state_between_calls() {
        let scanner = Scanner::new();
        let _ = scanner.compile(b"\x02\x0304unterminated");
        let runs = scanner.compile(b"fresh");
        assert!(runs[0].style().is_plain());
    }

    #[test]
    fn test_strip_mode() {
        let runs = Scanner::new().with_strip(true).compile(b"\x02\x0304a\x1fb");
        assert_eq!(texts(&runs), vec!["a", "b"]);
        assert!(runs.iter().all(|r| r.style().is_plain()));
    }
}
