//! Property-based tests for the control-code scanner.
//!
//! Uses proptest to generate arbitrary bytes and formatted text and verify
//! that:
//! 1. Compiling never panics and never yields an empty run
//! 2. Color indices always land inside the palette
//! 3. Visible text survives compilation unchanged
//!
//! Run with: `cargo test --features proptest`

use proptest::prelude::*;
use slirc_view::format::{compile, strip_formatting, Scanner, PALETTE_SIZE};
use slirc_view::FormattedStringExt;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Printable text with no control bytes at all.
fn plain_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\\x00-\\x1f\\x7f]{1,200}").expect("valid regex")
}

/// One control sequence. Color codes carry at most two digits per color so
/// that nothing spills into the visible text.
fn control_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        Just(vec![0x02]),
        Just(vec![0x0f]),
        Just(vec![0x16]),
        Just(vec![0x1d]),
        Just(vec![0x1e]),
        Just(vec![0x1f]),
        prop::string::string_regex("\\x03([0-9]{1,2}(,[0-9]{1,2})?)?")
            .expect("valid regex")
            .prop_map(String::into_bytes),
    ]
}

/// Alternating plain text and control sequences.
fn formatted_strategy() -> impl Strategy<Value = (Vec<u8>, String)> {
    prop::collection::vec((control_strategy(), "[a-z ]{0,12}"), 0..20).prop_map(|parts| {
        let mut raw = Vec::new();
        let mut visible = String::new();
        for (control, text) in parts {
            raw.extend_from_slice(&control);
            raw.extend_from_slice(text.as_bytes());
            visible.push_str(&text);
        }
        (raw, visible)
    })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn compile_never_panics(raw in prop::collection::vec(any::<u8>(), 0..512)) {
        let runs = compile(&raw);
        for run in &runs {
            prop_assert!(!run.text().is_empty());
        }
    }

    #[test]
    fn colors_stay_in_palette(raw in prop::collection::vec(any::<u8>(), 0..512)) {
        for run in compile(&raw) {
            if let Some(fg) = run.style().fg {
                prop_assert!(usize::from(fg) < PALETTE_SIZE);
            }
            if let Some(bg) = run.style().bg {
                prop_assert!(usize::from(bg) < PALETTE_SIZE);
            }
        }
    }

    #[test]
    fn plain_text_is_one_plain_run(text in plain_text_strategy()) {
        let runs = compile(text.as_bytes());
        prop_assert_eq!(runs.len(), 1);
        prop_assert_eq!(runs[0].text(), text.as_str());
        prop_assert!(runs[0].style().is_plain());
        prop_assert!(!text.is_formatted());
    }

    #[test]
    fn visible_text_is_preserved((raw, visible) in formatted_strategy()) {
        let joined: String = compile(&raw).iter().map(|r| r.text()).collect();
        prop_assert_eq!(&joined, &visible);
        prop_assert_eq!(strip_formatting(&raw), visible);
    }

    #[test]
    fn stripping_matches_compile_text(raw in prop::collection::vec(any::<u8>(), 0..256)) {
        let scanner = Scanner::new();
        let joined: String = scanner.compile(&raw).iter().map(|r| r.text()).collect();
        prop_assert_eq!(scanner.strip(&raw), joined);
        for run in scanner.with_strip(true).compile(&raw) {
            prop_assert!(run.style().is_plain());
        }
    }
}
