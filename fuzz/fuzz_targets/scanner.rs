//! Fuzz target for the control-code scanner
//!
//! Feeds arbitrary bytes to the scanner and checks that every run is
//! non-empty and carries in-range colors.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_view::format::{Scanner, PALETTE_SIZE};

fuzz_target!(|data: &[u8]| {
    let scanner = Scanner::new();
    for run in scanner.compile(data) {
        assert!(!run.text().is_empty());
        assert!(run.style().fg.map_or(true, |c| usize::from(c) < PALETTE_SIZE));
        assert!(run.style().bg.map_or(true, |c| usize::from(c) < PALETTE_SIZE));
    }

    // Stripping should never panic either
    let _ = scanner.strip(data);
});
