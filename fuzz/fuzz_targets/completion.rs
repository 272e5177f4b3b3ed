//! Fuzz target for nick completion
//!
//! The first byte picks a cursor position, the rest is the input line.
//! Completing and cycling must never panic on arbitrary UTF-8 input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_view::roster::Roster;
use slirc_view::CompletionEngine;
use std::str;

fuzz_target!(|data: &[u8]| {
    let Some((&cursor, rest)) = data.split_first() else {
        return;
    };
    let Ok(line) = str::from_utf8(rest) else {
        return;
    };

    let mut roster = Roster::new();
    for nick in ["alice", "alicia", "Ärger", "[bot]", "x"] {
        roster.insert(nick, None);
    }

    let mut engine = CompletionEngine::new();
    let mut line = line.to_string();
    let mut cursor = usize::from(cursor);
    for _ in 0..3 {
        match engine.request(&line, cursor, &roster, ":") {
            Some(done) => {
                assert!(done.cursor <= done.line.chars().count());
                line = done.line.clone();
                cursor = done.cursor;
            }
            None => break,
        }
    }
});
