//! IRC case-mapping functions.
//!
//! Nick comparison on IRC is case-insensitive with a twist: under the
//! `rfc1459` mapping `[]\~` are the uppercase forms of `{}|^`. Completion
//! matches nicks with these rules so that typing `foo[` finds `Foo{away}`.
//!
//! Letters outside ASCII fold with their Unicode lowercase when that is a
//! single character, so `él` matches `Élodie` on servers allowing UTF-8 nicks.

/// Fold one character to its RFC 1459 lowercase form.
#[inline]
pub fn irc_lower_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        _ if c.is_ascii() => c.to_ascii_lowercase(),
        _ => {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        }
    }
}

/// Convert a string to IRC lowercase using RFC 1459 case mapping.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(irc_lower_char).collect()
}

/// Compare two strings using IRC case-insensitive comparison.
pub fn irc_eq(a: &str, b: &str) -> bool {
    a.chars()
        .map(irc_lower_char)
        .eq(b.chars().map(irc_lower_char))
}

/// True if the first `prefix.chars().count()` characters of `s` match
/// `prefix` case-insensitively.
pub fn irc_starts_with(s: &str, prefix: &str) -> bool {
    let mut chars = s.chars();
    prefix.chars().all(|p| {
        chars
            .next()
            .is_some_and(|c| irc_lower_char(c) == irc_lower_char(p))
    })
}

/// Length in characters of the longest case-insensitive common prefix.
pub fn irc_common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|&(ca, cb)| irc_lower_char(ca) == irc_lower_char(cb))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irc_to_lower() {
        assert_eq!(irc_to_lower("Nick[Away]"), "nick{away}");
        assert_eq!(irc_to_lower("a\\b~c"), "a|b^c");
        assert_eq!(irc_to_lower("ÄBC"), "äbc");
        // 'İ' lowercases to two chars, so it is left alone
        assert_eq!(irc_to_lower("İx"), "İx");
    }

    #[test]
    fn test_irc_eq() {
        assert!(irc_eq("NICK{}", "nick[]"));
        assert!(!irc_eq("nick", "nick_"));
        assert!(!irc_eq("abc", "abd"));
    }

    #[test]
    fn test_irc_starts_with() {
        assert!(irc_starts_with("Alice", "ali"));
        assert!(irc_starts_with("foo{away}", "FOO["));
        assert!(irc_starts_with("bob", ""));
        assert!(!irc_starts_with("al", "ali"));
        assert!(!irc_starts_with("bob", "ali"));
        assert!(irc_starts_with("Élodie", "él"));
        assert!(irc_starts_with("ÉLODIE", "élo"));
    }

    #[test]
    fn test_irc_common_prefix_len() {
        assert_eq!(irc_common_prefix_len("alice", "ALICIA"), 4);
        assert_eq!(irc_common_prefix_len("bob", "alice"), 0);
        assert_eq!(irc_common_prefix_len("al", "alice"), 2);
    }
}
