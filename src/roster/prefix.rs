//! Network-specific prefix symbols from `RPL_ISUPPORT PREFIX`.

use super::tier::{classify, Tier};

/// The raw halves of a `PREFIX` token, e.g. `(qaohv)~&@%+`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixSpec<'a> {
    /// Mode letters inside the parentheses. Empty for the bare form.
    pub modes: &'a str,
    /// Symbols after the parentheses.
    pub prefixes: &'a str,
}

impl<'a> PrefixSpec<'a> {
    /// Parse a `PREFIX` value. The bare form `~&@%+` is accepted too.
    pub fn parse(s: &'a str) -> Option<Self> {
        if let Some(rest) = s.strip_prefix('(') {
            let (modes, prefixes) = rest.split_once(')')?;
            if modes.is_empty() || prefixes.is_empty() {
                return None;
            }
            return Some(PrefixSpec { modes, prefixes });
        }
        if s.is_empty() {
            None
        } else {
            Some(PrefixSpec {
                modes: "",
                prefixes: s,
            })
        }
    }
}

/// Maps prefix symbols to tiers for one network.
///
/// Mode letters `qaohv` decide the tier when present; otherwise the symbol's
/// standard meaning does. A symbol that matches neither takes the tier of
/// the entry ranked just above it (or `Owner` when it is first), since
/// `PREFIX` lists symbols highest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixMap {
    entries: Vec<(char, Tier)>,
}

impl PrefixMap {
    /// Build a map from a `PREFIX` value, falling back to the standard map
    /// when it cannot be parsed.
    #[must_use]
    pub fn from_isupport(value: &str) -> Self {
        PrefixSpec::parse(value)
            .map(|spec| Self::from_spec(&spec))
            .unwrap_or_default()
    }

    /// Build a map from an already-parsed spec.
    #[must_use]
    pub fn from_spec(spec: &PrefixSpec<'_>) -> Self {
        let mut modes = spec.modes.chars();
        let mut entries: Vec<(char, Tier)> = Vec::with_capacity(spec.prefixes.len());
        for symbol in spec.prefixes.chars() {
            let by_mode = modes.next().and_then(Tier::from_mode_letter);
            let by_symbol = Some(classify(Some(symbol))).filter(|t| *t != Tier::None);
            let tier = by_mode.or(by_symbol).unwrap_or_else(|| {
                entries.last().map_or(Tier::Owner, |&(_, above)| above)
            });
            entries.push((symbol, tier));
        }
        Self { entries }
    }

    /// Tier for a prefix symbol.
    #[must_use]
    pub fn classify(&self, prefix: Option<char>) -> Tier {
        prefix
            .and_then(|p| self.entries.iter().find(|(symbol, _)| *symbol == p))
            .map_or(Tier::None, |&(_, tier)| tier)
    }

    /// True if `c` is one of this network's prefix symbols.
    #[must_use]
    pub fn is_prefix(&self, c: char) -> bool {
        self.entries.iter().any(|(symbol, _)| *symbol == c)
    }

    /// Split a `NAMES` reply item such as `@nick` into its prefix and nick.
    #[must_use]
    pub fn split_name<'n>(&self, name: &'n str) -> (Option<char>, &'n str) {
        match name.chars().next() {
            Some(c) if self.is_prefix(c) => (Some(c), &name[c.len_utf8()..]),
            _ => (None, name),
        }
    }
}

impl Default for PrefixMap {
    fn default() -> Self {
        Self::from_spec(&PrefixSpec {
            modes: "qaohv",
            prefixes: "~&@%+",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spec() {
        let spec = PrefixSpec::parse("(ov)@+").unwrap();
        assert_eq!(spec.modes, "ov");
        assert_eq!(spec.prefixes, "@+");

        let bare = PrefixSpec::parse("@+").unwrap();
        assert_eq!(bare.modes, "");
        assert_eq!(bare.prefixes, "@+");

        assert!(PrefixSpec::parse("(ov").is_none());
        assert!(PrefixSpec::parse("()").is_none());
        assert!(PrefixSpec::parse("").is_none());
    }

    #[test]
    fn test_default_matches_classify() {
        let map = PrefixMap::default();
        for tier in Tier::ALL {
            assert_eq!(map.classify(tier.badge()), tier);
        }
    }

    #[test]
    fn test_mode_letter_wins_over_symbol() {
        // Some networks show owners as '.' and admins as '!'
        let map = PrefixMap::from_isupport("(qaohv).!@%+");
        assert_eq!(map.classify(Some('.')), Tier::Owner);
        assert_eq!(map.classify(Some('!')), Tier::Admin);
        assert_eq!(map.classify(Some('~')), Tier::None);
    }

    #[test]
    fn test_unknown_symbol_inherits_rank_above() {
        let map = PrefixMap::from_isupport("(Yov)!@+");
        assert_eq!(map.classify(Some('!')), Tier::Owner);
        assert_eq!(map.classify(Some('@')), Tier::Op);

        let map = PrefixMap::from_isupport("(oXv)@*+");
        assert_eq!(map.classify(Some('*')), Tier::Op);
    }

    #[test]
    fn test_split_name() {
        let map = PrefixMap::from_isupport("(ov)@+");
        assert_eq!(map.split_name("@alice"), (Some('@'), "alice"));
        assert_eq!(map.split_name("bob"), (None, "bob"));
        assert_eq!(map.split_name("%carol"), (None, "%carol"));
    }

    #[test]
    fn test_unparseable_falls_back() {
        assert_eq!(PrefixMap::from_isupport("(ov"), PrefixMap::default());
    }
}
