//! Channel rosters and role badges.
//!
//! A [`Roster`] is the live member list of one conversation, keyed by exact
//! nick and kept in insertion order. That order is the order completion
//! candidates are offered in.

mod prefix;
mod tier;

use indexmap::IndexMap;
use tracing::trace;

use crate::format::Rgb;

pub use self::prefix::{PrefixMap, PrefixSpec};
pub use self::tier::{badge_color, classify, Tier};

/// One member of a conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    /// The nick, exactly as the server sent it.
    pub nick: String,
    /// Status symbol such as `@`, if any.
    pub prefix: Option<char>,
    tier: Tier,
}

impl Participant {
    /// A participant classified with the standard prefix mapping.
    pub fn new(nick: impl Into<String>, prefix: Option<char>) -> Self {
        Self {
            nick: nick.into(),
            prefix,
            tier: classify(prefix),
        }
    }

    /// The participant's role.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Decorate for the nick-list sink.
    #[must_use]
    pub fn decorate(&self) -> RosterEntry {
        RosterEntry {
            nick: self.nick.clone(),
            prefix: self.prefix,
            tier: self.tier,
            color: badge_color(self.tier),
        }
    }
}

/// A roster member prepared for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    /// The nick.
    pub nick: String,
    /// The raw status symbol.
    pub prefix: Option<char>,
    /// Role tier.
    pub tier: Tier,
    /// Badge color, `None` for members without status.
    pub color: Option<Rgb>,
}

impl RosterEntry {
    /// Text as it appears in a nick list, e.g. `@alice`.
    #[must_use]
    pub fn display(&self) -> String {
        match self.prefix {
            Some(p) => format!("{}{}", p, self.nick),
            None => self.nick.clone(),
        }
    }
}

/// Aggregate member counts per tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterCounts {
    by_tier: [usize; 6],
}

impl RosterCounts {
    /// Number of members with exactly `tier`.
    #[must_use]
    pub fn count(&self, tier: Tier) -> usize {
        self.by_tier[tier.index()]
    }

    /// Number of members ranked `tier` or higher.
    #[must_use]
    pub fn at_least(&self, tier: Tier) -> usize {
        self.by_tier[tier.index()..].iter().sum()
    }

    /// Number of operators, i.e. members at [`Tier::Op`] or above.
    #[must_use]
    pub fn ops(&self) -> usize {
        self.at_least(Tier::Op)
    }

    /// Total number of members.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_tier.iter().sum()
    }
}

/// Ordered member list of one conversation.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    members: IndexMap<String, Participant>,
    prefixes: PrefixMap,
}

impl Roster {
    /// An empty roster using the standard prefix symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a network-specific prefix map and reclassify current members.
    pub fn set_prefix_map(&mut self, prefixes: PrefixMap) {
        self.prefixes = prefixes;
        for member in self.members.values_mut() {
            member.tier = self.prefixes.classify(member.prefix);
        }
    }

    /// The prefix map in use.
    #[must_use]
    pub fn prefix_map(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// Add a member, or update the prefix of an existing one in place.
    pub fn insert(&mut self, nick: &str, prefix: Option<char>) {
        let tier = self.prefixes.classify(prefix);
        self.members
            .entry(nick.to_string())
            .and_modify(|member| {
                member.prefix = prefix;
                member.tier = tier;
            })
            .or_insert_with(|| Participant {
                nick: nick.to_string(),
                prefix,
                tier,
            });
    }

    /// Remove exactly the member whose nick is `nick`.
    pub fn remove(&mut self, nick: &str) -> Option<Participant> {
        let removed = self.members.shift_remove(nick);
        if removed.is_none() {
            trace!(nick, "remove for absent member");
        }
        removed
    }

    /// Change a member's nick, keeping its position. Returns false if `old`
    /// is not present. An existing member named `new` is replaced.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        let Some(mut index) = self.members.get_index_of(old) else {
            return false;
        };
        if old != new {
            if let Some(other) = self.members.get_index_of(new) {
                self.members.shift_remove_index(other);
                if other < index {
                    index -= 1;
                }
            }
        }
        let Some((_, mut member)) = self.members.shift_remove_index(index) else {
            return false;
        };
        member.nick = new.to_string();
        self.members.shift_insert(index, new.to_string(), member);
        true
    }

    /// Replace the whole membership, keeping the order given.
    pub fn rehash<I>(&mut self, members: I)
    where
        I: IntoIterator<Item = (String, Option<char>)>,
    {
        self.members.clear();
        for (nick, prefix) in members {
            self.insert(&nick, prefix);
        }
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Look a member up by exact nick.
    #[must_use]
    pub fn get(&self, nick: &str) -> Option<&Participant> {
        self.members.get(nick)
    }

    /// True if `nick` is a member.
    #[must_use]
    pub fn contains(&self, nick: &str) -> bool {
        self.members.contains_key(nick)
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.members.values()
    }

    /// Nicks in insertion order.
    pub fn nicks(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if there are no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Every member decorated for display, in insertion order.
    #[must_use]
    pub fn decorate(&self) -> Vec<RosterEntry> {
        self.iter().map(Participant::decorate).collect()
    }

    /// Per-tier member counts.
    #[must_use]
    pub fn counts(&self) -> RosterCounts {
        let mut counts = RosterCounts::default();
        for member in self.iter() {
            counts.by_tier[member.tier.index()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[(&str, Option<char>)]) -> Roster {
        let mut roster = Roster::new();
        roster.rehash(names.iter().map(|(n, p)| (n.to_string(), *p)));
        roster
    }

    #[test]
    fn test_insertion_order() {
        let roster = roster(&[("carol", None), ("alice", Some('@')), ("bob", None)]);
        let nicks: Vec<_> = roster.nicks().collect();
        assert_eq!(nicks, vec!["carol", "alice", "bob"]);
    }

    #[test]
    fn test_reinsert_updates_prefix_in_place() {
        let mut roster = roster(&[("alice", None), ("bob", None)]);
        roster.insert("alice", Some('@'));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("alice").unwrap().tier(), Tier::Op);
        assert_eq!(roster.nicks().next(), Some("alice"));
    }

    #[test]
    fn test_remove_is_exact() {
        // "al" is a substring of "@al" and of "alice" - neither may be touched
        let mut roster = roster(&[("alice", Some('@')), ("al", None), ("val", None)]);
        assert!(roster.remove("al").is_some());
        assert!(roster.contains("alice"));
        assert!(roster.contains("val"));
        assert_eq!(roster.len(), 2);

        assert!(roster.remove("ALICE").is_none());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_rename_keeps_position() {
        let mut roster = roster(&[("a", None), ("b", Some('+')), ("c", None)]);
        assert!(roster.rename("b", "bee"));
        let nicks: Vec<_> = roster.nicks().collect();
        assert_eq!(nicks, vec!["a", "bee", "c"]);
        assert_eq!(roster.get("bee").unwrap().prefix, Some('+'));
        assert_eq!(roster.get("bee").unwrap().nick, "bee");
        assert!(!roster.rename("zzz", "y"));
    }

    #[test]
    fn test_counts() {
        let roster = roster(&[
            ("owner", Some('~')),
            ("op1", Some('@')),
            ("op2", Some('@')),
            ("half", Some('%')),
            ("voiced", Some('+')),
            ("plain", None),
        ]);
        let counts = roster.counts();
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.count(Tier::Op), 2);
        assert_eq!(counts.ops(), 3);
        assert_eq!(counts.at_least(Tier::Voice), 5);
        assert_eq!(counts.at_least(Tier::None), 6);
    }

    #[test]
    fn test_decorate() {
        let roster = roster(&[("alice", Some('@')), ("bob", None)]);
        let entries = roster.decorate();
        assert_eq!(entries[0].display(), "@alice");
        assert_eq!(entries[0].color, badge_color(Tier::Op));
        assert_eq!(entries[1].display(), "bob");
        assert_eq!(entries[1].color, None);
    }

    #[test]
    fn test_prefix_map_reclassifies() {
        let mut roster = roster(&[("alice", Some('!'))]);
        assert_eq!(roster.get("alice").unwrap().tier(), Tier::None);
        roster.set_prefix_map(PrefixMap::from_isupport("(qov)!@+"));
        assert_eq!(roster.get("alice").unwrap().tier(), Tier::Owner);
    }

    #[test]
    fn test_clear() {
        let mut roster = roster(&[("alice", None)]);
        roster.clear();
        assert!(roster.is_empty());
        assert_eq!(roster.counts().total(), 0);
    }
}
