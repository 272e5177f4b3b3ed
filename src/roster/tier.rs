//! Role tiers derived from a nick's status prefix.

use std::fmt;

use crate::format::Rgb;

/// Ranked channel role. Ordering follows privilege, so `Tier::Op < Tier::Owner`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// No status.
    #[default]
    None,
    /// `+v`, shown as `+`.
    Voice,
    /// `+h`, shown as `%`.
    HalfOp,
    /// `+o`, shown as `@`.
    Op,
    /// `+a`, shown as `&`.
    Admin,
    /// `+q`, shown as `~`.
    Owner,
}

impl Tier {
    /// Every tier, highest first.
    pub const ALL: [Tier; 6] = [
        Tier::Owner,
        Tier::Admin,
        Tier::Op,
        Tier::HalfOp,
        Tier::Voice,
        Tier::None,
    ];

    /// The conventional prefix symbol for this tier.
    #[must_use]
    pub fn badge(self) -> Option<char> {
        match self {
            Tier::Owner => Some('~'),
            Tier::Admin => Some('&'),
            Tier::Op => Some('@'),
            Tier::HalfOp => Some('%'),
            Tier::Voice => Some('+'),
            Tier::None => None,
        }
    }

    /// The conventional channel mode letter for this tier.
    #[must_use]
    pub fn mode_letter(self) -> Option<char> {
        match self {
            Tier::Owner => Some('q'),
            Tier::Admin => Some('a'),
            Tier::Op => Some('o'),
            Tier::HalfOp => Some('h'),
            Tier::Voice => Some('v'),
            Tier::None => None,
        }
    }

    /// Tier for a channel mode letter, if it is one of the standard five.
    #[must_use]
    pub fn from_mode_letter(mode: char) -> Option<Tier> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.mode_letter() == Some(mode))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::None => "none",
            Tier::Voice => "voice",
            Tier::HalfOp => "halfop",
            Tier::Op => "op",
            Tier::Admin => "admin",
            Tier::Owner => "owner",
        };
        f.write_str(name)
    }
}

/// Classify a prefix symbol with the standard mapping:
/// `~` owner, `&` admin, `@` op, `%` half-op, `+` voice, anything else none.
#[must_use]
pub fn classify(prefix: Option<char>) -> Tier {
    match prefix {
        Some('~') => Tier::Owner,
        Some('&') => Tier::Admin,
        Some('@') => Tier::Op,
        Some('%') => Tier::HalfOp,
        Some('+') => Tier::Voice,
        _ => Tier::None,
    }
}

/// Color used to draw a tier's badge in the nick list.
#[must_use]
pub fn badge_color(tier: Tier) -> Option<Rgb> {
    match tier {
        Tier::Owner => Some(Rgb::new(0x9c, 0x00, 0x9c)),
        Tier::Admin => Some(Rgb::new(0xff, 0x00, 0xff)),
        Tier::Op => Some(Rgb::new(0xff, 0x00, 0x00)),
        Tier::HalfOp => Some(Rgb::new(0xfc, 0x7f, 0x00)),
        Tier::Voice => Some(Rgb::new(0x00, 0x93, 0x00)),
        Tier::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(Some('~')), Tier::Owner);
        assert_eq!(classify(Some('&')), Tier::Admin);
        assert_eq!(classify(Some('@')), Tier::Op);
        assert_eq!(classify(Some('%')), Tier::HalfOp);
        assert_eq!(classify(Some('+')), Tier::Voice);
        assert_eq!(classify(Some('!')), Tier::None);
        assert_eq!(classify(None), Tier::None);
    }

    #[test]
    fn test_ordering() {
        assert!(Tier::Owner > Tier::Admin);
        assert!(Tier::Admin > Tier::Op);
        assert!(Tier::Op > Tier::HalfOp);
        assert!(Tier::HalfOp > Tier::Voice);
        assert!(Tier::Voice > Tier::None);
    }

    #[test]
    fn test_badge_round_trip() {
        for tier in Tier::ALL {
            assert_eq!(classify(tier.badge()), tier);
            assert_eq!(badge_color(tier).is_some(), tier != Tier::None);
        }
    }

    #[test]
    fn test_mode_letters() {
        assert_eq!(Tier::from_mode_letter('o'), Some(Tier::Op));
        assert_eq!(Tier::from_mode_letter('q'), Some(Tier::Owner));
        assert_eq!(Tier::from_mode_letter('Y'), None);
    }
}
