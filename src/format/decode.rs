//! Lossless-by-construction decoding of raw protocol text.
//!
//! IRC carries no charset information, so text is tried as UTF-8 first and
//! falls back to a single-byte decode. Decoding never fails.

use std::borrow::Cow;

use encoding::{Encoding, UTF_8};
use tracing::warn;

use crate::error::ConfigError;

/// How bytes that are not valid UTF-8 get decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fallback {
    /// Map each byte to the code point of the same value (ISO-8859-1).
    #[default]
    Latin1,
    /// Decode with a specific `encoding_rs` encoding, replacing invalid
    /// sequences with U+FFFD.
    Encoding(&'static Encoding),
}

impl Fallback {
    /// Resolve an encoding label such as `"windows-1251"`.
    ///
    /// `"latin1"` and `"iso-8859-1"` select the strict byte mapping, since
    /// `encoding_rs` treats them as windows-1252.
    pub fn for_label(label: &str) -> Result<Self, ConfigError> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("latin1") || trimmed.eq_ignore_ascii_case("iso-8859-1") {
            return Ok(Self::Latin1);
        }
        match Encoding::for_label(trimmed.as_bytes()) {
            Some(enc) if enc == UTF_8 => Ok(Self::Latin1),
            Some(enc) => Ok(Self::Encoding(enc)),
            None => Err(ConfigError::UnknownEncoding(label.to_string())),
        }
    }

    /// Like [`Fallback::for_label`], but logs and uses Latin-1 on failure.
    pub fn for_label_or_latin1(label: &str) -> Self {
        Self::for_label(label).unwrap_or_else(|err| {
            warn!(%err, "using latin-1 fallback");
            Self::Latin1
        })
    }

    /// Decode `raw`, borrowing when it is already valid UTF-8.
    #[must_use]
    pub fn decode<'a>(&self, raw: &'a [u8]) -> Cow<'a, str> {
        if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(raw) {
            return text;
        }
        match self {
            Self::Latin1 => Cow::Owned(raw.iter().map(|&b| char::from(b)).collect()),
            Self::Encoding(enc) => enc.decode_without_bom_handling(raw).0,
        }
    }
}
