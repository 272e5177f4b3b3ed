//! Presentation settings.
//!
//! Loading and saving settings files belongs to the embedding client; this
//! module only validates values and turns them into a [`Scanner`]. With the
//! `serde` feature a config can be decoded from a TOML table:
//!
//! ```toml
//! completion_suffix = ","
//! fallback_encoding = "windows-1251"
//! strip_formatting = false
//! ```

use crate::error::ConfigError;
use crate::format::{Fallback, Palette, Scanner};

/// Settings for the presentation core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewConfig {
    /// Text placed after a nick completed at the start of the line, before
    /// the separating space.
    pub completion_suffix: String,
    /// `encoding_rs` label for text that is not valid UTF-8. `None` selects
    /// Latin-1.
    pub fallback_encoding: Option<String>,
    /// Drop formatting instead of applying it.
    pub strip_formatting: bool,
    /// Sixteen `#rrggbb` colors replacing the mIRC palette.
    pub palette: Option<Vec<String>>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            completion_suffix: ":".to_string(),
            fallback_encoding: None,
            strip_formatting: false,
            palette: None,
        }
    }
}

impl ViewConfig {
    /// Start building a config from the defaults.
    #[must_use]
    pub fn builder() -> ViewConfigBuilder {
        ViewConfigBuilder::default()
    }

    /// Decode and validate a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value that can be wrong.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fallback()?;
        self.palette()?;
        Ok(())
    }

    /// The decode fallback described by `fallback_encoding`.
    pub fn fallback(&self) -> Result<Fallback, ConfigError> {
        match &self.fallback_encoding {
            Some(label) => Fallback::for_label(label),
            None => Ok(Fallback::Latin1),
        }
    }

    /// The palette described by `palette`.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        match &self.palette {
            Some(entries) => Palette::from_hex(entries.as_slice()),
            None => Ok(Palette::mirc()),
        }
    }

    /// A scanner configured from these settings.
    pub fn scanner(&self) -> Result<Scanner, ConfigError> {
        Ok(Scanner::new()
            .with_palette(self.palette()?)
            .with_fallback(self.fallback()?)
            .with_strip(self.strip_formatting))
    }
}

/// Builder for [`ViewConfig`].
#[derive(Clone, Debug, Default)]
pub struct ViewConfigBuilder {
    config: ViewConfig,
}

impl ViewConfigBuilder {
    /// Set the completion suffix.
    pub fn completion_suffix(mut self, suffix: &str) -> Self {
        self.config.completion_suffix = suffix.to_string();
        self
    }

    /// Set the fallback encoding label.
    pub fn fallback_encoding(mut self, label: &str) -> Self {
        self.config.fallback_encoding = Some(label.to_string());
        self
    }

    /// Strip formatting instead of applying it.
    pub fn strip_formatting(mut self, strip: bool) -> Self {
        self.config.strip_formatting = strip;
        self
    }

    /// Replace the palette.
    pub fn palette<S: AsRef<str>>(mut self, colors: &[S]) -> Self {
        self.config.palette = Some(colors.iter().map(|c| c.as_ref().to_string()).collect());
        self
    }

    /// Validate and return the config.
    pub fn build(self) -> Result<ViewConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
