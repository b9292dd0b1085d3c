//! Persisted palette configuration.
//!
//! A project document stores only the (preset, seed hue, option count)
//! triple; the token map is a disposable cache regenerated from it. Fields
//! are loosely typed on purpose: an unknown preset name or an out-of-range
//! hue in an old document still loads, and is normalized on use.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::preset::PresetId;
use crate::tokens::{
    DEFAULT_SEED_HUE, PaletteTokens, derive_tokens, normalize_option_count, normalize_seed_hue,
};

/// Option count used when a config does not specify one.
pub const DEFAULT_OPTION_COUNT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PaletteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_count: Option<f64>,
}

impl PaletteConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Json`] if the text is not a JSON object of
    /// the expected shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Io`] if the file cannot be read and
    /// [`PaletteError::Json`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    #[must_use]
    pub fn preset_id(&self) -> PresetId {
        PresetId::resolve(self.preset.as_deref())
    }

    #[must_use]
    pub fn seed_hue(&self) -> f32 {
        self.seed_hue.map_or(DEFAULT_SEED_HUE, normalize_seed_hue)
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.option_count.map_or(DEFAULT_OPTION_COUNT, normalize_option_count)
    }

    /// Derive the token set this config describes.
    #[must_use]
    pub fn tokens(&self) -> PaletteTokens {
        derive_tokens(self.preset_id(), self.option_count(), self.seed_hue())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
