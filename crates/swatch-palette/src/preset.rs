//! Preset strategies — how raw option colors are spread before repair.
//!
//! Each preset takes an option count and a seed hue and lays out one color
//! per role: the active cell, the toggle-on state, and N category options.
//! Nothing here checks contrast or distinctness; the values are starting
//! points chosen so that repair converges quickly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swatch_color::Color;
use swatch_color::color::normalize_hue;

use crate::error::PaletteError;

/// The kind of palette strategy used to spread option colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetId {
    /// Widely spaced hues, low chroma, light backgrounds.
    PastelNeutral,
    /// One hue, stepped lightness and chroma.
    SoftMonochrome,
    /// Evenly spaced hues at moderate chroma.
    #[default]
    ClearCategories,
    /// Evenly spaced hues, higher chroma, alternating lightness.
    HighDistinction,
}

impl PresetId {
    /// Kebab-case identifier, as stored in project documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PastelNeutral => "pastel-neutral",
            Self::SoftMonochrome => "soft-monochrome",
            Self::ClearCategories => "clear-categories",
            Self::HighDistinction => "high-distinction",
        }
    }

    /// Parse a preset from its name (case-insensitive, surrounding
    /// whitespace ignored).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|p| p.name() == lower).copied()
    }

    /// Resolve loosely-typed input: anything unrecognized, including no
    /// input at all, becomes [`PresetId::ClearCategories`].
    #[must_use]
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::from_name).unwrap_or_default()
    }

    /// All available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::PastelNeutral,
            Self::SoftMonochrome,
            Self::ClearCategories,
            Self::HighDistinction,
        ]
    }

    /// Minimum perceptual delta between adjacent option colors.
    #[must_use]
    pub const fn min_delta(self) -> f32 {
        match self {
            Self::PastelNeutral => 0.045,
            Self::SoftMonochrome => 0.03,
            Self::ClearCategories => 0.06,
            Self::HighDistinction => 0.08,
        }
    }

    /// Whether distinctness repair may rotate hues. The monochrome preset
    /// must keep every option on the seed hue.
    #[must_use]
    pub const fn allows_hue_shift(self) -> bool {
        !matches!(self, Self::SoftMonochrome)
    }

    /// Build the raw, unrepaired colors for this preset.
    #[must_use]
    pub fn build(self, option_count: usize, seed_hue: f32) -> PresetDefinition {
        let seed = normalize_hue(seed_hue);
        let (active_cell, toggle_on) = match self {
            Self::PastelNeutral => (Color::oklch(0.52, 0.09, seed), Color::oklch(0.60, 0.08, seed).shift_hue(30.0)),
            Self::SoftMonochrome => (Color::oklch(0.48, 0.10, seed), Color::oklch(0.58, 0.07, seed)),
            Self::ClearCategories => (Color::oklch(0.50, 0.14, seed), Color::oklch(0.60, 0.13, seed).shift_hue(180.0)),
            Self::HighDistinction => (Color::oklch(0.46, 0.17, seed), Color::oklch(0.58, 0.16, seed).shift_hue(180.0)),
        };

        let options = (0..option_count)
            .map(|i| self.option(i, option_count, seed))
            .collect();

        PresetDefinition {
            base_hue: seed,
            active_cell,
            toggle_on,
            options,
        }
    }

    fn option(self, i: usize, n: usize, seed: f32) -> Color {
        let t = i as f32;
        let spread = normalize_hue(seed + t * 360.0 / n as f32);
        let even = i % 2 == 0;

        match self {
            Self::PastelNeutral => Color::oklch(if even { 0.88 } else { 0.84 }, 0.075, spread),
            Self::SoftMonochrome => {
                let step = (0.3 / n.saturating_sub(1).max(1) as f32).min(0.05);
                Color::oklch(t.mul_add(-step, 0.94), t.mul_add(0.012, 0.03), seed)
            }
            Self::ClearCategories => Color::oklch(0.82, 0.12, spread),
            Self::HighDistinction => Color::oklch(if even { 0.86 } else { 0.74 }, 0.15, spread),
        }
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresetId {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownPreset(s.to_owned()))
    }
}

/// Raw role colors produced by a preset, before any repair.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetDefinition {
    pub base_hue: f32,
    pub active_cell: Color,
    pub toggle_on: Color,
    pub options: Vec<Color>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
