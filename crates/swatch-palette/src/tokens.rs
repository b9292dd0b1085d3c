//! Token assembly — the flat `name → #rrggbb` map the style layer consumes.
//!
//! ```text
//! (preset, option_count, seed_hue)
//!     │
//!     ▼
//! preset.rs:   raw OKLCH role colors
//!     │
//!     ▼
//! distinct.rs: pre-repair adjacent separation (raw colors)
//!     │
//!     ▼
//! repair.rs:   gamut mapping + text contrast per role, border special case
//!     │
//!     ▼
//! distinct.rs: post-repair adjacent separation (display colors)
//!     │
//!     ▼
//! PaletteTokens
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::ser::{Serialize, SerializeMap, Serializer};
use swatch_color::Rgb8;
use swatch_color::color::normalize_hue;
use tracing::trace;

use crate::distinct::{enforce_minimum_delta, enforce_token_delta};
use crate::preset::PresetId;
use crate::repair::{
    AccessibleColor, BACKGROUND, DARK_TEXT, TextPreference, ensure_accessible_background, repair_border,
};

/// Seed hue used when the caller's value is not a finite number.
pub const DEFAULT_SEED_HUE: f32 = 210.0;

/// A background token and the text color that goes on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    pub background: Rgb8,
    pub text: Rgb8,
}

impl From<AccessibleColor> for TokenPair {
    fn from(color: AccessibleColor) -> Self {
        Self {
            background: color.display,
            text: color.text.rgb(),
        }
    }
}

/// Every color token for one (preset, option count, seed hue) derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTokens {
    pub preset: PresetId,
    pub background: Rgb8,
    pub text: Rgb8,
    pub border: Rgb8,
    pub active_cell: TokenPair,
    pub toggle_on: TokenPair,
    pub options: Vec<TokenPair>,
}

impl PaletteTokens {
    /// All tokens as `(key, hex)` in canonical order: fixed tokens first,
    /// then options by index.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::with_capacity(7 + self.options.len() * 2);
        let mut push = |key: String, color: Rgb8| entries.push((key, color.to_hex()));

        push("background".into(), self.background);
        push("text".into(), self.text);
        push("border".into(), self.border);
        push("active-cell".into(), self.active_cell.background);
        push("active-cell-text".into(), self.active_cell.text);
        push("toggle-on".into(), self.toggle_on.background);
        push("toggle-on-text".into(), self.toggle_on.text);
        for (i, option) in self.options.iter().enumerate() {
            push(format!("option-{}", i + 1), option.background);
            push(format!("option-{}-text", i + 1), option.text);
        }

        entries
    }

    /// The flat token map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries().into_iter().collect()
    }

    /// Look up one token by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let color = match key {
            "background" => self.background,
            "text" => self.text,
            "border" => self.border,
            "active-cell" => self.active_cell.background,
            "active-cell-text" => self.active_cell.text,
            "toggle-on" => self.toggle_on.background,
            "toggle-on-text" => self.toggle_on.text,
            _ => self.option_token(key)?,
        };
        Some(color.to_hex())
    }

    /// Resolve `option-N` / `option-N-text`, with N in canonical 1-based form.
    fn option_token(&self, key: &str) -> Option<Rgb8> {
        let rest = key.strip_prefix("option-")?;
        let (index, is_text) = rest.strip_suffix("-text").map_or((rest, false), |i| (i, true));
        if !index.bytes().all(|b| b.is_ascii_digit()) || index.starts_with('0') {
            return None;
        }
        let pair = self.options.get(index.parse::<usize>().ok()?.checked_sub(1)?)?;
        Some(if is_text { pair.text } else { pair.background })
    }

    /// Option background colors in index order.
    #[must_use]
    pub fn option_colors(&self) -> Vec<String> {
        self.options.iter().map(|o| o.background.to_hex()).collect()
    }

    /// Render as CSS custom properties, one `--{prefix}-{key}: #rrggbb;` per line.
    #[must_use]
    pub fn css_variables(&self, prefix: &str) -> String {
        let mut css = String::new();
        for (key, hex) in self.entries() {
            // Writing into a String cannot fail.
            let _ = writeln!(css, "--{prefix}-{key}: {hex};");
        }
        css
    }
}

impl Serialize for PaletteTokens {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, hex) in &entries {
            map.serialize_entry(key, hex)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive the full token set. Pure: same inputs, same tokens.
#[must_use]
pub fn derive_tokens(preset: PresetId, option_count: usize, seed_hue: f32) -> PaletteTokens {
    let definition = preset.build(option_count, seed_hue);
    let min_delta = preset.min_delta();

    let raw_options = enforce_minimum_delta(&definition.options, min_delta);

    let active_cell = ensure_accessible_background(definition.active_cell, TextPreference::Auto);
    let toggle_on = ensure_accessible_background(definition.toggle_on, TextPreference::Auto);
    let border = repair_border(definition.base_hue);

    let repaired = raw_options
        .into_iter()
        .map(|color| ensure_accessible_background(color, TextPreference::Dark))
        .collect();
    let options = enforce_token_delta(repaired, min_delta, preset.allows_hue_shift());

    trace!(
        %preset,
        option_count = options.len(),
        seed_hue = definition.base_hue,
        "derived palette tokens"
    );

    PaletteTokens {
        preset,
        background: BACKGROUND,
        text: DARK_TEXT,
        border,
        active_cell: active_cell.into(),
        toggle_on: toggle_on.into(),
        options: options.into_iter().map(TokenPair::from).collect(),
    }
}

// ---------------------------------------------------------------------------
// Loosely-typed facade
// ---------------------------------------------------------------------------

/// Normalize any numeric hue into [0, 360); non-finite input becomes 210°.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn normalize_seed_hue(seed_hue: f64) -> f32 {
    if seed_hue.is_finite() {
        // Reduce in f64 first so huge inputs keep their fractional part.
        normalize_hue(seed_hue.rem_euclid(360.0) as f32)
    } else {
        DEFAULT_SEED_HUE
    }
}

/// Floor an option count to a non-negative integer.
///
/// NaN, infinities and negatives are 0. There is no upper bound: keeping
/// the count to a sane UI range is up to the caller.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize_option_count(option_count: f64) -> usize {
    if !option_count.is_finite() || option_count <= 0.0 {
        return 0;
    }
    option_count.floor() as usize
}

/// Build tokens from loosely-typed input.
///
/// Unknown or missing presets fall back to `clear-categories`, the hue and
/// count are normalized as in [`normalize_seed_hue`] and
/// [`normalize_option_count`]. Never fails.
#[must_use]
pub fn build_palette_tokens(preset: Option<&str>, option_count: f64, seed_hue: f64) -> PaletteTokens {
    derive_tokens(
        PresetId::resolve(preset),
        normalize_option_count(option_count),
        normalize_seed_hue(seed_hue),
    )
}

/// Ordered option background colors for list-style consumers.
#[must_use]
pub fn generate_option_palette(count: f64, preset: Option<&str>, seed_hue: f64) -> Vec<String> {
    build_palette_tokens(preset, count, seed_hue).option_colors()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
