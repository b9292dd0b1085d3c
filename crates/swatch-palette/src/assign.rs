//! Stable color assignment for a growing list of category labels.
//!
//! When a user adds a category, the categories that already have colors
//! must keep them. New labels take the first palette color nobody is using
//! yet. Once the palette runs dry, golden-angle hues fill the gap.

use std::collections::{BTreeMap, HashSet};

use crate::config::PaletteConfig;
use crate::tokens::{DEFAULT_SEED_HUE, generate_option_palette};

/// Golden angle in degrees; consecutive steps land far apart on the wheel.
const GOLDEN_ANGLE: f64 = 137.508;
const FALLBACK_ATTEMPTS: usize = 720;
const FALLBACK_SATURATION: f64 = 0.65;
const FALLBACK_LIGHTNESS: f64 = 0.72;
/// Last resort when every golden-angle hue collides.
pub const NEUTRAL_FALLBACK: &str = "#9e9e9e";

/// Key used to decide whether two color strings are "the same color".
fn normalize_color(color: &str) -> String {
    color.trim().to_lowercase()
}

/// Extend `existing` so every label in `labels` has a color.
///
/// - Existing entries are copied verbatim; keys match case-sensitively.
/// - Candidates come from the option palette for `labels.len()` options.
/// - A candidate is skipped if its trimmed, lowercased form is already used.
/// - An empty label list yields an empty map.
///
/// The input map is never modified.
#[must_use]
pub fn assign_select_option_colors<S: AsRef<str>>(
    labels: &[S],
    existing: &BTreeMap<String, String>,
    config: &PaletteConfig,
) -> BTreeMap<String, String> {
    if labels.is_empty() {
        return BTreeMap::new();
    }

    let mut assigned = existing.clone();
    let mut used: HashSet<String> = existing.values().map(|c| normalize_color(c)).collect();

    #[allow(clippy::cast_precision_loss)]
    let mut pool = generate_option_palette(
        labels.len() as f64,
        config.preset.as_deref(),
        config.seed_hue.unwrap_or(f64::from(DEFAULT_SEED_HUE)),
    );

    for label in labels {
        let label = label.as_ref();
        if assigned.get(label).is_some_and(|c| !c.trim().is_empty()) {
            continue;
        }

        let color = match pool.iter().position(|c| !used.contains(&normalize_color(c))) {
            Some(index) => pool.remove(index),
            None => golden_angle_fallback(&used),
        };
        used.insert(normalize_color(&color));
        assigned.insert(label.to_owned(), color);
    }

    assigned
}

/// Step around the wheel by the golden angle until a hue is not yet used.
fn golden_angle_fallback(used: &HashSet<String>) -> String {
    for attempt in 0..FALLBACK_ATTEMPTS {
        #[allow(clippy::cast_precision_loss)]
        let hue = (((used.len() + attempt) as f64) * GOLDEN_ANGLE).round() % 360.0;
        let color = hsl_to_hex(hue, FALLBACK_SATURATION, FALLBACK_LIGHTNESS);
        if !used.contains(&normalize_color(&color)) {
            return color;
        }
    }
    NEUTRAL_FALLBACK.to_owned()
}

/// Convert HSL (hue in degrees, saturation and lightness in 0–1) to `#rrggbb`.
fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    swatch_color::Rgb8::new(channel(r), channel(g), channel(b)).to_hex()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
