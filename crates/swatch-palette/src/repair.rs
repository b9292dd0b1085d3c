//! Accessibility repair — gamut mapping and contrast nudging.
//!
//! Raw preset colors are OKLCH values that may sit outside sRGB and may not
//! carry readable text. The two primitives here push them into an
//! emittable, readable state:
//!
//! - [`map_to_gamut`]: shrink chroma until the color fits the sRGB cube.
//! - [`ensure_accessible_background`]: walk lightness until the chosen text
//!   color reaches 4.5:1.
//!
//! Both are bounded `for` loops. Running out of attempts is not an error:
//! the best color found so far is returned and callers may verify it.

use swatch_color::{Color, Rgb8};
use tracing::debug;

use crate::contrast::{BORDER_CONTRAST, TEXT_CONTRAST, contrast_ratio};

/// Gamut mapping attempts before channels are hard-clamped.
const GAMUT_ATTEMPTS: usize = 16;
/// Chroma multiplier applied after each out-of-gamut attempt.
const CHROMA_DECAY: f32 = 0.9;

/// Lightness nudges allowed while chasing the text contrast target.
pub const CONTRAST_ATTEMPTS: usize = 24;
const LIGHTNESS_STEP: f32 = 0.01;
const MIN_LIGHTNESS: f32 = 0.02;
const MAX_LIGHTNESS: f32 = 0.98;

const BORDER_LIGHTNESS: f32 = 0.80;
const BORDER_FALLBACK_LIGHTNESS: f32 = 0.70;

/// Fixed page background every token is laid on.
pub const BACKGROUND: Rgb8 = Rgb8::new(0xff, 0xff, 0xff);
/// Dark text color, also the default body text.
pub const DARK_TEXT: Rgb8 = Rgb8::new(0x11, 0x11, 0x11);
/// Light text color.
pub const LIGHT_TEXT: Rgb8 = Rgb8::new(0xff, 0xff, 0xff);

// ---------------------------------------------------------------------------
// Text tones
// ---------------------------------------------------------------------------

/// Which text color a background should be repaired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextPreference {
    /// Always pair with [`DARK_TEXT`]; repair lightens the background.
    Dark,
    /// Always pair with [`LIGHT_TEXT`]; repair darkens the background.
    Light,
    /// Pair with whichever text color contrasts more, re-decided per attempt.
    Auto,
}

/// The text color actually paired with a repaired background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTone {
    Dark,
    Light,
}

impl TextTone {
    #[must_use]
    pub const fn rgb(self) -> Rgb8 {
        match self {
            Self::Dark => DARK_TEXT,
            Self::Light => LIGHT_TEXT,
        }
    }

    /// Direction of the lightness nudge that raises contrast for this text.
    const fn nudge(self) -> f32 {
        match self {
            Self::Dark => LIGHTNESS_STEP,
            Self::Light => -LIGHTNESS_STEP,
        }
    }
}

/// A background color after repair, with its paired text.
///
/// `basis` is the OKLCH value the display color was derived from after all
/// lightness nudging. Later stages keep repairing from it rather than from
/// the lossy round-trip through `display`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessibleColor {
    pub display: Rgb8,
    pub text: TextTone,
    pub basis: Color,
    pub contrast: f64,
}

impl AccessibleColor {
    /// Whether the pairing reached [`TEXT_CONTRAST`].
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.contrast >= TEXT_CONTRAST
    }
}

// ---------------------------------------------------------------------------
// Gamut mapping
// ---------------------------------------------------------------------------

/// Bring an OKLCH color into the sRGB gamut by reducing chroma.
///
/// Each failed attempt keeps lightness and hue and multiplies chroma by 0.9.
/// After 16 attempts whatever is left gets clamped per channel.
#[must_use]
pub fn map_to_gamut(color: Color) -> Rgb8 {
    let mut candidate = color;
    for _ in 0..GAMUT_ATTEMPTS {
        if candidate.in_srgb_gamut() {
            return candidate.to_rgb8();
        }
        candidate.c *= CHROMA_DECAY;
    }
    candidate.to_rgb8()
}

// ---------------------------------------------------------------------------
// Contrast repair
// ---------------------------------------------------------------------------

fn measure(basis: Color, preference: TextPreference) -> AccessibleColor {
    let display = map_to_gamut(basis);
    let dark = contrast_ratio(display, DARK_TEXT);
    let light = contrast_ratio(display, LIGHT_TEXT);
    let (text, contrast) = match preference {
        TextPreference::Dark => (TextTone::Dark, dark),
        TextPreference::Light => (TextTone::Light, light),
        TextPreference::Auto if dark >= light => (TextTone::Dark, dark),
        TextPreference::Auto => (TextTone::Light, light),
    };
    AccessibleColor { display, text, basis, contrast }
}

/// Gamut-map `candidate` and nudge its lightness until the paired text
/// reaches 4.5:1.
///
/// Dark text pushes the background lighter, light text pushes it darker, in
/// 0.01 steps with lightness held inside [0.02, 0.98]. After 24 nudges the
/// last measurement is returned even if it is still below target.
#[must_use]
pub fn ensure_accessible_background(candidate: Color, preference: TextPreference) -> AccessibleColor {
    let mut basis = candidate;
    for _ in 0..CONTRAST_ATTEMPTS {
        let measured = measure(basis, preference);
        if measured.is_readable() {
            return measured;
        }
        basis = basis.with_lightness(basis.l + measured.text.nudge(), MIN_LIGHTNESS, MAX_LIGHTNESS);
    }

    let measured = measure(basis, preference);
    if !measured.is_readable() {
        debug!(
            candidate = ?candidate,
            result = %measured.display,
            contrast = measured.contrast,
            "contrast repair exhausted its attempts"
        );
    }
    measured
}

/// Synthesize the border token for a given seed hue.
///
/// A near-neutral gray tinted toward the seed, repaired for dark text, then
/// checked against the page background at the lower border threshold. One
/// darker fallback is tried if that check fails; it is not verified again.
#[must_use]
pub fn repair_border(seed_hue: f32) -> Rgb8 {
    repair_border_with(seed_hue, BORDER_LIGHTNESS, BORDER_FALLBACK_LIGHTNESS)
}

fn repair_border_with(seed_hue: f32, lightness: f32, fallback_lightness: f32) -> Rgb8 {
    let border = ensure_accessible_background(Color::oklch(lightness, 0.012, seed_hue), TextPreference::Dark);
    if contrast_ratio(border.display, BACKGROUND) >= BORDER_CONTRAST {
        return border.display;
    }
    map_to_gamut(Color::oklch(fallback_lightness, 0.015, seed_hue))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── map_to_gamut ────────────────────────────────────────────────

    #[test]
    fn in_gamut_color_is_unchanged() {
        let c = Color::oklch(0.7, 0.08, 150.0);
        assert_eq!(map_to_gamut(c), c.to_rgb8());
    }

    #[test]
    fn out_of_gamut_color_is_desaturated_not_clamped() {
        let vivid = Color::oklch(0.85, 0.3, 264.0);
        assert!(!vivid.in_srgb_gamut());
        let mapped = map_to_gamut(vivid);
        let back = mapped.to_color();
        assert!(back.c < vivid.c, "Chroma not reduced: {back:?}");
        assert!((back.l - vivid.l).abs() < 0.02, "Lightness drifted: {back:?}");
    }

    #[test]
    fn hopeless_color_still_yields_a_display_color() {
        // Lightness above 1 can never fit, even at zero chroma.
        let mapped = map_to_gamut(Color::oklch(1.4, 0.2, 30.0));
        assert_eq!(mapped, Rgb8::new(255, 255, 255));
    }

    // ── ensure_accessible_background ────────────────────────────────

    #[test]
    fn readable_color_passes_through() {
        let light_bg = Color::oklch(0.9, 0.05, 90.0);
        let repaired = ensure_accessible_background(light_bg, TextPreference::Dark);
        assert!(repaired.is_readable());
        assert_eq!(repaired.basis, light_bg);
        assert_eq!(repaired.text, TextTone::Dark);
    }

    #[test]
    fn dark_preference_lightens() {
        let mid = Color::oklch(0.5, 0.1, 250.0);
        let repaired = ensure_accessible_background(mid, TextPreference::Dark);
        assert!(repaired.is_readable(), "contrast {}", repaired.contrast);
        assert!(repaired.basis.l > mid.l, "Should have lightened: {:?}", repaired.basis);
        let ratio = contrast_ratio(repaired.display, DARK_TEXT);
        assert!(ratio >= TEXT_CONTRAST, "Measured {ratio}");
    }

    #[test]
    fn light_preference_darkens() {
        let mid = Color::oklch(0.7, 0.1, 30.0);
        let repaired = ensure_accessible_background(mid, TextPreference::Light);
        assert!(repaired.is_readable(), "contrast {}", repaired.contrast);
        assert!(repaired.basis.l < mid.l, "Should have darkened: {:?}", repaired.basis);
        assert_eq!(repaired.text, TextTone::Light);
    }

    #[test]
    fn auto_picks_the_stronger_text() {
        let dark_bg = ensure_accessible_background(Color::oklch(0.3, 0.05, 200.0), TextPreference::Auto);
        assert_eq!(dark_bg.text, TextTone::Light);
        let light_bg = ensure_accessible_background(Color::oklch(0.92, 0.03, 200.0), TextPreference::Auto);
        assert_eq!(light_bg.text, TextTone::Dark);
    }

    #[test]
    fn exhausted_repair_returns_best_effort() {
        // Light text on a near-white background needs far more than 24 steps.
        let repaired = ensure_accessible_background(Color::oklch(0.97, 0.0, 0.0), TextPreference::Light);
        assert!(!repaired.is_readable());
        assert!((repaired.basis.l - 0.73).abs() < 0.001, "basis {:?}", repaired.basis);
        assert_eq!(repaired.text, TextTone::Light);
    }

    #[test]
    fn lightness_is_clamped_while_nudging() {
        let repaired = ensure_accessible_background(Color::oklch(0.97, 0.0, 0.0), TextPreference::Dark);
        assert!(repaired.basis.l <= MAX_LIGHTNESS);
        let repaired = ensure_accessible_background(Color::oklch(0.03, 0.0, 0.0), TextPreference::Light);
        assert!(repaired.basis.l >= MIN_LIGHTNESS);
    }

    // ── Border ──────────────────────────────────────────────────────

    #[test]
    fn border_meets_background_threshold() {
        for hue in [0.0, 45.0, 120.0, 210.0, 300.0] {
            let border = repair_border(hue);
            let ratio = contrast_ratio(border, BACKGROUND);
            assert!(ratio >= BORDER_CONTRAST, "hue {hue}: border {border} ratio {ratio}");
        }
    }

    #[test]
    fn too_light_border_falls_back_to_darker_gray() {
        // Readable under dark text, so repair keeps it, but far too faint on white.
        let border = repair_border_with(210.0, 0.95, BORDER_FALLBACK_LIGHTNESS);
        assert_eq!(border, map_to_gamut(Color::oklch(BORDER_FALLBACK_LIGHTNESS, 0.015, 210.0)));
        assert!(contrast_ratio(border, BACKGROUND) >= BORDER_CONTRAST);
    }

    #[test]
    fn fallback_border_is_not_repaired_again() {
        // A fallback that itself misses the threshold is returned as-is.
        let border = repair_border_with(40.0, 0.97, 0.93);
        assert_eq!(border, map_to_gamut(Color::oklch(0.93, 0.015, 40.0)));
        assert!(contrast_ratio(border, BACKGROUND) < BORDER_CONTRAST);
    }

    #[test]
    fn border_is_nearly_neutral() {
        let border = repair_border(210.0).to_color();
        assert!(border.c < 0.03, "Border chroma: {}", border.c);
    }
}
