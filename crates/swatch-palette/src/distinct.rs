//! Distinctness enforcement between adjacent option colors.
//!
//! Only neighbours are compared (i-1, i), never all pairs: options are shown
//! in index order, and that is where near-duplicates are noticed. Two
//! passes run around the accessibility repair:
//!
//! - [`enforce_minimum_delta`] on raw OKLCH values, before repair.
//! - [`enforce_token_delta`] on repaired, display-ready colors, after.
//!
//! The second pass measures the quantized display colors, which is what
//! consumers compare. Neither pass guarantees the threshold: both are
//! bounded, and the post-repair pass ends in an unverified jump.

use swatch_color::Color;
use tracing::debug;

use crate::contrast::token_delta;
use crate::repair::{AccessibleColor, TextPreference, ensure_accessible_background};

/// Attempts per adjacent pair, both passes.
const DELTA_ATTEMPTS: usize = 24;

// ---------------------------------------------------------------------------
// Pre-repair pass
// ---------------------------------------------------------------------------

/// Push each raw color away from its predecessor until the pair is at least
/// `min_delta` apart.
///
/// Each attempt adds 0.02 chroma (held in [0, 0.25]), removes 0.012
/// lightness (held in [0.2, 0.98]) and rotates the hue by 10°. Returns a new
/// sequence; the input is not touched.
#[must_use]
pub fn enforce_minimum_delta(colors: &[Color], min_delta: f32) -> Vec<Color> {
    let mut out: Vec<Color> = Vec::with_capacity(colors.len());

    for &color in colors {
        let Some(&prev) = out.last() else {
            out.push(color);
            continue;
        };

        let mut current = color;
        for _ in 0..DELTA_ATTEMPTS {
            if prev.distance(&current) >= min_delta {
                break;
            }
            current = current
                .with_chroma(current.c + 0.02, 0.25)
                .with_lightness(current.l - 0.012, 0.2, 0.98)
                .shift_hue(10.0);
        }
        out.push(current);
    }

    out
}

// ---------------------------------------------------------------------------
// Post-repair pass
// ---------------------------------------------------------------------------

/// Nudge a repaired basis color one step further from its neighbour.
fn nudge(basis: Color, allow_hue_shift: bool) -> Color {
    let nudged = basis
        .with_chroma(basis.c + 0.02, 0.3)
        .with_lightness(basis.l - 0.02, 0.2, 0.98);
    if allow_hue_shift { nudged.shift_hue(12.0) } else { nudged }
}

/// The last-resort jump away from `prev`, accepted without verification.
fn escape(prev: Color, allow_hue_shift: bool) -> Color {
    let jumped = prev
        .with_chroma(prev.c + 0.1, 0.3)
        .with_lightness(prev.l - 0.1, 0.2, 0.98);
    if allow_hue_shift { jumped.shift_hue(72.0) } else { jumped }
}

/// Re-check adjacent repaired tokens and separate any pair closer than
/// `min_delta`.
///
/// A failing token is nudged from its own basis (chroma +0.02, lightness
/// −0.02, hue +12° when allowed) and re-repaired for dark text, up to 24
/// times. If that never separates the pair, the token is replaced by one
/// large jump from the *previous* token's basis (lightness −0.1, chroma
/// +0.1, hue +72° when allowed), repaired with automatic text choice, and
/// accepted as-is.
#[must_use]
pub fn enforce_token_delta(
    tokens: Vec<AccessibleColor>,
    min_delta: f32,
    allow_hue_shift: bool,
) -> Vec<AccessibleColor> {
    let mut out: Vec<AccessibleColor> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let Some(&prev) = out.last() else {
            out.push(token);
            continue;
        };

        if token_delta(prev.display, token.display) >= min_delta {
            out.push(token);
            continue;
        }

        let mut candidate = token;
        let mut separated = false;
        for _ in 0..DELTA_ATTEMPTS {
            candidate = ensure_accessible_background(nudge(candidate.basis, allow_hue_shift), TextPreference::Dark);
            if token_delta(prev.display, candidate.display) >= min_delta {
                separated = true;
                break;
            }
        }

        if !separated {
            candidate = ensure_accessible_background(escape(prev.basis, allow_hue_shift), TextPreference::Auto);
            debug!(
                index = out.len(),
                previous = %prev.display,
                result = %candidate.display,
                delta = token_delta(prev.display, candidate.display),
                min_delta,
                "distinctness repair fell back to an unverified jump"
            );
        }
        out.push(candidate);
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_color::color::hue_diff;

    fn repaired(colors: &[Color]) -> Vec<AccessibleColor> {
        colors
            .iter()
            .map(|&c| ensure_accessible_background(c, TextPreference::Dark))
            .collect()
    }

    // ── Pre-repair ──────────────────────────────────────────────────

    #[test]
    fn empty_and_single_are_untouched() {
        assert!(enforce_minimum_delta(&[], 0.1).is_empty());
        let one = [Color::oklch(0.8, 0.1, 40.0)];
        assert_eq!(enforce_minimum_delta(&one, 0.1), one.to_vec());
    }

    #[test]
    fn distinct_colors_pass_through() {
        let colors = [Color::oklch(0.8, 0.1, 0.0), Color::oklch(0.8, 0.1, 180.0)];
        assert_eq!(enforce_minimum_delta(&colors, 0.06), colors.to_vec());
    }

    #[test]
    fn duplicates_are_pushed_apart() {
        let c = Color::oklch(0.82, 0.1, 200.0);
        let out = enforce_minimum_delta(&[c, c, c], 0.06);
        for pair in out.windows(2) {
            let d = pair[0].distance(&pair[1]);
            assert!(d >= 0.06, "Adjacent delta {d}");
        }
        assert_eq!(out[0], c, "First color never moves");
    }

    #[test]
    fn each_attempt_moves_all_three_axes() {
        let c = Color::oklch(0.8, 0.1, 100.0);
        // A threshold just above zero is met after exactly one step.
        let out = enforce_minimum_delta(&[c, c], 1e-3);
        let moved = out[1];
        assert!((moved.c - 0.12).abs() < 1e-5, "{moved:?}");
        assert!((moved.l - 0.788).abs() < 1e-5, "{moved:?}");
        assert!((moved.h - 110.0).abs() < 1e-3, "{moved:?}");
    }

    #[test]
    fn pre_repair_clamps_chroma_and_lightness() {
        let c = Color::oklch(0.21, 0.24, 0.0);
        // Unreachable threshold: all 24 attempts run.
        let out = enforce_minimum_delta(&[c, c], 10.0);
        assert!(out[1].c <= 0.25 + 1e-6);
        assert!(out[1].l >= 0.2 - 1e-6);
    }

    // ── Post-repair ─────────────────────────────────────────────────

    #[test]
    fn post_repair_separates_duplicates() {
        let c = Color::oklch(0.85, 0.06, 250.0);
        let out = enforce_token_delta(repaired(&[c, c, c, c]), 0.05, true);
        for pair in out.windows(2) {
            let d = token_delta(pair[0].display, pair[1].display);
            assert!(d >= 0.05, "Adjacent delta {d}");
        }
        for token in &out {
            assert!(token.is_readable(), "{token:?}");
        }
    }

    #[test]
    fn post_repair_without_hue_shift_keeps_hue() {
        let c = Color::oklch(0.86, 0.04, 140.0);
        let out = enforce_token_delta(repaired(&[c, c]), 0.03, false);
        assert!(hue_diff(out[1].basis.h, 140.0) < 1e-3, "{:?}", out[1].basis);
        let d = token_delta(out[0].display, out[1].display);
        assert!(d >= 0.03, "Adjacent delta {d}");
    }

    #[test]
    fn post_repair_keeps_already_distinct_tokens() {
        let tokens = repaired(&[Color::oklch(0.85, 0.1, 20.0), Color::oklch(0.85, 0.1, 200.0)]);
        let out = enforce_token_delta(tokens.clone(), 0.06, true);
        assert_eq!(out, tokens);
    }

    #[test]
    fn unreachable_threshold_takes_escape_jump() {
        let c = Color::oklch(0.85, 0.06, 250.0);
        let tokens = repaired(&[c, c]);
        let prev = tokens[0];
        let out = enforce_token_delta(tokens, 5.0, true);
        let expected = ensure_accessible_background(escape(prev.basis, true), TextPreference::Auto);
        assert_eq!(out[1], expected);
        assert!(hue_diff(out[1].basis.h, prev.basis.h) > 70.0);
    }
}
