//! WCAG contrast and perceptual-delta metrics.
//!
//! Two questions get asked of every emitted token:
//!
//! - Is the text readable on it? Relative luminance ratio, measured in sRGB
//!   (the WCAG definition). Text pairs need 4.5:1, the border needs 1.8:1
//!   against the page background.
//! - Does it look different from its neighbour? Euclidean distance in
//!   Oklab, where numeric distance tracks perceived difference.
//!
//! Both are measured on the quantized [`Rgb8`] that is actually serialized,
//! never on the pre-rounding OKLCH value, so a passing check here is a
//! passing check on the `#rrggbb` string a consumer sees.

use swatch_color::Rgb8;
use swatch_color::color::srgb_to_linear;

/// Minimum contrast for any background/text token pair.
pub const TEXT_CONTRAST: f64 = 4.5;

/// Minimum contrast for the border token against the page background.
pub const BORDER_CONTRAST: f64 = 1.8;

/// Compute the relative luminance of a display color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb8) -> f64 {
    let (r, g, b) = color.to_unit();
    let r_lin = f64::from(srgb_to_linear(r));
    let g_lin = f64::from(srgb_to_linear(g));
    let b_lin = f64::from(srgb_to_linear(b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb8, b: Rgb8) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Perceptual delta between two emitted colors.
///
/// Each display color is converted back to OKLCH first; the distance is then
/// the Oklab Delta E from [`swatch_color::Color::distance`].
#[must_use]
pub fn token_delta(a: Rgb8, b: Rgb8) -> f32 {
    a.to_color().distance(&b.to_color())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
