// SPDX-License-Identifier: MIT
//
// swatch-color — OKLCH-native color model for palette synthesis.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Palette synthesis and repair happen in OKLCH, where equal numerical
// steps are equal visual steps. The only thing that ever leaves the engine
// is an 8-bit sRGB triple serialized as `#rrggbb`, so the display side is
// modelled by a separate compact type, `Rgb8`.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ Rgb8 ↔ "#rrggbb"
//
// OKLCH values may land outside the sRGB cube. Nothing here clamps silently
// except `Rgb8::from_unit`; gamut mapping policy lives with the caller.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color stored in OKLCH space.
///
/// OKLCH is a cylindrical representation of the Oklab color space, designed
/// by Björn Ottosson. Lightness, chroma and hue are perceptually uniform,
/// which is what makes [`Color::distance`] meaningful as a "do these two
/// swatches look different" metric.
///
/// # Examples
///
/// ```
/// use swatch_color::Color;
///
/// let warm_red = Color::oklch(0.63, 0.20, 29.2);
/// let blue = Color::srgb(0.0, 0.0, 1.0);
/// let green = Color::hex("#00ff00").unwrap();
///
/// let complement = warm_red.shift_hue(180.0);
/// assert!(warm_red.distance(&complement) > 0.3);
/// assert_eq!(blue.to_hex(), "#0000ff");
/// assert_eq!(green.to_hex(), "#00ff00");
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma (colorfulness): 0.0 (gray) to ~0.37 (most vivid).
    /// Unbounded in theory, but the sRGB gamut limits practical values.
    pub c: f32,

    /// Hue angle in degrees: 0.0 to 360.0.
    /// 0° = pink/red, 90° = yellow, 180° = cyan/green, 270° = blue/purple.
    pub h: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    ///
    /// - `l`: Lightness, 0.0 to 1.0
    /// - `c`: Chroma, 0.0 to ~0.37
    /// - `h`: Hue angle in degrees, 0.0 to 360.0
    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Create a color from a hex string (`#rgb` or `#rrggbb`, `#` optional).
    ///
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        Rgb8::from_hex(s).map(Rgb8::to_color)
    }

    /// Whether this color is achromatic (no visible chroma).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Perceptual Operations ───────────────────────────────────────────

    /// Return a copy with lightness replaced, clamped into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn with_lightness(self, l: f32, min: f32, max: f32) -> Self {
        Self {
            l: l.clamp(min, max),
            ..self
        }
    }

    /// Return a copy with chroma replaced, clamped into `[0, max]`.
    #[inline]
    #[must_use]
    pub fn with_chroma(self, c: f32, max: f32) -> Self {
        Self {
            c: c.clamp(0.0, max),
            ..self
        }
    }

    /// Shift the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Compute the perceptual distance to another color.
    ///
    /// Delta E in Oklab: Euclidean distance over (L, a, b), so both the
    /// lightness gap and the chroma/hue offset contribute. Values below
    /// ~0.02 are generally imperceptible.
    #[must_use]
    pub fn distance(self, other: &Self) -> f32 {
        let (l1, a1, b1) = oklch_to_oklab(self.l, self.c, self.h);
        let (l2, a2, b2) = oklch_to_oklab(other.l, other.c, other.h);
        let dl = l1 - l2;
        let da = a1 - a2;
        let db = b1 - b2;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to gamma-encoded sRGB without clamping.
    ///
    /// Channels outside 0.0–1.0 mean the color is out of gamut.
    #[must_use]
    pub fn to_srgb_unclamped(self) -> (f32, f32, f32) {
        oklch_to_srgb(self.l, self.c, self.h)
    }

    /// Convert to an 8-bit display color, hard-clamping out-of-gamut channels.
    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        let (r, g, b) = self.to_srgb_unclamped();
        Rgb8::from_unit(r, g, b)
    }

    /// Convert to hex string (`#rrggbb`), hard-clamping out-of-gamut channels.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb8().to_hex()
    }

    /// Whether this color is within the sRGB gamut.
    ///
    /// Out-of-gamut colors get clamped per channel on conversion, which can
    /// shift the perceived hue.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = self.to_srgb_unclamped();
        (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&g) && (0.0..=1.0).contains(&b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point
        const EPS: f32 = 1e-5;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

// ─── Rgb8 ────────────────────────────────────────────────────────────────────

/// An 8-bit-per-channel sRGB display color.
///
/// This is the quantized form that actually gets emitted as `#rrggbb`.
/// Contrast and distinctness checks that must hold for the *emitted* value
/// are measured on this type, not on the pre-quantization OKLCH color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Create from raw 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize unit-range sRGB channels, clamping anything outside 0.0–1.0.
    #[must_use]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: to_u8(r.clamp(0.0, 1.0)),
            g: to_u8(g.clamp(0.0, 1.0)),
            b: to_u8(b.clamp(0.0, 1.0)),
        }
    }

    /// Parse `#rgb` or `#rrggbb` (the `#` is optional, digits are case-insensitive).
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        let bytes = s.as_bytes();

        match bytes.len() {
            3 => {
                let r = parse_hex_digit(bytes[0])?;
                let g = parse_hex_digit(bytes[1])?;
                let b = parse_hex_digit(bytes[2])?;
                Some(Self::new((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => {
                let r = parse_hex_byte(&bytes[0..2])?;
                let g = parse_hex_byte(&bytes[2..4])?;
                let b = parse_hex_byte(&bytes[4..6])?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Unit-range sRGB channels.
    #[must_use]
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Serialize as a 7-character lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Convert back into OKLCH.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::rgb8(self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Rgb8> for Color {
    fn from(rgb: Rgb8) -> Self {
        rgb.to_color()
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// These implement the Oklab color space math created by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/
//
// Pipeline: OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-8 % 360 + 360 rounds to exactly 360.0 in f32.
    if h >= 360.0 { 0.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
#[must_use]
pub fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

/// Convert OKLCH chroma and hue to Oklab a, b components.
#[inline]
fn oklch_to_oklab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Oklab a, b components to OKLCH chroma and hue.
#[inline]
fn oklab_ab_to_oklch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0 // Achromatic — hue is undefined, default to 0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

/// Full OKLCH → Oklab conversion.
#[inline]
fn oklch_to_oklab(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    (l, a, b)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// The conversion goes through an intermediate LMS (cone response) space.
// The coefficients are Ottosson's published ones and must not be rounded:
// palettes are compared byte-for-byte across implementations.

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    // Oklab → LMS (cube roots)
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

/// Convert linear sRGB to Oklab (L, a, b).
#[inline]
fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    // Linear sRGB → LMS
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    // Cube root (LMS → Oklab intermediate)
    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // Oklab intermediate → Oklab
    let l_ok = 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_));
    let a = 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_)));
    let b_ok = 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_));

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

/// Convert sRGB (0.0–1.0) → OKLCH.
fn srgb_to_oklch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

/// Convert OKLCH → sRGB (0.0–1.0, may be out of gamut).
fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some((hi << 4) | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn srgb_to_oklch_roundtrip() {
        let test_colors: [(f32, f32, f32); 8] = [
            (1.0, 0.0, 0.0), // Red
            (0.0, 1.0, 0.0), // Green
            (0.0, 0.0, 1.0), // Blue
            (1.0, 1.0, 0.0), // Yellow
            (0.0, 1.0, 1.0), // Cyan
            (1.0, 0.0, 1.0), // Magenta
            (1.0, 1.0, 1.0), // White
            (0.0, 0.0, 0.0), // Black
        ];

        for (r, g, b) in test_colors {
            let (rr, rg, rb) = Color::srgb(r, g, b).to_srgb_unclamped();
            assert!(
                approx_eq(r, rr, 0.005) && approx_eq(g, rg, 0.005) && approx_eq(b, rb, 0.005),
                "Roundtrip failed for ({r}, {g}, {b}): got ({rr:.4}, {rg:.4}, {rb:.4})"
            );
        }
    }

    proptest! {
        #[test]
        fn in_gamut_oklch_roundtrips(
            l in 0.05f32..0.95,
            c in 0.0f32..0.2,
            h in 0.0f32..360.0,
        ) {
            let original = Color::oklch(l, c, h);
            prop_assume!(original.in_srgb_gamut());

            let (r, g, b) = original.to_srgb_unclamped();
            let recovered = Color::srgb(r, g, b);

            prop_assert!(approx_eq(original.l, recovered.l, 1e-3), "L: {original:?} vs {recovered:?}");
            prop_assert!(approx_eq(original.c, recovered.c, 1e-3), "C: {original:?} vs {recovered:?}");
            prop_assert!(original.distance(&recovered) < 1e-3, "{original:?} vs {recovered:?}");
        }
    }

    #[test]
    fn hue_is_normalized_after_conversion() {
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#ff00ff", "#123456"] {
            let color = Color::hex(hex).unwrap();
            assert!((0.0..360.0).contains(&color.h), "{hex} hue {}", color.h);
        }
    }

    // ── Known values ─────────────────────────────────────────────────────

    #[test]
    fn black_and_white_lightness() {
        assert!(approx_eq(Color::rgb8(0, 0, 0).l, 0.0, 0.001));
        assert!(approx_eq(Color::rgb8(255, 255, 255).l, 1.0, 0.001));
    }

    #[test]
    fn gray_has_no_chroma() {
        let gray = Color::rgb8(128, 128, 128);
        assert!(gray.c < 0.001, "Gray chroma: {}", gray.c);
        assert!(gray.is_achromatic());
    }

    #[test]
    fn red_has_hue_near_29() {
        let red = Color::rgb8(255, 0, 0);
        assert!(approx_eq(red.h, 29.2, 1.0), "Red hue: {}", red.h);
        assert!(approx_eq(red.l, 0.628, 0.01), "Red L: {}", red.l);
    }

    #[test]
    fn gamma_threshold_is_linear_below_cutoff() {
        assert!(approx_eq(linear_to_srgb(0.002), 0.002 * 12.92, 1e-7));
        assert!(approx_eq(srgb_to_linear(0.04), 0.04 / 12.92, 1e-7));
        assert!(approx_eq(srgb_to_linear(linear_to_srgb(0.5)), 0.5, 1e-5));
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(Rgb8::from_hex("#ff8000"), Some(Rgb8::new(255, 128, 0)));
    }

    #[test]
    fn hex_parsing_short_and_mixed_case() {
        assert_eq!(Rgb8::from_hex("#F80"), Some(Rgb8::new(255, 136, 0)));
        assert_eq!(Rgb8::from_hex(" 00FF00 "), Some(Rgb8::new(0, 255, 0)));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Rgb8::from_hex("xyz").is_none());
        assert!(Rgb8::from_hex("#12345").is_none());
        assert!(Rgb8::from_hex("#ff000080").is_none());
        assert!(Rgb8::from_hex("").is_none());
    }

    #[test]
    fn hex_is_always_seven_lowercase_chars() {
        let hex = Rgb8::new(0xAB, 0x0C, 0x01).to_hex();
        assert_eq!(hex, "#ab0c01");
        assert_eq!(hex.len(), 7);
    }

    #[test]
    fn hex_roundtrip_through_oklch() {
        for original in ["#c86432", "#111111", "#ffffff", "#1a2b3c"] {
            let color = Color::hex(original).unwrap();
            assert_eq!(color.to_hex(), original);
        }
    }

    // ── Gamut ────────────────────────────────────────────────────────────

    #[test]
    fn vivid_blue_at_high_lightness_is_out_of_gamut() {
        let color = Color::oklch(0.9, 0.3, 264.0);
        assert!(!color.in_srgb_gamut());
        let (r, g, b) = color.to_srgb_unclamped();
        assert!([r, g, b].iter().any(|v| !(0.0..=1.0).contains(v)));
    }

    #[test]
    fn muted_color_is_in_gamut() {
        assert!(Color::oklch(0.7, 0.05, 120.0).in_srgb_gamut());
    }

    #[test]
    fn from_unit_clamps() {
        assert_eq!(Rgb8::from_unit(-0.2, 0.5, 1.7), Rgb8::new(0, 128, 255));
    }

    // ── Perceptual operations ────────────────────────────────────────────

    #[test]
    fn shift_hue_wraps() {
        let c = Color::oklch(0.5, 0.1, 350.0).shift_hue(20.0);
        assert!(approx_eq(c.h, 10.0, 0.01), "Hue: {}", c.h);
    }

    #[test]
    fn normalize_hue_handles_negative_and_large() {
        assert!(approx_eq(normalize_hue(-30.0), 330.0, 1e-4));
        assert!(approx_eq(normalize_hue(725.0), 5.0, 1e-3));
        assert!(normalize_hue(-1e-8) < 360.0);
    }

    #[test]
    fn with_lightness_and_chroma_clamp() {
        let c = Color::oklch(0.5, 0.1, 90.0);
        assert!(approx_eq(c.with_lightness(0.01, 0.2, 0.98).l, 0.2, 1e-6));
        assert!(approx_eq(c.with_chroma(0.4, 0.25).c, 0.25, 1e-6));
        assert!(approx_eq(c.with_chroma(-0.1, 0.25).c, 0.0, 1e-6));
    }

    #[test]
    fn identical_colors_have_zero_distance() {
        let c = Color::oklch(0.6, 0.12, 200.0);
        assert!(c.distance(&c) < 1e-6);
    }

    #[test]
    fn distance_counts_lightness_not_just_hue() {
        let a = Color::oklch(0.5, 0.0, 0.0);
        let b = Color::oklch(0.6, 0.0, 180.0);
        assert!(approx_eq(a.distance(&b), 0.1, 1e-5));
    }

    #[test]
    fn distance_is_chord_between_hues() {
        let a = Color::oklch(0.7, 0.1, 0.0);
        let b = Color::oklch(0.7, 0.1, 180.0);
        assert!(approx_eq(a.distance(&b), 0.2, 1e-5));
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn color_display_is_hex() {
        assert_eq!(format!("{}", Color::rgb8(255, 0, 0)), "#ff0000");
        assert_eq!(format!("{}", Rgb8::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn color_debug_format() {
        let dbg = format!("{:?}", Color::oklch(0.5, 0.1, 180.0));
        assert_eq!(dbg, "Color::oklch(0.5000, 0.1000, 180.0)");
    }
}
