// SPDX-License-Identifier: MIT
//
// swatch-color — the color model underneath swatchwork's palette engine.
//
// Everything is pure math: OKLCH for synthesis, Oklab for distance,
// gamma-encoded sRGB for display, and a compact 8-bit `Rgb8` for the
// `#rrggbb` strings that cross the engine boundary.

pub mod color;

pub use color::{Color, Rgb8};
