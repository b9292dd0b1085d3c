//! # swatch-palette — accessible categorical palettes
//!
//! Derives every color a grid editor needs to paint category-driven cells
//! from three inputs: a preset name, a seed hue and an option count. Every
//! background/text pair is readable (≥ 4.5:1) and adjacent option colors
//! stay visually distinct (≥ the preset's minimum Oklab delta).
//!
//! # Architecture
//!
//! ```text
//! PresetId + option_count + seed_hue
//!     │
//!     ▼
//! preset.rs:   raw OKLCH colors per role (pure math)
//!     │
//!     ▼
//! distinct.rs: separate adjacent raw options
//!     │
//!     ▼
//! repair.rs:   gamut-map, then walk lightness until text is readable
//!     │
//!     ▼
//! distinct.rs: separate adjacent display colors, re-repairing as needed
//!     │
//!     ▼
//! tokens.rs:   assemble the flat `name → #rrggbb` map
//! ```
//!
//! `assign.rs` sits on top: it hands palette colors to category labels
//! without disturbing colors that were assigned earlier.
//!
//! Every function is pure and every loop has a fixed attempt ceiling.
//! Repairs are best effort: running out of attempts is logged at `debug`
//! level, never returned as an error.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Mathematical code uses small integer-to-float casts (loop indices, angles).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod assign;
pub mod config;
pub mod contrast;
pub mod distinct;
pub mod error;
pub mod preset;
pub mod repair;
pub mod tokens;

pub use assign::assign_select_option_colors;
pub use config::PaletteConfig;
pub use error::{PaletteError, Result};
pub use preset::{PresetDefinition, PresetId};
pub use repair::{AccessibleColor, TextPreference, TextTone};
pub use tokens::{PaletteTokens, TokenPair, build_palette_tokens, derive_tokens, generate_option_palette};
