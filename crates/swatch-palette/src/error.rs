//! Error types for the palette crate.
//!
//! The derivation pipeline itself never fails. Errors only come from the
//! edges: parsing a preset name strictly, or loading a persisted config.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("unknown palette preset: {0:?}")]
    UnknownPreset(String),
    #[error("failed to read palette config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid palette config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
