// SPDX-License-Identifier: MIT
//
// swatchwork — preview tool for the accessible palette engine.
//
// Wires the palette crate to a command line so a palette can be inspected
// without the editor around it:
//
//   args / config file → PaletteConfig → derive_tokens → text | json | css
//
// The engine itself has no I/O. Everything here is presentation: choosing
// the input triple, installing the tracing subscriber, and printing.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use swatch_color::Rgb8;
use swatch_palette::contrast::contrast_ratio;
use swatch_palette::{PaletteConfig, PaletteTokens, PresetId, derive_tokens};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Most options a preview will derive. The engine itself takes any count.
const MAX_PREVIEW_OPTIONS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned `key  #rrggbb` lines with contrast for text pairs.
    Text,
    /// Flat JSON object.
    Json,
    /// CSS custom properties.
    Css,
}

/// Print the color tokens derived from a palette preset.
#[derive(Debug, Parser)]
#[command(name = "swatchwork", version, about)]
struct Cli {
    /// Preset id (pastel-neutral, soft-monochrome, clear-categories,
    /// high-distinction). Unknown ids fall back to clear-categories.
    #[arg(long)]
    preset: Option<String>,

    /// Seed hue in degrees. Any number; wrapped into [0, 360).
    #[arg(long, allow_hyphen_values = true)]
    seed_hue: Option<f64>,

    /// Number of category options.
    #[arg(long = "options", allow_hyphen_values = true)]
    option_count: Option<f64>,

    /// JSON config file with `preset`, `seed-hue` and `option-count`.
    /// Command-line flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Prefix for CSS custom properties.
    #[arg(long, default_value = "palette")]
    css_prefix: String,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins if set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn palette_config(&self) -> Result<PaletteConfig> {
        let mut config = match &self.config {
            Some(path) => PaletteConfig::load(path)
                .with_context(|| format!("loading palette config from {}", path.display()))?,
            None => PaletteConfig::default(),
        };
        if let Some(preset) = &self.preset {
            config.preset = Some(preset.clone());
        }
        if self.seed_hue.is_some() {
            config.seed_hue = self.seed_hue;
        }
        if self.option_count.is_some() {
            config.option_count = self.option_count;
        }
        Ok(config)
    }
}

fn preview_tokens(config: &PaletteConfig) -> PaletteTokens {
    let requested = config.option_count();
    if requested > MAX_PREVIEW_OPTIONS {
        warn!(requested, max = MAX_PREVIEW_OPTIONS, "option count clamped for preview");
    }
    derive_tokens(
        config.preset_id(),
        requested.min(MAX_PREVIEW_OPTIONS),
        config.seed_hue(),
    )
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_text(tokens: &PaletteTokens) -> String {
    let entries = tokens.entries();
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = String::new();

    // Writing into a String cannot fail.
    for (key, hex) in &entries {
        let _ = write!(out, "{key:<width$}  {hex}");
        // Annotate background tokens that have a paired text token.
        let text_key = format!("{key}-text");
        if let Some((_, text_hex)) = entries.iter().find(|(k, _)| *k == text_key) {
            if let (Some(bg), Some(fg)) = (Rgb8::from_hex(hex), Rgb8::from_hex(text_hex)) {
                let _ = write!(out, "  {:.2}:1", contrast_ratio(bg, fg));
            }
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.palette_config()?;
    if let Some(name) = config.preset.as_deref() {
        if PresetId::from_name(name).is_none() {
            warn!(preset = name, fallback = %PresetId::default(), "unknown preset");
        }
    }
    debug!(?config, "resolved palette config");

    let tokens = preview_tokens(&config);
    let rendered = match cli.format {
        Format::Text => render_text(&tokens),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&tokens).context("serializing tokens")?;
            json.push('\n');
            json
        }
        Format::Css => tokens.css_variables(&cli.css_prefix),
    };
    print!("{rendered}");
    Ok(())
}
