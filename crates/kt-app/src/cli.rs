use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// kutengen — compile ku-ten mapping files into embeddable lookup tables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Variante à compiler : "arib_symbols", "jisx0213", ou une entrée de --config.
    #[arg(long)]
    pub variant: String,

    /// Fichier de correspondance source (paires directes ou UCM).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Fichier de sortie. Défaut : stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fichier de configuration TOML des variantes. Défaut : kuten.toml.
    #[arg(short, long, default_value = "kuten.toml")]
    pub config: PathBuf,

    /// Format de sortie.
    #[arg(long, value_enum, default_value_t = Format::Rust)]
    pub format: Format,

    /// Code point à décoder après compilation (hex, répétable) : --probe 0x7a21.
    #[arg(long, value_parser = parse_code_point)]
    pub probe: Vec<u32>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Rust source: tables plus decode function.
    Rust,
    /// JSON dump of blocks, slots and multi-scalar table.
    Json,
}

/// Accepts `0x7a21`, `7a21` or `U+7A21`.
fn parse_code_point(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix("U+"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| format!("code point invalide {s:?} : {e}"))
}
