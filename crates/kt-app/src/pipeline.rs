use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use kt_compile::emit;
use kt_core::config::{self, VariantConfig, VariantSet};
use kt_core::table::CompiledTable;

use crate::cli::{Cli, Format};

/// Point d'entrée : variante → table → sortie, puis les sondes éventuelles.
///
/// # Errors
/// Any config, read, parse, compile or write failure, with the file involved
/// attached as context.
pub fn run(cli: &Cli) -> Result<()> {
    let variants = resolve_variants(&cli.config)?;
    let variant = variants.find(&cli.variant)?;

    let table = build_table(variant, &cli.input)?;
    let rendered = render(&table, variant, cli.format)?;
    write_output(cli.output.as_deref(), &rendered)?;

    for &cp in &cli.probe {
        eprintln!("{}", describe_probe(&table, cp));
    }
    Ok(())
}

/// Config file if present, built-in presets otherwise.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn resolve_variants(path: &Path) -> Result<VariantSet> {
    if path.exists() {
        config::load_config(path)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des presets intégrés.",
            path.display()
        );
        Ok(VariantSet::default())
    }
}

/// Read, parse and compile one mapping file.
///
/// # Errors
/// Returns an error if the file cannot be read or any line or entry is rejected.
pub fn build_table(variant: &VariantConfig, input: &Path) -> Result<CompiledTable> {
    log::info!("Compilation de {} ({})", input.display(), variant.name);
    let src = std::fs::read_to_string(input)
        .with_context(|| format!("Impossible de lire {}", input.display()))?;
    let entries = kt_compile::ingest::parse(variant, &src)
        .with_context(|| format!("Entrée invalide dans {}", input.display()))?;
    log::info!("{} entrées lues", entries.len());
    let table = kt_compile::compile(variant, &entries)
        .with_context(|| format!("Compilation impossible de {}", input.display()))?;
    Ok(table)
}

/// Serialize in the requested format.
///
/// # Errors
/// Propagates emitter failures.
pub fn render(table: &CompiledTable, variant: &VariantConfig, format: Format) -> Result<String> {
    let out = match format {
        Format::Rust => emit::emit_rust(table, variant)?,
        Format::Json => emit::emit_json(table, variant)?,
    };
    Ok(out)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
            log::info!("Table écrite dans {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// One line per probe: `0x7a21 → U+26CC`, `0x7a22 → absent`.
#[must_use]
pub fn describe_probe(table: &CompiledTable, cp: u32) -> String {
    match table.decode(cp) {
        Some(chars) => {
            let scalars: Vec<String> = chars
                .iter()
                .map(|&c| format!("U+{:04X}", u32::from(c)))
                .collect();
            format!("0x{cp:x} → {}", scalars.join(" "))
        }
        None => format!("0x{cp:x} → absent"),
    }
}
