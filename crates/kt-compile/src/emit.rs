//! Sérialisation des tables compilées.
//!
//! [`emit_rust`] writes a self-contained Rust module (tables plus decode
//! function) meant to be `include!`d; [`emit_json`] dumps the same data for
//! inspection.

use std::fmt::{self, Write};

use kt_core::config::VariantConfig;
use kt_core::grid::{COL_MAX, COL_MIN, GRID_WIDTH};
use kt_core::table::{Block, CompiledTable};
use serde::Serialize;

const INDENT: &str = "    ";

fn char_literal(c: char) -> String {
    format!("'\\u{{{:04x}}}'", u32::from(c))
}

/// Render the table as Rust source.
///
/// Emits `TABLE`, `MULTI_CHAR_TABLE` when the table has two-scalar entries,
/// and one decode function whose `match` has an arm per block. Without
/// multi-scalar entries the function returns `Option<char>`, otherwise
/// `Option<&'static [char]>`. The parameter is `u16` when every row fits in a
/// byte.
///
/// # Errors
/// Only if formatting into the output `String` fails.
///
/// # Example
/// ```
/// use kt_core::config::VariantConfig;
/// use kt_core::entry::SourceEntry;
/// use kt_compile::{compile, emit::emit_rust};
///
/// let variant = VariantConfig::arib_symbols();
/// let table = compile(&variant, &[SourceEntry::single(0x7a, 0x21, '\u{26cc}')]).unwrap();
/// let src = emit_rust(&table, &variant).unwrap();
/// assert!(src.contains("pub fn code_point_to_char(cp: u16) -> Option<char>"));
/// assert!(src.contains("    '\\u{26cc}',"));
/// ```
pub fn emit_rust(table: &CompiledTable, variant: &VariantConfig) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let multi = !table.multi().is_empty();

    writeln!(
        out,
        "// @generated by kutengen from variant `{}`. Do not edit.\n",
        variant.name
    )?;

    writeln!(out, "const TABLE: &[char] = &[")?;
    for &c in table.dense() {
        writeln!(out, "{INDENT}{},", char_literal(c))?;
    }
    writeln!(out, "];\n")?;

    if multi {
        writeln!(out, "const MULTI_CHAR_TABLE: &[[char; 2]] = &[")?;
        for [a, b] in table.multi() {
            writeln!(out, "{INDENT}[{}, {}],", char_literal(*a), char_literal(*b))?;
        }
        writeln!(out, "];\n")?;
    }

    let default_name = if multi {
        "code_point_to_chars"
    } else {
        "code_point_to_char"
    };
    let name = variant.function_name.as_deref().unwrap_or(default_name);
    let param = if table.is_single_plane() { "u16" } else { "u32" };
    let ret = if multi {
        "Option<&'static [char]>"
    } else {
        "Option<char>"
    };

    writeln!(out, "pub fn {name}(cp: {param}) -> {ret} {{")?;
    if param == "u16" {
        writeln!(out, "{INDENT}let cp = u32::from(cp);")?;
    }
    writeln!(out, "{INDENT}let row = cp >> 8;")?;
    writeln!(out, "{INDENT}let row = match row {{")?;
    for block in table.blocks() {
        write_block_arm(&mut out, block)?;
    }
    writeln!(out, "{INDENT}{INDENT}_ => return None,")?;
    writeln!(out, "{INDENT}}};")?;
    writeln!(out, "{INDENT}let col = cp & 0xff;")?;
    writeln!(
        out,
        "{INDENT}if !(0x{COL_MIN:x}..=0x{COL_MAX:x}).contains(&col) {{"
    )?;
    writeln!(out, "{INDENT}{INDENT}return None;")?;
    writeln!(out, "{INDENT}}}")?;
    writeln!(
        out,
        "{INDENT}let pos = (row * {GRID_WIDTH} + (col - 0x{COL_MIN:x})) as usize;"
    )?;
    if multi {
        writeln!(out, "{INDENT}let slot = TABLE.get(pos..=pos)?;")?;
        writeln!(out, "{INDENT}match u32::from(slot[0]) {{")?;
        writeln!(out, "{INDENT}{INDENT}0 => None,")?;
        writeln!(out, "{INDENT}{INDENT}c if c >= 0x80 => Some(slot),")?;
        writeln!(
            out,
            "{INDENT}{INDENT}i => MULTI_CHAR_TABLE.get(i as usize - 1).map(|p| p.as_slice()),"
        )?;
        writeln!(out, "{INDENT}}}")?;
    } else {
        writeln!(out, "{INDENT}match TABLE.get(pos) {{")?;
        writeln!(out, "{INDENT}{INDENT}Some(&c) if c != '\\0' => Some(c),")?;
        writeln!(out, "{INDENT}{INDENT}_ => None,")?;
        writeln!(out, "{INDENT}}}")?;
    }
    writeln!(out, "}}")?;

    Ok(out)
}

/// `0x7a..=0x7e => row - 0x7a + 2,` where `2` is the block's row offset.
fn write_block_arm(out: &mut String, block: &Block) -> fmt::Result {
    let pattern = if block.first_row == block.last_row {
        format!("0x{:x}", block.first_row)
    } else {
        format!("0x{:x}..=0x{:x}", block.first_row, block.last_row)
    };
    let base = block.offset / GRID_WIDTH;
    if base == 0 {
        writeln!(out, "{INDENT}{INDENT}{pattern} => row - 0x{:x},", block.first_row)
    } else {
        writeln!(
            out,
            "{INDENT}{INDENT}{pattern} => row - 0x{:x} + {base},",
            block.first_row
        )
    }
}

#[derive(Serialize)]
struct JsonTable<'a> {
    variant: &'a str,
    width: usize,
    blocks: &'a [Block],
    slots: Vec<u32>,
    multi: Vec<[u32; 2]>,
}

/// Dump the compiled table as pretty JSON. Slots are numbers, `0` is empty.
///
/// # Errors
/// Propagates serde_json failures.
pub fn emit_json(table: &CompiledTable, variant: &VariantConfig) -> Result<String, serde_json::Error> {
    let doc = JsonTable {
        variant: &variant.name,
        width: GRID_WIDTH,
        blocks: table.blocks(),
        slots: table.dense().iter().map(|&c| u32::from(c)).collect(),
        multi: table
            .multi()
            .iter()
            .map(|[a, b]| [u32::from(*a), u32::from(*b)])
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}
