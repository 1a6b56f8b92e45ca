//! Lecture des fichiers de correspondance.
//!
//! Two line formats are understood:
//!
//! - direct pairs: `0x7521 0x4E9C`, `0x1247B U+304B U+309A`, `0x1247B U+304B+309A`
//! - UCM: `<U2460> \xED\x9F |0`, Shift_JIS bytes converted through [`crate::sjis`]
//!
//! Direct pairs are kept in file order, so an unsorted file is rejected by the
//! compiler. UCM files list mappings by Unicode value and are sorted here.
//! UCM `|1` lines are encode-only fallbacks and never reach the table.

use kt_core::config::{InputForm, VariantConfig};
use kt_core::entry::{SourceEntry, Target};
use kt_core::grid;

use crate::error::CompileError;
use crate::sjis;

/// Ku range used when a UCM variant does not pin one.
const FULL_KU_RANGE: [u8; 2] = [1, 94];

/// Parse `src` according to the variant's input form.
///
/// # Errors
/// Any line-level [`CompileError`].
pub fn parse(variant: &VariantConfig, src: &str) -> Result<Vec<SourceEntry>, CompileError> {
    match variant.form {
        InputForm::Direct => parse_direct(src),
        InputForm::Ucm => parse_ucm(src, variant.kuten_rows.unwrap_or(FULL_KU_RANGE)),
    }
}

/// Parse the direct pair form.
///
/// # Errors
/// [`CompileError::MalformedLine`] for a line with fewer than two fields,
/// [`CompileError::BadNumber`], [`CompileError::InvalidScalar`] and
/// [`CompileError::TargetCount`].
///
/// # Example
/// ```
/// use kt_compile::ingest::parse_direct;
/// let entries = parse_direct("# jis\n0x7521 0x4E9C\n0x7523 0x4E8C\n").unwrap();
/// assert_eq!(entries[0].code_point(), 0x7521);
/// assert_eq!(entries[1].target.as_slice(), &['\u{4e8c}']);
/// ```
pub fn parse_direct(src: &str) -> Result<Vec<SourceEntry>, CompileError> {
    let mut entries = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        let content = strip_comment(raw);
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(CompileError::MalformedLine {
                line,
                fields: fields.len(),
                expected: "code point + 1 ou 2 cibles",
            });
        }

        let cp = parse_hex(fields[0]).ok_or_else(|| bad_number(line, fields[0]))?;
        let row = u16::try_from(cp >> 8).map_err(|_| bad_number(line, fields[0]))?;
        let column = (cp & 0xff) as u8;

        let mut scalars = Vec::with_capacity(2);
        for field in &fields[1..] {
            for part in split_targets(field) {
                let value = parse_hex(part).ok_or_else(|| bad_number(line, field))?;
                let c = char::from_u32(value).ok_or(CompileError::InvalidScalar { line, value })?;
                scalars.push(c);
            }
        }
        let target = Target::from_scalars(&scalars).ok_or(CompileError::TargetCount {
            line,
            count: scalars.len(),
        })?;

        entries.push(SourceEntry::new(row, column, target));
    }
    Ok(entries)
}

/// Where the UCM reader stands in the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    /// `<code_set_name>` and friends. Bare mapping lines are accepted too.
    Header,
    /// Between `CHARMAP` and `END CHARMAP`: every line is a mapping.
    Charmap,
    /// After `END CHARMAP`.
    Trailer,
}

/// Parse UCM mapping lines, keeping ku values in `rows`.
///
/// `<...>` metadata before `CHARMAP` and anything after `END CHARMAP` are
/// ignored. Inside the section every non-blank, non-`#` line must be a
/// mapping; `|1` (encode-only) fallbacks are skipped.
///
/// # Errors
/// [`CompileError::MalformedLine`], [`CompileError::BadNumber`],
/// [`CompileError::InvalidScalar`], [`CompileError::TargetCount`] and
/// [`CompileError::TransformOutOfRange`].
///
/// # Example
/// ```
/// use kt_compile::ingest::parse_ucm;
/// let src = "CHARMAP\n<U26CC> \\xED\\x9F |0\nEND CHARMAP\n";
/// let entries = parse_ucm(src, [90, 94]).unwrap();
/// assert_eq!(entries[0].code_point(), 0x7a21);
/// ```
pub fn parse_ucm(src: &str, rows: [u8; 2]) -> Result<Vec<SourceEntry>, CompileError> {
    let mut entries = Vec::new();
    let mut section = Section::Header;
    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        match section {
            Section::Header if content == "CHARMAP" => {
                section = Section::Charmap;
                continue;
            }
            Section::Header if !is_ucm_mapping(content) => {
                if content.starts_with('<') {
                    continue;
                }
                return Err(malformed_ucm(line, content));
            }
            Section::Charmap if content == "END CHARMAP" => {
                section = Section::Trailer;
                continue;
            }
            Section::Trailer => continue,
            Section::Header | Section::Charmap => {}
        }

        if let Some(entry) = parse_ucm_line(line, content, rows)? {
            entries.push(entry);
        }
    }
    entries.sort_by_key(SourceEntry::position);
    Ok(entries)
}

fn malformed_ucm(line: usize, content: &str) -> CompileError {
    CompileError::MalformedLine {
        line,
        fields: content.split_whitespace().count(),
        expected: "<U....> \\xHH\\xHH [|n]",
    }
}

/// One mapping line; `None` for a `|1` fallback.
fn parse_ucm_line(line: usize, content: &str, rows: [u8; 2]) -> Result<Option<SourceEntry>, CompileError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(malformed_ucm(line, content));
    }
    if fields.get(2) == Some(&"|1") {
        log::debug!("ligne {line} : fallback |1 ignoré");
        return Ok(None);
    }

    let scalars = parse_ucm_scalars(line, fields[0])?;
    let target = Target::from_scalars(&scalars).ok_or(CompileError::TargetCount {
        line,
        count: scalars.len(),
    })?;

    let [lead, trail] = parse_ucm_bytes(line, fields[1])?;
    let (ku, ten) = sjis::sjis_to_kuten_in(lead, trail, rows).map_err(|(ku, ten)| {
        CompileError::TransformOutOfRange {
            line,
            lead,
            trail,
            ku,
            ten,
        }
    })?;
    let Some((row, column)) = grid::kuten_to_grid(ku, ten) else {
        return Err(CompileError::TransformOutOfRange {
            line,
            lead,
            trail,
            ku: i32::from(ku),
            ten: i32::from(ten),
        });
    };

    Ok(Some(SourceEntry::new(row, column, target)))
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or_default().trim()
}

fn bad_number(line: usize, token: &str) -> CompileError {
    CompileError::BadNumber {
        line,
        token: token.to_string(),
    }
}

/// Hex number with an optional `0x` or `U+` prefix.
fn parse_hex(token: &str) -> Option<u32> {
    let digits = ["0x", "0X", "U+", "u+"]
        .iter()
        .find_map(|p| token.strip_prefix(p))
        .unwrap_or(token);
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// `U+304B+309A` names two scalars; every other token names one.
fn split_targets(field: &str) -> Vec<&str> {
    match field
        .strip_prefix("U+")
        .or_else(|| field.strip_prefix("u+"))
    {
        Some(rest) => rest.split('+').collect(),
        None => vec![field],
    }
}

/// `<U` followed by a hex digit starts a mapping line; `<code_set_name>` and the like do not.
fn is_ucm_mapping(line: &str) -> bool {
    line.strip_prefix("<U")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_hexdigit())
}

/// `<U304B><U309A>` → two scalars.
fn parse_ucm_scalars(line: usize, field: &str) -> Result<Vec<char>, CompileError> {
    let inner = field
        .strip_prefix('<')
        .and_then(|f| f.strip_suffix('>'))
        .ok_or_else(|| bad_number(line, field))?;
    inner
        .split("><")
        .map(|code| {
            let value = code
                .strip_prefix('U')
                .and_then(parse_hex)
                .ok_or_else(|| bad_number(line, field))?;
            char::from_u32(value).ok_or(CompileError::InvalidScalar { line, value })
        })
        .collect()
}

/// `\xED\x9F` → `[0xed, 0x9f]`. Exactly two bytes are accepted.
fn parse_ucm_bytes(line: usize, field: &str) -> Result<[u8; 2], CompileError> {
    let bytes = field
        .split("\\x")
        .skip(1)
        .map(|b| u8::from_str_radix(b, 16).map_err(|_| bad_number(line, field)))
        .collect::<Result<Vec<u8>, _>>()?;
    match bytes.as_slice() {
        [lead, trail] if field.starts_with("\\x") => Ok([*lead, *trail]),
        _ => Err(CompileError::MalformedLine {
            line,
            fields: bytes.len(),
            expected: "2 octets Shift_JIS",
        }),
    }
}
