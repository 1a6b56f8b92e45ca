use thiserror::Error;

/// Build-time failures. All are fatal: no partial table is ever returned.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompileError {
    /// Wrong number of fields on a source line.
    #[error("ligne {line} : {fields} champ(s), attendu {expected}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// Fields found.
        fields: usize,
        /// Human-readable expectation.
        expected: &'static str,
    },

    /// A token that is not the expected hexadecimal number.
    #[error("ligne {line} : nombre invalide {token:?}")]
    BadNumber {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// A target value outside the Unicode scalar range.
    #[error("ligne {line} : U+{value:04X} n'est pas un scalaire Unicode")]
    InvalidScalar {
        /// 1-based line number.
        line: usize,
        /// Offending value.
        value: u32,
    },

    /// Target count outside `{1, 2}`.
    #[error("ligne {line} : {count} cible(s), attendu 1 ou 2")]
    TargetCount {
        /// 1-based line number.
        line: usize,
        /// Targets found.
        count: usize,
    },

    /// Shift_JIS bytes landing outside the variant's ku-ten range.
    #[error("ligne {line} : \\x{lead:02X}\\x{trail:02X} → ku {ku} ten {ten}, hors plage")]
    TransformOutOfRange {
        /// 1-based line number.
        line: usize,
        /// Lead byte.
        lead: u8,
        /// Trail byte.
        trail: u8,
        /// Computed ku.
        ku: i32,
        /// Computed ten.
        ten: i32,
    },

    /// Column outside `[0x21, 0x7e]`.
    #[error("colonne 0x{column:02x} hors grille (ligne 0x{row:x})")]
    ColumnOutOfRange {
        /// Row of the entry.
        row: u16,
        /// Offending column.
        column: u8,
    },

    /// Row off the grid or outside the variant's fixed range.
    #[error("ligne de grille 0x{row:x} hors plage")]
    RowOutOfRange {
        /// Offending row.
        row: u16,
    },

    /// First entry not on the row the variant requires.
    #[error("première ligne 0x{found:x}, attendu 0x{expected:x}")]
    UnexpectedFirstRow {
        /// Required row.
        expected: u16,
        /// Row of the first entry.
        found: u16,
    },

    /// Row going backwards.
    #[error("ligne 0x{row:x} après 0x{previous:x} : ordre non croissant")]
    NonMonotonicRow {
        /// Row of the entry.
        row: u16,
        /// Row of the previous entry.
        previous: u16,
    },

    /// Column going backwards within a row.
    #[error("0x{row:x}/0x{column:02x} après la colonne 0x{previous:02x} : ordre non croissant")]
    OutOfOrder {
        /// Row of the entry.
        row: u16,
        /// Column of the entry.
        column: u8,
        /// Column of the previous entry.
        previous: u8,
    },

    /// Two entries on the same position.
    #[error("position 0x{row:x}/0x{column:02x} en double")]
    DuplicatePosition {
        /// Row.
        row: u16,
        /// Column.
        column: u8,
    },

    /// A single target in `[0, 0x7f]`, which would read back as a sentinel or index.
    #[error("0x{row:x}/0x{column:02x} → U+{scalar:04X} : scalaire littéral < 0x80")]
    LiteralInIndexRange {
        /// Row.
        row: u16,
        /// Column.
        column: u8,
        /// Offending scalar.
        scalar: u32,
    },

    /// More two-scalar entries than a slot index can address.
    #[error("table multi-scalaires pleine (max {max}) à 0x{row:x}/0x{column:02x}")]
    MultiTableFull {
        /// Row.
        row: u16,
        /// Column.
        column: u8,
        /// Capacity.
        max: usize,
    },

    /// No entries at all.
    #[error("aucune entrée")]
    Empty,
}
