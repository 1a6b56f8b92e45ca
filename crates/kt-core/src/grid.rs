//! Arithmétique de la grille ku-ten (94×94).
//!
//! A code point is `row << 8 | column`. Rows may carry a plane number above
//! the low byte (JIS X 0213: plane 1 row 0x72 is row `0x172`).

/// First valid column (and row low byte) on the wire.
pub const COL_MIN: u8 = 0x21;

/// Last valid column (and row low byte) on the wire.
pub const COL_MAX: u8 = 0x7e;

/// Number of positions on each grid axis.
pub const GRID_WIDTH: usize = 94;

/// Offset between a 1-based ku-ten number and its wire byte (`1 → 0x21`).
pub const KUTEN_OFFSET: u8 = 0x20;

/// Split a code point into `(row, column)`.
///
/// # Example
/// ```
/// use kt_core::grid::split;
/// assert_eq!(split(0x7a21), (0x7a, 0x21));
/// assert_eq!(split(0x1_7222), (0x172, 0x22));
/// ```
#[inline(always)]
#[must_use]
pub const fn split(cp: u32) -> (u32, u32) {
    (cp >> 8, cp & 0xff)
}

/// Rebuild a code point from its grid position.
///
/// # Example
/// ```
/// use kt_core::grid::code_point;
/// assert_eq!(code_point(0x7a, 0x21), 0x7a21);
/// ```
#[inline]
#[must_use]
pub const fn code_point(row: u16, column: u8) -> u32 {
    ((row as u32) << 8) | column as u32
}

/// `true` if `byte` lies in `[0x21, 0x7e]`.
#[inline(always)]
#[must_use]
pub const fn is_valid_column(byte: u32) -> bool {
    byte >= COL_MIN as u32 && byte <= COL_MAX as u32
}

/// `true` if the low byte of `row` is a valid grid byte. The plane bits are not checked.
#[inline]
#[must_use]
pub const fn is_valid_row(row: u32) -> bool {
    is_valid_column(row & 0xff)
}

/// Convert a 1-based ku-ten pair into wire `(row, column)`.
///
/// Returns `None` unless both values are in `[1, 94]`.
///
/// # Example
/// ```
/// use kt_core::grid::kuten_to_grid;
/// assert_eq!(kuten_to_grid(90, 1), Some((0x7a, 0x21)));
/// assert_eq!(kuten_to_grid(95, 1), None);
/// ```
#[must_use]
pub fn kuten_to_grid(ku: u8, ten: u8) -> Option<(u16, u8)> {
    let valid = 1..=GRID_WIDTH as u8;
    if !valid.contains(&ku) || !valid.contains(&ten) {
        return None;
    }
    Some((u16::from(ku + KUTEN_OFFSET), ten + KUTEN_OFFSET))
}
