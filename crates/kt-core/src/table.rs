use serde::{Deserialize, Serialize};

use crate::grid::{self, COL_MIN, GRID_WIDTH};

/// Slot value meaning "no mapping at this position".
pub const SENTINEL: char = '\0';

/// Largest multi-scalar index a slot can carry. Literal targets start at 0x80.
pub const MAX_MULTI_INDEX: usize = 0x7f;

/// Contenu logique d'un slot de la table dense.
///
/// Flattened to a single `char` for storage: `'\0'` is empty, `1..=0x7f` is a
/// 1-based index into the multi-scalar table, anything `>= 0x80` is literal.
///
/// # Example
/// ```
/// use kt_core::table::Slot;
/// assert_eq!(Slot::from_char('\0'), Slot::Empty);
/// assert_eq!(Slot::from_char('\u{1}'), Slot::Multi(1));
/// assert_eq!(Slot::from_char('\u{4e9c}'), Slot::Scalar('\u{4e9c}'));
/// assert_eq!(Slot::Multi(3).to_char(), '\u{3}');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Unmapped position.
    Empty,
    /// Literal scalar, always `>= 0x80`.
    Scalar(char),
    /// 1-based index into the multi-scalar table.
    Multi(u8),
}

impl Slot {
    /// Decode the compact storage form.
    #[inline(always)]
    #[must_use]
    pub fn from_char(c: char) -> Self {
        match u32::from(c) {
            0 => Self::Empty,
            v if v < 0x80 => Self::Multi(v as u8),
            _ => Self::Scalar(c),
        }
    }

    /// Compact storage form.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Empty => SENTINEL,
            Self::Scalar(c) => c,
            Self::Multi(index) => char::from(index),
        }
    }
}

/// Contiguous run of rows sharing one region of the dense table.
///
/// # Example
/// ```
/// use kt_core::table::Block;
/// let b = Block { first_row: 0x7a, last_row: 0x7e, offset: 0 };
/// assert_eq!(b.rows(), 5);
/// assert_eq!(b.slots(), 470);
/// assert!(b.contains(0x7c));
/// assert!(!b.contains(0x79));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// First row, inclusive.
    pub first_row: u16,
    /// Last row, inclusive.
    pub last_row: u16,
    /// Cumulative slot offset of this block in the dense table.
    pub offset: usize,
}

impl Block {
    /// Number of rows covered.
    #[must_use]
    pub const fn rows(&self) -> usize {
        (self.last_row - self.first_row) as usize + 1
    }

    /// Number of dense slots covered (`rows × 94`).
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.rows() * GRID_WIDTH
    }

    /// `true` if `row` falls within `[first_row, last_row]`.
    #[inline(always)]
    #[must_use]
    pub const fn contains(&self, row: u32) -> bool {
        row >= self.first_row as u32 && row <= self.last_row as u32
    }
}

/// Borrowed, immutable view over compiled tables. This is what decodes.
///
/// Constructible in a `const` context, so tables baked into a binary need no
/// initialisation step:
///
/// ```
/// use kt_core::table::{Block, TableView};
///
/// static DENSE: [char; 94] = {
///     let mut t = ['\0'; 94];
///     t[0] = '\u{26cc}';
///     t[1] = '\u{1}';
///     t
/// };
/// static MULTI: [[char; 2]; 1] = [['1', '2']];
/// static BLOCKS: [Block; 1] = [Block { first_row: 0x7a, last_row: 0x7a, offset: 0 }];
/// static SYMBOLS: TableView<'static> = TableView::new(&DENSE, &MULTI, &BLOCKS);
///
/// assert_eq!(SYMBOLS.decode(0x7a21), Some(&['\u{26cc}'][..]));
/// assert_eq!(SYMBOLS.decode(0x7a22), Some(&['1', '2'][..]));
/// assert_eq!(SYMBOLS.decode(0x7a23), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TableView<'a> {
    dense: &'a [char],
    multi: &'a [[char; 2]],
    blocks: &'a [Block],
}

impl<'a> TableView<'a> {
    #[must_use]
    pub const fn new(dense: &'a [char], multi: &'a [[char; 2]], blocks: &'a [Block]) -> Self {
        Self {
            dense,
            multi,
            blocks,
        }
    }

    /// Décode un code point en un ou deux scalaires.
    ///
    /// Total over every input: a row outside all blocks, a column outside
    /// `[0x21, 0x7e]`, an index past the table, or a sentinel slot all give
    /// `None`. Never allocates; the returned slice borrows the tables.
    #[inline(always)]
    #[must_use]
    pub fn decode(&self, cp: u32) -> Option<&'a [char]> {
        let (row, col) = grid::split(cp);
        let block = self.blocks.iter().find(|b| b.contains(row))?;
        if !grid::is_valid_column(col) {
            return None;
        }
        let pos = (row - u32::from(block.first_row)) as usize * GRID_WIDTH
            + (col - u32::from(COL_MIN)) as usize
            + block.offset;
        let slot = self.dense.get(pos..=pos)?;
        match Slot::from_char(slot[0]) {
            Slot::Empty => None,
            Slot::Scalar(_) => Some(slot),
            Slot::Multi(index) => self
                .multi
                .get(usize::from(index) - 1)
                .map(<[char; 2]>::as_slice),
        }
    }

    /// Decode a position known to map to one scalar. Pairs and misses give `None`.
    #[must_use]
    pub fn decode_single(&self, cp: u32) -> Option<char> {
        match self.decode(cp)? {
            [c] => Some(*c),
            _ => None,
        }
    }

    /// Dense slots, sentinel-filled.
    #[must_use]
    pub fn dense(&self) -> &'a [char] {
        self.dense
    }

    /// Multi-scalar table in encounter order.
    #[must_use]
    pub fn multi(&self) -> &'a [[char; 2]] {
        self.multi
    }

    /// Block boundaries in ascending row order.
    #[must_use]
    pub fn blocks(&self) -> &'a [Block] {
        self.blocks
    }
}

/// Owned output of the table compiler. Immutable once built.
///
/// Share a runtime-built table process-wide with `std::sync::LazyLock`:
///
/// ```
/// use std::sync::LazyLock;
/// use kt_core::table::{Block, CompiledTable};
///
/// static TABLE: LazyLock<CompiledTable> = LazyLock::new(|| {
///     let mut dense = vec!['\0'; 94];
///     dense[2] = '\u{4e8c}';
///     CompiledTable::new(dense, Vec::new(), vec![Block { first_row: 0x75, last_row: 0x75, offset: 0 }])
/// });
///
/// assert_eq!(TABLE.view().decode_single(0x7523), Some('\u{4e8c}'));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompiledTable {
    dense: Vec<char>,
    multi: Vec<[char; 2]>,
    blocks: Vec<Block>,
}

impl CompiledTable {
    /// Assemble a table from its parts.
    ///
    /// Callers are expected to uphold `dense.len() == Σ block.slots()`; this
    /// is checked in debug builds.
    #[must_use]
    pub fn new(dense: Vec<char>, multi: Vec<[char; 2]>, blocks: Vec<Block>) -> Self {
        debug_assert_eq!(
            dense.len(),
            blocks.iter().map(Block::slots).sum::<usize>(),
            "dense length must equal the sum of block sizes"
        );
        Self {
            dense,
            multi,
            blocks,
        }
    }

    /// Borrow as a decodable view.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView::new(&self.dense, &self.multi, &self.blocks)
    }

    /// See [`TableView::decode`].
    #[must_use]
    pub fn decode(&self, cp: u32) -> Option<&[char]> {
        self.view().decode(cp)
    }

    #[must_use]
    pub fn dense(&self) -> &[char] {
        &self.dense
    }

    #[must_use]
    pub fn multi(&self) -> &[[char; 2]] {
        &self.multi
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// `true` if every row fits in one byte (no plane prefix).
    #[must_use]
    pub fn is_single_plane(&self) -> bool {
        self.blocks.iter().all(|b| b.last_row <= 0xff)
    }
}
