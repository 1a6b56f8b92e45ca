use std::cmp::Ordering;

use kt_core::config::{Layout, VariantConfig};
use kt_core::entry::{SourceEntry, Target};
use kt_core::grid::{self, COL_MIN, GRID_WIDTH};
use kt_core::table::{Block, CompiledTable, MAX_MULTI_INDEX, SENTINEL, Slot};

use crate::error::CompileError;

/// Position of the last emitted entry and the block it lives in.
#[derive(Clone, Copy, Debug)]
struct Cursor {
    first_row: u16,
    offset: usize,
    row: u16,
    column: u8,
}

/// Construit la table dense entrée par entrée.
///
/// Entries must arrive in strictly ascending `(row, column)` order. Skipped
/// positions inside a block become sentinel slots. With [`Layout::Blocks`] a
/// row jump larger than one closes the current block and opens a new one
/// instead of filling the skipped rows. Every block is padded to the end of
/// its last row, so the dense length is always `Σ rows × 94`.
///
/// # Example
/// ```
/// use kt_core::config::Layout;
/// use kt_core::entry::SourceEntry;
/// use kt_compile::TableCompiler;
///
/// let mut c = TableCompiler::with_layout(Layout::Blocks, None);
/// c.push(&SourceEntry::single(0x75, 0x21, '\u{4e9c}')).unwrap();
/// c.push(&SourceEntry::single(0x75, 0x23, '\u{4e8c}')).unwrap();
/// let table = c.finish().unwrap();
/// assert_eq!(&table.dense()[..3], &['\u{4e9c}', '\0', '\u{4e8c}']);
/// assert_eq!(table.decode(0x7522), None);
/// ```
#[derive(Debug)]
pub struct TableCompiler {
    layout: Layout,
    expected_first_row: Option<u16>,
    dense: Vec<char>,
    multi: Vec<[char; 2]>,
    blocks: Vec<Block>,
    cursor: Option<Cursor>,
}

impl TableCompiler {
    /// Compiler configured for `variant`.
    #[must_use]
    pub fn new(variant: &VariantConfig) -> Self {
        Self::with_layout(variant.layout, variant.expected_first_row)
    }

    #[must_use]
    pub fn with_layout(layout: Layout, expected_first_row: Option<u16>) -> Self {
        Self {
            layout,
            expected_first_row,
            dense: Vec::new(),
            multi: Vec::new(),
            blocks: Vec::new(),
            cursor: None,
        }
    }

    /// Append one entry.
    ///
    /// # Errors
    /// Any [`CompileError`] position or ordering variant. The compiler must be
    /// discarded after an error.
    pub fn push(&mut self, entry: &SourceEntry) -> Result<(), CompileError> {
        let SourceEntry {
            row,
            column,
            target,
        } = *entry;
        self.check_position(row, column)?;

        let (first_row, offset) = match self.cursor {
            None => {
                if let Some(expected) = self.expected_first_row {
                    if row != expected {
                        return Err(CompileError::UnexpectedFirstRow {
                            expected,
                            found: row,
                        });
                    }
                }
                let first_row = match self.layout {
                    Layout::Fixed { first_row, .. } => first_row,
                    Layout::Blocks => row,
                };
                log::debug!("bloc ouvert à 0x{first_row:x}");
                (first_row, 0)
            }
            Some(cur) => {
                check_order(cur.row, cur.column, row, column)?;
                if self.layout == Layout::Blocks && row - cur.row > 1 {
                    self.close_block(cur.first_row, cur.offset, cur.row);
                    log::debug!("bloc ouvert à 0x{row:x} (offset {})", self.dense.len());
                    (row, self.dense.len())
                } else {
                    (cur.first_row, cur.offset)
                }
            }
        };

        let slot = self.encode(row, column, target)?;
        let index = offset
            + usize::from(row - first_row) * GRID_WIDTH
            + usize::from(column - COL_MIN);
        debug_assert!(index >= self.dense.len(), "ordering already checked");
        self.dense.resize(index, SENTINEL);
        self.dense.push(slot.to_char());

        self.cursor = Some(Cursor {
            first_row,
            offset,
            row,
            column,
        });
        Ok(())
    }

    /// Close the last block and hand over the finished table.
    ///
    /// # Errors
    /// [`CompileError::Empty`] if no entry was pushed.
    pub fn finish(mut self) -> Result<CompiledTable, CompileError> {
        let Some(cur) = self.cursor else {
            return Err(CompileError::Empty);
        };
        let last_row = match self.layout {
            Layout::Fixed { last_row, .. } => last_row,
            Layout::Blocks => cur.row,
        };
        self.close_block(cur.first_row, cur.offset, last_row);

        log::info!(
            "table compilée : {} slots, {} bloc(s), {} entrée(s) multi-scalaires",
            self.dense.len(),
            self.blocks.len(),
            self.multi.len()
        );
        Ok(CompiledTable::new(self.dense, self.multi, self.blocks))
    }

    fn check_position(&self, row: u16, column: u8) -> Result<(), CompileError> {
        if !grid::is_valid_column(u32::from(column)) {
            return Err(CompileError::ColumnOutOfRange { row, column });
        }
        if !grid::is_valid_row(u32::from(row)) {
            return Err(CompileError::RowOutOfRange { row });
        }
        if let Layout::Fixed {
            first_row,
            last_row,
        } = self.layout
        {
            if !(first_row..=last_row).contains(&row) {
                return Err(CompileError::RowOutOfRange { row });
            }
        }
        Ok(())
    }

    fn encode(&mut self, row: u16, column: u8, target: Target) -> Result<Slot, CompileError> {
        match target {
            Target::Single(c) => {
                if u32::from(c) < 0x80 {
                    return Err(CompileError::LiteralInIndexRange {
                        row,
                        column,
                        scalar: u32::from(c),
                    });
                }
                Ok(Slot::Scalar(c))
            }
            Target::Pair(pair) => {
                if self.multi.len() >= MAX_MULTI_INDEX {
                    return Err(CompileError::MultiTableFull {
                        row,
                        column,
                        max: MAX_MULTI_INDEX,
                    });
                }
                self.multi.push(pair);
                Ok(Slot::Multi(self.multi.len() as u8))
            }
        }
    }

    fn close_block(&mut self, first_row: u16, offset: usize, last_row: u16) {
        let block = Block {
            first_row,
            last_row,
            offset,
        };
        self.dense.resize(offset + block.slots(), SENTINEL);
        log::debug!(
            "bloc 0x{first_row:x}..=0x{last_row:x} fermé ({} slots)",
            block.slots()
        );
        self.blocks.push(block);
    }
}

fn check_order(prev_row: u16, prev_col: u8, row: u16, column: u8) -> Result<(), CompileError> {
    match row.cmp(&prev_row) {
        Ordering::Less => Err(CompileError::NonMonotonicRow {
            row,
            previous: prev_row,
        }),
        Ordering::Greater => Ok(()),
        Ordering::Equal => match column.cmp(&prev_col) {
            Ordering::Less => Err(CompileError::OutOfOrder {
                row,
                column,
                previous: prev_col,
            }),
            Ordering::Equal => Err(CompileError::DuplicatePosition { row, column }),
            Ordering::Greater => Ok(()),
        },
    }
}

/// Compile a full, pre-sorted entry list for `variant`.
///
/// # Errors
/// The first [`CompileError`] encountered; nothing is returned on failure.
pub fn compile(variant: &VariantConfig, entries: &[SourceEntry]) -> Result<CompiledTable, CompileError> {
    let mut compiler = TableCompiler::new(variant);
    for entry in entries {
        compiler.push(entry)?;
    }
    compiler.finish()
}
