/// Types, grid arithmetic, and the row-addressed decoder for kuten.
///
/// This crate holds everything shared between the table compiler and the
/// code that consumes compiled tables at decode time.

pub mod config;
pub mod entry;
pub mod error;
pub mod grid;
pub mod table;

pub use config::{InputForm, Layout, VariantConfig, VariantSet};
pub use entry::{SourceEntry, Target};
pub use error::CoreError;
pub use table::{Block, CompiledTable, Slot, TableView};
