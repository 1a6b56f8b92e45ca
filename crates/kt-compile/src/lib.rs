/// Table compiler for ku-ten character sets.
///
/// Reads sparse mapping files, builds dense sentinel-filled tables, and
/// emits them as embeddable Rust source.
pub mod compiler;
pub mod emit;
pub mod error;
pub mod ingest;
pub mod sjis;

pub use compiler::{TableCompiler, compile};
pub use error::CompileError;
