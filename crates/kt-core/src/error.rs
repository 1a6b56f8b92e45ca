use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// No preset or config entry carries this variant name.
    #[error("Variante inconnue : {name}")]
    UnknownVariant {
        /// Name that was looked up.
        name: String,
    },

    /// A fixed layout whose row range is empty or not on the grid.
    #[error("Plage de lignes invalide : 0x{first_row:x}..=0x{last_row:x}")]
    InvalidLayout {
        /// First row of the range.
        first_row: u16,
        /// Last row of the range.
        last_row: u16,
    },
}
