use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::grid;

/// Shape of the mapping file a variant is built from.
///
/// # Example
/// ```
/// use kt_core::config::InputForm;
/// assert!(matches!(InputForm::default(), InputForm::Direct));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum InputForm {
    /// `code_point target [target2]`, already on the grid.
    #[default]
    Direct,
    /// UCM lines `<UXXXX> \xHH\xHH |F`, Shift_JIS bytes to be transformed.
    Ucm,
}

/// Comment les lignes sont regroupées en blocs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Layout {
    /// One block over a fixed row range. Skipped rows are sentinel-filled.
    Fixed {
        /// First row of the range, inclusive.
        first_row: u16,
        /// Last row of the range, inclusive.
        last_row: u16,
    },
    /// A new block whenever the row jumps by more than one.
    #[default]
    Blocks,
}

/// Everything the pipeline needs to know about one character-set variant.
///
/// # Example
/// ```
/// use kt_core::config::{InputForm, VariantConfig};
/// let v = VariantConfig::arib_symbols();
/// assert_eq!(v.form, InputForm::Ucm);
/// assert_eq!(v.expected_first_row, Some(0x7a));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VariantConfig {
    /// Identifiant, ex. "arib_symbols".
    pub name: String,
    /// Input file shape.
    pub form: InputForm,
    /// Block segmentation strategy.
    pub layout: Layout,
    /// Row the first entry must sit on, if the variant pins one.
    pub expected_first_row: Option<u16>,
    /// Accepted ku range `[min, max]` for the Shift_JIS transform (UCM only).
    pub kuten_rows: Option<[u8; 2]>,
    /// Name of the emitted decode function. Defaults depend on the table shape.
    pub function_name: Option<String>,
}

impl VariantConfig {
    /// Empty variant with default settings.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            form: InputForm::default(),
            layout: Layout::default(),
            expected_first_row: None,
            kuten_rows: None,
            function_name: None,
        }
    }

    /// ARIB STD-B24 additional symbols, ku 90 to 94.
    #[must_use]
    pub fn arib_symbols() -> Self {
        Self {
            name: "arib_symbols".to_string(),
            form: InputForm::Ucm,
            layout: Layout::Fixed {
                first_row: 0x7a,
                last_row: 0x7e,
            },
            expected_first_row: Some(0x7a),
            kuten_rows: Some([90, 94]),
            function_name: None,
        }
    }

    /// JIS X 0213 planes 1 and 2, rows prefixed with the plane number.
    #[must_use]
    pub fn jisx0213() -> Self {
        Self {
            name: "jisx0213".to_string(),
            form: InputForm::Direct,
            layout: Layout::Blocks,
            expected_first_row: None,
            kuten_rows: None,
            function_name: None,
        }
    }

    /// Check ranges that would otherwise only surface at compile time.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidLayout`] for an empty or off-grid fixed
    /// range, [`CoreError::Config`] for an inconsistent first row or ku range.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Layout::Fixed {
            first_row,
            last_row,
        } = self.layout
        {
            if first_row > last_row
                || !grid::is_valid_row(u32::from(first_row))
                || !grid::is_valid_row(u32::from(last_row))
            {
                return Err(CoreError::InvalidLayout {
                    first_row,
                    last_row,
                });
            }
            if let Some(row) = self.expected_first_row {
                if !(first_row..=last_row).contains(&row) {
                    return Err(CoreError::Config(format!(
                        "{}: expected_first_row 0x{row:x} hors de 0x{first_row:x}..=0x{last_row:x}",
                        self.name
                    )));
                }
            }
        }
        if let Some([lo, hi]) = self.kuten_rows {
            if lo == 0 || lo > hi || usize::from(hi) > grid::GRID_WIDTH {
                return Err(CoreError::Config(format!(
                    "{}: kuten_rows [{lo}, {hi}] invalide",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// Variant names compare with `-` and `_` treated alike.
fn normalize(name: &str) -> String {
    name.trim().replace('-', "_").to_ascii_lowercase()
}

/// Known variants: built-in presets, possibly overridden by a config file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantSet {
    variants: Vec<VariantConfig>,
}

impl Default for VariantSet {
    fn default() -> Self {
        Self {
            variants: vec![VariantConfig::arib_symbols(), VariantConfig::jisx0213()],
        }
    }
}

impl VariantSet {
    /// Look up a variant by name.
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownVariant`] if no variant carries `name`.
    ///
    /// # Example
    /// ```
    /// use kt_core::config::VariantSet;
    /// let set = VariantSet::default();
    /// assert!(set.find("arib-symbols").is_ok());
    /// assert!(set.find("big5").is_err());
    /// ```
    pub fn find(&self, name: &str) -> Result<&VariantConfig, CoreError> {
        let key = normalize(name);
        self.variants
            .iter()
            .find(|v| normalize(&v.name) == key)
            .ok_or_else(|| CoreError::UnknownVariant {
                name: name.to_string(),
            })
    }

    /// Names of all known variants.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.name.as_str()).collect()
    }

    fn entry_mut(&mut self, name: &str) -> &mut VariantConfig {
        let key = normalize(name);
        let idx = match self.variants.iter().position(|v| normalize(&v.name) == key) {
            Some(idx) => idx,
            None => {
                self.variants.push(VariantConfig::named(name));
                self.variants.len() - 1
            }
        };
        &mut self.variants[idx]
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    variant: Vec<VariantSection>,
}

/// One `[[variant]]` table, every field but `name` optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VariantSection {
    name: String,
    form: Option<InputForm>,
    layout: Option<Layout>,
    expected_first_row: Option<u16>,
    kuten_rows: Option<[u8; 2]>,
    function_name: Option<String>,
}

/// Parse TOML text and merge it over the built-in presets.
///
/// # Errors
/// Returns an error if the text is not valid TOML or a merged variant fails
/// [`VariantConfig::validate`].
///
/// # Example
/// ```
/// use kt_core::config::{parse_config, Layout};
/// let set = parse_config(r#"
///     [[variant]]
///     name = "arib_symbols"
///     function_name = "symbol_to_char"
///
///     [[variant]]
///     name = "jis_kanji"
///     layout = "Blocks"
/// "#).unwrap();
/// let arib = set.find("arib_symbols").unwrap();
/// assert_eq!(arib.function_name.as_deref(), Some("symbol_to_char"));
/// assert_eq!(arib.expected_first_row, Some(0x7a));
/// assert_eq!(set.find("jis_kanji").unwrap().layout, Layout::Blocks);
/// ```
pub fn parse_config(content: &str) -> Result<VariantSet> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut set = VariantSet::default();
    for section in file.variant {
        let v = set.entry_mut(&section.name);
        if let Some(form) = section.form {
            v.form = form;
        }
        if let Some(layout) = section.layout {
            v.layout = layout;
        }
        if let Some(row) = section.expected_first_row {
            v.expected_first_row = Some(row);
        }
        if let Some(rows) = section.kuten_rows {
            v.kuten_rows = Some(rows);
        }
        if let Some(name) = section.function_name {
            v.function_name = Some(name);
        }
        v.validate()?;
    }
    Ok(set)
}

/// Charge un fichier TOML et fusionne avec les presets intégrés.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use kt_core::config::load_config;
/// use std::path::Path;
/// let set = load_config(Path::new("kuten.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<VariantSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let set = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("{} variantes connues : {:?}", set.variants.len(), set.names());
    Ok(set)
}
