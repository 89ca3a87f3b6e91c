use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Séparateur par défaut des tokens composites (`"1-2"`).
pub const DEFAULT_SEPARATOR: char = '-';

/// Configuration complète du convertisseur.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use dc_core::config::{CellSize, ConverterConfig, DotPolicy};
/// let config = ConverterConfig::default();
/// assert_eq!(config.encoder.cell_size, CellSize::Six);
/// assert_eq!(config.encoder.invalid_dots, DotPolicy::Ignore);
/// assert!(config.output.pretty);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Dot token interpretation.
    pub encoder: EncoderConfig,
    /// JSON writer settings.
    pub output: OutputConfig,
}

/// How dot tokens are turned into a cell bitmask.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Number of dot positions in a cell.
    pub cell_size: CellSize,
    /// What to do with tokens that name no valid dot.
    pub invalid_dots: DotPolicy,
    /// Separator splitting composite tokens such as `"1-2"`.
    pub separator: char,
    /// Accept composite tokens at all. When off, `"1-2"` is a single unknown token.
    pub composite: bool,
}

/// JSON output settings.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Indent with two spaces; compact single-line JSON otherwise.
    pub pretty: bool,
}

/// Braille cell size.
///
/// # Example
/// ```
/// use dc_core::config::CellSize;
/// assert_eq!(CellSize::Six.max_dot(), 6);
/// assert_eq!(CellSize::Eight.max_dot(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum CellSize {
    /// Standard literary braille, dots 1–6.
    #[default]
    Six,
    /// Computer braille, dots 1–8.
    Eight,
}

impl CellSize {
    /// Highest dot number valid for this cell size.
    #[must_use]
    pub const fn max_dot(self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Eight => 8,
        }
    }
}

/// Policy for dot tokens that do not resolve to a dot of the configured cell.
///
/// `Ignore` treats them as "not raised"; this is what the historical data
/// pipeline did. `Reject` surfaces them as errors.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum DotPolicy {
    /// Unknown tokens contribute nothing to the bitmask.
    #[default]
    Ignore,
    /// Unknown tokens abort encoding.
    Reject,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            cell_size: CellSize::Six,
            invalid_dots: DotPolicy::Ignore,
            separator: DEFAULT_SEPARATOR,
            composite: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ConverterConfig {
    /// Check cross-field constraints that TOML typing cannot express.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidSeparator`] if the separator is an ASCII
    /// digit or whitespace; either would make dot tokens ambiguous.
    pub fn validate(&self) -> Result<(), CoreError> {
        let sep = self.encoder.separator;
        if sep.is_ascii_digit() || sep.is_whitespace() {
            return Err(CoreError::InvalidSeparator { separator: sep });
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    encoder: Option<EncoderSection>,
    output: Option<OutputSection>,
}

/// Encoder section, all fields optional for partial override.
#[derive(Deserialize)]
struct EncoderSection {
    cell_size: Option<CellSize>,
    invalid_dots: Option<DotPolicy>,
    separator: Option<char>,
    composite: Option<bool>,
}

/// Output section, all fields optional.
#[derive(Deserialize)]
struct OutputSection {
    pretty: Option<bool>,
}

/// Parse du TOML et fusion avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema or if
/// [`ConverterConfig::validate`] fails.
///
/// # Example
/// ```
/// use dc_core::config::{parse_config, CellSize};
/// let config = parse_config("[encoder]\ncell_size = \"Eight\"\n").unwrap();
/// assert_eq!(config.encoder.cell_size, CellSize::Eight);
/// assert_eq!(config.encoder.separator, '-');
/// ```
pub fn parse_config(content: &str) -> Result<ConverterConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = ConverterConfig::default();

    if let Some(e) = file.encoder {
        if let Some(v) = e.cell_size {
            config.encoder.cell_size = v;
        }
        if let Some(v) = e.invalid_dots {
            config.encoder.invalid_dots = v;
        }
        if let Some(v) = e.separator {
            config.encoder.separator = v;
        }
        if let Some(v) = e.composite {
            config.encoder.composite = v;
        }
    }

    if let Some(v) = file.output.and_then(|o| o.pretty) {
        config.output.pretty = v;
    }

    config.validate()?;
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use dc_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("dotcell.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConverterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let config =
        parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}
