use std::path::Path;

use anyhow::{Context, Result};
use dc_core::CoreError;

use crate::document::MappingDocument;

/// Serialization of a mapping document, chosen from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
    /// `.yaml` / `.yml`, the format hand-written mappings are usually kept in.
    Yaml,
}

impl SourceFormat {
    /// Detect the format from the extension (case-insensitive).
    ///
    /// # Errors
    /// Returns [`CoreError::UnsupportedFormat`] for any other extension.
    ///
    /// # Example
    /// ```
    /// use dc_mapping::loader::SourceFormat;
    /// use std::path::Path;
    /// assert_eq!(SourceFormat::from_path(Path::new("map.JSON")).unwrap(), SourceFormat::Json);
    /// assert_eq!(SourceFormat::from_path(Path::new("map.yml")).unwrap(), SourceFormat::Yaml);
    /// assert!(SourceFormat::from_path(Path::new("map.csv")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(CoreError::UnsupportedFormat {
                format: if ext.is_empty() {
                    path.display().to_string()
                } else {
                    ext
                },
            }),
        }
    }
}

/// Parse a mapping document from text.
///
/// # Errors
/// Returns an error if the text is not valid for `format` or lacks `entries`.
pub fn parse_document(text: &str, format: SourceFormat) -> Result<MappingDocument> {
    let doc = match format {
        SourceFormat::Json => serde_json::from_str(text).context("Erreur de parsing JSON")?,
        SourceFormat::Toml => toml::from_str(text).context("Erreur de parsing TOML")?,
        SourceFormat::Yaml => serde_yaml::from_str(text).context("Erreur de parsing YAML")?,
    };
    Ok(doc)
}

/// Charge un document de mapping depuis le disque.
///
/// # Errors
/// Returns an error if the file is missing, has an unsupported extension,
/// cannot be read, or cannot be parsed.
pub fn load_document(path: &Path) -> Result<MappingDocument> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let format = SourceFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let doc = parse_document(&text, format).with_context(|| path.display().to_string())?;
    log::debug!(
        "{} entrées chargées depuis {} ({format:?})",
        doc.entries.len(),
        path.display()
    );
    Ok(doc)
}
