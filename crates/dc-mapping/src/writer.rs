use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use dc_core::config::OutputConfig;

use crate::document::EnrichedDocument;

/// Serialize a document as UTF-8 JSON (braille characters are not escaped).
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json_string(doc: &EnrichedDocument, output: &OutputConfig) -> Result<String> {
    let serialized = if output.pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    let mut json = serialized.context("Erreur de sérialisation JSON")?;
    json.push('\n');
    Ok(json)
}

/// Écrit le document JSON de façon atomique.
///
/// The JSON goes to a temporary file next to `path`, which is then renamed
/// over the destination, so readers never observe a half-written file.
///
/// # Errors
/// Returns an error if the temporary file cannot be created, written, or
/// persisted.
pub fn write_document(doc: &EnrichedDocument, path: &Path, output: &OutputConfig) -> Result<()> {
    let json = to_json_string(doc, output)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Impossible de créer un fichier temporaire dans {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .with_context(|| format!("Impossible d'écrire {}", tmp.path().display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;

    log::info!("JSON écrit : {} ({} octets)", path.display(), json.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::EnrichedEntry;
    use serde_json::json;

    fn sample() -> EnrichedDocument {
        let mut fields = serde_json::Map::new();
        fields.insert("print".into(), json!("a"));
        EnrichedDocument {
            entries: vec![EnrichedEntry {
                fields,
                braille: Some('⠁'),
                unicode: Some("U+2801".into()),
            }],
            settings: json!({}),
        }
    }

    #[test]
    fn compact_output() {
        let out = to_json_string(&sample(), &OutputConfig { pretty: false }).unwrap();
        assert_eq!(
            out,
            "{\"entries\":[{\"print\":\"a\",\"braille\":\"⠁\",\"unicode\":\"U+2801\"}],\"settings\":{}}\n"
        );
    }

    #[test]
    fn pretty_output_uses_two_spaces() {
        let out = to_json_string(&sample(), &OutputConfig::default()).unwrap();
        assert!(out.starts_with("{\n  \"entries\": [\n    {\n      \"print\": \"a\""));
        assert!(out.contains("\"braille\": \"⠁\""));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "old").unwrap();
        write_document(&sample(), &path, &OutputConfig::default()).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["entries"][0]["unicode"], json!("U+2801"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
