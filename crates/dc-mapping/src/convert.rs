use std::path::{Path, PathBuf};

use anyhow::Result;
use dc_core::ConverterConfig;
use dc_encode::DotEncoder;

use crate::enrich::{ConversionReport, enrich_document};
use crate::loader::load_document;
use crate::writer::write_document;

/// Output path used when none is given: the input with a `.json` extension,
/// or `<stem>.braille.json` when the input is already JSON.
///
/// # Example
/// ```
/// use dc_mapping::convert::default_output_path;
/// use std::path::{Path, PathBuf};
/// assert_eq!(default_output_path(Path::new("data/map.toml")), PathBuf::from("data/map.json"));
/// assert_eq!(default_output_path(Path::new("map.json")), PathBuf::from("map.braille.json"));
/// ```
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let is_json = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        input.with_extension("braille.json")
    } else {
        input.with_extension("json")
    }
}

/// Load `input`, encode every entry's dots, write the JSON result to `output`.
///
/// # Errors
/// Returns an error if loading, encoding (under `DotPolicy::Reject`) or
/// writing fails. Nothing is written when loading or encoding fails.
pub fn convert_file(input: &Path, output: &Path, config: &ConverterConfig) -> Result<ConversionReport> {
    let doc = load_document(input)?;
    let encoder = DotEncoder::new(config.encoder);
    let (enriched, report) = enrich_document(doc, &encoder)?;
    write_document(&enriched, output, &config.output)?;
    log::info!(
        "{} -> {} : {report}",
        input.display(),
        output.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_core::config::DotPolicy;
    use serde_json::{Value, json};

    #[test]
    fn converts_toml_mapping_to_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mapping.toml");
        std::fs::write(
            &input,
            r#"
[settings]
grade = 1

[[entries]]
print = "a"
dots = ["1"]

[[entries]]
print = "number"
dots = ["3-4", "5-6"]

[[entries]]
print = "space"
"#,
        )
        .unwrap();
        let output = default_output_path(&input);

        let report = convert_file(&input, &output, &ConverterConfig::default()).unwrap();
        assert_eq!(
            report,
            ConversionReport {
                total: 3,
                encoded: 2,
                passthrough: 1
            }
        );

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({
                "entries": [
                    {"print": "a", "dots": ["1"], "braille": "⠁", "unicode": "U+2801"},
                    {"print": "number", "dots": ["3-4", "5-6"], "braille": "⠼", "unicode": "U+283C"},
                    {"print": "space"}
                ],
                "settings": {"grade": 1}
            })
        );
    }

    #[test]
    fn rejected_dots_leave_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mapping.json");
        std::fs::write(&input, r#"{"entries": [{"dots": ["1", "7"]}]}"#).unwrap();
        let output = default_output_path(&input);

        let mut config = ConverterConfig::default();
        config.encoder.invalid_dots = DotPolicy::Reject;
        assert!(convert_file(&input, &output, &config).is_err());
        assert!(!output.exists());

        config.encoder.invalid_dots = DotPolicy::Ignore;
        convert_file(&input, &output, &config).unwrap();
        let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["entries"][0]["unicode"], json!("U+2801"));
    }

    #[test]
    fn demo_mapping_converts() {
        let dir = tempfile::tempdir().unwrap();
        let input = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/ueb-letters.toml"));
        let output = dir.path().join("ueb-letters.json");
        let report = convert_file(input, &output, &ConverterConfig::default()).unwrap();
        assert_eq!(report.encoded, 7);
        assert_eq!(report.passthrough, 1);

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let chars: String = written["entries"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|e| e["braille"].as_str())
            .collect();
        assert_eq!(chars, "⠁⠃⠉⠙⠑⠼⠠");
    }
}
