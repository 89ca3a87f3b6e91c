use std::path::Path;

use anyhow::{Context, Result};
use dc_core::ConverterConfig;
use dc_encode::{BrailleCell, DotEncoder};
use dc_mapping::convert::{convert_file, default_output_path};

use crate::watch;

/// `dotcell convert`.
///
/// # Errors
/// Returns an error if the one-shot conversion fails, or if the watcher
/// cannot be started in `--watch` mode.
pub fn run_convert(
    input: &Path,
    output: Option<&Path>,
    watch_input: bool,
    config: &ConverterConfig,
) -> Result<()> {
    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
    if output == input {
        anyhow::bail!(
            "La sortie écraserait la source : {}. Utilisez -o <fichier>.",
            input.display()
        );
    }

    let report = convert_file(input, &output, config)?;
    println!("JSON généré : {} ({report})", output.display());

    if watch_input {
        watch::watch_and_convert(input, &output, config)?;
    }
    Ok(())
}

/// Ligne affichée par `dotcell encode` : `<char> U+XXXX`.
///
/// # Errors
/// Returns an error if a token is rejected by the configured policy.
pub fn encode_line(encoder: &DotEncoder, dots: &[String]) -> Result<String> {
    let cell = encoder
        .encode(dots)
        .with_context(|| format!("Points : {}", dots.join(" ")))?;
    Ok(format!("{cell} {}", cell.unicode()))
}

/// Texte affiché par `dotcell decode`.
///
/// # Errors
/// Returns an error if `input` is neither a braille character nor a `U+XXXX`
/// code point of the braille block.
pub fn decode_line(input: &str, separator: char) -> Result<String> {
    let cell: BrailleCell = input
        .parse()
        .with_context(|| format!("Cellule invalide : '{input}'"))?;
    let dots = if cell.mask() == 0 {
        "(none)".to_owned()
    } else {
        cell.dot_notation(separator)
    };
    Ok(format!("{cell} {} dots: {dots}", cell.unicode()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_core::config::{CellSize, DotPolicy, EncoderConfig};

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn encode_prints_char_and_code_point() {
        let line = encode_line(&DotEncoder::default(), &tokens(&["3", "4", "5", "6"])).unwrap();
        assert_eq!(line, "⠼ U+283C");
        let line = encode_line(&DotEncoder::default(), &[]).unwrap();
        assert_eq!(line, "\u{2800} U+2800");
    }

    #[test]
    fn encode_eight_dot_cell() {
        let encoder = DotEncoder::new(EncoderConfig {
            cell_size: CellSize::Eight,
            ..EncoderConfig::default()
        });
        assert_eq!(encode_line(&encoder, &tokens(&["7-8"])).unwrap(), "⣀ U+28C0");
    }

    #[test]
    fn encode_reject_fails() {
        let encoder = DotEncoder::new(EncoderConfig {
            invalid_dots: DotPolicy::Reject,
            ..EncoderConfig::default()
        });
        assert!(encode_line(&encoder, &tokens(&["1", "9"])).is_err());
    }

    #[test]
    fn decode_from_char_and_code_point() {
        assert_eq!(decode_line("⠓", '-').unwrap(), "⠓ U+2813 dots: 1-2-5");
        assert_eq!(decode_line("U+2813", '-').unwrap(), "⠓ U+2813 dots: 1-2-5");
        assert_eq!(decode_line("U+2800", '-').unwrap(), "\u{2800} U+2800 dots: (none)");
        assert!(decode_line("A", '-').is_err());
    }

    #[test]
    fn convert_writes_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("map.json");
        std::fs::write(&input, r#"{"entries": [{"dots": [1, 2]}]}"#).unwrap();
        run_convert(&input, None, false, &ConverterConfig::default()).unwrap();
        assert!(dir.path().join("map.braille.json").exists());
    }

    #[test]
    fn convert_refuses_to_overwrite_source() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("map.json");
        std::fs::write(&input, r#"{"entries": []}"#).unwrap();
        assert!(run_convert(&input, Some(&input), false, &ConverterConfig::default()).is_err());
        assert_eq!(std::fs::read_to_string(&input).unwrap(), r#"{"entries": []}"#);
    }
}
