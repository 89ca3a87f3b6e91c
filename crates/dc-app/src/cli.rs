use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dc_core::config::{CellSize, ConverterConfig, DotPolicy};

/// dotcell — braille dot patterns to Unicode.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Fichier de configuration TOML. Défaut : dotcell.toml.
    #[arg(short, long, global = true, default_value = "dotcell.toml")]
    pub config: PathBuf,

    /// Taille de cellule : six, eight (ou 6, 8).
    #[arg(long, global = true)]
    pub cell_size: Option<String>,

    /// Points invalides : ignore, reject.
    #[arg(long, global = true)]
    pub invalid_dots: Option<String>,

    /// Séparateur des tokens composites ("1-2").
    #[arg(long, global = true)]
    pub separator: Option<char>,

    /// JSON compact (une ligne) au lieu de l'indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub compact: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convertit un mapping (JSON ou TOML) en JSON enrichi de caractères braille.
    Convert {
        /// Document source (.json ou .toml).
        input: PathBuf,
        /// Fichier JSON de sortie. Défaut : <input>.json.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Reconvertir à chaque modification du fichier source.
        #[arg(long, default_value_t = false)]
        watch: bool,
    },
    /// Affiche le caractère et le code point d'une liste de points.
    Encode {
        /// Points levés : 1 2 5, ou composites 1-2 5.
        #[arg(allow_hyphen_values = true)]
        dots: Vec<String>,
    },
    /// Décompose un caractère braille (ou U+XXXX) en points.
    Decode {
        /// Caractère braille ou code point U+28XX.
        cell: String,
    },
}

impl Cli {
    /// Applique les overrides CLI sur la config chargée.
    ///
    /// Unknown values are logged and leave the config untouched.
    pub fn apply_overrides(&self, config: &mut ConverterConfig) {
        if let Some(ref size) = self.cell_size {
            config.encoder.cell_size = match size.to_ascii_lowercase().as_str() {
                "six" | "6" => CellSize::Six,
                "eight" | "8" => CellSize::Eight,
                _ => {
                    log::warn!("Taille de cellule inconnue '{size}', utilisation de la config.");
                    config.encoder.cell_size
                }
            };
        }
        if let Some(ref policy) = self.invalid_dots {
            config.encoder.invalid_dots = match policy.to_ascii_lowercase().as_str() {
                "ignore" => DotPolicy::Ignore,
                "reject" => DotPolicy::Reject,
                _ => {
                    log::warn!("Politique inconnue '{policy}', utilisation de la config.");
                    config.encoder.invalid_dots
                }
            };
        }
        if let Some(sep) = self.separator {
            config.encoder.separator = sep;
        }
        if self.compact {
            config.output.pretty = false;
        }
    }
}
