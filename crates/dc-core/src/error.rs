use thiserror::Error;

/// Errors raised while resolving configuration or locating mapping documents.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// The composite separator would collide with dot digits or trimming.
    #[error("Séparateur invalide '{separator}' : ni chiffre ni espace autorisé")]
    InvalidSeparator {
        /// Offending separator character.
        separator: char,
    },

    /// Mapping document does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Document extension is not JSON, TOML or YAML.
    #[error("Format de document non supporté : {format} (attendu : json, toml, yaml, yml)")]
    UnsupportedFormat {
        /// The extension (or path) that was rejected.
        format: String,
    },
}
