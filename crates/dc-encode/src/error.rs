use thiserror::Error;

/// Errors originating from dot encoding and code point parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Token names no dot of the configured cell (only raised under `DotPolicy::Reject`).
    #[error("Point invalide '{token}' pour une cellule de {max_dot} points")]
    InvalidDot {
        /// The offending token, as written in the source.
        token: String,
        /// Highest dot number the cell accepts.
        max_dot: u8,
    },

    /// Text is not of the `U+XXXX` shape.
    #[error("Code point mal formé : '{0}' (attendu U+XXXX)")]
    MalformedCodePoint(String),

    /// Scalar lies outside the braille patterns block.
    #[error("U+{0:04X} hors du bloc braille (U+2800..U+28FF)")]
    OutsideBlock(u32),
}
