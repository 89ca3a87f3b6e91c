use dc_core::config::{CellSize, DotPolicy, EncoderConfig};

use crate::cell::BrailleCell;
use crate::error::EncodeError;
use crate::token::DotToken;

/// Bit value per dot position, dot 1 first.
///
/// Dot numbering (column-major):
/// ```text
///  1 4
///  2 5
///  3 6
///  7 8
/// ```
const DOT_BITS: [u8; 8] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];

/// Resolve one dot number to its bit, or `None` if the cell has no such dot.
///
/// # Example
/// ```
/// use dc_core::config::CellSize;
/// use dc_encode::encoder::dot_bit;
/// assert_eq!(dot_bit(6, CellSize::Six), Some(0x20));
/// assert_eq!(dot_bit(7, CellSize::Six), None);
/// assert_eq!(dot_bit(7, CellSize::Eight), Some(0x40));
/// ```
#[must_use]
pub fn dot_bit(dot: i64, cell: CellSize) -> Option<u8> {
    if (1..=i64::from(cell.max_dot())).contains(&dot) {
        Some(DOT_BITS[(dot - 1) as usize])
    } else {
        None
    }
}

/// Encode plain dot numbers into an 8-dot cell, ignoring anything outside 1..=8.
///
/// # Example
/// ```
/// use dc_encode::encode_dots;
/// assert_eq!(encode_dots(&[3, 4, 5, 6]).unicode(), "U+283C");
/// assert_eq!(encode_dots(&[0, 9]).code_point(), 0x2800);
/// ```
#[must_use]
pub fn encode_dots(dots: &[u8]) -> BrailleCell {
    let mask = dots.iter().fold(0u8, |acc, &d| {
        acc | dot_bit(i64::from(d), CellSize::Eight).unwrap_or(0)
    });
    BrailleCell::from_mask(mask)
}

/// Stateless dot-pattern encoder.
///
/// Accumulates one bit per referenced dot with bitwise OR, so the result does
/// not depend on token order or repetition.
///
/// # Example
/// ```
/// use dc_encode::DotEncoder;
/// let encoder = DotEncoder::default();
/// let cell = encoder.encode(["1-2", "5"]).unwrap();
/// assert_eq!(cell.ch(), '⠓');
/// assert_eq!(cell.unicode(), "U+2813");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DotEncoder {
    config: EncoderConfig,
}

impl DotEncoder {
    #[must_use]
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a dot specification into a cell.
    ///
    /// # Errors
    /// Only with [`DotPolicy::Reject`]: returns [`EncodeError::InvalidDot`]
    /// for the first token that names no dot of the configured cell.
    pub fn encode<I, T>(&self, dots: I) -> Result<BrailleCell, EncodeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<DotToken>,
    {
        let mut mask = 0u8;
        for token in dots {
            mask |= self.resolve(&token.into())?;
        }
        Ok(BrailleCell::from_mask(mask))
    }

    /// Bits contributed by one token (several for a composite token).
    ///
    /// # Errors
    /// See [`DotEncoder::encode`].
    pub fn resolve(&self, token: &DotToken) -> Result<u8, EncodeError> {
        let cell = self.config.cell_size;
        match token {
            DotToken::Number(n) => match dot_bit(*n, cell) {
                Some(bit) => Ok(bit),
                None => self.unknown(token),
            },
            DotToken::Text(text) => {
                let text = text.trim();
                let sep = self.config.separator;
                if self.config.composite && text.contains(sep) {
                    let mut bits = 0u8;
                    for part in text.split(sep) {
                        match single_digit(part.trim(), cell) {
                            Some(bit) => bits |= bit,
                            // Une partie vide ou inconnue ("1-", "1-x") invalide le token entier.
                            None => {
                                self.unknown(token)?;
                            }
                        }
                    }
                    Ok(bits)
                } else {
                    match single_digit(text, cell) {
                        Some(bit) => Ok(bit),
                        None => self.unknown(token),
                    }
                }
            }
            DotToken::Other(_) => self.unknown(token),
        }
    }

    fn unknown(&self, token: &DotToken) -> Result<u8, EncodeError> {
        match self.config.invalid_dots {
            DotPolicy::Ignore => {
                log::trace!("Token de point ignoré : '{token}'");
                Ok(0)
            }
            DotPolicy::Reject => Err(EncodeError::InvalidDot {
                token: token.to_string(),
                max_dot: self.config.cell_size.max_dot(),
            }),
        }
    }
}

/// A text token names a dot only if it is exactly one ASCII digit.
fn single_digit(text: &str, cell: CellSize) -> Option<u8> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).and_then(|d| dot_bit(i64::from(d), cell)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder(cell_size: CellSize, invalid_dots: DotPolicy) -> DotEncoder {
        DotEncoder::new(EncoderConfig {
            cell_size,
            invalid_dots,
            ..EncoderConfig::default()
        })
    }

    fn cp<I, T>(enc: &DotEncoder, dots: I) -> u32
    where
        I: IntoIterator<Item = T>,
        T: Into<DotToken>,
    {
        enc.encode(dots).unwrap().code_point()
    }

    #[test]
    fn each_single_dot_sets_its_bit() {
        let enc = DotEncoder::default();
        for d in 1..=6u8 {
            assert_eq!(cp(&enc, [d]), 0x2800 + (1 << (d - 1)));
            assert_eq!(cp(&enc, [d.to_string()]), 0x2800 + (1 << (d - 1)));
        }
    }

    #[test]
    fn empty_specification_is_blank() {
        let enc = DotEncoder::default();
        assert_eq!(cp(&enc, Vec::<DotToken>::new()), 0x2800);
    }

    #[test]
    fn duplicates_and_order_do_not_matter() {
        let enc = DotEncoder::default();
        assert_eq!(cp(&enc, [1u8, 1, 2]), cp(&enc, [1u8, 2]));
        assert_eq!(cp(&enc, [2u8, 1]), cp(&enc, [1u8, 2]));
    }

    #[test]
    fn composite_token_equals_split_tokens() {
        let enc = DotEncoder::default();
        let composite = cp(&enc, ["1-2"]);
        assert_eq!(composite, cp(&enc, ["1", "2"]));
        assert_eq!(composite, cp(&enc, [1u8, 2]));
        assert_eq!(composite, 0x2803);
        assert_eq!(cp(&enc, [" 1 - 2 "]), composite);
    }

    #[test]
    fn integer_and_text_tokens_mix() {
        let enc = DotEncoder::default();
        let tokens = vec![DotToken::from(1u8), DotToken::from("4-5")];
        assert_eq!(cp(&enc, &tokens), 0x2819);
    }

    #[test]
    fn out_of_range_is_ignored_for_six_dots() {
        let enc = DotEncoder::default();
        assert_eq!(cp(&enc, [7u8]), 0x2800);
        assert_eq!(cp(&enc, [0u8]), 0x2800);
        assert_eq!(cp(&enc, [-3i64]), 0x2800);
        assert_eq!(cp(&enc, ["x", "", "12", "1-", "-"]), 0x2801);
    }

    #[test]
    fn eight_dot_cells_use_bits_six_and_seven() {
        let enc = encoder(CellSize::Eight, DotPolicy::Ignore);
        assert_eq!(cp(&enc, [7u8, 8]), 0x28C0);
        assert_eq!(cp(&enc, ["7-8", "1"]), 0x28C1);
        assert_eq!(cp(&enc, [9u8]), 0x2800);
    }

    #[test]
    fn dots_3456_is_number_sign() {
        let enc = DotEncoder::default();
        let cell = enc.encode([3u8, 4, 5, 6]).unwrap();
        assert_eq!(cell.code_point(), 0x2800 | (4 | 8 | 16 | 32));
        assert_eq!(cell.code_point(), 0x283C);
        assert_eq!(cell.ch(), '⠼');
        assert_eq!(encode_dots(&[3, 4, 5, 6]), cell);
    }

    #[test]
    fn reject_policy_names_the_token() {
        let enc = encoder(CellSize::Six, DotPolicy::Reject);
        assert_eq!(
            enc.encode([1u8, 7]),
            Err(EncodeError::InvalidDot {
                token: "7".into(),
                max_dot: 6
            })
        );
        assert_eq!(
            enc.encode(["1-"]),
            Err(EncodeError::InvalidDot {
                token: "1-".into(),
                max_dot: 6
            })
        );
        assert!(enc.encode(["x"]).is_err());
        assert!(enc.encode([DotToken::Other("true".into())]).is_err());
        assert_eq!(enc.encode(["1-2", "3"]).map(BrailleCell::mask), Ok(0x07));
    }

    #[test]
    fn composite_syntax_can_be_disabled() {
        let enc = DotEncoder::new(EncoderConfig {
            composite: false,
            ..EncoderConfig::default()
        });
        assert_eq!(cp(&enc, ["1-2"]), 0x2800);
        assert_eq!(cp(&enc, ["1", "2"]), 0x2803);
    }

    #[test]
    fn custom_separator() {
        let enc = DotEncoder::new(EncoderConfig {
            separator: '+',
            ..EncoderConfig::default()
        });
        assert_eq!(cp(&enc, ["1+2+3"]), 0x2807);
        assert_eq!(cp(&enc, ["1-2"]), 0x2800);
    }

    #[test]
    fn decode_inverts_encode() {
        let enc = DotEncoder::default();
        let cell = enc.encode([5u8, 2, 2, 1]).unwrap();
        assert_eq!(cell.dots(), vec![1, 2, 5]);
        assert_eq!(enc.encode(cell.dots()).unwrap(), cell);
    }
}
