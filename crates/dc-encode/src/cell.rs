//! Cellule Braille Unicode (U+2800..U+28FF)
//!
//! Bits activés :
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//! | 7 | 8 |
//! +---+---+
//!
//! Dot `n` is bit `n - 1` above [`BRAILLE_BASE`].

use std::fmt;
use std::str::FromStr;

use crate::error::EncodeError;

/// Braille base codepoint (U+2800), the blank cell.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Last codepoint of the braille patterns block (all eight dots).
pub const BRAILLE_LAST: u32 = 0x28FF;

/// One braille character, stored as its dot bitmask.
///
/// # Example
/// ```
/// use dc_encode::BrailleCell;
/// let cell = BrailleCell::from_mask(0b0001_0011); // dots 1, 2, 5
/// assert_eq!(cell.ch(), '⠓');
/// assert_eq!(cell.unicode(), "U+2813");
/// assert_eq!(cell.dots(), vec![1, 2, 5]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrailleCell {
    mask: u8,
}

impl BrailleCell {
    /// The blank cell, U+2800.
    pub const BLANK: Self = Self { mask: 0 };

    #[must_use]
    pub const fn from_mask(mask: u8) -> Self {
        Self { mask }
    }

    #[must_use]
    pub const fn mask(self) -> u8 {
        self.mask
    }

    /// Scalar value, always `0x2800 | mask`.
    #[must_use]
    pub const fn code_point(self) -> u32 {
        BRAILLE_BASE | self.mask as u32
    }

    /// The braille character itself.
    #[must_use]
    #[inline]
    pub const fn ch(self) -> char {
        // Every value in 0x2800..=0x28FF is a valid scalar.
        match char::from_u32(self.code_point()) {
            Some(c) => c,
            None => ' ',
        }
    }

    /// Canonical `U+XXXX` form (uppercase, four hex digits).
    #[must_use]
    pub fn unicode(self) -> String {
        format!("U+{:04X}", self.code_point())
    }

    /// Whether dot `dot` (1..=8) is raised. Out-of-range dots are never raised.
    #[must_use]
    pub const fn is_raised(self, dot: u8) -> bool {
        matches!(dot, 1..=8) && self.mask & (1 << (dot - 1)) != 0
    }

    /// Raised dots in ascending order.
    #[must_use]
    pub fn dots(self) -> Vec<u8> {
        (1..=8).filter(|&d| self.is_raised(d)).collect()
    }

    /// Raised dots joined by `separator`, e.g. `"1-2-5"`. Empty for the blank cell.
    ///
    /// # Example
    /// ```
    /// use dc_encode::BrailleCell;
    /// assert_eq!(BrailleCell::from_mask(0x3C).dot_notation('-'), "3-4-5-6");
    /// assert_eq!(BrailleCell::BLANK.dot_notation('-'), "");
    /// ```
    #[must_use]
    pub fn dot_notation(self, separator: char) -> String {
        let mut out = String::new();
        for d in self.dots() {
            if !out.is_empty() {
                out.push(separator);
            }
            out.push(char::from(b'0' + d));
        }
        out
    }
}

impl fmt::Display for BrailleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ch())
    }
}

impl TryFrom<u32> for BrailleCell {
    type Error = EncodeError;

    fn try_from(code_point: u32) -> Result<Self, Self::Error> {
        if (BRAILLE_BASE..=BRAILLE_LAST).contains(&code_point) {
            Ok(Self::from_mask((code_point - BRAILLE_BASE) as u8))
        } else {
            Err(EncodeError::OutsideBlock(code_point))
        }
    }
}

impl TryFrom<char> for BrailleCell {
    type Error = EncodeError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::try_from(u32::from(ch))
    }
}

/// Accepts either `U+XXXX` or a literal braille character.
impl FromStr for BrailleCell {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_ascii() => Self::try_from(c),
            _ => Self::try_from(parse_code_point(s)?),
        }
    }
}

/// Parse a `U+XXXX` code point string back into its scalar value.
///
/// The `U+` prefix is case-insensitive; one to six hex digits are accepted.
///
/// # Errors
/// Returns [`EncodeError::MalformedCodePoint`] if the prefix is missing or the
/// digits are not hexadecimal.
///
/// # Example
/// ```
/// use dc_encode::cell::parse_code_point;
/// assert_eq!(parse_code_point("U+283C"), Ok(0x283C));
/// assert_eq!(parse_code_point("u+28ff"), Ok(0x28FF));
/// assert!(parse_code_point("283C").is_err());
/// ```
pub fn parse_code_point(s: &str) -> Result<u32, EncodeError> {
    let malformed = || EncodeError::MalformedCodePoint(s.to_owned());
    let digits = s
        .strip_prefix("U+")
        .or_else(|| s.strip_prefix("u+"))
        .ok_or_else(malformed)?;
    if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    u32::from_str_radix(digits, 16).map_err(|_| malformed())
}
