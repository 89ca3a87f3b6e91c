/// Dot-pattern → Unicode braille encoding for dotcell.
///
/// Turns dot specifications (`[1, 2]`, `["1-2"]`, ...) into characters of
/// the U+2800 block and back.
pub mod cell;
pub mod encoder;
pub mod error;
pub mod token;

pub use cell::{BRAILLE_BASE, BrailleCell, parse_code_point};
pub use encoder::{DotEncoder, encode_dots};
pub use error::EncodeError;
pub use token::DotToken;
