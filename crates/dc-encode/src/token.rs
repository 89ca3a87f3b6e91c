use std::fmt;

/// One entry of a dot specification.
///
/// Mapping documents are loosely typed: the same list may hold integers,
/// digit strings and composite strings such as `"1-2"`. Values of any other
/// shape are kept as [`DotToken::Other`] so that the encoder can apply its
/// invalid-dot policy to them instead of the loader failing.
///
/// # Example
/// ```
/// use dc_encode::DotToken;
/// assert_eq!(DotToken::from(3u8), DotToken::Number(3));
/// assert_eq!(DotToken::from("1-2"), DotToken::Text("1-2".into()));
/// assert_eq!(DotToken::from("1-2").to_string(), "1-2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DotToken {
    /// Integer dot number (`3`).
    Number(i64),
    /// Textual dot number or composite token (`"3"`, `"1-2"`).
    Text(String),
    /// Rendering of a value that is neither an integer nor a string.
    Other(String),
}

impl From<u8> for DotToken {
    fn from(dot: u8) -> Self {
        Self::Number(i64::from(dot))
    }
}

impl From<i32> for DotToken {
    fn from(dot: i32) -> Self {
        Self::Number(i64::from(dot))
    }
}

impl From<i64> for DotToken {
    fn from(dot: i64) -> Self {
        Self::Number(dot)
    }
}

impl From<&str> for DotToken {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DotToken {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for DotToken {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<&DotToken> for DotToken {
    fn from(token: &DotToken) -> Self {
        token.clone()
    }
}

impl fmt::Display for DotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) | Self::Other(s) => f.write_str(s),
        }
    }
}
