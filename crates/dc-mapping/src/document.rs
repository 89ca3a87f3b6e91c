use dc_encode::DotToken;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names of an entry, in source order.
pub type Fields = Map<String, Value>;

/// Field holding the dot specification.
pub const DOTS_FIELD: &str = "dots";
/// Computed braille character.
pub const BRAILLE_FIELD: &str = "braille";
/// Computed `U+XXXX` string.
pub const UNICODE_FIELD: &str = "unicode";

/// Source document: `{ entries: [...], settings: {...} }`.
///
/// Only `entries` is required. `settings` is carried through untouched.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MappingDocument {
    pub entries: Vec<MappingEntry>,
    #[serde(default = "empty_settings")]
    pub settings: Value,
}

fn empty_settings() -> Value {
    Value::Object(Map::new())
}

/// One loosely-typed record of the source mapping.
///
/// # Example
/// ```
/// use dc_encode::DotToken;
/// use dc_mapping::document::MappingEntry;
/// let entry: MappingEntry = serde_json::from_str(r#"{"print": "b", "dots": ["1-2"]}"#).unwrap();
/// assert_eq!(entry.dot_tokens(), Some(vec![DotToken::Text("1-2".into())]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MappingEntry {
    pub fields: Fields,
}

impl MappingEntry {
    /// Tokens of the `dots` field, or `None` when the entry has no such field.
    ///
    /// A scalar `dots` value is a one-token specification; `null` is an empty one.
    #[must_use]
    pub fn dot_tokens(&self) -> Option<Vec<DotToken>> {
        self.fields.get(DOTS_FIELD).map(dot_tokens)
    }
}

/// Convert a `dots` value into encoder tokens.
#[must_use]
pub fn dot_tokens(value: &Value) -> Vec<DotToken> {
    match value {
        Value::Array(items) => items.iter().map(token_from_value).collect(),
        Value::Null => Vec::new(),
        scalar => vec![token_from_value(scalar)],
    }
}

fn token_from_value(value: &Value) -> DotToken {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map_or_else(|| DotToken::Other(n.to_string()), DotToken::Number),
        Value::String(s) => DotToken::Text(s.clone()),
        other => DotToken::Other(other.to_string()),
    }
}

/// Entry after encoding: the original fields plus the computed cell.
///
/// Entries without `dots` have both computed fields unset and serialize
/// exactly as they were read.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EnrichedEntry {
    #[serde(flatten)]
    pub fields: Fields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub braille: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode: Option<String>,
}

impl EnrichedEntry {
    #[must_use]
    pub fn passthrough(entry: MappingEntry) -> Self {
        Self {
            fields: entry.fields,
            braille: None,
            unicode: None,
        }
    }

    #[must_use]
    pub fn is_encoded(&self) -> bool {
        self.braille.is_some()
    }
}

/// Output document, same shape as the source.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnrichedDocument {
    pub entries: Vec<EnrichedEntry>,
    pub settings: Value,
}
