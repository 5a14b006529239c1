//! JSON dictionary loading.
//!
//! A lexicon dictionary is expressible as a flat JSON object whose values
//! are integers:
//!
//! ```json
//! {"cat": 10, "car": 20, "dog": 30}
//! ```
//!
//! Keys go in as UTF-8 bytes; values must fit in an `i32`.

use serde_json::Value as JsonValue;

use crate::builder::build;
use crate::error::{Error, Result};
use crate::lexicon::Lexicon;

/// Parse a JSON object of `key: int32` pairs and build a lexicon from it.
///
/// # Errors
///
/// Returns `Error::JsonParse` when the input is not valid JSON or not a
/// top-level object, `Error::ValueOutOfRange` when a value is not an
/// integer fitting in `i32`, and the usual build errors for invalid keys.
///
/// # Example
///
/// ```
/// let lexicon = reimu::from_json(r#"{"cat": 10, "dog": 30}"#).unwrap();
/// assert_eq!(lexicon.get(b"cat"), Some(10));
/// assert_eq!(lexicon.get(b"cow"), None);
/// ```
pub fn from_json(json: &str) -> Result<Lexicon> {
    let value: JsonValue =
        serde_json::from_str(json).map_err(|e| Error::JsonParse(e.to_string()))?;
    let JsonValue::Object(entries) = value else {
        return Err(Error::JsonParse("expected a top-level object".to_string()));
    };

    let mut dict = Vec::with_capacity(entries.len());
    for (key, value) in &entries {
        let parsed = value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| Error::ValueOutOfRange { key: key.clone() })?;
        dict.push((key.as_bytes(), parsed));
    }
    build(dict)
}
