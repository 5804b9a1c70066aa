//! A single decoded YAML document.

use crate::error::Error;
use crate::DELIMITER;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

/// One YAML document of a stream, held in its decoded form.
///
/// A document carries no identity beyond its position in the owning
/// [`Stream`](crate::Stream) and exposes no mutation API. An empty document
/// (nothing between two delimiters) holds [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    value: Value,
}

impl Document {
    pub fn new(value: Value) -> Self {
        Document { value }
    }

    /// The decoded content.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The root mapping, if the document is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        self.value.as_mapping()
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// True for documents with no content, or an empty root mapping.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::Mapping(m) => m.is_empty(),
            _ => false,
        }
    }

    /// Serialize back to YAML text, always prefixed with `---\n`.
    ///
    /// The leading delimiter makes the output of several documents safe to
    /// concatenate into a valid multi-document stream.
    ///
    /// # Panics
    ///
    /// Panics if the value cannot be encoded, which cannot happen for
    /// content that was itself decoded from YAML.
    pub fn to_yaml_string(&self) -> String {
        let body = serde_yaml::to_string(&self.value)
            .unwrap_or_else(|e| panic!("decoded YAML document failed to re-encode: {}", e));
        let mut out = String::with_capacity(DELIMITER.len() + body.len());
        out.push_str(DELIMITER);
        out.push_str(&body);
        out
    }

    /// Byte form of [`Document::to_yaml_string`].
    pub fn bytes(&self) -> Vec<u8> {
        self.to_yaml_string().into_bytes()
    }

    /// Decode the document into a new value of type `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_yaml::from_value(self.value.clone()).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Decode the document into `dest`.
    ///
    /// On a shape mismatch `dest` is left untouched.
    pub fn unmarshal<T: DeserializeOwned>(&self, dest: &mut T) -> Result<(), Error> {
        *dest = self.decode()?;
        Ok(())
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Document::new(value)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.to_yaml_string())
    }
}
