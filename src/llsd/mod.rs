//! LLSD XML markup: value model, parser and pretty formatter
//!
//! LLSD documents are rooted at `<llsd>` and hold exactly one value. Settings
//! files use a `<map>` root whose `<key>`/value pairs are the named entries.
//!
//! ```xml
//! <?xml version="1.0" ?>
//! <llsd>
//! <map>
//!   <key>AFKTimeout</key>
//!   <map>
//!     <key>Type</key>
//!     <string>F32</string>
//!     <key>Value</key>
//!     <real>300.0</real>
//!   </map>
//! </map>
//! </llsd>
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

mod format;
mod parse;

pub use format::PrettyFormatter;
pub use parse::parse_xml;

/// Key-ordered LLSD map
pub type Map = BTreeMap<String, Value>;

/// A single LLSD value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undef,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Uuid(String),
    Date(String),
    Uri(String),
    /// Encoded payload, kept as written, with the `encoding` attribute if
    /// one was given (absent means base64)
    Binary {
        encoding: Option<String>,
        data: String,
    },
    Array(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Element name used for this value in LLSD XML
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undef => "undef",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::String(_) => "string",
            Value::Uuid(_) => "uuid",
            Value::Date(_) => "date",
            Value::Uri(_) => "uri",
            Value::Binary { .. } => "binary",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }
}

#[cfg(test)]
impl Value {
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn into_map(self) -> Option<Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Errors raised while reading LLSD XML
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlsdError {
    #[error("malformed XML: {message}")]
    Xml { message: String },

    #[error("document root is <{found}>, expected <llsd>")]
    NotLlsd { found: String },

    #[error("unknown element <{name}>")]
    UnknownElement { name: String },

    #[error("unexpected element <{name}> inside <{parent}>")]
    UnexpectedElement { name: String, parent: String },

    #[error("unexpected text '{text}'")]
    UnexpectedText { text: String },

    #[error("key '{key}' has no value")]
    MissingValue { key: String },

    #[error("invalid {kind} value '{text}'")]
    InvalidScalar { kind: &'static str, text: String },

    #[error("unexpected end of document")]
    UnexpectedEof,

    #[error("content after </llsd>")]
    TrailingContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_match_element_names() {
        assert_eq!(Value::Undef.type_name(), "undef");
        assert_eq!(Value::Real(1.5).type_name(), "real");
        assert_eq!(Value::Map(Map::new()).type_name(), "map");
        assert_eq!(Value::Array(Vec::new()).type_name(), "array");
    }

    #[test]
    fn test_as_map() {
        assert!(Value::Map(Map::new()).as_map().is_some());
        assert!(Value::Integer(1).as_map().is_none());
        assert!(Value::String("x".into()).into_map().is_none());
    }
}
