//! Attribute type parsing.
//!
//! Attribute types are free-form strings as found in schema metadata
//! (`"varchar"`, `"numeric(18,2)"`, `"json"`). Parsing keeps the original
//! text and attaches a coarse kind label.

use serde::{Deserialize, Serialize};

/// Coarse classification of an attribute type.
///
/// Only the [`Unknown`](Self::Unknown) fallback is produced today; a real
/// taxonomy must come from the consuming system's type vocabulary, so no
/// further kinds are guessed here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum AttributeTypeKind {
    /// Unrecognized type label.
    #[default]
    Unknown,
}

impl AttributeTypeKind {
    /// The lowercase label used in serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
        }
    }
}

/// Parsed type descriptor: the original string plus its kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeType {
    /// The original type string, unmodified.
    pub full: String,

    /// Coarse classification of the type.
    pub kind: AttributeTypeKind,
}

impl AttributeType {
    /// Parse a raw type label.
    ///
    /// Total: any input yields a descriptor with the original text in
    /// `full`. Every label currently classifies as
    /// [`AttributeTypeKind::Unknown`].
    pub fn parse(full: &str) -> Self {
        Self {
            full: full.to_string(),
            kind: AttributeTypeKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_original_text() {
        let parsed = AttributeType::parse("text");
        assert_eq!(parsed.full, "text");
        assert_eq!(parsed.kind, AttributeTypeKind::Unknown);

        let parsed = AttributeType::parse("numeric(18,2)");
        assert_eq!(parsed.full, "numeric(18,2)");
        assert_eq!(parsed.kind, AttributeTypeKind::Unknown);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_value(AttributeType::parse("text")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"full": "text", "kind": "unknown"})
        );
    }
}
