//! Identifier quoting and strict name validation.
//!
//! Names that consist only of ASCII letters, digits, and underscores are
//! "bare" and appear in identifiers as-is. Anything else (spaces, the `.`,
//! `(`, `)` delimiters, unicode) is wrapped in double quotes on output.
//! There is no escaping of embedded quote characters: a name containing `"`
//! will not survive a round trip, which callers must avoid at construction
//! time (see [`validate_name`]).

use crate::error::{RefError, Result};

/// Maximum name length accepted by the strict validation layer.
///
/// Conservative limit across common databases:
/// - PostgreSQL: 63 bytes
/// - SQL Server: 128 characters
/// - MySQL: 64 characters
pub const MAX_NAME_LENGTH: usize = 128;

/// Check whether a name needs quote-wrapping in an identifier.
///
/// Empty names are bare: absence of a namespace level is rendered as an
/// empty segment, never as `""`.
pub fn needs_quoting(name: &str) -> bool {
    name.chars()
        .any(|c| !c.is_ascii_alphanumeric() && c != '_')
}

/// Quote a name for use in an identifier.
///
/// Returns the name unchanged when it is bare, otherwise wraps it in double
/// quotes. Embedded double quotes are not escaped.
///
/// # Examples
///
/// ```
/// use schema_ref::quote;
///
/// assert_eq!(quote("users"), "users");
/// assert_eq!(quote("bad char"), "\"bad char\"");
/// assert_eq!(quote(""), "");
/// ```
pub fn quote(name: &str) -> String {
    if needs_quoting(name) {
        format!("\"{}\"", name)
    } else {
        name.to_string()
    }
}

/// Strip one pair of surrounding double quotes, if both are present.
///
/// Any other token, including a lone `"` or a token quoted on one side
/// only, is returned unchanged.
pub fn unquote(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// Validate a name for use in strict contexts.
///
/// Rejects:
/// - Empty names
/// - Names containing null bytes (injection vector)
/// - Names exceeding [`MAX_NAME_LENGTH`]
///
/// # Errors
///
/// Returns the matching [`RefError`] variant for invalid names.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RefError::EmptyName);
    }

    if name.contains('\0') {
        return Err(RefError::NullByte(name.to_string()));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(RefError::TooLong {
            name: name.to_string(),
            len: name.len(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Quoting tests
    // =========================================================================

    #[test]
    fn test_needs_quoting() {
        assert!(!needs_quoting("users"));
        assert!(!needs_quoting("my_table"));
        assert!(!needs_quoting("Table123"));
        assert!(!needs_quoting(""));

        assert!(needs_quoting("bad char"));
        assert!(needs_quoting("a.b"));
        assert!(needs_quoting("fn(x)"));
        assert!(needs_quoting("quoted\"name"));
        assert!(needs_quoting("日本語"));
    }

    #[test]
    fn test_quote_bare_names_unchanged() {
        assert_eq!(quote("users"), "users");
        assert_eq!(quote("my_table"), "my_table");
        assert_eq!(quote(""), "");
    }

    #[test]
    fn test_quote_wraps_special_characters() {
        assert_eq!(quote("bad char"), "\"bad char\"");
        assert_eq!(quote("a.b"), "\"a.b\"");
        assert_eq!(quote("a(b)"), "\"a(b)\"");
    }

    #[test]
    fn test_unquote_strips_matched_pair() {
        assert_eq!(unquote("\"bad char\""), "bad char");
        assert_eq!(unquote("\"users\""), "users");
        assert_eq!(unquote("\"\""), "");
    }

    #[test]
    fn test_unquote_leaves_other_tokens_alone() {
        assert_eq!(unquote("users"), "users");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"open"), "\"open");
        assert_eq!(unquote("close\""), "close\"");
        assert_eq!(unquote(""), "");
    }

    #[test]
    fn test_quote_unquote_round_trip() {
        for name in ["users", "bad char", "Table123", "a.b.c"] {
            assert_eq!(unquote(&quote(name)), name);
        }
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn test_validate_name_normal() {
        assert!(validate_name("users").is_ok());
        assert!(validate_name("my_table").is_ok());
        assert!(validate_name("column with spaces").is_ok());
        assert!(validate_name("日本語").is_ok());
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        assert_eq!(validate_name(""), Err(RefError::EmptyName));
    }

    #[test]
    fn test_validate_name_rejects_null_byte() {
        let result = validate_name("table\0name");
        assert!(matches!(result, Err(RefError::NullByte(_))));
    }

    #[test]
    fn test_validate_name_rejects_too_long() {
        let long_name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            validate_name(&long_name),
            Err(RefError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_name_accepts_max_length() {
        let max_name = "a".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&max_name).is_ok());
    }
}
