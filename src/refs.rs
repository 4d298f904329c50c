//! Qualified reference codec for namespaces, entities, types, and attributes.
//!
//! Every reference has a compact textual identifier usable in UIs, exports,
//! and lookups. Namespace, entity, and type identifiers encode at most four
//! dot-separated segments counted from the right:
//! `[database.]catalog.schema.name`. Absent levels are rendered as empty
//! segments, so `ax...users` is entity `users` in database `ax` with no
//! catalog or schema.
//!
//! Parsing is lenient and total: any string recovers a best-effort
//! structure. Formatting is strict: names outside the bare-identifier
//! character set are quote-wrapped, so `from_id(to_id(r)) == r` for any
//! reference whose names contain no literal `.` or `"`.
//!
//! # Known limitation
//!
//! The segment split is quote-unaware: a quoted name containing a literal
//! `.` is split like any other text before unquoting is applied. Existing
//! identifiers depend on this, so it is documented behavior here rather
//! than a defect to fix silently.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ident::{quote, unquote, validate_name};
use crate::path::{attribute_path_from_id, attribute_path_to_id, AttributePath};
use crate::Result;

/// Maximum namespace depth: database, catalog, schema.
const MAX_LEVELS: usize = 3;

/// Split an identifier on `.`, unquote each segment, and keep the rightmost
/// `max` segments.
///
/// Segments beyond `max` are dropped with a warning; identifiers that deep
/// are handled best-effort only.
fn rightmost_segments(id: &str, max: usize) -> Vec<String> {
    let raw: Vec<&str> = id.split('.').collect();
    if raw.len() > max {
        tracing::warn!(
            "identifier {:?} has {} dot-separated segments; keeping the rightmost {}",
            id,
            raw.len(),
            max
        );
    }
    let skip = raw.len().saturating_sub(max);
    raw[skip..].iter().map(|seg| unquote(seg).to_string()).collect()
}

fn non_empty(segment: String) -> Option<String> {
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Build the right-aligned namespace segment list for formatting.
///
/// Levels are emitted from the highest present ancestor down to schema, with
/// interior gaps as empty segments: `{database: "ax"}` yields
/// `["ax", "", ""]`, `{catalog: "core"}` yields `["core", ""]`, and an empty
/// namespace yields no segments at all.
fn namespace_segments(
    database: Option<&str>,
    catalog: Option<&str>,
    schema: Option<&str>,
) -> Vec<String> {
    let mut segments = Vec::new();
    if let Some(database) = database {
        segments.push(quote(database));
        segments.push(catalog.map(quote).unwrap_or_default());
        segments.push(schema.map(quote).unwrap_or_default());
    } else if let Some(catalog) = catalog {
        segments.push(quote(catalog));
        segments.push(schema.map(quote).unwrap_or_default());
    } else if let Some(schema) = schema {
        segments.push(quote(schema));
    }
    segments
}

/// Parse the shared `[database.]catalog.schema.name` shape.
///
/// The rightmost segment is the object's own name and is retained even when
/// empty; namespace levels are present only when non-empty.
fn parse_qualified(id: &str) -> (Option<String>, Option<String>, Option<String>, String) {
    let mut segments = rightmost_segments(id, MAX_LEVELS + 1);
    let name = segments.pop().unwrap_or_default();
    let schema = segments.pop().and_then(non_empty);
    let catalog = segments.pop().and_then(non_empty);
    let database = segments.pop().and_then(non_empty);
    (database, catalog, schema, name)
}

/// The addressable container of an entity or type: database, catalog, and
/// schema levels, each optional, excluding the object's own name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namespace {
    /// Database name, if addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Catalog name, if addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Schema name, if addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl Namespace {
    /// Parse a namespace identifier.
    ///
    /// Right-aligned: the last segment is the schema, then catalog, then
    /// database. A level is present only when its segment is non-empty after
    /// unquoting, so `""` parses to the empty namespace, `"ax.."` to
    /// database `ax` alone, and `"core."` to catalog `core` alone.
    pub fn from_id(id: &str) -> Self {
        let mut segments = rightmost_segments(id, MAX_LEVELS);
        let schema = segments.pop().and_then(non_empty);
        let catalog = segments.pop().and_then(non_empty);
        let database = segments.pop().and_then(non_empty);
        Self {
            database,
            catalog,
            schema,
        }
    }

    /// Format this namespace as an identifier.
    ///
    /// The empty namespace formats as the empty string.
    pub fn to_id(&self) -> String {
        namespace_segments(
            self.database.as_deref(),
            self.catalog.as_deref(),
            self.schema.as_deref(),
        )
        .join(".")
    }

    /// Check whether every level is absent.
    pub fn is_empty(&self) -> bool {
        self.database.is_none() && self.catalog.is_none() && self.schema.is_none()
    }

    /// Strictly validate every present level name.
    ///
    /// # Errors
    ///
    /// Returns the first [`RefError`](crate::RefError) produced by
    /// [`validate_name`](crate::validate_name).
    pub fn validate(&self) -> Result<()> {
        for name in [&self.database, &self.catalog, &self.schema]
            .into_iter()
            .flatten()
        {
            validate_name(name)?;
        }
        Ok(())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_id())
    }
}

/// Fully qualified reference to a table-like object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// Database name, if addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Catalog name, if addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Schema name, if addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Entity (table/collection) name.
    pub entity: String,
}

impl EntityRef {
    /// Parse an entity identifier.
    ///
    /// The rightmost segment is the entity name and is retained even when
    /// empty, so `""` parses to an entity with an empty name rather than to
    /// nothing at all.
    pub fn from_id(id: &str) -> Self {
        let (database, catalog, schema, entity) = parse_qualified(id);
        Self {
            database,
            catalog,
            schema,
            entity,
        }
    }

    /// Format this reference as an identifier.
    pub fn to_id(&self) -> String {
        let mut segments = namespace_segments(
            self.database.as_deref(),
            self.catalog.as_deref(),
            self.schema.as_deref(),
        );
        segments.push(quote(&self.entity));
        segments.join(".")
    }

    /// Split off the containing namespace.
    pub fn namespace(&self) -> Namespace {
        Namespace {
            database: self.database.clone(),
            catalog: self.catalog.clone(),
            schema: self.schema.clone(),
        }
    }

    /// Strictly validate the entity name and every present namespace level.
    ///
    /// # Errors
    ///
    /// Returns the first [`RefError`](crate::RefError) produced by
    /// [`validate_name`](crate::validate_name).
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.entity)?;
        self.namespace().validate()
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_id())
    }
}

/// Fully qualified reference to a named data type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Database name, if addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Catalog name, if addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Schema name, if addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Type name.
    #[serde(rename = "type")]
    pub name: String,
}

impl TypeRef {
    /// Parse a type identifier. Same shape as [`EntityRef::from_id`].
    pub fn from_id(id: &str) -> Self {
        let (database, catalog, schema, name) = parse_qualified(id);
        Self {
            database,
            catalog,
            schema,
            name,
        }
    }

    /// Format this reference as an identifier.
    pub fn to_id(&self) -> String {
        let mut segments = namespace_segments(
            self.database.as_deref(),
            self.catalog.as_deref(),
            self.schema.as_deref(),
        );
        segments.push(quote(&self.name));
        segments.join(".")
    }

    /// Split off the containing namespace.
    pub fn namespace(&self) -> Namespace {
        Namespace {
            database: self.database.clone(),
            catalog: self.catalog.clone(),
            schema: self.schema.clone(),
        }
    }

    /// Strictly validate the type name and every present namespace level.
    ///
    /// # Errors
    ///
    /// Returns the first [`RefError`](crate::RefError) produced by
    /// [`validate_name`](crate::validate_name).
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        self.namespace().validate()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_id())
    }
}

/// Reference to a (possibly nested) column or field inside an entity:
/// an entity name plus an attribute path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRef {
    /// Entity (table/collection) name.
    pub entity: String,

    /// Path to the attribute, outermost segment first.
    pub attribute: AttributePath,
}

impl AttributeRef {
    /// Parse an attribute identifier of the form `entity(path)`.
    ///
    /// The split happens at the last `(`..`)` pair: everything before the
    /// `(` is the unquoted entity name and the parenthesized content is
    /// parsed as an attribute path. A bare entity name without parentheses
    /// gets the single-empty-segment placeholder path, so
    /// `"users"` parses to `{entity: "users", attribute: [""]}` and formats
    /// back as `"users()"`.
    pub fn from_id(id: &str) -> Self {
        match id.rfind('(') {
            Some(open) if id.ends_with(')') => Self {
                entity: unquote(&id[..open]).to_string(),
                attribute: attribute_path_from_id(&id[open + 1..id.len() - 1]),
            },
            _ => Self {
                entity: unquote(id).to_string(),
                attribute: attribute_path_from_id(""),
            },
        }
    }

    /// Format this reference as `entity(path)`, always emitting parentheses.
    pub fn to_id(&self) -> String {
        format!(
            "{}({})",
            quote(&self.entity),
            attribute_path_to_id(&self.attribute)
        )
    }

    /// Strictly validate the entity name and every path segment.
    ///
    /// # Errors
    ///
    /// Returns the first [`RefError`](crate::RefError) produced by
    /// [`validate_name`](crate::validate_name).
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.entity)?;
        for segment in &self.attribute {
            validate_name(segment)?;
        }
        Ok(())
    }
}

impl fmt::Display for AttributeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_id())
    }
}
