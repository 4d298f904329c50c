//! Attribute tree resolution.
//!
//! An entity's attributes form a tree: each attribute may recursively nest
//! child attributes, modeling JSON/struct columns. This module resolves a
//! dotted [`AttributePath`](crate::AttributePath) within such a tree, finds
//! sibling attributes, and produces a flattened path-annotated enumeration
//! of a whole subtree.
//!
//! Lookups are case-sensitive exact matches on `name`, one segment per
//! nesting level, and child lists preserve insertion order throughout.
//! "Not found" is reported as `None` or an empty slice, never as an error.

use serde::{Deserialize, Serialize};

use crate::path::AttributePath;

/// A (possibly nested) column or field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,

    /// Free-form type label (e.g. "varchar", "json").
    #[serde(rename = "type")]
    pub data_type: String,

    /// Child attributes for JSON/struct columns, in insertion order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Vec<Attribute>>,
}

impl Attribute {
    /// Child attributes as a slice, empty when the attribute has none.
    pub fn children(&self) -> &[Attribute] {
        self.attrs.as_deref().unwrap_or(&[])
    }
}

/// One entry of a flattened attribute tree: the attribute together with its
/// accumulated path from the flattening root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatAttribute<'a> {
    /// Accumulated path, starting at the flattening root's own name.
    pub path: AttributePath,

    /// The attribute at that path.
    pub attr: &'a Attribute,
}

/// Resolve a path to the attribute it denotes.
///
/// Walks `path` segment by segment, matching each segment against the
/// current candidate list by exact name equality and descending into the
/// matched attribute's children. Returns `None` when the collection is
/// absent, the path is empty, or any segment fails to match.
///
/// # Examples
///
/// ```
/// use schema_ref::{get_attribute, Attribute};
///
/// let city = Attribute { name: "city".into(), data_type: "varchar".into(), attrs: None };
/// let details = Attribute {
///     name: "details".into(),
///     data_type: "json".into(),
///     attrs: Some(vec![city.clone()]),
/// };
/// let attrs = vec![details];
///
/// let path = vec!["details".to_string(), "city".to_string()];
/// assert_eq!(get_attribute(Some(&attrs), &path), Some(&city));
/// assert_eq!(get_attribute(Some(&attrs), &["missing".to_string()]), None);
/// ```
pub fn get_attribute<'a>(attrs: Option<&'a [Attribute]>, path: &[String]) -> Option<&'a Attribute> {
    let (segment, rest) = path.split_first()?;
    let matched = attrs?.iter().find(|attr| attr.name == *segment)?;
    if rest.is_empty() {
        Some(matched)
    } else {
        get_attribute(matched.attrs.as_deref(), rest)
    }
}

/// Return the sibling list the last path segment was drawn from.
///
/// A path of length ≤ 1 belongs to the top level, so the root collection is
/// returned unchanged (empty when absent). For deeper paths, the parent path
/// is resolved and its children returned; an unresolvable parent yields the
/// empty slice, never `None`.
pub fn get_peer_attributes<'a>(attrs: Option<&'a [Attribute]>, path: &[String]) -> &'a [Attribute] {
    let root = attrs.unwrap_or(&[]);
    if path.len() <= 1 {
        return root;
    }
    get_attribute(attrs, &path[..path.len() - 1])
        .map(Attribute::children)
        .unwrap_or(&[])
}

/// Flatten an attribute and all of its descendants, depth-first pre-order.
///
/// The first entry is the attribute itself with `path = [name]`; each
/// descendant follows with its accumulated path. Order matches the child
/// lists, no sorting. For a tree of N nodes this yields exactly N entries.
pub fn flatten_attribute(attribute: &Attribute) -> Vec<FlatAttribute<'_>> {
    let mut entries = Vec::new();
    flatten_into(attribute, AttributePath::new(), &mut entries);
    entries
}

fn flatten_into<'a>(
    attribute: &'a Attribute,
    prefix: AttributePath,
    entries: &mut Vec<FlatAttribute<'a>>,
) {
    let mut path = prefix;
    path.push(attribute.name.clone());
    entries.push(FlatAttribute {
        path: path.clone(),
        attr: attribute,
    });
    for child in attribute.children() {
        flatten_into(child, path.clone(), entries);
    }
}
