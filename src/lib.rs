//! # schema-ref
//!
//! Bidirectional codec between structured database-object references and
//! their compact textual identifier form, plus resolution of nested
//! (JSON/struct) attribute paths within a schema's attribute definitions.
//!
//! A reference such as `{database: "ax", entity: "users"}` formats to a
//! single identifier string (`ax...users`) usable in UIs, exports, and
//! lookups, and any such string parses back to the structured reference.
//! Identifiers encode up to four dot-separated segments counted from the
//! right (`[database.]catalog.schema.name`), with absent levels as empty
//! segments and non-bare names quote-wrapped.
//!
//! - [`refs`]: [`Namespace`], [`EntityRef`], [`TypeRef`], [`AttributeRef`]
//!   with their `from_id`/`to_id` codecs
//! - [`path`]: dotted [`AttributePath`] codec
//! - [`tree`]: [`get_attribute`], [`get_peer_attributes`],
//!   [`flatten_attribute`] over recursive [`Attribute`] trees
//! - [`ident`]: name quoting and strict validation
//! - [`types`]: [`AttributeType`] parsing
//!
//! All operations are pure, synchronous computations over immutable inputs:
//! no I/O, no shared state, safe to call concurrently without coordination.
//! Parsing is total and best-effort, never an error; the only fallible
//! surface is the opt-in strict validation layer backed by [`RefError`].
//!
//! ## Example
//!
//! ```
//! use schema_ref::{AttributeRef, EntityRef, Namespace};
//!
//! let entity = EntityRef::from_id("ax...users");
//! assert_eq!(entity.database.as_deref(), Some("ax"));
//! assert_eq!(entity.entity, "users");
//! assert_eq!(entity.to_id(), "ax...users");
//!
//! let column = AttributeRef::from_id("users(details.address.city)");
//! assert_eq!(column.attribute, vec!["details", "address", "city"]);
//!
//! assert!(Namespace::from_id("").is_empty());
//! ```

pub mod error;
pub mod ident;
pub mod path;
pub mod refs;
pub mod tree;
pub mod types;

// Re-exports for convenient access
pub use error::{RefError, Result};
pub use ident::{needs_quoting, quote, unquote, validate_name, MAX_NAME_LENGTH};
pub use path::{attribute_path_from_id, attribute_path_to_id, AttributePath};
pub use refs::{AttributeRef, EntityRef, Namespace, TypeRef};
pub use tree::{flatten_attribute, get_attribute, get_peer_attributes, Attribute, FlatAttribute};
pub use types::{AttributeType, AttributeTypeKind};
