//! Attribute path codec.
//!
//! An attribute path locates a value inside a (possibly nested) attribute
//! tree: ordered name segments, outermost first, joined with `.` in
//! identifier form. There is no quoting at this level; segment names are
//! assumed dot-free and quote-free.

/// Ordered, outermost-first sequence of attribute name segments.
///
/// Example: `["details", "address", "street"]` locates the `street` field of
/// a nested `details.address` JSON column.
pub type AttributePath = Vec<String>;

/// Parse an attribute path identifier by splitting on `.`.
///
/// Total: the empty string parses to a single empty segment, which is the
/// canonical "no attribute" placeholder used by
/// [`AttributeRef`](crate::AttributeRef).
pub fn attribute_path_from_id(id: &str) -> AttributePath {
    id.split('.').map(str::to_string).collect()
}

/// Format an attribute path by joining its segments with `.`.
pub fn attribute_path_to_id(path: &[String]) -> String {
    path.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> AttributePath {
        segments.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_and_format_paths() {
        let samples = [
            ("details", path(&["details"])),
            ("details.address", path(&["details", "address"])),
            (
                "details.address.street",
                path(&["details", "address", "street"]),
            ),
        ];

        for (id, segments) in samples {
            assert_eq!(attribute_path_from_id(id), segments);
            assert_eq!(attribute_path_to_id(&segments), id);
        }
    }

    #[test]
    fn test_empty_id_is_single_empty_segment() {
        assert_eq!(attribute_path_from_id(""), path(&[""]));
        assert_eq!(attribute_path_to_id(&path(&[""])), "");
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        for id in ["details", "details.address", "a.b.c.d"] {
            let parsed = attribute_path_from_id(id);
            assert_eq!(attribute_path_to_id(&parsed), id);
        }
    }
}
