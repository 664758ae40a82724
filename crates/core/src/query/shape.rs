//! Data shaping: projecting DTOs down to a client-requested field
//! subset.
//!
//! Shapeable DTOs declare an explicit field table (names in declaration
//! order plus a string-keyed accessor) instead of relying on runtime
//! reflection. Lookup stays case-insensitive; output key order is the
//! client's requested order, which is why `serde_json`'s
//! `preserve_order` feature is enabled workspace-wide.

use serde_json::{Map, Value};

/// A DTO whose public fields can be enumerated and read by name.
///
/// Implementations list every serialized field in `field_names` in
/// declaration order, and `field_value` must resolve those same names
/// case-insensitively.
pub trait Shapeable {
    /// Public field names in declaration order.
    fn field_names() -> &'static [&'static str];

    /// Value of the field with the given name, matched
    /// case-insensitively. `None` for unknown names.
    fn field_value(&self, name: &str) -> Option<Value>;
}

/// Whether every name in a `fields` expression exists on `T`.
///
/// Absent or empty `fields` is always valid. Tokens are comma-separated
/// and trimmed; a trailing direction suffix after the first space is
/// ignored (the parameter source is shared with `orderBy`-style input).
/// Handlers call this before any shaping work and turn `false` into a
/// client error.
pub fn has_fields<T: Shapeable>(fields: Option<&str>) -> bool {
    let Some(fields) = fields else {
        return true;
    };
    if fields.trim().is_empty() {
        return true;
    }

    fields.split(',').all(|token| {
        let token = token.trim();
        let name = match token.find(' ') {
            Some(idx) => &token[..idx],
            None => token,
        };
        T::field_names()
            .iter()
            .any(|declared| declared.eq_ignore_ascii_case(name))
    })
}

/// Project one object down to the requested fields.
///
/// With empty `fields`, returns every declared field in declaration
/// order. Otherwise returns the requested fields in the client's
/// requested order, keyed by the name as declared on the type (not as
/// the client spelled it). Unknown names are silently skipped; callers
/// are expected to have gated input through [`has_fields`] first.
pub fn shape<T: Shapeable>(object: &T, fields: Option<&str>) -> Map<String, Value> {
    let mut shaped = Map::new();

    match fields.map(str::trim) {
        None | Some("") => {
            for &name in T::field_names() {
                if let Some(value) = object.field_value(name) {
                    shaped.insert(name.to_string(), value);
                }
            }
        }
        Some(fields) => {
            for token in fields.split(',') {
                let requested = token.trim();
                let Some(&declared) = T::field_names()
                    .iter()
                    .find(|declared| declared.eq_ignore_ascii_case(requested))
                else {
                    continue;
                };
                if let Some(value) = object.field_value(declared) {
                    shaped.insert(declared.to_string(), value);
                }
            }
        }
    }

    shaped
}

/// Project a homogeneous collection element-wise, preserving order.
pub fn shape_collection<'a, T, I>(objects: I, fields: Option<&str>) -> Vec<Map<String, Value>>
where
    T: Shapeable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    objects
        .into_iter()
        .map(|object| shape(object, fields))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Sample {
        id: u32,
        name: String,
        genre: String,
    }

    impl Shapeable for Sample {
        fn field_names() -> &'static [&'static str] {
            &["id", "name", "genre"]
        }

        fn field_value(&self, name: &str) -> Option<Value> {
            match name.to_lowercase().as_str() {
                "id" => Some(json!(self.id)),
                "name" => Some(json!(self.name)),
                "genre" => Some(json!(self.genre)),
                _ => None,
            }
        }
    }

    fn sample() -> Sample {
        Sample {
            id: 7,
            name: "Jane Austen".into(),
            genre: "Classic".into(),
        }
    }

    // -- has_fields --

    #[test]
    fn absent_or_empty_fields_always_pass() {
        assert!(has_fields::<Sample>(None));
        assert!(has_fields::<Sample>(Some("")));
        assert!(has_fields::<Sample>(Some("   ")));
    }

    #[test]
    fn has_fields_is_case_insensitive() {
        assert!(has_fields::<Sample>(Some("ID,name")));
        assert!(has_fields::<Sample>(Some("Genre, NAME")));
    }

    #[test]
    fn has_fields_rejects_unknown_names() {
        assert!(!has_fields::<Sample>(Some("id,title")));
        assert!(!has_fields::<Sample>(Some("bogus")));
    }

    #[test]
    fn has_fields_ignores_direction_suffix() {
        assert!(has_fields::<Sample>(Some("name desc, id")));
    }

    // -- shape --

    #[test]
    fn empty_fields_returns_all_in_declaration_order() {
        let shaped = shape(&sample(), None);
        let keys: Vec<&str> = shaped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "genre"]);
        assert_eq!(shaped["name"], json!("Jane Austen"));
    }

    #[test]
    fn requested_fields_keep_requested_order() {
        let shaped = shape(&sample(), Some("genre,id"));
        let keys: Vec<&str> = shaped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["genre", "id"]);
        assert_eq!(shaped.len(), 2);
    }

    #[test]
    fn requested_names_are_normalized_to_declared_spelling() {
        let shaped = shape(&sample(), Some("NAME, Id"));
        let keys: Vec<&str> = shaped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "id"]);
    }

    #[test]
    fn unknown_field_is_skipped() {
        let shaped = shape(&sample(), Some("id,bogus,genre"));
        let keys: Vec<&str> = shaped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "genre"]);
    }

    #[test]
    fn full_field_list_round_trips_to_unshaped() {
        let all = shape(&sample(), None);
        let listed = shape(&sample(), Some("id,name,genre"));
        assert_eq!(all, listed);
    }

    // -- shape_collection --

    #[test]
    fn collection_shapes_element_wise_preserving_order() {
        let items = vec![
            Sample {
                id: 1,
                name: "A".into(),
                genre: "G1".into(),
            },
            Sample {
                id: 2,
                name: "B".into(),
                genre: "G2".into(),
            },
        ];

        let shaped = shape_collection(&items, Some("id"));
        assert_eq!(shaped.len(), 2);
        assert_eq!(shaped[0]["id"], json!(1));
        assert_eq!(shaped[1]["id"], json!(2));
        assert!(shaped[0].get("name").is_none());
    }
}
