//! Sort mapping: translating DTO-level `orderBy` expressions into
//! storage-level ordering instructions.
//!
//! Client-visible field names do not map 1:1 onto columns: `name` on an
//! author DTO is a concatenation of two columns, and `age` is derived
//! from `date_of_birth` with an inverted natural order. Each shapeable
//! DTO/entity pair registers a [`SortMappingTable`] describing how its
//! sortable fields expand, and the registry validates and translates
//! client expressions against it.
//!
//! Registration happens once at startup and the registry is immutable
//! afterward, so it can be shared across requests without locking.

use std::collections::HashMap;

/// How one client-visible sort field expands at the storage level.
#[derive(Debug, Clone)]
pub struct SortMappingValue {
    /// Backing columns, in the order they must appear in the ORDER BY
    /// clause. Composite fields (e.g. `name`) list more than one.
    pub target_fields: Vec<&'static str>,
    /// When true, the client's requested direction is inverted: the
    /// source field's natural order runs opposite to the column's
    /// (sorting by `age` descending means `date_of_birth` ascending).
    pub reverse: bool,
}

impl SortMappingValue {
    /// Map a source field straight onto a single column.
    pub fn to(target: &'static str) -> Self {
        Self {
            target_fields: vec![target],
            reverse: false,
        }
    }

    /// Map a source field onto several columns, ordered.
    pub fn to_many(targets: &[&'static str]) -> Self {
        Self {
            target_fields: targets.to_vec(),
            reverse: false,
        }
    }

    /// Map a source field onto a column whose natural order is the
    /// inverse of the source field's.
    pub fn reversed(target: &'static str) -> Self {
        Self {
            target_fields: vec![target],
            reverse: true,
        }
    }
}

/// One storage-level ordering instruction produced by [`translate`].
///
/// [`translate`]: SortMappingRegistry::translate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortInstruction {
    /// Column name. Always one of the registered target fields, never
    /// client-supplied text, so it is safe to interpolate into SQL.
    pub field: &'static str,
    pub ascending: bool,
}

/// The set of sortable source fields for one DTO/entity pair.
///
/// Keys are compared case-insensitively; building a table with two
/// entries that collide under case-insensitive comparison is a
/// programming error and panics.
#[derive(Debug, Clone, Default)]
pub struct SortMappingTable {
    entries: HashMap<String, SortMappingValue>,
}

impl SortMappingTable {
    pub fn new(entries: Vec<(&'static str, SortMappingValue)>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for (source, value) in entries {
            if map.insert(source.to_lowercase(), value).is_some() {
                panic!("duplicate sort mapping entry for source field {source:?}");
            }
        }
        Self { entries: map }
    }

    /// Case-insensitive membership test for a bare field name.
    pub fn contains(&self, source_field: &str) -> bool {
        self.entries.contains_key(&source_field.to_lowercase())
    }

    fn get(&self, source_field: &str) -> Option<&SortMappingValue> {
        self.entries.get(&source_field.to_lowercase())
    }
}

/// All sort mapping tables, keyed by `(source type, target type)` name.
///
/// Looking up a pair that was never registered is a configuration
/// error, not a client error: it means a handler validates against a
/// mapping nobody installed. Both that and double registration panic.
#[derive(Debug, Default)]
pub struct SortMappingRegistry {
    tables: HashMap<(&'static str, &'static str), SortMappingTable>,
}

impl SortMappingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the mapping table for one `(source, target)` type pair.
    /// Called once per pair at startup.
    pub fn register(&mut self, source: &'static str, target: &'static str, table: SortMappingTable) {
        if self.tables.insert((source, target), table).is_some() {
            panic!("sort mapping for <{source}, {target}> registered twice");
        }
    }

    /// Look up the table for a type pair.
    ///
    /// # Panics
    ///
    /// Panics if no table is registered for the pair. Unreachable at
    /// steady state; indicates a missing `register` call in startup.
    pub fn resolve(&self, source: &'static str, target: &'static str) -> &SortMappingTable {
        self.tables
            .get(&(source, target))
            .unwrap_or_else(|| panic!("no sort mapping registered for <{source}, {target}>"))
    }

    /// Whether every field named in `order_by` is sortable for the pair.
    ///
    /// An empty or whitespace-only expression is valid (no-op sort).
    /// Tokens are comma-separated, trimmed, and anything after the
    /// first space (a direction suffix) is ignored for the membership
    /// test. Returns false on the first unmatched token; handlers use
    /// this to reject the request before querying storage.
    pub fn is_valid_order_expression(
        &self,
        source: &'static str,
        target: &'static str,
        order_by: &str,
    ) -> bool {
        if order_by.trim().is_empty() {
            return true;
        }

        let table = self.resolve(source, target);
        order_by
            .split(',')
            .map(bare_field_name)
            .all(|field| table.contains(field))
    }

    /// Expand a validated `order_by` expression into storage-level
    /// ordering instructions.
    ///
    /// Composite entries produce one instruction per target field, in
    /// declared order, all sharing the requested direction. Entries
    /// with `reverse` set flip the requested direction. Unknown tokens
    /// are skipped: callers are expected to have gated the expression
    /// through [`Self::is_valid_order_expression`] first, and skipping
    /// keeps this function total for the few call sites that translate
    /// trusted defaults.
    pub fn translate(
        &self,
        source: &'static str,
        target: &'static str,
        order_by: &str,
    ) -> Vec<SortInstruction> {
        if order_by.trim().is_empty() {
            return Vec::new();
        }

        let table = self.resolve(source, target);
        let mut instructions = Vec::new();

        for token in order_by.split(',') {
            let token = token.trim();
            let field = bare_field_name(token);

            let Some(mapping) = table.get(field) else {
                continue;
            };

            let requested_ascending = !token.to_lowercase().ends_with(" desc");
            let ascending = requested_ascending != mapping.reverse;

            for target_field in &mapping.target_fields {
                instructions.push(SortInstruction {
                    field: target_field,
                    ascending,
                });
            }
        }

        instructions
    }
}

/// Strip a token down to its bare field name: trim, then drop anything
/// after the first space (tolerates `"name desc"` style tokens).
fn bare_field_name(token: &str) -> &str {
    let token = token.trim();
    match token.find(' ') {
        Some(idx) => &token[..idx],
        None => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author_registry() -> SortMappingRegistry {
        let mut registry = SortMappingRegistry::new();
        registry.register(
            "AuthorDto",
            "Author",
            SortMappingTable::new(vec![
                ("id", SortMappingValue::to("id")),
                ("genre", SortMappingValue::to("genre")),
                ("age", SortMappingValue::reversed("date_of_birth")),
                ("name", SortMappingValue::to_many(&["first_name", "last_name"])),
            ]),
        );
        registry
    }

    // -- is_valid_order_expression --

    #[test]
    fn empty_expression_is_valid() {
        let registry = author_registry();
        assert!(registry.is_valid_order_expression("AuthorDto", "Author", ""));
        assert!(registry.is_valid_order_expression("AuthorDto", "Author", "   "));
    }

    #[test]
    fn known_fields_are_valid_case_insensitively() {
        let registry = author_registry();
        assert!(registry.is_valid_order_expression("AuthorDto", "Author", "Name"));
        assert!(registry.is_valid_order_expression("AuthorDto", "Author", "NAME desc, age"));
        assert!(registry.is_valid_order_expression("AuthorDto", "Author", " genre , id desc "));
    }

    #[test]
    fn unknown_field_is_invalid() {
        let registry = author_registry();
        assert!(!registry.is_valid_order_expression("AuthorDto", "Author", "title"));
        assert!(!registry.is_valid_order_expression("AuthorDto", "Author", "name, title desc"));
    }

    #[test]
    fn direction_suffix_is_ignored_for_membership() {
        let registry = author_registry();
        // Only the bare name before the first space has to match.
        assert!(registry.is_valid_order_expression("AuthorDto", "Author", "name descending"));
    }

    // -- translate --

    #[test]
    fn translate_simple_field() {
        let registry = author_registry();
        let instructions = registry.translate("AuthorDto", "Author", "genre");
        assert_eq!(
            instructions,
            vec![SortInstruction {
                field: "genre",
                ascending: true,
            }]
        );
    }

    #[test]
    fn translate_desc_suffix() {
        let registry = author_registry();
        let instructions = registry.translate("AuthorDto", "Author", "genre desc");
        assert_eq!(
            instructions,
            vec![SortInstruction {
                field: "genre",
                ascending: false,
            }]
        );
    }

    #[test]
    fn reversed_entry_inverts_requested_direction() {
        let registry = author_registry();

        // age desc -> date_of_birth ascending
        let instructions = registry.translate("AuthorDto", "Author", "age desc");
        assert_eq!(
            instructions,
            vec![SortInstruction {
                field: "date_of_birth",
                ascending: true,
            }]
        );

        // age (ascending) -> date_of_birth descending
        let instructions = registry.translate("AuthorDto", "Author", "age");
        assert_eq!(
            instructions,
            vec![SortInstruction {
                field: "date_of_birth",
                ascending: false,
            }]
        );
    }

    #[test]
    fn composite_entry_expands_in_declared_order() {
        let registry = author_registry();
        let instructions = registry.translate("AuthorDto", "Author", "name desc");
        assert_eq!(
            instructions,
            vec![
                SortInstruction {
                    field: "first_name",
                    ascending: false,
                },
                SortInstruction {
                    field: "last_name",
                    ascending: false,
                },
            ]
        );
    }

    #[test]
    fn translate_multiple_tokens_in_order() {
        let registry = author_registry();
        let instructions = registry.translate("AuthorDto", "Author", "genre desc, name");
        assert_eq!(
            instructions,
            vec![
                SortInstruction {
                    field: "genre",
                    ascending: false,
                },
                SortInstruction {
                    field: "first_name",
                    ascending: true,
                },
                SortInstruction {
                    field: "last_name",
                    ascending: true,
                },
            ]
        );
    }

    #[test]
    fn translate_skips_unknown_tokens() {
        let registry = author_registry();
        let instructions = registry.translate("AuthorDto", "Author", "bogus, genre");
        assert_eq!(
            instructions,
            vec![SortInstruction {
                field: "genre",
                ascending: true,
            }]
        );
    }

    #[test]
    fn translate_empty_expression_is_empty() {
        let registry = author_registry();
        assert!(registry.translate("AuthorDto", "Author", "  ").is_empty());
    }

    // -- configuration errors --

    #[test]
    #[should_panic(expected = "no sort mapping registered")]
    fn resolve_unregistered_pair_panics() {
        let registry = SortMappingRegistry::new();
        registry.resolve("BookDto", "Book");
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn double_registration_panics() {
        let mut registry = author_registry();
        registry.register(
            "AuthorDto",
            "Author",
            SortMappingTable::new(vec![("id", SortMappingValue::to("id"))]),
        );
    }

    #[test]
    #[should_panic(expected = "duplicate sort mapping entry")]
    fn case_insensitive_duplicate_entry_panics() {
        SortMappingTable::new(vec![
            ("Name", SortMappingValue::to("first_name")),
            ("name", SortMappingValue::to("last_name")),
        ]);
    }
}
