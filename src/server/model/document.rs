//! Serialization of domain models into ordered documents.
//!
//! A document is the plain key-value form of an entity returned in a response body. Related
//! entities are serialized recursively unless their field is excluded by the `Rules` passed
//! to the call. Rules are dotted relation paths: `signups` leaves out a camper's signups,
//! `signups.camper` keeps the signups but leaves out the camper nested inside each of them.

use serde_json::Value;
use std::collections::BTreeSet;

/// Ordered mapping of field name to value.
///
/// Insertion order is preserved, so fields appear in the order the entity writes them.
pub type Document = serde_json::Map<String, Value>;

/// Set of relation paths to leave out of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    excluded: BTreeSet<String>,
}

impl Rules {
    /// Rules that exclude nothing beyond each entity's own defaults.
    pub fn none() -> Self {
        Self::default()
    }

    /// Rules excluding the given relation paths.
    ///
    /// # Arguments
    /// - `paths` - Relation field names, optionally dotted to reach nested relations
    pub fn excluding<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the relation `field` is left out at this level.
    pub fn excludes(&self, field: &str) -> bool {
        self.excluded.contains(field)
    }

    /// Rules that apply to the documents nested under `field`.
    ///
    /// Keeps only paths below `field`, with the `field.` prefix removed.
    pub fn nested(&self, field: &str) -> Rules {
        let excluded = self
            .excluded
            .iter()
            .filter_map(|path| {
                path.strip_prefix(field)
                    .and_then(|rest| rest.strip_prefix('.'))
                    .map(str::to_string)
            })
            .collect();

        Rules { excluded }
    }

    /// Union of both rule sets.
    pub fn merge(&self, other: &Rules) -> Rules {
        Rules {
            excluded: self.excluded.union(&other.excluded).cloned().collect(),
        }
    }
}

/// Conversion of a domain model into a document.
pub trait ToDocument {
    /// Relation paths this entity always leaves out, to keep nested output finite.
    fn serialize_rules() -> Rules;

    /// Writes `id`, the scalar attributes and every relation allowed by `rules`.
    fn write_fields(&self, document: &mut Document, rules: &Rules);

    /// Serializes the model with the caller's rules merged with the entity defaults.
    fn to_document(&self, rules: &Rules) -> Document {
        let rules = rules.merge(&Self::serialize_rules());

        let mut document = Document::new();
        self.write_fields(&mut document, &rules);
        document
    }
}

/// Serializes every item of a collection with the same rules.
pub fn to_documents<T: ToDocument>(items: &[T], rules: &Rules) -> Vec<Document> {
    items.iter().map(|item| item.to_document(rules)).collect()
}

/// Writes a to-many relation as an array of nested documents.
///
/// Nothing is written when the relation is excluded or was not loaded.
pub fn write_many<T: ToDocument>(
    document: &mut Document,
    rules: &Rules,
    field: &str,
    related: Option<&[T]>,
) {
    if rules.excludes(field) {
        return;
    }

    if let Some(items) = related {
        let nested = rules.nested(field);
        let values = items
            .iter()
            .map(|item| Value::Object(item.to_document(&nested)))
            .collect();

        document.insert(field.to_string(), Value::Array(values));
    }
}

/// Writes a to-one relation as a nested document.
///
/// Nothing is written when the relation is excluded or was not loaded.
pub fn write_one<T: ToDocument>(
    document: &mut Document,
    rules: &Rules,
    field: &str,
    related: Option<&T>,
) {
    if rules.excludes(field) {
        return;
    }

    if let Some(item) = related {
        document.insert(
            field.to_string(),
            Value::Object(item.to_document(&rules.nested(field))),
        );
    }
}
