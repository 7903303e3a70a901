//! Store-evaluated query filters.
//!
//! A [`Filter`] is a small boolean expression over an entity's document
//! fields. Stores translate it into their native query language and always
//! conjoin it with the partition condition, so a filter can narrow a query
//! but never widen it beyond one partition.

use uuid::Uuid;

/// Document path of every entity's identifier.
pub const ID_FIELD: &str = "id";

/// A literal compared against a document field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    String(String),
    Bool(bool),
    /// Stored in documents as its hyphenated string form.
    Uuid(Uuid),
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Uuid> for FilterValue {
    fn from(v: Uuid) -> Self {
        Self::Uuid(v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Matches every document in the partition.
    #[default]
    All,
    /// `field == value`.
    Eq {
        field: &'static str,
        value: FilterValue,
    },
    /// `lowercase(field) == lowercase(value)`.
    EqIgnoreCase { field: &'static str, value: String },
    /// Every inner filter matches.
    And(Vec<Filter>),
}

impl Filter {
    pub fn all() -> Self {
        Self::All
    }

    pub fn eq(field: &'static str, value: impl Into<FilterValue>) -> Self {
        Self::Eq {
            field,
            value: value.into(),
        }
    }

    pub fn eq_ignore_case(field: &'static str, value: impl Into<String>) -> Self {
        Self::EqIgnoreCase {
            field,
            value: value.into(),
        }
    }

    /// Matches the entity whose identifier is `id`.
    pub fn id(id: Uuid) -> Self {
        Self::eq(ID_FIELD, id)
    }

    /// Conjunction of `self` and `other`, flattening nested `And`s and
    /// dropping `All`.
    pub fn and(self, other: Filter) -> Self {
        let mut terms = Vec::new();
        for filter in [self, other] {
            match filter {
                Self::All => {}
                Self::And(inner) => terms.extend(inner),
                term => terms.push(term),
            }
        }
        match terms.len() {
            0 => Self::All,
            1 => terms.remove(0),
            _ => Self::And(terms),
        }
    }
}
