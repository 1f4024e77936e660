//! # Query Predicates
//!
//! Typed tests over a [`Record`], used to select rows from a table.
//!
//! ## Building Blocks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FieldMatch::contains("Company Name", "acme")   substring, any case     │
//! │  FieldMatch::ignore_case("last_name", "Smith")  whole value, any case   │
//! │  FieldMatch::exact("guest_id", "G-104")         byte-for-byte           │
//! │  all_of(vec![...])                              every part must match   │
//! │  |r: &Record| ...                               any closure             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A record that lacks the field never matches a [`FieldMatch`].

use crate::record::Record;

/// A test over one record.
pub trait Predicate {
    fn matches(&self, record: &Record) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Record) -> bool,
{
    fn matches(&self, record: &Record) -> bool {
        self(record)
    }
}

// =============================================================================
// Field Match
// =============================================================================

/// How a [`FieldMatch`] compares the stored value with the wanted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Values are identical.
    Exact,
    /// Values are equal after trimming and lower-casing both sides.
    IgnoreCase,
    /// The lower-cased wanted value occurs inside the lower-cased stored value.
    ContainsIgnoreCase,
}

/// Compares one field against a wanted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    field: String,
    value: String,
    mode: MatchMode,
}

impl FieldMatch {
    pub fn new(field: impl Into<String>, value: impl Into<String>, mode: MatchMode) -> Self {
        FieldMatch {
            field: field.into(),
            value: value.into(),
            mode,
        }
    }

    pub fn exact(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, value, MatchMode::Exact)
    }

    pub fn ignore_case(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, value, MatchMode::IgnoreCase)
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, value, MatchMode::ContainsIgnoreCase)
    }

    /// The field this predicate reads.
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Predicate for FieldMatch {
    fn matches(&self, record: &Record) -> bool {
        let Some(stored) = record.get(&self.field) else {
            return false;
        };
        match self.mode {
            MatchMode::Exact => stored == self.value,
            MatchMode::IgnoreCase => {
                stored.trim().to_lowercase() == self.value.trim().to_lowercase()
            }
            MatchMode::ContainsIgnoreCase => stored
                .to_lowercase()
                .contains(&self.value.to_lowercase()),
        }
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Matches when every inner predicate matches. An empty list matches all.
pub struct AllOf {
    parts: Vec<Box<dyn Predicate>>,
}

impl Predicate for AllOf {
    fn matches(&self, record: &Record) -> bool {
        self.parts.iter().all(|p| p.matches(record))
    }
}

/// Conjunction of boxed predicates.
pub fn all_of(parts: Vec<Box<dyn Predicate>>) -> AllOf {
    AllOf { parts }
}

/// Matches a `(first, last)` name pair, case-insensitively.
pub fn full_name(
    first_field: &str,
    first: &str,
    last_field: &str,
    last: &str,
) -> AllOf {
    all_of(vec![
        Box::new(FieldMatch::ignore_case(first_field, first)),
        Box::new(FieldMatch::ignore_case(last_field, last)),
    ])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn guest() -> Record {
        Record::new()
            .with("guest_id", "G-104")
            .with("first_name", "Maria")
            .with("last_name", " Lopez ")
    }

    #[test]
    fn test_exact() {
        assert!(FieldMatch::exact("guest_id", "G-104").matches(&guest()));
        assert!(!FieldMatch::exact("guest_id", "g-104").matches(&guest()));
    }

    #[test]
    fn test_ignore_case_trims() {
        assert!(FieldMatch::ignore_case("last_name", "lopez").matches(&guest()));
        assert!(!FieldMatch::ignore_case("last_name", "lope").matches(&guest()));
    }

    #[test]
    fn test_contains() {
        assert!(FieldMatch::contains("first_name", "ARI").matches(&guest()));
        assert!(!FieldMatch::contains("first_name", "mario").matches(&guest()));
    }

    #[test]
    fn test_missing_field_never_matches() {
        assert!(!FieldMatch::contains("phone_number", "").matches(&guest()));
    }

    #[test]
    fn test_combinators_and_closures() {
        let pred = full_name("first_name", "MARIA", "last_name", "lopez");
        assert!(pred.matches(&guest()));

        let pred = full_name("first_name", "Maria", "last_name", "Smith");
        assert!(!pred.matches(&guest()));

        let closure = |r: &Record| r.get("guest_id").is_some_and(|id| id.starts_with("G-"));
        assert!(closure.matches(&guest()));

        assert!(all_of(Vec::new()).matches(&guest()));
    }
}
