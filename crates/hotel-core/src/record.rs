//! # Records
//!
//! A [`Record`] is one row of a table: an ordered list of field names and
//! their text values. Field order is the order the fields were first set,
//! which for loaded rows is the header order.
//!
//! Values stay text. Typed accessors ([`Record::date`], [`Record::count`],
//! [`Record::money`]) parse on demand and name the field when they fail.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::parse_date;

/// One table row.
///
/// Equality is structural and ignores field order: two records are equal
/// when they hold the same set of fields with the same values.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Builds a record from `(field, value)` pairs, keeping their order.
    /// A repeated field keeps its first position and its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Record::new();
        for (field, value) in pairs {
            record.set(field, value);
        }
        record
    }

    /// Builder-style [`Record::set`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns the value of `field`, or `None` when the record lacks it.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true when the record has `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field)
    }

    /// Sets `field`, appending it when absent. Returns the previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((field, value));
                None
            }
        }
    }

    /// Field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// `(field, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Typed Accessors
    // =========================================================================

    /// Returns the value of `field`, failing when absent.
    pub fn require(&self, field: &str) -> CoreResult<&str> {
        self.get(field).ok_or_else(|| CoreError::missing_field(field))
    }

    /// Parses `field` as a `YYYY-MM-DD` date.
    pub fn date(&self, field: &str) -> CoreResult<NaiveDate> {
        Ok(parse_date(field, self.require(field)?)?)
    }

    /// Parses `field` as a non-negative integer count.
    pub fn count(&self, field: &str) -> CoreResult<u32> {
        let raw = self.require(field)?;
        raw.trim().parse().map_err(|_| CoreError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
    }

    /// Parses `field` as a decimal amount.
    pub fn money(&self, field: &str) -> CoreResult<Money> {
        let raw = self.require(field)?;
        Money::parse(raw).map_err(|_| CoreError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(field, value)| other.get(field) == Some(value))
    }
}

impl Eq for Record {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record::from_pairs(iter)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Record {
        Record::new()
            .with("Company Name", "Acme Travel")
            .with("Nights Occupied Last Year", "120")
            .with("Standard Price", "100.5")
    }

    #[test]
    fn test_field_order_is_insertion_order() {
        let record = company();
        let names: Vec<_> = record.field_names().collect();
        assert_eq!(
            names,
            vec!["Company Name", "Nights Occupied Last Year", "Standard Price"]
        );
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut record = company();
        let previous = record.set("Company Name", "Acme Tours");
        assert_eq!(previous.as_deref(), Some("Acme Travel"));
        assert_eq!(record.len(), 3);
        assert_eq!(record.field_names().next(), Some("Company Name"));
    }

    #[test]
    fn test_absent_field_is_none() {
        let record = company();
        assert_eq!(record.get("Suite Price"), None);
        assert!(matches!(
            record.require("Suite Price"),
            Err(CoreError::MissingField { .. })
        ));
    }

    #[test]
    fn test_typed_accessors() {
        let record = company().with("since", "2023-01-15").with("bad", "x");
        assert_eq!(record.count("Nights Occupied Last Year").unwrap(), 120);
        assert_eq!(record.money("Standard Price").unwrap().cents(), 10050);
        assert_eq!(
            record.date("since").unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        );
        assert!(matches!(
            record.count("bad"),
            Err(CoreError::InvalidNumber { .. })
        ));
        assert!(matches!(record.date("bad"), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Record::from_pairs([("a", "1"), ("b", "2")]);
        let b = Record::from_pairs([("b", "2"), ("a", "1")]);
        let c = Record::from_pairs([("a", "1"), ("b", "3")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Record::from_pairs([("a", "1")]));
    }
}
