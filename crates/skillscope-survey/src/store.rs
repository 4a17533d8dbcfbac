//! Immutable in-memory record store
//!
//! The store is built once from loaded records and only hands out shared
//! references afterwards. Every query starts from the full record set; filters
//! produce new sequences and never shrink the store.
//!
//! # Examples
//!
//! ```
//! use skillscope_survey::{record::{FieldSelector, Record}, store::RecordStore};
//!
//! let store = RecordStore::new(vec![
//!     Record::default().with(FieldSelector::Region, "North"),
//!     Record::default().with(FieldSelector::Region, "South"),
//!     Record::default().with(FieldSelector::Region, "North"),
//!     Record::default(),
//! ]);
//!
//! assert_eq!(store.len(), 4);
//! assert_eq!(store.distinct_values(FieldSelector::Region), ["North", "South"]);
//! ```

use indexmap::IndexSet;

use crate::{
    record::{FieldSelector, Record},
    tokenize,
};

/// Read-only collection of survey records in load order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records in load order.
    #[must_use]
    pub fn all_records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of a categorical field in first-seen order.
    ///
    /// Missing and blank values are excluded.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not categorical; use [`Self::distinct_tokens`] for
    /// free-text fields.
    #[must_use]
    pub fn distinct_values(&self, field: FieldSelector) -> Vec<&str> {
        assert!(field.is_categorical(), "{field} is not a categorical field");
        first_seen(
            self.records
                .iter()
                .filter_map(|record| record.field(field))
                .filter(|value| !value.trim().is_empty()),
        )
    }

    /// Distinct tokens of a text field in first-seen order.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a free-text field.
    #[must_use]
    pub fn distinct_tokens(&self, field: FieldSelector) -> Vec<&str> {
        assert!(field.is_text(), "{field} is not a free-text field");
        first_seen(tokenize::tokenize_multi(&self.records, field))
    }

    /// Whether `value` occurs in `field` of at least one record.
    #[must_use]
    pub fn contains_value(&self, field: FieldSelector, value: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.field(field) == Some(value))
    }

    #[must_use]
    pub fn regions(&self) -> Vec<&str> {
        self.distinct_values(FieldSelector::Region)
    }

    #[must_use]
    pub fn age_bands(&self) -> Vec<&str> {
        self.distinct_values(FieldSelector::AgeBand)
    }

    /// Sorted distinct training-need tokens, for choosing a specific skill.
    #[must_use]
    pub fn skill_options(&self) -> Vec<&str> {
        let mut options = self.distinct_tokens(FieldSelector::TrainingNeeds);
        options.sort_unstable();
        options
    }

    /// The skill preselected when none is chosen: the first skill option.
    #[must_use]
    pub fn default_skill(&self) -> Option<&str> {
        self.skill_options().first().copied()
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn first_seen<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, age: &str, needs: &str) -> Record {
        Record::default()
            .with(FieldSelector::Region, region)
            .with(FieldSelector::AgeBand, age)
            .with(FieldSelector::TrainingNeeds, needs)
    }

    fn sample_store() -> RecordStore {
        RecordStore::new(vec![
            record("West", "18-25", "Sales; Excel"),
            record("North", "26-35", "Excel"),
            Record::default().with(FieldSelector::Region, "  "),
            record("West", "18-25", "Accounting, Sales"),
        ])
    }

    #[test]
    fn test_all_records_keeps_load_order() {
        let store = sample_store();
        let regions = store
            .all_records()
            .iter()
            .map(|r| r.region.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(
            regions,
            [Some("West"), Some("North"), Some("  "), Some("West")]
        );
    }

    #[test]
    fn test_distinct_values_first_seen_without_missing() {
        let store = sample_store();
        assert_eq!(store.regions(), ["West", "North"]);
        assert_eq!(store.age_bands(), ["18-25", "26-35"]);
        assert!(store.distinct_values(FieldSelector::Gender).is_empty());
    }

    #[test]
    fn test_distinct_tokens_first_seen() {
        let store = sample_store();
        assert_eq!(
            store.distinct_tokens(FieldSelector::TrainingNeeds),
            ["Sales", "Excel", "Accounting"]
        );
    }

    #[test]
    fn test_first_seen_keeps_first_position() {
        let store = ["b", "a", "b", "c", "a"]
            .into_iter()
            .map(|region| Record::default().with(FieldSelector::Region, region))
            .collect::<RecordStore>();
        assert_eq!(store.regions(), ["b", "a", "c"]);
    }

    #[test]
    #[should_panic(expected = "not a categorical field")]
    fn test_distinct_values_rejects_text_field() {
        let _ = sample_store().distinct_values(FieldSelector::TrainingNeeds);
    }

    #[test]
    #[should_panic(expected = "not a free-text field")]
    fn test_distinct_tokens_rejects_categorical_field() {
        let _ = sample_store().distinct_tokens(FieldSelector::Region);
    }

    #[test]
    fn test_skill_options_sorted() {
        let store = sample_store();
        assert_eq!(store.skill_options(), ["Accounting", "Excel", "Sales"]);
        assert_eq!(store.default_skill(), Some("Accounting"));
        assert_eq!(RecordStore::default().default_skill(), None);
    }

    #[test]
    fn test_contains_value() {
        let store = sample_store();
        assert!(store.contains_value(FieldSelector::Region, "North"));
        assert!(!store.contains_value(FieldSelector::Region, "Atlantis"));
    }

    #[test]
    fn test_collect_into_store() {
        let store = (0..3).map(|_| Record::default()).collect::<RecordStore>();
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
        assert!(RecordStore::from(Vec::<Record>::new()).is_empty());
    }
}
