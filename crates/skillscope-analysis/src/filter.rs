//! Composable record predicates
//!
//! A [`FacetFilter`] is a conjunction of predicates over a [`Record`]. Two kinds
//! of predicate share the same abstraction:
//!
//! - **Field equality**: a categorical field equals a value (region, gender,
//!   age band)
//! - **Token membership**: a token occurs among the tokens of a text field
//!   (used to list trainees who asked for one specific skill)
//!
//! Applying a filter is pure. It borrows the input records and returns a new
//! sequence of references in input order, possibly empty.
//!
//! # Examples
//!
//! ```
//! use skillscope_analysis::{facet::FacetSelection, filter::FacetFilter};
//! use skillscope_survey::{FieldSelector, Gender, Record};
//!
//! let records = vec![
//!     Record::default()
//!         .with(FieldSelector::Gender, "Female")
//!         .with(FieldSelector::TrainingNeeds, "Sales; Marketing"),
//!     Record::default()
//!         .with(FieldSelector::Gender, "Male")
//!         .with(FieldSelector::TrainingNeeds, "Sales"),
//! ];
//!
//! let selection = FacetSelection::default().with_gender(Gender::Female);
//! assert_eq!(FacetFilter::from_selection(&selection).apply(&records).len(), 1);
//!
//! let marketing = FacetFilter::new().has_token(FieldSelector::TrainingNeeds, "Marketing");
//! assert_eq!(marketing.apply(&records).len(), 1);
//! ```

use skillscope_survey::{FieldSelector, Record, tokenize};

use crate::facet::{FacetDimension, FacetSelection};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Equals { field: FieldSelector, value: String },
    HasToken { field: FieldSelector, token: String },
}

impl Predicate {
    fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Equals { field, value } => record.field(*field) == Some(value.as_str()),
            Predicate::HasToken { field, token } => {
                tokenize::contains_token(record.field(*field), token)
            }
        }
    }
}

/// Conjunction of record predicates. The empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetFilter {
    predicates: Vec<Predicate>,
}

impl FacetFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter for every categorical dimension of a selection.
    #[must_use]
    pub fn from_selection(selection: &FacetSelection) -> Self {
        Self::from_dimensions(selection, &FacetDimension::ALL)
    }

    /// Filter for the listed dimensions of a selection only.
    ///
    /// Dimensions left out are not filtered, whatever the selection holds.
    #[must_use]
    pub fn from_dimensions(selection: &FacetSelection, dimensions: &[FacetDimension]) -> Self {
        dimensions
            .iter()
            .fold(Self::new(), |filter, &dimension| match selection.value(dimension) {
                Some(value) => filter.field_equals(dimension.field(), value),
                None => filter,
            })
    }

    /// Adds an equality predicate on a field.
    #[must_use]
    pub fn field_equals(mut self, field: FieldSelector, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Equals {
            field,
            value: value.into(),
        });
        self
    }

    /// Adds a token-membership predicate on a text field.
    #[must_use]
    pub fn has_token(mut self, field: FieldSelector, token: impl Into<String>) -> Self {
        self.predicates.push(Predicate::HasToken {
            field,
            token: token.into(),
        });
        self
    }

    /// Whether no predicate has been added.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.predicates.is_empty()
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.matches(record))
    }

    /// Selects the matching records, in input order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

/// Applies every categorical dimension of `selection` to `records`.
#[must_use]
pub fn filter<'a>(records: &'a [Record], selection: &FacetSelection) -> Vec<&'a Record> {
    FacetFilter::from_selection(selection).apply(records)
}
