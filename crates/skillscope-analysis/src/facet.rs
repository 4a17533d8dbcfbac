//! Facet selections
//!
//! A [`FacetSelection`] is the set of choices a query is asked under: one value
//! (or [`Facet::All`]) per categorical dimension, plus the [`SkillCategory`]
//! that decides which free-text field supplies tokens.
//!
//! `All` is the identity filter for its dimension. Selections never fail to
//! apply: a value that no record carries simply matches nothing. Use
//! [`FacetSelection::validate`] to reject such values up front.
//!
//! # Examples
//!
//! ```
//! use skillscope_analysis::facet::{Facet, FacetSelection, SkillCategory};
//! use skillscope_survey::{FieldSelector, Gender};
//!
//! let selection = FacetSelection::default()
//!     .with_region("North")
//!     .with_gender(Gender::Female)
//!     .with_category(SkillCategory::Soft);
//!
//! assert_eq!(selection.region, Facet::Only("North".to_owned()));
//! assert!(selection.age_band.is_all());
//! assert_eq!(selection.skill_category.field(), FieldSelector::SoftSkill);
//! ```

use serde::{Deserialize, Serialize};
use skillscope_survey::{FieldSelector, Gender, RecordStore};

/// One dimension's choice: everything, or exactly one value.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Facet<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Facet<T> {
    /// The selected value, `None` for `All`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Facet::All => None,
            Facet::Only(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Facet::All, Facet::Only)
    }
}

/// Which free-text field supplies skill tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    /// Overall training needs
    #[default]
    All,
    /// Technical skills to learn
    Technical,
    /// Soft skills to learn
    Soft,
}

impl SkillCategory {
    #[must_use]
    pub fn field(self) -> FieldSelector {
        match self {
            SkillCategory::All => FieldSelector::TrainingNeeds,
            SkillCategory::Technical => FieldSelector::TechnicalSkill,
            SkillCategory::Soft => FieldSelector::SoftSkill,
        }
    }

    /// Display label for the category.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::All => "Overall Training Needs",
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Soft => "Soft Skills",
        }
    }
}

/// The categorical dimensions a selection can narrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetDimension {
    Region,
    Gender,
    AgeBand,
}

impl FacetDimension {
    pub const ALL: [Self; 3] = [Self::Region, Self::Gender, Self::AgeBand];

    #[must_use]
    pub fn field(self) -> FieldSelector {
        match self {
            FacetDimension::Region => FieldSelector::Region,
            FacetDimension::Gender => FieldSelector::Gender,
            FacetDimension::AgeBand => FieldSelector::AgeBand,
        }
    }
}

/// Query-time facet choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetSelection {
    pub region: Facet<String>,
    pub gender: Facet<Gender>,
    pub age_band: Facet<String>,
    pub skill_category: SkillCategory,
}

/// A facet selects a value that no record in the store carries.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown {field} '{value}': no record carries this value")]
pub struct UnknownFacetValueError {
    pub field: FieldSelector,
    pub value: String,
}

impl FacetSelection {
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Facet::Only(region.into());
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Facet::Only(gender);
        self
    }

    #[must_use]
    pub fn with_age_band(mut self, age_band: impl Into<String>) -> Self {
        self.age_band = Facet::Only(age_band.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: SkillCategory) -> Self {
        self.skill_category = category;
        self
    }

    /// The selected value of a dimension, `None` for `All`.
    #[must_use]
    pub fn value(&self, dimension: FacetDimension) -> Option<&str> {
        match dimension {
            FacetDimension::Region => self.region.value().map(String::as_str),
            FacetDimension::Gender => self.gender.value().map(|gender| gender.as_str()),
            FacetDimension::AgeBand => self.age_band.value().map(String::as_str),
        }
    }

    /// Checks that every selected value occurs in the store.
    pub fn validate(&self, store: &RecordStore) -> Result<(), UnknownFacetValueError> {
        self.validate_dimensions(store, &FacetDimension::ALL)
    }

    /// Checks the selected values of `dimensions` only; other facets are not
    /// looked at.
    pub fn validate_dimensions(
        &self,
        store: &RecordStore,
        dimensions: &[FacetDimension],
    ) -> Result<(), UnknownFacetValueError> {
        for &dimension in dimensions {
            let Some(value) = self.value(dimension) else {
                continue;
            };
            if !store.contains_value(dimension.field(), value) {
                return Err(UnknownFacetValueError {
                    field: dimension.field(),
                    value: value.to_owned(),
                });
            }
        }
        Ok(())
    }
}
