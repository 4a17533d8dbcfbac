//! Faceted aggregation over trainee survey records
//!
//! This crate turns a loaded [`RecordStore`](skillscope_survey::RecordStore)
//! into the counts and percentages behind every survey report.
//!
//! # Overview
//!
//! A query runs in three steps:
//!
//! 1. **Select** ([`facet::FacetSelection`]): Pick a region, gender and age band
//!    (each may be "All") and the skill category to analyze
//! 2. **Filter** ([`filter::FacetFilter`]): Narrow the store to the matching
//!    records. Each query shape applies only the dimensions that make sense for
//!    it; the gender distribution, for example, never filters by gender
//! 3. **Aggregate** ([`aggregate`]): Tokenize the selected field, rank tokens by
//!    occurrence count and attach percentages whose denominator is the size of
//!    the same subset
//!
//! [`query::SurveyQuery`] wires the three steps together and reports the
//! result as an [`outcome::Outcome`]: either data, or a typed marker explaining
//! why there is none.
//!
//! # Examples
//!
//! ```
//! use skillscope_analysis::{
//!     facet::{FacetSelection, SkillCategory},
//!     outcome::Outcome,
//!     query::SurveyQuery,
//! };
//! use skillscope_survey::{FieldSelector, Gender, Record, RecordStore};
//!
//! let store = RecordStore::new(vec![
//!     Record::default()
//!         .with(FieldSelector::Gender, "Male")
//!         .with(FieldSelector::TrainingNeeds, "Sales"),
//!     Record::default()
//!         .with(FieldSelector::Gender, "Female")
//!         .with(FieldSelector::TrainingNeeds, "Sales; Marketing"),
//! ]);
//! let query = SurveyQuery::new(&store);
//!
//! let selection = FacetSelection::default().with_category(SkillCategory::All);
//! let Outcome::Data(rows) = query.gender_comparison(&selection) else {
//!     panic!("both genders are present");
//! };
//! assert_eq!(rows[0].token, "Sales");
//! assert_eq!(rows[0].share(Gender::Male).percentage, 100.0);
//! assert_eq!(rows[0].share(Gender::Female).percentage, 50.0);
//! ```

pub mod aggregate;
pub mod config;
pub mod facet;
pub mod filter;
pub mod outcome;
pub mod query;
