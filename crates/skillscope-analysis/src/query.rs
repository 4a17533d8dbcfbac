//! Query façade
//!
//! [`SurveyQuery`] answers the analytical questions asked of a survey:
//!
//! | Query | Facets applied | Token source | Denominator |
//! |---|---|---|---|
//! | [`gender_distribution`](SurveyQuery::gender_distribution) | region, age band | raw gender values | subset size |
//! | [`region_distribution`](SurveyQuery::region_distribution) | gender, age band | raw region values | subset size |
//! | [`top_needs`](SurveyQuery::top_needs) | region, gender, age band | category field | subset size |
//! | [`regional_skill`](SurveyQuery::regional_skill) | gender, age band | training needs | region size |
//! | [`regional_top`](SurveyQuery::regional_top) | region (optional), gender, age band | category field | region size |
//! | [`gender_comparison`](SurveyQuery::gender_comparison) | region, age band | category field | tokens per gender |
//! | [`records`](SurveyQuery::records) | region, gender, age band, skill | | |
//!
//! Each query is a pure function of the borrowed [`RecordStore`] and the
//! [`FacetSelection`]; the store is never modified, so a `SurveyQuery` can be
//! shared freely between threads.
//!
//! # Examples
//!
//! ```
//! use skillscope_analysis::{
//!     facet::FacetSelection,
//!     outcome::{NoDataReason, Outcome},
//!     query::SurveyQuery,
//! };
//! use skillscope_survey::{FieldSelector, Record, RecordStore};
//!
//! let store = RecordStore::new(vec![
//!     Record::default()
//!         .with(FieldSelector::Region, "North")
//!         .with(FieldSelector::Gender, "Male")
//!         .with(FieldSelector::TrainingNeeds, "Excel, Excel"),
//! ]);
//! let query = SurveyQuery::new(&store);
//!
//! let Outcome::Data(top) = query.top_needs(&FacetSelection::default()) else {
//!     panic!("expected data");
//! };
//! assert_eq!(top[0].key, "Excel");
//! assert_eq!(top[0].count, 2);
//! assert_eq!(top[0].percentage, 100.0);
//!
//! let atlantis = FacetSelection::default().with_region("Atlantis");
//! assert_eq!(query.top_needs(&atlantis), Outcome::NoData(NoDataReason::EmptySubset));
//! ```

use serde::Serialize;
use skillscope_survey::{FieldSelector, Gender, Record, RecordStore};
use tracing::{debug, trace};

use crate::{
    aggregate::{self, AggregationResult, ComparisonRow, RegionTop, RegionalSkill},
    config::AnalysisConfig,
    facet::{FacetDimension, FacetSelection},
    filter::FacetFilter,
    outcome::{NoDataReason, Outcome},
};

/// The query shapes [`SurveyQuery::run`] dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    GenderDistribution,
    RegionDistribution,
    TopNeeds,
    RegionalSkill { skill: Option<String> },
    RegionalTop,
    GenderComparison,
    Records { skill: Option<String> },
}

impl QueryKind {
    /// The facet dimensions the query filters on. Selected values of the
    /// other dimensions do not affect its result.
    #[must_use]
    pub fn facet_dimensions(&self) -> &'static [FacetDimension] {
        match self {
            Self::GenderDistribution | Self::GenderComparison => &LOCATION_DIMENSIONS,
            Self::RegionDistribution | Self::RegionalSkill { .. } => &DEMOGRAPHIC_DIMENSIONS,
            Self::TopNeeds | Self::RegionalTop | Self::Records { .. } => &FacetDimension::ALL,
        }
    }
}

/// Data returned by [`SurveyQuery::run`], one variant per [`QueryKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", content = "data", rename_all = "snake_case")]
pub enum QueryResult {
    GenderDistribution(AggregationResult),
    RegionDistribution(AggregationResult),
    TopNeeds(AggregationResult),
    RegionalSkill(RegionalSkill),
    RegionalTop(Vec<RegionTop>),
    GenderComparison(Vec<ComparisonRow>),
    Records(Vec<Record>),
}

/// Stateless query entry point over a loaded [`RecordStore`].
#[derive(Debug, Clone, Copy)]
pub struct SurveyQuery<'a> {
    store: &'a RecordStore,
    config: AnalysisConfig,
}

const DEMOGRAPHIC_DIMENSIONS: [FacetDimension; 2] =
    [FacetDimension::Gender, FacetDimension::AgeBand];
const LOCATION_DIMENSIONS: [FacetDimension; 2] = [FacetDimension::Region, FacetDimension::AgeBand];

impl<'a> SurveyQuery<'a> {
    #[must_use]
    pub fn new(store: &'a RecordStore) -> Self {
        Self::with_config(store, AnalysisConfig::default())
    }

    #[must_use]
    pub fn with_config(store: &'a RecordStore, config: AnalysisConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub fn store(&self) -> &'a RecordStore {
        self.store
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn subset(
        &self,
        query: &'static str,
        selection: &FacetSelection,
        dimensions: &[FacetDimension],
    ) -> Vec<&'a Record> {
        let subset =
            FacetFilter::from_dimensions(selection, dimensions).apply(self.store.all_records());
        debug!(
            query,
            matched = subset.len(),
            total = self.store.len(),
            "filtered records"
        );
        subset
    }

    /// Gender distribution under the region and age-band facets.
    #[must_use]
    pub fn gender_distribution(&self, selection: &FacetSelection) -> Outcome<AggregationResult> {
        let subset = self.subset("gender_distribution", selection, &LOCATION_DIMENSIONS);
        if subset.is_empty() {
            return NoDataReason::EmptySubset.into();
        }
        let distribution = aggregate::value_distribution(&subset, FieldSelector::Gender);
        Outcome::Data(distribution)
    }

    /// Region distribution under the gender and age-band facets.
    #[must_use]
    pub fn region_distribution(&self, selection: &FacetSelection) -> Outcome<AggregationResult> {
        let subset = self.subset("region_distribution", selection, &DEMOGRAPHIC_DIMENSIONS);
        if subset.is_empty() {
            return NoDataReason::EmptySubset.into();
        }
        let distribution = aggregate::value_distribution(&subset, FieldSelector::Region);
        Outcome::Data(distribution)
    }

    /// Most requested tokens of the selected category under every facet.
    #[must_use]
    pub fn top_needs(&self, selection: &FacetSelection) -> Outcome<AggregationResult> {
        let subset = self.subset("top_needs", selection, &FacetDimension::ALL);
        if subset.is_empty() {
            return NoDataReason::EmptySubset.into();
        }
        let top = aggregate::top_tokens(
            &subset,
            selection.skill_category.field(),
            self.config.top_needs_limit,
        );
        if top.is_empty() {
            return NoDataReason::NoTokens.into();
        }
        Outcome::Data(top)
    }

    /// Share of each region's respondents whose training needs include `skill`.
    ///
    /// Regions are reported in first-seen order; regions left without
    /// respondents by the gender and age-band facets are omitted.
    #[must_use]
    pub fn regional_skill(
        &self,
        selection: &FacetSelection,
        skill: Option<&str>,
    ) -> Outcome<RegionalSkill> {
        let subset = self.subset("regional_skill", selection, &DEMOGRAPHIC_DIMENSIONS);
        if subset.is_empty() {
            return NoDataReason::EmptySubset.into();
        }
        let Some(skill) = skill else {
            return NoDataReason::NoSkillSelected.into();
        };

        let regions = self
            .store
            .regions()
            .into_iter()
            .filter_map(|region| {
                let region_subset = FacetFilter::new()
                    .field_equals(FieldSelector::Region, region)
                    .apply(subset.iter().copied());
                if region_subset.is_empty() {
                    trace!(region, "no respondents after filtering");
                    return None;
                }
                Some(aggregate::token_share(
                    &region_subset,
                    FieldSelector::TrainingNeeds,
                    skill,
                    region,
                ))
            })
            .collect::<Vec<_>>();

        if regions.is_empty() {
            return NoDataReason::NoQualifiedRegions.into();
        }
        Outcome::Data(RegionalSkill {
            skill: skill.to_owned(),
            regions,
        })
    }

    /// Top tokens of the selected category for each region.
    ///
    /// With a region selected only that region is reported. Otherwise every
    /// region with more than
    /// [`min_region_respondents`](AnalysisConfig::min_region_respondents)
    /// respondents is reported. Independently, regions whose respondents
    /// recorded no tokens are skipped.
    #[must_use]
    pub fn regional_top(&self, selection: &FacetSelection) -> Outcome<Vec<RegionTop>> {
        let subset = self.subset("regional_top", selection, &DEMOGRAPHIC_DIMENSIONS);
        if subset.is_empty() {
            return NoDataReason::EmptySubset.into();
        }

        let (candidates, threshold) = match selection.region.value() {
            Some(region) => (vec![region.as_str()], None),
            None => (
                self.store.regions(),
                Some(self.config.min_region_respondents),
            ),
        };

        let field = selection.skill_category.field();
        let mut qualified = 0;
        let mut report = vec![];
        for region in candidates {
            let region_subset = FacetFilter::new()
                .field_equals(FieldSelector::Region, region)
                .apply(subset.iter().copied());
            if threshold.is_some_and(|min| region_subset.len() <= min) {
                trace!(
                    region,
                    respondents = region_subset.len(),
                    "below respondent threshold"
                );
                continue;
            }
            if region_subset.is_empty() {
                continue;
            }
            qualified += 1;

            let top = aggregate::top_tokens(&region_subset, field, self.config.regional_top_limit);
            if top.is_empty() {
                trace!(region, "no tokens recorded");
                continue;
            }
            report.push(RegionTop {
                region: region.to_owned(),
                respondents: region_subset.len(),
                top,
            });
        }

        if qualified == 0 {
            return NoDataReason::NoQualifiedRegions.into();
        }
        if report.is_empty() {
            return NoDataReason::NoTokens.into();
        }
        Outcome::Data(report)
    }

    /// Compares the selected category between male and female respondents.
    ///
    /// Reports [`Outcome::InsufficientComparisonData`] when either side is
    /// empty or records no tokens, rather than a one-sided comparison.
    #[must_use]
    pub fn gender_comparison(&self, selection: &FacetSelection) -> Outcome<Vec<ComparisonRow>> {
        let subset = self.subset("gender_comparison", selection, &LOCATION_DIMENSIONS);
        if subset.is_empty() {
            return NoDataReason::EmptySubset.into();
        }

        let by_gender = |gender: Gender| {
            subset
                .iter()
                .copied()
                .filter(|record| record.has_gender(gender))
                .collect::<Vec<_>>()
        };
        let male = by_gender(Gender::Male);
        let female = by_gender(Gender::Female);
        debug!(male = male.len(), female = female.len(), "gender subsets");

        match aggregate::gender_comparison(
            &male,
            &female,
            selection.skill_category.field(),
            self.config.comparison_limit,
        ) {
            Ok(rows) => Outcome::Data(rows),
            Err(gap) => gap.into(),
        }
    }

    /// Records matching every facet and, when given, requesting `skill`.
    #[must_use]
    pub fn records(&self, selection: &FacetSelection, skill: Option<&str>) -> Outcome<Vec<Record>> {
        let mut filter = FacetFilter::from_selection(selection);
        if let Some(skill) = skill {
            filter = filter.has_token(FieldSelector::TrainingNeeds, skill);
        }
        let subset = filter.apply(self.store.all_records());
        debug!(
            query = "records",
            matched = subset.len(),
            total = self.store.len(),
            "filtered records"
        );
        if subset.is_empty() {
            return NoDataReason::EmptySubset.into();
        }
        Outcome::Data(subset.into_iter().cloned().collect())
    }

    /// Runs a query by kind.
    #[must_use]
    pub fn run(&self, selection: &FacetSelection, kind: &QueryKind) -> Outcome<QueryResult> {
        match kind {
            QueryKind::GenderDistribution => self
                .gender_distribution(selection)
                .map(QueryResult::GenderDistribution),
            QueryKind::RegionDistribution => self
                .region_distribution(selection)
                .map(QueryResult::RegionDistribution),
            QueryKind::TopNeeds => self.top_needs(selection).map(QueryResult::TopNeeds),
            QueryKind::RegionalSkill { skill } => self
                .regional_skill(selection, skill.as_deref())
                .map(QueryResult::RegionalSkill),
            QueryKind::RegionalTop => self.regional_top(selection).map(QueryResult::RegionalTop),
            QueryKind::GenderComparison => self
                .gender_comparison(selection)
                .map(QueryResult::GenderComparison),
            QueryKind::Records { skill } => self
                .records(selection, skill.as_deref())
                .map(QueryResult::Records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{facet::SkillCategory, outcome::ComparisonGap};

    fn record(region: &str, gender: &str, age: &str, needs: &str) -> Record {
        Record::default()
            .with(FieldSelector::Region, region)
            .with(FieldSelector::Gender, gender)
            .with(FieldSelector::AgeBand, age)
            .with(FieldSelector::TrainingNeeds, needs)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn survey() -> RecordStore {
        RecordStore::new(vec![
            record("North", "Male", "18-25", "Excel, Sales")
                .with(FieldSelector::TechnicalSkill, "Welding"),
            record("North", "Female", "26-35", "Sales; Marketing")
                .with(FieldSelector::SoftSkill, "Leadership"),
            record("North", "Female", "18-25", "Tailoring"),
            record("North", "Male", "26-35", "Excel"),
            record("South", "Female", "18-25", "Sales"),
            record("South", "Male", "18-25", "Excel; Sales"),
            record("South", "Female", "26-35", ""),
            record("East", "Male", "18-25", "Driving"),
        ])
    }

    #[test]
    fn test_single_record_top_needs() {
        let store = RecordStore::new(vec![record("North", "Male", "18-25", "Excel, Excel")]);
        let query = SurveyQuery::new(&store);
        let top = query
            .top_needs(&FacetSelection::default())
            .into_data()
            .unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].key, "Excel");
        assert_eq!(top[0].count, 2);
        assert!(close(top[0].percentage, 100.0));
    }

    #[test]
    fn test_unknown_region_yields_empty_subset_marker() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let atlantis = FacetSelection::default().with_region("Atlantis");
        assert_eq!(
            query.top_needs(&atlantis),
            Outcome::NoData(NoDataReason::EmptySubset)
        );
        assert_eq!(
            query.gender_distribution(&atlantis),
            Outcome::NoData(NoDataReason::EmptySubset)
        );
        assert_eq!(
            query.gender_comparison(&atlantis),
            Outcome::NoData(NoDataReason::EmptySubset)
        );
        assert_eq!(
            query.records(&atlantis, None),
            Outcome::NoData(NoDataReason::EmptySubset)
        );
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_top_needs_uses_category_field() {
        let store = survey();
        let query = SurveyQuery::new(&store);

        let all = query
            .top_needs(&FacetSelection::default())
            .into_data()
            .unwrap();
        assert_eq!(all[0].key, "Sales");
        assert_eq!(all[0].count, 4);
        assert_eq!(all[1].key, "Excel");
        assert_eq!(all[1].count, 3);
        assert!(all.iter().all(|s| s.denominator == 8));

        let technical = query
            .top_needs(&FacetSelection::default().with_category(SkillCategory::Technical))
            .into_data()
            .unwrap();
        assert_eq!(technical.len(), 1);
        assert_eq!(technical[0].key, "Welding");
    }

    #[test]
    fn test_top_needs_no_tokens() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default()
            .with_region("East")
            .with_category(SkillCategory::Soft);
        assert_eq!(
            query.top_needs(&selection),
            Outcome::NoData(NoDataReason::NoTokens)
        );
    }

    #[test]
    fn test_top_needs_respects_limit() {
        let store = survey();
        let config = AnalysisConfig {
            top_needs_limit: 2,
            ..AnalysisConfig::default()
        };
        let query = SurveyQuery::with_config(&store, config);
        let top = query
            .top_needs(&FacetSelection::default())
            .into_data()
            .unwrap();
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_gender_distribution_ignores_gender_facet() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default()
            .with_region("North")
            .with_gender(Gender::Female);
        let dist = query.gender_distribution(&selection).into_data().unwrap();
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].key, "Male");
        assert_eq!(dist[0].count, 2);
        assert!(close(dist[0].percentage, 50.0));
        assert_eq!(dist[1].key, "Female");
        assert_eq!(dist[1].denominator, 4);
    }

    #[test]
    fn test_region_distribution_ignores_region_facet() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default()
            .with_region("South")
            .with_age_band("18-25");
        let dist = query.region_distribution(&selection).into_data().unwrap();
        let keys = dist.iter().map(|s| s.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, ["North", "South", "East"]);
        assert!(dist.iter().all(|s| s.denominator == 5));
        let total = dist.iter().map(|s| s.percentage).sum::<f64>();
        assert!(close(total, 100.0));
    }

    #[test]
    fn test_regional_skill() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let report = query
            .regional_skill(&FacetSelection::default(), Some("Sales"))
            .into_data()
            .unwrap();
        assert_eq!(report.skill, "Sales");
        let regions = report
            .regions
            .iter()
            .map(|s| (s.key.as_str(), s.count, s.denominator))
            .collect::<Vec<_>>();
        assert_eq!(regions, [("North", 2, 4), ("South", 2, 3), ("East", 0, 1)]);
        assert!(close(report.regions[0].percentage, 50.0));
        assert!(close(report.regions[2].percentage, 0.0));
    }

    #[test]
    fn test_regional_skill_omits_regions_without_respondents() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default().with_age_band("26-35");
        let report = query
            .regional_skill(&selection, Some("Excel"))
            .into_data()
            .unwrap();
        let regions = report
            .regions
            .iter()
            .map(|s| s.key.as_str())
            .collect::<Vec<_>>();
        assert_eq!(regions, ["North", "South"]);
    }

    #[test]
    fn test_regional_skill_requires_skill() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        assert_eq!(
            query.regional_skill(&FacetSelection::default(), None),
            Outcome::NoData(NoDataReason::NoSkillSelected)
        );
    }

    #[test]
    fn test_regional_top_respondent_threshold() {
        // North: 4 respondents, South: 3, East: 1
        let store = survey();
        let query = SurveyQuery::new(&store);
        let report = query
            .regional_top(&FacetSelection::default())
            .into_data()
            .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].region, "North");
        assert_eq!(report[0].respondents, 4);
        assert_eq!(report[0].top[0].key, "Excel");
        assert!(report[0].top.len() <= 5);
        assert!(report[0].top.iter().all(|s| s.denominator == 4));
    }

    #[test]
    fn test_regional_top_three_excluded_four_included() {
        let mut records = (0..3)
            .map(|_| record("Small", "Male", "18-25", "Excel"))
            .collect::<Vec<_>>();
        records.extend((0..4).map(|_| record("Large", "Female", "18-25", "Sales")));
        let store = RecordStore::new(records);
        let query = SurveyQuery::new(&store);
        let report = query
            .regional_top(&FacetSelection::default())
            .into_data()
            .unwrap();
        let regions = report.iter().map(|r| r.region.as_str()).collect::<Vec<_>>();
        assert_eq!(regions, ["Large"]);
    }

    #[test]
    fn test_regional_top_selected_region_skips_threshold() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let report = query
            .regional_top(&FacetSelection::default().with_region("East"))
            .into_data()
            .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].region, "East");
        assert_eq!(report[0].top[0].key, "Driving");
        assert!(close(report[0].top[0].percentage, 100.0));
    }

    #[test]
    fn test_regional_top_no_qualified_regions() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default().with_gender(Gender::Male);
        assert_eq!(
            query.regional_top(&selection),
            Outcome::NoData(NoDataReason::NoQualifiedRegions)
        );
    }

    #[test]
    fn test_regional_top_skips_regions_without_tokens() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default()
            .with_region("North")
            .with_category(SkillCategory::Soft);
        let report = query.regional_top(&selection).into_data().unwrap();
        assert_eq!(report[0].top[0].key, "Leadership");
        assert!(close(report[0].top[0].percentage, 25.0));

        let selection = FacetSelection::default()
            .with_region("East")
            .with_category(SkillCategory::Soft);
        assert_eq!(
            query.regional_top(&selection),
            Outcome::NoData(NoDataReason::NoTokens)
        );
    }

    #[test]
    fn test_gender_comparison_two_records() {
        let store = RecordStore::new(vec![
            record("North", "Male", "18-25", "Sales"),
            record("North", "Female", "18-25", "Sales; Marketing"),
        ]);
        let query = SurveyQuery::new(&store);
        let rows = query
            .gender_comparison(&FacetSelection::default())
            .into_data()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].token, "Sales");
        assert!(close(rows[0].male.percentage, 100.0));
        assert!(close(rows[0].female.percentage, 50.0));
        assert_eq!(rows[1].token, "Marketing");
        assert_eq!(rows[1].male.count, 0);
        assert_eq!(rows[1].male.denominator, 1);
        assert!(close(rows[1].male.percentage, 0.0));
        assert_eq!(rows[1].female.count, 1);
        assert!(close(rows[1].female.percentage, 50.0));
    }

    #[test]
    fn test_gender_comparison_one_sided() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default().with_region("East");
        assert_eq!(
            query.gender_comparison(&selection),
            Outcome::InsufficientComparisonData(ComparisonGap::MissingGender(Gender::Female))
        );
    }

    #[test]
    fn test_gender_comparison_ignores_gender_facet() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default().with_gender(Gender::Male);
        let rows = query.gender_comparison(&selection).into_data().unwrap();
        assert!(rows.len() <= 7);
        assert!(rows.iter().any(|r| r.female.count > 0));
    }

    #[test]
    fn test_records_by_skill() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default().with_gender(Gender::Female);
        let records = query
            .records(&selection, Some("Sales"))
            .into_data()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.has_gender(Gender::Female)));

        assert_eq!(
            query.records(&selection, Some("Welding")),
            Outcome::NoData(NoDataReason::EmptySubset)
        );

        let everyone = query
            .records(&FacetSelection::default(), None)
            .into_data()
            .unwrap();
        assert_eq!(everyone.as_slice(), store.all_records());
    }

    #[test]
    fn test_percentages_within_bounds() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default();
        let mut shares = query.top_needs(&selection).into_data().unwrap();
        shares.extend(query.gender_distribution(&selection).into_data().unwrap());
        shares.extend(query.region_distribution(&selection).into_data().unwrap());
        for region in query.regional_top(&selection).into_data().unwrap() {
            shares.extend(region.top);
        }
        for share in shares {
            assert!(share.respondents <= share.denominator, "{share:?}");
            assert!((0.0..=100.0).contains(&share.percentage), "{share:?}");
        }
    }

    #[test]
    fn test_run_dispatches() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default();

        assert!(matches!(
            query.run(&selection, &QueryKind::TopNeeds),
            Outcome::Data(QueryResult::TopNeeds(_))
        ));
        let regional_skill = QueryKind::RegionalSkill {
            skill: Some("Excel".into()),
        };
        assert!(matches!(
            query.run(&selection, &regional_skill),
            Outcome::Data(QueryResult::RegionalSkill(_))
        ));
        assert!(matches!(
            query.run(&selection, &QueryKind::GenderComparison),
            Outcome::Data(QueryResult::GenderComparison(_))
        ));
        assert_eq!(
            query.run(&selection, &QueryKind::RegionalSkill { skill: None }),
            Outcome::NoData(NoDataReason::NoSkillSelected)
        );
    }

    #[test]
    fn test_facet_dimensions_match_applied_facets() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        // Values that match nothing in the dimensions a query ignores.
        let ignored = |dimension| match dimension {
            FacetDimension::Region => FacetSelection::default().with_region("Atlantis"),
            FacetDimension::Gender => FacetSelection::default().with_gender(Gender::Male),
            FacetDimension::AgeBand => FacetSelection::default().with_age_band("99+"),
        };
        let kinds = [
            QueryKind::GenderDistribution,
            QueryKind::RegionDistribution,
            QueryKind::TopNeeds,
            QueryKind::RegionalSkill {
                skill: Some("Sales".into()),
            },
            QueryKind::GenderComparison,
        ];
        for kind in kinds {
            let applied = kind.facet_dimensions();
            let unfiltered = query.run(&FacetSelection::default(), &kind);
            for dimension in FacetDimension::ALL {
                let outcome = query.run(&ignored(dimension), &kind);
                if applied.contains(&dimension) {
                    assert_ne!(outcome, unfiltered, "{kind:?} {dimension:?}");
                } else {
                    assert_eq!(outcome, unfiltered, "{kind:?} {dimension:?}");
                }
            }
        }
        assert_eq!(
            QueryKind::Records { skill: None }.facet_dimensions(),
            FacetDimension::ALL
        );
        assert_eq!(
            QueryKind::RegionalTop.facet_dimensions(),
            FacetDimension::ALL
        );
    }

    #[test]
    fn test_result_serializes_without_internal_references() {
        let store = survey();
        let query = SurveyQuery::new(&store);
        let outcome = query.run(&FacetSelection::default(), &QueryKind::GenderComparison);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "data");
        assert_eq!(json["result"]["query"], "gender_comparison");
        assert!(json["result"]["data"][0]["male"]["percentage"].is_number());
    }

    #[test]
    fn test_queries_never_mutate_store() {
        let store = survey();
        let before = store.all_records().to_vec();
        let query = SurveyQuery::new(&store);
        let selection = FacetSelection::default().with_region("North");
        for kind in [
            QueryKind::GenderDistribution,
            QueryKind::RegionDistribution,
            QueryKind::TopNeeds,
            QueryKind::RegionalSkill {
                skill: Some("Sales".into()),
            },
            QueryKind::RegionalTop,
            QueryKind::GenderComparison,
            QueryKind::Records { skill: None },
        ] {
            let _ = query.run(&selection, &kind);
        }
        assert_eq!(store.all_records(), before.as_slice());
    }
}
