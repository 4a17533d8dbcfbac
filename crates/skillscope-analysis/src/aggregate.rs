//! Aggregations over a filtered subset of records
//!
//! Every function here takes a subset that has already been narrowed by a
//! [`FacetFilter`](crate::filter::FacetFilter) and turns it into counts and
//! percentages. Counts and denominators are always drawn from the same subset.
//!
//! Token counts keep multiplicity (a respondent listing `"Excel, Excel"`
//! contributes 2 to the count of `Excel`), while percentages are computed over
//! respondents: the share of the subset that mentions a token at least once.
//! [`gender_comparison`] is the exception and divides counts by each gender's
//! token total, so its percentages are shares of mentions, not of respondents.
//!
//! Functions that attach percentages require a non-empty subset; the query
//! layer checks emptiness first and reports
//! [`NoDataReason::EmptySubset`](crate::outcome::NoDataReason::EmptySubset)
//! instead of calling them.

use serde::Serialize;
use skillscope_stats::{
    frequency::{FrequencyTable, Ranked},
    share::{self, Share},
};
use skillscope_survey::{FieldSelector, Gender, Record, tokenize};

use crate::outcome::ComparisonGap;

/// Ranked `(key, count, respondents, percentage, denominator)` entries.
pub type AggregationResult = Vec<Share<String>>;

/// Per-region share of respondents asking for one skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalSkill {
    /// The skill looked up
    pub skill: String,
    /// One entry per reported region, keyed by region name; the denominator
    /// is the region's respondent count
    pub regions: AggregationResult,
}

/// Top tokens of a single region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionTop {
    pub region: String,
    /// Respondents in the region after filtering
    pub respondents: usize,
    /// Ranked tokens; percentages are relative to `respondents`
    pub top: AggregationResult,
}

/// One gender's figures for a compared token.
///
/// `percentage` is the token's share of all skill mentions made by the
/// gender's respondents. It is not a share of respondents: a gender whose
/// respondents mention several skills each spreads 100% across all of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupShare {
    /// Mentions of the token, multiplicity included
    pub count: usize,
    /// Respondents mentioning the token at least once
    pub respondents: usize,
    /// `100 * count / denominator`: share of mentions, not of respondents
    pub percentage: f64,
    /// Tokens mentioned by the gender's respondents, multiplicity included
    pub denominator: usize,
}

/// A token compared between male and female respondents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub token: String,
    pub male: GroupShare,
    pub female: GroupShare,
}

impl ComparisonRow {
    #[must_use]
    pub fn share(&self, gender: Gender) -> &GroupShare {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

fn to_owned_keys(ranked: Vec<Ranked<&str>>) -> Vec<Ranked<String>> {
    ranked
        .into_iter()
        .map(|entry| entry.map_key(str::to_owned))
        .collect()
}

/// Frequency table of the tokens in `field`, one group per record.
#[must_use]
pub fn token_table<'a>(subset: &[&'a Record], field: FieldSelector) -> FrequencyTable<&'a str> {
    FrequencyTable::from_groups(
        subset
            .iter()
            .copied()
            .map(|record| tokenize::record_tokens(record, field)),
    )
}

/// Distribution of the raw values of a categorical field.
///
/// Records missing the field are not counted but stay in the denominator.
///
/// # Panics
///
/// Panics if `subset` is empty.
#[must_use]
pub fn value_distribution(subset: &[&Record], field: FieldSelector) -> AggregationResult {
    let table = FrequencyTable::from_items(subset.iter().filter_map(|record| record.field(field)));
    share::with_percentage(to_owned_keys(table.ranked(None)), subset.len())
}

/// Top `limit` tokens of `field` over the subset.
///
/// # Panics
///
/// Panics if `subset` is empty.
#[must_use]
pub fn top_tokens(subset: &[&Record], field: FieldSelector, limit: usize) -> AggregationResult {
    let table = token_table(subset, field);
    share::with_percentage(to_owned_keys(table.ranked(Some(limit))), subset.len())
}

/// Share of the subset mentioning `token`, keyed by `label`.
///
/// # Panics
///
/// Panics if `subset` is empty.
#[must_use]
pub fn token_share(
    subset: &[&Record],
    field: FieldSelector,
    token: &str,
    label: &str,
) -> Share<String> {
    let mut count = 0;
    let mut respondents = 0;
    for record in subset {
        let occurrences = tokenize::record_tokens(record, field)
            .filter(|t| *t == token)
            .count();
        count += occurrences;
        respondents += usize::from(occurrences > 0);
    }
    Share {
        key: label.to_owned(),
        count,
        respondents,
        percentage: share::percentage(respondents, subset.len()),
        denominator: subset.len(),
    }
}

fn group_share(table: &FrequencyTable<&str>, token: &str) -> GroupShare {
    let count = table.count_of(token);
    let denominator = table.total_count();
    GroupShare {
        count,
        respondents: table.respondents_of(token),
        percentage: share::percentage(count, denominator),
        denominator,
    }
}

/// Compares token demand between male and female respondents.
///
/// The compared tokens are the top `limit` of the combined male-then-female
/// token sequence; each gender's count is then looked up on its own subset.
/// A gender's percentage is its count over all tokens that gender mentioned,
/// so the percentages of one gender sum to at most 100.
pub fn gender_comparison(
    male: &[&Record],
    female: &[&Record],
    field: FieldSelector,
    limit: usize,
) -> Result<Vec<ComparisonRow>, ComparisonGap> {
    if male.is_empty() {
        return Err(ComparisonGap::MissingGender(Gender::Male));
    }
    if female.is_empty() {
        return Err(ComparisonGap::MissingGender(Gender::Female));
    }

    let male_table = token_table(male, field);
    let female_table = token_table(female, field);
    if male_table.is_empty() {
        return Err(ComparisonGap::NoTokens(Gender::Male));
    }
    if female_table.is_empty() {
        return Err(ComparisonGap::NoTokens(Gender::Female));
    }

    let combined = FrequencyTable::from_items(
        male.iter()
            .chain(female)
            .flat_map(|record| tokenize::record_tokens(record, field)),
    );

    Ok(combined
        .ranked(Some(limit))
        .into_iter()
        .map(|entry| ComparisonRow {
            token: entry.key.to_owned(),
            male: group_share(&male_table, entry.key),
            female: group_share(&female_table, entry.key),
        })
        .collect())
}
