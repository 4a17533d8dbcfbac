//! Query outcomes
//!
//! Queries never fail for lack of data. An empty subset, or a subset whose
//! selected field yields no tokens, produces [`Outcome::NoData`] carrying the
//! reason; the gender comparison additionally refuses to compare a one-sided
//! subset with [`Outcome::InsufficientComparisonData`]. Both are distinct from a
//! successful result that happens to contain zero counts.

use serde::Serialize;
use skillscope_survey::Gender;

/// Why a query produced no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum NoDataReason {
    /// No record matched the selected facets
    #[display("no data available for the selected filters")]
    EmptySubset,
    /// Records matched, but the selected field holds no tokens
    #[display("no skills recorded for the selected filters")]
    NoTokens,
    /// The query needs a specific skill and none was given
    #[display("no skill selected")]
    NoSkillSelected,
    /// No region passed the respondent threshold
    #[display("no regions with enough respondents for the selected filters")]
    NoQualifiedRegions,
}

/// Why a gender comparison is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(tag = "reason", content = "gender", rename_all = "snake_case")]
pub enum ComparisonGap {
    /// One gender has no respondents in the subset
    #[display("insufficient data for gender comparison: no {_0} respondents")]
    MissingGender(Gender),
    /// One gender's respondents recorded no tokens in the selected field
    #[display(
        "insufficient data for gender comparison: no skills recorded by {_0} respondents"
    )]
    NoTokens(Gender),
}

/// Result of a query: data, or a typed marker for why there is none.
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::IsVariant)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Outcome<T> {
    Data(T),
    NoData(NoDataReason),
    InsufficientComparisonData(ComparisonGap),
}

impl<T> Outcome<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Data(data) => Some(data),
            Outcome::NoData(_) | Outcome::InsufficientComparisonData(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Data(data) => Some(data),
            Outcome::NoData(_) | Outcome::InsufficientComparisonData(_) => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Data(data) => Outcome::Data(f(data)),
            Outcome::NoData(reason) => Outcome::NoData(reason),
            Outcome::InsufficientComparisonData(gap) => Outcome::InsufficientComparisonData(gap),
        }
    }
}

impl<T> From<NoDataReason> for Outcome<T> {
    fn from(reason: NoDataReason) -> Self {
        Outcome::NoData(reason)
    }
}

impl<T> From<ComparisonGap> for Outcome<T> {
    fn from(gap: ComparisonGap) -> Self {
        Outcome::InsufficientComparisonData(gap)
    }
}
