//! Tunable limits of the analytical queries

use serde::{Deserialize, Serialize};

/// Limits and thresholds used by [`SurveyQuery`](crate::query::SurveyQuery).
///
/// Missing keys fall back to the defaults when deserializing:
///
/// ```
/// use skillscope_analysis::config::AnalysisConfig;
///
/// let config: AnalysisConfig = serde_json::from_str(r#"{ "top_needs_limit": 3 }"#).unwrap();
/// assert_eq!(config.top_needs_limit, 3);
/// assert_eq!(config.comparison_limit, AnalysisConfig::default().comparison_limit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Entries in the overall top-N needs ranking
    pub top_needs_limit: usize,
    /// Entries per region in the regional top-N report
    pub regional_top_limit: usize,
    /// Regions with at most this many respondents are left out of the
    /// all-regions top-N report
    pub min_region_respondents: usize,
    /// Tokens compared in the gender comparison
    pub comparison_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_needs_limit: 10,
            regional_top_limit: 5,
            min_region_respondents: 3,
            comparison_limit: 7,
        }
    }
}
