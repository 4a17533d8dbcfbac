//! Percentage shares over a denominator
//!
//! A [`Share`] is a [`Ranked`] entry with its percentage of a denominator
//! attached. The percentage is computed from the respondent count, so when the
//! counts and the denominator are drawn from the same set of respondents the
//! percentage never exceeds 100.

use serde::{Deserialize, Serialize};

use crate::frequency::Ranked;

/// A ranked key with its percentage of a denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share<K> {
    /// The ranked key
    pub key: K,
    /// Number of occurrences, multiplicity included
    pub count: usize,
    /// Number of respondents mentioning the key
    pub respondents: usize,
    /// `100 * respondents / denominator`
    pub percentage: f64,
    /// The group size the percentage is relative to
    pub denominator: usize,
}

/// A percentage was requested against an empty group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("percentage denominator must be positive")]
pub struct ZeroDenominatorError;

/// Computes `100 * part / whole`.
///
/// # Panics
///
/// Panics if `whole` is zero.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn percentage(part: usize, whole: usize) -> f64 {
    assert!(whole > 0, "percentage denominator must be positive");
    100.0 * part as f64 / whole as f64
}

/// Attaches percentages of `denominator` to ranked entries.
///
/// Callers are expected to check for an empty subset before calling; a zero
/// denominator is a caller bug.
///
/// # Panics
///
/// Panics if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use skillscope_stats::{frequency, share};
///
/// let shares = share::with_percentage(frequency::rank(["a", "a", "b"], 10), 4);
/// assert_eq!(shares[0].percentage, 50.0);
/// assert_eq!(shares[1].percentage, 25.0);
/// assert!(shares.iter().all(|s| s.denominator == 4));
/// ```
#[must_use]
pub fn with_percentage<K>(ranked: Vec<Ranked<K>>, denominator: usize) -> Vec<Share<K>> {
    assert!(
        denominator > 0,
        "percentage denominator must be positive (check for an empty subset first)"
    );
    ranked
        .into_iter()
        .map(|entry| Share {
            percentage: percentage(entry.respondents, denominator),
            key: entry.key,
            count: entry.count,
            respondents: entry.respondents,
            denominator,
        })
        .collect()
}

/// Non-panicking variant of [`with_percentage`].
pub fn try_with_percentage<K>(
    ranked: Vec<Ranked<K>>,
    denominator: usize,
) -> Result<Vec<Share<K>>, ZeroDenominatorError> {
    if denominator == 0 {
        return Err(ZeroDenominatorError);
    }
    Ok(with_percentage(ranked, denominator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{self, FrequencyTable};

    #[test]
    fn test_percentage_basic() {
        assert!((percentage(1, 2) - 50.0).abs() < f64::EPSILON);
        assert!((percentage(0, 7)).abs() < f64::EPSILON);
        assert!((percentage(3, 3) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "denominator must be positive")]
    fn test_percentage_zero_denominator_panics() {
        let _ = percentage(1, 0);
    }

    #[test]
    #[should_panic(expected = "denominator must be positive")]
    fn test_with_percentage_zero_denominator_panics() {
        let _ = with_percentage(frequency::rank(["a"], 1), 0);
    }

    #[test]
    fn test_try_with_percentage_zero_denominator() {
        assert_eq!(
            try_with_percentage(frequency::rank(["a"], 1), 0),
            Err(ZeroDenominatorError)
        );
        assert!(try_with_percentage(Vec::<Ranked<&str>>::new(), 0).is_err());
    }

    #[test]
    fn test_with_percentage_keeps_rank_order() {
        let shares = with_percentage(frequency::rank(["b", "a", "a"], 10), 3);
        assert_eq!(shares[0].key, "a");
        assert_eq!(shares[1].key, "b");
    }

    #[test]
    fn test_percentage_bounded_by_respondents() {
        // one respondent repeats a token; the share stays at 100%
        let table = FrequencyTable::from_groups([["Excel", "Excel"]]);
        let shares = with_percentage(table.ranked(Some(10)), table.groups());
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].count, 2);
        assert!((shares[0].percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_within_bounds() {
        let groups = [
            vec!["a", "b", "a"],
            vec!["b"],
            vec!["c", "c", "c", "a"],
            vec![],
        ];
        let table = FrequencyTable::from_groups(groups.clone());
        let shares = with_percentage(table.ranked(None), groups.len());
        for share in &shares {
            assert!(share.percentage >= 0.0);
            assert!(share.percentage <= 100.0);
        }
    }

    #[test]
    fn test_share_serializes_as_plain_data() {
        let shares = with_percentage(frequency::rank(["x".to_owned()], 1), 2);
        let json = serde_json::to_value(&shares).unwrap();
        assert_eq!(json[0]["key"], "x");
        assert_eq!(json[0]["count"], 1);
        assert_eq!(json[0]["denominator"], 2);
        assert_eq!(json[0]["percentage"], 50.0);
    }
}
