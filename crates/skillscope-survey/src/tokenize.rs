//! Tokenizer for free-text multi-valued fields
//!
//! Survey answers such as `"Excel, Sales;Marketing"` list several skills in one
//! cell. A token is one entry of such a list:
//!
//! - entries are separated by `,` or `;`, each optionally followed by whitespace
//! - surrounding whitespace is trimmed
//! - empty entries (consecutive or trailing delimiters) are dropped
//! - matching is exact and case-sensitive; nothing is folded or deduplicated
//!
//! An absent or empty field yields no tokens.
//!
//! # Examples
//!
//! ```
//! use skillscope_survey::tokenize::tokenize;
//!
//! assert_eq!(tokenize(Some("Excel, Sales;Marketing")), ["Excel", "Sales", "Marketing"]);
//! assert_eq!(tokenize(Some(" a ;; b, ")), ["a", "b"]);
//! assert!(tokenize(None).is_empty());
//! ```

use crate::record::{FieldSelector, Record};

const DELIMITERS: [char; 2] = [',', ';'];

/// Lazily splits a field into tokens.
pub fn tokens(text: Option<&str>) -> impl Iterator<Item = &str> {
    text.into_iter()
        .flat_map(|text| text.split(DELIMITERS))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Splits a field into tokens, left to right.
#[must_use]
pub fn tokenize(text: Option<&str>) -> Vec<&str> {
    tokens(text).collect()
}

/// Tokens of one field of a record.
pub fn record_tokens(record: &Record, field: FieldSelector) -> impl Iterator<Item = &str> {
    tokens(record.field(field))
}

/// Concatenates the tokens of `field` over all records, in order.
///
/// Multiplicity is preserved, both within a record and across records.
#[must_use]
pub fn tokenize_multi<'a, I>(records: I, field: FieldSelector) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .flat_map(|record| record_tokens(record, field))
        .collect()
}

/// Whether `token` is one of the tokens of `text`.
#[must_use]
pub fn contains_token(text: Option<&str>, token: &str) -> bool {
    tokens(text).any(|t| t == token)
}
