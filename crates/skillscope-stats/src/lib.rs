//! Frequency statistics for the Skillscope project.
//!
//! This crate provides the counting primitives the survey analysis is built on:
//!
//! - **Frequency tables**: Count occurrences of keys while remembering the order
//!   in which each key was first seen
//! - **Ranking**: Extract the top-N keys by count with deterministic,
//!   first-occurrence tie-breaking
//! - **Shares**: Attach percentages of a denominator to ranked entries
//!
//! # Modules
//!
//! - [`frequency`]: Insertion-ordered frequency tables and ranking
//! - [`share`]: Percentage shares over a denominator
//!
//! # Examples
//!
//! ## Ranking tokens
//!
//! ```
//! use skillscope_stats::frequency;
//!
//! let ranked = frequency::rank(["Sales", "Excel", "Excel", "Sales", "Design"], 2);
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].key, "Sales");
//! assert_eq!(ranked[0].count, 2);
//! assert_eq!(ranked[1].key, "Excel");
//! ```
//!
//! ## Counting per respondent
//!
//! ```
//! use skillscope_stats::{frequency::FrequencyTable, share};
//!
//! // Two respondents; the first mentions "Excel" twice.
//! let table = FrequencyTable::from_groups([vec!["Excel", "Excel"], vec!["Excel", "Word"]]);
//! let shares = share::with_percentage(table.ranked(None), 2);
//!
//! assert_eq!(shares[0].key, "Excel");
//! assert_eq!(shares[0].count, 3);
//! assert_eq!(shares[0].respondents, 2);
//! assert_eq!(shares[0].percentage, 100.0);
//! assert_eq!(shares[1].percentage, 50.0);
//! ```

pub mod frequency;
pub mod share;
