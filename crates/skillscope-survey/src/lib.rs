//! Survey data model for Skillscope
//!
//! This crate holds the trainee survey records and the read-only operations
//! every analysis builds on:
//!
//! - [`record`]: The [`Record`](record::Record) type, typed field access via
//!   [`FieldSelector`](record::FieldSelector), and [`Gender`](record::Gender)
//! - [`tokenize`]: Splitting multi-valued free-text answers into skill tokens
//! - [`store`]: The immutable [`RecordStore`](store::RecordStore) loaded once per
//!   process
//!
//! # Data Structure
//!
//! ```text
//! RecordStore
//! └─ records: Vec<Record>            (load order)
//!     ├─ identity (name, phone, email, education, current_status)
//!     ├─ categorical (region, gender, age_band)
//!     └─ multi-valued text (technical_skill_text, soft_skill_text, training_needs_text)
//!             └─ tokenize → ["Excel", "Sales", ...]
//! ```
//!
//! # Examples
//!
//! ```
//! use skillscope_survey::{
//!     record::{FieldSelector, Record},
//!     store::RecordStore,
//!     tokenize,
//! };
//!
//! let store = RecordStore::new(vec![
//!     Record::default().with(FieldSelector::TrainingNeeds, "Excel, Sales"),
//!     Record::default().with(FieldSelector::TrainingNeeds, "Sales"),
//! ]);
//!
//! let tokens = tokenize::tokenize_multi(store.all_records(), FieldSelector::TrainingNeeds);
//! assert_eq!(tokens, ["Excel", "Sales", "Sales"]);
//! ```

pub use self::{
    record::{FieldSelector, Gender, Record},
    store::RecordStore,
};

pub mod record;
pub mod store;
pub mod tokenize;
