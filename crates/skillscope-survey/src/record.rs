//! Trainee records and typed field access
//!
//! A [`Record`] is one survey response. Categorical fields (region, gender,
//! age band) and free-text multi-valued fields (technical skills, soft skills,
//! training needs) are addressed through [`FieldSelector`] instead of column
//! header strings.
//!
//! # Serialization
//!
//! Records deserialize from `snake_case` keys, and every field also accepts the
//! header of the spreadsheet column it was exported from:
//!
//! ```json
//! {
//!   "Name": "A. Trainee",
//!   "Gender": "Female",
//!   "Age Group": "18-25",
//!   "Your Settlement/Location (Zone Wise)": "North",
//!   "Training Needs": "Sales; Marketing",
//!   "Which Skill would you like to learn?": null
//! }
//! ```
//!
//! Missing or `null` fields become `None`. Identity fields are opaque: numeric
//! cells (phone numbers are often exported as numbers) are kept as their
//! decimal text.

use serde::{Deserialize, Deserializer, Serialize};

/// One trainee survey response.
///
/// Records are immutable once loaded into a
/// [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Trainee name
    #[serde(default, alias = "Name", deserialize_with = "opaque")]
    pub name: Option<String>,
    /// Phone number
    #[serde(default, alias = "Phone No.", deserialize_with = "opaque")]
    pub phone: Option<String>,
    /// Email address
    #[serde(default, alias = "Email", deserialize_with = "opaque")]
    pub email: Option<String>,
    /// Gender as recorded (`Male`, `Female`, or anything else)
    #[serde(default, alias = "Gender")]
    pub gender: Option<String>,
    /// Age group label
    #[serde(default, alias = "Age Group")]
    pub age_band: Option<String>,
    /// Settlement / zone
    #[serde(default, alias = "Your Settlement/Location (Zone Wise)")]
    pub region: Option<String>,
    /// Highest education qualification
    #[serde(
        default,
        alias = "Highest Education Qualification",
        deserialize_with = "opaque"
    )]
    pub education: Option<String>,
    /// Current occupation status
    #[serde(default, alias = "Current Status", deserialize_with = "opaque")]
    pub current_status: Option<String>,
    /// Technical skills the trainee wants to learn
    #[serde(default, alias = "Which Skill would you like to learn?")]
    pub technical_skill_text: Option<String>,
    /// Soft skills the trainee wants to learn
    #[serde(default, alias = "Which Soft Skill Would You like to learn?")]
    pub soft_skill_text: Option<String>,
    /// Overall training needs
    #[serde(default, alias = "Training Needs")]
    pub training_needs_text: Option<String>,
}

/// Typed selector for the fields queries operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FieldSelector {
    #[display("technical skills")]
    TechnicalSkill,
    #[display("soft skills")]
    SoftSkill,
    #[display("training needs")]
    TrainingNeeds,
    #[display("region")]
    Region,
    #[display("gender")]
    Gender,
    #[display("age band")]
    AgeBand,
}

impl FieldSelector {
    /// Free-text multi-valued fields.
    pub const TEXT: [Self; 3] = [Self::TechnicalSkill, Self::SoftSkill, Self::TrainingNeeds];
    /// Single-valued categorical fields.
    pub const CATEGORICAL: [Self; 3] = [Self::Region, Self::Gender, Self::AgeBand];

    #[must_use]
    pub fn is_text(self) -> bool {
        Self::TEXT.contains(&self)
    }

    #[must_use]
    pub fn is_categorical(self) -> bool {
        Self::CATEGORICAL.contains(&self)
    }
}

/// The two genders the comparison query contrasts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
    derive_more::IsVariant,
)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// The value stored in [`Record::gender`] for this gender.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl Record {
    /// Reads a field by selector.
    #[must_use]
    pub fn field(&self, field: FieldSelector) -> Option<&str> {
        let value = match field {
            FieldSelector::TechnicalSkill => &self.technical_skill_text,
            FieldSelector::SoftSkill => &self.soft_skill_text,
            FieldSelector::TrainingNeeds => &self.training_needs_text,
            FieldSelector::Region => &self.region,
            FieldSelector::Gender => &self.gender,
            FieldSelector::AgeBand => &self.age_band,
        };
        value.as_deref()
    }

    /// Returns a copy of the record with a field set.
    ///
    /// Intended for building records by hand (fixtures, loaders).
    ///
    /// # Examples
    ///
    /// ```
    /// use skillscope_survey::record::{FieldSelector, Record};
    ///
    /// let record = Record::default()
    ///     .with(FieldSelector::Region, "North")
    ///     .with(FieldSelector::TrainingNeeds, "Excel, Sales");
    /// assert_eq!(record.field(FieldSelector::Region), Some("North"));
    /// assert_eq!(record.field(FieldSelector::Gender), None);
    /// ```
    #[must_use]
    pub fn with(mut self, field: FieldSelector, value: impl Into<String>) -> Self {
        let slot = match field {
            FieldSelector::TechnicalSkill => &mut self.technical_skill_text,
            FieldSelector::SoftSkill => &mut self.soft_skill_text,
            FieldSelector::TrainingNeeds => &mut self.training_needs_text,
            FieldSelector::Region => &mut self.region,
            FieldSelector::Gender => &mut self.gender,
            FieldSelector::AgeBand => &mut self.age_band,
        };
        *slot = Some(value.into());
        self
    }

    /// Whether the record's gender is exactly `gender`.
    #[must_use]
    pub fn has_gender(&self, gender: Gender) -> bool {
        self.gender.as_deref() == Some(gender.as_str())
    }
}

fn opaque<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cell {
        Text(String),
        Integer(i64),
        Float(f64),
        Bool(bool),
    }

    let cell = Option::<Cell>::deserialize(deserializer)?;
    Ok(cell.map(|cell| match cell {
        Cell::Text(text) => text,
        Cell::Integer(n) => n.to_string(),
        Cell::Float(x) => x.to_string(),
        Cell::Bool(b) => b.to_string(),
    }))
}
