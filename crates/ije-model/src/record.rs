//! The structured death record.
//!
//! [`DeathRecord`] is a plain property bag. It holds no validation logic; the
//! transcoder reads and writes it through the typed accessors in
//! [`crate::property`].
//!
//! Timestamps are kept as ISO 8601 strings exactly as they were written
//! (date-only, local or offset-aware), because the IJE format carries partial
//! dates and the record must preserve whatever precision it was given.

use serde::{Deserialize, Serialize};

use crate::address::AddressMap;
use crate::coded::{CodedEntry, CodedValue};

/// Number of lines in Part I of the cause-of-death section (lines a-d).
pub const CAUSE_OF_DEATH_LINES: usize = 4;

/// Decedent age with its unit of measure (`a`, `mo`, `wk`, `d`, `h`, `min`, `unk`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeAtDeath {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// One line of Part I of the cause-of-death section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CauseOfDeath {
    /// Literal cause text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    /// Interval between onset and death.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

impl CauseOfDeath {
    pub fn is_empty(&self) -> bool {
        self.cause.is_none() && self.interval.is_none()
    }
}

fn causes_are_empty(causes: &[CauseOfDeath; CAUSE_OF_DEATH_LINES]) -> bool {
    causes.iter().all(CauseOfDeath::is_empty)
}

/// A death record as exchanged between vital-records jurisdictions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeathRecord {
    // Identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_local_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_record_id: Option<String>,

    // Decedent
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub given_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_maiden_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<CodedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_at_death: Option<AgeAtDeath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "AddressMap::is_empty")]
    pub place_of_birth: AddressMap,
    #[serde(skip_serializing_if = "AddressMap::is_empty")]
    pub residence: AddressMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence_within_city_limits: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<CodedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<CodedValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ethnicity: Vec<CodedEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub race: Vec<CodedEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usual_occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usual_industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub military_service: Option<CodedValue>,

    // Death event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death_pronouncement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_location_name: Option<String>,
    #[serde(skip_serializing_if = "AddressMap::is_empty")]
    pub death_location_address: AddressMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manner_of_death: Option<CodedValue>,

    // Disposition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition_method: Option<CodedValue>,
    #[serde(skip_serializing_if = "AddressMap::is_empty")]
    pub disposition_location_address: AddressMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funeral_home_name: Option<String>,
    #[serde(skip_serializing_if = "AddressMap::is_empty")]
    pub funeral_home_address: AddressMap,

    // Injury
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_description: Option<String>,
    #[serde(skip_serializing_if = "AddressMap::is_empty")]
    pub injury_location_address: AddressMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_at_work: Option<CodedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportation_role: Option<CodedValue>,

    // Medical certification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autopsy_performed: Option<CodedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autopsy_results_available: Option<CodedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tobacco_use: Option<CodedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancy_status: Option<CodedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examiner_contacted: Option<bool>,
    #[serde(skip_serializing_if = "causes_are_empty")]
    pub causes_of_death: [CauseOfDeath; CAUSE_OF_DEATH_LINES],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributing_conditions: Option<String>,

    // Certifier
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifier_given_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifier_family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifier_suffix: Option<String>,
    #[serde(skip_serializing_if = "AddressMap::is_empty")]
    pub certifier_address: AddressMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_role: Option<CodedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certified_time: Option<String>,

    // Registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_time: Option<String>,
}

impl DeathRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Given names joined with single spaces.
    pub fn given_name(&self) -> String {
        self.given_names.join(" ")
    }

    /// Certifier given names joined with single spaces.
    pub fn certifier_given_name(&self) -> String {
        self.certifier_given_names.join(" ")
    }

    /// Non-empty cause-of-death lines as `(cause, interval)` pairs, in line order.
    pub fn causes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.causes_of_death
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| {
                (
                    line.cause.as_deref().unwrap_or_default(),
                    line.interval.as_deref().unwrap_or_default(),
                )
            })
    }
}
