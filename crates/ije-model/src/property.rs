//! Typed property handles for [`DeathRecord`].
//!
//! The transcoder's field table refers to record properties through these
//! enums instead of by name, so every field/property binding is checked at
//! compile time. Each handle knows its JSON property name (`as_str`) and how to
//! borrow the underlying slot.

use std::fmt;

use crate::address::AddressMap;
use crate::coded::CodedValue;
use crate::record::DeathRecord;

/// Plain string properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextProperty {
    Identifier,
    StateLocalIdentifier,
    BirthRecordId,
    FamilyName,
    Suffix,
    FatherFamilyName,
    MotherMaidenName,
    MaidenName,
    BirthSex,
    Ssn,
    UsualOccupation,
    UsualIndustry,
    DeathLocationName,
    FuneralHomeName,
    InjuryPlace,
    InjuryLocationName,
    InjuryDescription,
    ContributingConditions,
    CertifierFamilyName,
    CertifierSuffix,
}

impl TextProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::StateLocalIdentifier => "stateLocalIdentifier",
            Self::BirthRecordId => "birthRecordId",
            Self::FamilyName => "familyName",
            Self::Suffix => "suffix",
            Self::FatherFamilyName => "fatherFamilyName",
            Self::MotherMaidenName => "motherMaidenName",
            Self::MaidenName => "maidenName",
            Self::BirthSex => "birthSex",
            Self::Ssn => "ssn",
            Self::UsualOccupation => "usualOccupation",
            Self::UsualIndustry => "usualIndustry",
            Self::DeathLocationName => "deathLocationName",
            Self::FuneralHomeName => "funeralHomeName",
            Self::InjuryPlace => "injuryPlace",
            Self::InjuryLocationName => "injuryLocationName",
            Self::InjuryDescription => "injuryDescription",
            Self::ContributingConditions => "contributingConditions",
            Self::CertifierFamilyName => "certifierFamilyName",
            Self::CertifierSuffix => "certifierSuffix",
        }
    }
}

/// Timestamp properties stored as ISO 8601 strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateProperty {
    DateOfBirth,
    DateOfDeath,
    DateOfDeathPronouncement,
    InjuryDate,
    CertifiedTime,
    RegisteredTime,
}

impl DateProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateOfBirth => "dateOfBirth",
            Self::DateOfDeath => "dateOfDeath",
            Self::DateOfDeathPronouncement => "dateOfDeathPronouncement",
            Self::InjuryDate => "injuryDate",
            Self::CertifiedTime => "certifiedTime",
            Self::RegisteredTime => "registeredTime",
        }
    }
}

/// Properties holding a single [`CodedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodedProperty {
    Gender,
    MaritalStatus,
    EducationLevel,
    MilitaryService,
    MannerOfDeath,
    DispositionMethod,
    InjuryAtWork,
    TransportationRole,
    AutopsyPerformed,
    AutopsyResultsAvailable,
    TobaccoUse,
    PregnancyStatus,
    CertificationRole,
}

impl CodedProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::MaritalStatus => "maritalStatus",
            Self::EducationLevel => "educationLevel",
            Self::MilitaryService => "militaryService",
            Self::MannerOfDeath => "mannerOfDeath",
            Self::DispositionMethod => "dispositionMethod",
            Self::InjuryAtWork => "injuryAtWork",
            Self::TransportationRole => "transportationRole",
            Self::AutopsyPerformed => "autopsyPerformed",
            Self::AutopsyResultsAvailable => "autopsyResultsAvailable",
            Self::TobaccoUse => "tobaccoUse",
            Self::PregnancyStatus => "pregnancyStatus",
            Self::CertificationRole => "certificationRole",
        }
    }
}

/// Address map properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressProperty {
    PlaceOfBirth,
    Residence,
    DeathLocation,
    DispositionLocation,
    FuneralHome,
    InjuryLocation,
    Certifier,
}

impl AddressProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlaceOfBirth => "placeOfBirth",
            Self::Residence => "residence",
            Self::DeathLocation => "deathLocationAddress",
            Self::DispositionLocation => "dispositionLocationAddress",
            Self::FuneralHome => "funeralHomeAddress",
            Self::InjuryLocation => "injuryLocationAddress",
            Self::Certifier => "certifierAddress",
        }
    }
}

/// Nullable boolean properties (true / false / not recorded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagProperty {
    ResidenceWithinCityLimits,
    ExaminerContacted,
}

impl FlagProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ResidenceWithinCityLimits => "residenceWithinCityLimits",
            Self::ExaminerContacted => "examinerContacted",
        }
    }
}

/// Ordered name-part properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameProperty {
    GivenNames,
    CertifierGivenNames,
}

impl NameProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GivenNames => "givenNames",
            Self::CertifierGivenNames => "certifierGivenNames",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(
    TextProperty,
    DateProperty,
    CodedProperty,
    AddressProperty,
    FlagProperty,
    NameProperty,
);

impl DeathRecord {
    pub fn text(&self, property: TextProperty) -> Option<&str> {
        self.text_slot(property).as_deref()
    }

    fn text_slot(&self, property: TextProperty) -> &Option<String> {
        match property {
            TextProperty::Identifier => &self.identifier,
            TextProperty::StateLocalIdentifier => &self.state_local_identifier,
            TextProperty::BirthRecordId => &self.birth_record_id,
            TextProperty::FamilyName => &self.family_name,
            TextProperty::Suffix => &self.suffix,
            TextProperty::FatherFamilyName => &self.father_family_name,
            TextProperty::MotherMaidenName => &self.mother_maiden_name,
            TextProperty::MaidenName => &self.maiden_name,
            TextProperty::BirthSex => &self.birth_sex,
            TextProperty::Ssn => &self.ssn,
            TextProperty::UsualOccupation => &self.usual_occupation,
            TextProperty::UsualIndustry => &self.usual_industry,
            TextProperty::DeathLocationName => &self.death_location_name,
            TextProperty::FuneralHomeName => &self.funeral_home_name,
            TextProperty::InjuryPlace => &self.injury_place,
            TextProperty::InjuryLocationName => &self.injury_location_name,
            TextProperty::InjuryDescription => &self.injury_description,
            TextProperty::ContributingConditions => &self.contributing_conditions,
            TextProperty::CertifierFamilyName => &self.certifier_family_name,
            TextProperty::CertifierSuffix => &self.certifier_suffix,
        }
    }

    pub fn text_mut(&mut self, property: TextProperty) -> &mut Option<String> {
        match property {
            TextProperty::Identifier => &mut self.identifier,
            TextProperty::StateLocalIdentifier => &mut self.state_local_identifier,
            TextProperty::BirthRecordId => &mut self.birth_record_id,
            TextProperty::FamilyName => &mut self.family_name,
            TextProperty::Suffix => &mut self.suffix,
            TextProperty::FatherFamilyName => &mut self.father_family_name,
            TextProperty::MotherMaidenName => &mut self.mother_maiden_name,
            TextProperty::MaidenName => &mut self.maiden_name,
            TextProperty::BirthSex => &mut self.birth_sex,
            TextProperty::Ssn => &mut self.ssn,
            TextProperty::UsualOccupation => &mut self.usual_occupation,
            TextProperty::UsualIndustry => &mut self.usual_industry,
            TextProperty::DeathLocationName => &mut self.death_location_name,
            TextProperty::FuneralHomeName => &mut self.funeral_home_name,
            TextProperty::InjuryPlace => &mut self.injury_place,
            TextProperty::InjuryLocationName => &mut self.injury_location_name,
            TextProperty::InjuryDescription => &mut self.injury_description,
            TextProperty::ContributingConditions => &mut self.contributing_conditions,
            TextProperty::CertifierFamilyName => &mut self.certifier_family_name,
            TextProperty::CertifierSuffix => &mut self.certifier_suffix,
        }
    }

    pub fn date(&self, property: DateProperty) -> Option<&str> {
        match property {
            DateProperty::DateOfBirth => self.date_of_birth.as_deref(),
            DateProperty::DateOfDeath => self.date_of_death.as_deref(),
            DateProperty::DateOfDeathPronouncement => self.date_of_death_pronouncement.as_deref(),
            DateProperty::InjuryDate => self.injury_date.as_deref(),
            DateProperty::CertifiedTime => self.certified_time.as_deref(),
            DateProperty::RegisteredTime => self.registered_time.as_deref(),
        }
    }

    pub fn date_mut(&mut self, property: DateProperty) -> &mut Option<String> {
        match property {
            DateProperty::DateOfBirth => &mut self.date_of_birth,
            DateProperty::DateOfDeath => &mut self.date_of_death,
            DateProperty::DateOfDeathPronouncement => &mut self.date_of_death_pronouncement,
            DateProperty::InjuryDate => &mut self.injury_date,
            DateProperty::CertifiedTime => &mut self.certified_time,
            DateProperty::RegisteredTime => &mut self.registered_time,
        }
    }

    pub fn coded(&self, property: CodedProperty) -> Option<&CodedValue> {
        match property {
            CodedProperty::Gender => self.gender.as_ref(),
            CodedProperty::MaritalStatus => self.marital_status.as_ref(),
            CodedProperty::EducationLevel => self.education_level.as_ref(),
            CodedProperty::MilitaryService => self.military_service.as_ref(),
            CodedProperty::MannerOfDeath => self.manner_of_death.as_ref(),
            CodedProperty::DispositionMethod => self.disposition_method.as_ref(),
            CodedProperty::InjuryAtWork => self.injury_at_work.as_ref(),
            CodedProperty::TransportationRole => self.transportation_role.as_ref(),
            CodedProperty::AutopsyPerformed => self.autopsy_performed.as_ref(),
            CodedProperty::AutopsyResultsAvailable => self.autopsy_results_available.as_ref(),
            CodedProperty::TobaccoUse => self.tobacco_use.as_ref(),
            CodedProperty::PregnancyStatus => self.pregnancy_status.as_ref(),
            CodedProperty::CertificationRole => self.certification_role.as_ref(),
        }
    }

    pub fn coded_mut(&mut self, property: CodedProperty) -> &mut Option<CodedValue> {
        match property {
            CodedProperty::Gender => &mut self.gender,
            CodedProperty::MaritalStatus => &mut self.marital_status,
            CodedProperty::EducationLevel => &mut self.education_level,
            CodedProperty::MilitaryService => &mut self.military_service,
            CodedProperty::MannerOfDeath => &mut self.manner_of_death,
            CodedProperty::DispositionMethod => &mut self.disposition_method,
            CodedProperty::InjuryAtWork => &mut self.injury_at_work,
            CodedProperty::TransportationRole => &mut self.transportation_role,
            CodedProperty::AutopsyPerformed => &mut self.autopsy_performed,
            CodedProperty::AutopsyResultsAvailable => &mut self.autopsy_results_available,
            CodedProperty::TobaccoUse => &mut self.tobacco_use,
            CodedProperty::PregnancyStatus => &mut self.pregnancy_status,
            CodedProperty::CertificationRole => &mut self.certification_role,
        }
    }

    pub fn address(&self, property: AddressProperty) -> &AddressMap {
        match property {
            AddressProperty::PlaceOfBirth => &self.place_of_birth,
            AddressProperty::Residence => &self.residence,
            AddressProperty::DeathLocation => &self.death_location_address,
            AddressProperty::DispositionLocation => &self.disposition_location_address,
            AddressProperty::FuneralHome => &self.funeral_home_address,
            AddressProperty::InjuryLocation => &self.injury_location_address,
            AddressProperty::Certifier => &self.certifier_address,
        }
    }

    pub fn address_mut(&mut self, property: AddressProperty) -> &mut AddressMap {
        match property {
            AddressProperty::PlaceOfBirth => &mut self.place_of_birth,
            AddressProperty::Residence => &mut self.residence,
            AddressProperty::DeathLocation => &mut self.death_location_address,
            AddressProperty::DispositionLocation => &mut self.disposition_location_address,
            AddressProperty::FuneralHome => &mut self.funeral_home_address,
            AddressProperty::InjuryLocation => &mut self.injury_location_address,
            AddressProperty::Certifier => &mut self.certifier_address,
        }
    }

    pub fn flag(&self, property: FlagProperty) -> Option<bool> {
        match property {
            FlagProperty::ResidenceWithinCityLimits => self.residence_within_city_limits,
            FlagProperty::ExaminerContacted => self.examiner_contacted,
        }
    }

    pub fn flag_mut(&mut self, property: FlagProperty) -> &mut Option<bool> {
        match property {
            FlagProperty::ResidenceWithinCityLimits => &mut self.residence_within_city_limits,
            FlagProperty::ExaminerContacted => &mut self.examiner_contacted,
        }
    }

    pub fn names(&self, property: NameProperty) -> &[String] {
        match property {
            NameProperty::GivenNames => &self.given_names,
            NameProperty::CertifierGivenNames => &self.certifier_given_names,
        }
    }

    pub fn names_mut(&mut self, property: NameProperty) -> &mut Vec<String> {
        match property {
            NameProperty::GivenNames => &mut self.given_names,
            NameProperty::CertifierGivenNames => &mut self.certifier_given_names,
        }
    }
}
