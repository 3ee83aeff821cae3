//! Domain code tables.
//!
//! Each table is a finite bijection between the one- or two-character short
//! codes carried in the fixed-width record and the full
//! `(code, system, display)` triples stored on the structured record. Some
//! tables accept extra canonical codes on read only (aliases); those never
//! appear on write.
//!
//! All tables are `const` data; lookups are linear scans over a handful of
//! entries.

use ije_model::CodedValue;

pub const SNOMED_CT: &str = "http://snomed.info/sct";
pub const NULL_FLAVOR: &str = "http://terminology.hl7.org/CodeSystem/v3-NullFlavor";
pub const YES_NO_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/v2-0136";
pub const MARITAL_STATUS_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/v3-MaritalStatus";
pub const EDUCATION_LEVEL_SYSTEM: &str =
    "http://terminology.hl7.org/CodeSystem/v3-EducationLevel";
pub const PREGNANCY_STATUS_SYSTEM: &str = "urn:oid:2.16.840.1.114222.4.5.274";
pub const ADMINISTRATIVE_GENDER_SYSTEM: &str = "http://hl7.org/fhir/administrative-gender";
pub const UCUM_SYSTEM: &str = "http://unitsofmeasure.org";

/// One row of a [`CodeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTableEntry {
    /// Code as written in the fixed-width record.
    pub short: &'static str,
    /// Canonical code stored on the structured record.
    pub code: &'static str,
    pub system: &'static str,
    pub display: &'static str,
}

impl CodeTableEntry {
    pub const fn new(
        short: &'static str,
        code: &'static str,
        system: &'static str,
        display: &'static str,
    ) -> Self {
        Self {
            short,
            code,
            system,
            display,
        }
    }

    /// The full coded value this entry writes.
    pub fn coded_value(&self) -> CodedValue {
        CodedValue::new(self.code, self.system, self.display)
    }
}

/// A curated short-code ↔ canonical-code table for one domain.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [CodeTableEntry],
    /// `(canonical, short)` pairs accepted on read only.
    aliases: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    pub const fn new(
        name: &'static str,
        entries: &'static [CodeTableEntry],
        aliases: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            entries,
            aliases,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [CodeTableEntry] {
        self.entries
    }

    pub fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        self.aliases
    }

    /// Map a stored canonical code to its short code, aliases included.
    pub fn short_for(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.short)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(alias, _)| *alias == code)
                    .map(|(_, short)| *short)
            })
    }

    /// Look up the entry for a short code.
    pub fn entry(&self, short: &str) -> Option<&'static CodeTableEntry> {
        self.entries.iter().find(|entry| entry.short == short)
    }

    /// The coded value written for a short code.
    pub fn coded_for(&self, short: &str) -> Option<CodedValue> {
        self.entry(short).map(CodeTableEntry::coded_value)
    }
}

const fn unknown(short: &'static str) -> CodeTableEntry {
    CodeTableEntry::new(short, "UNK", NULL_FLAVOR, "Unknown")
}

pub static MANNER_OF_DEATH: CodeTable = CodeTable::new(
    "manner of death",
    &[
        CodeTableEntry::new("N", "38605008", SNOMED_CT, "Natural death"),
        CodeTableEntry::new("A", "7878000", SNOMED_CT, "Accidental death"),
        CodeTableEntry::new("S", "44301001", SNOMED_CT, "Suicide"),
        CodeTableEntry::new("H", "27935005", SNOMED_CT, "Homicide"),
        CodeTableEntry::new("P", "185973002", SNOMED_CT, "Patient awaiting investigation"),
        CodeTableEntry::new("C", "65037004", SNOMED_CT, "Death, manner undetermined"),
    ],
    &[],
);

pub static MARITAL_STATUS: CodeTable = CodeTable::new(
    "marital status",
    &[
        CodeTableEntry::new("M", "M", MARITAL_STATUS_SYSTEM, "Married"),
        CodeTableEntry::new("A", "A", MARITAL_STATUS_SYSTEM, "Annulled"),
        CodeTableEntry::new("W", "W", MARITAL_STATUS_SYSTEM, "Widowed"),
        CodeTableEntry::new("D", "D", MARITAL_STATUS_SYSTEM, "Divorced"),
        CodeTableEntry::new("S", "S", MARITAL_STATUS_SYSTEM, "Never Married"),
        unknown("U"),
    ],
    // Interlocutory, legally separated, polygamous, domestic partner, unmarried.
    &[("I", "U"), ("L", "U"), ("P", "U"), ("T", "U"), ("U", "U")],
);

pub static DISPOSITION_METHOD: CodeTable = CodeTable::new(
    "disposition method",
    &[
        CodeTableEntry::new(
            "D",
            "449951000124101",
            SNOMED_CT,
            "Patient status determination, deceased and body donated",
        ),
        CodeTableEntry::new(
            "B",
            "449971000124106",
            SNOMED_CT,
            "Patient status determination, deceased and buried",
        ),
        CodeTableEntry::new(
            "C",
            "449961000124104",
            SNOMED_CT,
            "Patient status determination, deceased and cremated",
        ),
        CodeTableEntry::new(
            "E",
            "449931000124108",
            SNOMED_CT,
            "Patient status determination, deceased and entombed",
        ),
        CodeTableEntry::new(
            "R",
            "449941000124103",
            SNOMED_CT,
            "Patient status determination, deceased and removed from state",
        ),
        unknown("U"),
        CodeTableEntry::new("O", "OTH", NULL_FLAVOR, "Other"),
    ],
    // Hospital disposition.
    &[("455401000124109", "O")],
);

pub static EDUCATION_LEVEL: CodeTable = CodeTable::new(
    "education level",
    &[
        CodeTableEntry::new("1", "ELEM", EDUCATION_LEVEL_SYSTEM, "Elementary School"),
        CodeTableEntry::new(
            "2",
            "SEC",
            EDUCATION_LEVEL_SYSTEM,
            "Some secondary or high school education",
        ),
        CodeTableEntry::new(
            "3",
            "HS",
            EDUCATION_LEVEL_SYSTEM,
            "High School or secondary school degree complete",
        ),
        CodeTableEntry::new("4", "SCOL", EDUCATION_LEVEL_SYSTEM, "Some College education"),
        CodeTableEntry::new(
            "5",
            "ASSOC",
            EDUCATION_LEVEL_SYSTEM,
            "Associate's or technical degree complete",
        ),
        CodeTableEntry::new(
            "6",
            "BD",
            EDUCATION_LEVEL_SYSTEM,
            "College or baccalaureate degree complete",
        ),
        CodeTableEntry::new(
            "7",
            "GD",
            EDUCATION_LEVEL_SYSTEM,
            "Graduate or professional Degree complete",
        ),
        CodeTableEntry::new(
            "8",
            "POSTG",
            EDUCATION_LEVEL_SYSTEM,
            "Doctoral or post graduate education",
        ),
        unknown("9"),
    ],
    &[],
);

/// Yes / No / Unknown (autopsy performed, autopsy findings, injury at work,
/// military service).
pub static YES_NO_UNKNOWN: CodeTable = CodeTable::new(
    "yes/no/unknown",
    &[
        CodeTableEntry::new("Y", "Y", YES_NO_SYSTEM, "Yes"),
        CodeTableEntry::new("N", "N", YES_NO_SYSTEM, "No"),
        unknown("U"),
    ],
    &[],
);

pub static TOBACCO_USE: CodeTable = CodeTable::new(
    "tobacco use",
    &[
        CodeTableEntry::new("Y", "373066001", SNOMED_CT, "Yes"),
        CodeTableEntry::new("N", "373067005", SNOMED_CT, "No"),
        unknown("U"),
    ],
    &[],
);

pub static PREGNANCY_STATUS: CodeTable = CodeTable::new(
    "pregnancy status",
    &[
        CodeTableEntry::new(
            "1",
            "PHC1260",
            PREGNANCY_STATUS_SYSTEM,
            "Not pregnant within past year",
        ),
        CodeTableEntry::new("2", "PHC1261", PREGNANCY_STATUS_SYSTEM, "Pregnant at time of death"),
        CodeTableEntry::new(
            "3",
            "PHC1262",
            PREGNANCY_STATUS_SYSTEM,
            "Not pregnant, but pregnant within 42 days of death",
        ),
        CodeTableEntry::new(
            "4",
            "PHC1263",
            PREGNANCY_STATUS_SYSTEM,
            "Not pregnant, but pregnant 43 days to 1 year before death",
        ),
        CodeTableEntry::new(
            "9",
            "PHC1264",
            PREGNANCY_STATUS_SYSTEM,
            "Unknown if pregnant within the past year",
        ),
        CodeTableEntry::new("8", "NA", NULL_FLAVOR, "Not applicable"),
    ],
    &[],
);

pub static CERTIFIER_ROLE: CodeTable = CodeTable::new(
    "certifier role",
    &[
        CodeTableEntry::new(
            "D",
            "434641000124105",
            SNOMED_CT,
            "Death certification and verification by physician",
        ),
        CodeTableEntry::new(
            "P",
            "434651000124107",
            SNOMED_CT,
            "Physician certified and pronounced death certificate",
        ),
        CodeTableEntry::new("M", "440051000124108", SNOMED_CT, "Medical Examiner"),
    ],
    // Coroner.
    &[("310193003", "M")],
);

pub static TRANSPORTATION_ROLE: CodeTable = CodeTable::new(
    "transportation role",
    &[
        CodeTableEntry::new("DR", "236320001", SNOMED_CT, "Vehicle driver"),
        CodeTableEntry::new("PA", "257500003", SNOMED_CT, "Passenger"),
        CodeTableEntry::new("PE", "257518000", SNOMED_CT, "Pedestrian"),
    ],
    &[],
);

pub static ADMINISTRATIVE_GENDER: CodeTable = CodeTable::new(
    "administrative gender",
    &[
        CodeTableEntry::new("M", "male", ADMINISTRATIVE_GENDER_SYSTEM, "Male"),
        CodeTableEntry::new("F", "female", ADMINISTRATIVE_GENDER_SYSTEM, "Female"),
        CodeTableEntry::new("U", "unknown", ADMINISTRATIVE_GENDER_SYSTEM, "Unknown"),
    ],
    &[],
);

/// Age units; the short code is the IJE age type digit.
pub static AGE_UNIT: CodeTable = CodeTable::new(
    "age unit",
    &[
        CodeTableEntry::new("1", "a", UCUM_SYSTEM, "Years"),
        CodeTableEntry::new("2", "mo", UCUM_SYSTEM, "Months"),
        CodeTableEntry::new("3", "wk", UCUM_SYSTEM, "Weeks"),
        CodeTableEntry::new("4", "d", UCUM_SYSTEM, "Days"),
        CodeTableEntry::new("5", "h", UCUM_SYSTEM, "Hours"),
        CodeTableEntry::new("6", "min", UCUM_SYSTEM, "Minutes"),
        CodeTableEntry::new("9", "unk", NULL_FLAVOR, "Unknown"),
    ],
    &[],
);

/// Every table, for diagnostics and consistency checks.
pub static ALL_TABLES: &[&CodeTable] = &[
    &MANNER_OF_DEATH,
    &MARITAL_STATUS,
    &DISPOSITION_METHOD,
    &EDUCATION_LEVEL,
    &YES_NO_UNKNOWN,
    &TOBACCO_USE,
    &PREGNANCY_STATUS,
    &CERTIFIER_ROLE,
    &TRANSPORTATION_ROLE,
    &ADMINISTRATIVE_GENDER,
    &AGE_UNIT,
];
