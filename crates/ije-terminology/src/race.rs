//! CDC race categories.
//!
//! The fixed-width record has checkboxes for a handful of specific races and
//! literal slots for "other" races within each top-level category. A literal
//! slot lists the record's race entries whose code belongs to the category,
//! minus the codes that already have their own checkbox (the exclusion list
//! declared next to each category).
//!
//! Category membership is decided by code. Entries keep their original
//! display text so a literal written on decode reads back unchanged.

use ije_model::CodedEntry;

/// One top-level CDC race category with its detailed race codes.
#[derive(Debug, Clone, Copy)]
pub struct RaceCategory {
    pub name: &'static str,
    /// `(code, display)` pairs, root concept included.
    members: &'static [(&'static str, &'static str)],
    /// Codes reported through dedicated checkboxes rather than literals.
    excluded: &'static [&'static str],
}

impl RaceCategory {
    pub fn members(&self) -> &'static [(&'static str, &'static str)] {
        self.members
    }

    pub fn excluded(&self) -> &'static [&'static str] {
        self.excluded
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.members.iter().any(|(member, _)| *member == code)
    }

    /// Case-insensitive name → code lookup within the category.
    pub fn code_for_name(&self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.members
            .iter()
            .find(|(_, display)| display.eq_ignore_ascii_case(name))
            .map(|(code, _)| *code)
    }

    /// Displays of the record's entries that belong here and have no checkbox.
    pub fn literals<'a>(&self, race: &'a [CodedEntry]) -> Vec<&'a str> {
        race.iter()
            .filter(|entry| self.contains_code(&entry.code) && !self.excluded.contains(&entry.code.as_str()))
            .map(|entry| entry.display.as_str())
            .collect()
    }
}

pub static AMERICAN_INDIAN_OR_ALASKA_NATIVE: RaceCategory = RaceCategory {
    name: "American Indian or Alaska Native",
    members: &[
        ("1002-5", "American Indian or Alaska Native"),
        ("1004-1", "American Indian"),
        ("1006-6", "Abenaki"),
        ("1008-2", "Algonquian"),
        ("1010-8", "Apache"),
        ("1021-5", "Arapaho"),
        ("1026-4", "Arikara"),
        ("1028-0", "Assiniboine"),
        ("1035-5", "Bannock"),
        ("1037-1", "Blackfeet"),
        ("1044-7", "Caddo"),
        ("1088-4", "Cherokee"),
        ("1505-7", "Navajo"),
        ("1735-0", "Alaska Native"),
        ("1840-8", "Eskimo"),
        ("1966-1", "Aleut"),
    ],
    excluded: &["1002-5"],
};

pub static ASIAN: RaceCategory = RaceCategory {
    name: "Asian",
    members: &[
        ("2028-9", "Asian"),
        ("2029-7", "Asian Indian"),
        ("2030-5", "Bangladeshi"),
        ("2031-3", "Bhutanese"),
        ("2032-1", "Burmese"),
        ("2033-9", "Cambodian"),
        ("2034-7", "Chinese"),
        ("2035-4", "Taiwanese"),
        ("2036-2", "Filipino"),
        ("2037-0", "Hmong"),
        ("2038-8", "Indonesian"),
        ("2039-6", "Japanese"),
        ("2040-4", "Korean"),
        ("2041-2", "Laotian"),
        ("2042-0", "Malaysian"),
        ("2043-8", "Okinawan"),
        ("2044-6", "Pakistani"),
        ("2045-3", "Sri Lankan"),
        ("2046-1", "Thai"),
        ("2047-9", "Vietnamese"),
        ("2048-7", "Iwo Jiman"),
        ("2049-5", "Maldivian"),
        ("2050-3", "Nepalese"),
        ("2051-1", "Singaporean"),
        ("2052-9", "Madagascar"),
    ],
    excluded: &[
        "2028-9", "2039-6", "2040-4", "2047-9", "2036-2", "2034-7", "2029-7",
    ],
};

pub static BLACK_OR_AFRICAN_AMERICAN: RaceCategory = RaceCategory {
    name: "Black or African American",
    members: &[
        ("2054-5", "Black or African American"),
        ("2056-0", "Black"),
        ("2058-6", "African American"),
        ("2060-2", "African"),
        ("2061-0", "Botswanan"),
        ("2062-8", "Ethiopian"),
        ("2063-6", "Liberian"),
        ("2064-4", "Namibian"),
        ("2065-1", "Nigerian"),
        ("2066-9", "Zairean"),
        ("2067-7", "Bahamian"),
        ("2068-5", "Barbadian"),
        ("2069-3", "Dominican"),
        ("2070-1", "Dominica Islander"),
        ("2071-9", "Haitian"),
        ("2072-7", "Jamaican"),
        ("2073-5", "Tobagoan"),
        ("2074-3", "Trinidadian"),
        ("2075-0", "West Indian"),
    ],
    excluded: &["2054-5"],
};

pub static NATIVE_HAWAIIAN_OR_OTHER_PACIFIC_ISLANDER: RaceCategory = RaceCategory {
    name: "Native Hawaiian or Other Pacific Islander",
    members: &[
        ("2076-8", "Native Hawaiian or Other Pacific Islander"),
        ("2078-4", "Polynesian"),
        ("2079-2", "Native Hawaiian"),
        ("2080-0", "Samoan"),
        ("2081-8", "Tahitian"),
        ("2082-6", "Tongan"),
        ("2083-4", "Tokelauan"),
        ("2085-9", "Micronesian"),
        ("2086-7", "Guamanian or Chamorro"),
        ("2087-5", "Guamanian"),
        ("2088-3", "Chamorro"),
        ("2089-1", "Mariana Islander"),
        ("2090-9", "Marshallese"),
        ("2091-7", "Palauan"),
        ("2092-5", "Carolinian"),
        ("2093-3", "Kosraean"),
        ("2094-1", "Pohnpeian"),
        ("2095-8", "Saipanese"),
        ("2096-6", "Kiribati"),
        ("2097-4", "Chuukese"),
        ("2098-2", "Yapese"),
        ("2100-6", "Melanesian"),
        ("2101-4", "Fijian"),
        ("2102-2", "Papua New Guinean"),
        ("2103-0", "Solomon Islander"),
        ("2104-8", "New Hebrides"),
        ("2500-7", "Other Pacific Islander"),
    ],
    excluded: &["2076-8", "2086-7", "2080-0", "2079-2"],
};

pub static WHITE: RaceCategory = RaceCategory {
    name: "White",
    members: &[
        ("2106-3", "White"),
        ("2108-9", "European"),
        ("2109-7", "Armenian"),
        ("2110-5", "English"),
        ("2111-3", "French"),
        ("2112-1", "German"),
        ("2113-9", "Irish"),
        ("2114-7", "Italian"),
        ("2115-4", "Polish"),
        ("2116-2", "Scottish"),
        ("2118-8", "Middle Eastern or North African"),
        ("2119-6", "Assyrian"),
        ("2120-4", "Egyptian"),
        ("2121-2", "Iranian"),
        ("2122-0", "Iraqi"),
        ("2123-8", "Lebanese"),
        ("2124-6", "Palestinian"),
        ("2125-3", "Syrian"),
        ("2126-1", "Afghanistani"),
        ("2127-9", "Israeili"),
        ("2129-5", "Arab"),
        ("2131-1", "Other Race"),
    ],
    excluded: &["2106-3"],
};

/// Literals reported in the "other race" slots: white then black literals.
pub fn other_literals(race: &[CodedEntry]) -> Vec<&str> {
    let mut literals = WHITE.literals(race);
    literals.extend(BLACK_OR_AFRICAN_AMERICAN.literals(race));
    literals
}

/// Code for an "other race" literal: white first, then black.
pub fn other_code_for_name(name: &str) -> Option<&'static str> {
    WHITE
        .code_for_name(name)
        .or_else(|| BLACK_OR_AFRICAN_AMERICAN.code_for_name(name))
}

/// True if any entry matches either the display or the code.
pub fn has_race(race: &[CodedEntry], display: &str, code: &str) -> bool {
    race.iter().any(|entry| entry.matches(display, code))
}

/// Append an entry unless an identical one is already present.
pub fn add_race(race: &mut Vec<CodedEntry>, entry: CodedEntry) {
    if !race.contains(&entry) {
        race.push(entry);
    }
}
