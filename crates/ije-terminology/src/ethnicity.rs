//! Hispanic origin.
//!
//! The record stores ethnicity as an ordered `(display, code)` list. The
//! fixed-width layout reports it as three specific checkboxes (Mexican,
//! Puerto Rican, Cuban), an "other" checkbox and one "other" literal.

use ije_model::CodedEntry;

/// A fixed ethnicity concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ethnicity {
    pub display: &'static str,
    pub code: &'static str,
}

impl Ethnicity {
    pub const fn new(display: &'static str, code: &'static str) -> Self {
        Self { display, code }
    }

    pub fn entry(self) -> CodedEntry {
        CodedEntry::new(self.display, self.code)
    }

    pub fn matches(self, entry: &CodedEntry) -> bool {
        entry.matches(self.display, self.code)
    }

    fn matches_ignore_case(self, entry: &CodedEntry) -> bool {
        entry.display.eq_ignore_ascii_case(self.display) || entry.code.eq_ignore_ascii_case(self.code)
    }
}

pub const HISPANIC: Ethnicity = Ethnicity::new("Hispanic or Latino", "2135-2");
pub const NON_HISPANIC: Ethnicity = Ethnicity::new("Non Hispanic or Latino", "2186-5");
pub const MEXICAN: Ethnicity = Ethnicity::new("Mexican", "2148-5");
pub const PUERTO_RICAN: Ethnicity = Ethnicity::new("Puerto Rican", "2180-8");
pub const CUBAN: Ethnicity = Ethnicity::new("Cuban", "2182-4");

/// Origins with a dedicated checkbox.
pub const LISTED_ORIGINS: [Ethnicity; 3] = [MEXICAN, PUERTO_RICAN, CUBAN];

const KNOWN: [Ethnicity; 5] = [NON_HISPANIC, HISPANIC, MEXICAN, PUERTO_RICAN, CUBAN];

/// Detailed Hispanic origin names accepted for the "other" literal.
static DETAILED: &[(&str, &str)] = &[
    ("Spaniard", "2137-8"),
    ("Andalusian", "2138-6"),
    ("Asturian", "2139-4"),
    ("Castillian", "2140-2"),
    ("Catalonian", "2141-0"),
    ("Belearic Islander", "2142-8"),
    ("Gallego", "2143-6"),
    ("Valencian", "2144-4"),
    ("Canarian", "2145-1"),
    ("Spanish Basque", "2146-9"),
    ("Mexican", "2148-5"),
    ("Mexican American", "2149-3"),
    ("Mexicano", "2150-1"),
    ("Chicano", "2151-9"),
    ("La Raza", "2152-7"),
    ("Mexican American Indian", "2153-5"),
    ("Central American", "2155-0"),
    ("Costa Rican", "2156-8"),
    ("Guatemalan", "2157-6"),
    ("Honduran", "2158-4"),
    ("Nicaraguan", "2159-2"),
    ("Panamanian", "2160-0"),
    ("Salvadoran", "2161-8"),
    ("Central American Indian", "2162-6"),
    ("Canal Zone", "2163-4"),
    ("South American", "2165-9"),
    ("Argentinean", "2166-7"),
    ("Bolivian", "2167-5"),
    ("Chilean", "2168-3"),
    ("Colombian", "2169-1"),
    ("Ecuadorian", "2170-9"),
    ("Paraguayan", "2171-7"),
    ("Peruvian", "2172-5"),
    ("Uruguayan", "2173-3"),
    ("Venezuelan", "2174-1"),
    ("South American Indian", "2175-8"),
    ("Criollo", "2176-6"),
    ("Latin American", "2178-2"),
    ("Puerto Rican", "2180-8"),
    ("Cuban", "2182-4"),
    ("Dominican", "2184-0"),
];

/// Case-insensitive name → code lookup for detailed Hispanic origins.
pub fn code_for_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    DETAILED
        .iter()
        .find(|(display, _)| display.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}

/// True when the record declares Hispanic or Latino origin.
pub fn is_hispanic(ethnicity: &[CodedEntry]) -> bool {
    ethnicity.iter().any(|entry| HISPANIC.matches(entry))
}

/// True when the record is Hispanic and lists `origin`.
pub fn has_origin(ethnicity: &[CodedEntry], origin: Ethnicity) -> bool {
    is_hispanic(ethnicity)
        && ethnicity
            .iter()
            .any(|entry| entry.display == origin.display || entry.code == origin.code)
}

/// Entries that are none of the fixed concepts (the "other" origins).
pub fn other_origins(ethnicity: &[CodedEntry]) -> impl Iterator<Item = &CodedEntry> {
    ethnicity
        .iter()
        .filter(|entry| !KNOWN.iter().any(|known| known.matches_ignore_case(entry)))
}

/// Record Hispanic origin, optionally with a specific origin entry.
///
/// Adds "Hispanic or Latino" and removes any "Non Hispanic or Latino" entry.
pub fn mark_hispanic(ethnicity: &mut Vec<CodedEntry>, origin: Option<CodedEntry>) {
    if let Some(origin) = origin {
        push_unique(ethnicity, origin);
    }
    push_unique(ethnicity, HISPANIC.entry());
    ethnicity.retain(|entry| !NON_HISPANIC.matches(entry));
}

/// Record "Non Hispanic or Latino" when nothing else is known yet.
pub fn mark_not_hispanic(ethnicity: &mut Vec<CodedEntry>) {
    if ethnicity.is_empty() {
        ethnicity.push(NON_HISPANIC.entry());
    }
}

fn push_unique(ethnicity: &mut Vec<CodedEntry>, entry: CodedEntry) {
    if !ethnicity.contains(&entry) {
        ethnicity.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_requires_hispanic_flag() {
        let only_mexican = vec![MEXICAN.entry()];
        assert!(!has_origin(&only_mexican, MEXICAN));

        let hispanic_mexican = vec![MEXICAN.entry(), HISPANIC.entry()];
        assert!(has_origin(&hispanic_mexican, MEXICAN));
        assert!(!has_origin(&hispanic_mexican, CUBAN));
    }

    #[test]
    fn mark_hispanic_replaces_non_hispanic() {
        let mut ethnicity = vec![NON_HISPANIC.entry()];
        mark_hispanic(&mut ethnicity, Some(CUBAN.entry()));
        assert_eq!(ethnicity, vec![CUBAN.entry(), HISPANIC.entry()]);

        mark_hispanic(&mut ethnicity, Some(CUBAN.entry()));
        assert_eq!(ethnicity.len(), 2);
    }

    #[test]
    fn mark_not_hispanic_only_fills_empty_list() {
        let mut ethnicity = Vec::new();
        mark_not_hispanic(&mut ethnicity);
        assert_eq!(ethnicity, vec![NON_HISPANIC.entry()]);

        let mut ethnicity = vec![HISPANIC.entry()];
        mark_not_hispanic(&mut ethnicity);
        assert_eq!(ethnicity, vec![HISPANIC.entry()]);
    }

    #[test]
    fn other_origins_skip_fixed_concepts() {
        let ethnicity = vec![
            HISPANIC.entry(),
            CodedEntry::new("Colombian", "2169-1"),
            CodedEntry::new("MEXICAN", ""),
        ];
        let others: Vec<_> = other_origins(&ethnicity).map(|e| e.display.as_str()).collect();
        assert_eq!(others, vec!["Colombian"]);
    }

    #[test]
    fn detailed_names_resolve() {
        assert_eq!(code_for_name("colombian"), Some("2169-1"));
        assert_eq!(code_for_name(" Dominican "), Some("2184-0"));
        assert_eq!(code_for_name("Atlantean"), None);
    }
}
