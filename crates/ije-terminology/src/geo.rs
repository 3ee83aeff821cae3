//! Geographic reference lookups.
//!
//! The fixed-width record carries states, counties and places as codes
//! (postal state codes, 3-digit county FIPS codes, 5-digit place codes) while
//! the structured record stores names. [`GeoResolver`] translates between the
//! two. Counties are scoped to a state and places to a state and county, so
//! resolving a child always needs its parent names.
//!
//! [`StaticGeoResolver`] answers from a [`GeoTable`], either the built-in one
//! or one loaded from a JSON file with this shape:
//!
//! ```json
//! {
//!   "states":    [{ "code": "MA", "name": "Massachusetts" }],
//!   "countries": [{ "code": "US", "name": "United States" }],
//!   "counties":  [{ "state": "MA", "code": "025", "name": "Suffolk" }],
//!   "places":    [{ "state": "MA", "county": "025", "code": "07000", "name": "Boston" }]
//! }
//! ```
//!
//! Name comparisons ignore ASCII case. Lookups never fail; they return `None`.

use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TerminologyError};
use crate::geo_data;

/// Code ↔ name lookups for states, countries, counties and places.
pub trait GeoResolver: Send + Sync {
    fn state_code_to_name(&self, code: &str) -> Option<String>;
    fn state_name_to_code(&self, name: &str) -> Option<String>;
    fn country_code_to_name(&self, code: &str) -> Option<String>;
    fn country_name_to_code(&self, name: &str) -> Option<String>;
    fn county_code_to_name(&self, state_name: &str, code: &str) -> Option<String>;
    fn county_name_to_code(&self, state_name: &str, name: &str) -> Option<String>;
    fn place_code_to_name(&self, state_name: &str, county_name: &str, code: &str)
    -> Option<String>;
    fn place_name_to_code(&self, state_name: &str, county_name: &str, name: &str)
    -> Option<String>;
    /// County name of a city, given the state's postal code.
    fn county_for_city(&self, state_code: &str, city_name: &str) -> Option<String>;
}

/// A `(code, name)` pair for states and countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoEntry {
    pub code: String,
    pub name: String,
}

/// A county within a state (`state` is the state's postal code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyEntry {
    pub state: String,
    pub code: String,
    pub name: String,
}

/// A place within a county (`state` and `county` are codes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceEntry {
    pub state: String,
    pub county: String,
    pub code: String,
    pub name: String,
}

/// Geographic reference data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoTable {
    pub states: Vec<GeoEntry>,
    pub countries: Vec<GeoEntry>,
    pub counties: Vec<CountyEntry>,
    pub places: Vec<PlaceEntry>,
}

impl GeoTable {
    /// Load a table from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| TerminologyError::io(path, source))?;
        let table: Self =
            serde_json::from_str(&text).map_err(|source| TerminologyError::parse(path, source))?;
        table.validate()?;
        debug!(
            path = %path.display(),
            states = table.states.len(),
            countries = table.countries.len(),
            counties = table.counties.len(),
            places = table.places.len(),
            "loaded geo reference data"
        );
        Ok(table)
    }

    /// Reject rows with an empty code or name.
    pub fn validate(&self) -> Result<()> {
        fn check(table: &'static str, index: usize, code: &str, name: &str) -> Result<()> {
            if code.trim().is_empty() {
                return Err(TerminologyError::EmptyEntry {
                    table,
                    field: "code",
                    index,
                });
            }
            if name.trim().is_empty() {
                return Err(TerminologyError::EmptyEntry {
                    table,
                    field: "name",
                    index,
                });
            }
            Ok(())
        }

        for (index, entry) in self.states.iter().enumerate() {
            check("states", index, &entry.code, &entry.name)?;
        }
        for (index, entry) in self.countries.iter().enumerate() {
            check("countries", index, &entry.code, &entry.name)?;
        }
        for (index, entry) in self.counties.iter().enumerate() {
            check("counties", index, &entry.code, &entry.name)?;
        }
        for (index, entry) in self.places.iter().enumerate() {
            check("places", index, &entry.code, &entry.name)?;
        }
        Ok(())
    }

    fn state_code(&self, name: &str) -> Option<&str> {
        find_by_name(&self.states, name).map(|entry| entry.code.as_str())
    }

    fn county(&self, state_code: &str, name: &str) -> Option<&CountyEntry> {
        self.counties
            .iter()
            .find(|c| c.state.eq_ignore_ascii_case(state_code) && c.name.eq_ignore_ascii_case(name))
    }
}

fn find_by_name<'a>(entries: &'a [GeoEntry], name: &str) -> Option<&'a GeoEntry> {
    let name = name.trim();
    entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

fn find_by_code<'a>(entries: &'a [GeoEntry], code: &str) -> Option<&'a GeoEntry> {
    let code = code.trim();
    entries.iter().find(|e| e.code.eq_ignore_ascii_case(code))
}

static BUILTIN: LazyLock<Arc<GeoTable>> = LazyLock::new(|| Arc::new(geo_data::builtin_table()));

/// Table-backed [`GeoResolver`].
#[derive(Debug, Clone)]
pub struct StaticGeoResolver {
    table: Arc<GeoTable>,
}

impl StaticGeoResolver {
    pub fn new(table: GeoTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Resolver over the embedded reference data.
    pub fn builtin() -> Self {
        Self {
            table: Arc::clone(&BUILTIN),
        }
    }

    pub fn table(&self) -> &GeoTable {
        &self.table
    }
}

impl Default for StaticGeoResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GeoResolver for StaticGeoResolver {
    fn state_code_to_name(&self, code: &str) -> Option<String> {
        find_by_code(&self.table.states, code).map(|e| e.name.clone())
    }

    fn state_name_to_code(&self, name: &str) -> Option<String> {
        find_by_name(&self.table.states, name).map(|e| e.code.clone())
    }

    fn country_code_to_name(&self, code: &str) -> Option<String> {
        find_by_code(&self.table.countries, code).map(|e| e.name.clone())
    }

    fn country_name_to_code(&self, name: &str) -> Option<String> {
        find_by_name(&self.table.countries, name).map(|e| e.code.clone())
    }

    fn county_code_to_name(&self, state_name: &str, code: &str) -> Option<String> {
        let state = self.table.state_code(state_name)?;
        let code = code.trim();
        self.table
            .counties
            .iter()
            .find(|c| c.state.eq_ignore_ascii_case(state) && c.code == code)
            .map(|c| c.name.clone())
    }

    fn county_name_to_code(&self, state_name: &str, name: &str) -> Option<String> {
        let state = self.table.state_code(state_name)?;
        self.table.county(state, name.trim()).map(|c| c.code.clone())
    }

    fn place_code_to_name(
        &self,
        state_name: &str,
        county_name: &str,
        code: &str,
    ) -> Option<String> {
        let state = self.table.state_code(state_name)?;
        let county = self.table.county(state, county_name.trim())?;
        let code = code.trim();
        self.table
            .places
            .iter()
            .find(|p| {
                p.state.eq_ignore_ascii_case(state) && p.county == county.code && p.code == code
            })
            .map(|p| p.name.clone())
    }

    fn place_name_to_code(
        &self,
        state_name: &str,
        county_name: &str,
        name: &str,
    ) -> Option<String> {
        let state = self.table.state_code(state_name)?;
        let county = self.table.county(state, county_name.trim())?;
        let name = name.trim();
        self.table
            .places
            .iter()
            .find(|p| {
                p.state.eq_ignore_ascii_case(state)
                    && p.county == county.code
                    && p.name.eq_ignore_ascii_case(name)
            })
            .map(|p| p.code.clone())
    }

    fn county_for_city(&self, state_code: &str, city_name: &str) -> Option<String> {
        let state_code = state_code.trim();
        let city_name = city_name.trim();
        let place = self.table.places.iter().find(|p| {
            p.state.eq_ignore_ascii_case(state_code) && p.name.eq_ignore_ascii_case(city_name)
        })?;
        self.table
            .counties
            .iter()
            .find(|c| c.state.eq_ignore_ascii_case(state_code) && c.code == place.county)
            .map(|c| c.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_states_both_ways() {
        let geo = StaticGeoResolver::builtin();
        assert_eq!(geo.state_code_to_name("CA").as_deref(), Some("California"));
        assert_eq!(geo.state_code_to_name("ca").as_deref(), Some("California"));
        assert_eq!(geo.state_name_to_code("massachusetts").as_deref(), Some("MA"));
        assert_eq!(geo.state_code_to_name("ZZ"), None);
    }

    #[test]
    fn counties_are_scoped_to_state() {
        let geo = StaticGeoResolver::builtin();
        assert_eq!(
            geo.county_code_to_name("Massachusetts", "025").as_deref(),
            Some("Suffolk")
        );
        assert_eq!(geo.county_code_to_name("California", "025"), None);
        assert_eq!(
            geo.county_name_to_code("California", "los angeles").as_deref(),
            Some("037")
        );
    }

    #[test]
    fn places_need_state_and_county() {
        let geo = StaticGeoResolver::builtin();
        assert_eq!(
            geo.place_code_to_name("Massachusetts", "Suffolk", "07000").as_deref(),
            Some("Boston")
        );
        assert_eq!(geo.place_code_to_name("Massachusetts", "Middlesex", "07000"), None);
        assert_eq!(
            geo.place_name_to_code("California", "San Francisco", "San Francisco").as_deref(),
            Some("67000")
        );
    }

    #[test]
    fn county_inferred_from_city() {
        let geo = StaticGeoResolver::builtin();
        assert_eq!(geo.county_for_city("MA", "Cambridge").as_deref(), Some("Middlesex"));
        assert_eq!(geo.county_for_city("CA", "Cambridge"), None);
    }

    #[test]
    fn validate_rejects_empty_names() {
        let table = GeoTable {
            states: vec![GeoEntry {
                code: "MA".to_string(),
                name: " ".to_string(),
            }],
            ..GeoTable::default()
        };
        let err = table.validate().unwrap_err();
        assert!(matches!(
            err,
            TerminologyError::EmptyEntry {
                table: "states",
                field: "name",
                index: 0
            }
        ));
    }
}
