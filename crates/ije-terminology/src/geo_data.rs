//! Embedded geographic reference data.
//!
//! States and territories are complete. Counties and places cover a small
//! set of jurisdictions; load a full table with
//! [`GeoTable::from_json_path`](crate::GeoTable::from_json_path) for
//! production use.

use crate::geo::{CountyEntry, GeoEntry, GeoTable, PlaceEntry};

const STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
    ("AS", "American Samoa"),
    ("GU", "Guam"),
    ("MP", "Northern Mariana Islands"),
    ("PR", "Puerto Rico"),
    ("VI", "Virgin Islands"),
];

const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("MX", "Mexico"),
    ("CU", "Cuba"),
    ("DO", "Dominican Republic"),
    ("GB", "United Kingdom"),
    ("IE", "Ireland"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("IT", "Italy"),
    ("PL", "Poland"),
    ("IN", "India"),
    ("CN", "China"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("PH", "Philippines"),
    ("VN", "Vietnam"),
];

// (state, county code, county name)
const COUNTIES: &[(&str, &str, &str)] = &[
    ("CA", "001", "Alameda"),
    ("CA", "037", "Los Angeles"),
    ("CA", "059", "Orange"),
    ("CA", "073", "San Diego"),
    ("CA", "075", "San Francisco"),
    ("CA", "085", "Santa Clara"),
    ("MA", "017", "Middlesex"),
    ("MA", "021", "Norfolk"),
    ("MA", "025", "Suffolk"),
];

// (state, county code, place code, place name)
const PLACES: &[(&str, &str, &str, &str)] = &[
    ("CA", "001", "53000", "Oakland"),
    ("CA", "037", "44000", "Los Angeles"),
    ("CA", "073", "66000", "San Diego"),
    ("CA", "075", "67000", "San Francisco"),
    ("CA", "085", "68000", "San Jose"),
    ("MA", "017", "11000", "Cambridge"),
    ("MA", "025", "07000", "Boston"),
];

fn entries(rows: &[(&str, &str)]) -> Vec<GeoEntry> {
    rows.iter()
        .map(|(code, name)| GeoEntry {
            code: (*code).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

pub(crate) fn builtin_table() -> GeoTable {
    GeoTable {
        states: entries(STATES),
        countries: entries(COUNTRIES),
        counties: COUNTIES
            .iter()
            .map(|(state, code, name)| CountyEntry {
                state: (*state).to_string(),
                code: (*code).to_string(),
                name: (*name).to_string(),
            })
            .collect(),
        places: PLACES
            .iter()
            .map(|(state, county, code, name)| PlaceEntry {
                state: (*state).to_string(),
                county: (*county).to_string(),
                code: (*code).to_string(),
                name: (*name).to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let table = builtin_table();
        table.validate().expect("embedded data is valid");
        assert_eq!(table.states.len(), STATES.len());
    }

    #[test]
    fn every_place_has_a_county() {
        for (state, county, _, name) in PLACES {
            assert!(
                COUNTIES.iter().any(|(s, c, _)| s == state && c == county),
                "{name}"
            );
        }
    }
}
