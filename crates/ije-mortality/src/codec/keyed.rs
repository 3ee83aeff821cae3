//! Address-map codecs.
//!
//! Address fields address one key of an [`AddressMap`], composed from a
//! prefix and a geographic part (`addressState`, `addressCounty`, ...).
//! Coded fields translate between IJE codes and the names stored in the
//! map through the [`GeoResolver`](ije_terminology::GeoResolver); counties
//! are resolved within the map's state, places within its state and county.
//! A resolved name only fills a blank key; text already stored is kept.

use ije_model::AddressMap;
use tracing::trace;

use super::{FieldContext, blank};

const ADDRESS_PREFIX: &str = "address";
const UNITED_STATES: &str = "United States";

/// Geographic component of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressPart {
    Line1,
    City,
    County,
    State,
    Country,
    Zip,
}

impl AddressPart {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line1 => "line1",
            Self::City => "city",
            Self::County => "county",
            Self::State => "state",
            Self::Country => "country",
            Self::Zip => "zip",
        }
    }

    /// Map key under the default `address` prefix.
    pub fn key(self) -> String {
        GeoKey::new(ADDRESS_PREFIX, self).key()
    }
}

/// One key inside an address map: `prefix + capitalize(part)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoKey {
    pub prefix: &'static str,
    pub part: AddressPart,
}

impl GeoKey {
    pub const fn new(prefix: &'static str, part: AddressPart) -> Self {
        Self { prefix, part }
    }

    pub fn key(&self) -> String {
        let part = self.part.as_str();
        let mut chars = part.chars();
        let mut key = String::with_capacity(self.prefix.len() + part.len());
        key.push_str(self.prefix);
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.push_str(chars.as_str());
        }
        key
    }
}

/// How a field relates to the stored name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoMode {
    /// IJE carries a code; the map stores the resolved name.
    Coded,
    /// IJE carries the stored text as is.
    Literal,
    /// Shown on encode, ignored on decode.
    ReadOnly,
}

/// Store `value` under `key`.
///
/// Inserts when the key is absent or blank. Otherwise the whole map is
/// replaced by the new pair, unless the stored value already equals it
/// (ignoring ASCII case).
pub(crate) fn write_keyed(address: &mut AddressMap, key: &str, value: &str) {
    match address.non_blank(key) {
        None => address.insert(key, value),
        Some(current) if current.trim().eq_ignore_ascii_case(value.trim()) => {}
        Some(_) => address.reset_to(key, value),
    }
}

fn state_name(address: &AddressMap) -> Option<&str> {
    address.non_blank(&AddressPart::State.key())
}

fn county_name(address: &AddressMap) -> Option<&str> {
    address.non_blank(&AddressPart::County.key())
}

pub(crate) fn get_address(
    ctx: &FieldContext<'_>,
    address: &AddressMap,
    part: AddressPart,
    mode: GeoMode,
) -> String {
    let key = part.key();
    let Some(current) = address.get(&key) else {
        return blank(ctx.width());
    };
    let value = match mode {
        GeoMode::Coded => match code_for(ctx, address, part, current) {
            Some(code) => code,
            None => return blank(ctx.width()),
        },
        GeoMode::Literal | GeoMode::ReadOnly => current.to_string(),
    };
    if part == AddressPart::Zip {
        value.replace('-', "")
    } else {
        value
    }
}

/// Stored name to IJE code.
fn code_for(
    ctx: &FieldContext<'_>,
    address: &AddressMap,
    part: AddressPart,
    current: &str,
) -> Option<String> {
    let geo = ctx.geo;
    match part {
        AddressPart::City => {
            let state = state_name(address)?;
            let county = county_name(address)?;
            geo.place_name_to_code(state, county, current)
        }
        AddressPart::County => geo.county_name_to_code(state_name(address)?, current),
        AddressPart::State => geo.state_name_to_code(current),
        AddressPart::Country => geo.country_name_to_code(current),
        AddressPart::Line1 | AddressPart::Zip => Some(current.to_string()),
    }
}

pub(crate) fn set_address(
    ctx: &FieldContext<'_>,
    address: &mut AddressMap,
    part: AddressPart,
    mode: GeoMode,
    value: &str,
) {
    let value = value.trim();
    match mode {
        GeoMode::ReadOnly => {}
        GeoMode::Literal => write_keyed(address, &part.key(), value),
        GeoMode::Coded => match name_for(ctx, address, part, value) {
            Some(name) => {
                if !fill_blank(address, part, &name) {
                    trace!(field = ctx.key(), "coded name deferred to stored name");
                }
            }
            None => trace!(field = ctx.key(), "unresolved geographic code"),
        },
    }
}

/// IJE code to stored name, using the map's state and county as context.
fn name_for(
    ctx: &FieldContext<'_>,
    address: &AddressMap,
    part: AddressPart,
    value: &str,
) -> Option<String> {
    let geo = ctx.geo;
    let name = match part {
        AddressPart::City => {
            let state = state_name(address)?;
            let county = county_name(address)?;
            geo.place_code_to_name(state, county, value)
        }
        AddressPart::County => geo.county_code_to_name(state_name(address)?, value),
        AddressPart::State => geo.state_code_to_name(value),
        AddressPart::Country => geo.country_code_to_name(value),
        AddressPart::Line1 | AddressPart::Zip => Some(value.to_string()),
    };
    name.filter(|name| !name.trim().is_empty())
}

/// Literal city; also fills in the county when the resolver knows the city.
///
/// The inferred county (and country) only fill empty keys so the city just
/// written is never reset away.
pub(crate) fn set_city_with_county(
    ctx: &FieldContext<'_>,
    address: &mut AddressMap,
    sets_country: bool,
    value: &str,
) {
    let city = value.trim();
    write_keyed(address, &AddressPart::City.key(), city);

    let Some(state) = state_name(address).and_then(|name| ctx.geo.state_name_to_code(name)) else {
        return;
    };
    let Some(county) = ctx.geo.county_for_city(&state, city) else {
        trace!(field = ctx.key(), state = %state, "no county known for city");
        return;
    };
    fill_blank(address, AddressPart::County, &county);
    if sets_country {
        fill_blank(address, AddressPart::Country, UNITED_STATES);
    }
}

/// Insert `value` only when the key is absent or blank; reports whether it did.
fn fill_blank(address: &mut AddressMap, part: AddressPart, value: &str) -> bool {
    let key = part.key();
    let blank = address.non_blank(&key).is_none();
    if blank {
        address.insert(key, value);
    }
    blank
}

#[cfg(test)]
mod tests {
    use ije_terminology::StaticGeoResolver;

    use super::*;
    use crate::registry::FieldDescriptor;

    fn ctx<'a>(descriptor: &'a FieldDescriptor, geo: &'a StaticGeoResolver) -> FieldContext<'a> {
        FieldContext { descriptor, geo }
    }

    #[test]
    fn keys_capitalize_part() {
        assert_eq!(AddressPart::State.key(), "addressState");
        assert_eq!(AddressPart::Zip.key(), "addressZip");
        assert_eq!(GeoKey::new("place", AddressPart::Line1).key(), "placeLine1");
    }

    #[test]
    fn write_keyed_inserts_resets_or_keeps() {
        let mut address = AddressMap::new();
        write_keyed(&mut address, "addressCity", "Boston");
        write_keyed(&mut address, "addressState", "Massachusetts");
        assert_eq!(address.len(), 2);

        write_keyed(&mut address, "addressCity", "BOSTON");
        assert_eq!(address.len(), 2);
        assert_eq!(address.get("addressCity"), Some("Boston"));

        write_keyed(&mut address, "addressCity", "Cambridge");
        assert_eq!(address.len(), 1);
        assert_eq!(address.get("addressCity"), Some("Cambridge"));
    }

    #[test]
    fn coded_state_and_county_translate_both_ways() {
        let geo = StaticGeoResolver::builtin();
        let state = FieldDescriptor::new(1, 1, 2, "STATE", "State");
        let county = FieldDescriptor::new(2, 3, 3, "COUNTY", "County");

        let mut address = AddressMap::new();
        set_address(&ctx(&county, &geo), &mut address, AddressPart::County, GeoMode::Coded, "025");
        assert!(address.is_empty(), "county needs a state first");

        set_address(&ctx(&state, &geo), &mut address, AddressPart::State, GeoMode::Coded, "MA");
        set_address(&ctx(&county, &geo), &mut address, AddressPart::County, GeoMode::Coded, "025");
        assert_eq!(address.get("addressState"), Some("Massachusetts"));
        assert_eq!(address.get("addressCounty"), Some("Suffolk"));

        assert_eq!(
            get_address(&ctx(&county, &geo), &address, AddressPart::County, GeoMode::Coded),
            "025"
        );
    }

    #[test]
    fn coded_city_keeps_stored_literal_and_siblings() {
        let geo = StaticGeoResolver::builtin();
        let city = FieldDescriptor::new(1, 1, 5, "CITYCODE", "City code");
        let mut address: AddressMap = [
            ("addressState", "Massachusetts"),
            ("addressCounty", "Suffolk"),
            ("addressCity", "BOSTON CITY"),
            ("addressZip", "02115"),
        ]
        .into_iter()
        .collect();

        set_address(&ctx(&city, &geo), &mut address, AddressPart::City, GeoMode::Coded, "07000");
        assert_eq!(address.len(), 4);
        assert_eq!(address.get("addressCity"), Some("BOSTON CITY"));
        assert_eq!(address.get("addressState"), Some("Massachusetts"));

        address.insert("addressCity", "");
        set_address(&ctx(&city, &geo), &mut address, AddressPart::City, GeoMode::Coded, "07000");
        assert_eq!(address.get("addressCity"), Some("Boston"));
        assert_eq!(address.get("addressZip"), Some("02115"));
    }

    #[test]
    fn unresolvable_codes_read_blank() {
        let geo = StaticGeoResolver::builtin();
        let state = FieldDescriptor::new(1, 1, 2, "STATE", "State");
        let address: AddressMap = [("addressState", "Atlantis")].into_iter().collect();
        assert_eq!(
            get_address(&ctx(&state, &geo), &address, AddressPart::State, GeoMode::Coded),
            "  "
        );
        assert_eq!(
            get_address(&ctx(&state, &geo), &AddressMap::new(), AddressPart::State, GeoMode::Literal),
            "  "
        );
    }

    #[test]
    fn zip_drops_hyphen() {
        let geo = StaticGeoResolver::builtin();
        let zip = FieldDescriptor::new(1, 1, 9, "ZIP", "Zip");
        let address: AddressMap = [("addressZip", "02115-1234")].into_iter().collect();
        assert_eq!(
            get_address(&ctx(&zip, &geo), &address, AddressPart::Zip, GeoMode::Literal),
            "021151234"
        );
    }

    #[test]
    fn read_only_fields_ignore_input() {
        let geo = StaticGeoResolver::builtin();
        let descriptor = FieldDescriptor::new(1, 1, 28, "STATETEXT", "State text");
        let mut address = AddressMap::new();
        set_address(
            &ctx(&descriptor, &geo),
            &mut address,
            AddressPart::State,
            GeoMode::ReadOnly,
            "Massachusetts",
        );
        assert!(address.is_empty());
    }

    #[test]
    fn city_infers_county_and_country() {
        let geo = StaticGeoResolver::builtin();
        let descriptor = FieldDescriptor::new(1, 1, 28, "CITY", "City");
        let mut address: AddressMap = [("addressState", "Massachusetts")].into_iter().collect();

        set_city_with_county(&ctx(&descriptor, &geo), &mut address, true, "Boston");
        assert_eq!(address.get("addressCity"), Some("Boston"));
        assert_eq!(address.get("addressCounty"), Some("Suffolk"));
        assert_eq!(address.get("addressCountry"), Some("United States"));

        let mut address: AddressMap = [("addressState", "Massachusetts")].into_iter().collect();
        set_city_with_county(&ctx(&descriptor, &geo), &mut address, false, "Cambridge");
        assert_eq!(address.get("addressCounty"), Some("Middlesex"));
        assert_eq!(address.get("addressCountry"), None);
    }
}
