//! Decode/encode round trips over a fully populated record.

use ije_mortality::codec::fit;
use ije_mortality::{IjeCodec, RECORD_LEN};

fn codec() -> IjeCodec {
    IjeCodec::new().unwrap()
}

/// Write `value` into the field `key` of `line`.
fn overlay(codec: &IjeCodec, line: &mut Vec<char>, key: &str, value: &str) {
    let descriptor = codec.registry().get(key).unwrap();
    let fitted = fit(value, descriptor.width);
    for (slot, ch) in line[descriptor.range()].iter_mut().zip(fitted.chars()) {
        *slot = ch;
    }
}

const DECEDENT: &[(&str, &str)] = &[
    ("DOD_YR", "2019"),
    ("DSTATE", "MA"),
    ("FILENO", "000182"),
    ("AUXNO", "000000004321"),
    ("GNAME", "JOHN"),
    ("MNAME", "Q"),
    ("LNAME", "SMITH"),
    ("SUFF", "JR"),
    ("FLNAME", "SMITH"),
    ("SEX", "M"),
    ("SSN", "123456789"),
    ("AGETYPE", "1"),
    ("AGE", "079"),
    ("DOB_YR", "1940"),
    ("DOB_MO", "06"),
    ("DOB_DY", "14"),
    ("BPLACE_CNT", "US"),
    ("BPLACE_ST", "MA"),
    ("CITYC", "07000"),
    ("COUNTYC", "025"),
    ("STATEC", "MA"),
    ("COUNTRYC", "US"),
    ("LIMITS", "Y"),
    ("MARITAL", "M"),
    ("COD", "025"),
    ("DISP", "C"),
    ("DOD_MO", "02"),
    ("DOD_DY", "19"),
    ("TOD", "1630"),
    ("DEDUC", "4"),
    ("DETHNIC1", "H"),
    ("RACE1", "Y"),
    ("OCCUP", "Carpenter"),
    ("INDUST", "Construction"),
    ("DOR_YR", "2019"),
    ("DOR_MO", "02"),
    ("DOR_DY", "21"),
    ("MANNER", "A"),
    ("AUTOP", "Y"),
    ("AUTOPF", "Y"),
    ("TOBAC", "N"),
    ("PREG", "8"),
    ("DOI_MO", "02"),
    ("DOI_DY", "18"),
    ("DOI_YR", "2019"),
    ("TOI_HR", "1100"),
    ("WORKINJ", "N"),
    ("CERTL", "D"),
    ("ARMEDF", "N"),
    ("DINSTI", "Boston Medical Center"),
    ("ADDRESS_D", "1 Boston Medical Center Pl"),
    ("CITYTEXT_D", "Boston"),
    ("STATETEXT_D", "Massachusetts"),
    ("ZIP9_D", "02118"),
    ("COUNTYTEXT_D", "Suffolk"),
    ("CITYCODE_D", "07000"),
    ("CITYTEXT_R", "Boston"),
    ("ZIP9_R", "02116"),
    ("COUNTYTEXT_R", "Suffolk"),
    ("STATETEXT_R", "Massachusetts"),
    ("COUNTRYTEXT_R", "United States"),
    ("ADDRESS_R", "101 Main St"),
    ("DMIDDLE", "QUINCY"),
    ("DMOMMDN", "JONES"),
    ("REFERRED", "Y"),
    ("POILITRL", "Home"),
    ("HOWINJ", "Fell from ladder"),
    ("COUNTYTEXT_I", "Suffolk"),
    ("COUNTYCODE_I", "025"),
    ("CITYTEXT_I", "Boston"),
    ("CITYCODE_I", "07000"),
    ("STATECODE_I", "MA"),
    ("COD1A", "Blunt force trauma"),
    ("INTERVAL1A", "Minutes"),
    ("COD1B", "Fall from ladder"),
    ("INTERVAL1B", "Minutes"),
    ("OTHERCONDITION", "Hypertension"),
    ("DBPLACECITY", "Cambridge"),
    ("DISPSTATECD", "MA"),
    ("DISPSTATE", "Massachusetts"),
    ("DISPCITY", "Boston"),
    ("FUNFACNAME", "Riverside Funeral Home"),
    ("FUNFACADDRESS", "7 River Rd"),
    ("FUNCITYTEXT", "Boston"),
    ("FUNSTATECD", "MA"),
    ("FUNSTATE", "Massachusetts"),
    ("FUNZIP", "02119"),
    ("PPDATESIGNED", "02192019"),
    ("PPTIME", "1700"),
    ("CERTFIRST", "JANE"),
    ("CERTLAST", "DOE"),
    ("CERTADDRESS", "44 Elm St"),
    ("CERTCITYTEXT", "Boston"),
    ("CERTSTATECD", "MA"),
    ("CERTSTATE", "Massachusetts"),
    ("CERTZIP", "02120"),
    ("CERTDATE", "02202019"),
    ("STINJURY", "Massachusetts"),
    ("STATEBTH", "Massachusetts"),
    ("DTHCOUNTRYCD", "US"),
    ("DTHCOUNTRY", "United States"),
];

fn decedent_line(codec: &IjeCodec) -> String {
    let empty = codec.encode(&ije_model::DeathRecord::new());
    let mut line: Vec<char> = empty.chars().collect();
    for (key, value) in DECEDENT {
        overlay(codec, &mut line, key, value);
    }
    line.into_iter().collect()
}

#[test]
fn populated_line_round_trips_exactly() {
    let codec = codec();
    let line = decedent_line(&codec);
    assert_eq!(line.chars().count(), RECORD_LEN);

    let differences = codec.roundtrip_report(&line);
    assert!(
        differences.is_empty(),
        "unexpected differences: {}",
        differences
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    );
    assert_eq!(codec.encode(&codec.decode(&line)), line);
}

#[test]
fn decoded_record_has_structured_values() {
    let codec = codec();
    let record = codec.decode(&decedent_line(&codec));

    assert_eq!(record.identifier.as_deref(), Some("182"));
    assert_eq!(record.state_local_identifier.as_deref(), Some("4321"));
    assert_eq!(record.given_names, ["JOHN", "QUINCY"]);
    assert_eq!(record.family_name.as_deref(), Some("SMITH"));
    assert_eq!(record.date_of_birth.as_deref(), Some("1940-06-14"));
    assert_eq!(record.date_of_death.as_deref(), Some("2019-02-19T16:30:00+00:00"));
    assert_eq!(record.registered_time.as_deref(), Some("2019-02-21"));
    assert_eq!(record.certified_time.as_deref(), Some("2019-02-20"));
    assert_eq!(record.injury_date.as_deref(), Some("2019-02-18T11:00:00+00:00"));
    assert_eq!(
        record.date_of_death_pronouncement.as_deref(),
        Some("2019-02-19T17:00:00+00:00")
    );

    let age = record.age_at_death.as_ref().unwrap();
    assert_eq!(age.value.as_deref(), Some("079"));
    assert_eq!(age.unit.as_deref(), Some("a"));

    assert_eq!(record.residence.get("addressCity"), Some("Boston"));
    assert_eq!(record.residence.get("addressCounty"), Some("Suffolk"));
    assert_eq!(record.residence_within_city_limits, Some(true));
    assert_eq!(record.place_of_birth.get("addressCounty"), Some("Middlesex"));
    assert_eq!(record.place_of_birth.get("addressCountry"), Some("United States"));
    assert_eq!(record.funeral_home_address.get("addressCounty"), Some("Suffolk"));

    assert_eq!(record.manner_of_death.as_ref().map(|m| m.code.as_str()), Some("7878000"));
    assert_eq!(record.examiner_contacted, Some(true));
    assert_eq!(record.causes_of_death[1].cause.as_deref(), Some("Fall from ladder"));
    assert_eq!(record.certifier_given_names, ["JANE"]);
    assert!(record.race.iter().any(|entry| entry.code == "2106-3"));
    assert!(record.ethnicity.iter().any(|entry| entry.display == "Mexican"));
}

#[test]
fn decode_is_idempotent_through_encode() {
    let codec = codec();
    let record = codec.decode(&decedent_line(&codec));
    let again = codec.decode(&codec.encode(&record));
    assert_eq!(again, record);
}

#[test]
fn short_lines_are_padded_before_decoding() {
    let codec = codec();
    let line = decedent_line(&codec);
    let short: String = line.chars().take(300).collect();
    let record = codec.decode(&short);
    assert_eq!(record.family_name.as_deref(), Some("SMITH"));
    assert_eq!(record.usual_occupation, None);
}
