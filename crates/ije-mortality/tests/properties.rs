//! Property tests for the transcoder.

use ije_model::DeathRecord;
use ije_mortality::{IjeCodec, RECORD_LEN};
use proptest::prelude::*;

fn codec() -> IjeCodec {
    IjeCodec::new().unwrap()
}

/// Upper-case name with inner spaces, hyphens or apostrophes, no padding.
fn name(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[A-Z]([A-Z '-]{{0,{}}}[A-Z])?", max - 2)).unwrap()
}

proptest! {
    /// Any input decodes without panicking and re-encodes at full length.
    #[test]
    fn decode_accepts_any_text(line in ".{0,6000}") {
        let codec = codec();
        let record = codec.decode(&line);
        prop_assert_eq!(codec.encode(&record).chars().count(), RECORD_LEN);
    }

    /// Every field renders at exactly its declared width.
    #[test]
    fn field_values_fill_their_width(occupation in ".{0,80}", family in ".{0,80}") {
        let codec = codec();
        let mut record = DeathRecord::new();
        record.usual_occupation = Some(occupation);
        record.family_name = Some(family);
        for (_, descriptor) in codec.registry().in_ordinal_order() {
            let value = codec.field_value(&record, descriptor.key).unwrap();
            prop_assert_eq!(value.chars().count(), descriptor.width, "{}", descriptor.key);
        }
    }

    /// Overlong values never spill into neighboring fields.
    #[test]
    fn long_values_stay_in_their_range(occupation in "[a-z ]{41,200}") {
        let codec = codec();
        let baseline = codec.encode(&DeathRecord::new());
        let mut record = DeathRecord::new();
        record.usual_occupation = Some(occupation);
        let line = codec.encode(&record);

        let range = codec.registry().get("OCCUP").unwrap().range();
        let outside = |text: &str| -> Vec<char> {
            text.chars()
                .enumerate()
                .filter(|(index, _)| !range.contains(index))
                .map(|(_, ch)| ch)
                .collect()
        };
        prop_assert_eq!(outside(&line), outside(&baseline));
    }

    /// Names that fit their field survive a round trip.
    #[test]
    fn names_round_trip(given in name(50), middle in name(50), family in name(50)) {
        let codec = codec();
        let mut record = DeathRecord::new();
        record.given_names = vec![given, middle];
        record.family_name = Some(family);

        let decoded = codec.decode(&codec.encode(&record));
        prop_assert_eq!(decoded.given_names, record.given_names);
        prop_assert_eq!(decoded.family_name, record.family_name);
    }

    /// Minute-precision death timestamps survive a round trip.
    #[test]
    fn death_timestamps_round_trip(
        year in 1900i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let codec = codec();
        let mut record = DeathRecord::new();
        record.date_of_death = Some(format!(
            "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:00+00:00"
        ));

        let decoded = codec.decode(&codec.encode(&record));
        prop_assert_eq!(decoded.date_of_death, record.date_of_death);
    }

    /// Decoding is stable once a line has been through the transcoder.
    #[test]
    fn second_pass_is_a_fixed_point(family in name(50), year in 1900i32..2100) {
        let codec = codec();
        let mut record = DeathRecord::new();
        record.family_name = Some(family);
        record.date_of_birth = Some(format!("{year:04}-07-04"));

        let line = codec.encode(&record);
        prop_assert_eq!(codec.encode(&codec.decode(&line)), line.clone());
        prop_assert!(codec.roundtrip_report(&line).is_empty());
    }
}
