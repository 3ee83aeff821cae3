//! Snapshot of the structured record decoded from a sparse line.

use ije_mortality::codec::fit;
use ije_mortality::{IjeCodec, RECORD_LEN};

fn sparse_line(codec: &IjeCodec, values: &[(&str, &str)]) -> String {
    let mut line = vec![' '; RECORD_LEN];
    for (key, value) in values {
        let descriptor = codec.registry().get(key).unwrap();
        for (slot, ch) in line[descriptor.range()].iter_mut().zip(fit(value, descriptor.width).chars()) {
            *slot = ch;
        }
    }
    line.into_iter().collect()
}

#[test]
fn decoded_record_snapshot_is_stable() {
    let codec = IjeCodec::new().unwrap();
    let line = sparse_line(
        &codec,
        &[
            ("DOD_YR", "2019"),
            ("DSTATE", "MA"),
            ("FILENO", "000182"),
            ("GNAME", "JOHN"),
            ("LNAME", "SMITH"),
            ("SEX", "M"),
            ("MANNER", "N"),
        ],
    );

    let record = codec.decode(&line);
    insta::assert_json_snapshot!(record, @r#"
    {
      "identifier": "182",
      "givenNames": [
        "JOHN"
      ],
      "familyName": "SMITH",
      "birthSex": "M",
      "gender": {
        "code": "male",
        "system": "http://hl7.org/fhir/administrative-gender",
        "display": "Male"
      },
      "dateOfDeath": "2019-01-01T00:00:00+00:00",
      "deathLocationAddress": {
        "addressState": "Massachusetts"
      },
      "mannerOfDeath": {
        "code": "38605008",
        "system": "http://snomed.info/sct",
        "display": "Natural death"
      }
    }
    "#);
}
