use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use ije_mortality::IjeCodec;
use ije_terminology::{GeoTable, StaticGeoResolver};
use tracing::{debug, info, info_span, trace, warn};

use ije_cli::logging::redact_value;
use ije_cli::records::{IjeLine, read_ije_lines, read_json_records, records_to_json, write_output};

use crate::cli::{DecodeArgs, EncodeArgs, FieldsArgs, InspectArgs, RoundtripArgs};
use crate::summary::{
    InspectedRecord, RoundtripOutcome, print_fields, print_inspection, print_roundtrip,
};

/// Transcoder backed by `geo_data`, or the built-in reference data.
pub fn build_codec(geo_data: Option<&Path>) -> Result<IjeCodec> {
    let codec = match geo_data {
        Some(path) => {
            let table = GeoTable::from_json_path(path).context("load geo reference data")?;
            info!(path = %path.display(), "using geo reference data");
            IjeCodec::with_resolver(StaticGeoResolver::new(table))
        }
        None => IjeCodec::new(),
    };
    codec.context("build IJE field registry")
}

pub fn run_decode(codec: &IjeCodec, args: &DecodeArgs) -> Result<()> {
    let span = info_span!("decode", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let lines = read_ije_lines(&args.input)?;
    let records: Vec<_> = lines
        .iter()
        .map(|line| {
            debug!(line = line.number, "decoding record");
            codec.decode(&line.text)
        })
        .collect();
    let json = records_to_json(&records, args.compact)?;
    write_output(args.output.as_deref(), &(json + "\n"))?;

    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "decode complete"
    );
    Ok(())
}

pub fn run_encode(codec: &IjeCodec, args: &EncodeArgs) -> Result<()> {
    let span = info_span!("encode", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let records = read_json_records(&args.input)?;
    let mut output = String::new();
    for record in &records {
        output.push_str(&codec.encode(record));
        output.push('\n');
    }
    write_output(args.output.as_deref(), &output)?;

    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "encode complete"
    );
    Ok(())
}

pub fn run_inspect(codec: &IjeCodec, args: &InspectArgs) -> Result<()> {
    let lines = read_ije_lines(&args.input)?;
    let records: Vec<InspectedRecord> = lines
        .into_iter()
        .map(|line| InspectedRecord {
            line: line.number,
            record: codec.decode(&line.text),
        })
        .collect();
    print_inspection(&records);
    Ok(())
}

pub fn run_fields(codec: &IjeCodec, args: &FieldsArgs) -> Result<()> {
    let registry = codec.registry();
    match &args.key {
        Some(key) => {
            let key = key.trim().to_uppercase();
            let field = registry
                .get(&key)
                .ok_or_else(|| anyhow!("unknown IJE field: {key}"))?;
            print_fields([field]);
        }
        None => print_fields(registry.in_ordinal_order().map(|(_, field)| field)),
    }
    Ok(())
}

/// Returns true when at least one record changed.
pub fn run_roundtrip(codec: &IjeCodec, args: &RoundtripArgs) -> Result<bool> {
    let span = info_span!("roundtrip", input = %args.input.display());
    let _guard = span.enter();

    let lines = read_ije_lines(&args.input)?;
    let outcomes = roundtrip_lines(codec, &lines);
    print_roundtrip(&outcomes);
    Ok(outcomes.iter().any(|outcome| !outcome.differences.is_empty()))
}

fn roundtrip_lines(codec: &IjeCodec, lines: &[IjeLine]) -> Vec<RoundtripOutcome> {
    lines
        .iter()
        .map(|line| {
            let differences = codec.roundtrip_report(&line.text);
            if !differences.is_empty() {
                warn!(
                    line = line.number,
                    fields = differences.len(),
                    "record changed on round trip"
                );
            }
            for difference in &differences {
                trace!(
                    line = line.number,
                    field = difference.key,
                    expected = redact_value(&difference.expected),
                    actual = redact_value(&difference.actual),
                    "field changed"
                );
            }
            RoundtripOutcome {
                line: line.number,
                differences,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ije_cli::records::parse_ije_lines;
    use ije_model::DeathRecord;

    use super::*;

    #[test]
    fn clean_lines_have_no_differences() {
        let codec = build_codec(None).unwrap();
        let mut record = DeathRecord::new();
        record.family_name = Some("SMITH".to_string());
        let text = format!("{}\n\n{}\n", codec.encode(&record), codec.encode(&DeathRecord::new()));

        let outcomes = roundtrip_lines(&codec, &parse_ije_lines(&text));
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[1].line, 3);
        assert!(outcomes.iter().all(|outcome| outcome.differences.is_empty()));
    }

    #[test]
    fn missing_geo_file_is_reported() {
        let err = build_codec(Some(Path::new("/nonexistent/geo.json"))).unwrap_err();
        assert!(err.to_string().contains("load geo reference data"));
    }
}
