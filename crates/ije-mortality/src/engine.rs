//! Fixed-width ↔ structured transcoding.
//!
//! [`IjeCodec`] drives the field table in both directions:
//!
//! - [`IjeCodec::decode`] pads the line to [`RECORD_LEN`], then applies every
//!   non-blank field slice to a fresh [`DeathRecord`] in decode order
//! - [`IjeCodec::encode`] starts from an all-space line and writes every
//!   field's getter output, fitted to its width, in field-number order
//!
//! Neither direction fails on data. Slicing is by character, so non-ASCII
//! input never splits a code point.

use std::fmt;
use std::sync::Arc;

use ije_model::DeathRecord;
use ije_terminology::{GeoResolver, StaticGeoResolver};
use tracing::debug;

use crate::RECORD_LEN;
use crate::codec::{FieldContext, fit};
use crate::error::Result;
use crate::fields::{self, FieldSpec};
use crate::registry::{FieldDescriptor, FieldRegistry};

/// One field whose re-encoded text differs from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDifference {
    pub key: &'static str,
    /// Slice of the input line.
    pub expected: String,
    /// Slice of the re-encoded line.
    pub actual: String,
}

impl fmt::Display for FieldDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {:?}, got {:?}", self.key, self.expected, self.actual)
    }
}

/// Bidirectional IJE mortality transcoder.
///
/// Cheap to clone; the field registry is shared and the resolver is
/// reference-counted.
#[derive(Clone)]
pub struct IjeCodec {
    geo: Arc<dyn GeoResolver>,
    registry: &'static FieldRegistry,
}

impl fmt::Debug for IjeCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IjeCodec")
            .field("fields", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl IjeCodec {
    /// Transcoder backed by the built-in geographic reference data.
    pub fn new() -> Result<Self> {
        Self::with_resolver(StaticGeoResolver::builtin())
    }

    pub fn with_resolver(resolver: impl GeoResolver + 'static) -> Result<Self> {
        Self::with_shared_resolver(Arc::new(resolver))
    }

    pub fn with_shared_resolver(geo: Arc<dyn GeoResolver>) -> Result<Self> {
        Ok(Self {
            geo,
            registry: fields::registry()?,
        })
    }

    pub fn registry(&self) -> &'static FieldRegistry {
        self.registry
    }

    fn context<'a>(&'a self, descriptor: &'a FieldDescriptor) -> FieldContext<'a> {
        FieldContext {
            descriptor,
            geo: self.geo.as_ref(),
        }
    }

    /// Parse one fixed-width line.
    pub fn decode(&self, line: &str) -> DeathRecord {
        let mut chars: Vec<char> = line.chars().collect();
        let input_len = chars.len();
        if input_len < RECORD_LEN {
            chars.resize(RECORD_LEN, ' ');
        }

        let mut record = DeathRecord::new();
        let mut applied = 0usize;
        for spec in specs(self.registry.in_decode_order()) {
            let slice: String = chars[spec.descriptor.range()].iter().collect();
            if slice.trim().is_empty() || spec.codec.is_read_only() {
                continue;
            }
            spec.codec.set(&self.context(&spec.descriptor), &mut record, &slice);
            applied += 1;
        }
        debug!(input_len, applied, "decoded IJE record");
        record
    }

    /// Render a record as one fixed-width line of exactly [`RECORD_LEN`] characters.
    pub fn encode(&self, record: &DeathRecord) -> String {
        let mut chars = vec![' '; RECORD_LEN];
        let mut written = 0usize;
        for spec in specs(self.registry.in_ordinal_order()) {
            let value = self.render(spec, record);
            let range = spec.descriptor.range();
            for (slot, ch) in chars[range].iter_mut().zip(value.chars()) {
                *slot = ch;
            }
            if !value.trim().is_empty() {
                written += 1;
            }
        }
        debug!(written, "encoded IJE record");
        chars.into_iter().collect()
    }

    fn render(&self, spec: &FieldSpec, record: &DeathRecord) -> String {
        let descriptor = &spec.descriptor;
        fit(&spec.codec.get(&self.context(descriptor), record), descriptor.width)
    }

    /// Encoded text of one field, fitted to its width.
    pub fn field_value(&self, record: &DeathRecord, key: &str) -> Option<String> {
        let index = self.registry.position(key)?;
        fields::spec(index).map(|spec| self.render(spec, record))
    }

    /// Decode then re-encode `line` and list the fields whose text changed.
    pub fn roundtrip_report(&self, line: &str) -> Vec<FieldDifference> {
        let mut input: Vec<char> = line.chars().collect();
        if input.len() < RECORD_LEN {
            input.resize(RECORD_LEN, ' ');
        }
        let output: Vec<char> = self.encode(&self.decode(line)).chars().collect();

        let differences: Vec<FieldDifference> = self
            .registry
            .in_ordinal_order()
            .filter_map(|(_, descriptor)| {
                let expected: String = input[descriptor.range()].iter().collect();
                let actual: String = output[descriptor.range()].iter().collect();
                (expected != actual).then_some(FieldDifference {
                    key: descriptor.key,
                    expected,
                    actual,
                })
            })
            .collect();
        debug!(differences = differences.len(), "round-trip check");
        differences
    }
}

fn specs(
    order: impl Iterator<Item = (usize, &'static FieldDescriptor)>,
) -> impl Iterator<Item = &'static FieldSpec> {
    order.filter_map(|(index, _)| fields::spec(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> IjeCodec {
        IjeCodec::new().expect("field layout is valid")
    }

    #[test]
    fn empty_line_decodes_to_empty_record() {
        assert_eq!(codec().decode(""), DeathRecord::new());
    }

    #[test]
    fn encode_has_fixed_length() {
        let line = codec().encode(&DeathRecord::new());
        assert_eq!(line.chars().count(), RECORD_LEN);
    }

    #[test]
    fn empty_record_encodes_constants() {
        let codec = codec();
        let record = DeathRecord::new();
        assert_eq!(codec.field_value(&record, "VOID").as_deref(), Some("0"));
        assert_eq!(codec.field_value(&record, "INACT").as_deref(), Some("9"));
        assert_eq!(codec.field_value(&record, "FILENO").as_deref(), Some("000000"));
        assert_eq!(codec.field_value(&record, "LIMITS").as_deref(), Some("U"));
        assert_eq!(codec.field_value(&record, "NOPE"), None);
    }

    #[test]
    fn long_lines_are_not_truncated_before_slicing() {
        let codec = codec();
        let mut line = codec.encode(&DeathRecord::new());
        line.push_str("trailing data");
        assert_eq!(codec.decode(&line).family_name, None);
    }

    #[test]
    fn non_ascii_input_is_sliced_by_character() {
        let codec = codec();
        let mut record = DeathRecord::new();
        record.given_names = vec!["ÉLODIE".to_string()];
        record.family_name = Some("NÚÑEZ".to_string());
        let decoded = codec.decode(&codec.encode(&record));
        assert_eq!(decoded.given_names, ["ÉLODIE"]);
        assert_eq!(decoded.family_name.as_deref(), Some("NÚÑEZ"));
    }
}
