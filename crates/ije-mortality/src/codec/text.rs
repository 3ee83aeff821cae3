//! String codecs.

use ije_model::{DeathRecord, NameProperty, TextProperty};

use super::FieldContext;

/// Layout of a plain string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Space-filled on the right; stored trimmed.
    Left,
    /// Zero-filled on the left; stored without leading zeros.
    RightZero,
    /// Last `width` characters, zero-filled. A blank value reads as all
    /// zeros when `zero_when_blank`, otherwise as blank.
    CertificateNumber { zero_when_blank: bool },
}

/// Which given name a field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    /// First given name; writing it replaces all given names.
    First,
    /// Second given name; writing it appends.
    Middle,
    /// Second given name; writing it appends only if none is present yet.
    MiddleInitial,
}

/// Half of a cause-of-death line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CausePart {
    Cause,
    Interval,
}

pub(crate) fn get_text(
    ctx: &FieldContext<'_>,
    record: &DeathRecord,
    property: TextProperty,
    format: TextFormat,
) -> String {
    let current = record.text(property);
    let width = ctx.width();
    match format {
        TextFormat::Left => current.unwrap_or_default().to_string(),
        TextFormat::RightZero => match current {
            Some(value) => zero_fill(&value.chars().take(width).collect::<String>(), width),
            None => "0".repeat(width),
        },
        TextFormat::CertificateNumber { zero_when_blank } => match current {
            Some(value) if !value.trim().is_empty() => zero_fill(last_chars(value, width), width),
            _ if zero_when_blank => "0".repeat(width),
            _ => String::new(),
        },
    }
}

pub(crate) fn set_text(
    record: &mut DeathRecord,
    property: TextProperty,
    format: TextFormat,
    value: &str,
) {
    let value = value.trim();
    let stored = match format {
        TextFormat::Left => value,
        TextFormat::RightZero | TextFormat::CertificateNumber { .. } => {
            value.trim_start_matches('0')
        }
    };
    *record.text_mut(property) = Some(stored.to_string());
}

fn last_chars(value: &str, width: usize) -> &str {
    let len = value.chars().count();
    if len <= width {
        return value;
    }
    value
        .char_indices()
        .nth(len - width)
        .map_or(value, |(start, _)| &value[start..])
}

fn zero_fill(value: &str, width: usize) -> String {
    let len = value.chars().count();
    let mut filled = "0".repeat(width.saturating_sub(len));
    filled.push_str(value);
    filled
}

pub(crate) fn get_name(record: &DeathRecord, property: NameProperty, part: NamePart) -> String {
    let names = record.names(property);
    let index = match part {
        NamePart::First => 0,
        NamePart::Middle | NamePart::MiddleInitial => 1,
    };
    names.get(index).cloned().unwrap_or_default()
}

pub(crate) fn set_name(record: &mut DeathRecord, property: NameProperty, part: NamePart, value: &str) {
    let value = value.trim().to_string();
    let names = record.names_mut(property);
    match part {
        NamePart::First => *names = vec![value],
        NamePart::Middle => names.push(value),
        NamePart::MiddleInitial => {
            if names.get(1).is_none_or(|middle| middle.trim().is_empty()) {
                names.push(value);
            }
        }
    }
}

pub(crate) fn get_cause(record: &DeathRecord, line: usize, part: CausePart) -> String {
    let Some(cause) = record.causes_of_death.get(line) else {
        return String::new();
    };
    let value = match part {
        CausePart::Cause => cause.cause.as_deref(),
        CausePart::Interval => cause.interval.as_deref(),
    };
    value.unwrap_or_default().trim().to_string()
}

pub(crate) fn set_cause(record: &mut DeathRecord, line: usize, part: CausePart, value: &str) {
    let Some(cause) = record.causes_of_death.get_mut(line) else {
        return;
    };
    let slot = match part {
        CausePart::Cause => &mut cause.cause,
        CausePart::Interval => &mut cause.interval,
    };
    *slot = Some(value.trim().to_string());
}

#[cfg(test)]
mod tests {
    use ije_terminology::StaticGeoResolver;

    use super::*;
    use crate::registry::FieldDescriptor;

    fn context<'a>(
        descriptor: &'a FieldDescriptor,
        geo: &'a StaticGeoResolver,
    ) -> FieldContext<'a> {
        FieldContext { descriptor, geo }
    }

    #[test]
    fn right_zero_pads_and_strips() {
        let geo = StaticGeoResolver::builtin();
        let descriptor = FieldDescriptor::new(5, 14, 12, "AUXNO", "Auxiliary number");
        let ctx = context(&descriptor, &geo);

        let mut record = DeathRecord::new();
        assert_eq!(
            get_text(&ctx, &record, TextProperty::StateLocalIdentifier, TextFormat::RightZero),
            "000000000000"
        );

        set_text(&mut record, TextProperty::StateLocalIdentifier, TextFormat::RightZero, "000000004321");
        assert_eq!(record.state_local_identifier.as_deref(), Some("4321"));
        assert_eq!(
            get_text(&ctx, &record, TextProperty::StateLocalIdentifier, TextFormat::RightZero),
            "000000004321"
        );
    }

    #[test]
    fn certificate_number_keeps_last_digits() {
        let geo = StaticGeoResolver::builtin();
        let descriptor = FieldDescriptor::new(3, 7, 6, "FILENO", "Certificate number");
        let ctx = context(&descriptor, &geo);
        let format = TextFormat::CertificateNumber {
            zero_when_blank: true,
        };

        let mut record = DeathRecord::new();
        assert_eq!(get_text(&ctx, &record, TextProperty::Identifier, format), "000000");

        record.identifier = Some("2019000123".to_string());
        assert_eq!(get_text(&ctx, &record, TextProperty::Identifier, format), "000123");

        let linking = TextFormat::CertificateNumber {
            zero_when_blank: false,
        };
        assert_eq!(get_text(&ctx, &record, TextProperty::BirthRecordId, linking), "");
    }

    #[test]
    fn middle_initial_does_not_duplicate_middle_name() {
        let mut record = DeathRecord::new();
        set_name(&mut record, NameProperty::GivenNames, NamePart::First, "JOHN ");
        set_name(&mut record, NameProperty::GivenNames, NamePart::Middle, "QUINCY");
        set_name(&mut record, NameProperty::GivenNames, NamePart::MiddleInitial, "Q");
        assert_eq!(record.given_names, ["JOHN", "QUINCY"]);

        let mut record = DeathRecord::new();
        set_name(&mut record, NameProperty::GivenNames, NamePart::First, "JOHN");
        set_name(&mut record, NameProperty::GivenNames, NamePart::MiddleInitial, "Q");
        assert_eq!(record.given_names, ["JOHN", "Q"]);
    }

    #[test]
    fn cause_lines_are_trimmed() {
        let mut record = DeathRecord::new();
        set_cause(&mut record, 2, CausePart::Interval, "  3 days   ");
        assert_eq!(get_cause(&record, 2, CausePart::Interval), "3 days");
        assert_eq!(get_cause(&record, 2, CausePart::Cause), "");
        assert_eq!(get_cause(&record, 7, CausePart::Cause), "");
    }
}
