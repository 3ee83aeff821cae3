//! Value codecs.
//!
//! A [`FieldCodec`] says how one fixed-width field maps onto the structured
//! record. Getters derive the field text from the whole record; setters
//! apply one slice of input text to the record being decoded. Neither ever
//! fails: text that does not fit a codec's expected shape leaves the record
//! unchanged.
//!
//! The codec families live in submodules:
//!
//! - [`text`]: justified strings, certificate numbers, names, cause lines
//! - [`date`]: one component of a timestamp
//! - [`keyed`]: address maps, optionally translated through the geo resolver
//! - [`coded`]: domain code tables and Yes/No/Unknown flags
//! - [`race`]: race checkboxes and literals, Hispanic origin

pub mod coded;
pub mod date;
pub mod keyed;
pub mod race;
pub mod text;

use ije_model::{
    AddressProperty, CodedProperty, DateProperty, DeathRecord, FlagProperty, NameProperty,
    TextProperty,
};
use ije_terminology::ethnicity::Ethnicity;
use ije_terminology::{CodeTable, GeoResolver};

use crate::registry::FieldDescriptor;

pub use date::{DatePart, DateStyle};
pub use keyed::{AddressPart, GeoKey, GeoMode};
pub use race::RaceGroup;
pub use text::{CausePart, NamePart, TextFormat};

/// Everything a getter or setter may consult besides the record.
#[derive(Clone, Copy)]
pub struct FieldContext<'a> {
    pub descriptor: &'a FieldDescriptor,
    pub geo: &'a dyn GeoResolver,
}

impl FieldContext<'_> {
    pub fn key(&self) -> &'static str {
        self.descriptor.key
    }

    pub fn width(&self) -> usize {
        self.descriptor.width
    }
}

/// Derives a field's text from the record.
pub type Getter = fn(&FieldContext<'_>, &DeathRecord) -> String;
/// Applies a field's text to the record.
pub type Setter = fn(&FieldContext<'_>, &mut DeathRecord, &str);

/// How one field reads from and writes to the structured record.
#[derive(Clone, Copy)]
pub enum FieldCodec {
    /// Fixed output; input is ignored.
    Constant(&'static str),
    Text {
        property: TextProperty,
        format: TextFormat,
    },
    Name {
        property: NameProperty,
        part: NamePart,
    },
    Date {
        property: DateProperty,
        part: DatePart,
        style: DateStyle,
    },
    Coded {
        property: CodedProperty,
        table: &'static CodeTable,
    },
    YesNoUnknown {
        property: FlagProperty,
        strict: bool,
    },
    Address {
        property: AddressProperty,
        part: AddressPart,
        mode: GeoMode,
    },
    /// Literal city that also infers the county (and optionally the country).
    CityWithCounty {
        property: AddressProperty,
        sets_country: bool,
    },
    Cause {
        line: usize,
        part: CausePart,
    },
    RaceCheckbox {
        display: &'static str,
        code: &'static str,
    },
    /// "Other" race flag: set when the group has any literal.
    RaceOther(RaceGroup),
    RaceLiteral {
        group: RaceGroup,
        index: usize,
    },
    /// Hispanic origin checkbox; `None` is the "other" checkbox.
    HispanicOrigin(Option<Ethnicity>),
    HispanicLiteral,
    Custom {
        get: Getter,
        set: Setter,
    },
}

impl FieldCodec {
    /// Field text derived from the record (not yet fitted to width).
    pub fn get(&self, ctx: &FieldContext<'_>, record: &DeathRecord) -> String {
        match *self {
            Self::Constant(value) => value.to_string(),
            Self::Text { property, format } => text::get_text(ctx, record, property, format),
            Self::Name { property, part } => text::get_name(record, property, part),
            Self::Date {
                property, part, ..
            } => date::get_part(record.date(property), part, ctx.width()),
            Self::Coded { property, table } => coded::get_coded(record, property, table),
            Self::YesNoUnknown { property, .. } => coded::get_ynu(record.flag(property)),
            Self::Address {
                property,
                part,
                mode,
            } => keyed::get_address(ctx, record.address(property), part, mode),
            Self::CityWithCounty { property, .. } => keyed::get_address(
                ctx,
                record.address(property),
                AddressPart::City,
                GeoMode::Literal,
            ),
            Self::Cause { line, part } => text::get_cause(record, line, part),
            Self::RaceCheckbox { display, code } => race::get_checkbox(record, display, code),
            Self::RaceOther(group) => race::get_other(record, group),
            Self::RaceLiteral { group, index } => race::get_literal(record, group, index),
            Self::HispanicOrigin(origin) => race::get_hispanic(record, origin),
            Self::HispanicLiteral => race::get_hispanic_literal(record),
            Self::Custom { get, .. } => get(ctx, record),
        }
    }

    /// Apply non-blank field text to the record.
    pub fn set(&self, ctx: &FieldContext<'_>, record: &mut DeathRecord, value: &str) {
        match *self {
            Self::Constant(_) => {}
            Self::Text { property, format } => text::set_text(record, property, format, value),
            Self::Name { property, part } => text::set_name(record, property, part, value),
            Self::Date {
                property,
                part,
                style,
            } => {
                let slot = record.date_mut(property);
                if let Some(updated) = date::set_part(slot.as_deref(), part, style, value) {
                    *slot = Some(updated);
                } else {
                    tracing::trace!(field = ctx.key(), "date component ignored");
                }
            }
            Self::Coded { property, table } => coded::set_coded(ctx, record, property, table, value),
            Self::YesNoUnknown { property, strict } => {
                coded::set_ynu(record.flag_mut(property), strict, value);
            }
            Self::Address {
                property,
                part,
                mode,
            } => keyed::set_address(ctx, record.address_mut(property), part, mode, value),
            Self::CityWithCounty {
                property,
                sets_country,
            } => keyed::set_city_with_county(ctx, record.address_mut(property), sets_country, value),
            Self::Cause { line, part } => text::set_cause(record, line, part, value),
            Self::RaceCheckbox { display, code } => {
                race::set_checkbox(record, display, code, value);
            }
            Self::RaceOther(_) => {}
            Self::RaceLiteral { group, .. } => race::set_literal(ctx, record, group, value),
            Self::HispanicOrigin(origin) => race::set_hispanic(record, origin, value),
            Self::HispanicLiteral => race::set_hispanic_literal(record, value),
            Self::Custom { set, .. } => set(ctx, record, value),
        }
    }

    /// True when decoding this field never changes the record.
    pub fn is_read_only(&self) -> bool {
        match self {
            Self::Constant(_) | Self::RaceOther(_) => true,
            Self::Address { mode, .. } => *mode == GeoMode::ReadOnly,
            _ => false,
        }
    }
}

/// Truncate or right-pad `value` with spaces to exactly `width` characters.
pub fn fit(value: &str, width: usize) -> String {
    let mut fitted: String = value.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat_n(' ', width - len));
    fitted
}

/// `width` spaces.
pub fn blank(width: usize) -> String {
    " ".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_truncates_and_pads() {
        assert_eq!(fit("JOHN", 6), "JOHN  ");
        assert_eq!(fit("JOHNATHAN", 4), "JOHN");
        assert_eq!(fit("", 2), "  ");
        assert_eq!(fit("ÉLODIE", 3), "ÉLO");
    }
}
