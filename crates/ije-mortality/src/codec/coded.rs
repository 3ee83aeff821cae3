//! Domain code tables and Yes/No/Unknown flags.

use ije_model::{CodedProperty, DeathRecord};
use ije_terminology::CodeTable;
use tracing::trace;

use super::FieldContext;

/// Short code for the stored coded value; blank when unmapped.
pub(crate) fn get_coded(record: &DeathRecord, property: CodedProperty, table: &CodeTable) -> String {
    record
        .coded(property)
        .and_then(|value| table.short_for(&value.code))
        .unwrap_or_default()
        .to_string()
}

/// Store the full coded triple for a short code; unknown codes are ignored.
pub(crate) fn set_coded(
    ctx: &FieldContext<'_>,
    record: &mut DeathRecord,
    property: CodedProperty,
    table: &CodeTable,
    value: &str,
) {
    let value = value.trim();
    match table.coded_for(value) {
        Some(coded) => *record.coded_mut(property) = Some(coded),
        None => trace!(field = ctx.key(), table = table.name(), "unmapped short code"),
    }
}

pub(crate) fn get_ynu(flag: Option<bool>) -> String {
    match flag {
        None => "U",
        Some(true) => "Y",
        Some(false) => "N",
    }
    .to_string()
}

/// `Y` sets, `N` clears. Anything else leaves the flag alone, or, when
/// `strict`, resets it to unknown.
pub(crate) fn set_ynu(flag: &mut Option<bool>, strict: bool, value: &str) {
    match value.trim() {
        "Y" => *flag = Some(true),
        "N" => *flag = Some(false),
        _ if strict => *flag = None,
        _ => {}
    }
}
