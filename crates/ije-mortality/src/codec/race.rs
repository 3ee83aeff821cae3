//! Race checkboxes, race literals and Hispanic origin.

use ije_model::{CodedEntry, DeathRecord};
use ije_terminology::RaceCategory;
use ije_terminology::ethnicity::{self, Ethnicity};
use ije_terminology::race;
use tracing::trace;

use super::FieldContext;

const YES: &str = "Y";
const NO: &str = "N";
const HISPANIC: &str = "H";

/// Pool of race literals a field reads from.
#[derive(Debug, Clone, Copy)]
pub enum RaceGroup {
    /// One CDC category, minus the races that have their own checkbox.
    Category(&'static RaceCategory),
    /// White and Black or African American literals.
    Other,
}

impl RaceGroup {
    fn literals(self, race: &[CodedEntry]) -> Vec<&str> {
        match self {
            Self::Category(category) => category.literals(race),
            Self::Other => race::other_literals(race),
        }
    }

    fn code_for_name(self, name: &str) -> Option<&'static str> {
        match self {
            Self::Category(category) => category.code_for_name(name),
            Self::Other => race::other_code_for_name(name),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Category(category) => category.name,
            Self::Other => "Other",
        }
    }
}

fn flag(set: bool) -> String {
    if set { YES } else { NO }.to_string()
}

pub(crate) fn get_checkbox(record: &DeathRecord, display: &str, code: &str) -> String {
    flag(race::has_race(&record.race, display, code))
}

pub(crate) fn set_checkbox(record: &mut DeathRecord, display: &str, code: &str, value: &str) {
    if value.trim() == YES {
        race::add_race(&mut record.race, CodedEntry::new(display, code));
    }
}

/// `Y` when the group has at least one literal.
pub(crate) fn get_other(record: &DeathRecord, group: RaceGroup) -> String {
    flag(!group.literals(&record.race).is_empty())
}

pub(crate) fn get_literal(record: &DeathRecord, group: RaceGroup, index: usize) -> String {
    group
        .literals(&record.race)
        .get(index)
        .map(|literal| (*literal).to_string())
        .unwrap_or_default()
}

/// Add a literal race when its name resolves to a code in the group.
pub(crate) fn set_literal(
    ctx: &FieldContext<'_>,
    record: &mut DeathRecord,
    group: RaceGroup,
    value: &str,
) {
    let name = value.trim();
    if name.is_empty() {
        return;
    }
    match group.code_for_name(name) {
        Some(code) => race::add_race(&mut record.race, CodedEntry::new(name, code)),
        None => trace!(field = ctx.key(), group = group.name(), "unresolved race literal"),
    }
}

/// `H` when the record lists the origin. The "other" box (`None`) is `H`
/// when the record is Hispanic without any of the listed origins.
pub(crate) fn get_hispanic(record: &DeathRecord, origin: Option<Ethnicity>) -> String {
    let ethnicity = &record.ethnicity;
    let set = match origin {
        Some(origin) => ethnicity::has_origin(ethnicity, origin),
        None => {
            ethnicity::is_hispanic(ethnicity)
                && !ethnicity::LISTED_ORIGINS
                    .iter()
                    .any(|&origin| ethnicity::has_origin(ethnicity, origin))
        }
    };
    if set { HISPANIC } else { NO }.to_string()
}

pub(crate) fn set_hispanic(record: &mut DeathRecord, origin: Option<Ethnicity>, value: &str) {
    if value.trim() == HISPANIC {
        ethnicity::mark_hispanic(&mut record.ethnicity, origin.map(Ethnicity::entry));
    } else {
        ethnicity::mark_not_hispanic(&mut record.ethnicity);
    }
}

/// First origin that is not one of the fixed concepts.
pub(crate) fn get_hispanic_literal(record: &DeathRecord) -> String {
    ethnicity::other_origins(&record.ethnicity)
        .next()
        .map(|entry| entry.display.clone())
        .unwrap_or_default()
}

pub(crate) fn set_hispanic_literal(record: &mut DeathRecord, value: &str) {
    let name = value.trim();
    if name.is_empty() {
        return;
    }
    let code = ethnicity::code_for_name(name).unwrap_or_default();
    ethnicity::mark_hispanic(&mut record.ethnicity, Some(CodedEntry::new(name, code)));
}

#[cfg(test)]
mod tests {
    use ije_terminology::StaticGeoResolver;
    use ije_terminology::ethnicity::{CUBAN, MEXICAN, NON_HISPANIC};
    use ije_terminology::race::{ASIAN, WHITE};

    use super::*;
    use crate::registry::FieldDescriptor;

    #[test]
    fn checkbox_adds_once() {
        let mut record = DeathRecord::new();
        set_checkbox(&mut record, "White", "2106-3", "Y");
        set_checkbox(&mut record, "White", "2106-3", "Y");
        set_checkbox(&mut record, "Black or African American", "2054-5", "N");
        assert_eq!(record.race.len(), 1);
        assert_eq!(get_checkbox(&record, "White", "2106-3"), "Y");
        assert_eq!(get_checkbox(&record, "Black or African American", "2054-5"), "N");
    }

    #[test]
    fn literals_skip_checkbox_races() {
        let mut record = DeathRecord::new();
        record.race = vec![
            CodedEntry::new("White", "2106-3"),
            CodedEntry::new("Arab", "2129-5"),
        ];
        assert_eq!(get_literal(&record, RaceGroup::Other, 0), "Arab");
        assert_eq!(get_literal(&record, RaceGroup::Other, 1), "");
        assert_eq!(get_other(&record, RaceGroup::Other), "Y");
        assert_eq!(get_other(&record, RaceGroup::Category(&ASIAN)), "N");
        assert_eq!(get_literal(&record, RaceGroup::Category(&WHITE), 0), "Arab");
    }

    #[test]
    fn unknown_literal_is_not_added() {
        let geo = StaticGeoResolver::builtin();
        let descriptor = FieldDescriptor::new(1, 1, 30, "RACE22", "Other literal");
        let ctx = FieldContext {
            descriptor: &descriptor,
            geo: &geo,
        };
        let mut record = DeathRecord::new();
        set_literal(&ctx, &mut record, RaceGroup::Other, "Martian");
        assert!(record.race.is_empty());

        set_literal(&ctx, &mut record, RaceGroup::Other, " arab ");
        assert_eq!(record.race, [CodedEntry::new("arab", "2129-5")]);
    }

    #[test]
    fn hispanic_origin_replaces_non_hispanic() {
        let mut record = DeathRecord::new();
        set_hispanic(&mut record, Some(MEXICAN), "N");
        assert_eq!(record.ethnicity, [NON_HISPANIC.entry()]);
        assert_eq!(get_hispanic(&record, Some(MEXICAN)), "N");

        set_hispanic(&mut record, Some(MEXICAN), "H");
        assert_eq!(get_hispanic(&record, Some(MEXICAN)), "H");
        assert_eq!(get_hispanic(&record, Some(CUBAN)), "N");
        assert_eq!(get_hispanic(&record, None), "N");
        assert!(!record.ethnicity.iter().any(|e| NON_HISPANIC.matches(e)));
    }

    #[test]
    fn other_origin_with_literal() {
        let mut record = DeathRecord::new();
        set_hispanic(&mut record, None, "H");
        set_hispanic_literal(&mut record, "Chilean ");
        assert_eq!(get_hispanic(&record, None), "H");
        assert_eq!(get_hispanic_literal(&record), "Chilean");
    }
}
