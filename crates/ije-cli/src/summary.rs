use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ije_cli::logging::{log_data_enabled, redact_value};
use ije_model::{CodedValue, DeathRecord};
use ije_mortality::{FieldDescriptor, FieldDifference};

/// One decoded record with its input line number.
pub struct InspectedRecord {
    pub line: usize,
    pub record: DeathRecord,
}

/// Round-trip outcome for one input line.
pub struct RoundtripOutcome {
    pub line: usize,
    pub differences: Vec<FieldDifference>,
}

pub fn print_inspection(records: &[InspectedRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Decedent"),
        header_cell("SSN"),
        header_cell("Died"),
        header_cell("Certifier"),
        header_cell("Causes"),
        header_cell("Autopsy"),
        header_cell("Manner"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    for inspected in records {
        let record = &inspected.record;
        table.add_row(vec![
            dim_cell(inspected.line),
            optional_cell(full_name(&record.given_names, record.family_name.as_deref())),
            optional_cell(record.ssn.clone()),
            optional_cell(record.date_of_death.clone()),
            optional_cell(full_name(
                &record.certifier_given_names,
                record.certifier_family_name.as_deref(),
            )),
            optional_cell(causes(record)),
            optional_cell(display(record.autopsy_performed.as_ref())),
            optional_cell(display(record.manner_of_death.as_ref())),
        ]);
    }
    println!("{table}");
    println!("{} record(s)", records.len());
}

pub fn print_fields<'a>(fields: impl IntoIterator<Item = &'a FieldDescriptor>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Key"),
        header_cell("Offset"),
        header_cell("Width"),
        header_cell("Priority"),
        header_cell("Contents"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 2, 3, 4] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for field in fields {
        let priority = if field.priority > 1 {
            Cell::new(field.priority).fg(Color::Yellow)
        } else {
            dim_cell(field.priority)
        };
        table.add_row(vec![
            dim_cell(field.ordinal),
            Cell::new(field.key).add_attribute(Attribute::Bold),
            Cell::new(field.offset),
            Cell::new(field.width),
            priority,
            Cell::new(field.contents),
        ]);
    }
    println!("{table}");
}

pub fn print_roundtrip(outcomes: &[RoundtripOutcome]) {
    let changed: usize = outcomes.iter().filter(|o| !o.differences.is_empty()).count();
    if changed == 0 {
        println!("{} record(s) round-trip without changes", outcomes.len());
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Field"),
        header_cell("Input"),
        header_cell("Re-encoded"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for outcome in outcomes {
        for difference in &outcome.differences {
            table.add_row(vec![
                dim_cell(outcome.line),
                Cell::new(difference.key).fg(Color::Red).add_attribute(Attribute::Bold),
                Cell::new(quoted(redact_value(&difference.expected))),
                Cell::new(quoted(redact_value(&difference.actual))),
            ]);
        }
    }
    println!("{table}");
    println!("{changed} of {} record(s) changed", outcomes.len());
    if !log_data_enabled() {
        println!("field values hidden; pass --log-data to show them");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn full_name(given: &[String], family: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = given
        .iter()
        .map(String::as_str)
        .chain(family)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

fn causes(record: &DeathRecord) -> Option<String> {
    let lines: Vec<&str> = record
        .causes_of_death
        .iter()
        .filter_map(|line| line.cause.as_deref())
        .filter(|cause| !cause.trim().is_empty())
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

fn display(value: Option<&CodedValue>) -> Option<String> {
    value.map(|coded| coded.display.clone())
}

/// Field text with its padding visible.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.trim_end())
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_non_empty_parts() {
        let given = vec!["JOHN".to_string(), " ".to_string(), "Q".to_string()];
        assert_eq!(full_name(&given, Some("SMITH")).as_deref(), Some("JOHN Q SMITH"));
        assert_eq!(full_name(&[], None), None);
    }

    #[test]
    fn differences_are_redacted_by_default() {
        let difference = FieldDifference {
            key: "SSN",
            expected: "123456789".to_string(),
            actual: "         ".to_string(),
        };
        assert_eq!(quoted(redact_value(&difference.expected)), "\"[REDACTED]\"");
    }

    #[test]
    fn causes_are_listed_one_per_line() {
        let mut record = DeathRecord::new();
        record.causes_of_death[0].cause = Some("Cardiac arrest".to_string());
        record.causes_of_death[2].cause = Some("Hypertension".to_string());
        assert_eq!(causes(&record).as_deref(), Some("Cardiac arrest\nHypertension"));
        assert_eq!(causes(&DeathRecord::new()), None);
    }
}
