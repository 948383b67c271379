use std::fmt::Display;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use sched_core::{EntryInspection, IngestSummary, PassReport, SkippedEntry};

use crate::types::IngestRun;

pub fn print_summary(run: &IngestRun) {
    println!("Feed: {}", run.feed.display());
    println!("Semester: {}", run.semester);
    if run.seed.courses + run.seed.semesters + run.seed.groups > 0 {
        println!(
            "Seeded: {} course(s), {} semester(s), {} group(s)",
            run.seed.courses, run.seed.semesters, run.seed.groups
        );
    }
    if let Some(path) = &run.output {
        println!("Output: {}", path.display());
    }
    println!("{}", summary_table(&run.summary));
    if run.summary.has_skipped() {
        println!();
        println!("Skipped entries:");
        println!("{}", skipped_table(&run.summary.skipped));
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_entries(inspections: &[EntryInspection]) {
    if inspections.is_empty() {
        println!("No entries.");
        return;
    }
    println!("{}", entries_table(inspections));
}

pub fn summary_table(summary: &IngestSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Created"),
        header_cell("Duplicates"),
        header_cell("Stopped at"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    for (label, pass) in [
        ("Rooms", &summary.rooms),
        ("Teachers", &summary.teachers),
        ("Subjects", &summary.subjects),
    ] {
        table.add_row(pass_row(label, pass));
    }
    table.add_row(vec![
        Cell::new("Semester subjects"),
        Cell::new(summary.semester_subjects),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Lessons")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.lessons).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(summary.skipped.len(), Color::Yellow),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

pub fn skipped_table(skipped: &[SkippedEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entry"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in skipped {
        table.add_row(vec![
            Cell::new(entry.entry),
            optional_cell(entry.field.as_ref()),
            optional_cell(entry.value.as_ref()),
            Cell::new(&entry.message),
        ]);
    }
    table
}

pub fn entries_table(inspections: &[EntryInspection]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Subject"),
        header_cell("Type"),
        header_cell("Teacher"),
        header_cell("Room"),
        header_cell("Campus"),
        header_cell("Time"),
        header_cell("Day"),
        header_cell("Week"),
        header_cell("Group"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for inspection in inspections {
        table.add_row(vec![
            Cell::new(inspection.entry),
            Cell::new(&inspection.subject),
            classified_cell(&inspection.lesson_type),
            Cell::new(&inspection.teacher),
            Cell::new(&inspection.room),
            Cell::new(inspection.campus),
            classified_cell(&inspection.time_slot),
            classified_cell(&inspection.day),
            classified_cell(&inspection.week),
            Cell::new(&inspection.group),
        ]);
    }
    table
}

fn pass_row(label: &str, pass: &PassReport) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(pass.created),
        count_cell(pass.duplicates, Color::DarkYellow),
        match pass.stopped_at {
            Some(index) => Cell::new(format!("entry {index}"))
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            None => dim_cell("-"),
        },
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(18)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn classified_cell<T: Display>(value: &Result<T, String>) -> Cell {
    match value {
        Ok(value) => Cell::new(value),
        Err(_) => Cell::new("invalid")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn optional_cell<T: Display>(value: Option<&T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
