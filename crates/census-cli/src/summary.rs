use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::RefineSummary;

pub fn print_refine_summary(summary: &RefineSummary) {
    println!("Input: {}", summary.input_file.display());
    println!("Output: {}", summary.output_file.display());
    if let Some(path) = &summary.removed_output {
        println!("Removed: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(summary.report.input_rows),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(summary.report.duplicates_removed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Rejected"),
        count_cell(summary.report.rejected_rows, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Kept")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.report.kept_rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Verified"), verified_cell(summary.verified)]);
    println!("{table}");

    print_column_breakdown(summary);
}

fn print_column_breakdown(summary: &RefineSummary) {
    let has_flags = summary
        .report
        .columns
        .values()
        .any(|column| column.nulls > 0 || column.invalid_codes > 0);
    if !has_flags {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Nulls"),
        header_cell("Invalid codes"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (column, report) in &summary.report.columns {
        table.add_row(vec![
            Cell::new(column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(report.nulls, Color::Yellow),
            count_cell(report.invalid_codes, Color::Red),
        ]);
    }
    println!();
    println!("Quarantined values:");
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn verified_cell(verified: Option<bool>) -> Cell {
    match verified {
        Some(true) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Some(false) => Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
