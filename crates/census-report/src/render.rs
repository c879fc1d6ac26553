//! Console table rendering for counts and cross-tabulations.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::counts::LabelledCounts;
use crate::crosstab::CrossTab;

pub fn counts_table(counts: &LabelledCounts) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(&counts.column), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in counts.labels.iter().zip(&counts.counts) {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn crosstab_table(crosstab: &CrossTab) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell(&format!(
        "{} \\ {}",
        crosstab.row_column, crosstab.col_column
    ))];
    header.extend(crosstab.col_labels.iter().map(|label| header_cell(label)));
    table.set_header(header);
    apply_table_style(&mut table);
    for idx in 1..=crosstab.col_labels.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for (row_label, cells) in crosstab.row_labels.iter().zip(&crosstab.cells) {
        let mut row = vec![
            Cell::new(row_label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        row.extend(cells.iter().map(|&count| count_cell(count)));
        table.add_row(row);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn count_cell(count: u64) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_table_lists_labels_and_total() {
        let counts = LabelledCounts {
            column: "SEX".to_string(),
            labels: vec!["Male".to_string(), "Female".to_string()],
            counts: vec![3, 5],
        };

        let rendered = counts_table(&counts).to_string();

        assert!(rendered.contains("Male"));
        assert!(rendered.contains("Female"));
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains('8'));
    }

    #[test]
    fn crosstab_table_headers_use_column_names() {
        let crosstab = CrossTab {
            row_column: "SEX".to_string(),
            col_column: "REGION".to_string(),
            row_labels: vec!["Female".to_string(), "Male".to_string()],
            col_labels: vec!["North".to_string(), "South".to_string()],
            cells: vec![vec![1, 0], vec![2, 2]],
        };

        let rendered = crosstab_table(&crosstab).to_string();

        assert!(rendered.contains("SEX \\ REGION"));
        assert!(rendered.contains("North"));
        assert!(rendered.contains("Female"));
    }
}
