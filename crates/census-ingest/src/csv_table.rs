use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use census_model::{CellValue, DataTable};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a comma-separated file with a header row into a [`DataTable`].
///
/// Cells are trimmed; empty cells load as [`CellValue::Missing`]. Records
/// shorter than the header are padded with missing cells, longer ones are
/// truncated to the header width.
pub fn read_csv_table(path: &Path) -> Result<DataTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read header: {}", path.display()))?
        .clone();
    let columns: Vec<String> = headers.iter().map(normalize_header).collect();
    let mut table = DataTable::new(columns);
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut cells = Vec::with_capacity(table.columns.len());
        for idx in 0..table.columns.len() {
            let value = normalize_cell(record.get(idx).unwrap_or(""));
            cells.push(if value.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(value)
            });
        }
        table.push_row(cells);
    }
    debug!(path = %path.display(), records = table.len(), "read csv table");
    Ok(table)
}

/// Write a table as header + rows, with missing cells as empty fields and no
/// index column.
pub fn write_csv_table(path: &Path, table: &DataTable) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        let record: Vec<&str> = row
            .cells
            .iter()
            .map(|cell| cell.as_text().unwrap_or(""))
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

/// Count data records (excluding the header) in a previously written file.
/// Used for the post-write verification re-read.
pub fn read_record_count(path: &Path) -> Result<usize> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("re-read csv: {}", path.display()))?;
    let mut count = 0usize;
    for record in reader.records() {
        record.with_context(|| format!("re-read record: {}", path.display()))?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_trimmed_cells_and_missing_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        std::fs::write(&path, "SerialNum,SEX\n 1 ,2\n2,\n").unwrap();

        let table = read_csv_table(&path).unwrap();

        assert_eq!(table.columns, vec!["SerialNum", "SEX"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells[0], CellValue::Text("1".to_string()));
        assert_eq!(table.rows[1].cells[1], CellValue::Missing);
    }

    #[test]
    fn strips_bom_from_first_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.csv");
        std::fs::write(&path, "\u{feff}SerialNum,SEX\n1,1\n").unwrap();

        let table = read_csv_table(&path).unwrap();

        assert_eq!(table.columns[0], "SerialNum");
    }

    #[test]
    fn short_records_pad_with_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.csv");
        std::fs::write(&path, "A,B,C\n1,2\n").unwrap();

        let table = read_csv_table(&path).unwrap();

        assert_eq!(table.rows[0].cells.len(), 3);
        assert_eq!(table.rows[0].cells[2], CellValue::Missing);
    }

    #[test]
    fn write_then_count_matches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut table = DataTable::new(vec!["SerialNum".to_string(), "SEX".to_string()]);
        table.push_row(vec![
            CellValue::Text("1".to_string()),
            CellValue::Text("2".to_string()),
        ]);
        table.push_row(vec![CellValue::Text("2".to_string()), CellValue::Missing]);

        write_csv_table(&path, &table).unwrap();

        assert_eq!(read_record_count(&path).unwrap(), 2);
        let round = read_csv_table(&path).unwrap();
        assert_eq!(round.columns, table.columns);
        assert_eq!(round.rows[1].cells[1], CellValue::Missing);
    }
}
