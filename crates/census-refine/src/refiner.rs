use std::collections::{BTreeMap, BTreeSet};

use census_model::{CellValue, CensusError, DataTable, Dictionary, Result, Row};

/// Per-column counts of quarantined values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnReport {
    /// Rows with a missing value in this column.
    pub nulls: usize,
    /// Rows whose value is not an admissible code for this column.
    pub invalid_codes: usize,
}

/// Counts collected during a refinement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefineReport {
    pub input_rows: usize,
    pub duplicates_removed: usize,
    pub kept_rows: usize,
    pub rejected_rows: usize,
    /// Breakdown per dictionary column, keyed by column name.
    pub columns: BTreeMap<String, ColumnReport>,
}

/// Partition of the deduplicated input into clean and quarantined records.
#[derive(Debug, Clone)]
pub struct RefineOutcome {
    /// Valid records, ordinals renumbered from zero.
    pub refined: DataTable,
    /// Quarantined records in original order, keeping their load-time ordinals.
    pub rejected: DataTable,
    pub report: RefineReport,
}

/// Validate and clean a record set against a data dictionary.
///
/// Pure function of `(table, dictionary, id_column)`:
///
/// 1. Every dictionary column must exist in the table, otherwise the whole
///    operation fails with [`CensusError::MissingColumns`].
/// 2. Duplicate identifiers are removed, keeping the first occurrence in
///    original order. Rows with a missing identifier are kept as distinct
///    records, never collapsed into one duplicate group.
/// 3. For each dictionary column, rows with a missing value or with a value
///    outside the column's code map are flagged. Flags accumulate in a set of
///    row ordinals, so a row failing several columns is quarantined once.
/// 4. Flagged rows form the rejected set; everything else forms the refined
///    set with ordinals renumbered from zero.
pub fn refine(table: &DataTable, dictionary: &Dictionary, id_column: &str) -> Result<RefineOutcome> {
    let missing: Vec<String> = dictionary
        .columns()
        .filter(|column| table.column_index(column).is_none())
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(CensusError::MissingColumns { columns: missing });
    }
    let Some(id_idx) = table.column_index(id_column) else {
        return Err(CensusError::UnknownColumn(id_column.to_string()));
    };

    let mut seen = BTreeSet::new();
    let mut deduped: Vec<&Row> = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let key = row
            .cells
            .get(id_idx)
            .and_then(CellValue::as_text)
            .map(str::trim)
            .unwrap_or("");
        if key.is_empty() {
            deduped.push(row);
            continue;
        }
        if seen.insert(key.to_string()) {
            deduped.push(row);
        }
    }
    let duplicates_removed = table.rows.len() - deduped.len();

    let mut flagged: BTreeSet<usize> = BTreeSet::new();
    let mut columns: BTreeMap<String, ColumnReport> = BTreeMap::new();
    for column in dictionary.columns() {
        let Some(idx) = table.column_index(column) else {
            continue;
        };
        let codes = dictionary.code_map(column);
        let entry = columns.entry(column.to_string()).or_default();
        for row in &deduped {
            match row.cells.get(idx) {
                Some(CellValue::Text(value)) => {
                    if !codes.contains_key(value.trim()) {
                        entry.invalid_codes += 1;
                        flagged.insert(row.ordinal);
                    }
                }
                _ => {
                    entry.nulls += 1;
                    flagged.insert(row.ordinal);
                }
            }
        }
    }

    let mut refined = DataTable::new(table.columns.clone());
    let mut rejected = DataTable::new(table.columns.clone());
    for row in deduped {
        if flagged.contains(&row.ordinal) {
            rejected.rows.push(row.clone());
        } else {
            refined.push_row(row.cells.clone());
        }
    }

    let report = RefineReport {
        input_rows: table.rows.len(),
        duplicates_removed,
        kept_rows: refined.rows.len(),
        rejected_rows: rejected.rows.len(),
        columns,
    };
    Ok(RefineOutcome {
        refined,
        rejected,
        report,
    })
}
