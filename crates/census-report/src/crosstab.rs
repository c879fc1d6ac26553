use std::collections::{BTreeMap, BTreeSet};

use census_model::{CellValue, CensusError, DataTable, Dictionary, Result};

/// A 2-D table of counts per (row label, column label) pair. Absent
/// combinations are zero-filled. Axis names keep the original column names
/// for table-header clarity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossTab {
    pub row_column: String,
    pub col_column: String,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// `cells[r][c]` is the count for `(row_labels[r], col_labels[c])`.
    pub cells: Vec<Vec<u64>>,
}

impl CrossTab {
    pub fn get(&self, row_label: &str, col_label: &str) -> Option<u64> {
        let row = self.row_labels.iter().position(|label| label == row_label)?;
        let col = self.col_labels.iter().position(|label| label == col_label)?;
        Some(self.cells[row][col])
    }
}

/// Cross-tabulate two columns by their dictionary labels.
///
/// Each code is mapped through its column's code map; rows where either code
/// is unmapped (or the cell is missing) drop out of the grouping. Labels on
/// both axes are sorted alphabetically.
pub fn cross_tabulate(
    table: &DataTable,
    row_column: &str,
    col_column: &str,
    dictionary: &Dictionary,
) -> Result<CrossTab> {
    let row_idx = table
        .column_index(row_column)
        .ok_or_else(|| CensusError::UnknownColumn(row_column.to_string()))?;
    let col_idx = table
        .column_index(col_column)
        .ok_or_else(|| CensusError::UnknownColumn(col_column.to_string()))?;
    let row_map = dictionary.code_map(row_column);
    let col_map = dictionary.code_map(col_column);

    let mut pairs: BTreeMap<(String, String), u64> = BTreeMap::new();
    let mut row_labels: BTreeSet<String> = BTreeSet::new();
    let mut col_labels: BTreeSet<String> = BTreeSet::new();
    for row in &table.rows {
        let Some(CellValue::Text(row_value)) = row.cells.get(row_idx) else {
            continue;
        };
        let Some(CellValue::Text(col_value)) = row.cells.get(col_idx) else {
            continue;
        };
        let Some(row_label) = row_map.get(row_value.trim()) else {
            continue;
        };
        let Some(col_label) = col_map.get(col_value.trim()) else {
            continue;
        };
        row_labels.insert(row_label.clone());
        col_labels.insert(col_label.clone());
        *pairs
            .entry((row_label.clone(), col_label.clone()))
            .or_insert(0) += 1;
    }

    let row_labels: Vec<String> = row_labels.into_iter().collect();
    let col_labels: Vec<String> = col_labels.into_iter().collect();
    let cells = row_labels
        .iter()
        .map(|row_label| {
            col_labels
                .iter()
                .map(|col_label| {
                    pairs
                        .get(&(row_label.clone(), col_label.clone()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();
    Ok(CrossTab {
        row_column: row_column.to_string(),
        col_column: col_column.to_string(),
        row_labels,
        col_labels,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    fn dictionary() -> Dictionary {
        let mut dictionary = Dictionary::new();
        dictionary.insert(
            "SEX",
            Map::from([
                ("1".to_string(), "Male".to_string()),
                ("2".to_string(), "Female".to_string()),
            ]),
        );
        dictionary.insert(
            "REGION",
            Map::from([
                ("1".to_string(), "North".to_string()),
                ("2".to_string(), "South".to_string()),
            ]),
        );
        dictionary
    }

    fn table(rows: &[(&str, &str)]) -> DataTable {
        let mut table = DataTable::new(vec!["SEX".to_string(), "REGION".to_string()]);
        for (sex, region) in rows {
            let cell = |value: &str| {
                if value.is_empty() {
                    CellValue::Missing
                } else {
                    CellValue::Text(value.to_string())
                }
            };
            table.push_row(vec![cell(sex), cell(region)]);
        }
        table
    }

    #[test]
    fn counts_pairs_and_zero_fills_missing_combinations() {
        // No female/south observation: must report 0, not a missing entry.
        let crosstab = cross_tabulate(
            &table(&[("1", "1"), ("1", "2"), ("2", "1"), ("1", "2")]),
            "SEX",
            "REGION",
            &dictionary(),
        )
        .unwrap();

        assert_eq!(crosstab.row_labels, vec!["Female", "Male"]);
        assert_eq!(crosstab.col_labels, vec!["North", "South"]);
        assert_eq!(crosstab.get("Male", "South"), Some(2));
        assert_eq!(crosstab.get("Female", "South"), Some(0));
        assert_eq!(crosstab.get("Female", "North"), Some(1));
    }

    #[test]
    fn unmapped_codes_drop_out_of_grouping() {
        let crosstab = cross_tabulate(
            &table(&[("1", "1"), ("9", "1"), ("1", "9")]),
            "SEX",
            "REGION",
            &dictionary(),
        )
        .unwrap();

        assert_eq!(crosstab.row_labels, vec!["Male"]);
        assert_eq!(crosstab.col_labels, vec!["North"]);
        assert_eq!(crosstab.get("Male", "North"), Some(1));
    }

    #[test]
    fn axis_names_are_the_original_column_names() {
        let crosstab =
            cross_tabulate(&table(&[("1", "1")]), "SEX", "REGION", &dictionary()).unwrap();
        assert_eq!(crosstab.row_column, "SEX");
        assert_eq!(crosstab.col_column, "REGION");
    }

    #[test]
    fn unknown_column_is_an_error() {
        let result = cross_tabulate(&table(&[("1", "1")]), "SEX", "AGE", &dictionary());
        assert!(result.is_err());
    }
}
