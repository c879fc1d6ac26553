use std::collections::{BTreeMap, BTreeSet};

use census_model::{CellValue, CensusError, DataTable, Dictionary, Result, compare_codes, label_for};

/// Index-aligned labels and counts for one column, sorted by underlying code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledCounts {
    pub column: String,
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

impl LabelledCounts {
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Per-distinct-value counts for a column, sorted by code (numeric-aware) and
/// mapped to dictionary labels. Codes absent from the dictionary keep the
/// synthetic `Code {code}` label. Missing cells are excluded from the tally.
pub fn labelled_counts(
    table: &DataTable,
    column: &str,
    dictionary: &Dictionary,
) -> Result<LabelledCounts> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| CensusError::UnknownColumn(column.to_string()))?;
    let mut tally: BTreeMap<String, u64> = BTreeMap::new();
    for row in &table.rows {
        if let Some(CellValue::Text(value)) = row.cells.get(idx) {
            *tally.entry(value.trim().to_string()).or_insert(0) += 1;
        }
    }
    let mut entries: Vec<(String, u64)> = tally.into_iter().collect();
    entries.sort_by(|left, right| compare_codes(&left.0, &right.0));

    let codes = dictionary.code_map(column);
    let mut labels = Vec::with_capacity(entries.len());
    let mut counts = Vec::with_capacity(entries.len());
    for (code, count) in entries {
        labels.push(label_for(codes, &code));
        counts.push(count);
    }
    Ok(LabelledCounts {
        column: column.to_string(),
        labels,
        counts,
    })
}

/// Restrict the table to rows whose filter-column value is in `accepted`,
/// then count the summary column over the subset.
pub fn filtered_counts(
    table: &DataTable,
    filter_column: &str,
    accepted: &[String],
    summary_column: &str,
    dictionary: &Dictionary,
) -> Result<LabelledCounts> {
    let idx = table
        .column_index(filter_column)
        .ok_or_else(|| CensusError::UnknownColumn(filter_column.to_string()))?;
    let accepted: BTreeSet<&str> = accepted.iter().map(|code| code.trim()).collect();
    let mut subset = DataTable::new(table.columns.clone());
    for row in &table.rows {
        if let Some(CellValue::Text(value)) = row.cells.get(idx)
            && accepted.contains(value.trim())
        {
            subset.push_row(row.cells.clone());
        }
    }
    labelled_counts(&subset, summary_column, dictionary)
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
    fn counts_sort_by_code_and_map_labels() {
        let table = table(&[("2", "1"), ("1", "1"), ("2", "2"), ("2", "1"), ("1", "2")]);

        let counts = labelled_counts(&table, "SEX", &dictionary()).unwrap();

        assert_eq!(counts.labels, vec!["Male", "Female"]);
        assert_eq!(counts.counts, vec![2, 3]);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn unmapped_codes_get_synthetic_labels() {
        let table = table(&[("1", "1"), ("9", "1")]);

        let counts = labelled_counts(&table, "SEX", &dictionary()).unwrap();

        assert_eq!(counts.labels, vec!["Male", "Code 9"]);
    }

    #[test]
    fn missing_cells_are_excluded_from_tally() {
        let table = table(&[("1", "1"), ("", "1")]);

        let counts = labelled_counts(&table, "SEX", &dictionary()).unwrap();

        assert_eq!(counts.counts, vec![1]);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let table = table(&[("1", "1")]);
        assert!(labelled_counts(&table, "AGE", &dictionary()).is_err());
    }

    #[test]
    fn filtered_counts_restrict_to_accepted_codes() {
        let table = table(&[("1", "1"), ("2", "1"), ("1", "2"), ("2", "2"), ("2", "2")]);

        let counts = filtered_counts(
            &table,
            "REGION",
            &["2".to_string()],
            "SEX",
            &dictionary(),
        )
        .unwrap();

        assert_eq!(counts.labels, vec!["Male", "Female"]);
        assert_eq!(counts.counts, vec![1, 2]);
    }

    #[test]
    fn numeric_codes_sort_numerically_not_lexically() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("AGE_BAND", Map::new());
        let mut table = DataTable::new(vec!["AGE_BAND".to_string()]);
        for code in ["10", "2", "10", "1"] {
            table.push_row(vec![CellValue::Text(code.to_string())]);
        }

        let counts = labelled_counts(&table, "AGE_BAND", &dictionary).unwrap();

        assert_eq!(counts.labels, vec!["Code 1", "Code 2", "Code 10"]);
        assert_eq!(counts.counts, vec![1, 1, 2]);
    }
}
