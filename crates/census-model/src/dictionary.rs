//! Data dictionary model.
//!
//! The dictionary maps each tracked column to its admissible codes and the
//! human-readable label for each code. Codes are always strings, even when
//! the source data is numeric; a numeric cell is matched against the code
//! map through its string representation.
//!
//! ## Dictionary file structure
//!
//! ```json
//! {
//!     "SEX": { "1": "Male", "2": "Female" },
//!     "REGION": { "1": "North", "2": "South" }
//! }
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Mapping from admissible code to descriptive label for one column.
pub type CodeMap = BTreeMap<String, String>;

static EMPTY_CODE_MAP: LazyLock<CodeMap> = LazyLock::new(CodeMap::new);

/// Per-column code maps, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    columns: BTreeMap<String, CodeMap>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the code map for a column, replacing any existing entry.
    pub fn insert(&mut self, column: impl Into<String>, codes: CodeMap) {
        self.columns.insert(column.into(), codes);
    }

    /// The code map for a column, or an empty map for unknown columns.
    /// Never fails.
    pub fn code_map(&self, column: &str) -> &CodeMap {
        self.columns.get(column).unwrap_or(&EMPTY_CODE_MAP)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Tracked column names in dictionary iteration order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_column_yields_empty_map() {
        let dictionary = Dictionary::new();
        assert!(dictionary.code_map("SEX").is_empty());
    }

    #[test]
    fn deserializes_from_plain_json_object() {
        let dictionary: Dictionary = serde_json::from_str(
            r#"{ "SEX": { "1": "Male", "2": "Female" }, "REGION": { "1": "North" } }"#,
        )
        .expect("parse dictionary");
        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.code_map("SEX").get("2"),
            Some(&"Female".to_string())
        );
        assert!(dictionary.code_map("AGE").is_empty());
    }
}
