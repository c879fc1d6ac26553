use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use census_model::Dictionary;

/// Load a JSON data dictionary: `{ "<column>": { "<code>": "<label>" } }`.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let file = File::open(path).with_context(|| format!("open dictionary: {}", path.display()))?;
    let dictionary: Dictionary = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse dictionary: {}", path.display()))?;
    debug!(path = %path.display(), columns = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_code_maps_per_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        std::fs::write(
            &path,
            r#"{ "SEX": { "1": "Male", "2": "Female" }, "REGION": { "1": "North" } }"#,
        )
        .unwrap();

        let dictionary = load_dictionary(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.code_map("SEX").get("1"),
            Some(&"Male".to_string())
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_dictionary(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = Path::new("/nonexistent/dictionary.json");
        assert!(load_dictionary(path).is_err());
    }
}
