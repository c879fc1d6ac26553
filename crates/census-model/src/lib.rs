pub mod codes;
pub mod dictionary;
pub mod error;
pub mod table;

pub use codes::{compare_codes, label_for};
pub use dictionary::{CodeMap, Dictionary};
pub use error::{CensusError, Result};
pub use table::{CellValue, DataTable, Row};

/// Identifier column assumed unique per logical record.
pub const DEFAULT_ID_COLUMN: &str = "SerialNum";
