//! File-backed loading and persistence for census tables and dictionaries.

pub mod csv_table;
pub mod dictionary;

pub use csv_table::{read_csv_table, read_record_count, write_csv_table};
pub use dictionary::load_dictionary;
