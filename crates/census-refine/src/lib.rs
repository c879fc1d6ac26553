//! The refinement pass: schema-driven validation, duplicate removal, and
//! record quarantine. Refinement is a pure function of the record set, the
//! dictionary, and the identifier column; it carries no global state and does
//! no I/O.

mod refiner;

pub use refiner::{ColumnReport, RefineOutcome, RefineReport, refine};
