pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod parse;

// Re-export commonly used types
pub use csv_reader::CsvRecordStream;
pub use csv_writer::write_dates;
pub use error::IoError;
pub use parse::{DatedRow, InputRow, RawDateRecord, parse_row};
