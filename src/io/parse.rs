use serde::{Deserialize, Serialize};

use super::error::IoError;
use crate::domain::CalendarDate;

/// Raw CSV record as read from input
#[derive(Debug, Deserialize)]
pub struct RawDateRecord {
    pub date: String,
}

/// Unparsed input value tagged with its 1-based data row number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub row: usize,
    pub value: String,
}

/// Successfully parsed row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedRow {
    pub row: usize,
    pub date: CalendarDate,
}

impl InputRow {
    pub fn new(row: usize, value: impl Into<String>) -> Self {
        Self {
            row,
            value: value.into(),
        }
    }

    /// Parse this row's value into a calendar date
    pub fn parse(self) -> Result<DatedRow, IoError> {
        match self.value.parse::<CalendarDate>() {
            Ok(date) => Ok(DatedRow {
                row: self.row,
                date,
            }),
            Err(source) => Err(IoError::InvalidDate {
                row: self.row,
                input: self.value,
                source,
            }),
        }
    }
}

/// Parse a row read from a [`CsvRecordStream`](super::CsvRecordStream)
///
/// Read errors pass through unchanged; this is the fallible operation the
/// binary hands to the adapters.
pub fn parse_row(row: Result<InputRow, IoError>) -> Result<DatedRow, IoError> {
    row?.parse()
}
