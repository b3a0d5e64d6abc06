use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// IO-level errors for CSV input, output, and row parsing
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV async parsing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Row {row}: cannot parse {input:?} as a date")]
    InvalidDate {
        row: usize,
        input: String,
        #[source]
        source: DomainError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn error_display_formats_correctly() {
        let err = IoError::InvalidDate {
            row: 2,
            input: "whoops".to_string(),
            source: DomainError::InvalidFormat("whoops".to_string()),
        };
        assert_eq!(err.to_string(), "Row 2: cannot parse \"whoops\" as a date");
    }

    #[test]
    fn invalid_date_keeps_domain_source() {
        let err = IoError::InvalidDate {
            row: 1,
            input: "2021-13-01".to_string(),
            source: DomainError::MonthOutOfRange(13),
        };

        let source = err.source().unwrap();
        assert_eq!(
            source.downcast_ref::<DomainError>(),
            Some(&DomainError::MonthOutOfRange(13))
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let wrapped = IoError::from(io_err);

        match wrapped {
            IoError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }
}
