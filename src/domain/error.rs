use std::num::ParseIntError;

use thiserror::Error;

/// Domain-level errors for calendar date values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid date format, expected YYYY-MM-DD: {0}")]
    InvalidFormat(String),

    #[error("Invalid {field} component")]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("Month out of range: {0}")]
    MonthOutOfRange(u8),

    #[error("Day {day} out of range for {year:04}-{month:02}")]
    DayOutOfRange { year: i32, month: u8, day: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            DomainError::InvalidFormat("whoops".to_string()).to_string(),
            "Invalid date format, expected YYYY-MM-DD: whoops"
        );
        assert_eq!(
            DomainError::MonthOutOfRange(13).to_string(),
            "Month out of range: 13"
        );
        assert_eq!(
            DomainError::DayOutOfRange {
                year: 2021,
                month: 2,
                day: 30
            }
            .to_string(),
            "Day 30 out of range for 2021-02"
        );
    }

    #[test]
    fn invalid_number_keeps_source() {
        let source = "1x".parse::<u8>().unwrap_err();
        let err = DomainError::InvalidNumber {
            field: "month",
            source,
        };

        assert_eq!(err.to_string(), "Invalid month component");
        assert_eq!(
            err.source().unwrap().to_string(),
            "invalid digit found in string"
        );
    }

    #[test]
    fn error_is_cloneable() {
        let err = DomainError::MonthOutOfRange(0);
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
