//! Calendar generation error types.

use thiserror::Error;

/// Result type for calendar generation.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Errors that can occur while building a calendar document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A session start or end value could not be interpreted as an instant.
    #[error("invalid {field} for session {session_number}: {value:?}")]
    InvalidTimestamp {
        field: &'static str,
        session_number: u32,
        value: String,
    },

    /// Session numbers start at 1.
    #[error("session number must be positive, got 0")]
    ZeroSessionNumber,

    /// The event title is empty or only whitespace.
    #[error("event title must not be empty")]
    EmptyEventTitle,
}

impl CalendarError {
    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(
        field: &'static str,
        session_number: u32,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidTimestamp {
            field,
            session_number,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_timestamp_message_names_the_session() {
        let err = CalendarError::invalid_timestamp("start_time", 2, "next tuesday");
        assert_eq!(
            err.to_string(),
            "invalid start_time for session 2: \"next tuesday\""
        );
    }

    #[test]
    fn zero_session_number_message() {
        assert_eq!(
            CalendarError::ZeroSessionNumber.to_string(),
            "session number must be positive, got 0"
        );
    }

    #[test]
    fn empty_title_message() {
        assert_eq!(
            CalendarError::EmptyEventTitle.to_string(),
            "event title must not be empty"
        );
    }
}
