use core::fmt::{self, Display};

/// Errors from parsing a [`Date`](crate::Date).
#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum DateError {
    /// The input is not a real calendar date written as `YYYY/MM/DD`.
    #[error("`{input}` is not a date in format `YYYY/MM/DD`: {reason}")]
    InvalidDateFormat {
        /// The string that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Which of the three estimate inputs a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The optimistic date.
    Best,
    /// The most likely date.
    Likely,
    /// The pessimistic date.
    Worst,
}

impl Field {
    /// Returns the lowercase name used in messages and CLI flags.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Best => "best",
            Field::Likely => "likely",
            Field::Worst => "worst",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from building an [`Estimate`](crate::Estimate) out of date strings.
#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum EstimateError {
    /// One of the three date strings could not be parsed.
    #[error("Invalid {field} date format: {source}")]
    InvalidDate {
        /// The input that failed.
        field: Field,
        /// Why it failed.
        #[source]
        source: DateError,
    },
}

impl EstimateError {
    /// The input that failed.
    pub fn field(&self) -> Field {
        match self {
            EstimateError::InvalidDate { field, .. } => *field,
        }
    }
}
