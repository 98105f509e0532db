//! # Errors
//!
//! Two layers of failure:
//!
//! - [`Rejection`]: why a single predicate refused a candidate string. Every
//!   [`Validate`](crate::Validate) implementation reports one of these.
//! - [`GuaranteeError`]: what the guaranteed-string operations return. Either
//!   the candidate was rejected, or the content of an uninitialized value was
//!   requested.
//!
//! Both are plain values; nothing in this crate panics on invalid input.
use thiserror::Error;

use crate::utils::DesiredType;

/// Reason a candidate string was refused by a filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Could not be parsed as the expected numeric type.
    #[error("The value is not a {0}, try again!")]
    Number(DesiredType),
    /// Could not be parsed as a boolean.
    #[error("The value is not a {0}, try again!")]
    Bool(DesiredType),
    /// Did not equal the required string.
    #[error("The value doesn't match with {0}, try again!")]
    MatchString(String),
    /// Did not equal any of the allowed options.
    #[error("The value doesn't match with the options: {}, try again!", .0.join(", "))]
    MatchStrings(Vec<String>),
    /// Outside of the inclusive range.
    #[error("The value is not between {0} and {1}, try again!")]
    Between(isize, isize),
    /// The regular expression did not match the whole input.
    #[error("string value does not match the required pattern")]
    Pattern,
    /// Free-form reason from a user supplied predicate.
    #[error("{0}")]
    Custom(String),
}

impl Rejection {
    /// Builds a [`Rejection::Custom`] from any message.
    pub fn custom(reason: impl Into<String>) -> Self {
        Self::Custom(reason.into())
    }
}

/// Errors returned by [`StringFilter`](crate::StringFilter) and
/// [`GuaranteedStr`](crate::GuaranteedStr) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuaranteeError {
    /// The candidate did not satisfy the filter. The rejection of the
    /// predicate that failed is carried as is.
    #[error(transparent)]
    ValidationFailed(#[from] Rejection),
    /// The value holds no validated content yet.
    #[error("this instance isn't initialized yet")]
    NotInitialized,
}

impl GuaranteeError {
    /// The predicate's rejection, if this is a validation failure.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::ValidationFailed(rejection) => Some(rejection),
            Self::NotInitialized => None,
        }
    }
}
