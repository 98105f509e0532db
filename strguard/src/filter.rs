//! # String Filters
//!
//! A [`StringFilter`] decides whether a string is a valid value. It is the
//! only factory for [`GuaranteedStr`]: strict construction returns the
//! predicate's rejection, lenient construction returns an uninitialized
//! placeholder instead.
//!
//! Filters are immutable and reference counted. Cloning a filter hands out
//! another handle to the *same* filter, and that identity is what
//! [`GuaranteedStr::assign`] uses to skip re-validation. Two filters built
//! separately from the same rule are never treated as the same filter.
//!
//! ## Example
//! ```rust
//! use strguard::utils::{DesiredType, Sanitize};
//! use strguard::StringFilter;
//!
//! let port = StringFilter::from_rules(vec![
//!     Sanitize::IsType(DesiredType::U16),
//!     Sanitize::IsBetween(1, 65535),
//! ]);
//!
//! assert!(port.guarantee("8080").is_ok());
//! assert!(port.guarantee("0").is_err());
//! ```
use std::{fmt, sync::Arc};

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::{
    error::{GuaranteeError, Rejection},
    guaranteed::GuaranteedStr,
    pattern::Pattern,
    utils::sanitize::{Rules, Sanitize},
};

/// Trait for input validation.
/// Any type that implements this can validate a string input and return
/// either `Ok(())` if the input is valid or a [`Rejection`] on failure.
///
/// Implementations must be pure: the same input always yields the same
/// result, and nothing is mutated.
pub trait Validate: Send + Sync {
    fn validate(&self, input: &str) -> Result<(), Rejection>;
}

struct FnRule<F>(F);

impl<F> Validate for FnRule<F>
where
    F: Fn(&str) -> Result<(), Rejection> + Send + Sync,
{
    fn validate(&self, input: &str) -> Result<(), Rejection> {
        (self.0)(input)
    }
}

/// Rule deciding whether a string value is valid, and factory of
/// [`GuaranteedStr`] values checked by that rule.
#[derive(Clone)]
pub struct StringFilter {
    rule: Arc<dyn Validate>,
}

impl fmt::Debug for StringFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringFilter")
            .field("id", &Arc::as_ptr(&self.rule).cast::<()>())
            .finish()
    }
}

impl StringFilter {
    /// Wraps a [`Validate`] rule into a new filter.
    pub fn new<R>(rule: R) -> Self
    where
        R: Validate + 'static,
    {
        Self {
            rule: Arc::new(rule),
        }
    }

    /// Wraps a closure into a new filter.
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> Result<(), Rejection> + Send + Sync + 'static,
    {
        Self::new(FnRule(predicate))
    }

    /// Runs every rule in order, stopping at the first rejection.
    pub fn from_rules(rules: Vec<Sanitize>) -> Self {
        Self::new(Rules::new(rules))
    }

    /// Whole-string regex filter from an already compiled expression.
    ///
    /// # Errors
    /// Returns the `regex` error if the whole-string form of the expression
    /// cannot be compiled (e.g. it exceeds the engine's size limit).
    pub fn from_regex(re: &Regex) -> Result<Self, regex::Error> {
        Ok(Self::new(Pattern::from_regex(re)?))
    }

    /// Whole-string regex filter from pattern text.
    ///
    /// # Errors
    /// Returns the `regex` error if `pattern` is not a valid expression.
    pub fn from_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(Pattern::new(pattern)?))
    }

    /// Whole-string regex filter from pattern text compiled with
    /// [`RegexBuilder`] options. See [`Pattern::with_builder`].
    ///
    /// # Errors
    /// Returns the `regex` error if `pattern` is not a valid expression.
    pub fn from_pattern_with<F>(pattern: &str, configure: F) -> Result<Self, regex::Error>
    where
        F: Fn(&mut RegexBuilder) -> &mut RegexBuilder,
    {
        Ok(Self::new(Pattern::with_builder(pattern, configure)?))
    }

    /// Checks `candidate` against the rule without building anything.
    pub fn validate(&self, candidate: &str) -> Result<(), Rejection> {
        self.rule.validate(candidate)
    }

    /// Makes a new initialized [`GuaranteedStr`].
    ///
    /// # Errors
    /// [`GuaranteeError::ValidationFailed`] with the rule's rejection if
    /// `candidate` is not a valid value.
    pub fn guarantee(&self, candidate: impl Into<String>) -> Result<GuaranteedStr, GuaranteeError> {
        let candidate = candidate.into();
        if let Err(rejection) = self.validate(&candidate) {
            debug!(reason = %rejection, len = candidate.len(), "guarantee rejected candidate");
            return Err(rejection.into());
        }
        Ok(GuaranteedStr::accepted(self.clone(), candidate))
    }

    /// Makes a new [`GuaranteedStr`] that is left uninitialized when
    /// `candidate` is invalid. Check [`GuaranteedStr::is_initialized`]
    /// before trusting its content.
    pub fn guarantee_lenient(&self, candidate: impl Into<String>) -> GuaranteedStr {
        let mut guaranteed = GuaranteedStr::placeholder(self.clone());
        // rejection is logged by assign_string, placeholder stays empty
        let _ = guaranteed.assign_string(candidate);
        guaranteed
    }

    /// Re-checks the content of a value made by any filter against this one
    /// and returns a new value owned by this filter. The raw content is used
    /// even when `existing` is uninitialized.
    ///
    /// # Errors
    /// [`GuaranteeError::ValidationFailed`] if this filter rejects it.
    pub fn reguarantee(&self, existing: &GuaranteedStr) -> Result<GuaranteedStr, GuaranteeError> {
        self.guarantee(existing.raw())
    }

    /// Whether both handles point at the very same filter instance.
    pub fn same_filter(&self, other: &StringFilter) -> bool {
        Arc::ptr_eq(&self.rule, &other.rule)
    }
}
