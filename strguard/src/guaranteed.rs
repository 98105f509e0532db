//! # Guaranteed Strings
//!
//! A [`GuaranteedStr`] pairs a string with the [`StringFilter`] that accepted
//! it and a flag telling whether it holds accepted content at all.
//!
//! - Content is checked on write, never on read.
//! - The owning filter is fixed for the value's whole life.
//! - A failed write leaves content and flag exactly as they were.
//!
//! ```text
//!  uninitialized --assign_string(ok)--> initialized
//!  initialized   --assign_string(ok)--> initialized (new content)
//!  initialized   --assign_string(err)-> initialized (unchanged)
//! ```
//!
//! ## Example
//! ```rust
//! use strguard::StringFilter;
//!
//! let filter = StringFilter::from_pattern("([0-9]|[1-9][0-9]+)").unwrap();
//! let mut number = filter.guarantee("7").unwrap();
//!
//! assert!(number.assign_string("092").is_err());
//! assert_eq!(number.as_str(), Some("7"));
//!
//! number.assign_string("19").unwrap();
//! assert_eq!(number.clone_string().unwrap(), "19");
//! ```
use std::fmt::Display;

use tracing::{debug, trace};

use crate::{error::GuaranteeError, filter::StringFilter};

/// String value guaranteed to satisfy its owning [`StringFilter`].
///
/// Only a filter can make one, see [`StringFilter::guarantee`] and
/// [`StringFilter::guarantee_lenient`]. Cloning copies the content and keeps
/// the same filter.
#[derive(Debug, Clone)]
pub struct GuaranteedStr {
    filter: StringFilter,
    guaranteed: String,
    initialized: bool,
}

impl GuaranteedStr {
    pub(crate) fn accepted(filter: StringFilter, guaranteed: String) -> Self {
        Self {
            filter,
            guaranteed,
            initialized: true,
        }
    }

    pub(crate) fn placeholder(filter: StringFilter) -> Self {
        Self {
            filter,
            guaranteed: String::new(),
            initialized: false,
        }
    }

    /// Whether the value holds content accepted by its filter.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The filter that owns this value.
    pub fn filter(&self) -> &StringFilter {
        &self.filter
    }

    /// Copies `src` into this value.
    ///
    /// If both values share the same filter instance the content and flag
    /// are copied without running the filter again. Otherwise `src`'s
    /// content goes through [`GuaranteedStr::assign_string`].
    ///
    /// An uninitialized `src` still hands over its raw (empty) content, so
    /// the result depends on whether this value's filter accepts it.
    ///
    /// # Errors
    /// Only when the filters differ: [`GuaranteeError::ValidationFailed`]
    /// if this value's filter rejects `src`'s content.
    pub fn assign(&mut self, src: &GuaranteedStr) -> Result<(), GuaranteeError> {
        if self.filter.same_filter(&src.filter) {
            trace!("assign between values of the same filter, skipping validation");
            self.guaranteed.clone_from(&src.guaranteed);
            self.initialized = src.initialized;
            return Ok(());
        }

        self.assign_string(src.raw())
    }

    /// Validates `candidate` with this value's filter and stores it.
    ///
    /// # Errors
    /// [`GuaranteeError::ValidationFailed`] if the filter rejects
    /// `candidate`. The previous content and flag are kept.
    pub fn assign_string(&mut self, candidate: impl Into<String>) -> Result<(), GuaranteeError> {
        let candidate = candidate.into();
        if let Err(rejection) = self.filter.validate(&candidate) {
            debug!(reason = %rejection, len = candidate.len(), "assign rejected candidate");
            return Err(rejection.into());
        }

        self.guaranteed = candidate;
        self.initialized = true;
        Ok(())
    }

    /// Content regardless of the flag, empty for a placeholder.
    pub(crate) fn raw(&self) -> &str {
        &self.guaranteed
    }

    /// Borrows the content, `None` when uninitialized.
    pub fn as_str(&self) -> Option<&str> {
        self.initialized.then_some(self.guaranteed.as_str())
    }

    /// Clones the string value out of the instance.
    ///
    /// # Errors
    /// [`GuaranteeError::NotInitialized`] if the instance holds no content.
    pub fn clone_string(&self) -> Result<String, GuaranteeError> {
        self.as_str()
            .map(str::to_string)
            .ok_or(GuaranteeError::NotInitialized)
    }

    /// Clones the string value out of the instance, or returns an empty
    /// string when it holds no content.
    pub fn clone_string_or_default(&self) -> String {
        self.as_str().map(str::to_string).unwrap_or_default()
    }

    /// Consumes the value, `None` when uninitialized.
    pub fn into_string(self) -> Option<String> {
        self.initialized.then_some(self.guaranteed)
    }

    /// Makes a new value with this value's filter.
    /// See [`StringFilter::guarantee`].
    pub fn guarantee(&self, candidate: impl Into<String>) -> Result<GuaranteedStr, GuaranteeError> {
        self.filter.guarantee(candidate)
    }

    /// Makes a new, possibly uninitialized, value with this value's filter.
    /// See [`StringFilter::guarantee_lenient`].
    pub fn guarantee_lenient(&self, candidate: impl Into<String>) -> GuaranteedStr {
        self.filter.guarantee_lenient(candidate)
    }
}

impl Display for GuaranteedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Rejection;

    fn number() -> StringFilter {
        StringFilter::from_pattern("([0-9]|[1-9][0-9]+)").unwrap()
    }

    fn digits() -> StringFilter {
        StringFilter::from_pattern("[0-9]+").unwrap()
    }

    #[test]
    fn test_guaranteed_pattern_end_to_end() {
        let filter = number();
        assert_eq!(filter.guarantee("19").unwrap().clone_string().unwrap(), "19");
        assert_eq!(filter.guarantee("7").unwrap().clone_string().unwrap(), "7");
        assert_eq!(
            filter.guarantee("092").unwrap_err(),
            GuaranteeError::ValidationFailed(Rejection::Pattern)
        );
    }

    #[test]
    fn test_guaranteed_failed_assign_string_keeps_content() {
        let mut value = number().guarantee("7").unwrap();
        assert!(value.assign_string("092").is_err());
        assert!(value.is_initialized());
        assert_eq!(value.clone_string().unwrap(), "7");
    }

    #[test]
    fn test_guaranteed_assign_string_initializes_placeholder() {
        let mut value = number().guarantee_lenient("092");
        assert!(!value.is_initialized());
        value.assign_string("92").unwrap();
        assert!(value.is_initialized());
        assert_eq!(value.as_str(), Some("92"));
    }

    #[test]
    fn test_guaranteed_assign_string_idempotent() {
        let mut value = number().guarantee_lenient("");
        value.assign_string("19").unwrap();
        value.assign_string("19").unwrap();
        assert!(value.is_initialized());
        assert_eq!(value.as_str(), Some("19"));
    }

    #[test]
    fn test_guaranteed_clone_is_independent() {
        let original = number().guarantee("19").unwrap();
        let mut copy = original.clone();
        copy.assign_string("7").unwrap();

        assert_eq!(original.as_str(), Some("19"));
        assert_eq!(copy.as_str(), Some("7"));
        assert!(copy.filter().same_filter(original.filter()));
    }

    #[test]
    fn test_guaranteed_assign_same_filter_copies_state() {
        let filter = number();
        let mut dest = filter.guarantee("7").unwrap();

        let src = filter.guarantee("19").unwrap();
        dest.assign(&src).unwrap();
        assert_eq!(dest.as_str(), Some("19"));

        // the flag travels too when the filter is shared
        let empty = filter.guarantee_lenient("092");
        dest.assign(&empty).unwrap();
        assert!(!dest.is_initialized());
    }

    #[test]
    fn test_guaranteed_assign_same_filter_skips_validation() {
        use std::sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        };

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let filter = StringFilter::from_fn(move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let src = filter.guarantee("a").unwrap();
        let mut dest = filter.guarantee("b").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        dest.assign(&src).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(dest.as_str(), Some("a"));
    }

    #[test]
    fn test_guaranteed_assign_cross_filter_revalidates() {
        let any = StringFilter::from_fn(|_: &str| Ok(()));
        let a = any.guarantee("19").unwrap();

        let mut b = digits().guarantee_lenient("");
        assert!(!b.is_initialized());
        b.assign(&a).unwrap();
        assert!(b.is_initialized());
        assert_eq!(b.as_str(), Some("19"));
        assert!(!b.filter().same_filter(a.filter()));
    }

    #[test]
    fn test_guaranteed_assign_cross_filter_failure_keeps_dest() {
        let any = StringFilter::from_fn(|_: &str| Ok(()));
        let letters = any.guarantee("nineteen").unwrap();

        let mut b = digits().guarantee_lenient("");
        assert!(b.assign(&letters).is_err());
        assert!(!b.is_initialized());

        let mut c = digits().guarantee("42").unwrap();
        assert!(c.assign(&letters).is_err());
        assert_eq!(c.as_str(), Some("42"));
    }

    #[test]
    fn test_guaranteed_assign_cross_filter_uninitialized_src() {
        let accepts_empty = StringFilter::from_fn(|_: &str| Ok(()));
        let src = digits().guarantee_lenient("x");

        // the empty placeholder content is validated by the destination filter
        let mut dest = accepts_empty.guarantee("kept").unwrap();
        dest.assign(&src).unwrap();
        assert!(dest.is_initialized());
        assert_eq!(dest.as_str(), Some(""));

        let mut strict = digits().guarantee("42").unwrap();
        let other = number().guarantee_lenient("x");
        assert_eq!(
            strict.assign(&other),
            Err(GuaranteeError::ValidationFailed(Rejection::Pattern))
        );
        assert_eq!(strict.as_str(), Some("42"));
    }

    #[test]
    fn test_guaranteed_separate_identical_filters_are_not_trusted() {
        let mut dest = number().guarantee("7").unwrap();
        let src = number().guarantee_lenient("092");
        // same rule, different instance: the uninitialized flag is not copied
        assert!(dest.assign(&src).is_err());
        assert_eq!(dest.as_str(), Some("7"));
    }

    #[test]
    fn test_guaranteed_read_uninitialized() {
        let value = number().guarantee_lenient("092");
        assert_eq!(value.clone_string(), Err(GuaranteeError::NotInitialized));
        assert_eq!(value.clone_string_or_default(), "");
        assert_eq!(value.as_str(), None);
        assert_eq!(value.to_string(), "");
        assert_eq!(value.into_string(), None);
    }

    #[test]
    fn test_guaranteed_read_returns_owned_copy() {
        let mut value = number().guarantee("19").unwrap();
        let mut read = value.clone_string().unwrap();
        read.push('0');
        assert_eq!(value.as_str(), Some("19"));

        value.assign_string("7").unwrap();
        assert_eq!(read, "190");
        assert_eq!(value.to_string(), "7");
        assert_eq!(value.into_string(), Some("7".to_string()));
    }

    #[test]
    fn test_guaranteed_forwarders_use_owning_filter() {
        let filter = number();
        let value = filter.guarantee("1").unwrap();

        let strict = value.guarantee("20").unwrap();
        assert!(strict.filter().same_filter(&filter));
        assert!(value.guarantee("020").is_err());

        let lenient = value.guarantee_lenient("020");
        assert!(!lenient.is_initialized());
        assert!(lenient.filter().same_filter(&filter));
    }
}
