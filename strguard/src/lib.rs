//! # strguard
//!
//! Strings that are guaranteed to satisfy a validation filter.
//!
//! A [`StringFilter`] owns one predicate over `&str`. The only way to obtain a
//! [`GuaranteedStr`] holding content is to run that content through the
//! filter, so any initialized `GuaranteedStr` you receive is known to have
//! passed its filter when it was last written.
//!
//! ## Features
//!
//! ### Currently Available
//!
//! (All feature versions)
//! - **Filters** - wrap any predicate (closure or [`Validate`] implementor) into a shareable [`StringFilter`]
//! - **Guaranteed strings** - strict ([`StringFilter::guarantee`]) and lenient ([`StringFilter::guarantee_lenient`]) construction
//! - **Whole-string regex filter** - [`Pattern`] only accepts input matched from the first to the last byte
//! - **Sanitize rules** - type, option, range and pattern checks via [`utils::Sanitize`]
//! - **Interactive Terminal Interface** - prompt until the answer passes a filter with [`utils::Terminal`]
//!
//! ("serde" feature)
//! - `Serialize` for [`GuaranteedStr`] and `DeserializeSeed` for `&StringFilter`
//!
//! ("sync" feature)
//! - `SharedGuaranteed`, a guaranteed string behind a `parking_lot::RwLock`
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! strguard = "0.1"
//! strguard = { version = "0.1", features = ["serde", "sync"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Regex filter
//!
//! ```rust
//! use strguard::StringFilter;
//!
//! // digits without a leading zero
//! let filter = StringFilter::from_pattern("([0-9]|[1-9][0-9]+)").unwrap();
//!
//! let number = filter.guarantee("19").unwrap();
//! assert_eq!(number.clone_string().unwrap(), "19");
//!
//! assert!(filter.guarantee("7").is_ok());
//! assert!(filter.guarantee("092").is_err());
//! ```
//!
//! ### Lenient construction
//!
//! ```rust
//! use strguard::StringFilter;
//!
//! let filter = StringFilter::from_pattern("[a-z]+").unwrap();
//! let placeholder = filter.guarantee_lenient("NOT LOWERCASE");
//!
//! assert!(!placeholder.is_initialized());
//! assert_eq!(placeholder.clone_string_or_default(), "");
//! ```
//!
//! ### Custom predicate
//!
//! ```rust
//! use strguard::{Rejection, StringFilter};
//!
//! let no_spaces = StringFilter::from_fn(|input: &str| {
//!     if input.contains(' ') {
//!         Err(Rejection::custom("spaces are not allowed"))
//!     } else {
//!         Ok(())
//!     }
//! });
//!
//! let mut slug = no_spaces.guarantee("hello-world").unwrap();
//! assert!(slug.assign_string("hello world").is_err());
//! assert_eq!(slug.as_str(), Some("hello-world"));
//! ```
//!
//! ## Architecture
//!
//! - **`filter`** - [`StringFilter`] and the [`Validate`] trait
//! - **`guaranteed`** - [`GuaranteedStr`] and its assignment rules
//! - **`pattern`** - the whole-string regex rule
//! - **`error`** - [`GuaranteeError`] and [`Rejection`]
//! - **`utils`** - sanitize rule library and the terminal prompt
//!
//! ## Error Handling
//!
//! ```rust
//! use strguard::{GuaranteeError, StringFilter};
//!
//! let filter = StringFilter::from_pattern("[0-9]+").unwrap();
//!
//! match filter.guarantee("abc") {
//!     Ok(value) => println!("accepted: {value}"),
//!     Err(GuaranteeError::ValidationFailed(reason)) => eprintln!("rejected: {reason}"),
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//!
//! let empty = filter.guarantee_lenient("abc");
//! assert_eq!(empty.clone_string(), Err(GuaranteeError::NotInitialized));
//! ```
//!
//! ## Threading
//!
//! [`StringFilter`] is `Send + Sync` and cheap to clone, so one filter can
//! be shared by any number of threads. [`GuaranteedStr`] writes two fields
//! per assignment and is not synchronised; wrap it in a lock (or enable the
//! `sync` feature) when several threads write the same value.

pub mod error;
pub mod filter;
pub mod guaranteed;
pub mod pattern;
pub mod utils;

pub use error::{GuaranteeError, Rejection};
pub use filter::{StringFilter, Validate};
pub use guaranteed::GuaranteedStr;
pub use pattern::Pattern;

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        mod codec;
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "sync")] {
        pub mod sync;
        pub use sync::SharedGuaranteed;
    }
}
