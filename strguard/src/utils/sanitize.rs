//! # Sanitize Rules
//!
//! Ready-made [`Validate`] rules for common constraints. Build a filter from
//! a list of them with [`StringFilter::from_rules`](crate::StringFilter::from_rules); the rules run in order
//! and short-circuit on the first failure, returning that rule's
//! [`Rejection`].
//!
//! ## Rules
//! - Type validation for common Rust primitives via [`DesiredType`]
//! - Exact string matching with [`Sanitize::MatchString`]
//! - Multiple-option matching with [`Sanitize::MatchStrings`]
//! - Inclusive range validation with [`Sanitize::IsBetween`]
//! - Whole-string regex with [`Sanitize::Pattern`]
//!
//! Rules see the input exactly as given. Trimming is done by
//! [`Terminal`](crate::utils::Terminal) before its answers reach the filter.
//!
//! ## Examples
//!
//! ```rust
//! use strguard::utils::{DesiredType, Sanitize};
//! use strguard::{Pattern, StringFilter};
//!
//! let threads = StringFilter::from_rules(vec![Sanitize::IsBetween(1, 16)]);
//! assert!(threads.guarantee("8").is_ok());
//! assert!(threads.guarantee("32").is_err());
//!
//! let answer = StringFilter::from_rules(vec![
//!     Sanitize::MatchStrings(vec!["y".to_string(), "n".to_string()]),
//! ]);
//! assert!(answer.guarantee("y").is_ok());
//!
//! let verbose = StringFilter::from_rules(vec![Sanitize::IsType(DesiredType::Bool)]);
//! assert!(verbose.guarantee("true").is_ok());
//! assert!(verbose.guarantee("yes").is_err());
//!
//! let hex = StringFilter::from_rules(vec![Sanitize::Pattern(
//!     Pattern::new("[0-9a-f]+").unwrap(),
//! )]);
//! assert!(hex.guarantee("beef").is_ok());
//! ```
use std::fmt::Display;

use crate::{error::Rejection, filter::Validate, pattern::Pattern};

/// Represents a validation rule that can be applied to a string.
///
/// - `MatchString`: the input equals a specific string.
/// - `MatchStrings`: the input equals one of the given options.
/// - `IsType`: the input can be parsed into a certain [`DesiredType`].
/// - `IsBetween`: a numeric input is within an inclusive range `[min, max]`.
/// - `Pattern`: the whole input matches a regular expression.
#[derive(Debug, Clone)]
pub enum Sanitize {
    MatchString(String),
    MatchStrings(Vec<String>),
    IsType(DesiredType),
    IsBetween(isize, isize),
    Pattern(Pattern),
}

/// Helper that validates if an input string can be parsed into the given
/// Rust type, evaluating to `Result<(), Rejection>`.
///
/// ```rust,ignore
/// check_type!(input, u8, Rejection::Number(DesiredType::U8))
/// ```
macro_rules! check_type {
    ($input:expr, $t:ty, $err:expr) => {
        match $input.parse::<$t>() {
            Ok(_) => Ok(()),
            Err(_) => Err($err),
        }
    };
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), Rejection> {
        match self {
            Sanitize::IsType(ty) => ty.parse(input),
            Sanitize::MatchString(s) => {
                if input == s {
                    Ok(())
                } else {
                    Err(Rejection::MatchString(s.to_string()))
                }
            }
            Sanitize::MatchStrings(options) => {
                if options.iter().any(|option| option == input) {
                    Ok(())
                } else {
                    Err(Rejection::MatchStrings(options.clone()))
                }
            }
            Sanitize::IsBetween(n1, n2) => {
                let parsed: isize = input
                    .parse()
                    .map_err(|_| Rejection::Number(DesiredType::Isize))?;
                if parsed >= *n1 && parsed <= *n2 {
                    Ok(())
                } else {
                    Err(Rejection::Between(*n1, *n2))
                }
            }
            Sanitize::Pattern(pattern) => pattern.validate(input),
        }
    }
}

/// Ordered rule list behind [`StringFilter::from_rules`](crate::StringFilter::from_rules).
pub(crate) struct Rules(Vec<Sanitize>);

impl Rules {
    pub(crate) fn new(rules: Vec<Sanitize>) -> Self {
        Self(rules)
    }
}

impl Validate for Rules {
    fn validate(&self, input: &str) -> Result<(), Rejection> {
        for rule in &self.0 {
            rule.validate(input)?;
        }
        Ok(())
    }
}

/// Represents the desired type to which the input should be parsed.
///
/// Used together with [`Sanitize::IsType`] to validate primitive values.
///
/// Currently supports:
/// - `Bool`
/// - Unsigned integers: `U8`, `U16`, `U32`, `U64`, `U128`
/// - Signed integers: `I8`, `I16`, `I32`, `I64`, `I128`
/// - Platform-sized integer: `Isize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
}

impl DesiredType {
    /// Applies the `check_type!` validation matching this variant.
    fn parse(&self, input: &str) -> Result<(), Rejection> {
        match self {
            DesiredType::Bool => check_type!(input, bool, Rejection::Bool(DesiredType::Bool)),
            DesiredType::U8 => check_type!(input, u8, Rejection::Number(DesiredType::U8)),
            DesiredType::U16 => check_type!(input, u16, Rejection::Number(DesiredType::U16)),
            DesiredType::U32 => check_type!(input, u32, Rejection::Number(DesiredType::U32)),
            DesiredType::U64 => check_type!(input, u64, Rejection::Number(DesiredType::U64)),
            DesiredType::U128 => check_type!(input, u128, Rejection::Number(DesiredType::U128)),
            DesiredType::I8 => check_type!(input, i8, Rejection::Number(DesiredType::I8)),
            DesiredType::I16 => check_type!(input, i16, Rejection::Number(DesiredType::I16)),
            DesiredType::I32 => check_type!(input, i32, Rejection::Number(DesiredType::I32)),
            DesiredType::I64 => check_type!(input, i64, Rejection::Number(DesiredType::I64)),
            DesiredType::I128 => check_type!(input, i128, Rejection::Number(DesiredType::I128)),
            DesiredType::Isize => {
                check_type!(input, isize, Rejection::Number(DesiredType::Isize))
            }
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::U128 => write!(f, "u128"),
            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::I128 => write!(f, "i128"),
            Self::Isize => write!(f, "isize"),
        }
    }
}
