//! # Whole-string Pattern
//!
//! A [`Validate`] rule backed by a regular expression. A candidate is valid
//! only if the expression matches it from the first byte to the last one;
//! a match on a substring is a rejection, whatever the expression's own
//! anchors say.
//!
//! `regex` reports the leftmost-first match, so with an alternation such as
//! `([0-9]|[1-9][0-9]+)` a plain search on `"19"` stops after `"1"`. The rule
//! therefore compiles the expression wrapped in `\A(?:...)\z` and then checks
//! that the reported span covers the candidate.
//!
//! ## Example
//! ```rust
//! use strguard::{Pattern, Validate};
//!
//! let number = Pattern::new("([0-9]|[1-9][0-9]+)").unwrap();
//!
//! assert!(number.validate("19").is_ok());
//! assert!(number.validate("7").is_ok());
//! assert!(number.validate("092").is_err());
//! assert!(number.validate("19 apples").is_err());
//! ```
use std::fmt::Display;

use regex::{Regex, RegexBuilder};

use crate::{error::Rejection, filter::Validate};

/// Regex rule accepting only whole-string matches.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    whole: Regex,
}

impl Pattern {
    /// Compiles `pattern` into a whole-string rule.
    ///
    /// # Errors
    /// Returns the `regex` error if `pattern` is not a valid expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Self::with_builder(pattern, |builder| builder)
    }

    /// Compiles `pattern` with the options set by `configure` on a
    /// [`RegexBuilder`], e.g. `|b| b.case_insensitive(true)`.
    ///
    /// # Errors
    /// Returns the `regex` error if `pattern` is not a valid expression
    /// under those options.
    pub fn with_builder<F>(pattern: &str, configure: F) -> Result<Self, regex::Error>
    where
        F: Fn(&mut RegexBuilder) -> &mut RegexBuilder,
    {
        let compile = |text: &str| configure(&mut RegexBuilder::new(text)).build();

        // text like `a)|(b` is only valid once wrapped
        compile(pattern)?;
        // `(?x)` then a newline closes a trailing verbose comment and is
        // ignored as whitespace otherwise
        let whole = compile(&format!("\\A(?:{pattern}(?x)\n)\\z"))?;
        Ok(Self {
            source: pattern.to_string(),
            whole,
        })
    }

    /// Builds the rule from the text of an already compiled expression.
    ///
    /// A [`Regex`] does not expose the options it was built with, so only
    /// inline flags (e.g. `(?i)`) carry over. Use [`Pattern::with_builder`]
    /// for builder options.
    ///
    /// # Errors
    /// Returns the `regex` error if the whole-string form cannot be compiled.
    pub fn from_regex(re: &Regex) -> Result<Self, regex::Error> {
        Self::new(re.as_str())
    }

    /// The pattern text as given by the caller.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Validate for Pattern {
    fn validate(&self, input: &str) -> Result<(), Rejection> {
        match self.whole.find(input) {
            Some(found) if found.start() == 0 && found.end() == input.len() => Ok(()),
            _ => Err(Rejection::Pattern),
        }
    }
}
