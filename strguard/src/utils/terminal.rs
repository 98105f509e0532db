//! # Terminal Input Helper
//!
//! Prompts for input until the answer passes a [`StringFilter`], and hands
//! back the accepted answer as a [`GuaranteedStr`].
//!
//! Answers are trimmed before they reach the filter. Rejections are printed
//! and the question is asked again.
//!
//! ## Example
//! ```rust,no_run
//! use strguard::StringFilter;
//! use strguard::utils::{Sanitize, Terminal};
//!
//! let yes_no = StringFilter::from_rules(vec![
//!     Sanitize::MatchStrings(vec![
//!         String::from("Y"),
//!         String::from("N"),
//!         String::from("y"),
//!         String::from("n"),
//!     ]),
//! ]);
//!
//! let input = Terminal::ask("You like Rust? Y/N", &yes_no).unwrap();
//! println!("The input: {}", input.answer);
//! ```
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{filter::StringFilter, guaranteed::GuaranteedStr};

/// Accepted answer of a [`Terminal::ask`] prompt.
#[derive(Debug, Clone)]
pub struct Terminal {
    pub answer: GuaranteedStr,
}

impl Terminal {
    /// Prints `question` on stdout and reads stdin until an answer passes
    /// `filter`.
    ///
    /// # Errors
    /// Any I/O error from stdin/stdout, or `UnexpectedEof` if stdin closes
    /// before a valid answer was given.
    pub fn ask(question: &str, filter: &StringFilter) -> io::Result<Terminal> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Self::ask_with(&mut stdin.lock(), &mut stdout.lock(), question, filter)
    }

    /// Same as [`Terminal::ask`] over any reader and writer.
    pub fn ask_with<R, W>(
        input: &mut R,
        output: &mut W,
        question: &str,
        filter: &StringFilter,
    ) -> io::Result<Terminal>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = String::new();
        loop {
            writeln!(output, "{}", question)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a valid answer was given",
                ));
            }

            match filter.guarantee(line.trim()) {
                Ok(answer) => return Ok(Terminal { answer }),
                Err(e) => {
                    debug!(question, "answer rejected, asking again");
                    writeln!(output, "{}", e)?;
                }
            }
        }
    }
}
