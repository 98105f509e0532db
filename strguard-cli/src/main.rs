use anyhow::{Context, Result, bail};
use clap::Parser;
use strguard::utils::{Sanitize, Terminal};
use strguard::{GuaranteedStr, Pattern, StringFilter};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Ask a question until the answer passes every given rule.
#[derive(Debug, Parser)]
#[command(name = "strguard", version)]
struct Args {
    /// Question printed before each attempt
    #[arg(short, long, default_value = "Input a value: ")]
    question: String,

    /// Regular expression the whole answer must match
    #[arg(short, long)]
    pattern: Option<String>,

    /// Allowed answer, repeat for more options
    #[arg(long = "one-of", value_name = "OPTION")]
    one_of: Vec<String>,

    /// Inclusive integer range the answer must fall in
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    between: Option<Vec<isize>>,
}

impl Args {
    fn rules(&self) -> Result<Vec<Sanitize>> {
        let mut rules = Vec::new();

        if let Some(pattern) = &self.pattern {
            let pattern = Pattern::new(pattern)
                .with_context(|| format!("invalid --pattern {pattern:?}"))?;
            rules.push(Sanitize::Pattern(pattern));
        }
        if !self.one_of.is_empty() {
            rules.push(Sanitize::MatchStrings(self.one_of.clone()));
        }
        if let Some(bounds) = &self.between {
            let [min, max] = bounds.as_slice() else {
                bail!("--between takes exactly two values");
            };
            if min > max {
                bail!("--between {min} {max}: MIN is greater than MAX");
            }
            rules.push(Sanitize::IsBetween(*min, *max));
        }

        Ok(rules)
    }
}

fn announce(answer: &GuaranteedStr) -> String {
    info!(answer = %answer, "answer accepted");
    format!("The input: {answer}")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let filter = StringFilter::from_rules(args.rules()?);

    println!(
        "------------------------------------------------------------------------------------",
    );
    println!("strguard {}", env!("CARGO_PKG_VERSION"));
    println!(
        "------------------------------------------------------------------------------------",
    );

    let input = Terminal::ask(&args.question, &filter).context("couldn't read an answer")?;
    println!("{}", announce(&input.answer));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strguard::Validate;

    fn rules_of(argv: &[&str]) -> Result<StringFilter> {
        let args = Args::try_parse_from(argv.iter().copied())?;
        Ok(StringFilter::from_rules(args.rules()?))
    }

    #[test]
    fn test_cli_default_accepts_anything() {
        let filter = rules_of(&["strguard"]).unwrap();
        assert!(filter.validate("whatever").is_ok());
    }

    #[test]
    fn test_cli_pattern_and_options() {
        let filter = rules_of(&[
            "strguard",
            "--pattern",
            "[a-z]+",
            "--one-of",
            "quick",
            "--one-of",
            "deep",
        ])
        .unwrap();
        assert!(filter.validate("deep").is_ok());
        assert!(filter.validate("custom").is_err());
        assert!(filter.validate("Deep").is_err());
    }

    #[test]
    fn test_cli_between_with_negative_bounds() {
        let filter = rules_of(&["strguard", "--between", "-5", "5"]).unwrap();
        assert!(filter.validate("-3").is_ok());
        assert!(filter.validate("6").is_err());
    }

    #[test]
    fn test_cli_rejects_bad_config() {
        assert!(rules_of(&["strguard", "--between", "5", "1"]).is_err());
        assert!(rules_of(&["strguard", "--pattern", "[0-9"]).is_err());
    }

    #[test]
    fn test_cli_rules_are_sanitize_rules() {
        let args = Args::try_parse_from(["strguard", "--one-of", "y"]).unwrap();
        let rules = args.rules().unwrap();
        assert_eq!(rules.len(), 1);
        assert!(rules[0].validate("y").is_ok());
        assert!(rules[0].validate("n").is_err());
    }

    #[test]
    fn test_cli_announce_logs_accepted_answer() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("info"))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let answer = rules_of(&["strguard", "--one-of", "deep"])
            .unwrap()
            .guarantee("deep")
            .unwrap();
        let line = tracing::subscriber::with_default(subscriber, || announce(&answer));
        assert_eq!(line, "The input: deep");

        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("answer accepted"));
        assert!(logged.contains("answer=deep"));
    }
}
