use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use datecalc::{Date, Time};
use thiserror::Error;

/// Errors from the interactive prompt reader.
#[derive(Debug, Error)]
enum PromptError {
    #[error("unexpected end of input")]
    Eof,

    #[error("expected {expected} integers, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("not an integer: {0:?}")]
    NotAnInteger(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Prints `prompt` and reads one line of exactly three whitespace-separated
/// integers.
fn read_triple(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<(i64, i64, i64), PromptError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof);
    }

    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| PromptError::NotAnInteger(token.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() != 3 {
        return Err(PromptError::WrongCount {
            expected: 3,
            found: values.len(),
        });
    }
    Ok((values[0], values[1], values[2]))
}

fn run(input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let (year, month, day) = read_triple(input, output, "Enter first date (year month day): ")
        .context("reading first date")?;
    let d1 = Date::new(year, month, day).context("first date")?;

    let (hour, minute, second) =
        read_triple(input, output, "Enter first time (hour minute second): ")
            .context("reading first time")?;
    let t1 = Time::new(hour, minute, second).context("first time")?;

    let (year, month, day) = read_triple(input, output, "Enter second date (year month day): ")
        .context("reading second date")?;
    let d2 = Date::new(year, month, day).context("second date")?;

    let (hour, minute, second) =
        read_triple(input, output, "Enter second time (hour minute second): ")
            .context("reading second time")?;
    let _t2 = Time::new(hour, minute, second).context("second time")?;

    // The difference is computed from the dates only. Both times are read
    // and validated, and the first is echoed below, but neither enters the
    // difference. See README.md.
    let elapsed = d1.difference(&d2);
    writeln!(output, "Difference between dates and times: {elapsed}.")?;
    writeln!(output, "Formatted Date 1: {}", d1.format("YYYY-MM-DD"))?;
    writeln!(output, "Formatted Time 1: {}", t1.format("HH:mm:SS"))?;

    Ok(())
}

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_triple_parses_integers() {
        let mut input = Cursor::new("2024 3 5\n");
        let mut output = Vec::new();
        let triple = read_triple(&mut input, &mut output, "prompt: ").unwrap();
        assert_eq!(triple, (2024, 3, 5));
        assert_eq!(output, b"prompt: ");
    }

    #[test]
    fn test_read_triple_accepts_negative_year() {
        let mut input = Cursor::new("-44 3 15\n");
        let mut output = Vec::new();
        let triple = read_triple(&mut input, &mut output, "").unwrap();
        assert_eq!(triple, (-44, 3, 15));
    }

    #[test]
    fn test_read_triple_rejects_non_integer() {
        let mut input = Cursor::new("2024 three 5\n");
        let mut output = Vec::new();
        let result = read_triple(&mut input, &mut output, "");
        assert!(matches!(result, Err(PromptError::NotAnInteger(token)) if token == "three"));
    }

    #[test]
    fn test_read_triple_rejects_wrong_count() {
        let mut input = Cursor::new("2024 3\n");
        let mut output = Vec::new();
        let result = read_triple(&mut input, &mut output, "");
        assert!(matches!(
            result,
            Err(PromptError::WrongCount {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_read_triple_rejects_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let result = read_triple(&mut input, &mut output, "");
        assert!(matches!(result, Err(PromptError::Eof)));
    }

    #[test]
    fn test_run_end_to_end() {
        let mut input = Cursor::new("2024 1 1\n0 0 0\n2023 1 1\n0 0 0\n");
        let mut output = Vec::new();
        run(&mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(
            "Difference between dates and times: 365 days, 0 hours, 0 minutes, 0 seconds."
        ));
        assert!(text.contains("Formatted Date 1: 2024-01-01"));
        assert!(text.contains("Formatted Time 1: 00:00:00"));
    }

    #[test]
    fn test_run_times_do_not_affect_difference() {
        // Preserved behaviour: the times are read but the difference comes
        // from the dates alone.
        let mut input = Cursor::new("2024 1 1\n23 59 59\n2023 1 1\n0 0 1\n");
        let mut output = Vec::new();
        run(&mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(
            "Difference between dates and times: 365 days, 0 hours, 0 minutes, 0 seconds."
        ));
    }

    #[test]
    fn test_run_rejects_out_of_range_date() {
        let mut input = Cursor::new("2024 13 1\n0 0 0\n2023 1 1\n0 0 0\n");
        let mut output = Vec::new();
        let result = run(&mut input, &mut output);
        assert!(result.is_err());
    }
}
