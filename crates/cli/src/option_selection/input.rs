use std::fmt::Display;
use std::io::{stdin, stdout, BufRead, Write};
use std::num::IntErrorKind;

use contact_register_core::error::{Error, Result};
use log::debug;

use super::DEFAULT_PROMPT;

const NOT_AN_INTEGER: &str = "Input value not a valid integer, try again";
const OUT_OF_RANGE: &str = "Input value is out of range, try again";

/// Reads lines from `input` until one holds a valid index into `options`.
///
/// Each attempt writes `prompt` to `output` first. Input that is not an
/// integer, or an integer outside `0..options.len()`, gets a message on
/// `output` and another prompt.
///
/// # Errors
///
/// - [`Error::NoOptions`] if `options` is empty, as no input could be valid
/// - [`Error::InputClosed`] if `input` ends before a valid index is read
/// - [`Error::Stdio`] if reading or writing fails
pub fn select_option<'a, T: Display, R: BufRead, W: Write>(
    options: &'a [T],
    prompt: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<&'a T> {
    if options.is_empty() {
        return Err(Error::NoOptions);
    }

    let prompt = prompt.unwrap_or(DEFAULT_PROMPT);

    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut buffer = Vec::new();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            return Err(Error::InputClosed);
        }

        // Undecodable bytes are already consumed, so the next line can be tried
        let Ok(line) = std::str::from_utf8(&buffer) else {
            writeln!(output, "{NOT_AN_INTEGER}")?;
            continue;
        };

        let selected = match line.trim().parse::<i64>() {
            Ok(selected) => selected,
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                writeln!(output, "{OUT_OF_RANGE}")?;
                continue;
            }
            Err(_) => {
                writeln!(output, "{NOT_AN_INTEGER}")?;
                continue;
            }
        };

        // Negative values fail the conversion and count as out of range
        match usize::try_from(selected) {
            Ok(index) if index < options.len() => {
                debug!("Selected option {index}: {}", options[index]);
                return Ok(&options[index]);
            }
            _ => writeln!(output, "{OUT_OF_RANGE}")?,
        }
    }
}

/// Prompts on stdout and reads the selection from stdin.
///
/// # Errors
///
/// See [`select_option`].
pub fn get_option_selection<'a, T: Display>(
    options: &'a [T],
    prompt: Option<&str>,
) -> Result<&'a T> {
    select_option(options, prompt, &mut stdin().lock(), &mut stdout().lock())
}

/// Writes `prompt` and returns the next line of `input`, trimmed.
///
/// An empty line is returned as an empty string.
///
/// # Errors
///
/// - [`Error::InputClosed`] if `input` has no more lines
/// - [`Error::Stdio`] if reading or writing fails
pub fn read_value<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }

    Ok(line.trim().to_string())
}

/// Prompts on stdout for a value and reads it from stdin.
///
/// # Errors
///
/// See [`read_value`].
pub fn prompt_value(prompt: &str) -> Result<String> {
    read_value(prompt, &mut stdin().lock(), &mut stdout().lock())
}
