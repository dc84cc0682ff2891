use std::fmt::Display;
use std::io::{stdout, Write};

use super::DEFAULT_TITLE;

/// Writes `title` followed by one `index: option` line per option.
///
/// # Errors
///
/// Returns any error from writing to `output`.
pub fn write_command_options<T: Display, W: Write>(
    options: &[T],
    title: Option<&str>,
    output: &mut W,
) -> std::io::Result<()> {
    writeln!(output, "{}", title.unwrap_or(DEFAULT_TITLE))?;
    for (index, option) in options.iter().enumerate() {
        writeln!(output, "{index}: {option}")?;
    }

    output.flush()
}

/// Prints the enumerated options to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written to.
pub fn display_command_options<T: Display>(
    options: &[T],
    title: Option<&str>,
) -> std::io::Result<()> {
    write_command_options(options, title, &mut stdout().lock())
}
