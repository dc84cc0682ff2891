//! Numbered option menus.
//!
//! This module prints a list of options with zero-based indices and reads
//! the user's choice back, re-prompting until a valid index is entered.
//!
//! Both halves come in two flavours: one generic over the input and output
//! streams, and one wired to stdin/stdout for use from the binary.

pub mod display;
pub mod input;

// Re-exports for convenience
pub use display::{display_command_options, write_command_options};
pub use input::{get_option_selection, prompt_value, read_value, select_option};

/// Title printed above the options when none is given
pub const DEFAULT_TITLE: &str = "Options:";

/// Prompt printed before reading a selection when none is given
pub const DEFAULT_PROMPT: &str = "Option: ";
