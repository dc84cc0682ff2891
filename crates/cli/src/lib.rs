//! Contact Register CLI Library
//!
//! This crate provides the interactive side of the contact register: numbered
//! option menus, value prompts and the argument definitions of the `cr`
//! binary.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`option_selection`]: Option menus and validated index input
//! - [`session`]: The query flow run by the `cr` binary
//!
//! # Examples
//!
//! ```bash
//! # Pick a field from a menu, then type a pattern
//! cr
//!
//! # Give the whole query up front
//! cr --query "name=Bob, email=bob@example.com"
//!
//! # Show the last saved query
//! cr --last
//! ```

pub mod cli_args;
pub mod option_selection;
pub mod session;

/// Fields a contact can be searched on
pub const CONTACT_FIELDS: [&str; 5] = ["name", "surname", "email", "phone", "address"];
