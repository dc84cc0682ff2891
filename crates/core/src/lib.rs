//! Contact Register Core Library
//!
//! This crate provides the non-interactive helpers behind the contact
//! register command-line program.
//!
//! # Key Features
//!
//! - **Query Parsing**: Turn `field=pattern,...` strings into [`query::QueryFilter`]s
//! - **Field Validation**: Reject filters on fields the register does not know
//! - **Module Discovery**: List the sibling files of a module
//! - **Filesystem Helpers**: Idempotent directory creation and file existence checks
//! - **Last Query**: Save and reload the most recent query
//!
//! # Examples
//!
//! ```
//! use contact_register_core::query::{ensure_known_fields, parse_query_filters};
//!
//! let filters = parse_query_filters("name=Bob, email=bob@example.com")?;
//! ensure_known_fields(&filters, &["name", "email"])?;
//! assert_eq!(filters.len(), 2);
//! # Ok::<(), contact_register_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod modules;
pub mod query;
