//! Query string parsing.
//!
//! A query is a comma-separated list of `field=pattern` pairs, for example
//! `name=Bob, email=bob@example.com`. Each pair becomes a [`QueryFilter`].
//! Patterns may themselves contain `=`, only the first one separates the
//! field from the pattern.

use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single field/pattern pair taken from a query string.
///
/// Both parts are trimmed of surrounding whitespace on construction. Neither
/// is checked for emptiness, and the field is not checked against any set of
/// known fields; see [`ensure_known_fields`] for that.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    field: String,
    pattern: String,
}

impl QueryFilter {
    pub fn new(field: &str, pattern: &str) -> Self {
        Self {
            field: field.trim().to_string(),
            pattern: pattern.trim().to_string(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Display for QueryFilter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}={}", self.field, self.pattern)
    }
}

/// Parses a query string into its filters, in input order.
///
/// # Errors
///
/// Returns [`Error::MalformedQuery`] carrying the whole query if any segment
/// has no `=`. An empty query is a single segment without `=`, so it is
/// malformed as well.
///
/// # Examples
///
/// ```
/// use contact_register_core::query::parse_query_filters;
///
/// let filters = parse_query_filters("name = Bob, note=a=b")?;
/// assert_eq!(filters[0].field(), "name");
/// assert_eq!(filters[0].pattern(), "Bob");
/// assert_eq!(filters[1].pattern(), "a=b");
/// # Ok::<(), contact_register_core::error::Error>(())
/// ```
pub fn parse_query_filters(query: &str) -> Result<Vec<QueryFilter>> {
    let mut filters = Vec::new();

    for segment in query.split(',') {
        let Some((field, pattern)) = segment.split_once('=') else {
            return Err(Error::MalformedQuery(query.to_string()));
        };

        filters.push(QueryFilter::new(field, pattern));
    }

    debug!("Parsed {} filter(s) from query `{}`", filters.len(), query);
    Ok(filters)
}

/// Checks every filter's field against the fields a caller can search on.
///
/// # Errors
///
/// Returns [`Error::UnknownQueryField`] with the first field that is not in
/// `known_fields`. Matching is case-sensitive.
pub fn ensure_known_fields(filters: &[QueryFilter], known_fields: &[&str]) -> Result<()> {
    for filter in filters {
        if !known_fields.contains(&filter.field()) {
            return Err(Error::UnknownQueryField(filter.field().to_string()));
        }
    }

    Ok(())
}
