//! The `cr` query flow.
//!
//! Builds a query from the arguments or from a field menu, validates it
//! against [`CONTACT_FIELDS`], prints it and saves it as the last query.
//! All console traffic goes through the streams handed in, so the flow runs
//! the same against a terminal or against buffers.

use std::io::{BufRead, Write};
use std::path::Path;

use contact_register_core::config;
use contact_register_core::error::{Error, Result};
use contact_register_core::file_handling::{get_last_query, try_create_dir, write_last_query};
use contact_register_core::query::{ensure_known_fields, parse_query_filters, QueryFilter};
use itertools::Itertools;
use log::{debug, info, warn};

use crate::cli_args::Args;
use crate::option_selection::{read_value, select_option, write_command_options};
use crate::CONTACT_FIELDS;

/// Build a single-filter query from a menu of contact fields
fn prompt_for_filters<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<QueryFilter>> {
    write_command_options(&CONTACT_FIELDS, Some("Search contacts by:"), output)?;
    let field = select_option(&CONTACT_FIELDS, Some("Field: "), input, output)?;
    let pattern = read_value(&format!("Pattern for `{field}`: "), input, output)?;

    Ok(vec![QueryFilter::new(field, &pattern)])
}

fn write_filters<W: Write>(filters: &[QueryFilter], output: &mut W) -> Result<()> {
    writeln!(output, "Query:")?;
    for filter in filters {
        writeln!(output, "\t{}: \"{}\"", filter.field(), filter.pattern())?;
    }

    Ok(())
}

fn show_last_query<W: Write>(last_query_path: &Path, output: &mut W) -> Result<()> {
    match get_last_query(last_query_path)? {
        Some(filters) => {
            writeln!(output, "Last query: {}", filters.iter().join(","))?;
            write_filters(&filters, output)?;
        }
        None => {
            debug!("No last query at `{}`", last_query_path.display());
            writeln!(output, "No query has been saved yet.")?;
        }
    }

    Ok(())
}

/// Runs one `cr` invocation.
///
/// Prompts and results go to `output`, hints that accompany a failure go to
/// `errors`. The failure itself is returned for the caller to report.
///
/// # Errors
///
/// Returns an error if the query is malformed or names an unknown field, if
/// interactive input ends early, or if the data directory or last query file
/// cannot be written or read.
pub fn run<R: BufRead, W: Write, E: Write>(
    args: &Args,
    input: &mut R,
    output: &mut W,
    errors: &mut E,
) -> Result<()> {
    let data_dir = config::get_data_dir(&args.data_dir);
    debug!("Data directory: `{}`", data_dir);
    let last_query_path = config::get_last_query_path(&data_dir);

    if args.last {
        return show_last_query(&last_query_path, output);
    }

    let filters = match &args.query {
        Some(query) => parse_query_filters(query)?,
        None => prompt_for_filters(input, output)?,
    };

    if let Err(e) = ensure_known_fields(&filters, &CONTACT_FIELDS) {
        let known_fields = CONTACT_FIELDS.iter().join(", ");
        warn!("Rejected query, known fields are: {}", known_fields);
        writeln!(errors, "Known fields are: {known_fields}")?;
        return Err(e);
    }

    write_filters(&filters, output)?;

    if args.dry_run {
        writeln!(output, "Dry run is specified, not saving the query.")?;
        return Ok(());
    }

    try_create_dir(&data_dir)
        .map_err(|e| Error::io_error("data directory".to_string(), data_dir.clone(), e))?;
    write_last_query(&last_query_path, &filters)?;
    info!("Saved query to `{}`", last_query_path.display());

    Ok(())
}
