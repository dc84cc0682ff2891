//! Filesystem helpers for the contact register.
//!
//! This module provides directory creation, existence checks for files the
//! register is asked to import, and reading and writing of the last query.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::query::QueryFilter;

/// Creates `directory_path` and any missing parent directories.
///
/// Succeeds without doing anything if the directory already exists.
///
/// # Errors
///
/// Any other failure is returned unchanged, e.g. when a parent is a regular
/// file, the target itself is a regular file, or permission is denied.
pub fn try_create_dir(directory_path: impl AsRef<Path>) -> io::Result<()> {
    let directory_path = directory_path.as_ref();
    debug!("Ensuring directory `{}` exists", directory_path.display());
    fs::create_dir_all(directory_path)
}

/// Returns `path` if it names an existing regular file.
///
/// # Errors
///
/// Returns [`Error::NonexistentFile`] if nothing exists at `path` or if it is
/// not a regular file.
pub fn require_existing_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NonexistentFile(path.display().to_string()));
    }

    Ok(path.to_path_buf())
}

fn get_reader(file_description: &str, path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        Error::io_error(
            file_description.to_string(),
            path.display().to_string(),
            e,
        )
    })
}

/// Reads the filters of the last query from disk.
///
/// Returns `None` if no last query has been saved at `last_query_path`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or does not hold a
/// list of filters.
pub fn get_last_query(last_query_path: impl AsRef<Path>) -> Result<Option<Vec<QueryFilter>>> {
    let last_query_path = last_query_path.as_ref();
    if !last_query_path.exists() {
        return Ok(None);
    }

    let reader = get_reader("last query file", last_query_path)?;

    let filters: Vec<QueryFilter> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "last query".to_string(),
            last_query_path.display().to_string(),
            e,
        )
    })?;

    Ok(Some(filters))
}

/// Saves `filters` as the last query, replacing any previous one.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_last_query(last_query_path: impl AsRef<Path>, filters: &[QueryFilter]) -> Result<()> {
    let last_query_path = last_query_path.as_ref();
    let writer = File::create(last_query_path).map_err(|e| {
        Error::io_error(
            "last query file".to_string(),
            last_query_path.display().to_string(),
            e,
        )
    })?;

    serde_yaml::to_writer(writer, filters).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "last query".to_string(),
            last_query_path.display().to_string(),
            e,
        )
    })
}
