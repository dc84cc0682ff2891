//! Path defaults for the contact register.
//!
//! Paths may start with `~`, which is expanded to the user's home directory.

use std::path::{Path, PathBuf};

/// Default directory holding the register's data
const DEFAULT_DATA_DIR: &str = "~/.contact-register";

/// File name of the saved last query inside the data directory
pub const LAST_QUERY_FILE_NAME: &str = "last_query.yml";

/// Resolves the data directory.
///
/// Uses the provided path if there is one, otherwise the default. Shell
/// expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use contact_register_core::config::get_data_dir;
///
/// let custom = get_data_dir(&Some("/srv/contacts".to_string()));
/// assert_eq!(custom, "/srv/contacts");
/// ```
pub fn get_data_dir(data_dir_arg: &Option<String>) -> String {
    let data_dir = match data_dir_arg {
        Some(data_dir) => data_dir,
        None => DEFAULT_DATA_DIR,
    };

    shellexpand::tilde(data_dir).to_string()
}

/// Path of the last query file within `data_dir`.
pub fn get_last_query_path(data_dir: impl AsRef<Path>) -> PathBuf {
    data_dir.as_ref().join(LAST_QUERY_FILE_NAME)
}
