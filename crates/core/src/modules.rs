//! Module file discovery.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

/// Prefix marking internal module files that are never listed.
const RESERVED_PREFIX: &str = "__";

/// Lists the files that sit next to `file`, without their extensions.
///
/// `file` is resolved to an absolute path first, so relative paths and
/// symlinks are followed. Symlinked siblings are listed when they point at a
/// file. Files whose name starts with `__` are skipped, as are
/// subdirectories. The directory is not searched recursively. Names are
/// returned sorted.
///
/// # Errors
///
/// Any failure resolving `file`, reading its directory or reading the
/// metadata of an entry (e.g. a dangling symlink) is returned as is.
///
/// # Examples
///
/// ```no_run
/// use contact_register_core::modules::get_module_files;
///
/// let commands = get_module_files("src/commands/mod.rs")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn get_module_files(file: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let resolved = fs::canonicalize(file.as_ref())?;
    let directory = resolved.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("`{}` has no parent directory", resolved.display()),
        )
    })?;

    debug!("Listing module files in `{}`", directory.display());

    let mut module_files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        let mut file_type = entry.file_type()?;
        if file_type.is_symlink() {
            file_type = fs::metadata(&path)?.file_type();
        }
        if !file_type.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_string_lossy().starts_with(RESERVED_PREFIX) {
            continue;
        }

        if let Some(stem) = path.file_stem() {
            module_files.push(stem.to_string_lossy().into_owned());
        }
    }

    module_files.sort();
    Ok(module_files)
}
