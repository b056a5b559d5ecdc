//! Single-level folder listing.
//!
//! Lists the entries directly inside a folder whose name ends with the
//! target extension. Subdirectories are never entered. Symbolic links are
//! kept when they point at a regular file, as a plain directory listing
//! would show them. Names starting with `.` are skipped unless
//! [`ResolverOptions::include_hidden`] is set.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use super::{FileEntry, ResolveError, ResolverOptions};

/// Check that `folder` is an existing, readable directory.
///
/// # Errors
///
/// - `NotFound` if nothing exists at `folder`
/// - `NotADirectory` if `folder` is a file
/// - `Unreadable` if the directory cannot be listed
pub fn validate_folder(folder: &Path) -> Result<(), ResolveError> {
    let metadata = fs::metadata(folder).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ResolveError::NotFound(folder.to_path_buf()),
        _ => ResolveError::Unreadable {
            path: folder.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(ResolveError::NotADirectory(folder.to_path_buf()));
    }

    fs::read_dir(folder).map_err(|source| ResolveError::Unreadable {
        path: folder.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Whether `name` is considered by a run with `options`.
#[must_use]
pub fn is_target_name(name: &str, options: &ResolverOptions) -> bool {
    if !options.include_hidden && name.starts_with('.') {
        return false;
    }
    name.ends_with(&options.extension)
}

/// List the target files directly inside `folder`, sorted by name.
///
/// Entries that cannot be inspected and names that are not valid UTF-8 are
/// logged and skipped.
///
/// # Errors
///
/// Returns the errors of [`validate_folder`].
pub fn list_target_files(
    folder: &Path,
    options: &ResolverOptions,
) -> Result<Vec<FileEntry>, ResolveError> {
    validate_folder(folder)?;

    let walker = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
        };

        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            log::trace!("Skipping non-file entry: {}", entry.path().display());
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            log::warn!(
                "Skipping file with non UTF-8 name: {}",
                entry.path().display()
            );
            continue;
        };

        if !is_target_name(name, options) {
            log::trace!("Skipping non-target file: {name}");
            continue;
        }

        files.push(FileEntry::new(entry.path().to_path_buf(), name));
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!(
        "Found {} '{}' file(s) in {}",
        files.len(),
        options.extension,
        folder.display()
    );
    Ok(files)
}
