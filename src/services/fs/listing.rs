use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::errors::{Error, Result};
use crate::models::file_entry::{FileEntry, FileKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Include entries whose name starts with a dot.
    pub show_all: bool,
    /// Drop directories from the listing.
    pub files_only: bool,
}

/// Reads the immediate children of `dir` and classifies each one.
///
/// Only the failure to read `dir` itself is fatal. A child whose
/// metadata cannot be read is skipped; a symlink that cannot be
/// resolved stays in the listing as a file. Entries come back in
/// filesystem order, unsorted.
pub fn list_dir(dir: &Path, opts: ListOptions) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for child in fs::read_dir(dir).map_err(Error::access)? {
        let child = match child {
            Ok(child) => child,
            Err(err) => {
                warn!("skipping unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        let name = os_str_to_string(child.file_name());
        let hidden = name.starts_with('.');

        // Dropped entries get no stat work at all.
        if hidden && !opts.show_all {
            continue;
        }

        let path = child.path();
        let md = match fs::symlink_metadata(&path) {
            Ok(md) => md,
            Err(err) => {
                warn!("skipping {}: {}", path.display(), err);
                continue;
            }
        };

        let file_type = md.file_type();
        let kind = if file_type.is_dir() {
            FileKind::Dir
        } else if file_type.is_symlink() {
            FileKind::Link
        } else {
            FileKind::File
        };

        let effective_dir = match kind {
            FileKind::Dir => true,
            FileKind::File => false,
            // One following stat; a broken or cyclic link stays a file.
            FileKind::Link => match fs::metadata(&path) {
                Ok(target) => target.is_dir(),
                Err(err) => {
                    debug!("unresolved symlink {}: {}", path.display(), err);
                    false
                }
            },
        };

        if opts.files_only && effective_dir {
            continue;
        }

        let extension = if effective_dir {
            String::new()
        } else {
            extension_of(&name)
        };

        entries.push(FileEntry {
            name,
            kind,
            effective_dir,
            size: md.len(),
            hidden,
            extension,
        });
    }

    Ok(entries)
}

/// Extension per [`Path::extension`] rules: the leading dot of a hidden
/// name is not an extension separator, so `.gitignore` has none.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
