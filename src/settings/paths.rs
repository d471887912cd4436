//! File naming for setting sets and their fragments
//!
//! A setting set `N` lives at `<app-dir>/N.xml` (aggregate) and
//! `<app-dir>/N.d/*.xml` (fragments).

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Result, invalid_entry_name};

/// Setting set joined when no names are given
pub const DEFAULT_SET_NAME: &str = "settings";

/// Aggregate file split when no infile is given
pub const DEFAULT_INFILE: &str = "settings.xml";

/// Output directory used when none can be derived from the infile
pub const DEFAULT_OUTDIR: &str = "settings.d";

/// Extension shared by aggregate and fragment files
pub const MARKUP_EXTENSION: &str = ".xml";

const FRAGMENT_DIR_SUFFIX: &str = ".d";

/// `<app_dir>/<name>.xml`
pub fn aggregate_path(app_dir: &Path, name: &str) -> PathBuf {
    app_dir.join(format!("{name}{MARKUP_EXTENSION}"))
}

/// `<app_dir>/<name>.d`
pub fn fragment_dir(app_dir: &Path, name: &str) -> PathBuf {
    app_dir.join(format!("{name}{FRAGMENT_DIR_SUFFIX}"))
}

/// Output directory for splitting `infile` when none was requested.
///
/// `foo/bar.xml` becomes `bar.d`, relative to the working directory rather
/// than the infile's directory. Infiles without the markup extension fall
/// back to [`DEFAULT_OUTDIR`].
pub fn derive_outdir(infile: &Path) -> PathBuf {
    infile
        .file_name()
        .and_then(OsStr::to_str)
        .and_then(|name| name.strip_suffix(MARKUP_EXTENSION))
        .map_or_else(
            || PathBuf::from(DEFAULT_OUTDIR),
            |stem| PathBuf::from(format!("{stem}{FRAGMENT_DIR_SUFFIX}")),
        )
}

/// Whether a directory entry name is a fragment file name. The name need
/// not be valid UTF-8.
pub fn is_markup_file_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(MARKUP_EXTENSION.as_bytes())
}

/// Fragment file name for an entry, `<key>.xml`.
///
/// Keys that would not land as a single file inside the output directory
/// are rejected.
pub fn fragment_file_name(key: &str) -> Result<String> {
    let unsafe_name = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if unsafe_name {
        return Err(invalid_entry_name(key));
    }
    Ok(format!("{key}{MARKUP_EXTENSION}"))
}
