//! File system errors

use std::path::Path;

use super::SettingsError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SettingsError {
    SettingsError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> SettingsError {
    SettingsError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory creation failed error
pub fn create_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> SettingsError {
    SettingsError::DirectoryCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub(crate) fn file_read_error(path: &Path, e: &std::io::Error) -> SettingsError {
    read_failed(path.display().to_string(), e.to_string())
}

pub(crate) fn file_write_error(path: &Path, e: &std::io::Error) -> SettingsError {
    write_failed(path.display().to_string(), e.to_string())
}
