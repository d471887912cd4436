//! Settings document errors

use super::SettingsError;

/// Creates a document parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SettingsError {
    SettingsError::DocumentParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a document whose root value is not a map
pub fn root_not_map(path: impl Into<String>, found: impl Into<String>) -> SettingsError {
    SettingsError::RootNotMap {
        path: path.into(),
        found: found.into(),
    }
}

/// Creates an error for an entry name that cannot become a fragment file name
pub fn invalid_entry_name(name: impl Into<String>) -> SettingsError {
    SettingsError::InvalidEntryName { name: name.into() }
}
