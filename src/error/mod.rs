//! Error types and handling for settings-fragments
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`document`]: Settings document and entry errors

pub mod document;
pub mod fs;

pub use document::{
    invalid_entry_name, parse_failed as document_parse_failed, root_not_map,
};
pub use fs::{
    create_dir_failed, read_failed as file_read_failed,
    write_failed as file_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for settings-fragments operations
#[derive(Error, Diagnostic, Debug)]
pub enum SettingsError {
    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(
        code(settings::fs::read_failed),
        help("Check that the file exists and is readable")
    )]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(settings::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(
        code(settings::fs::create_dir_failed),
        help("An existing directory is reused; anything else at that path is an error")
    )]
    DirectoryCreateFailed { path: String, reason: String },

    // Document errors
    #[error("Failed to parse settings document: {path}: {reason}")]
    #[diagnostic(
        code(settings::document::parse_failed),
        help("The input must be an LLSD XML document rooted at <llsd>")
    )]
    DocumentParseFailed { path: String, reason: String },

    #[error("Settings document root is {found}, expected a map: {path}")]
    #[diagnostic(
        code(settings::document::root_not_map),
        help("Only documents of the form <llsd><map>...</map></llsd> can be split")
    )]
    RootNotMap { path: String, found: String },

    #[error("Entry name '{name}' cannot be used as a file name")]
    #[diagnostic(
        code(settings::document::invalid_entry_name),
        help("Entry names must not be empty, '.', '..', or contain path separators")
    )]
    InvalidEntryName { name: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SettingsError>;
