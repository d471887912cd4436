//! settings-fragments
//!
//! Keeps an LLSD settings file editable as one small file per entry:
//! `join-settings` concatenates `NAME.d/*.xml` into `NAME.xml`, and
//! `split-settings` parses `NAME.xml` back into one fragment per key.

pub mod cli;
pub mod commands;
pub mod error;
pub mod llsd;
pub mod settings;
pub mod ui;

/// Print a fatal error the way both binaries report it
pub fn report_error(err: &error::SettingsError) {
    use miette::Diagnostic;

    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}
