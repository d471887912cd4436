//! split-settings arguments
//!
//! Malformed flag sequences do not abort a split: [`screen_split_args`]
//! drops the offending tokens, records a warning for each, and the
//! remaining arguments go to clap as usual.

use clap::Parser;
use clap_complete::Shell;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Split a settings file into one file per entry
#[derive(Parser, Debug)]
#[command(
    name = "split-settings",
    author,
    version,
    styles = super::styles(),
    args_override_self = true,
    about = "Split an aggregate settings file into per-key fragment files",
    long_about = "Parses an LLSD settings file and writes each top-level entry to <OUTDIR>/<key>.xml, \
                  ready to be joined back with join-settings.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  split-settings                               \x1b[90m# settings.xml -> settings.d/\x1b[0m\n   \
                  split-settings -i foo.xml                    \x1b[90m# foo.xml -> foo.d/\x1b[0m\n   \
                  split-settings -i foo.xml -o fragments\n"
)]
pub struct SplitCli {
    /// Settings file to split [default: settings.xml]
    #[arg(long, short = 'i', value_name = "INFILE")]
    pub infile: Option<PathBuf>,

    /// Directory to write the files to [default: derived from INFILE, e.g.
    /// foo.xml -> foo.d/, otherwise settings.d/]
    #[arg(long, short = 'o', value_name = "OUTDIR")]
    pub outdir: Option<PathBuf>,

    /// Print each fragment file as it is written
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Do not show a progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub completions: Option<Shell>,
}

/// Flags that consume the following argument
const VALUE_FLAGS: &[&str] = &["-i", "--infile", "-o", "--outdir", "--completions"];

/// Flags that stand alone
const SWITCHES: &[&str] = &[
    "-h",
    "--help",
    "-V",
    "--version",
    "-v",
    "--verbose",
    "-q",
    "--quiet",
];

/// Arguments after screening, plus one warning per dropped token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientArgs {
    pub args: Vec<OsString>,
    pub warnings: Vec<String>,
}

impl LenientArgs {
    /// Whether the program was started without any arguments
    pub fn is_bare(&self) -> bool {
        self.args.len() <= 1 && self.warnings.is_empty()
    }
}

fn is_flag(arg: &OsStr) -> bool {
    arg.to_str()
        .is_some_and(|s| s.len() > 1 && s.starts_with('-'))
}

fn takes_value(arg: &OsStr) -> bool {
    arg.to_str().is_some_and(|s| VALUE_FLAGS.contains(&s))
}

fn is_known(arg: &OsStr) -> bool {
    arg.to_str().is_some_and(|s| {
        SWITCHES.contains(&s)
            || VALUE_FLAGS
                .iter()
                .any(|flag| flag.starts_with("--") && s.starts_with(&format!("{flag}=")))
    })
}

fn syntax_warning(token: &OsStr) -> String {
    format!(
        "Wrong syntax near '{}'. Try --help for help.",
        token.to_string_lossy()
    )
}

/// Screen raw `split-settings` arguments (program name first).
///
/// Dropped with a warning: a value flag followed by another flag or by
/// nothing, an unknown flag, and a stray positional word.
pub fn screen_split_args<I, T>(raw: I) -> LenientArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut raw = raw.into_iter().map(Into::into).peekable();
    let mut screened = LenientArgs::default();

    if let Some(program) = raw.next() {
        screened.args.push(program);
    }

    while let Some(arg) = raw.next() {
        if takes_value(&arg) {
            match raw.next_if(|next| !is_flag(next)) {
                Some(value) => {
                    screened.args.push(arg);
                    screened.args.push(value);
                }
                None => screened.warnings.push(syntax_warning(&arg)),
            }
        } else if is_known(&arg) {
            screened.args.push(arg);
        } else {
            screened.warnings.push(syntax_warning(&arg));
        }
    }

    screened
}
