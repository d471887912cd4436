//! join-settings arguments

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::settings::paths::DEFAULT_SET_NAME;

/// Generate <name>.xml from the fragment files in <name>.d/
#[derive(Parser, Debug)]
#[command(
    name = "join-settings",
    author,
    version,
    styles = super::styles(),
    about = "Generate aggregate settings files from per-key fragment directories",
    long_about = "For each setting set NAME, concatenates <DIR>/NAME.d/*.xml in file name order \
                  into <DIR>/NAME.xml, wrapped in an LLSD map with an auto-generated notice.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  join-settings                              \x1b[90m# settings.d/ -> settings.xml\x1b[0m\n   \
                  join-settings settings settings_per_account\n   \
                  join-settings -d indra/newview/app_settings\n"
)]
pub struct JoinCli {
    /// Setting sets to generate (defaults to "settings")
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Directory holding NAME.xml and NAME.d/
    #[arg(
        long,
        short = 'd',
        value_name = "DIR",
        env = "SETTINGS_APP_DIR",
        default_value = "."
    )]
    pub app_settings_dir: PathBuf,

    /// List each fragment as it is appended
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub completions: Option<Shell>,
}

impl JoinCli {
    /// Requested setting sets, or the default set when none were named
    pub fn set_names(&self) -> Vec<String> {
        if self.names.is_empty() {
            vec![DEFAULT_SET_NAME.to_string()]
        } else {
            self.names.clone()
        }
    }
}
