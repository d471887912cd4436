//! split-settings: split a settings file into one fragment file per entry

use clap::Parser;

use settings_fragments::cli::{SplitCli, screen_split_args};
use settings_fragments::commands;

fn main() {
    let screened = screen_split_args(std::env::args_os());
    let cli = SplitCli::parse_from(&screened.args);

    if let Some(shell) = cli.completions {
        commands::completions::run::<SplitCli>(shell);
        return;
    }

    if let Err(e) = commands::split::run(&cli, &screened) {
        settings_fragments::report_error(&e);
        std::process::exit(1);
    }
}
