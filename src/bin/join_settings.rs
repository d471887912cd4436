//! join-settings: generate NAME.xml from the fragments in NAME.d/

use clap::Parser;

use settings_fragments::cli::JoinCli;
use settings_fragments::commands;

fn main() {
    let cli = JoinCli::parse();

    if let Some(shell) = cli.completions {
        commands::completions::run::<JoinCli>(shell);
        return;
    }

    if let Err(e) = commands::join::run(&cli) {
        settings_fragments::report_error(&e);
        std::process::exit(1);
    }
}
