//! join-settings command implementation

use crate::cli::JoinCli;
use crate::error::Result;
use crate::settings::paths::fragment_dir;
use crate::settings::{JoinOutcome, join_set};
use crate::ui::Console;

/// Join every requested setting set. A missing fragment directory is
/// reported and skipped; read and write failures stop the run.
pub fn run(cli: &JoinCli) -> Result<()> {
    let console = Console::new(cli.verbose);

    for name in cli.set_names() {
        let dir = fragment_dir(&cli.app_settings_dir, &name);
        console.status(format!("generating {name}.xml from {}", dir.display()));

        match join_set(&cli.app_settings_dir, &name)? {
            JoinOutcome::MissingDir { dir } => {
                console.warn(format!("dir not found: {}", dir.display()));
            }
            JoinOutcome::Written { output, fragments } => {
                for fragment in &fragments {
                    console.detail(format!("+ {}", fragment.display()));
                }
                console.detail(format!(
                    "wrote {} ({} fragments)",
                    output.display(),
                    fragments.len()
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli_for(dir: &std::path::Path, names: &[&str]) -> JoinCli {
        let mut args = vec!["join-settings".to_string(), "-d".to_string()];
        args.push(dir.display().to_string());
        args.extend(names.iter().map(ToString::to_string));
        JoinCli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_run_skips_missing_sets_and_joins_the_rest() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("colors.d");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Red.xml"), "  <key>Red</key>\n  <integer>1</integer>").unwrap();

        run(&cli_for(temp.path(), &["missing", "colors"])).unwrap();

        assert!(!temp.path().join("missing.xml").exists());
        let joined = fs::read_to_string(temp.path().join("colors.xml")).unwrap();
        assert!(joined.contains("<key>Red</key>"));
        assert!(joined.contains("please put your changes in colors.d/"));
    }

    #[test]
    fn test_run_defaults_to_settings() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("settings.d")).unwrap();
        run(&cli_for(temp.path(), &[])).unwrap();
        assert!(temp.path().join("settings.xml").exists());
    }
}
