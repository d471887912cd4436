//! split-settings command implementation

use crate::cli::{LenientArgs, SplitCli};
use crate::error::Result;
use crate::settings::{SplitPlan, split_file};
use crate::ui::{Console, progress_reporter};

const PROGRAM: &str = "split-settings";

/// Split the requested settings file into fragment files
pub fn run(cli: &SplitCli, screened: &LenientArgs) -> Result<()> {
    let console = Console::new(cli.verbose);

    for warning in &screened.warnings {
        console.warn(warning);
    }
    if screened.is_bare() {
        console.status(
            "No arguments, assuming settings.xml as infile, and settings.d/ as outdir.",
        );
        console.status(format!("{PROGRAM} -h for more options"));
    }

    let plan = SplitPlan::resolve(cli.infile.as_deref(), cli.outdir.as_deref());
    // Per-file lines and the progress bar would interleave
    let mut reporter = progress_reporter(cli.quiet || cli.verbose);
    let written = split_file(&plan, reporter.as_mut())?;

    for path in &written {
        console.detail(format!("wrote {}", path.display()));
    }
    console.success(format!(
        "Split {} entries from {} into {}",
        written.len(),
        plan.infile.display(),
        plan.outdir.display()
    ));

    Ok(())
}
