//! Split an aggregate settings file into one fragment file per entry

use std::path::{Path, PathBuf};

use crate::error::fs::{file_read_error, file_write_error};
use crate::error::{Result, create_dir_failed, document_parse_failed, root_not_map};
use crate::llsd::{self, Map, PrettyFormatter, Value};
use crate::ui::ProgressReporter;

use super::paths::{DEFAULT_INFILE, derive_outdir, fragment_file_name};

/// Resolved input file and output directory for one split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPlan {
    pub infile: PathBuf,
    pub outdir: PathBuf,
}

impl SplitPlan {
    /// Fill in defaults: `settings.xml` as infile, and an outdir derived
    /// from the infile. Empty paths count as not given.
    pub fn resolve(infile: Option<&Path>, outdir: Option<&Path>) -> Self {
        let infile = infile
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_INFILE), Path::to_path_buf);
        let outdir = outdir
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| derive_outdir(&infile), Path::to_path_buf);
        Self { infile, outdir }
    }
}

/// A rendered fragment waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub key: String,
    pub file_name: String,
    pub contents: String,
}

/// Read and parse an aggregate document; its root must be a map
pub fn read_document(path: &Path) -> Result<Map> {
    let text = std::fs::read_to_string(path).map_err(|e| file_read_error(path, &e))?;
    let root = llsd::parse_xml(&text)
        .map_err(|e| document_parse_failed(path.display().to_string(), e.to_string()))?;
    match root {
        Value::Map(map) => Ok(map),
        other => Err(root_not_map(path.display().to_string(), other.type_name())),
    }
}

/// Fragment text for one entry: the key tag followed by its value, indented
/// as it sits inside the aggregate's root map.
///
/// ```text
///   <key>AFKTimeout</key>
///   <map>
///     <key>Value</key>
///     <real>300.0</real>
///   </map>
/// ```
pub fn render_fragment(key: &str, value: &Value) -> String {
    let mut out = String::from("  <key>");
    out.push_str(&quick_xml::escape::escape(key));
    out.push_str("</key>\n  ");
    PrettyFormatter::new()
        .with_base_level(1)
        .write_value(&mut out, value);
    out.push('\n');
    out
}

/// Render every entry in key order. Fails on the first entry whose name is
/// not usable as a file name, before anything is written.
pub fn render_fragments(document: &Map) -> Result<Vec<Fragment>> {
    document
        .iter()
        .map(|(key, value)| -> Result<Fragment> {
            Ok(Fragment {
                key: key.clone(),
                file_name: fragment_file_name(key)?,
                contents: render_fragment(key, value),
            })
        })
        .collect()
}

/// Create `dir` and its parents. An existing directory is reused; any other
/// failure, including a non-directory already at that path, is an error.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| create_dir_failed(dir.display().to_string(), e.to_string()))
}

/// Write fragments into `outdir`, overwriting existing files
pub fn write_fragments(
    fragments: &[Fragment],
    outdir: &Path,
    reporter: &mut dyn ProgressReporter,
) -> Result<Vec<PathBuf>> {
    ensure_output_dir(outdir)?;
    reporter.start(fragments.len() as u64);

    let mut written = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let path = outdir.join(&fragment.file_name);
        if let Err(e) = std::fs::write(&path, &fragment.contents) {
            reporter.abandon();
            return Err(file_write_error(&path, &e));
        }
        reporter.entry_done(&fragment.key);
        written.push(path);
    }

    reporter.finish();
    Ok(written)
}

/// Read, render, then write: the whole split for one plan
pub fn split_file(
    plan: &SplitPlan,
    reporter: &mut dyn ProgressReporter,
) -> Result<Vec<PathBuf>> {
    let document = read_document(&plan.infile)?;
    let fragments = render_fragments(&document)?;
    write_fragments(&fragments, &plan.outdir, reporter)
}
