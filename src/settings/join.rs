//! Join a fragment directory into one aggregate settings file
//!
//! Fragment bodies are copied as opaque bytes, in lexical file name order,
//! between a fixed header and footer. Whether the result is well-formed
//! markup is left to whoever reads the aggregate.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::error::fs::{file_read_error, file_write_error, read_failed};

use super::paths::{aggregate_path, fragment_dir, is_markup_file_name};

/// Result of joining one setting set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The aggregate was written from `fragments`, in order
    Written {
        output: PathBuf,
        fragments: Vec<PathBuf>,
    },
    /// The fragment directory does not exist; nothing was written
    MissingDir { dir: PathBuf },
}

/// Markup files directly inside `dir`, sorted by file name
pub fn collect_fragments(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut fragments = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).display().to_string();
            read_failed(path, e.to_string())
        })?;
        if entry.file_type().is_file() && is_markup_file_name(entry.file_name()) {
            fragments.push(entry.into_path());
        }
    }
    Ok(fragments)
}

/// Wrap fragment bodies in the aggregate envelope for set `name`
pub fn render_aggregate<B: AsRef<[u8]>>(name: &str, bodies: &[B]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"<?xml version=\"1.0\" ?>\n<llsd>\n<map>");
    out.extend_from_slice(
        b"\n\n  <!-- Note for client developers: This file is auto-generated -->",
    );
    out.extend_from_slice(b"\n  <!-- it will be overwritten each time the client is compiled -->");
    out.extend_from_slice(format!("\n  <!-- please put your changes in {name}.d/ -->\n").as_bytes());
    for body in bodies {
        out.push(b'\n');
        out.extend_from_slice(body.as_ref());
    }
    out.extend_from_slice(b"\n</map>\n</llsd>\n");
    out
}

/// Join `<app_dir>/<name>.d/*.xml` into `<app_dir>/<name>.xml`
pub fn join_set(app_dir: &Path, name: &str) -> Result<JoinOutcome> {
    let dir = fragment_dir(app_dir, name);
    if !dir.is_dir() {
        return Ok(JoinOutcome::MissingDir { dir });
    }

    let fragments = collect_fragments(&dir)?;
    let bodies = fragments
        .iter()
        .map(|path| std::fs::read(path).map_err(|e| file_read_error(path, &e)))
        .collect::<Result<Vec<_>>>()?;

    let output = aggregate_path(app_dir, name);
    std::fs::write(&output, render_aggregate(name, &bodies))
        .map_err(|e| file_write_error(&output, &e))?;

    Ok(JoinOutcome::Written { output, fragments })
}
