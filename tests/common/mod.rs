//! Common test utilities for settings-fragments integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch app-settings directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write `<set>.d/<key>.xml` holding a settings-style map entry
    #[allow(dead_code)]
    pub fn write_fragment(&self, set: &str, key: &str, value: &str) {
        self.write_file(
            &format!("{set}.d/{key}.xml"),
            &format!(
                "  <key>{key}</key>\n  <map>\n    <key>Type</key>\n    <string>String</string>\n    \
                 <key>Value</key>\n    <string>{value}</string>\n  </map>"
            ),
        );
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Sorted file names directly inside a workspace directory
    #[allow(dead_code)]
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(path))
            .expect("Failed to read directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

/// An aggregate settings document with the given `(key, string value)` entries
#[allow(dead_code)]
pub fn settings_document(entries: &[(&str, &str)]) -> String {
    let mut doc = String::from("<?xml version=\"1.0\" ?>\n<llsd>\n<map>\n");
    for (key, value) in entries {
        doc.push_str(&format!(
            "  <key>{key}</key>\n  <map>\n    <key>Value</key>\n    <string>{value}</string>\n  </map>\n"
        ));
    }
    doc.push_str("</map>\n</llsd>\n");
    doc
}
