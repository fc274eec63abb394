#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Comment syntax table used across integration tests.
pub const SYNTAX_TABLE: &str = r#".py,1,#,2,''' ''',""" """
.java,1,//,1,/* */
.c,1,//,1,/* */
.css,1,/*,1,/* */
.html,1,<!--,1,<!-- -->
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with the default syntax table written to `syntax.csv`.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_file("syntax.csv", SYNTAX_TABLE);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the default syntax table.
    pub fn table(&self) -> PathBuf {
        self.dir.path().join("syntax.csv")
    }
}
