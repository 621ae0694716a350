// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Two lines used throughout the suite; 11 syllables each.
#[allow(dead_code)]
pub const SAMPLE_POEM: &str = "ನದಿ ತೀರದಲಿ ಹಕ್ಕಿಯ ಕೂಗು\nಮರದ ನಿಂತರಲಿ ಗಾಳಿ ಬೀಸು\n";

/// Temporary directory holding fixture documents.
#[allow(dead_code)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir().expect("create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the workspace.
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message if the file cannot be written.
    pub fn file(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to create test file at {path:?}: {e}"));
        path
    }

    pub fn read(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
    }
}
