// Test file fixtures

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Manages temporary configuration and theme files
pub struct TestFixture {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestFixture {
    /// Create a new temporary file with given content
    pub fn new(filename: &str, content: &str) -> std::io::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join(filename);

        let mut file = fs::File::create(&path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        Ok(TestFixture {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Read the current content of the file
    pub fn read_content(&self) -> std::io::Result<String> {
        fs::read_to_string(&self.path)
    }
}
