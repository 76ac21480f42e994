use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary settings directory
pub fn create_test_settings_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content in the settings directory
pub fn create_test_file(settings_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = settings_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
