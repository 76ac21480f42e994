use std::fs;
use std::path::{Path, PathBuf};

/// Name of the setting the notes text is saved under unless configured otherwise.
pub const DEFAULT_SETTING_NAME: &str = "saved_notes";

const SETTING_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid setting name: {0:?}")]
    InvalidSettingName(String),
    #[error("Invalid settings directory: {0}")]
    InvalidSettingsDir(String),
}

/// Path of the file backing a named setting.
pub fn setting_path(settings_dir: &Path, name: &str) -> Result<PathBuf, IoError> {
    validate_setting_name(name)?;
    Ok(settings_dir.join(format!("{name}.{SETTING_EXTENSION}")))
}

/// Load a setting's raw text. `Ok(None)` if it was never saved.
pub fn load_setting(settings_dir: &Path, name: &str) -> Result<Option<String>, IoError> {
    let path = setting_path(settings_dir, name)?;
    if !path.exists() {
        log::debug!("No saved setting at {}", path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(&path).map_err(IoError::Io)?;
    Ok(Some(content))
}

/// Save a setting's raw text, replacing any previous value.
pub fn save_setting(settings_dir: &Path, name: &str, content: &str) -> Result<(), IoError> {
    let path = setting_path(settings_dir, name)?;

    // Create the settings directory on first save
    fs::create_dir_all(settings_dir).map_err(IoError::Io)?;

    fs::write(&path, content).map_err(IoError::Io)?;
    log::debug!("Saved {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// A setting name must map to exactly one file inside the settings directory.
pub fn validate_setting_name(name: &str) -> Result<(), IoError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');
    if invalid {
        return Err(IoError::InvalidSettingName(name.to_string()));
    }
    Ok(())
}

pub fn validate_settings_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSettingsDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}
