//! The host side of the preview: persist the raw text, render the page.
//!
//! A host calls [`NotesSession::restore`] once at startup and
//! [`NotesSession::text_changed`] on every edit. Nothing is cached between
//! calls; each one renders the full text from scratch.

use std::path::{Path, PathBuf};

use crate::io::{self, IoError};
use crate::render::Renderer;

/// Saved notes brought back at startup, with their rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    pub text: String,
    pub page: String,
}

pub struct NotesSession {
    settings_dir: PathBuf,
    setting_name: String,
    renderer: Renderer,
}

impl NotesSession {
    pub fn new(
        settings_dir: impl Into<PathBuf>,
        setting_name: impl Into<String>,
        renderer: Renderer,
    ) -> Self {
        Self {
            settings_dir: settings_dir.into(),
            setting_name: setting_name.into(),
            renderer,
        }
    }

    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    pub fn setting_name(&self) -> &str {
        &self.setting_name
    }

    /// Loads the saved notes, best-effort.
    ///
    /// Returns `None` when nothing was saved, the saved text is empty, or
    /// loading fails. Failures are logged and otherwise ignored so the
    /// editor starts empty.
    pub fn restore(&self) -> Option<Restored> {
        let text = self.saved_text()?;
        let page = self.renderer.render_page(&text);
        Some(Restored { text, page })
    }

    /// The saved text on its own, with the same best-effort rules as
    /// [`NotesSession::restore`]. Nothing is rendered.
    pub fn saved_text(&self) -> Option<String> {
        match io::load_setting(&self.settings_dir, &self.setting_name) {
            Ok(Some(text)) if !text.is_empty() => {
                log::info!(
                    "Restored {} bytes of notes from setting {:?}",
                    text.len(),
                    self.setting_name
                );
                Some(text)
            }
            Ok(_) => {
                log::info!("No saved notes under setting {:?}", self.setting_name);
                None
            }
            Err(e) => {
                log::warn!("Failed to load saved notes: {e}");
                None
            }
        }
    }

    /// Saves the new text, then returns its rendered page.
    pub fn text_changed(&self, text: &str) -> Result<String, IoError> {
        self.save(text)?;
        Ok(self.renderer.render_page(text))
    }

    /// Saves the new text without rendering it.
    pub fn save(&self, text: &str) -> Result<(), IoError> {
        io::save_setting(&self.settings_dir, &self.setting_name, text)
    }

    /// Renders without saving.
    pub fn preview(&self, text: &str) -> String {
        self.renderer.render_page(text)
    }
}
