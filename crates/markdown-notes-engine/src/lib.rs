pub mod io;
pub mod render;
pub mod session;
pub mod snippets;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{DEFAULT_SETTING_NAME, IoError};
pub use render::{
    RenderOptions, Renderer, escape_html, process_inline, render_document, wrap_in_shell,
};
pub use session::{NotesSession, Restored};
pub use snippets::{Snippet, insert_snippet};
