//! # Inline Processing
//!
//! Rewrites the inline spans of a single line into HTML.
//!
//! ## Architecture
//!
//! Inline processing is a fixed, ordered pipeline of rewrite stages
//! (`types::PIPELINE`). Each stage is a full pass over the output of the
//! previous stage, so a delimiter consumed early is invisible later:
//!
//! 1. Code spans (content escaped)
//! 2. Bold `**`, then bold `__`
//! 3. Italic `*`, then italic `_`
//! 4. Links `[text](url)`
//!
//! Delimited stages use `parser::delimited_segments`, a forward scanner that
//! splits the line into literal and inner segments.
//!
//! ## Modules
//!
//! - **`types`**: `InlineStage`, `Segment` and the `PIPELINE` order
//! - **`kinds`**: Inline types owning their delimiters and HTML
//! - **`cursor`**: `Cursor` for forward scanning
//! - **`parser`**: `process_inline()` entry point and the stage scanners

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{process_inline, process_inline_with};
pub use types::{InlineStage, PIPELINE, Segment};
