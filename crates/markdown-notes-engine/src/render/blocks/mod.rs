//! # Block Rendering
//!
//! Single-pass, line-oriented block splitting.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    from local facts only (its prefix and whether it is blank).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` carries the
//!    `RenderState` (inside a code fence, inside a list) across lines and
//!    emits one HTML piece per line, plus list open/close tags.
//!
//! ## Modules
//!
//! - **`kinds`**: Block types owning their delimiters and HTML tags
//! - **`classify`**: `MarkdownLineClassifier` and line splitting
//! - **`builder`**: `BlockBuilder` state machine and `RenderState`
//!
//! ## Key Invariants
//!
//! - No lookahead and no backtracking
//! - Code fences are raw zones: lines inside are escaped, never inline-processed
//! - Anything still open at end of input is closed by `BlockBuilder::finish`

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::{BlockBuilder, RenderState};
pub use classify::{LineClass, MarkdownLineClassifier, lines};
