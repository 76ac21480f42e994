//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and their HTML.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` ... `` ` ``, content escaped
//! - **`Strong`**: `**` or `__`
//! - **`Emphasis`**: `*` or `_`
//! - **`Link`**: `[`, `](`, `)`
//!
//! The pipeline and the scanners never hardcode a delimiter; they ask these types.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use strong::Strong;
