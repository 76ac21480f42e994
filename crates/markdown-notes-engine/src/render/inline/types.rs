use super::kinds::{CodeSpan, Emphasis, Link, Strong};

/// One piece of a line split around a delimited span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any span, kept verbatim.
    Literal(&'a str),
    /// Content between an opening and closing delimiter.
    Inner(&'a str),
}

/// A single rewrite pass over the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStage {
    CodeSpan,
    Strong(&'static str),
    Emphasis(&'static str),
    Link,
}

impl InlineStage {
    /// The delimiter that starts this stage's span.
    pub fn marker(self) -> &'static str {
        match self {
            InlineStage::CodeSpan => CodeSpan::TICK,
            InlineStage::Strong(m) | InlineStage::Emphasis(m) => m,
            InlineStage::Link => Link::OPEN,
        }
    }
}

/// Stages in the order they run.
///
/// Each stage sees the output of the previous one. Double-character
/// delimiters must run before their single-character counterparts, so a
/// `**bold**` is consumed whole before the italic stage looks for `*`.
pub const PIPELINE: [InlineStage; 6] = [
    InlineStage::CodeSpan,
    InlineStage::Strong(Strong::STARS),
    InlineStage::Strong(Strong::UNDERSCORES),
    InlineStage::Emphasis(Emphasis::STAR),
    InlineStage::Emphasis(Emphasis::UNDERSCORE),
    InlineStage::Link,
];
