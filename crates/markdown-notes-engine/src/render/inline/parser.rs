use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong},
    types::{InlineStage, PIPELINE, Segment},
};
use crate::render::{RenderOptions, html::escape_html};

/// Rewrites the inline spans of one line into HTML with default options.
///
/// Never fails: unterminated delimiters and incomplete links are left in
/// place as literal text.
pub fn process_inline(line: &str) -> String {
    process_inline_with(line, &RenderOptions::default())
}

/// Rewrites the inline spans of one line into HTML.
///
/// With `escape_text` set, the whole line is escaped first and code span
/// content is not escaped a second time.
pub fn process_inline_with(line: &str, options: &RenderOptions) -> String {
    let mut text = if options.escape_text {
        escape_html(line)
    } else {
        line.to_string()
    };
    for stage in PIPELINE {
        text = apply_stage(stage, &text, options.escape_text);
    }
    text
}

/// Runs a single stage over `text`.
pub fn apply_stage(stage: InlineStage, text: &str, already_escaped: bool) -> String {
    match stage {
        InlineStage::CodeSpan => rewrite_delimited(text, CodeSpan::TICK, |inner| {
            CodeSpan::to_html(inner, !already_escaped)
        }),
        InlineStage::Strong(marker) => rewrite_delimited(text, marker, Strong::to_html),
        InlineStage::Emphasis(marker) => rewrite_delimited(text, marker, Emphasis::to_html),
        InlineStage::Link => rewrite_links(text.to_string()),
    }
}

/// Splits `s` into literal and inner segments around `marker` pairs.
///
/// Scans left to right pairing each opening marker with the nearest closing
/// marker after it. An opening marker with no partner ends the scan and the
/// rest of the text, marker included, becomes one literal segment.
pub fn delimited_segments<'a>(s: &'a str, marker: &str) -> Vec<Segment<'a>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while let Some(open) = cur.find(marker) {
        let inner_start = open + marker.len();
        let Some(close) = cur.find_from(inner_start, marker) else {
            break;
        };
        if open > cur.i {
            out.push(Segment::Literal(cur.slice(cur.i, open)));
        }
        out.push(Segment::Inner(cur.slice(inner_start, close)));
        cur.bump_to(close + marker.len());
    }

    if !cur.eof() {
        out.push(Segment::Literal(cur.rest()));
    }
    out
}

fn rewrite_delimited(text: &str, marker: &str, render: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in delimited_segments(text, marker) {
        match segment {
            Segment::Literal(s) => out.push_str(s),
            Segment::Inner(s) => out.push_str(&render(s)),
        }
    }
    out
}

/// Substitutes `[text](url)` patterns until one of the three markers is missing.
///
/// Every search restarts from the beginning of the rewritten text. Each
/// substitution removes the `[` it started from, so the loop terminates.
fn rewrite_links(mut text: String) -> String {
    loop {
        let Some(open) = text.find(Link::OPEN) else {
            break;
        };
        let Some(middle) = text[open..].find(Link::MIDDLE).map(|o| open + o) else {
            break;
        };
        let Some(close) = text[middle..].find(Link::CLOSE).map(|o| middle + o) else {
            break;
        };

        let label = &text[open + Link::OPEN.len()..middle];
        let url = &text[middle + Link::MIDDLE.len()..close];
        let anchor = Link::to_html(label, url);
        text.replace_range(open..close + Link::CLOSE.len(), &anchor);
    }
    text
}
