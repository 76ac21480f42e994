use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{BlockQuote, CodeFence, Heading, ListItem, Paragraph, ThematicBreak},
};
use crate::render::{RenderOptions, html::escape_html, inline::process_inline_with};

/// State carried from one line to the next during a single render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    pub in_code_block: bool,
    pub in_list: bool,
}

/// Phase 2 of block rendering: turns classified lines into HTML pieces.
///
/// One builder lives for exactly one render pass. Pieces are joined with
/// `\n` by [`BlockBuilder::finish`].
pub struct BlockBuilder<'o> {
    options: &'o RenderOptions,
    state: RenderState,
    out: Vec<String>,
}

impl<'o> BlockBuilder<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self {
            options,
            state: RenderState::default(),
            out: vec![],
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn push(&mut self, line: &str) {
        let class = MarkdownLineClassifier.classify(line);

        if self.state.in_code_block && class != LineClass::Fence {
            self.out.push(escape_html(line));
            return;
        }

        match class {
            LineClass::Fence => self.toggle_fence(),
            LineClass::Heading { level, text } => {
                // A heading does not end an open list.
                let inner = self.inline(text);
                self.out.push(Heading::to_html(level, &inner));
            }
            LineClass::ListItem(text) => {
                if !self.state.in_list {
                    self.out.push(ListItem::LIST_OPEN.to_string());
                    self.state.in_list = true;
                }
                let inner = self.inline(text);
                self.out.push(ListItem::to_html(&inner));
            }
            LineClass::BlockQuote(text) => {
                self.close_list();
                let inner = self.inline(text);
                self.out.push(BlockQuote::to_html(&inner));
            }
            LineClass::ThematicBreak => {
                self.close_list();
                self.out.push(ThematicBreak::HTML.to_string());
            }
            LineClass::Paragraph(text) => {
                self.close_list();
                let inner = self.inline(text);
                self.out.push(Paragraph::to_html(&inner));
            }
            LineClass::Blank => {
                self.close_list();
                self.out.push(Paragraph::BREAK_HTML.to_string());
            }
        }
    }

    /// Closes whatever is still open and returns the HTML fragment.
    pub fn finish(mut self) -> String {
        // EOF flush. A fence opened inside a list closes before the list.
        if self.state.in_code_block {
            self.out.push(CodeFence::CLOSE_HTML.to_string());
            self.state.in_code_block = false;
        }
        self.close_list();
        self.out.join("\n")
    }

    fn toggle_fence(&mut self) {
        let tag = if self.state.in_code_block {
            CodeFence::CLOSE_HTML
        } else {
            CodeFence::OPEN_HTML
        };
        self.out.push(tag.to_string());
        self.state.in_code_block = !self.state.in_code_block;
    }

    fn close_list(&mut self) {
        if self.state.in_list {
            self.out.push(ListItem::LIST_CLOSE.to_string());
            self.state.in_list = false;
        }
    }

    fn inline(&self, text: &str) -> String {
        process_inline_with(text, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> (String, Vec<RenderState>) {
        let options = RenderOptions::default();
        let mut builder = BlockBuilder::new(&options);
        let mut states = vec![];
        for line in lines {
            builder.push(line);
            states.push(builder.state());
        }
        (builder.finish(), states)
    }

    #[test]
    fn state_starts_clear() {
        let options = RenderOptions::default();
        assert_eq!(BlockBuilder::new(&options).state(), RenderState::default());
    }

    #[test]
    fn fence_toggles_code_state() {
        let (_, states) = build(&["```", "x", "```"]);
        let in_code: Vec<bool> = states.iter().map(|s| s.in_code_block).collect();
        assert_eq!(in_code, vec![true, true, false]);
    }

    #[test]
    fn list_state_tracks_items() {
        let (_, states) = build(&["- a", "- b", "c"]);
        let in_list: Vec<bool> = states.iter().map(|s| s.in_list).collect();
        assert_eq!(in_list, vec![true, true, false]);
    }

    #[test]
    fn heading_keeps_list_open() {
        let (html, states) = build(&["- a", "# H", "- b"]);
        assert!(states.iter().all(|s| s.in_list));
        assert_eq!(html, "<ul>\n<li>a</li>\n<h1>H</h1>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn code_lines_are_escaped_not_inlined() {
        let (html, _) = build(&["```", "**<b>**", "```"]);
        assert_eq!(html, "<pre><code>\n**&lt;b&gt;**\n</code></pre>");
    }

    #[test]
    fn fence_inside_list_leaves_list_open() {
        let (html, states) = build(&["- a", "```", "x"]);
        assert_eq!(
            states[2],
            RenderState {
                in_code_block: true,
                in_list: true
            }
        );
        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n<pre><code>\nx\n</code></pre>\n</ul>"
        );
    }

    #[test]
    fn finish_closes_unterminated_fence() {
        let (html, _) = build(&["```", "let x = 1;"]);
        assert_eq!(html, "<pre><code>\nlet x = 1;\n</code></pre>");
    }

    #[test]
    fn finish_closes_open_list() {
        let (html, _) = build(&["- only"]);
        assert_eq!(html, "<ul>\n<li>only</li>\n</ul>");
    }

    #[test]
    fn blank_line_closes_list_then_breaks() {
        let (html, _) = build(&["- a", ""]);
        assert_eq!(html, "<ul>\n<li>a</li>\n</ul>\n<br>");
    }

    #[test]
    fn escape_text_option_reaches_block_text() {
        let options = RenderOptions { escape_text: true };
        let mut builder = BlockBuilder::new(&options);
        builder.push("> <i>");
        assert_eq!(builder.finish(), "<blockquote> &lt;i&gt;</blockquote>");
    }
}
