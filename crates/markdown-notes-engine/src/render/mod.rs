pub mod blocks;
pub mod html;
pub mod inline;

use blocks::{BlockBuilder, lines};

pub use html::{escape_html, wrap_in_shell};
pub use inline::process_inline;

/// Switches that change how text is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape plain text as well as code.
    ///
    /// Off by default: `<` and `>` typed in ordinary text reach the preview
    /// as markup. That is only safe when the notes are the user's own.
    pub escape_text: bool,
}

/// Converts whole documents to HTML. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders `text` to an HTML fragment, re-deriving everything from scratch.
    pub fn render(&self, text: &str) -> String {
        let mut builder = BlockBuilder::new(&self.options);
        for line in lines(text) {
            builder.push(line);
        }
        builder.finish()
    }

    /// Renders `text` and wraps the fragment in the page shell.
    pub fn render_page(&self, text: &str) -> String {
        wrap_in_shell(&self.render(text))
    }
}

/// Renders a document to an HTML fragment with default options.
pub fn render_document(text: &str) -> String {
    Renderer::default().render(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# A", "<h1>A</h1>")]
    #[case("## B", "<h2>B</h2>")]
    #[case("### C", "<h3>C</h3>")]
    fn heading_levels(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render_document(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\n\n")]
    #[case("*")]
    #[case("**")]
    #[case("`")]
    #[case("[")]
    #[case("](")]
    #[case("```")]
    #[case("- ")]
    #[case(">")]
    #[case("\u{0}\u{1}\u{7f}")]
    #[case("#\n##\n###\n####")]
    fn render_is_total(#[case] input: &str) {
        let html = render_document(input);
        assert!(!html.is_empty());
    }

    #[test]
    fn empty_document_is_one_break() {
        assert_eq!(render_document(""), "<br>");
    }

    #[test]
    fn list_grouping() {
        assert_eq!(
            render_document("- a\n- b\nc"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>c</p>"
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        let html = render_document("- a\n\n- b");
        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n</ul>\n<br>\n<ul>\n<li>b</li>\n</ul>"
        );
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn code_block_escaping() {
        assert_eq!(
            render_document("```\n<b>\n```"),
            "<pre><code>\n&lt;b&gt;\n</code></pre>"
        );
    }

    #[test]
    fn inline_ordering() {
        assert_eq!(
            render_document("**_x_**"),
            "<p><strong><em>x</em></strong></p>"
        );
    }

    #[test]
    fn link_substitution() {
        assert_eq!(
            render_document("[go](http://x)"),
            r#"<p><a href="http://x">go</a></p>"#
        );
    }

    #[test]
    fn unterminated_marker() {
        assert_eq!(render_document("*oops"), "<p>*oops</p>");
    }

    #[test]
    fn crlf_input_matches_lf_input() {
        assert_eq!(
            render_document("# T\r\n- a\r\n\r\ntext"),
            render_document("# T\n- a\n\ntext")
        );
    }

    #[test]
    fn renders_are_independent() {
        let renderer = Renderer::default();
        let first = renderer.render("```\n- a");
        assert_eq!(first, "<pre><code>\n- a\n</code></pre>");
        assert_eq!(renderer.render("- a"), "<ul>\n<li>a</li>\n</ul>");
    }

    #[test]
    fn plain_text_markup_passes_through_by_default() {
        assert_eq!(render_document("<i>x</i>"), "<p><i>x</i></p>");
    }

    #[test]
    fn escape_text_option_escapes_plain_text() {
        let renderer = Renderer::new(RenderOptions { escape_text: true });
        assert_eq!(renderer.render("<i>x</i>"), "<p>&lt;i&gt;x&lt;/i&gt;</p>");
    }

    #[test]
    fn render_page_wraps_fragment() {
        let page = Renderer::default().render_page("# A");
        assert_eq!(page, wrap_in_shell("<h1>A</h1>"));
    }

    #[test]
    fn whole_document_snapshot() {
        let md = "# Notes\n\nSome **bold** and `<code>`.\n- one\n- [two](http://t)\n> quoted *text*\n---\n```\nfn main() {}\n```";
        insta::assert_snapshot!(render_document(md), @r#"
<h1>Notes</h1>
<br>
<p>Some <strong>bold</strong> and <code>&lt;code&gt;</code>.</p>
<ul>
<li>one</li>
<li><a href="http://t">two</a></li>
</ul>
<blockquote> quoted <em>text</em></blockquote>
<hr>
<pre><code>
fn main() {}
</code></pre>
"#);
    }
}
