/// Fenced code block. The same marker opens and closes the fence.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
    pub const OPEN_HTML: &'static str = "<pre><code>";
    pub const CLOSE_HTML: &'static str = "</code></pre>";

    /// Any line starting with the fence marker toggles the fence; text after
    /// the marker (an info string) is ignored.
    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::FENCE)
    }
}
