/// Horizontal rule. Anything after the first three dashes is ignored.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static str = "---";
    pub const HTML: &'static str = "<hr>";

    pub fn is_break(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }
}
