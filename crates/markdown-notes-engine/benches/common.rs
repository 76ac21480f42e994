// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_notes_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, `code` and a [link](http://example.com).\n\n- Bullet point\n- Another __item__\n\n> A quote\n---\n```rust\nfn example() {\n    println!(\"<Hello>\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_marker_heavy_line(len: usize) -> String {
    "*a* _b_ **c** __d__ `e` [f](g) ".repeat(len)
}
