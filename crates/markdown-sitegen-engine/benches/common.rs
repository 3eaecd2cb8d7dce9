// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n* Bullet point with a [link](https://example.com)\n* Another item\n\n1. First\n2. Second\n\n> A quoted\n> passage\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_paragraph(spans: usize) -> String {
    let mut content = String::new();
    for i in 0..spans {
        content.push_str(&format!(
            "text {i} **bold {i}** and *italic* with ![img](/{i}.png) and [link](/{i}) "
        ));
    }
    content
}
