use markdown_sitegen_engine::{ConversionError, DocumentNode, convert_document, extract_title};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn render(markdown: &str) -> String {
    convert_document(markdown).unwrap().to_html().unwrap()
}

#[test]
fn fixture_full_page() {
    let html = render(&fixture("full_page"));
    insta::assert_snapshot!(html, @r#"<div><h1>Tolkien Fan Club</h1><p><b>I like Tolkien</b>. Read my <a href="/majesty">first post here</a></p><blockquote>All that is gold does not glitter, not all those who wander are lost.</blockquote><h2>Reasons I like Tolkien</h2><ul><li>You can spend years studying the legendarium and still not understand its depths</li><li>It can be enjoyed by children and adults alike</li></ul><h2>My favorite characters (in order)</h2><ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol><p>Here's what <code>elflang</code> looks like:</p><pre><code>fmt.Println("Aiya, Ambar!")</code></pre><p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p></div>"#);
}

#[test]
fn fixture_full_page_title() {
    assert_eq!(extract_title(&fixture("full_page")).unwrap(), "Tolkien Fan Club");
}

#[test]
fn fixture_blank_runs_keep_empty_paragraph() {
    let html = render(&fixture("blank_runs"));
    insta::assert_snapshot!(html, @"<div><p>first paragraph</p><p></p><p>second paragraph</p></div>");
}

#[test]
fn fixture_unclosed_fails_whole_document() {
    let err = convert_document(&fixture("unclosed")).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnclosedDelimiter {
            delimiter: "*",
            text: "This *never closes".to_string()
        }
    );
}

#[test]
fn fixture_crlf_matches_lf() {
    let crlf = fixture("crlf");
    assert!(crlf.contains("\r\n"));

    let html = render(&crlf);
    insta::assert_snapshot!(html, @"<div><h1>Windows Notes</h1><p>Saved with <b>CRLF</b> line endings.</p><blockquote>quoted twice</blockquote><ol><li>one</li><li>two</li></ol></div>");
    assert_eq!(html, render(&crlf.replace("\r\n", "\n")));
    assert_eq!(extract_title(&crlf).unwrap(), "Windows Notes");
}

/// Converting the same input twice gives byte-identical output.
#[test]
fn conversion_is_deterministic() {
    let md = fixture("full_page");
    assert_eq!(render(&md), render(&md));
}

/// Quote lines merge into one run rather than one child per line.
#[test]
fn quote_lines_merge() {
    let root = convert_document("> line1\n> line2").unwrap();
    assert_eq!(
        root,
        DocumentNode::element(
            "div",
            vec![DocumentNode::element(
                "blockquote",
                vec![DocumentNode::text("line1 line2")]
            )]
        )
    );
}

#[test]
fn headings_one_to_six() {
    let html = render("# H1\n\n## H2\n\n### H3\n\n#### H4\n\n##### H5\n\n###### H6");
    insta::assert_snapshot!(html, @"<div><h1>H1</h1><h2>H2</h2><h3>H3</h3><h4>H4</h4><h5>H5</h5><h6>H6</h6></div>");
}

#[test]
fn seven_hashes_is_a_paragraph() {
    assert_eq!(render("####### Title"), "<div><p>####### Title</p></div>");
}

#[test]
fn code_block_content_is_raw() {
    assert_eq!(
        render("```\n**not bold** and [not](link)\n```"),
        "<div><pre><code>**not bold** and [not](link)</code></pre></div>"
    );
}
