use std::fs;
use std::path::Path;

use markdown_sitegen_engine::{SiteError, SiteLayout, build_site};
use relative_path::RelativePathBuf;
use tempfile::TempDir;

const TEMPLATE: &str = "<title>{{ Title }}</title>\n<main>{{ Content }}</main>\n";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn layout(root: &Path) -> SiteLayout {
    SiteLayout {
        content_dir: root.join("content"),
        static_dir: root.join("static"),
        template_path: root.join("template.html"),
        output_dir: root.join("public"),
        skip_invalid_pages: false,
    }
}

fn sample_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "template.html", TEMPLATE);
    write(root, "content/index.md", "# Home\n\nWelcome *friend*");
    write(root, "content/blog/first/index.md", "# First post\n\n> quoted");
    write(root, "content/notes.txt", "not markdown");
    write(root, "static/index.css", "body {}");
    write(root, "static/images/logo.png", "png");
    write(root, "public/stale.html", "old build");
    dir
}

#[test]
fn build_mirrors_content_tree() {
    let dir = sample_site();
    let root = dir.path();

    let report = build_site(&layout(root)).unwrap();

    assert_eq!(
        report.pages_written,
        vec![
            RelativePathBuf::from("blog/first/index.html"),
            RelativePathBuf::from("index.html"),
        ]
    );
    assert_eq!(report.assets_copied, 2);
    assert!(report.pages_skipped.is_empty());

    assert_eq!(
        fs::read_to_string(root.join("public/index.html")).unwrap(),
        "<title>Home</title>\n<main><div><h1>Home</h1><p>Welcome <i>friend</i></p></div></main>\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("public/blog/first/index.html")).unwrap(),
        "<title>First post</title>\n<main><div><h1>First post</h1><blockquote>quoted</blockquote></div></main>\n"
    );
}

#[test]
fn build_replaces_previous_output() {
    let dir = sample_site();
    let root = dir.path();

    build_site(&layout(root)).unwrap();

    assert!(!root.join("public/stale.html").exists());
    assert!(root.join("public/index.css").is_file());
    assert!(root.join("public/images/logo.png").is_file());
    assert!(!root.join("public/notes.html").exists());
}

#[test]
fn invalid_page_aborts_by_default() {
    let dir = sample_site();
    let root = dir.path();
    write(root, "content/broken.md", "# Broken\n\n**never closed");

    let err = build_site(&layout(root)).unwrap_err();

    match err {
        SiteError::Page { path, .. } => assert!(path.ends_with("broken.md")),
        other => panic!("expected page error, got {other:?}"),
    }
}

#[test]
fn invalid_page_is_skipped_when_configured() {
    let dir = sample_site();
    let root = dir.path();
    write(root, "content/untitled.md", "no title here");

    let mut layout = layout(root);
    layout.skip_invalid_pages = true;
    let report = build_site(&layout).unwrap();

    assert_eq!(
        report.pages_skipped,
        vec![RelativePathBuf::from("untitled.md")]
    );
    assert_eq!(report.pages_written.len(), 2);
    assert!(!root.join("public/untitled.html").exists());
}

#[test]
fn missing_static_dir_still_builds_pages() {
    let dir = sample_site();
    let root = dir.path();
    fs::remove_dir_all(root.join("static")).unwrap();

    let report = build_site(&layout(root)).unwrap();

    assert_eq!(report.assets_copied, 0);
    assert_eq!(report.pages_written.len(), 2);
    assert!(!root.join("public/stale.html").exists());
}

#[test]
fn missing_content_dir_is_an_error() {
    let dir = sample_site();
    let root = dir.path();
    fs::remove_dir_all(root.join("content")).unwrap();

    let err = build_site(&layout(root)).unwrap_err();

    assert!(matches!(err, SiteError::Io(_)));
}
