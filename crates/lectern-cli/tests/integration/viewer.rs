//! `article-viewer` behaviour.

use assert_cmd::prelude::*;
use lectern_content::parse_article;

use crate::common::{stderr, stdout, Workspace, SAMPLE_ARTICLE};

#[test]
fn test_title_matches_parsed_article() {
    let ws = Workspace::new();
    ws.write("article.md", SAMPLE_ARTICLE);

    let assert = ws
        .command("article-viewer")
        .args(["--markdown", "article.md", "--output", "site/index.html"])
        .assert()
        .success();

    let out = stdout(assert.get_output());
    assert!(out.contains("Reading markdown article..."));
    assert!(out.contains("Parsing article..."));
    assert!(out.contains("Generating HTML viewer..."));
    assert!(out.contains("Sections: 2"));

    let title = parse_article(SAMPLE_ARTICLE).title;
    let html = ws.read("site/index.html");
    assert!(html.contains(&format!("<title>{title}</title>")));
    assert!(html.contains("Short and sweet."));
    assert!(!html.contains("**Simple:**"));
}

#[test]
fn test_writer_output_feeds_viewer() {
    let ws = Workspace::new();
    ws.command("article-writer")
        .args(["--topic", "Pipeline", "--output", "pipeline.md"])
        .assert()
        .success();
    ws.command("article-viewer")
        .args(["--markdown", "pipeline.md", "--output", "pipeline.html"])
        .assert()
        .success();

    let html = ws.read("pipeline.html");
    assert!(html.contains("<title>Pipeline</title>"));
    assert!(html.contains("<section class=\"section\" id=\"next-steps\">"));
}

#[test]
fn test_script_close_tag_in_content_is_contained() {
    let ws = Workspace::new();
    ws.write(
        "evil.md",
        "# Evil\n\n## S\n\n<!-- medium:start -->\nText `</script><script>alert(1)</script>`\n<!-- medium:end -->\n",
    );
    ws.command("article-viewer")
        .args(["--markdown", "evil.md", "--output", "evil.html"])
        .assert()
        .success();

    let html = ws.read("evil.html");
    assert_eq!(html.matches("</script>").count(), 2);
}

#[test]
fn test_missing_markdown_exits_one() {
    let ws = Workspace::new();
    let assert = ws
        .command("article-viewer")
        .args(["--markdown", "nope.md", "--output", "out.html"])
        .assert()
        .code(1);

    let err = stderr(assert.get_output());
    assert!(err.starts_with("Error:"));
    assert!(err.contains("nope.md"));
    assert!(!ws.path("out.html").exists());
}

#[test]
fn test_missing_output_flag_exits_one() {
    let ws = Workspace::new();
    ws.write("article.md", SAMPLE_ARTICLE);
    ws.command("article-viewer")
        .args(["--markdown", "article.md"])
        .assert()
        .code(1);
}
