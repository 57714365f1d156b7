//! `article-writer` behaviour.

use assert_cmd::prelude::*;
use lectern_content::parse_article;

use crate::common::{stderr, stdout, Workspace};

const TEMPLATE_TITLES: [&str; 6] = [
    "Introduction",
    "What is an AI-First Repository?",
    "Setting Up the Repository Structure",
    "Working with Cursor",
    "Best Practices",
    "Conclusion",
];

#[test]
fn test_missing_topic_exits_one_without_writing() {
    let ws = Workspace::new();
    let assert = ws.command("article-writer").assert().code(1);

    assert!(stderr(assert.get_output()).contains("--topic"));
    assert!(!ws.path("output/article.md").exists());
    assert!(ws.is_empty_except(&[]));
}

#[test]
fn test_writes_default_output_path() {
    let ws = Workspace::new();
    let assert = ws
        .command("article-writer")
        .args(["--topic", "Test"])
        .assert()
        .success();

    let out = stdout(assert.get_output());
    assert!(out.contains("Generating article..."));
    assert!(out.contains("Topic: Test"));
    assert!(out.contains("Complexity: medium"));
    assert!(out.contains("Article generated successfully!"));
    assert!(out.contains("Sections: 6"));
    assert!(out.contains("  Title: Test\n"));

    let article = parse_article(&ws.read("output/article.md"));
    assert_eq!(article.title, "Test");
    let titles = article.section_titles();
    assert_eq!(&titles[..6], &TEMPLATE_TITLES[..]);
    assert_eq!(titles[6], "Next Steps");
}

#[test]
fn test_creates_nested_directories() {
    let ws = Workspace::new();
    ws.command("article-writer")
        .args(["--topic", "Nested", "--output", "a/b/c/article.md"])
        .assert()
        .success();

    assert!(ws.read("a/b/c/article.md").starts_with("---\ntitle: Nested\n"));
}

#[test]
fn test_invalid_complexity_exits_one() {
    let ws = Workspace::new();
    ws.command("article-writer")
        .args(["--topic", "X", "--complexity", "expert", "--output", "x.md"])
        .assert()
        .code(1);
    assert!(!ws.path("x.md").exists());
}

#[test]
fn test_help_exits_zero() {
    let ws = Workspace::new();
    let assert = ws.command("article-writer").arg("--help").assert().success();
    assert!(stdout(assert.get_output()).contains("--complexity"));
}
