//! Configuration file handling for both binaries.

use assert_cmd::prelude::*;

use crate::common::{Workspace, SAMPLE_ARTICLE};

#[test]
fn test_explicit_config_sets_viewer_options() {
    let ws = Workspace::new();
    ws.write("article.md", SAMPLE_ARTICLE);
    ws.write(
        "lectern.toml",
        "[viewer]\nsubtitle = \"Custom Subtitle\"\ndefault_difficulty = \"simple\"\nhighlight = false\n",
    );

    ws.command("article-viewer")
        .args([
            "--markdown",
            "article.md",
            "--output",
            "out.html",
            "--config",
            "lectern.toml",
        ])
        .assert()
        .success();

    let html = ws.read("out.html");
    assert!(html.contains("Custom Subtitle"));
    assert!(html.contains("data-default-difficulty=\"simple\""));
}

#[test]
fn test_config_from_environment_sets_writer_defaults() {
    let ws = Workspace::new();
    let config = ws.write(
        "cfg/lectern.toml",
        "[writer]\noutput = \"from-config/article.md\"\ncomplexity = \"advanced\"\n",
    );

    let assert = ws
        .command("article-writer")
        .env("LECTERN_CONFIG", &config)
        .args(["--topic", "Configured"])
        .assert()
        .success();

    let out = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(out.contains("Complexity: advanced"));
    assert!(ws.path("from-config/article.md").exists());
}

#[test]
fn test_user_config_directory_is_used() {
    let ws = Workspace::new();
    ws.write("xdg/lectern/config.toml", "[writer]\noutput = \"xdg-out.md\"\n");

    ws.command("article-writer")
        .args(["--topic", "Xdg"])
        .assert()
        .success();
    assert!(ws.path("xdg-out.md").exists());
}

#[test]
fn test_missing_explicit_config_exits_one() {
    let ws = Workspace::new();
    ws.command("article-writer")
        .args(["--topic", "T", "--config", "absent.toml", "--output", "t.md"])
        .assert()
        .code(1);
    assert!(!ws.path("t.md").exists());
}

#[test]
fn test_unknown_theme_exits_one() {
    let ws = Workspace::new();
    ws.write("article.md", SAMPLE_ARTICLE);
    ws.write("bad.toml", "[viewer]\ntheme = \"NoSuchTheme\"\n");

    ws.command("article-viewer")
        .args([
            "--markdown",
            "article.md",
            "--output",
            "out.html",
            "--config",
            "bad.toml",
        ])
        .assert()
        .code(1);
    assert!(!ws.path("out.html").exists());
}
