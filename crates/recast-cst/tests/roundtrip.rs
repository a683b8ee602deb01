//! Lossless printing: a tree carrying trivia prints back exactly the bytes
//! the trivia holds, and the passes never disturb comment-bearing runs.

mod support;

use recast_cst::codegen;
use recast_cst::format::format;

use support::*;

#[test]
fn test_print_preserves_comments_and_layout() {
    let input = unit(
        Some(package("// header\n", "demo.app")),
        vec![import("\n\n/* imports */\n", "demo.a.A")],
        vec![class(
            "\n\n/**\n * Docs.\n */\n",
            "App",
            vec![field("\n    // state\n    ", "count", "Int", "0")],
            "\n",
        )],
        "\n",
    );
    assert_eq!(
        codegen::print(&input),
        "// header\npackage demo.app\n\n/* imports */\nimport demo.a.A\n\n/**\n * Docs.\n */\nclass App {\n    // state\n    let count: Int = 0\n}\n"
    );
}

#[test]
fn test_format_keeps_comment_anchors() {
    let input = unit(
        Some(package("// header\n", "demo.app")),
        vec![import("\n\n/* imports */\n", "demo.a.A")],
        vec![class(
            "\n\n/**\n * Docs.\n */\n",
            "App",
            vec![field("\n    // state\n    ", "count", "Int", "0")],
            "\n",
        )],
        "\n",
    );
    let formatted = format(&input, None);
    // Every boundary already satisfies the defaults; the comments stay put.
    assert_eq!(codegen::print(&formatted), codegen::print(&input));
}

#[test]
fn test_crlf_sources_survive() {
    let input = unit(
        Some(package("", "demo.app")),
        vec![import("\r\n\r\n", "demo.a.A")],
        vec![],
        "\r\n",
    );
    assert_eq!(
        codegen::print(&input),
        "package demo.app\r\n\r\nimport demo.a.A\r\n"
    );
    let formatted = format(&input, None);
    assert_eq!(codegen::print(&formatted), codegen::print(&input));
}
