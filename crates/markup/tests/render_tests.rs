//! End-to-end tests for rendering preview markup to HTML.

use insta::assert_snapshot;
use markup::{render, render_with, MarkupError, ParseOptions, TagKind};
use rstest::rstest;

// ============================================================================
// Basic Rendering
// ============================================================================

#[test]
fn render_plain_text() {
    assert_snapshot!(render("Hello World").unwrap(), @"Hello World");
}

#[test]
fn render_empty_string() {
    assert_eq!(render("").unwrap(), "");
}

#[test]
fn render_balanced_nesting() {
    assert_snapshot!(render("<b><i>x</i></b>").unwrap(), @"<b><i>x</i></b>");
}

#[test]
fn render_mixed_document() {
    let source = "Dear <b>player</b>,\n<color=#ff8800><size=50>Server restart</size></color> at <i>12:00</i>.";
    assert_snapshot!(
        render(source).unwrap(),
        @r#"Dear <b>player</b>,<br><span style="color:#ff8800"><span style="font-size:20px">Server restart</span></span> at <i>12:00</i>."#
    );
}

#[test]
fn render_uppercase_tags() {
    assert_snapshot!(render("<B>a</B><I>b</I>").unwrap(), @"<b>a</b><i>b</i>");
}

// ============================================================================
// Attribute Values
// ============================================================================

#[test]
fn render_color_fallback() {
    assert_snapshot!(
        render("<color=notacolor>x</color>").unwrap(),
        @r#"<span style="color:white">x</span>"#
    );
}

#[test]
fn render_named_color_lowercased() {
    assert_snapshot!(
        render("<color=LightBlue>x</color>").unwrap(),
        @r#"<span style="color:lightblue">x</span>"#
    );
}

#[test]
fn render_size_computation() {
    assert_snapshot!(
        render("<size=100>x</size>").unwrap(),
        @r#"<span style="font-size:40px">x</span>"#
    );
}

#[test]
fn render_unset_attributes() {
    assert_eq!(render("<color>hi</color>").unwrap(), "hi");
    assert_eq!(render("<size>hi</size>").unwrap(), "hi");
}

#[test]
fn attribute_values_cannot_inject_markup() {
    assert_snapshot!(
        render(r#"<color=red" onclick="x>y</color>"#).unwrap(),
        @r#"<span style="color:white">y</span>"#
    );
}

// ============================================================================
// Line Breaks and Escaping
// ============================================================================

#[rstest]
#[case::newline("a\nb")]
#[case::escaped("a\\nb")]
fn line_break_forms_render_identically(#[case] source: &str) {
    assert_eq!(render(source).unwrap(), "a<br>b");
}

#[rstest]
#[case("a & b", "a &amp; b")]
#[case("1 < 2 > 0", "1 &lt; 2 &gt; 0")]
#[case("&amp;", "&amp;amp;")]
#[case("&lt;b&gt;", "&amp;lt;b&amp;gt;")]
#[case("<u>x</u>", "&lt;u&gt;x&lt;/u&gt;")]
#[case("</>", "&lt;/&gt;")]
#[case("<", "&lt;")]
#[case("a\\b", "a\\b")]
fn text_is_escaped_once(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render(source).unwrap(), expected);
}

#[test]
fn stray_closer_renders_nothing() {
    assert_eq!(render("a</i>b").unwrap(), "ab");
}

#[test]
fn unicode_text() {
    assert_snapshot!(render("<b>日本語</b>").unwrap(), @"<b>日本語</b>");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn crossed_tags_are_rejected() {
    assert_eq!(
        render("<b><i>x</b></i>"),
        Err(MarkupError::UnclosedTag {
            tag: TagKind::Italic,
            location: 3
        })
    );
}

#[test]
fn unterminated_size_attribute() {
    assert_eq!(
        render("<size=12"),
        Err(MarkupError::UnterminatedAttribute {
            tag: TagKind::Size,
            location: 0
        })
    );
}

#[rstest]
#[case("<b>x", MarkupError::UnclosedTag { tag: TagKind::Bold, location: 0 })]
#[case("ab<i>", MarkupError::UnclosedTag { tag: TagKind::Italic, location: 2 })]
#[case("<color=red>x</size>", MarkupError::UnclosedTag { tag: TagKind::Color, location: 0 })]
#[case("<size=4x>y</size>", MarkupError::Syntax { location: 0 })]
#[case("<color red>y</color>", MarkupError::Syntax { location: 0 })]
#[case("<color=red\n>y</color>", MarkupError::UnterminatedAttribute { tag: TagKind::Color, location: 0 })]
fn structural_errors(#[case] source: &str, #[case] expected: MarkupError) {
    assert_eq!(render(source), Err(expected));
}

#[test]
fn deep_nesting_hits_the_limit() {
    let depth = 10_000;
    let source = "<b>".repeat(depth) + &"</b>".repeat(depth);
    let err = render(&source).unwrap_err();
    assert!(matches!(
        err,
        MarkupError::RecursionLimitExceeded { tag: TagKind::Bold, .. }
    ));
}

#[test]
fn nesting_within_a_custom_limit() {
    let options = ParseOptions::default().with_max_depth(3);
    let source = "<b><i><color>x</color></i></b>";
    assert_eq!(render_with(source, &options).unwrap(), "<b><i>x</i></b>");

    let options = options.with_max_depth(2);
    assert_eq!(
        render_with(source, &options),
        Err(MarkupError::RecursionLimitExceeded {
            tag: TagKind::Color,
            location: 6,
            limit: 2
        })
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn repeated_renders_agree() {
    let source = "<size=30><color=#abc>x</color>\\n</size>&";
    let first = render(source).unwrap();
    for _ in 0..10 {
        assert_eq!(render(source).unwrap(), first);
    }
}

#[test]
fn parallel_renders_agree() {
    let sources = ["<b>one</b>", "<i>two</i>\nthree", "<size=10>four</size>", "<b>bad"];
    let expected: Vec<_> = sources.iter().map(|s| render(s)).collect();

    let handles: Vec<_> = sources
        .iter()
        .map(|s| {
            let s = s.to_string();
            std::thread::spawn(move || render(&s))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
