//! Tests for text helpers.

use super::*;

/// Verify letters and digits pass through while other characters are encoded.
#[test]
fn test_encode_tag_name() {
    assert_eq!(encode_tag_name("a!"), "a_21_");
    assert_eq!(encode_tag_name("a !"), "a_20__21_");
    assert_eq!(encode_tag_name("Story Points 2"), "Story_20_Points_20_2");
    assert_eq!(encode_tag_name("snake_case"), "snake_5f_case");
    assert_eq!(encode_tag_name(""), "");
}

/// Verify non-ASCII characters are encoded by code point, not by byte.
#[test]
fn test_encode_tag_name_non_ascii() {
    assert_eq!(encode_tag_name("é"), "_e9_");
    assert_eq!(encode_tag_name("x€"), "x_20ac_");
}

/// Verify every newline becomes a line-break marker.
#[test]
fn test_convert_to_html() {
    assert_eq!(convert_to_html("a\nb\n"), "a<BR/>b<BR/>");
    assert_eq!(convert_to_html("no breaks"), "no breaks");
}

/// Verify the common HTML special characters are escaped.
#[test]
fn test_encode_html() {
    assert_eq!(encode_html("<b>"), "&lt;b&gt;");
    assert_eq!(encode_html("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(encode_html("say \"hi\""), "say &quot;hi&quot;");
    assert_eq!(encode_html("plain"), "plain");
}

/// Verify apostrophes, backticks and equals signs are escaped too.
#[test]
fn test_encode_html_extended_characters() {
    assert_eq!(encode_html("it's"), "it&#x27;s");
    assert_eq!(encode_html("`code`"), "&#x60;code&#x60;");
    assert_eq!(
        encode_html("https://host/q?a=1&b=2"),
        "https://host/q?a&#x3D;1&amp;b&#x3D;2"
    );
}

/// Verify append treats a missing side as absent.
#[test]
fn test_append_text() {
    assert_eq!(append_text(None, None), None);
    assert_eq!(append_text(Some("a"), None).as_deref(), Some("a"));
    assert_eq!(append_text(None, Some("b")).as_deref(), Some("b"));
    assert_eq!(append_text(Some("a"), Some("b")).as_deref(), Some("ab"));
    assert_eq!(append_text(Some(""), Some("b")).as_deref(), Some("b"));
}

/// Verify every item is followed by a newline.
#[test]
fn test_convert_string_list_to_text() {
    assert_eq!(convert_string_list_to_text(&["a", "b"]), "a\nb\n");
    assert_eq!(
        convert_string_list_to_text(&["only".to_string()]),
        "only\n"
    );
    assert_eq!(convert_string_list_to_text::<&str>(&[]), "");
}
