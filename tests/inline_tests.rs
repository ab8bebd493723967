use marklite::to_html;

#[test]
fn bold() {
    assert_eq!(to_html("**bold**"), "<p><strong>bold</strong></p>\n");
}

#[test]
fn italic() {
    assert_eq!(to_html("*it*"), "<p><em>it</em></p>\n");
}

#[test]
fn bold_and_italic_independent() {
    assert_eq!(
        to_html("**a** and *b*"),
        "<p><strong>a</strong> and <em>b</em></p>\n"
    );
}

#[test]
fn unterminated_bold_left_literal() {
    assert_eq!(to_html("**oops"), "<p>**oops</p>\n");
}

#[test]
fn unterminated_bold_suppresses_italic() {
    assert_eq!(to_html("**a** *b* **c"), "<p><strong>a</strong> *b* **c</p>\n");
}

#[test]
fn unterminated_italic_left_literal() {
    assert_eq!(to_html("*a* *b"), "<p><em>a</em> *b</p>\n");
}

#[test]
fn link() {
    assert_eq!(
        to_html("[Rust](https://www.rust-lang.org)"),
        "<p><a href=\"https://www.rust-lang.org\">Rust</a></p>\n"
    );
}

#[test]
fn several_links() {
    assert_eq!(
        to_html("[a](1) [b](2) [c](3)"),
        "<p><a href=\"1\">a</a> <a href=\"2\">b</a> <a href=\"3\">c</a></p>\n"
    );
}

#[test]
fn bracket_inside_label_starts_next_link() {
    assert_eq!(
        to_html("[a [b](c) [d](e)"),
        "<p><a href=\"c\">a <a href=\"e\">b</a> [d</a></p>\n"
    );
}

#[test]
fn bracket_inside_label_without_following_link() {
    assert_eq!(
        to_html("- [a [b](c) tail"),
        "<li><a href=\"c\">a [b</a> tail</li>\n"
    );
}

#[test]
fn unterminated_link_left_literal() {
    assert_eq!(to_html("[a](b"), "<p>[a](b</p>\n");
    assert_eq!(to_html("[a] b"), "<p>[a] b</p>\n");
}

#[test]
fn link_inside_bold() {
    assert_eq!(
        to_html("**[x](y)**"),
        "<p><strong><a href=\"y\">x</a></strong></p>\n"
    );
}

#[test]
fn bold_inside_link_text() {
    assert_eq!(
        to_html("[**x**](y)"),
        "<p><a href=\"y\"><strong>x</strong></a></p>\n"
    );
}

#[test]
fn italic_applies_inside_url() {
    // Emphasis resolves before links, so stars in a URL are converted.
    assert_eq!(
        to_html("[x](a*b*c)"),
        "<p><a href=\"a<em>b</em>c\">x</a></p>\n"
    );
}

#[test]
fn inline_code() {
    assert_eq!(
        to_html("run `cargo test` now"),
        "<p>run <code>cargo test</code> now</p>\n"
    );
}

#[test]
fn unterminated_code_left_literal() {
    assert_eq!(to_html("a `b"), "<p>a `b</p>\n");
}

#[test]
fn code_span_contents_not_escaped() {
    assert_eq!(to_html("`<b>`"), "<p><code><b></code></p>\n");
}

#[test]
fn text_passed_through_unescaped() {
    assert_eq!(
        to_html("a < b && c > \"d\""),
        "<p>a < b && c > \"d\"</p>\n"
    );
}

#[test]
fn multibyte_text_around_markers() {
    assert_eq!(
        to_html("**héllo** *wörld* `日本`"),
        "<p><strong>héllo</strong> <em>wörld</em> <code>日本</code></p>\n"
    );
}
