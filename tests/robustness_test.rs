use kh_html_parser::extract;

#[test]
fn extract_does_not_panic_on_unclosed_tags() {
    assert_eq!(extract("<p>text<div>more"), "text more");
}

#[test]
fn extract_does_not_panic_on_invalid_nesting() {
    assert_eq!(extract("<p><div></p></div>"), "");
    assert_eq!(extract("<b><i>bold italic</b> tail</i>"), "bold italic tail");
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    assert_eq!(extract("<div class=\"test id=broken>"), "");
}

#[test]
fn extract_handles_incomplete_entities() {
    assert_eq!(extract("&amp text &lt;"), "& text <");
}

#[test]
fn extract_handles_bare_text() {
    assert_eq!(extract("just some words"), "just some words");
}

#[test]
fn extract_handles_stray_closing_tags() {
    assert_eq!(extract("</div></span>orphan</p>"), "orphan");
}

#[test]
fn extract_handles_large_document() {
    let paragraph = "<p>lorem ipsum</p>\n";
    let html = format!("<html><body>{}</body></html>", paragraph.repeat(10_000));
    let text = extract(&html);
    assert_eq!(text.split(' ').count(), 20_000);
    assert!(text.starts_with("lorem ipsum lorem"));
}
