use mot_du_jour::encoding::decode_page;
use mot_du_jour::{extract, extract_bytes, Gender};

/// Latin-1 page: "rêve" with ê = 0xEA, "réveiller" with é = 0xE9
const LATIN1_PAGE: &[u8] = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>\
    <h1>r\xEAve</h1><div>\
    <div class=\"mw-heading mw-heading2\"><h2 id=\"French\">French</h2></div>\
    <div class=\"mw-heading mw-heading3\"><h3>Noun</h3></div>\
    <p><span class=\"gender\">m</span></p>\
    <ol><li>dream</li></ol>\
    <div class=\"mw-heading mw-heading3\"><h3>Verb</h3></div>\
    <ol><li>to wake (see r\xE9veiller)</li></ol>\
    </div></body></html>";

#[test]
fn latin1_page_is_transcoded_before_extraction() {
    let word = extract_bytes(LATIN1_PAGE).expect("extraction failed");

    assert_eq!(word.name, "rêve");
    assert_eq!(word.entries[0].gender, Gender::Masculine);
    assert_eq!(word.entries[1].definitions, vec!["to wake (see réveiller)"]);
}

#[test]
fn utf8_page_passes_through() {
    let html = "<html><body><h1>œuvre</h1><div>\
        <div class=\"mw-heading mw-heading2\"><h2 id=\"French\">French</h2></div>\
        <div class=\"mw-heading mw-heading3\"><h3>Noun</h3></div>\
        <ol><li>work (of art) — chef-d’œuvre</li></ol>\
        </div></body></html>";

    let from_bytes = extract_bytes(html.as_bytes()).expect("extraction failed");
    let from_str = extract(html).expect("extraction failed");

    assert_eq!(from_bytes, from_str);
    assert_eq!(from_bytes.name, "œuvre");
}

#[test]
fn header_charset_overrides_wrong_meta() {
    // Declared UTF-8 in <meta>, served as Latin-1 by the server.
    let html = b"<meta charset=\"utf-8\"><h1>ch\xE2teau</h1>";
    let decoded = decode_page(html, Some("text/html; charset=iso-8859-1"));
    assert!(decoded.contains("château"));
}
