#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn bare_hash_is_not_intercepted() {
    assert_eq!(fragment_target("#"), None);
}

#[test]
fn fragment_links_resolve_to_id_selector() {
    assert_eq!(fragment_target("#services"), Some("#services"));
    assert_eq!(fragment_target("#contact-us"), Some("#contact-us"));
}

#[test]
fn non_fragment_links_are_ignored() {
    assert_eq!(fragment_target("/about.html#team"), None);
    assert_eq!(fragment_target("https://example.com"), None);
    assert_eq!(fragment_target(""), None);
}

#[test]
fn header_height_falls_back_to_eighty() {
    assert_eq!(effective_header_height(None, 80.0), 80.0);
    assert_eq!(effective_header_height(Some(0.0), 80.0), 80.0);
    assert_eq!(effective_header_height(Some(96.0), 80.0), 96.0);
}

#[test]
fn destination_subtracts_header_from_document_position() {
    // Target 400px below the viewport top while scrolled 1000px, 96px header.
    assert_eq!(scroll_destination(400.0, 1000.0, 96.0), 1304.0);
    // Target above the viewport.
    assert_eq!(scroll_destination(-200.0, 1000.0, 80.0), 720.0);
}
