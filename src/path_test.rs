use super::*;

const MARKERS: [&str; 2] = ["/pages/", "/subdir/"];

#[test]
fn root_pages_get_no_prefix() {
    assert_eq!(path_prefix("/", &MARKERS), "");
    assert_eq!(path_prefix("/index.html", &MARKERS), "");
    assert_eq!(path_prefix("/about.html", &MARKERS), "");
}

#[test]
fn subdirectory_pages_step_up_one_level() {
    assert_eq!(path_prefix("/pages/services.html", &MARKERS), "../");
    assert_eq!(path_prefix("/site/subdir/contact.html", &MARKERS), "../");
}

#[test]
fn marker_must_be_a_full_segment() {
    assert_eq!(path_prefix("/mypages.html", &MARKERS), "");
    assert_eq!(path_prefix("/pages", &MARKERS), "");
}

#[test]
fn no_markers_never_prefixes() {
    let none: [&str; 0] = [];
    assert_eq!(path_prefix("/pages/x.html", &none), "");
}
