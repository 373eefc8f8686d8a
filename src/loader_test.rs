use super::*;

#[test]
fn phases_advance_once_each_and_stop() {
    let phase = LoaderPhase::default();
    assert_eq!(phase, LoaderPhase::Loading);
    assert_eq!(phase.advance(), LoaderPhase::Exiting);
    assert_eq!(phase.advance().advance(), LoaderPhase::Loaded);
    assert_eq!(LoaderPhase::Loaded.advance(), LoaderPhase::Loaded);
}

#[test]
fn body_marker_swaps_only_when_overlay_is_gone() {
    assert_eq!(LoaderPhase::Loading.body_class(), "page-loading");
    assert_eq!(LoaderPhase::Exiting.body_class(), "page-loading");
    assert_eq!(LoaderPhase::Loaded.body_class(), "page-loaded");

    assert!(LoaderPhase::Loading.overlay_present());
    assert!(LoaderPhase::Exiting.overlay_present());
    assert!(!LoaderPhase::Loaded.overlay_present());
}

#[test]
fn delays_follow_config() {
    let config = SiteConfig::default();
    assert_eq!(LoaderPhase::Loading.delay_ms(&config), Some(300));
    assert_eq!(LoaderPhase::Exiting.delay_ms(&config), Some(500));
    assert_eq!(LoaderPhase::Loaded.delay_ms(&config), None);
}

#[test]
fn overlay_markup_has_logo_and_spinner() {
    let markup = overlay_markup("../assets/logos/logo.png");
    assert!(markup.contains(r#"<img src="../assets/logos/logo.png" alt="Loading...">"#));
    assert!(markup.contains(r#"class="loader-spinner""#));
    assert!(markup.contains(r#"class="loader-logo""#));
}

#[test]
fn cutting_the_sequence_short_still_marks_the_body_loaded() {
    assert_eq!(LoaderPhase::Loading.body_swap(LoaderPhase::Loaded), Some(("page-loading", "page-loaded")));
    assert_eq!(LoaderPhase::Exiting.body_swap(LoaderPhase::Loaded), Some(("page-loading", "page-loaded")));
}

#[test]
fn no_body_swap_while_the_overlay_is_still_up() {
    assert_eq!(LoaderPhase::Loading.body_swap(LoaderPhase::Exiting), None);
    assert_eq!(LoaderPhase::Loaded.body_swap(LoaderPhase::Loaded), None);
}
