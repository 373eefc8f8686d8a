use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

/// Fake fetcher answering from a fixed table and recording request order.
fn fake_fetch(
    ok: &'static [&'static str],
    log: Rc<RefCell<Vec<String>>>,
) -> impl FnMut(String) -> std::future::Ready<Result<String, SpriteError>> {
    move |path: String| {
        log.borrow_mut().push(path.clone());
        let result = if ok.contains(&path.as_str()) {
            Ok(format!("<svg data-from=\"{path}\"></svg>"))
        } else {
            Err(SpriteError::Status { path, status: 404 })
        };
        std::future::ready(result)
    }
}

// =============================================================
// Reference rewriting
// =============================================================

#[test]
fn rewrites_external_icon_reference_to_fragment() {
    assert_eq!(rewrite_icon_href("assets/icons/icons.svg#icon-shield"), Some("#icon-shield".to_owned()));
    assert_eq!(rewrite_icon_href("../assets/icons/icons.svg#icon-cloud"), Some("#icon-cloud".to_owned()));
}

#[test]
fn leaves_local_and_non_icon_references_alone() {
    assert_eq!(rewrite_icon_href("#icon-shield"), None);
    assert_eq!(rewrite_icon_href("sprite.svg#logo"), None);
    assert_eq!(rewrite_icon_href(""), None);
}

// =============================================================
// Candidate paths
// =============================================================

#[test]
fn candidates_are_primary_then_fixed_fallbacks() {
    let config = SiteConfig::default();
    assert_eq!(
        candidate_paths("../", &config),
        vec![
            "../assets/icons/icons.svg",
            "./assets/icons/icons.svg",
            "../assets/icons/icons.svg",
            "/assets/icons/icons.svg",
        ]
    );
    assert_eq!(candidate_paths("", &config)[0], "assets/icons/icons.svg");
}

// =============================================================
// Fallback chain
// =============================================================

#[test]
fn primary_success_makes_a_single_request() {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let paths = candidate_paths("", &SiteConfig::default());
    let fetch = fake_fetch(&["assets/icons/icons.svg"], Rc::clone(&requests));

    let sprite = block_on(load_first(&paths, fetch)).expect("primary should load");
    assert_eq!(sprite.attempts, 1);
    assert_eq!(requests.borrow().len(), 1);
}

#[test]
fn primary_404_tries_fallbacks_in_order_and_stops_at_first_success() {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let paths = candidate_paths("", &SiteConfig::default());
    let fetch = fake_fetch(&["../assets/icons/icons.svg", "/assets/icons/icons.svg"], Rc::clone(&requests));

    let sprite = block_on(load_first(&paths, fetch)).expect("second fallback should load");
    assert_eq!(sprite.path, "../assets/icons/icons.svg");
    assert_eq!(sprite.attempts, 3);
    assert!(sprite.markup.contains("../assets/icons/icons.svg"));
    assert_eq!(
        *requests.borrow(),
        vec!["assets/icons/icons.svg", "./assets/icons/icons.svg", "../assets/icons/icons.svg"]
    );
}

#[test]
fn all_paths_failing_is_exhausted() {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let paths = candidate_paths("", &SiteConfig::default());
    let fetch = fake_fetch(&[], Rc::clone(&requests));

    let err = block_on(load_first(&paths, fetch)).expect_err("nothing should load");
    assert_eq!(err, SpriteError::Exhausted { attempts: 4 });
    assert_eq!(requests.borrow().len(), 4);
}

#[test]
fn network_errors_also_fall_through() {
    let paths = vec!["a.svg".to_owned(), "b.svg".to_owned()];
    let fetch = |path: String| {
        std::future::ready(if path == "a.svg" {
            Err(SpriteError::Network { path, message: "offline".to_owned() })
        } else {
            Ok("<svg/>".to_owned())
        })
    };
    let sprite = block_on(load_first(&paths, fetch)).expect("b should load");
    assert_eq!(sprite.path, "b.svg");
}
