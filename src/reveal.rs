//! One-shot reveal of cards and section headers as they scroll into view.
//!
//! Two independent groups share the same observer settings:
//! - fade-in: elements get `fade-in` up front (hidden by CSS) and `visible`
//!   on first intersection; grid cards also get a stagger delay class.
//! - animate-in: cards get `animate-in` on first intersection.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Cards that receive a staggered fade-in delay.
pub const STAGGERED_CLASSES: [&str; 2] = ["service-card", "industry-card"];

/// Longest stagger step the stylesheet defines.
pub const MAX_STAGGER: usize = 4;

/// Stagger step for the element at `index` among all fade-in elements:
/// cycles 1..=6 then caps at [`MAX_STAGGER`].
#[must_use]
pub fn stagger_step(index: usize) -> usize {
    ((index % 6) + 1).min(MAX_STAGGER)
}

#[must_use]
pub fn stagger_class(index: usize) -> String {
    format!("fade-in-delay-{}", stagger_step(index))
}

/// Whether an element with this `class` attribute is a staggered card.
#[must_use]
pub fn is_staggered(class_attr: &str) -> bool {
    class_attr
        .split_whitespace()
        .any(|c| STAGGERED_CLASSES.contains(&c))
}

/// Observe both reveal groups.
///
/// # Errors
///
/// Propagates selector or observer construction failures.
#[cfg(feature = "hydrate")]
pub fn mount(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<Vec<crate::dom::OneShotObserver>, wasm_bindgen::JsValue> {
    use crate::dom::{self, OneShotObserver};

    let margin = Some(config.reveal_root_margin.as_str());

    let animate_in = OneShotObserver::new(config.reveal_threshold, margin, |el| {
        dom::set_class(el, ANIMATE_IN_CLASS, true);
    })?;
    for el in dom::query_all(document, &config.animate_in_selector)? {
        animate_in.observe(&el);
    }

    let fade_in = OneShotObserver::new(config.reveal_threshold, margin, |el| {
        dom::set_class(el, VISIBLE_CLASS, true);
    })?;
    for (index, el) in dom::query_all(document, &config.fade_in_selector)?
        .iter()
        .enumerate()
    {
        dom::set_class(el, FADE_IN_CLASS, true);
        if is_staggered(&el.class_name()) {
            dom::set_class(el, &stagger_class(index), true);
        }
        fade_in.observe(el);
    }

    Ok(vec![animate_in, fade_in])
}
