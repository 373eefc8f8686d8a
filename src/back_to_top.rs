//! Floating "back to top" button.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

pub const BUTTON_CLASS: &str = "back-to-top";
pub const VISIBLE_CLASS: &str = "visible";
pub const BUTTON_LABEL: &str = "Back to top";
pub const CHEVRON_SVG: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="18 15 12 9 6 15"></polyline></svg>"#;

/// The button is shown strictly above `threshold`.
#[must_use]
pub fn is_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Create the button, toggle it on scroll and scroll home on click. The
/// button is removed when the returned handle drops.
///
/// # Errors
///
/// Propagates DOM failures while creating the button or registering listeners.
#[cfg(feature = "hydrate")]
pub fn mount(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<crate::dom::Injected, wasm_bindgen::JsValue> {
    use crate::dom::{self, Injected, Listener};

    let window = dom::window()?;
    let button = dom::create_html(document, "button")?;
    button.set_class_name(BUTTON_CLASS);
    button.set_attribute("aria-label", BUTTON_LABEL)?;
    button.set_inner_html(CHEVRON_SVG);
    dom::body(document)?.append_child(&button)?;

    let threshold = config.back_to_top_threshold;
    let win = window.clone();
    let shown = button.clone();
    let on_scroll = Listener::new(&window, "scroll", move |_| {
        dom::set_class(&shown, VISIBLE_CLASS, is_visible(dom::scroll_offset(&win), threshold));
    })?;

    let win = window.clone();
    let on_click = Listener::new(&button, "click", move |_| dom::smooth_scroll_to(&win, 0.0))?;

    Ok(Injected::new(button, vec![on_scroll, on_click]))
}
