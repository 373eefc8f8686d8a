//! Sticky header `scrolled` state.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

pub const HEADER_ID: &str = "header";
pub const SCROLLED_CLASS: &str = "scrolled";

/// The header is marked strictly above `threshold`.
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Toggle `#header.scrolled` on every scroll. `None` without a header.
///
/// # Errors
///
/// Propagates listener registration failures.
#[cfg(feature = "hydrate")]
pub fn mount(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<Option<crate::dom::Listener>, wasm_bindgen::JsValue> {
    use crate::dom;

    let Some(header) = document.get_element_by_id(HEADER_ID) else {
        return Ok(None);
    };
    let window = dom::window()?;
    let threshold = config.header_scroll_threshold;
    dom::set_class(&header, SCROLLED_CLASS, is_scrolled(dom::scroll_offset(&window), threshold));

    let win = window.clone();
    let listener = dom::Listener::new(&window, "scroll", move |_| {
        dom::set_class(&header, SCROLLED_CLASS, is_scrolled(dom::scroll_offset(&win), threshold));
    })?;
    Ok(Some(listener))
}
