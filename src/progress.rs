//! Reading-progress bar pinned to the top of the viewport.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

pub const PROGRESS_CLASS: &str = "scroll-progress";

/// Percentage of the scrollable range already scrolled, in `[0, 100]`.
///
/// A page that fits in the viewport has no scrollable range and reports `0`.
#[must_use]
pub fn progress_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 || !range.is_finite() || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// CSS width value for a percentage.
#[must_use]
pub fn width_style(percent: f64) -> String {
    format!("{percent}%")
}

/// Create the bar and keep its width in sync with scrolling. The bar is
/// removed when the returned handle drops.
///
/// # Errors
///
/// Propagates DOM failures while creating the bar or registering the listener.
#[cfg(feature = "hydrate")]
pub fn mount(document: &web_sys::Document) -> Result<crate::dom::Injected, wasm_bindgen::JsValue> {
    use crate::dom;

    let window = dom::window()?;
    let bar = dom::create_html(document, "div")?;
    bar.set_class_name(PROGRESS_CLASS);
    bar.style().set_property("width", &width_style(0.0))?;
    dom::body(document)?.append_child(&bar)?;

    let doc = document.clone();
    let win = window.clone();
    let shown = bar.clone();
    let on_scroll = dom::Listener::new(&window, "scroll", move |_| {
        let document_height = doc
            .document_element()
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        let percent = progress_percent(dom::scroll_offset(&win), document_height, dom::viewport_height(&win));
        if let Err(e) = shown.style().set_property("width", &width_style(percent)) {
            log::debug!("progress width update failed: {e:?}");
        }
    })?;

    Ok(dom::Injected::new(bar, vec![on_scroll]))
}
