//! Same-page anchor links scroll smoothly, clearing the sticky header.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector for the fragment target of `href`, or `None` for a bare `#` or a
/// link that is not a same-page fragment.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() { None } else { Some(href) }
}

/// Header height to clear; zero or missing heights use `fallback`.
#[must_use]
pub fn effective_header_height(measured: Option<f64>, fallback: f64) -> f64 {
    measured.filter(|h| *h > 0.0).unwrap_or(fallback)
}

/// Document-relative scroll destination for a target whose bounding box top
/// is `rect_top` while the page is scrolled to `page_offset`.
#[must_use]
pub fn scroll_destination(rect_top: f64, page_offset: f64, header_height: f64) -> f64 {
    rect_top + page_offset - header_height
}

/// Intercept every same-page anchor.
///
/// # Errors
///
/// Propagates selector or listener registration failures.
#[cfg(feature = "hydrate")]
pub fn mount(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
    nav: Option<crate::nav::NavHandle>,
) -> Result<Vec<crate::dom::Listener>, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    use crate::dom::{self, Listener};
    use crate::header::HEADER_ID;
    use crate::nav::MenuEvent;

    let window = dom::window()?;
    let fallback = config.fallback_header_height;
    let mut listeners = Vec::new();

    for anchor in dom::query_all(document, ANCHOR_SELECTOR)? {
        let doc = document.clone();
        let win = window.clone();
        let nav = nav.clone();
        let link = anchor.clone();
        listeners.push(Listener::new(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = fragment_target(&href) else {
                return;
            };
            event.prevent_default();
            let target = match doc.query_selector(selector) {
                Ok(Some(target)) => target,
                Ok(None) => return,
                Err(e) => {
                    log::debug!("anchor {href} is not a valid selector: {e:?}");
                    return;
                }
            };
            let measured = doc.get_element_by_id(HEADER_ID).and_then(|h| {
                h.dyn_ref::<web_sys::HtmlElement>()
                    .map(|h| f64::from(h.offset_height()))
            });
            let top = scroll_destination(
                target.get_bounding_client_rect().top(),
                dom::scroll_offset(&win),
                effective_header_height(measured, fallback),
            );
            dom::smooth_scroll_to(&win, top);
            if let Some(nav) = &nav {
                nav.menu_event(MenuEvent::AnchorNavigated);
            }
        })?);
    }
    Ok(listeners)
}
