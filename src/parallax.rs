//! Hero background parallax.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

pub const HERO_SELECTOR: &str = ".hero";

/// Background offset for the hero, or `None` once the hero has scrolled out
/// of the first viewport (the last applied offset is kept).
#[must_use]
pub fn background_offset(scrolled: f64, viewport_height: f64, speed: f64) -> Option<f64> {
    (scrolled < viewport_height).then(|| scrolled * speed)
}

/// Shift `.hero` background on scroll. `None` without a hero section.
///
/// # Errors
///
/// Propagates listener registration failures.
#[cfg(feature = "hydrate")]
pub fn mount(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<Option<crate::dom::Listener>, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    use crate::dom;

    let Some(hero) = document
        .query_selector(HERO_SELECTOR)?
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return Ok(None);
    };
    let window = dom::window()?;
    let speed = config.parallax_speed;
    let win = window.clone();
    let listener = dom::Listener::new(&window, "scroll", move |_| {
        let Some(offset) = background_offset(dom::scroll_offset(&win), dom::viewport_height(&win), speed) else {
            return;
        };
        if let Err(e) = hero
            .style()
            .set_property("background-position-y", &format!("{offset}px"))
        {
            log::debug!("parallax update failed: {e:?}");
        }
    })?;
    Ok(Some(listener))
}
