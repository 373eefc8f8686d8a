//! Thin `web-sys` helpers shared by every behavior.
//!
//! ARCHITECTURE
//! ============
//! DOM subscriptions are owned values. A [`Listener`] removes itself from its
//! target when dropped and a [`OneShotObserver`] disconnects, so whoever holds
//! the handle decides how long a behavior stays attached. Elements the crate
//! injects itself are held by an [`Injected`] and leave the page with it.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

/// The global `window`.
///
/// # Errors
///
/// Returns an error outside a browser context (e.g. a worker).
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// The window's `document`.
///
/// # Errors
///
/// Returns an error when no window or document is available.
pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// The document `<body>`.
///
/// # Errors
///
/// Returns an error when the document has no body yet.
pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

/// Create an element and cast it to `HtmlElement`.
///
/// # Errors
///
/// Propagates `createElement` failures.
pub fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns an error for an invalid selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Add or remove a class. Failures are logged; a missing class is cosmetic.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        log::debug!("class {class} update failed: {e:?}");
    }
}

/// Set or clear the body's scroll lock.
pub fn set_scroll_lock(body: &HtmlElement, locked: bool) {
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::debug!("scroll lock update failed: {e:?}");
    }
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_offset(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

/// Viewport width in CSS pixels.
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Viewport height in CSS pixels.
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Animate the window scroll position to `top`.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// A DOM event subscription that detaches itself on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Subscribe `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Propagates `addEventListener` failures.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("detaching {} listener failed: {e:?}", self.event);
        }
    }
}

/// Intersection observer that fires `on_enter` once per element, then
/// stops observing it. Disconnects on drop.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl OneShotObserver {
    /// # Errors
    ///
    /// Propagates `IntersectionObserver` construction failures.
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_enter: F) -> Result<Self, JsValue>
    where
        F: FnMut(&Element) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    on_enter(&target);
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// An element this crate added to the page, with the listeners driving it.
/// Dropping it detaches the listeners and removes the element.
pub struct Injected {
    element: HtmlElement,
    listeners: Vec<Listener>,
}

impl Injected {
    pub fn new(element: HtmlElement, listeners: Vec<Listener>) -> Self {
        Self { element, listeners }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for Injected {
    fn drop(&mut self) {
        self.listeners.clear();
        self.element.remove();
    }
}
