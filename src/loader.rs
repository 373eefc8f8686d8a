//! Full-page loading overlay.
//!
//! The overlay is shown from start-up until the window `load` event, then
//! fades out and is removed. [`LoaderPhase`] is the single source of truth for
//! which body marker applies and whether the overlay should still exist.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::config::SiteConfig;

pub const OVERLAY_SELECTOR: &str = ".page-loader";
pub const OVERLAY_CLASS: &str = "page-loader";
pub const LOADED_CLASS: &str = "loaded";
pub const BODY_LOADING_CLASS: &str = "page-loading";
pub const BODY_LOADED_CLASS: &str = "page-loaded";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Overlay visible, page still loading.
    #[default]
    Loading,
    /// Overlay playing its exit transition.
    Exiting,
    /// Overlay removed.
    Loaded,
}

impl LoaderPhase {
    /// Next phase; `Loaded` is terminal.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Loading => Self::Exiting,
            Self::Exiting | Self::Loaded => Self::Loaded,
        }
    }

    /// Marker class carried by `<body>` in this phase.
    #[must_use]
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Loading | Self::Exiting => BODY_LOADING_CLASS,
            Self::Loaded => BODY_LOADED_CLASS,
        }
    }

    #[must_use]
    pub fn overlay_present(self) -> bool {
        self != Self::Loaded
    }

    /// Body classes to `(remove, add)` when moving to `to`, if they differ.
    #[must_use]
    pub fn body_swap(self, to: Self) -> Option<(&'static str, &'static str)> {
        let (from, to) = (self.body_class(), to.body_class());
        (from != to).then_some((from, to))
    }

    /// How long to wait in this phase once the page has loaded.
    #[must_use]
    pub fn delay_ms(self, config: &SiteConfig) -> Option<u32> {
        match self {
            Self::Loading => Some(config.loader_reveal_delay_ms),
            Self::Exiting => Some(config.loader_exit_ms),
            Self::Loaded => None,
        }
    }
}

/// Inner markup of a freshly created overlay.
#[must_use]
pub fn overlay_markup(logo_src: &str) -> String {
    format!(
        r#"<div class="loader-content"><div class="loader-logo"><img src="{logo_src}" alt="Loading..."></div><div class="loader-spinner"></div></div>"#
    )
}

#[cfg(feature = "hydrate")]
pub use browser::{PageLoader, mount};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, HtmlElement};

    use super::{LOADED_CLASS, LoaderPhase, OVERLAY_CLASS, OVERLAY_SELECTOR, overlay_markup};
    use crate::config::SiteConfig;
    use crate::dom::{self, Listener};
    use crate::path;

    struct Shared {
        phase: Cell<LoaderPhase>,
        body: HtmlElement,
        overlay: HtmlElement,
        reveal_ms: u32,
        exit_ms: u32,
        timers: RefCell<Vec<Timeout>>,
    }

    /// Owner of the overlay element and its exit timers.
    pub struct PageLoader {
        shared: Rc<Shared>,
        _load: Option<Listener>,
    }

    impl Drop for PageLoader {
        fn drop(&mut self) {
            // Pending timers hold the shared state; clearing them cancels the
            // exit sequence and breaks the cycle.
            self.shared.timers.borrow_mut().clear();
            let from = self.shared.phase.replace(LoaderPhase::Loaded);
            if from.overlay_present() {
                finish(&self.shared, from);
            }
        }
    }

    /// Remove the overlay and mark the body loaded.
    fn finish(shared: &Shared, from: LoaderPhase) {
        shared.overlay.remove();
        if let Some((old, new)) = from.body_swap(LoaderPhase::Loaded) {
            dom::set_class(&shared.body, old, false);
            dom::set_class(&shared.body, new, true);
        }
    }

    fn ensure_overlay(document: &Document, body: &HtmlElement, config: &SiteConfig) -> Result<HtmlElement, JsValue> {
        if let Some(existing) = document.query_selector(OVERLAY_SELECTOR)? {
            return existing.dyn_into::<HtmlElement>().map_err(JsValue::from);
        }
        let prefix = path::current_prefix(&config.subdirectory_markers);
        let overlay = dom::create_html(document, "div")?;
        overlay.set_class_name(OVERLAY_CLASS);
        overlay.set_inner_html(&overlay_markup(&format!("{prefix}{}", config.logo_path)));
        body.append_child(&overlay)?;
        Ok(overlay)
    }

    fn step(shared: &Rc<Shared>) {
        let from = shared.phase.get();
        let to = from.advance();
        if from == to {
            return;
        }
        shared.phase.set(to);
        match to {
            LoaderPhase::Exiting => {
                dom::set_class(&shared.overlay, LOADED_CLASS, true);
                schedule(shared, shared.exit_ms);
            }
            LoaderPhase::Loaded => finish(shared, from),
            LoaderPhase::Loading => {}
        }
    }

    fn schedule(shared: &Rc<Shared>, delay_ms: u32) {
        let next = Rc::clone(shared);
        shared
            .timers
            .borrow_mut()
            .push(Timeout::new(delay_ms, move || step(&next)));
    }

    /// Show the overlay now and start its exit once the window has loaded.
    ///
    /// # Errors
    ///
    /// Propagates DOM failures while creating the overlay.
    pub fn mount(document: &Document, config: &SiteConfig) -> Result<PageLoader, JsValue> {
        let body = dom::body(document)?;
        let phase = LoaderPhase::default();
        dom::set_class(&body, phase.body_class(), true);
        let overlay = ensure_overlay(document, &body, config)?;

        let shared = Rc::new(Shared {
            phase: Cell::new(phase),
            body,
            overlay,
            reveal_ms: phase.delay_ms(config).unwrap_or(0),
            exit_ms: LoaderPhase::Exiting.delay_ms(config).unwrap_or(0),
            timers: RefCell::new(Vec::new()),
        });

        let load = if document.ready_state() == "complete" {
            schedule(&shared, shared.reveal_ms);
            None
        } else {
            let window = dom::window()?;
            let on_load = Rc::clone(&shared);
            Some(Listener::new(&window, "load", move |_| schedule(&on_load, on_load.reveal_ms))?)
        };

        Ok(PageLoader { shared, _load: load })
    }
}
