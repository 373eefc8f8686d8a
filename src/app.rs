//! Entry point: mounts every behavior once the document is ready.
//!
//! ARCHITECTURE
//! ============
//! Each behavior's `mount` returns the handles that keep it attached. They are
//! collected into a [`Page`] held in a thread-local; `teardown()` drops it,
//! which detaches every listener and disconnects every observer. Elements the
//! crate injected (loader overlay, progress bar, back-to-top button) are
//! removed with it. A behavior that fails to mount is logged and skipped; the
//! rest still mount.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::SiteConfig;
use crate::dom::{self, Injected, Listener, OneShotObserver};
use crate::loader::PageLoader;
use crate::notify::{self, NotificationKind, Notifier};
use crate::{back_to_top, counter, form, header, loader, nav, parallax, progress, reveal, smooth_scroll, sprite, typing};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    static PENDING: RefCell<Option<Listener>> = const { RefCell::new(None) };
}

/// Everything keeping the page's behaviors alive.
#[derive(Default)]
pub struct Page {
    loader: Option<PageLoader>,
    listeners: Vec<Listener>,
    injected: Vec<Injected>,
    observers: Vec<OneShotObserver>,
}

impl Page {
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len() + self.injected.iter().map(Injected::listener_count).sum::<usize>()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

fn report<T>(behavior: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{behavior} failed to mount: {e:?}");
            None
        }
    }
}

/// Mount all behaviors against a ready document.
pub fn mount(document: &Document, config: &SiteConfig) -> Page {
    notify::install(Notifier::new(config));

    let mut page = Page { loader: report("page loader", loader::mount(document, config)), ..Page::default() };

    sprite::mount(document, config);

    let nav = report("navigation", nav::mount(document, config)).map(|(handle, listeners)| {
        page.listeners.extend(listeners);
        handle
    });

    page.listeners
        .extend(report("sticky header", header::mount(document, config)).flatten());
    page.listeners
        .extend(report("hero parallax", parallax::mount(document, config)).flatten());
    page.listeners
        .extend(report("smooth scroll", smooth_scroll::mount(document, config, nav)).unwrap_or_default());
    page.listeners
        .extend(report("contact form", form::mount(document)).flatten());
    page.injected
        .extend(report("scroll progress", progress::mount(document)));
    page.injected
        .extend(report("back to top", back_to_top::mount(document, config)));

    page.observers
        .extend(report("reveal animations", reveal::mount(document, config)).unwrap_or_default());
    page.observers
        .extend(report("counters", counter::mount(document, config)).flatten());

    if let Some(typed) = report("typewriter", typing::mount(document, config)) {
        log::debug!("typing {typed} element(s)");
    }

    log::info!(
        "page interactivity ready: {} listeners, {} observers",
        page.listener_count(),
        page.observer_count()
    );
    page
}

/// Read the config and mount against a parsed document.
///
/// The `script#site-config` block may sit anywhere in `<body>`, so it is only
/// read here, after `DOMContentLoaded`. The console level it carries is
/// applied before anything else logs.
fn install_page(document: &Document) {
    let config = SiteConfig::from_document(document);
    log::set_max_level(config.level().to_level_filter());
    let page = mount(document, &config);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// WASM entry point, run when the module is instantiated.
///
/// # Errors
///
/// Fails only when there is no document or the console logger cannot be
/// installed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(SiteConfig::default().level()).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let listener = Listener::new(&document, "DOMContentLoaded", move |_| {
            install_page(&doc);
            PENDING.with(|slot| slot.borrow_mut().take());
        })?;
        PENDING.with(|slot| *slot.borrow_mut() = Some(listener));
    } else {
        install_page(&document);
    }
    Ok(())
}

/// Show a toast from page scripts. `kind` is `info`, `success` or `error`.
#[wasm_bindgen]
pub fn show_notification(message: &str, kind: &str) {
    notify::show(message, NotificationKind::from_name(kind));
}

/// Detach every behavior from the page.
#[wasm_bindgen]
pub fn teardown() {
    let pending = PENDING.with(|slot| slot.borrow_mut().take());
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    drop(pending);
    if page.is_some() {
        log::info!("page interactivity detached");
    }
    drop(page);
}
