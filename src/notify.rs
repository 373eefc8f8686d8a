//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! A single [`NotificationSlot`] owns the "at most one toast" rule. Every toast
//! gets a [`Ticket`]; timers and the dismiss button carry the ticket they were
//! created for, so a late timer from a replaced toast is a no-op instead of
//! removing its successor.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Background color for the toast.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "#003865",
            Self::Success => "#006341",
            Self::Error => "#dc2626",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Parse a kind name from JS callers. Unknown names are `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Class list applied to the toast element.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// CSS `animation` value for a toast leaving over `exit_ms`.
#[must_use]
pub fn exit_animation(exit_ms: u32) -> String {
    format!("slideOut {exit_ms}ms ease forwards")
}

/// Identity of one shown toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Shown,
    Leaving,
}

/// Bookkeeping for the single notification slot.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    next: u64,
    current: Option<(Ticket, Phase)>,
}

impl NotificationSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for a new toast. Returns the new ticket and the ticket
    /// of the toast it replaced, which must be removed immediately.
    pub fn open(&mut self) -> (Ticket, Option<Ticket>) {
        self.next += 1;
        let ticket = Ticket(self.next);
        let replaced = self.current.replace((ticket, Phase::Shown)).map(|(t, _)| t);
        (ticket, replaced)
    }

    /// Start the exit transition. Returns `false` if `ticket` is stale or
    /// already leaving.
    pub fn begin_dismiss(&mut self, ticket: Ticket) -> bool {
        match &mut self.current {
            Some((t, phase)) if *t == ticket && *phase == Phase::Shown => {
                *phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Release the slot after the exit transition. Returns `false` if
    /// `ticket` no longer owns the slot.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        match self.current {
            Some((t, _)) if t == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Ticket> {
        self.current.map(|(t, _)| t)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{Notifier, install, show};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsValue;
    use web_sys::HtmlElement;

    use super::{NotificationKind, NotificationSlot, Ticket, exit_animation};
    use crate::config::SiteConfig;
    use crate::dom::{self, Listener};

    const KEYFRAMES_ID: &str = "notification-keyframes";
    const KEYFRAMES: &str = "
        @keyframes slideIn {
            from { transform: translateX(100%); opacity: 0; }
            to { transform: translateX(0); opacity: 1; }
        }
        @keyframes slideOut {
            from { transform: translateX(0); opacity: 1; }
            to { transform: translateX(100%); opacity: 0; }
        }";
    const CLOSE_STYLE: &str = "background: none; border: none; color: white; font-size: 1.5rem; \
        cursor: pointer; padding: 0; line-height: 1;";

    thread_local! {
        static NOTIFIER: RefCell<Option<Notifier>> = const { RefCell::new(None) };
    }

    /// Register the page-wide notifier.
    pub fn install(notifier: Notifier) {
        NOTIFIER.with(|slot| *slot.borrow_mut() = Some(notifier));
    }

    /// Show a toast through the page-wide notifier.
    pub fn show(message: &str, kind: NotificationKind) {
        let notifier = NOTIFIER.with(|slot| slot.borrow().clone());
        match notifier {
            Some(notifier) => {
                if let Err(e) = notifier.show(message, kind) {
                    log::warn!("notification failed: {e:?}");
                }
            }
            None => log::warn!("notification before mount: {message}"),
        }
    }

    struct Active {
        ticket: Ticket,
        element: HtmlElement,
        _close: Listener,
        _auto: Timeout,
        exit: Option<Timeout>,
    }

    struct Inner {
        slot: NotificationSlot,
        active: Option<Active>,
        timeout_ms: u32,
        exit_ms: u32,
    }

    /// Owner of the on-page toast element.
    #[derive(Clone)]
    pub struct Notifier {
        inner: Rc<RefCell<Inner>>,
    }

    impl Notifier {
        #[must_use]
        pub fn new(config: &SiteConfig) -> Self {
            Self {
                inner: Rc::new(RefCell::new(Inner {
                    slot: NotificationSlot::new(),
                    active: None,
                    timeout_ms: config.notification_timeout_ms,
                    exit_ms: config.notification_exit_ms,
                })),
            }
        }

        /// Replace any current toast with a new one.
        ///
        /// # Errors
        ///
        /// Propagates DOM failures while building the toast.
        pub fn show(&self, message: &str, kind: NotificationKind) -> Result<(), JsValue> {
            let document = dom::document()?;
            let body = dom::body(&document)?;
            ensure_keyframes(&document)?;

            let mut inner = self.inner.borrow_mut();
            let (ticket, replaced) = inner.slot.open();
            if replaced.is_some() {
                if let Some(old) = inner.active.take() {
                    old.element.remove();
                }
            }

            let element = dom::create_html(&document, "div")?;
            element.set_class_name(&kind.class_name());
            element.style().set_css_text(&format!(
                "position: fixed; top: 100px; right: 20px; padding: 1rem 1.5rem; \
                 background-color: {}; color: white; border-radius: 8px; \
                 box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3); z-index: 9999; display: flex; \
                 align-items: center; gap: 1rem; animation: slideIn 0.3s ease; max-width: 400px;",
                kind.color()
            ));

            let text = dom::create_html(&document, "span")?;
            text.set_text_content(Some(message));
            element.append_child(&text)?;

            let close = dom::create_html(&document, "button")?;
            close.set_class_name("notification-close");
            close.set_attribute("aria-label", "Dismiss notification")?;
            close.set_text_content(Some("\u{00d7}"));
            close.style().set_css_text(CLOSE_STYLE);
            element.append_child(&close)?;

            body.append_child(&element)?;

            let weak = Rc::downgrade(&self.inner);
            let close_listener = Listener::new(&close, "click", move |_| dismiss(&weak, ticket))?;
            let weak = Rc::downgrade(&self.inner);
            let auto = Timeout::new(inner.timeout_ms, move || dismiss(&weak, ticket));

            inner.active = Some(Active { ticket, element, _close: close_listener, _auto: auto, exit: None });
            Ok(())
        }
    }

    fn dismiss(inner: &Weak<RefCell<Inner>>, ticket: Ticket) {
        let Some(rc) = inner.upgrade() else {
            return;
        };
        let mut state = rc.borrow_mut();
        if !state.slot.begin_dismiss(ticket) {
            return;
        }
        let exit_ms = state.exit_ms;
        let Some(active) = state.active.as_mut().filter(|a| a.ticket == ticket) else {
            return;
        };
        if let Err(e) = active
            .element
            .style()
            .set_property("animation", &exit_animation(exit_ms))
        {
            log::debug!("notification exit animation failed: {e:?}");
        }
        let weak = Weak::clone(inner);
        active.exit = Some(Timeout::new(exit_ms, move || finish(&weak, ticket)));
    }

    fn finish(inner: &Weak<RefCell<Inner>>, ticket: Ticket) {
        let Some(rc) = inner.upgrade() else {
            return;
        };
        let mut state = rc.borrow_mut();
        if !state.slot.finish(ticket) {
            return;
        }
        // The active entry owns the timer running this callback; only detach
        // the element here and let the next `show` drop the handles.
        if let Some(active) = state.active.as_ref().filter(|a| a.ticket == ticket) {
            active.element.remove();
        }
    }

    fn ensure_keyframes(document: &web_sys::Document) -> Result<(), JsValue> {
        if document.get_element_by_id(KEYFRAMES_ID).is_some() {
            return Ok(());
        }
        let Some(head) = document.head() else {
            return Ok(());
        };
        let style = document.create_element("style")?;
        style.set_id(KEYFRAMES_ID);
        style.set_text_content(Some(KEYFRAMES));
        head.append_child(&style)?;
        Ok(())
    }
}
