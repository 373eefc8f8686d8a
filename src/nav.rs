//! Mobile navigation: the menu panel and per-item dropdowns.
//!
//! DESIGN
//! ======
//! Both state machines are plain values. Event handlers feed them a
//! [`MenuEvent`] or a click/resize, then mirror the result onto the DOM as
//! `active` classes and the body scroll lock. The DOM never feeds state back.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const MENU_BUTTON_ID: &str = "mobileMenuBtn";
pub const MENU_PANEL_ID: &str = "navLinks";
pub const ACTIVE_CLASS: &str = "active";
pub const NAV_ITEM_SELECTOR: &str = ".nav-links > li";
pub const DROPDOWN_SELECTOR: &str = ".mega-menu, .dropdown-menu";

/// Main menu panel state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that move the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The menu button was clicked.
    Toggle,
    /// A click landed outside both the button and the panel.
    OutsideClick,
    /// Escape was pressed.
    Escape,
    /// A same-page anchor link scrolled the page.
    AnchorNavigated,
    /// The viewport grew past the mobile breakpoint.
    Widened,
}

impl MenuState {
    #[must_use]
    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle if self == Self::Closed => Self::Open,
            _ => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Page scrolling is suppressed exactly while the menu is open.
    #[must_use]
    pub fn scroll_locked(self) -> bool {
        self.is_open()
    }
}

/// Disclosure state of one nav item's dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Collapsed,
    Expanded,
}

impl DropdownState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// What a click on a dropdown-bearing nav link should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkClick {
    /// Let the browser follow the link.
    Navigate,
    /// Default navigation must be prevented; the dropdown was toggled.
    Toggled,
}

/// Dropdown states for the top-level nav items, in document order. Items
/// without a dropdown hold no state and are never active.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dropdowns {
    items: Vec<Option<DropdownState>>,
    breakpoint: f64,
}

impl Dropdowns {
    /// `has_dropdown[i]` says whether item `i` carries a dropdown.
    #[must_use]
    pub fn new(has_dropdown: &[bool], breakpoint: f64) -> Self {
        let items = has_dropdown
            .iter()
            .map(|&has| has.then_some(DropdownState::Collapsed))
            .collect();
        Self { items, breakpoint }
    }

    /// Dropdown interception applies at or below the breakpoint.
    #[must_use]
    pub fn is_narrow(&self, width: f64) -> bool {
        width <= self.breakpoint
    }

    /// Handle a click on item `index`'s link at viewport `width`.
    pub fn click(&mut self, index: usize, width: f64) -> LinkClick {
        if !self.is_narrow(width) || self.state(index).is_none() {
            return LinkClick::Navigate;
        }
        for (i, item) in self.items.iter_mut().enumerate() {
            if let Some(state) = item {
                *state = if i == index { state.toggled() } else { DropdownState::Collapsed };
            }
        }
        LinkClick::Toggled
    }

    /// Viewport resized. Above the breakpoint every dropdown collapses;
    /// returns `true` in that case.
    pub fn resize(&mut self, width: f64) -> bool {
        if self.is_narrow(width) {
            return false;
        }
        self.collapse_all();
        true
    }

    /// Collapse every dropdown. Returns whether anything changed.
    pub fn collapse_all(&mut self) -> bool {
        let mut changed = false;
        for state in self.items.iter_mut().flatten() {
            changed |= *state == DropdownState::Expanded;
            *state = DropdownState::Collapsed;
        }
        changed
    }

    /// Dropdown state of item `index`; `None` for items without one.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<DropdownState> {
        self.items.get(index).copied().flatten()
    }

    /// Whether item `index` carries the `active` class.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.state(index) == Some(DropdownState::Expanded)
    }
}

/// Combined navigation state for one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigation {
    pub menu: MenuState,
    pub dropdowns: Dropdowns,
}

impl Navigation {
    #[must_use]
    pub fn new(has_dropdown: &[bool], breakpoint: f64) -> Self {
        Self { menu: MenuState::Closed, dropdowns: Dropdowns::new(has_dropdown, breakpoint) }
    }

    pub fn menu_event(&mut self, event: MenuEvent) {
        self.menu = self.menu.apply(event);
    }

    /// Viewport resized. Above the breakpoint everything resets; returns
    /// `true` in that case.
    pub fn on_resize(&mut self, width: f64) -> bool {
        if !self.dropdowns.resize(width) {
            return false;
        }
        self.menu_event(MenuEvent::Widened);
        true
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{NavHandle, mount};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node};

    use super::{
        ACTIVE_CLASS, DROPDOWN_SELECTOR, LinkClick, MENU_BUTTON_ID, MENU_PANEL_ID, MenuEvent, NAV_ITEM_SELECTOR,
        Navigation,
    };
    use crate::config::SiteConfig;
    use crate::dom::{self, Listener};

    struct Elements {
        body: HtmlElement,
        button: Option<Element>,
        panel: Option<Element>,
        items: Vec<Element>,
    }

    /// Shared handle to the page's navigation, used by other behaviors that
    /// need to close the menu.
    #[derive(Clone)]
    pub struct NavHandle {
        state: Rc<RefCell<Navigation>>,
        elements: Rc<Elements>,
    }

    impl NavHandle {
        pub fn menu_event(&self, event: MenuEvent) {
            self.state.borrow_mut().menu_event(event);
            self.render_menu();
        }

        fn link_click(&self, index: usize, width: f64) -> LinkClick {
            let result = self.state.borrow_mut().dropdowns.click(index, width);
            if result == LinkClick::Toggled {
                self.render_items();
            }
            result
        }

        fn resize(&self, width: f64) {
            if self.state.borrow_mut().on_resize(width) {
                self.render_menu();
                self.render_items();
            }
        }

        fn render_menu(&self) {
            let menu = self.state.borrow().menu;
            let open = menu.is_open();
            if let Some(button) = &self.elements.button {
                dom::set_class(button, ACTIVE_CLASS, open);
            }
            if let Some(panel) = &self.elements.panel {
                dom::set_class(panel, ACTIVE_CLASS, open);
            }
            dom::set_scroll_lock(&self.elements.body, menu.scroll_locked());
        }

        fn render_items(&self) {
            let state = self.state.borrow();
            for (i, item) in self.elements.items.iter().enumerate() {
                dom::set_class(item, ACTIVE_CLASS, state.dropdowns.is_active(i));
            }
        }

        fn contains(&self, target: Option<&Node>) -> bool {
            let inside = |el: &Option<Element>| el.as_ref().is_some_and(|el| el.contains(target));
            inside(&self.elements.button) || inside(&self.elements.panel)
        }
    }

    /// Wire the menu button, outside-click/Escape closing, dropdown links and
    /// resize reset.
    ///
    /// # Errors
    ///
    /// Propagates listener registration failures.
    pub fn mount(document: &Document, config: &SiteConfig) -> Result<(NavHandle, Vec<Listener>), JsValue> {
        let window = dom::window()?;
        let items = dom::query_all(document, NAV_ITEM_SELECTOR)?;

        // (item index, link) for every item that has both a link and a dropdown.
        let mut has_dropdown = Vec::with_capacity(items.len());
        let mut links = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let link = item.query_selector("a")?;
            let dropdown = item.query_selector(DROPDOWN_SELECTOR)?;
            let toggles = if let (Some(link), Some(_)) = (link, dropdown) {
                links.push((index, link));
                true
            } else {
                false
            };
            has_dropdown.push(toggles);
        }

        let handle = NavHandle {
            state: Rc::new(RefCell::new(Navigation::new(&has_dropdown, config.mobile_breakpoint))),
            elements: Rc::new(Elements {
                body: dom::body(document)?,
                button: document.get_element_by_id(MENU_BUTTON_ID),
                panel: document.get_element_by_id(MENU_PANEL_ID),
                items,
            }),
        };

        let mut listeners = Vec::new();

        if let (Some(button), Some(_)) = (&handle.elements.button, &handle.elements.panel) {
            let h = handle.clone();
            listeners.push(Listener::new(button, "click", move |_| h.menu_event(MenuEvent::Toggle))?);

            let h = handle.clone();
            listeners.push(Listener::new(document, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                if !h.contains(target.as_ref()) {
                    h.menu_event(MenuEvent::OutsideClick);
                }
            })?);

            let h = handle.clone();
            listeners.push(Listener::new(document, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|e| e.key() == "Escape");
                if is_escape {
                    h.menu_event(MenuEvent::Escape);
                }
            })?);
        }

        for (index, link) in links {
            let h = handle.clone();
            let win = window.clone();
            listeners.push(Listener::new(&link, "click", move |event| {
                if h.link_click(index, dom::viewport_width(&win)) == LinkClick::Toggled {
                    event.prevent_default();
                }
            })?);
        }

        let h = handle.clone();
        let win = window.clone();
        listeners.push(Listener::new(&window, "resize", move |_| h.resize(dom::viewport_width(&win)))?);

        Ok((handle, listeners))
    }
}
