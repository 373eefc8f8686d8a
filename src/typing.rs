//! Typewriter effect for `[data-typewriter]` headings.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

pub const TYPEWRITER_SELECTOR: &str = "[data-typewriter]";
pub const TEXT_ATTRIBUTE: &str = "data-typewriter";
pub const SPEED_ATTRIBUTE: &str = "data-typewriter-speed";

/// Yields successively longer prefixes of `text`, one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    end: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), end: 0 }
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let next = self.text[self.end..].chars().next()?;
        self.end += next.len_utf8();
        Some(self.text[..self.end].to_owned())
    }
}

/// Per-character delay from the speed attribute, or `default_ms`.
#[must_use]
pub fn speed_ms(attr: Option<&str>, default_ms: u32) -> u32 {
    attr.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default_ms)
}

/// Start typing every `[data-typewriter]` element.
///
/// # Errors
///
/// Propagates selector failures.
#[cfg(feature = "hydrate")]
pub fn mount(document: &web_sys::Document, config: &crate::config::SiteConfig) -> Result<usize, wasm_bindgen::JsValue> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Interval;

    use crate::dom;

    let elements = dom::query_all(document, TYPEWRITER_SELECTOR)?;
    for el in &elements {
        let text = el.get_attribute(TEXT_ATTRIBUTE).unwrap_or_default();
        let speed = speed_ms(el.get_attribute(SPEED_ATTRIBUTE).as_deref(), config.typewriter_speed_ms);
        el.set_text_content(Some(""));

        let mut typewriter = Typewriter::new(text);
        let target = el.clone();
        let holder: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let interval = Interval::new(speed, move || match typewriter.next() {
            Some(prefix) => target.set_text_content(Some(&prefix)),
            None => {
                holder_for_cb.borrow_mut().take();
            }
        });
        *holder.borrow_mut() = Some(interval);
    }
    Ok(elements.len())
}
