//! Count-up animation for `[data-count]` statistics.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

pub const COUNTER_SELECTOR: &str = "[data-count]";
pub const COUNT_ATTRIBUTE: &str = "data-count";

/// Parse a `data-count` value: optional surrounding whitespace, optional sign,
/// then the leading run of digits. Trailing text such as `+` or `%` is
/// ignored.
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| n * sign)
}

/// One rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Fixed-increment count from 0 to `target`.
///
/// Each tick adds `target / (duration / step)`. Intermediate frames show the
/// floor of the running value; the first tick that reaches the target shows
/// the target exactly and finishes.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: i64, duration_ms: u32, step_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / f64::from(step_ms.max(1));
        let target_f = target as f64;
        let increment = if frames > 0.0 { target_f / frames } else { target_f };
        Self { target, increment, current: 0.0, done: false }
    }

    /// Advance one step. `None` once the animation has finished.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            return Some(CounterFrame { text: self.target.to_string(), done: true });
        }
        Some(CounterFrame { text: (self.current.floor() as i64).to_string(), done: false })
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }
}

/// Observe every counter and animate it once when half visible.
///
/// # Errors
///
/// Propagates selector or observer construction failures.
#[cfg(feature = "hydrate")]
pub fn mount(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<Option<crate::dom::OneShotObserver>, wasm_bindgen::JsValue> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Interval;

    use crate::dom::{self, OneShotObserver};

    let counters = dom::query_all(document, COUNTER_SELECTOR)?;
    if counters.is_empty() {
        return Ok(None);
    }

    let duration_ms = config.counter_duration_ms;
    let step_ms = config.counter_step_ms;
    let observer = OneShotObserver::new(config.counter_threshold, None, move |el| {
        let Some(target) = el.get_attribute(COUNT_ATTRIBUTE).as_deref().and_then(parse_target) else {
            log::debug!("skipping counter with unparseable {COUNT_ATTRIBUTE}");
            return;
        };
        let mut animation = CounterAnimation::new(target, duration_ms, step_ms);
        let el = el.clone();
        let holder: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let interval = Interval::new(step_ms, move || {
            let Some(frame) = animation.tick() else {
                return;
            };
            el.set_text_content(Some(&frame.text));
            if frame.done {
                holder_for_cb.borrow_mut().take();
            }
        });
        *holder.borrow_mut() = Some(interval);
    })?;

    for counter in &counters {
        observer.observe(counter);
    }
    Ok(Some(observer))
}
