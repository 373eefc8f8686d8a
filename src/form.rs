//! Contact form validation.
//!
//! Submissions are validated locally and logged; nothing is transmitted. A
//! submission endpoint would hook in where [`SUCCESS_MESSAGE`] is shown.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::FormError;
use crate::notify::NotificationKind;

pub const FORM_ID: &str = "contactForm";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll be in touch soon.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// `local@domain.tld`: one `@`, no whitespace, a dot after the `@`.
/// A pattern that fails to build is logged and rejects every address.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("email pattern failed to compile: {e}");
        None
    }
});

/// Field values read once at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    /// JSON rendering for the operator log.
    #[must_use]
    pub fn to_log_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Check required fields first, then the email shape.
///
/// # Errors
///
/// Returns the first violated rule class.
pub fn validate(submission: &ContactSubmission) -> Result<(), FormError> {
    if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(&submission.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// What the visitor sees, and whether the form should be cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub kind: NotificationKind,
    pub reset: bool,
}

/// Validate and decide the user-visible result. Accepted submissions are
/// logged here.
#[must_use]
pub fn outcome(submission: &ContactSubmission) -> Outcome {
    match validate(submission) {
        Ok(()) => {
            log::info!("Form submitted: {}", submission.to_log_line());
            Outcome { message: SUCCESS_MESSAGE.to_owned(), kind: NotificationKind::Success, reset: true }
        }
        Err(e) => {
            log::debug!("contact form rejected: {e:?}");
            Outcome { message: e.to_string(), kind: NotificationKind::Error, reset: false }
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, FormData, HtmlFormElement};

    use super::{ContactSubmission, FORM_ID, outcome};
    use crate::dom::Listener;
    use crate::notify;

    fn field(data: &FormData, name: &str) -> String {
        data.get(name).as_string().unwrap_or_default()
    }

    fn snapshot(form: &HtmlFormElement) -> Result<ContactSubmission, JsValue> {
        let data = FormData::new_with_form(form)?;
        Ok(ContactSubmission::new(field(&data, "name"), field(&data, "email"), field(&data, "message")))
    }

    /// Intercept `#contactForm` submissions. `None` when the page has no form.
    ///
    /// # Errors
    ///
    /// Propagates listener registration failures.
    pub fn mount(document: &Document) -> Result<Option<Listener>, JsValue> {
        let Some(form) = document
            .get_element_by_id(FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            return Ok(None);
        };

        let target = form.clone();
        let listener = Listener::new(&form, "submit", move |event| {
            event.prevent_default();
            let submission = match snapshot(&target) {
                Ok(s) => s,
                Err(e) => {
                    log::error!("reading contact form failed: {e:?}");
                    return;
                }
            };
            let result = outcome(&submission);
            notify::show(&result.message, result.kind);
            if result.reset {
                target.reset();
            }
        })?;
        Ok(Some(listener))
    }
}
