//! Relative path prefix for assets, derived from the page location.
//!
//! Pages under a subdirectory (e.g. `/pages/services.html`) need `../` to
//! reach the site-root `assets/` folder.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// Return `"../"` if `pathname` contains any of `markers`, else `""`.
#[must_use]
pub fn path_prefix<S: AsRef<str>>(pathname: &str, markers: &[S]) -> &'static str {
    if markers.iter().any(|m| pathname.contains(m.as_ref())) {
        "../"
    } else {
        ""
    }
}

/// Prefix for the page currently loaded in the browser.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn current_prefix<S: AsRef<str>>(markers: &[S]) -> &'static str {
    let pathname = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    path_prefix(&pathname, markers)
}
