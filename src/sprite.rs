//! Inline SVG icon sprite.
//!
//! Icons are written as `<use href="assets/icons/icons.svg#icon-shield">`,
//! which browsers refuse to resolve from `file://` pages. The loader fetches
//! the sprite once, injects it hidden at the top of `<body>` and rewrites each
//! reference to the bare fragment so it resolves against the inline copy.
//!
//! ERROR HANDLING
//! ==============
//! Candidate paths are tried strictly one after another. Each failure is a
//! warning; running out of candidates is an error in the console and the icons
//! simply stay blank.

#[cfg(test)]
#[path = "sprite_test.rs"]
mod sprite_test;

use crate::config::SiteConfig;
use crate::error::SpriteError;

pub const CONTAINER_ID: &str = "svg-sprite-container";
pub const ICON_FRAGMENT_MARKER: &str = "#icon-";
pub const USE_SELECTOR: &str = "svg use";

/// Sprite markup and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedSprite {
    pub path: String,
    pub markup: String,
    /// 1-based index of the candidate that succeeded.
    pub attempts: usize,
}

/// Rewrite an icon reference to its bare fragment.
///
/// Returns `None` for references that are not sprite icons or are already
/// local.
#[must_use]
pub fn rewrite_icon_href(href: &str) -> Option<String> {
    if !href.contains(ICON_FRAGMENT_MARKER) {
        return None;
    }
    let fragment = &href[href.find('#')?..];
    (fragment != href).then(|| fragment.to_owned())
}

/// Primary sprite path for a page, followed by the configured fallbacks.
#[must_use]
pub fn candidate_paths(prefix: &str, config: &SiteConfig) -> Vec<String> {
    std::iter::once(format!("{prefix}{}", config.sprite_path))
        .chain(config.sprite_fallbacks.iter().cloned())
        .collect()
}

/// Try each path in order and return the first successful body.
///
/// The next request is only issued after the previous one has failed.
///
/// # Errors
///
/// Returns [`SpriteError::Exhausted`] when every path fails.
pub async fn load_first<F, Fut>(paths: &[String], mut fetch: F) -> Result<LoadedSprite, SpriteError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<String, SpriteError>>,
{
    for (i, path) in paths.iter().enumerate() {
        match fetch(path.clone()).await {
            Ok(markup) => {
                log::debug!("SVG sprite loaded from {path}");
                return Ok(LoadedSprite { path: path.clone(), markup, attempts: i + 1 });
            }
            Err(e) => log::warn!("Could not load SVG sprite: {e}"),
        }
    }
    Err(SpriteError::Exhausted { attempts: paths.len() })
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsValue;
    use web_sys::Document;

    use super::{CONTAINER_ID, USE_SELECTOR, candidate_paths, load_first, rewrite_icon_href};
    use crate::config::SiteConfig;
    use crate::dom;
    use crate::error::SpriteError;
    use crate::path;

    async fn fetch_text(path: String) -> Result<String, SpriteError> {
        let resp = gloo_net::http::Request::get(&path)
            .send()
            .await
            .map_err(|e| SpriteError::Network { path: path.clone(), message: e.to_string() })?;
        if !resp.ok() {
            return Err(SpriteError::Status { path, status: resp.status() });
        }
        resp.text()
            .await
            .map_err(|e| SpriteError::Network { path, message: e.to_string() })
    }

    fn inject(document: &Document, markup: &str) -> Result<(), JsValue> {
        let body = dom::body(document)?;
        let container = dom::create_html(document, "div")?;
        container.set_id(CONTAINER_ID);
        container.style().set_property("display", "none")?;
        container.set_inner_html(markup);
        body.insert_before(&container, body.first_child().as_ref())?;
        Ok(())
    }

    fn rewrite_references(document: &Document) -> Result<usize, JsValue> {
        let mut rewritten = 0;
        for el in dom::query_all(document, USE_SELECTOR)? {
            let href = el
                .get_attribute("href")
                .or_else(|| el.get_attribute("xlink:href"));
            if let Some(local) = href.as_deref().and_then(rewrite_icon_href) {
                el.set_attribute("href", &local)?;
                rewritten += 1;
            }
        }
        Ok(rewritten)
    }

    /// Start loading the sprite in the background unless it is already inline.
    pub fn mount(document: &Document, config: &SiteConfig) {
        if document.get_element_by_id(CONTAINER_ID).is_some() {
            return;
        }
        let paths = candidate_paths(path::current_prefix(&config.subdirectory_markers), config);
        let document = document.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let sprite = match load_first(&paths, fetch_text).await {
                Ok(sprite) => sprite,
                Err(e) => {
                    log::error!("{e}");
                    return;
                }
            };
            let result = inject(&document, &sprite.markup).and_then(|()| rewrite_references(&document));
            match result {
                Ok(count) => log::debug!(
                    "rewrote {count} icon references to inline sprite from {} (candidate {} of {})",
                    sprite.path,
                    sprite.attempts,
                    paths.len()
                ),
                Err(e) => log::error!("injecting SVG sprite failed: {e:?}"),
            }
        });
    }
}
