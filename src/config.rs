//! Site-wide tuning values.
//!
//! Every threshold, delay, path and selector the behaviors use lives here so a
//! page can override them without a rebuild. Defaults reproduce the production
//! site. Overrides are read from an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">{ "mobile_breakpoint": 900 }</script>
//! ```
//!
//! Missing keys keep their defaults; malformed JSON is logged and ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// Element id of the inline JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_SPRITE_PATH: &str = "assets/icons/icons.svg";
pub const DEFAULT_LOGO_PATH: &str = "assets/logos/ItsITLogo9_11_19.png";
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `log` level name routed to the browser console.
    pub log_level: String,

    // ── Layout ──────────────────────────────────────────────────
    /// Widest viewport (logical px) treated as mobile for dropdowns.
    pub mobile_breakpoint: f64,
    /// Header gets `scrolled` strictly above this offset.
    pub header_scroll_threshold: f64,
    /// Back-to-top button shows strictly above this offset.
    pub back_to_top_threshold: f64,
    /// Used when `#header` is missing or has no height.
    pub fallback_header_height: f64,
    pub parallax_speed: f64,

    // ── Timing (ms) ─────────────────────────────────────────────
    pub loader_reveal_delay_ms: u32,
    pub loader_exit_ms: u32,
    pub notification_timeout_ms: u32,
    pub notification_exit_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_step_ms: u32,
    pub typewriter_speed_ms: u32,

    // ── Paths ───────────────────────────────────────────────────
    pub sprite_path: String,
    pub sprite_fallbacks: Vec<String>,
    pub subdirectory_markers: Vec<String>,
    pub logo_path: String,

    // ── Reveal ──────────────────────────────────────────────────
    pub fade_in_selector: String,
    pub animate_in_selector: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub counter_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            mobile_breakpoint: 768.0,
            header_scroll_threshold: 50.0,
            back_to_top_threshold: 300.0,
            fallback_header_height: 80.0,
            parallax_speed: 0.5,
            loader_reveal_delay_ms: 300,
            loader_exit_ms: 500,
            notification_timeout_ms: 5000,
            notification_exit_ms: 300,
            counter_duration_ms: 2000,
            counter_step_ms: 16,
            typewriter_speed_ms: 50,
            sprite_path: DEFAULT_SPRITE_PATH.to_owned(),
            sprite_fallbacks: vec![
                "./assets/icons/icons.svg".to_owned(),
                "../assets/icons/icons.svg".to_owned(),
                "/assets/icons/icons.svg".to_owned(),
            ],
            subdirectory_markers: vec!["/pages/".to_owned(), "/subdir/".to_owned()],
            logo_path: DEFAULT_LOGO_PATH.to_owned(),
            fade_in_selector: ".service-card, .industry-card, .process-card, .testimonial-card, .section-header, .service-step"
                .to_owned(),
            animate_in_selector: ".service-card, .process-card, .industry-card".to_owned(),
            reveal_threshold: 0.1,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_owned(),
            counter_threshold: 0.5,
        }
    }
}

impl SiteConfig {
    /// Parse overrides from a JSON object. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve the configured log level, falling back to `Info`.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Config for a page given its override block, if any. A malformed block
    /// is logged and replaced by defaults.
    pub fn resolve(block: Option<&str>) -> Self {
        match block.map_or_else(|| Ok(Self::default()), Self::from_json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default site config");
                Self::default()
            }
        }
    }

    /// Read `script#site-config` from the document. Only meaningful once the
    /// DOM has been parsed; earlier, a block further down the page is missed.
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let block = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::resolve(block.as_deref())
    }
}
