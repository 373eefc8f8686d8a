//! Page interactivity for the IT's IT LLC marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by every static page. It
//! attaches a fixed set of independent behaviors to the server-rendered
//! markup. Decision logic (state machines, thresholds, validation, fallback
//! ordering) is plain Rust and tested natively; the browser wiring behind the
//! `hydrate` feature only reads the DOM, feeds that logic and mirrors the
//! result back as classes, styles and text.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Tunable thresholds, delays, paths and selectors |
//! | [`error`] | Sprite, form and config error types |
//! | [`path`] | Relative asset prefix for subdirectory pages |
//! | `dom` | `web-sys` helpers and self-detaching listener handles (hydrate) |
//! | [`sprite`] | Inline SVG icon sprite with sequential fallbacks |
//! | [`loader`] | Full-page loading overlay |
//! | [`nav`] | Mobile menu and dropdown state machines |
//! | [`header`] | Sticky header `scrolled` state |
//! | [`parallax`] | Hero background parallax |
//! | [`smooth_scroll`] | Same-page anchor scrolling |
//! | [`form`] | Contact form validation |
//! | [`notify`] | Single-slot toast notifications |
//! | [`progress`] | Scroll progress bar |
//! | [`back_to_top`] | Back-to-top button |
//! | [`reveal`] | One-shot fade-in / animate-in on intersection |
//! | [`counter`] | Count-up statistics |
//! | [`typing`] | Typewriter headings |
//! | `app` | Entry point and page lifecycle (hydrate) |

pub mod back_to_top;
pub mod config;
pub mod counter;
pub mod error;
pub mod form;
pub mod header;
pub mod loader;
pub mod nav;
pub mod notify;
pub mod parallax;
pub mod path;
pub mod progress;
pub mod reveal;
pub mod smooth_scroll;
pub mod sprite;
pub mod typing;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod dom;
