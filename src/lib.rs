//! # Page Navigation
//!
//! Builds a navigation menu from a page's sections, highlights the sections
//! near the top of the viewport while scrolling, and turns menu clicks into
//! smooth scrolls.
//!
//! ## Invariants
//!
//! 1. **Menu first**: the menu container is filled exactly once, before any
//!    link activation is handled. Entries follow document order, one per
//!    well-formed section (`id` plus label attribute).
//! 2. **Activation band**: a section is active iff
//!    `lower <= floor(top - viewport_top) < upper`, `[-150, 150)` by default.
//!    More than one section may be active.
//! 3. **Full recomputation**: every highlight pass clears every section and
//!    re-evaluates from current geometry. No flag survives from an earlier
//!    scroll position.
//! 4. **Guarded clicks**: default navigation is always suppressed. A link whose
//!    target does not resolve to a section is a logged no-op.
//! 5. **Explicit context**: components take the registry, config and a
//!    [`PageHost`] as arguments; none of them reads ambient document state.
//!
//! ## Hosts
//!
//! - [`StaticPage`]: html5ever document with supplied layout and a simulated
//!   viewport. Always available.
//! - `BrowserPage` (feature `wasm`): the live DOM through `web-sys`.
//! - Node bridge (feature `napi`): `render_navigation_native`,
//!   `active_sections_native`.

#[cfg(feature = "napi")]
mod bridge;
mod config;
mod error;
mod highlight;
mod host;
mod menu;
mod navigator;
mod page;
mod registry;
mod scheduler;
mod scroll;
mod viewport;
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(test)]
mod highlight_tests;

#[cfg(feature = "napi")]
pub use bridge::{active_sections_native, render_navigation_native};
pub use config::NavConfig;
pub use error::NavError;
pub use highlight::{highlight, section_offset, ActivationBand, ActiveSet};
pub use host::{ClickEvent, LinkActivation, PageHost, RawSection, ScrollBehavior};
pub use menu::{build_entries, build_menu, render_menu_html, NavEntry};
pub use navigator::{Navigator, ScrollResponse};
pub use page::StaticPage;
pub use registry::{Section, SectionRegistry};
pub use scheduler::{SchedulePolicy, ScrollDecision, ScrollScheduler};
pub use scroll::{activate_link, fragment_target, resolve_target, ScrollOutcome};
pub use viewport::{ease_in_out_cubic, ScrollAnimation, Viewport};
#[cfg(feature = "wasm")]
pub use wasm::{install_navigation, BrowserPage};
