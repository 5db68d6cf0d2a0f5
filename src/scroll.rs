//! Smooth Scroller
//!
//! A navigation link never performs the browser's own jump-to-anchor. The
//! default is always suppressed first; the target is then resolved against the
//! registry, and only a section that actually exists is scrolled to.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::NavConfig;
use crate::error::NavError;
use crate::host::{LinkActivation, PageHost, ScrollBehavior};
use crate::registry::{Section, SectionRegistry};

lazy_static! {
    /// `#id`, optionally preceded by the page's own URL.
    static ref FRAGMENT_HREF_RE: Regex = Regex::new(r"^[^#]*#([^\s#]+)$").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollOutcome {
    /// A smooth scroll toward `top` was started.
    Scrolled { section_id: String, top: f64 },
    /// The link could not be followed; the page did not move.
    Ignored,
}

/// Extract the target id from a link's href.
pub fn fragment_target(href: &str) -> Result<&str, NavError> {
    FRAGMENT_HREF_RE
        .captures(href.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| NavError::MalformedHref(href.to_string()))
}

pub fn resolve_target<'r>(registry: &'r SectionRegistry, href: &str) -> Result<&'r Section, NavError> {
    let id = fragment_target(href)?;
    registry
        .get(id)
        .ok_or_else(|| NavError::UnresolvedTarget(id.to_string()))
}

/// Handle the primary activation of a navigation link.
pub fn activate_link<H, E>(
    registry: &SectionRegistry,
    config: &NavConfig,
    host: &mut H,
    href: &str,
    event: &mut E,
) -> ScrollOutcome
where
    H: PageHost + ?Sized,
    E: LinkActivation + ?Sized,
{
    event.prevent_default();

    let section = match resolve_target(registry, href) {
        Ok(section) => section,
        Err(e) => {
            tracing::warn!(href, error = %e, "navigation link ignored");
            return ScrollOutcome::Ignored;
        }
    };

    let Some(top) = host.offset_top(&section.id).filter(|top| top.is_finite()) else {
        tracing::warn!(id = %section.id, "section has no layout position, navigation link ignored");
        return ScrollOutcome::Ignored;
    };

    host.scroll_to(
        top,
        ScrollBehavior::Smooth {
            duration_ms: config.scroll_duration_ms,
        },
    );
    tracing::debug!(id = %section.id, top, "scrolling to section");

    ScrollOutcome::Scrolled {
        section_id: section.id.clone(),
        top,
    }
}
