//! Scroll Highlighter
//!
//! ## Invariants
//!
//! 1. **Stateless projection**: whether a section is active depends only on
//!    the current geometry. Nothing from a previous pass is consulted.
//! 2. **Reset, then set**: every pass first deactivates every section, then
//!    activates those inside the band. A pass never leaves a mix of two
//!    scroll positions behind.
//! 3. **Half-open band**: `lower <= floor(offset) < upper`. Several sections
//!    may be active at once.

use serde::{Deserialize, Serialize};

use crate::config::NavConfig;
use crate::host::PageHost;
use crate::registry::SectionRegistry;

pub const DEFAULT_BAND_LOWER: i64 = -150;
pub const DEFAULT_BAND_UPPER: i64 = 150;

/// Whole-pixel offsets from the viewport top that count as "in view".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationBand {
    /// Inclusive.
    pub lower: i64,
    /// Exclusive.
    pub upper: i64,
}

impl Default for ActivationBand {
    fn default() -> Self {
        Self {
            lower: DEFAULT_BAND_LOWER,
            upper: DEFAULT_BAND_UPPER,
        }
    }
}

impl ActivationBand {
    pub fn contains(&self, offset: i64) -> bool {
        offset >= self.lower && offset < self.upper
    }

    /// Floor a raw top-edge distance and test it. Non-finite geometry is never active.
    pub fn contains_top(&self, viewport_top: f64) -> bool {
        section_offset(viewport_top).is_some_and(|offset| self.contains(offset))
    }
}

/// Whole-pixel offset of a top edge, or `None` for geometry that is not a number.
pub fn section_offset(viewport_top: f64) -> Option<i64> {
    if viewport_top.is_finite() {
        Some(viewport_top.floor() as i64)
    } else {
        None
    }
}

/// Outcome of one pass: an active flag per registered section, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet {
    ids: Vec<String>,
    flags: Vec<bool>,
}

impl ActiveSet {
    pub fn is_active(&self, id: &str) -> bool {
        self.ids
            .iter()
            .zip(&self.flags)
            .any(|(candidate, &flag)| flag && candidate == id)
    }

    pub fn active_ids(&self) -> Vec<&str> {
        self.ids
            .iter()
            .zip(&self.flags)
            .filter(|&(_, &flag)| flag)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Recompute the active state of every section against the current viewport.
pub fn highlight<H: PageHost + ?Sized>(
    registry: &SectionRegistry,
    config: &NavConfig,
    host: &mut H,
) -> ActiveSet {
    let mut set = ActiveSet {
        ids: registry.iter().map(|s| s.id.clone()).collect(),
        flags: vec![false; registry.len()],
    };

    // Pass 1: everything inactive.
    for section in registry {
        host.set_class(&section.id, &config.active_class, false);
        host.set_inline_style(&section.id, &config.inactive_style);
    }

    // Pass 2: activate whatever sits inside the band now.
    for (flag, section) in set.flags.iter_mut().zip(registry) {
        let in_band = host
            .viewport_top(&section.id)
            .is_some_and(|top| config.band.contains_top(top));

        if in_band {
            *flag = true;
            host.set_class(&section.id, &config.active_class, true);
            host.set_inline_style(&section.id, &config.active_style);
        }
    }

    tracing::debug!(active = ?set.active_ids(), "highlight pass");
    set
}
