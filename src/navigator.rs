//! Startup wiring and event entry points.
//!
//! `install` runs in a fixed order: collect sections, build the menu, and only
//! then accept link activations. After that the navigator just routes scroll,
//! frame and click notifications to the components.

use crate::config::NavConfig;
use crate::error::NavError;
use crate::highlight::{highlight, ActiveSet};
use crate::host::{LinkActivation, PageHost};
use crate::menu::{build_menu, NavEntry};
use crate::registry::SectionRegistry;
use crate::scheduler::{ScrollDecision, ScrollScheduler};
use crate::scroll::{activate_link, ScrollOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollResponse {
    /// A pass ran for this event.
    Highlighted(ActiveSet),
    /// The host should request an animation frame and call [`Navigator::on_frame`].
    FrameRequested,
    /// Folded into a frame that is already pending.
    Coalesced,
}

#[derive(Debug)]
pub struct Navigator {
    config: NavConfig,
    registry: SectionRegistry,
    entries: Vec<NavEntry>,
    scheduler: ScrollScheduler,
}

impl Navigator {
    pub fn install<H: PageHost + ?Sized>(host: &mut H, config: NavConfig) -> Result<Self, NavError> {
        config.validate()?;

        let registry = SectionRegistry::collect(host, &config);
        if registry.is_empty() {
            tracing::warn!(tag = %config.section_tag, "no sections found, navigation is inert");
        }

        let entries = build_menu(&registry, &config, host);
        let scheduler = ScrollScheduler::new(config.schedule);

        Ok(Self {
            config,
            registry,
            entries,
            scheduler,
        })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Entries written into the menu container. Empty when the container was missing.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn on_scroll<H: PageHost + ?Sized>(&mut self, host: &mut H) -> ScrollResponse {
        match self.scheduler.on_scroll() {
            ScrollDecision::Run => ScrollResponse::Highlighted(self.refresh(host)),
            ScrollDecision::RequestFrame => ScrollResponse::FrameRequested,
            ScrollDecision::Coalesced => ScrollResponse::Coalesced,
        }
    }

    pub fn on_frame<H: PageHost + ?Sized>(&mut self, host: &mut H) -> Option<ActiveSet> {
        if self.scheduler.on_frame() {
            Some(self.refresh(host))
        } else {
            None
        }
    }

    /// Unconditional highlight pass.
    pub fn refresh<H: PageHost + ?Sized>(&self, host: &mut H) -> ActiveSet {
        highlight(&self.registry, &self.config, host)
    }

    pub fn on_link_activated<H, E>(&self, host: &mut H, href: &str, event: &mut E) -> ScrollOutcome
    where
        H: PageHost + ?Sized,
        E: LinkActivation + ?Sized,
    {
        activate_link(&self.registry, &self.config, host, href, event)
    }
}
