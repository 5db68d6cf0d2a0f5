//! Menu Builder
//!
//! One navigation entry per registered section, in document order, written
//! into the menu container in a single replace.

use crate::config::NavConfig;
use crate::error::NavError;
use crate::host::PageHost;
use crate::registry::{Section, SectionRegistry};

/// A generated link to one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub section_id: String,
    pub label: String,
}

impl NavEntry {
    pub fn for_section(section: &Section) -> Self {
        Self {
            section_id: section.id.clone(),
            label: section.label.clone(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

pub fn build_entries(registry: &SectionRegistry) -> Vec<NavEntry> {
    registry.iter().map(NavEntry::for_section).collect()
}

/// Build the entries and hand them to the host's menu container.
///
/// A missing container is not fatal: the page simply has no menu, and
/// nothing else depends on the links existing.
pub fn build_menu<H: PageHost + ?Sized>(
    registry: &SectionRegistry,
    config: &NavConfig,
    host: &mut H,
) -> Vec<NavEntry> {
    let entries = build_entries(registry);

    match host.replace_menu(&config.menu_container_id, &entries, &config.link_class) {
        Ok(()) => {
            tracing::debug!(
                entries = entries.len(),
                container = %config.menu_container_id,
                "navigation menu built"
            );
            entries
        }
        Err(NavError::MissingContainer(id)) => {
            tracing::warn!(container = %id, "menu container missing, navigation menu not built");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to build navigation menu");
            Vec::new()
        }
    }
}

/// Render entries as the `<li><a ...>label</a></li>` markup the container holds.
pub fn render_menu_html(entries: &[NavEntry], link_class: &str) -> String {
    let mut html = String::new();
    for entry in entries {
        html.push_str(&format!(
            "<li><a class=\"{}\" href=\"{}\">{}</a></li>",
            escape_attribute(link_class),
            escape_attribute(&entry.href()),
            escape_text(&entry.label)
        ));
    }
    html
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('"', "&quot;")
}
