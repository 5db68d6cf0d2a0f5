//! Node bridge
//!
//! JSON in, strings out, so a JS build step can pre-render the menu into a
//! page or ask which sections a given layout would highlight.

use napi_derive::napi;
use serde::Deserialize;

use crate::config::NavConfig;
use crate::navigator::Navigator;
use crate::page::StaticPage;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOffset {
    pub id: String,
    /// Distance from the viewport top, as `getBoundingClientRect().top` reports it.
    pub top: f64,
}

fn to_napi(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse `html`, inject the navigation menu, and return the serialized page.
#[napi]
pub fn render_navigation_native(html: String, config_json: String) -> napi::Result<String> {
    let config = NavConfig::from_json(&config_json).map_err(to_napi)?;
    let mut page = StaticPage::parse(&html).map_err(to_napi)?;
    Navigator::install(&mut page, config).map_err(to_napi)?;
    page.to_html().map_err(to_napi)
}

/// Ids of the offsets that fall inside the configured activation band, in input order.
#[napi]
pub fn active_sections_native(offsets_json: String, config_json: String) -> napi::Result<Vec<String>> {
    let config = NavConfig::from_json(&config_json).map_err(to_napi)?;
    let offsets: Vec<SectionOffset> = serde_json::from_str(&offsets_json).map_err(to_napi)?;

    Ok(offsets
        .into_iter()
        .filter(|offset| config.band.contains_top(offset.top))
        .map(|offset| offset.id)
        .collect())
}
