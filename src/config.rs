//! Navigation configuration.
//!
//! Every field defaults to the behaviour of the plain page script this crate
//! grew out of, so `{}` (or an empty string) is a complete configuration.

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::highlight::ActivationBand;
use crate::scheduler::SchedulePolicy;

pub const DEFAULT_MENU_CONTAINER_ID: &str = "main-nav-list";
pub const DEFAULT_SECTION_TAG: &str = "section";
pub const DEFAULT_LABEL_ATTRIBUTE: &str = "data-nav";
pub const DEFAULT_LINK_CLASS: &str = "nav-link";
pub const DEFAULT_ACTIVE_CLASS: &str = "active-section";
pub const DEFAULT_ACTIVE_STYLE: &str = "background-color: rgba(255,255,0,.3);";
pub const DEFAULT_INACTIVE_STYLE: &str = "background-color: rgba(255,255,255,.1);";
pub const DEFAULT_SCROLL_DURATION_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
    /// Id of the element that receives the generated `<li>` entries.
    pub menu_container_id: String,
    /// Tag name of the elements treated as sections.
    pub section_tag: String,
    /// Attribute holding a section's display label.
    pub label_attribute: String,
    /// Class set on every generated `<a>`.
    pub link_class: String,
    /// Class toggled on a section while it is inside the activation band.
    pub active_class: String,
    /// Inline style applied to active sections.
    pub active_style: String,
    /// Inline style applied to every section at the start of a pass.
    pub inactive_style: String,
    pub band: ActivationBand,
    pub schedule: SchedulePolicy,
    /// Length of the eased scroll animation on hosts that animate it themselves.
    pub scroll_duration_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            menu_container_id: DEFAULT_MENU_CONTAINER_ID.to_string(),
            section_tag: DEFAULT_SECTION_TAG.to_string(),
            label_attribute: DEFAULT_LABEL_ATTRIBUTE.to_string(),
            link_class: DEFAULT_LINK_CLASS.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            active_style: DEFAULT_ACTIVE_STYLE.to_string(),
            inactive_style: DEFAULT_INACTIVE_STYLE.to_string(),
            band: ActivationBand::default(),
            schedule: SchedulePolicy::default(),
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
        }
    }
}

impl NavConfig {
    /// Parse a camelCase JSON config. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NavError> {
        let required = [
            ("menuContainerId", &self.menu_container_id),
            ("sectionTag", &self.section_tag),
            ("labelAttribute", &self.label_attribute),
            ("activeClass", &self.active_class),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(NavError::InvalidConfig(format!("{} must not be empty", field)));
            }
        }

        if self.band.lower >= self.band.upper {
            return Err(NavError::InvalidConfig(format!(
                "activation band lower bound {} must be below upper bound {}",
                self.band.lower, self.band.upper
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_config_uses_defaults() {
        assert_eq!(NavConfig::from_json("").unwrap(), NavConfig::default());
        assert_eq!(NavConfig::from_json("{}").unwrap(), NavConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = NavConfig::from_json(
            r#"{ "menuContainerId": "toc", "schedule": "animationFrame", "band": { "lower": -50, "upper": 50 } }"#,
        )
        .unwrap();
        assert_eq!(config.menu_container_id, "toc");
        assert_eq!(config.schedule, SchedulePolicy::AnimationFrame);
        assert_eq!(config.band, ActivationBand { lower: -50, upper: 50 });
        assert_eq!(config.label_attribute, "data-nav");
        assert_eq!(config.scroll_duration_ms, 400);
    }

    #[test]
    fn test_partial_band_keeps_other_bound() {
        let config = NavConfig::from_json(r#"{ "band": { "lower": -50 } }"#).unwrap();
        assert_eq!(config.band, ActivationBand { lower: -50, upper: 150 });

        let config = NavConfig::from_json(r#"{ "band": { "upper": 80 } }"#).unwrap();
        assert_eq!(config.band, ActivationBand { lower: -150, upper: 80 });

        let config = NavConfig::from_json(r#"{ "band": {} }"#).unwrap();
        assert_eq!(config.band, ActivationBand::default());
    }

    #[test]
    fn test_inverted_band_rejected() {
        let err = NavConfig::from_json(r#"{ "band": { "lower": 10, "upper": 10 } }"#).unwrap_err();
        assert!(matches!(err, NavError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_container_id_rejected() {
        let err = NavConfig::from_json(r#"{ "menuContainerId": "  " }"#).unwrap_err();
        assert!(err.to_string().contains("menuContainerId"));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = NavConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
    }
}
