//! Highlighting scenarios: band boundaries, idempotence, reset-then-set.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::config::NavConfig;
    use crate::error::NavError;
    use crate::highlight::{highlight, ActivationBand};
    use crate::host::{PageHost, RawSection, ScrollBehavior};
    use crate::menu::NavEntry;
    use crate::navigator::{Navigator, ScrollResponse};
    use crate::page::StaticPage;
    use crate::registry::SectionRegistry;
    use crate::scheduler::SchedulePolicy;
    use proptest::prelude::*;

    const PAGE: &str = r#"<html><body>
<nav class="navbar__menu"><ul id="main-nav-list"></ul></nav>
<section id="intro" data-nav="Introduction"></section>
<section id="contact" data-nav="Contact"></section>
</body></html>"#;

    const ACTIVE: &str = "background-color: rgba(255,255,0,.3);";
    const INACTIVE: &str = "background-color: rgba(255,255,255,.1);";

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Class(String, bool),
        Style(String, String),
    }

    /// Host with fixed viewport offsets that records every mutation.
    #[derive(Default)]
    struct RecordingHost {
        tops: HashMap<String, f64>,
        ops: Vec<Op>,
    }

    impl PageHost for RecordingHost {
        fn section_elements(&self, _tag: &str, _label_attribute: &str) -> Vec<RawSection> {
            Vec::new()
        }

        fn replace_menu(&mut self, _: &str, _: &[NavEntry], _: &str) -> Result<(), NavError> {
            Ok(())
        }

        fn viewport_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn offset_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn set_class(&mut self, id: &str, _class: &str, present: bool) {
            self.ops.push(Op::Class(id.to_string(), present));
        }

        fn set_inline_style(&mut self, id: &str, css: &str) {
            self.ops.push(Op::Style(id.to_string(), css.to_string()));
        }

        fn scroll_to(&mut self, _top: f64, _behavior: ScrollBehavior) {}
    }

    fn page_at(intro: f64, contact: f64) -> (StaticPage, Navigator) {
        let mut page = StaticPage::parse(PAGE)
            .unwrap()
            .with_offsets([("intro", intro), ("contact", contact)]);
        let navigator = Navigator::install(&mut page, NavConfig::default()).unwrap();
        (page, navigator)
    }

    fn highlighted(response: ScrollResponse) -> crate::highlight::ActiveSet {
        match response {
            ScrollResponse::Highlighted(set) => set,
            other => panic!("expected a highlight pass, got {:?}", other),
        }
    }

    #[test]
    fn test_intro_active_contact_inactive() {
        let (mut page, mut navigator) = page_at(0.0, 400.0);
        let set = highlighted(navigator.on_scroll(&mut page));

        assert_eq!(set.active_ids(), vec!["intro"]);
        assert!(page.has_class("intro", "active-section"));
        assert_eq!(page.attribute("intro", "style").unwrap(), ACTIVE);
        assert!(!page.has_class("contact", "active-section"));
        assert_eq!(page.attribute("contact", "style").unwrap(), INACTIVE);
    }

    #[test]
    fn test_boundary_offsets() {
        let registry = SectionRegistry::from_raw(vec![
            RawSection::new("at-upper", "Upper"),
            RawSection::new("at-lower", "Lower"),
            RawSection::new("below-lower", "Below"),
        ]);
        let mut host = RecordingHost::default();
        host.tops.insert("at-upper".to_string(), 150.0);
        host.tops.insert("at-lower".to_string(), -150.0);
        host.tops.insert("below-lower".to_string(), -151.0);

        let set = highlight(&registry, &NavConfig::default(), &mut host);
        assert!(!set.is_active("at-upper"));
        assert!(set.is_active("at-lower"));
        assert!(!set.is_active("below-lower"));
    }

    #[test]
    fn test_reset_pass_precedes_set_pass() {
        let registry = SectionRegistry::from_raw(vec![
            RawSection::new("a", "A"),
            RawSection::new("b", "B"),
        ]);
        let mut host = RecordingHost::default();
        host.tops.insert("a".to_string(), 10.0);
        host.tops.insert("b".to_string(), 20.0);

        highlight(&registry, &NavConfig::default(), &mut host);

        assert_eq!(
            host.ops,
            vec![
                Op::Class("a".to_string(), false),
                Op::Style("a".to_string(), INACTIVE.to_string()),
                Op::Class("b".to_string(), false),
                Op::Style("b".to_string(), INACTIVE.to_string()),
                Op::Class("a".to_string(), true),
                Op::Style("a".to_string(), ACTIVE.to_string()),
                Op::Class("b".to_string(), true),
                Op::Style("b".to_string(), ACTIVE.to_string()),
            ]
        );
    }

    #[test]
    fn test_multiple_sections_may_be_active() {
        let (mut page, navigator) = page_at(-100.0, 100.0);
        let set = navigator.refresh(&mut page);
        assert_eq!(set.active_ids(), vec!["intro", "contact"]);
    }

    #[test]
    fn test_pass_is_idempotent() {
        let (mut page, navigator) = page_at(0.0, 400.0);
        page.viewport_mut().set_scroll_y(120.0);

        let first = navigator.refresh(&mut page);
        let html_first = page.to_html().unwrap();
        let second = navigator.refresh(&mut page);

        assert_eq!(first, second);
        assert_eq!(page.to_html().unwrap(), html_first);
    }

    #[test]
    fn test_no_stale_flag_after_scrolling_away() {
        let (mut page, navigator) = page_at(0.0, 400.0);
        navigator.refresh(&mut page);
        assert!(page.has_class("intro", "active-section"));

        page.viewport_mut().set_scroll_y(400.0);
        let set = navigator.refresh(&mut page);

        assert_eq!(set.active_ids(), vec!["contact"]);
        assert!(!page.has_class("intro", "active-section"));
        assert_eq!(page.attribute("intro", "style").unwrap(), INACTIVE);
        assert!(page.has_class("contact", "active-section"));
    }

    #[test]
    fn test_section_without_geometry_stays_inactive() {
        let mut page = StaticPage::parse(PAGE).unwrap().with_offsets([("intro", 0.0)]);
        let navigator = Navigator::install(&mut page, NavConfig::default()).unwrap();
        let set = navigator.refresh(&mut page);
        assert_eq!(set.len(), 2);
        assert_eq!(set.active_ids(), vec!["intro"]);
        assert_eq!(page.attribute("contact", "style").unwrap(), INACTIVE);
    }

    #[test]
    fn test_animation_frame_policy_coalesces_passes() {
        let mut page = StaticPage::parse(PAGE)
            .unwrap()
            .with_offsets([("intro", 0.0), ("contact", 400.0)]);
        let config = NavConfig {
            schedule: SchedulePolicy::AnimationFrame,
            ..NavConfig::default()
        };
        let mut navigator = Navigator::install(&mut page, config).unwrap();

        assert_eq!(navigator.on_scroll(&mut page), ScrollResponse::FrameRequested);
        page.viewport_mut().set_scroll_y(350.0);
        assert_eq!(navigator.on_scroll(&mut page), ScrollResponse::Coalesced);
        // Nothing touched until the frame.
        assert!(page.attribute("intro", "style").is_none());

        let set = navigator.on_frame(&mut page).unwrap();
        assert_eq!(set.active_ids(), vec!["contact"]);
        assert!(navigator.on_frame(&mut page).is_none());
    }

    #[test]
    fn test_custom_band_from_config() {
        let mut page = StaticPage::parse(PAGE)
            .unwrap()
            .with_offsets([("intro", 0.0), ("contact", 40.0)]);
        let config = NavConfig {
            band: ActivationBand { lower: 0, upper: 40 },
            ..NavConfig::default()
        };
        let navigator = Navigator::install(&mut page, config).unwrap();
        assert_eq!(navigator.refresh(&mut page).active_ids(), vec!["intro"]);
    }

    proptest! {
        #[test]
        fn prop_active_iff_floored_offset_in_band(top in -1000.0f64..1000.0) {
            let registry = SectionRegistry::from_raw(vec![RawSection::new("s", "S")]);
            let mut host = RecordingHost::default();
            host.tops.insert("s".to_string(), top);

            let set = highlight(&registry, &NavConfig::default(), &mut host);
            let floored = top.floor();
            prop_assert_eq!(set.is_active("s"), floored >= -150.0 && floored < 150.0);
        }
    }
}
