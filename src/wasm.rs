//! Browser backend
//!
//! Installs navigation on the live `window`/`document`:
//!
//! ```javascript,ignore
//! import init, { installNavigation } from './page_nav_native.js';
//!
//! await init();
//! installNavigation(JSON.stringify({ schedule: 'animationFrame' }));
//! ```
//!
//! The page and navigator are shared by every listener through one
//! `Rc<RefCell<_>>`. Listeners run on the event loop one at a time, so the
//! borrow is never contended.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollToOptions, Window};

use crate::config::NavConfig;
use crate::error::NavError;
use crate::host::{LinkActivation, PageHost, RawSection, ScrollBehavior};
use crate::menu::NavEntry;
use crate::navigator::{Navigator, ScrollResponse};

fn host_error(value: JsValue) -> NavError {
    NavError::Host(format!("{:?}", value))
}

fn to_js(e: NavError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl PageHost for BrowserPage {
    fn section_elements(&self, tag: &str, label_attribute: &str) -> Vec<RawSection> {
        let Ok(nodes) = self.document.query_selector_all(tag) else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| RawSection {
                id: Some(el.id()).filter(|id| !id.is_empty()),
                label: el.get_attribute(label_attribute),
            })
            .collect()
    }

    fn replace_menu(
        &mut self,
        container_id: &str,
        entries: &[NavEntry],
        link_class: &str,
    ) -> Result<(), NavError> {
        let container = self
            .document
            .get_element_by_id(container_id)
            .ok_or_else(|| NavError::MissingContainer(container_id.to_string()))?;

        container.set_inner_html("");
        for entry in entries {
            let li = self.document.create_element("li").map_err(host_error)?;
            let a = self.document.create_element("a").map_err(host_error)?;
            a.set_class_name(link_class);
            a.set_attribute("href", &entry.href()).map_err(host_error)?;
            a.set_text_content(Some(&entry.label));
            li.append_child(&a).map_err(host_error)?;
            container.append_child(&li).map_err(host_error)?;
        }
        Ok(())
    }

    fn viewport_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top())
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.html_element(id).map(|el| f64::from(el.offset_top()))
    }

    fn set_class(&mut self, id: &str, class: &str, present: bool) {
        let Some(el) = self.document.get_element_by_id(id) else {
            return;
        };
        let list = el.class_list();
        let result = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if let Err(e) = result {
            tracing::warn!(id, class, error = ?e, "failed to toggle section class");
        }
    }

    fn set_inline_style(&mut self, id: &str, css: &str) {
        if let Some(el) = self.html_element(id) {
            el.style().set_css_text(css);
        }
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth { .. } => web_sys::ScrollBehavior::Smooth,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

struct DomActivation<'a>(&'a Event);

impl LinkActivation for DomActivation<'_> {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }
}

struct Installed {
    page: BrowserPage,
    navigator: Navigator,
}

/// Build the menu and attach the click, scroll and frame listeners.
#[wasm_bindgen(js_name = installNavigation)]
pub fn install_navigation(config_json: &str) -> Result<(), JsValue> {
    let config = NavConfig::from_json(config_json).map_err(to_js)?;
    let mut page = BrowserPage::from_window()
        .ok_or_else(|| JsValue::from_str("installNavigation needs a window with a document"))?;
    let navigator = Navigator::install(&mut page, config).map_err(to_js)?;

    let window = page.window.clone();
    let document = page.document.clone();
    let container_id = navigator.config().menu_container_id.clone();
    let state = Rc::new(RefCell::new(Installed { page, navigator }));

    attach_link_listeners(&document, &container_id, &state)?;
    attach_scroll_listener(&window, &state)?;
    Ok(())
}

fn attach_link_listeners(
    document: &Document,
    container_id: &str,
    state: &Rc<RefCell<Installed>>,
) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(container_id) else {
        return Ok(());
    };
    let links = container.query_selector_all("a")?;

    for link in (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
    {
        let state = Rc::clone(state);
        let target = link.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let href = target.get_attribute("href").unwrap_or_default();
            let mut installed = state.borrow_mut();
            let Installed { page, navigator } = &mut *installed;
            navigator.on_link_activated(page, &href, &mut DomActivation(&event));
        });
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn attach_scroll_listener(window: &Window, state: &Rc<RefCell<Installed>>) -> Result<(), JsValue> {
    let frame_state = Rc::clone(state);
    let on_frame = Closure::<dyn FnMut()>::new(move || {
        let mut installed = frame_state.borrow_mut();
        let Installed { page, navigator } = &mut *installed;
        navigator.on_frame(page);
    });
    let frame_callback: js_sys::Function = on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone();
    on_frame.forget();

    let scroll_state = Rc::clone(state);
    let frame_window = window.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let response = {
            let mut installed = scroll_state.borrow_mut();
            let Installed { page, navigator } = &mut *installed;
            navigator.on_scroll(page)
        };
        if response == ScrollResponse::FrameRequested {
            if let Err(e) = frame_window.request_animation_frame(&frame_callback) {
                tracing::warn!(error = ?e, "failed to request animation frame");
            }
        }
    });
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}
