//! In-memory page
//!
//! An HTML document parsed with html5ever into an `RcDom`, paired with an
//! explicit layout table and a simulated viewport. This is the host used for
//! pre-rendering menus and for exercising the navigation components without a
//! browser.
//!
//! ## Key Invariants
//!
//! 1. **Layout is supplied, never computed**: section tops come from
//!    [`StaticPage::set_offset_top`]. An element without an entry has no
//!    geometry and is never active.
//! 2. **Ids resolve to the first element**: lookups go through an index built
//!    at parse time and rebuilt whenever the menu container is replaced.
//! 3. **Single thread**: the DOM is built on `Rc` handles, so a page cannot
//!    leave the thread that created it.

use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::NavError;
use crate::host::{PageHost, RawSection, ScrollBehavior};
use crate::menu::NavEntry;
use crate::viewport::Viewport;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

pub struct StaticPage {
    dom: RcDom,
    ids: HashMap<String, Handle>,
    offsets: HashMap<String, f64>,
    viewport: Viewport,
}

impl StaticPage {
    pub fn parse(html: &str) -> Result<Self, NavError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(NavError::Parse)?;

        let ids = index_ids(&dom.document);
        Ok(Self {
            dom,
            ids,
            offsets: HashMap::new(),
            viewport: Viewport::default(),
        })
    }

    /// Record the document-absolute top edge of the element with `id`.
    pub fn set_offset_top(&mut self, id: &str, top: f64) {
        self.offsets.insert(id.to_string(), top);
    }

    pub fn with_offsets<'a>(mut self, offsets: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        for (id, top) in offsets {
            self.set_offset_top(id, top);
        }
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn find_by_id(&self, id: &str) -> Option<Handle> {
        self.ids.get(id).cloned()
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.find_by_id(id).and_then(|handle| attribute(&handle, name))
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.attribute(id, "class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// `(href, text)` of every link inside the element with `container_id`.
    pub fn links(&self, container_id: &str) -> Vec<(String, String)> {
        let Some(container) = self.find_by_id(container_id) else {
            return Vec::new();
        };
        let mut links = Vec::new();
        collect_elements(&container, "a", &mut links);
        links
            .iter()
            .map(|a| (attribute(a, "href").unwrap_or_default(), text_content(a)))
            .collect()
    }

    pub fn inner_html(&self, id: &str) -> Result<Option<String>, NavError> {
        match self.find_by_id(id) {
            Some(handle) => serialize_children(&handle).map(Some),
            None => Ok(None),
        }
    }

    pub fn to_html(&self) -> Result<String, NavError> {
        serialize_children(&self.dom.document)
    }
}

impl PageHost for StaticPage {
    fn section_elements(&self, tag: &str, label_attribute: &str) -> Vec<RawSection> {
        let mut elements = Vec::new();
        collect_elements(&self.dom.document, tag, &mut elements);
        elements
            .iter()
            .map(|handle| RawSection {
                id: attribute(handle, "id"),
                label: attribute(handle, label_attribute),
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
            .find_by_id(container_id)
            .ok_or_else(|| NavError::MissingContainer(container_id.to_string()))?;

        for child in container.children.borrow_mut().drain(..) {
            child.parent.set(None);
        }

        for entry in entries {
            let li = new_element("li", &[]);
            let a = new_element("a", &[("class", link_class), ("href", &entry.href())]);
            append(&a, new_text(&entry.label));
            append(&li, a);
            append(&container, li);
        }

        // The old children may have carried ids.
        self.ids = index_ids(&self.dom.document);
        Ok(())
    }

    fn viewport_top(&self, id: &str) -> Option<f64> {
        self.offset_top(id).map(|top| top - self.viewport.scroll_y())
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.offsets.get(id).copied()
    }

    fn set_class(&mut self, id: &str, class: &str, present: bool) {
        let Some(handle) = self.find_by_id(id) else {
            return;
        };
        let current = attribute(&handle, "class").unwrap_or_default();
        let mut classes: Vec<&str> = current
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect();
        if present {
            classes.push(class);
        }
        set_attribute(&handle, "class", &classes.join(" "));
    }

    fn set_inline_style(&mut self, id: &str, css: &str) {
        if let Some(handle) = self.find_by_id(id) {
            set_attribute(&handle, "style", css);
        }
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.viewport.scroll_to(top, behavior);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DOM HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local))
}

fn attr_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(""), LocalName::from(local))
}

fn new_element(tag: &str, attrs: &[(&str, &str)]) -> Handle {
    let attrs = attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: attr_name(name),
            value: StrTendril::from(*value),
        })
        .collect();

    Node::new(NodeData::Element {
        name: html_name(tag),
        attrs: RefCell::new(attrs),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

fn new_text(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from(text)),
    })
}

fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

fn is_element(handle: &Handle, tag: &str) -> bool {
    match &handle.data {
        NodeData::Element { name, .. } => (*name.local).eq_ignore_ascii_case(tag),
        _ => false,
    }
}

fn attribute(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn set_attribute(handle: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &handle.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|attr| &*attr.name.local == name) {
            Some(attr) => attr.value = StrTendril::from(value),
            None => attrs.push(Attribute {
                name: attr_name(name),
                value: StrTendril::from(value),
            }),
        }
    }
}

/// Map every element id to its first holder in document order.
fn index_ids(root: &Handle) -> HashMap<String, Handle> {
    let mut ids = HashMap::new();
    collect_ids(root, &mut ids);
    ids
}

fn collect_ids(handle: &Handle, ids: &mut HashMap<String, Handle>) {
    for child in handle.children.borrow().iter() {
        if let Some(id) = attribute(child, "id") {
            ids.entry(id).or_insert_with(|| child.clone());
        }
        collect_ids(child, ids);
    }
}

fn collect_elements(handle: &Handle, tag: &str, out: &mut Vec<Handle>) {
    for child in handle.children.borrow().iter() {
        if is_element(child, tag) {
            out.push(child.clone());
        }
        collect_elements(child, tag, out);
    }
}

fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { .. } => text.push_str(&text_content(child)),
            _ => {}
        }
    }
    text
}

fn serialize_children(handle: &Handle) -> Result<String, NavError> {
    let mut out = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut out, &SerializableHandle::from(handle.clone()), opts)
        .map_err(NavError::Serialize)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
