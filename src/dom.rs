//! DOM Page Binding
//!
//! Implements the listing traits over server-rendered report markup:
//! `tr.site` rows inside the site table and `li` items inside `.changes`
//! lists, each carrying category classes and a `data-domain` attribute.

use std::rc::Rc;

use report_filter::{ChangeGroup, FilterItem, ListingPage, PageError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::config::PageConfig;

pub fn js_error(err: JsValue) -> PageError {
    PageError::Js(format!("{:?}", err))
}

/// Look up an element by id and cast it to the expected type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType(format!("#{}", id)))
}

/// Optional targets: absence is normal, a wrong type is worth a warning
pub fn optional_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    match element_by_id(document, id) {
        Ok(el) => Some(el),
        Err(PageError::MissingElement(e)) => {
            log::debug!("[Dom] Not on this page: {}", e);
            None
        }
        Err(e) => {
            log::warn!("[Dom] {}", e);
            None
        }
    }
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn set_displayed(element: &HtmlElement, visible: bool) {
    let display = if visible { "" } else { "none" };
    if let Err(e) = element.style().set_property("display", display) {
        log::warn!("[Dom] Failed to set display: {}", js_error(e));
    }
}

/// A site row or change item
#[derive(Clone)]
pub struct DomItem {
    element: HtmlElement,
    domain_attribute: Rc<str>,
}

impl FilterItem for DomItem {
    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn search_text(&self) -> Option<String> {
        self.element.get_attribute(&self.domain_attribute)
    }

    fn set_visible(&self, visible: bool) {
        set_displayed(&self.element, visible);
    }
}

/// One `.changes` list
pub struct DomGroup {
    element: HtmlElement,
    item_selector: Rc<str>,
    domain_attribute: Rc<str>,
}

impl ChangeGroup for DomGroup {
    type Item = DomItem;

    fn items(&self) -> Vec<DomItem> {
        match self.element.query_selector_all(&self.item_selector) {
            Ok(list) => html_elements(list)
                .into_iter()
                .map(|element| DomItem {
                    element,
                    domain_attribute: self.domain_attribute.clone(),
                })
                .collect(),
            Err(e) => {
                log::warn!("[Dom] Change item query failed: {}", js_error(e));
                Vec::new()
            }
        }
    }

    fn set_visible(&self, visible: bool) {
        set_displayed(&self.element, visible);
    }
}

pub struct DomPage {
    document: Document,
    sites: Option<Element>,
    row_selector: String,
    group_selector: String,
    item_selector: Rc<str>,
    domain_attribute: Rc<str>,
    visible_count: Option<HtmlElement>,
    changes_empty: Option<HtmlElement>,
}

impl DomPage {
    pub fn bind(document: &Document, config: &PageConfig) -> Self {
        Self {
            document: document.clone(),
            sites: optional_element(document, &config.sites_id),
            row_selector: config.row_selector.clone(),
            group_selector: config.group_selector.clone(),
            item_selector: config.change_item_selector.as_str().into(),
            domain_attribute: config.domain_attribute.as_str().into(),
            visible_count: optional_element(document, &config.visible_count_id),
            changes_empty: optional_element(document, &config.changes_empty_id),
        }
    }

    fn query(&self, selector: &str) -> Result<Vec<HtmlElement>, PageError> {
        self.document
            .query_selector_all(selector)
            .map(html_elements)
            .map_err(js_error)
    }
}

impl ListingPage for DomPage {
    type Row = DomItem;
    type Group = DomGroup;

    fn site_rows(&self) -> Vec<DomItem> {
        let Some(sites) = &self.sites else {
            return Vec::new();
        };
        match sites.query_selector_all(&self.row_selector) {
            Ok(list) => html_elements(list)
                .into_iter()
                .map(|element| DomItem {
                    element,
                    domain_attribute: self.domain_attribute.clone(),
                })
                .collect(),
            Err(e) => {
                log::warn!("[Dom] Row query failed: {}", js_error(e));
                Vec::new()
            }
        }
    }

    fn change_groups(&self) -> Vec<DomGroup> {
        match self.query(&self.group_selector) {
            Ok(groups) => groups
                .into_iter()
                .map(|element| DomGroup {
                    element,
                    item_selector: self.item_selector.clone(),
                    domain_attribute: self.domain_attribute.clone(),
                })
                .collect(),
            Err(e) => {
                log::warn!("[Dom] Change group query failed: {}", e);
                Vec::new()
            }
        }
    }

    fn set_visible_count(&self, count: usize) {
        if let Some(el) = &self.visible_count {
            el.set_inner_text(&count.to_string());
        }
    }

    fn set_changes_empty(&self, empty: bool) {
        if let Some(el) = &self.changes_empty {
            set_displayed(el, empty);
        }
    }
}
