//! Filter Controls
//!
//! The toggle, category select and search input. Any of them may be
//! missing from a page; a missing control reads as inert.

use report_filter::{FilterControls, FilterState};
use web_sys::{Document, HtmlInputElement, HtmlSelectElement};

use crate::config::PageConfig;
use crate::dom::optional_element;

pub struct DomControls {
    pub show_red_only: Option<HtmlInputElement>,
    pub category: Option<HtmlSelectElement>,
    pub search: Option<HtmlInputElement>,
}

impl DomControls {
    pub fn bind(document: &Document, config: &PageConfig) -> Self {
        Self {
            show_red_only: optional_element(document, &config.show_red_only_id),
            category: optional_element(document, &config.category_id),
            search: optional_element(document, &config.search_id),
        }
    }
}

impl FilterControls for DomControls {
    fn read(&self) -> FilterState {
        FilterState {
            show_red_only: self.show_red_only.as_ref().map_or(false, |el| el.checked()),
            category: self.category.as_ref().map(|el| el.value()).unwrap_or_default(),
            search: self.search.as_ref().map(|el| el.value()).unwrap_or_default(),
        }
    }

    fn write(&self, state: &FilterState) {
        if let Some(el) = &self.show_red_only {
            el.set_checked(state.show_red_only);
        }
        if let Some(el) = &self.category {
            el.set_value(&state.category);
        }
        if let Some(el) = &self.search {
            el.set_value(&state.search);
        }
    }

    fn has_search(&self) -> bool {
        self.search.is_some()
    }
}
