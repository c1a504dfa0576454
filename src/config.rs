//! Page Configuration
//!
//! Element ids and selectors the filter binds to, plus the debounce
//! interval and log level. Pages may override any field with a JSON
//! `<script type="application/json" id="report-filter-config">` block.

use std::time::Duration;

use report_filter::{FilterOptions, PageError, DEFAULT_SEARCH_DEBOUNCE};
use serde::Deserialize;

/// Id of the optional JSON config element
pub const CONFIG_ELEMENT_ID: &str = "report-filter-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// "Show red only" checkbox
    pub show_red_only_id: String,
    /// Category select
    pub category_id: String,
    /// Search text input
    pub search_id: String,
    /// Site table container
    pub sites_id: String,
    /// Rows inside the site table
    pub row_selector: String,
    /// Visible row count output
    pub visible_count_id: String,
    /// Change-list containers
    pub group_selector: String,
    /// Items inside a change list
    pub change_item_selector: String,
    /// "No changes" indicator
    pub changes_empty_id: String,
    /// Attribute holding the searchable domain
    pub domain_attribute: String,
    pub search_debounce_ms: u64,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            show_red_only_id: "showRedOnly".to_string(),
            category_id: "category".to_string(),
            search_id: "search".to_string(),
            sites_id: "sites".to_string(),
            row_selector: "tr.site".to_string(),
            visible_count_id: "numVisible".to_string(),
            group_selector: ".changes".to_string(),
            change_item_selector: "li".to_string(),
            changes_empty_id: "changesEmpty".to_string(),
            domain_attribute: "data-domain".to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE.as_millis() as u64,
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        serde_json::from_str(json).map_err(|e| PageError::Config(e.to_string()))
    }

    /// Read the config element if present; fall back to defaults
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                log::error!("[Config] {}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            search_debounce: Duration::from_millis(self.search_debounce_ms),
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
