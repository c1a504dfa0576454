//! Filter State
//!
//! The three filter axes and the predicates evaluated against rows and
//! change items. An empty / false axis never constrains.

use crate::page::FilterItem;

/// Class carried by table rows with at least one tracked cookie
pub const RED_CLASS: &str = "red";

/// Active filter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Only show rows flagged red
    pub show_red_only: bool,
    /// Category token, empty = all categories
    pub category: String,
    /// Substring matched against the item's domain, empty = no text filter
    pub search: String,
}

impl FilterState {
    pub fn new(show_red_only: bool, category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            show_red_only,
            category: category.into(),
            search: search.into(),
        }
    }

    /// True when no axis constrains anything
    pub fn is_inert(&self) -> bool {
        !self.show_red_only && self.category.is_empty() && self.search.is_empty()
    }

    /// Row predicate: red flag, then category, then search
    pub fn admits_row<I: FilterItem + ?Sized>(&self, row: &I) -> bool {
        if self.show_red_only && !row.has_class(RED_CLASS) {
            return false;
        }
        self.admits_change(row)
    }

    /// Change-item predicate: category, then search. Change items have no red status.
    pub fn admits_change<I: FilterItem + ?Sized>(&self, item: &I) -> bool {
        if !self.category.is_empty() && !item.has_class(&self.category) {
            return false;
        }
        if !self.search.is_empty() {
            return match item.search_text() {
                Some(text) => text.contains(self.search.as_str()),
                None => false,
            };
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Probe {
        classes: Vec<&'static str>,
        domain: Option<&'static str>,
        visible: Cell<bool>,
    }

    impl Probe {
        fn new(classes: &[&'static str], domain: Option<&'static str>) -> Self {
            Self { classes: classes.to_vec(), domain, visible: Cell::new(true) }
        }
    }

    impl FilterItem for Probe {
        fn has_class(&self, class: &str) -> bool {
            self.classes.iter().any(|c| *c == class)
        }

        fn search_text(&self) -> Option<String> {
            self.domain.map(str::to_string)
        }

        fn set_visible(&self, visible: bool) {
            self.visible.set(visible);
        }
    }

    #[test]
    fn test_inert_state_admits_everything() {
        let state = FilterState::default();
        assert!(state.is_inert());
        assert!(state.admits_row(&Probe::new(&[], None)));
        assert!(state.admits_change(&Probe::new(&["news"], None)));
    }

    #[test]
    fn test_row_conjunction() {
        let row = Probe::new(&["site", "red", "tech"], Some("example.com"));

        // Category mismatch hides even with the red flag satisfied
        assert!(!FilterState::new(true, "finance", "").admits_row(&row));
        assert!(!FilterState::new(false, "tech", "zzz").admits_row(&row));
        assert!(FilterState::new(false, "tech", "example").admits_row(&row));
        assert!(FilterState::new(true, "tech", "example").admits_row(&row));
    }

    #[test]
    fn test_red_flag_requires_red_class() {
        let plain = Probe::new(&["site", "tech"], Some("example.com"));
        assert!(!FilterState::new(true, "", "").admits_row(&plain));
        assert!(FilterState::new(false, "", "").admits_row(&plain));
    }

    #[test]
    fn test_change_items_ignore_red_flag() {
        let item = Probe::new(&["news"], Some("delfi.lv"));
        let state = FilterState::new(true, "news", "delfi");
        assert!(state.admits_change(&item));
    }

    #[test]
    fn test_search_is_case_sensitive_substring() {
        let item = Probe::new(&[], Some("Example.com"));
        assert!(FilterState::new(false, "", "Exam").admits_change(&item));
        assert!(!FilterState::new(false, "", "exam").admits_change(&item));
    }

    #[test]
    fn test_missing_domain_fails_search() {
        let item = Probe::new(&["news"], None);
        assert!(!FilterState::new(false, "", "a").admits_change(&item));
        assert!(FilterState::new(false, "news", "").admits_change(&item));
    }
}
