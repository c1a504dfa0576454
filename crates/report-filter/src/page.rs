//! Page Interface
//!
//! Narrow traits the controller drives. The browser crate implements
//! them over DOM elements; tests implement them in memory.
//! Element handles mutate through `&self`, like DOM nodes do.

use std::time::Duration;

use crate::debounce::DebounceTicket;
use crate::state::FilterState;

/// A filterable element: a site row or a change-list entry
pub trait FilterItem {
    /// Whether the element carries the given class token
    fn has_class(&self, class: &str) -> bool;

    /// Text the search axis matches against (the item's domain)
    fn search_text(&self) -> Option<String>;

    fn set_visible(&self, visible: bool);
}

/// A container of change items, hidden when none of them is shown
pub trait ChangeGroup {
    type Item: FilterItem;

    fn items(&self) -> Vec<Self::Item>;

    fn set_visible(&self, visible: bool);
}

/// The listing: site table, change groups and their display targets.
///
/// A page without a site table returns no rows; a page without an
/// empty indicator ignores `set_changes_empty`.
pub trait ListingPage {
    type Row: FilterItem;
    type Group: ChangeGroup;

    fn site_rows(&self) -> Vec<Self::Row>;

    fn change_groups(&self) -> Vec<Self::Group>;

    fn set_visible_count(&self, count: usize);

    fn set_changes_empty(&self, empty: bool);
}

/// Filter control widgets.
///
/// Missing widgets read as inert and ignore writes.
pub trait FilterControls {
    fn read(&self) -> FilterState;

    fn write(&self, state: &FilterState);

    /// Whether a search input exists at all
    fn has_search(&self) -> bool;
}

/// Read / replace access to the URL fragment.
///
/// Reading only needs the location; replacing needs the history API,
/// which may be missing.
pub trait UrlFragment {
    /// Current fragment, including the leading `#` when present
    fn read(&self) -> String;

    /// Whether `replace` can persist anything
    fn can_replace(&self) -> bool {
        true
    }

    /// Replace the current history entry's fragment without navigating
    fn replace(&self, fragment: &str) -> Result<(), PageError>;
}

/// One-shot timers. Dropping a handle cancels the timer.
pub trait Scheduler {
    type Handle;

    /// Arm a timer that reports `ticket` back to the controller after `delay`
    fn schedule(&self, delay: Duration, ticket: DebounceTicket) -> Self::Handle;
}

/// Page binding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    MissingElement(String),
    WrongElementType(String),
    Js(String),
    Config(String),
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::MissingElement(msg) => write!(f, "Missing element: {}", msg),
            PageError::WrongElementType(msg) => write!(f, "Wrong element type: {}", msg),
            PageError::Js(msg) => write!(f, "JavaScript error: {}", msg),
            PageError::Config(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for PageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_display() {
        let err = PageError::MissingElement("#sites".to_string());
        assert_eq!(err.to_string(), "Missing element: #sites");
        let err = PageError::Js("SecurityError".to_string());
        assert_eq!(err.to_string(), "JavaScript error: SecurityError");
    }
}
