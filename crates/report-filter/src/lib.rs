//! Report Filter Core
//!
//! Platform-independent filtering for the cookie scan report page.
//! - state: filter axes and the row / change predicates
//! - fragment: `#show_red_only=1&category=..&search=..` codec
//! - page: narrow traits the controller drives (DOM, controls, URL, timers)
//! - controller: the filter controller and its debounced search trigger

mod state;
mod fragment;
mod page;
mod debounce;
mod controller;


pub use state::{FilterState, RED_CLASS};
pub use fragment::{encode, FragmentParams, CATEGORY_KEY, SEARCH_KEY, SHOW_RED_ONLY_KEY};
pub use page::{ChangeGroup, FilterControls, FilterItem, ListingPage, PageError, Scheduler, UrlFragment};
pub use debounce::{DebounceState, DebounceTicket};
pub use controller::{FilterController, FilterOptions, PassSummary, DEFAULT_SEARCH_DEBOUNCE};
