//! Filter Controller
//!
//! Owns the page bindings and the debounce slot. Every UI event is a
//! discrete call; each pass reads the controls, mirrors them into the
//! URL fragment and updates row / group visibility.

use std::time::Duration;

use crate::debounce::{DebounceSlot, DebounceState, DebounceTicket};
use crate::fragment::{encode, FragmentParams};
use crate::page::{ChangeGroup, FilterControls, FilterItem, ListingPage, Scheduler, UrlFragment};
use crate::state::FilterState;

/// Quiet interval after the last search keystroke
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    pub search_debounce: Duration,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

/// Aggregates recomputed by one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Site rows left visible
    pub visible_rows: usize,
    /// Change items shown across all groups
    pub shown_changes: usize,
    /// Groups with at least one shown item
    pub visible_groups: usize,
}

impl PassSummary {
    /// Whether the global "no changes" indicator is shown
    pub fn changes_empty(&self) -> bool {
        self.shown_changes == 0
    }
}

pub struct FilterController<P, C, U, S: Scheduler> {
    page: P,
    controls: C,
    /// None when there is no URL at all; filtering still works
    fragment: Option<U>,
    scheduler: S,
    options: FilterOptions,
    debounce: DebounceSlot<S::Handle>,
}

impl<P, C, U, S> FilterController<P, C, U, S>
where
    P: ListingPage,
    C: FilterControls,
    U: UrlFragment,
    S: Scheduler,
{
    pub fn new(page: P, controls: C, fragment: Option<U>, scheduler: S, options: FilterOptions) -> Self {
        Self {
            page,
            controls,
            fragment,
            scheduler,
            options,
            debounce: DebounceSlot::new(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn options(&self) -> FilterOptions {
        self.options
    }

    pub fn debounce_state(&self) -> DebounceState {
        self.debounce.state()
    }

    /// Mirror the controls into the fragment and recompute visibility
    pub fn apply_filters(&self) -> PassSummary {
        let state = self.controls.read();

        if let Some(fragment) = self.fragment.as_ref().filter(|f| f.can_replace()) {
            let encoded = encode(&state);
            log::debug!("[Filter] fragment {}", encoded);
            if let Err(e) = fragment.replace(&encoded) {
                log::warn!("[Filter] Failed to update URL fragment: {}", e);
            }
        }

        let visible_rows = self.filter_rows(&state);
        let (shown_changes, visible_groups) = self.filter_changes(&state);

        let summary = PassSummary {
            visible_rows,
            shown_changes,
            visible_groups,
        };
        log::debug!(
            "[Filter] {} rows visible, {} changes in {} groups",
            summary.visible_rows,
            summary.shown_changes,
            summary.visible_groups
        );
        summary
    }

    fn filter_rows(&self, state: &FilterState) -> usize {
        let mut visible = 0;
        for row in self.page.site_rows() {
            let admitted = state.admits_row(&row);
            row.set_visible(admitted);
            if admitted {
                visible += 1;
            }
        }
        self.page.set_visible_count(visible);
        visible
    }

    fn filter_changes(&self, state: &FilterState) -> (usize, usize) {
        let mut total_shown = 0;
        let mut visible_groups = 0;
        for group in self.page.change_groups() {
            let mut shown = 0;
            for item in group.items() {
                let admitted = state.admits_change(&item);
                item.set_visible(admitted);
                if admitted {
                    shown += 1;
                }
            }
            group.set_visible(shown > 0);
            if shown > 0 {
                visible_groups += 1;
            }
            total_shown += shown;
        }
        self.page.set_changes_empty(total_shown == 0);
        (total_shown, visible_groups)
    }

    /// Load-time restore. Does nothing when the fragment is empty.
    ///
    /// Any other fragment, even one with no usable keys, resets the
    /// controls to what it encodes and runs one pass.
    pub fn restore_from_fragment(&self) -> Option<PassSummary> {
        let raw = self.fragment.as_ref()?.read();
        let body = raw.strip_prefix('#').unwrap_or(&raw);
        if body.is_empty() {
            return None;
        }

        let state = FragmentParams::parse(body).to_state();
        log::debug!("[Filter] Restoring {:?} from {}", state, raw);
        self.controls.write(&state);
        Some(self.apply_filters())
    }

    pub fn on_toggle_change(&self) -> PassSummary {
        self.apply_filters()
    }

    pub fn on_category_change(&self) -> PassSummary {
        self.apply_filters()
    }

    /// Restart the quiet window; the pass runs when the newest timer fires
    pub fn on_search_keystroke(&mut self) {
        if !self.controls.has_search() {
            return;
        }
        let ticket = self.debounce.next();
        let handle = self.scheduler.schedule(self.options.search_debounce, ticket);
        self.debounce.arm(ticket, handle);
        log::trace!("[Filter] Search debounce armed, ticket {}", ticket.id());
    }

    /// Timer callback. Stale tickets are ignored.
    pub fn on_debounce_elapsed(&mut self, ticket: DebounceTicket) -> Option<PassSummary> {
        if !self.debounce.complete(ticket) {
            log::trace!("[Filter] Ignoring stale debounce ticket {}", ticket.id());
            return None;
        }
        Some(self.apply_filters())
    }
}
