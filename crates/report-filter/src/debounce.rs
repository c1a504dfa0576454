//! Single-slot debounce
//!
//! Holds at most one armed timer handle. Arming drops (cancels) the
//! previous handle and issues a new ticket; only the current ticket
//! may complete.

/// Identifies one armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

impl DebounceTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// No evaluation pending
    Idle,
    /// A timer is armed
    PendingEvaluation,
}

pub(crate) struct DebounceSlot<H> {
    next_ticket: u64,
    pending: Option<(DebounceTicket, H)>,
}

impl<H> DebounceSlot<H> {
    pub(crate) fn new() -> Self {
        Self {
            next_ticket: 0,
            pending: None,
        }
    }

    pub(crate) fn state(&self) -> DebounceState {
        if self.pending.is_some() {
            DebounceState::PendingEvaluation
        } else {
            DebounceState::Idle
        }
    }

    /// Reserve the ticket for the next timer and cancel the current one
    pub(crate) fn next(&mut self) -> DebounceTicket {
        self.pending = None;
        self.next_ticket += 1;
        DebounceTicket(self.next_ticket)
    }

    pub(crate) fn arm(&mut self, ticket: DebounceTicket, handle: H) {
        self.pending = Some((ticket, handle));
    }

    /// Consume the slot if `ticket` is the armed one
    pub(crate) fn complete(&mut self, ticket: DebounceTicket) -> bool {
        match &self.pending {
            Some((current, _)) if *current == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_rearm_cancels_previous_handle() {
        let mut slot = DebounceSlot::new();
        let first_dropped = Rc::new(Cell::new(false));

        let first = slot.next();
        slot.arm(first, DropFlag(first_dropped.clone()));
        assert_eq!(slot.state(), DebounceState::PendingEvaluation);

        let second = slot.next();
        assert!(first_dropped.get());
        slot.arm(second, DropFlag(Rc::new(Cell::new(false))));

        assert!(!slot.complete(first));
        assert_eq!(slot.state(), DebounceState::PendingEvaluation);
        assert!(slot.complete(second));
        assert_eq!(slot.state(), DebounceState::Idle);
    }

    #[test]
    fn test_complete_only_once() {
        let mut slot: DebounceSlot<()> = DebounceSlot::new();
        let ticket = slot.next();
        slot.arm(ticket, ());
        assert!(slot.complete(ticket));
        assert!(!slot.complete(ticket));
    }
}
