//! Debounce Timers
//!
//! Schedules controller callbacks with `setTimeout`. Dropping the
//! returned `Timeout` clears it.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use report_filter::{DebounceTicket, Scheduler};

use crate::app::WebController;

pub struct TimeoutScheduler {
    controller: Weak<RefCell<WebController>>,
}

impl TimeoutScheduler {
    pub fn new(controller: Weak<RefCell<WebController>>) -> Self {
        Self { controller }
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, ticket: DebounceTicket) -> Timeout {
        let controller = self.controller.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            if let Some(controller) = controller.upgrade() {
                controller.borrow_mut().on_debounce_elapsed(ticket);
            }
        })
    }
}
