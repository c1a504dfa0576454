//! Report Filter Wiring
//!
//! Binds the controller to the page once it has loaded, routes DOM
//! events to controller calls and restores filters from the URL.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::document;
use report_filter::{FilterController, PageError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget};

use crate::config::PageConfig;
use crate::console;
use crate::controls::DomControls;
use crate::dom::{js_error, DomPage};
use crate::timer::TimeoutScheduler;
use crate::url::BrowserFragment;

pub type WebController = FilterController<DomPage, DomControls, BrowserFragment, TimeoutScheduler>;

/// Attach `handler` to `event` for the rest of the page session
fn listen(target: &EventTarget, event: &str, handler: impl FnMut() + 'static) -> Result<(), PageError> {
    let cb = Closure::<dyn FnMut()>::new(handler);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(js_error)?;
    cb.forget();
    Ok(())
}

/// Entry point: bind now if the page is loaded, otherwise on `load`
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let document = document();
    let config = PageConfig::load(&document);
    console::init(config.level_filter());

    if document.ready_state() == "complete" {
        run(&document, &config);
        return;
    }

    let loaded = document.clone();
    let mut config = Some(config);
    let result = listen(&window, "load", move || {
        if let Some(config) = config.take() {
            run(&loaded, &config);
        }
    });
    if let Err(e) = result {
        log::error!("[APP] Failed to wait for page load: {}", e);
    }
}

fn run(document: &Document, config: &PageConfig) {
    match bind(document, config) {
        Ok(controller) => {
            if controller.borrow().restore_from_fragment().is_none() {
                log::debug!("[APP] No filters in URL");
            }
        }
        Err(e) => log::error!("[APP] Failed to bind report filters: {}", e),
    }
}

/// Build the controller and route control events to it
pub fn bind(document: &Document, config: &PageConfig) -> Result<Rc<RefCell<WebController>>, PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::MissingElement("window".to_string()))?;
    let page = DomPage::bind(document, config);
    let controls = DomControls::bind(document, config);
    let fragment = Some(BrowserFragment::from_window(&window));
    let options = config.options();

    let controller = Rc::new_cyclic(|weak| {
        RefCell::new(FilterController::new(
            page,
            controls,
            fragment,
            TimeoutScheduler::new(weak.clone()),
            options,
        ))
    });

    let (toggle, category, search) = {
        let c = controller.borrow();
        let controls = c.controls();
        (controls.show_red_only.clone(), controls.category.clone(), controls.search.clone())
    };

    if let Some(toggle) = toggle {
        let c = controller.clone();
        listen(&toggle, "change", move || {
            c.borrow().on_toggle_change();
        })?;
    }
    if let Some(category) = category {
        let c = controller.clone();
        listen(&category, "change", move || {
            c.borrow().on_category_change();
        })?;
    }
    if let Some(search) = search {
        let c = controller.clone();
        listen(&search, "keyup", move || {
            c.borrow_mut().on_search_keystroke();
        })?;
    }

    log::info!("[APP] Report filters bound");
    Ok(controller)
}
