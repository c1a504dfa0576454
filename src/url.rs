//! URL Fragment Access
//!
//! Reads `location.hash` and replaces the current history entry so
//! filtering never adds back-button steps. Without the history API the
//! fragment is still read at load but never written.

use report_filter::{PageError, UrlFragment};
use web_sys::{History, Location, Window};

use crate::dom::js_error;

pub struct BrowserFragment {
    location: Location,
    history: Option<History>,
}

impl BrowserFragment {
    pub fn from_window(window: &Window) -> Self {
        let history = match window.history() {
            Ok(history) => Some(history),
            Err(e) => {
                log::warn!("[Url] History unavailable, filters won't be saved: {}", js_error(e));
                None
            }
        };
        Self {
            location: window.location(),
            history,
        }
    }
}

impl UrlFragment for BrowserFragment {
    fn read(&self) -> String {
        self.location.hash().unwrap_or_default()
    }

    fn can_replace(&self) -> bool {
        self.history.is_some()
    }

    fn replace(&self, fragment: &str) -> Result<(), PageError> {
        let Some(history) = &self.history else {
            return Ok(());
        };
        history
            .replace_state_with_url(&js_sys::Object::new(), "", Some(fragment))
            .map_err(js_error)
    }
}
