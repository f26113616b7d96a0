use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew_router::history::{self, History};

use super::controller::{HistoryPort, ScrollPort};

/// The page's session history, through the same history yew-router drives.
#[derive(Clone)]
pub struct BrowserHistory(history::BrowserHistory);

impl BrowserHistory {
    pub fn new() -> Self {
        Self(history::BrowserHistory::new())
    }
}

impl Default for BrowserHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryPort for BrowserHistory {
    fn pathname(&self) -> String {
        self.0.location().path().to_string()
    }

    fn push_path(&self, path: &str) {
        debug!("Pushing history entry {}", path);
        self.0.push(path.to_string());
    }

    fn back(&self) {
        debug!("Stepping back from {}", self.0.location().path());
        self.0.back();
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserScroller;

impl ScrollPort for BrowserScroller {
    fn scroll_to_anchor(&self, anchor: &str) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|document| document.get_element_by_id(anchor))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
