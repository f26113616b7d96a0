use web_sys::MouseEvent;
use yew::prelude::*;

use super::controller::Page;

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationRequest {
    pub page: Page,
    pub anchor: Option<String>,
}

/// Handle the shell hands to every component that links somewhere.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    go: Callback<NavigationRequest>,
    back: Callback<()>,
}

impl Navigator {
    pub fn new(go: Callback<NavigationRequest>, back: Callback<()>) -> Self {
        Self { go, back }
    }

    pub fn go(&self, page: Page, anchor: Option<&str>) {
        self.go.emit(NavigationRequest {
            page,
            anchor: anchor.map(str::to_string),
        });
    }

    pub fn back(&self) {
        self.back.emit(());
    }

    pub fn to(&self, page: Page) -> Callback<MouseEvent> {
        let navigator = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.go(page, None);
        })
    }

    pub fn to_anchor(&self, page: Page, anchor: impl Into<String>) -> Callback<MouseEvent> {
        let navigator = self.clone();
        let anchor = anchor.into();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.go(page, Some(&anchor));
        })
    }

    pub fn back_callback(&self) -> Callback<MouseEvent> {
        let navigator = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.back();
        })
    }
}

#[hook]
pub fn use_page_navigator() -> Option<Navigator> {
    use_context::<Navigator>()
}
