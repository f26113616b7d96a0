use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation::controller::Page;
use crate::navigation::navigator::use_page_navigator;

// Past the hero the bar gets a solid background.
const SCROLLED_THRESHOLD: f64 = 80.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_page_navigator();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_THRESHOLD;

    let Some(navigator) = navigator else {
        return html! {};
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every menu entry closes the mobile menu before navigating.
    let link = |target: Callback<MouseEvent>| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            target.emit(e);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="/" class="nav-logo" onclick={link(navigator.to(Page::Home))}>
                    <span class="logo-mark">{"B"}</span>
                    <span class="logo-text">{"BookedAI"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <a href="/#how-it-works" class="nav-link"
                        onclick={link(navigator.to_anchor(Page::Home, "how-it-works"))}>
                        {"How it works"}
                    </a>
                    <a href="/#dashboard" class="nav-link"
                        onclick={link(navigator.to_anchor(Page::Home, "dashboard"))}>
                        {"The Dashboard"}
                    </a>
                    <a href="/#pricing" class="nav-link"
                        onclick={link(navigator.to_anchor(Page::Home, "pricing"))}>
                        {"Pricing"}
                    </a>
                    <button class="nav-contact-button"
                        onclick={link(navigator.to_anchor(Page::Home, "onboarding"))}>
                        {"Contact"}
                    </button>
                    <button class="nav-buy-button"
                        onclick={link(navigator.to_anchor(Page::Home, "pricing"))}>
                        {"Buy Now"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
