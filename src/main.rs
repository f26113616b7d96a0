use log::{debug, info};
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod content;
mod navigation {
    pub mod browser;
    pub mod controller;
    pub mod navigator;
}
mod embed {
    pub mod loader;
    pub mod tally;
}
mod components {
    pub mod charts;
    pub mod footer;
    pub mod nav;
    pub mod tally_form;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod legal;
    pub mod pricing;
}

use components::{footer::Footer, nav::Navbar};
use embed::tally::{TallyHost, TallyLoader};
use navigation::browser::{BrowserHistory, BrowserScroller};
use navigation::controller::{NavigationController, NavigationOutcome, NavigationToken, Page};
use navigation::navigator::{NavigationRequest, Navigator};
use pages::{
    home::Home,
    legal::{PrivacyPolicy, TermsOfService},
};

type SiteNavigation = NavigationController<BrowserHistory, BrowserScroller>;

fn switch(page: Page) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Page::PrivacyPolicy => {
            info!("Rendering Privacy Policy page");
            html! { <PrivacyPolicy /> }
        }
        Page::TermsOfService => {
            info!("Rendering Terms of Service page");
            html! { <TermsOfService /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let controller = use_mut_ref(|| SiteNavigation::new(BrowserHistory::new(), BrowserScroller));
    let page = use_state(|| controller.borrow().current_page());
    // Token of the scroll that should run once the current render lands.
    let render_token = use_state(|| controller.borrow().pending_token());
    let tally = use_memo(|_| TallyLoader::new(TallyHost::new()), ());

    // Back/forward buttons
    {
        let controller = controller.clone();
        let page = page.setter();
        let render_token = render_token.setter();
        use_event_with_window("popstate", move |_: Event| {
            let (current, token) = {
                let mut controller = controller.borrow_mut();
                let token = controller.on_history_pop();
                (controller.current_page(), token)
            };
            page.set(current);
            render_token.set(Some(token));
        });
    }

    // Post-render: the new page's anchors exist now.
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |token: &Option<NavigationToken>| {
                if let Some(token) = *token {
                    let result = controller.borrow_mut().flush_pending_scroll(token);
                    debug!("Deferred scroll {:?}: {:?}", token, result);
                }
                || ()
            },
            *render_token,
        );
    }

    let navigator = {
        let controller = controller.clone();
        let page = page.setter();
        let render_token = render_token.setter();
        use_memo(
            move |_| {
                let go = {
                    let controller = controller.clone();
                    Callback::from(move |request: NavigationRequest| {
                        let outcome = controller
                            .borrow_mut()
                            .navigate(request.page, request.anchor.as_deref());
                        match outcome {
                            NavigationOutcome::Committed(token) => {
                                page.set(request.page);
                                render_token.set(Some(token));
                            }
                            NavigationOutcome::Scrolled(result) => {
                                debug!("Scrolled within {:?}: {:?}", request.page, result);
                            }
                        }
                    })
                };
                let back = Callback::from(move |_| controller.borrow().go_back());
                Navigator::new(go, back)
            },
            (),
        )
    };

    html! {
        <ContextProvider<Navigator> context={(*navigator).clone()}>
            <ContextProvider<TallyLoader> context={(*tally).clone()}>
                <div class="site">
                    <Navbar />
                    <main>
                        { switch(*page) }
                    </main>
                    <Footer />
                </div>
            </ContextProvider<TallyLoader>>
        </ContextProvider<Navigator>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting BookedAI site");
    yew::Renderer::<App>::new().render();
}
