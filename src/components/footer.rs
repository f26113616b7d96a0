use yew::prelude::*;

use crate::navigation::controller::Page;
use crate::navigation::navigator::use_page_navigator;

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigator = use_page_navigator();
    let Some(navigator) = navigator else {
        return html! {};
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <span class="logo-mark inverted">{"B"}</span>
                        <span class="logo-text">{"BookedAI"}</span>
                    </div>
                    <h3>
                        {"The AI virtual receptionist for "}
                        <span class="accent">{"modern trades."}</span>
                    </h3>
                </div>

                <div class="footer-column">
                    <h4>{"Product"}</h4>
                    <ul>
                        <li><button onclick={navigator.to_anchor(Page::Home, "how-it-works")}>{"How it works"}</button></li>
                        <li><button onclick={navigator.to_anchor(Page::Home, "dashboard")}>{"Dashboard"}</button></li>
                        <li><button onclick={navigator.to_anchor(Page::Home, "pricing")}>{"Pricing"}</button></li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Support"}</h4>
                    <ul>
                        <li><button onclick={navigator.to_anchor(Page::Home, "onboarding")}>{"Contact Form"}</button></li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <div>{"© 2024 BookedAI. All rights reserved."}</div>
                <div class="footer-legal">
                    <a href="/service" onclick={navigator.to(Page::TermsOfService)}>{"Terms of Service"}</a>
                    <a href="/policy" onclick={navigator.to(Page::PrivacyPolicy)}>{"Privacy Policy"}</a>
                </div>
            </div>
        </footer>
    }
}
