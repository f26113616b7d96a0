use yew::prelude::*;

use crate::content::{self, LegalBlock, LegalDocument};
use crate::navigation::controller::Page;
use crate::navigation::navigator::use_page_navigator;

fn render_block(block: &LegalBlock) -> Html {
    match block {
        LegalBlock::Subheading(text) => html! { <h3 class="legal-subheading">{text}</h3> },
        LegalBlock::Text(text) => html! { <p class="legal-text">{text}</p> },
        LegalBlock::List(items) => html! {
            <ul class="legal-list">
                { for items.iter().map(|item| html! { <li>{item}</li> }) }
            </ul>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub page: Page,
    pub document: LegalDocument,
}

/// A legal document. Contents entries scroll within the page; entries whose
/// section is not published simply do nothing.
#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let navigator = use_page_navigator();
    let document = &props.document;
    let page = props.page;

    let back = navigator
        .as_ref()
        .map(|navigator| navigator.back_callback())
        .unwrap_or_else(Callback::noop);

    html! {
        <div class="legal-page">
            <div class="legal-card">
                <h1 class="legal-title">{&document.title}</h1>
                <p class="legal-updated">{&document.last_updated}</p>

                { for document.intro.iter().map(render_block) }

                if !document.contents.is_empty() {
                    <nav class="legal-contents">
                        <h2>{"TABLE OF CONTENTS"}</h2>
                        <ol>
                            { for document.contents.iter().map(|entry| {
                                let onclick = navigator
                                    .as_ref()
                                    .map(|navigator| navigator.to_anchor(page, entry.anchor.clone()))
                                    .unwrap_or_else(Callback::noop);
                                html! {
                                    <li key={entry.anchor.clone()}>
                                        <a href={format!("#{}", entry.anchor)} {onclick}>{&entry.label}</a>
                                    </li>
                                }
                            }) }
                        </ol>
                    </nav>
                }

                { for document.sections.iter().map(|section| html! {
                    <section id={section.anchor.clone()} key={section.anchor.clone()} class="legal-section">
                        <h2>{&section.heading}</h2>
                        { for section.blocks.iter().map(render_block) }
                    </section>
                }) }

                <div class="legal-footer">
                    <button class="back-button" onclick={back}>{"← Back to home"}</button>
                </div>
            </div>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! { <LegalPage page={Page::PrivacyPolicy} document={content::privacy_policy()} /> }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! { <LegalPage page={Page::TermsOfService} document={content::terms_of_service()} /> }
}
