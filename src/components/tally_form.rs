use log::debug;
use yew::prelude::*;

use crate::config;
use crate::embed::tally::TallyLoader;

/// Contact form iframe. Tally fills it in once its embed script has run.
#[function_component(TallyForm)]
pub fn tally_form() -> Html {
    let loader = use_context::<TallyLoader>();

    // Runs on every mount, so coming back to the page re-renders the form.
    use_effect_with_deps(
        move |_| {
            if let Some(loader) = loader {
                let outcome = loader.ensure_loaded();
                debug!("Contact form mounted: {:?}, script {:?}", outcome, loader.state());
            }
            || ()
        },
        (),
    );

    html! {
        <iframe
            data-tally-src={config::TALLY_FORM_SRC}
            loading="lazy"
            width="100%"
            height="350"
            style="border: none; margin: 0;"
            title="BookedAI Contact Form"
        ></iframe>
    }
}
