use js_sys::{Function, Reflect};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlScriptElement};

use super::loader::{EmbedHost, ScriptEmbedLoader};
use crate::config;

pub type TallyLoader = ScriptEmbedLoader<TallyHost>;

/// Tally form widget: `embed.js` defines `window.Tally.loadEmbeds`, which turns
/// every `iframe[data-tally-src]` on the page into a live form.
pub struct TallyHost {
    script_id: &'static str,
    script_src: &'static str,
}

impl TallyHost {
    pub fn new() -> Self {
        Self {
            script_id: config::TALLY_SCRIPT_ID,
            script_src: config::TALLY_SCRIPT_SRC,
        }
    }

    fn attach_script(&self, on_load: Box<dyn FnOnce()>) -> Result<(), JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
        script.set_id(self.script_id);
        script.set_src(self.script_src);
        script.set_async(true);

        let onload = Closure::once_into_js(move || on_load());
        script.set_onload(Some(onload.unchecked_ref()));

        let src = self.script_src;
        let onerror = Closure::once_into_js(move || {
            warn!("Embed script {} failed to load", src);
        });
        script.set_onerror(Some(onerror.unchecked_ref()));

        body.append_child(&script)?;
        Ok(())
    }
}

impl EmbedHost for TallyHost {
    fn request_script(&self, on_load: Box<dyn FnOnce()>) {
        if let Err(err) = self.attach_script(on_load) {
            warn!("Could not attach {}: {:?}", self.script_src, err);
        }
    }

    fn render_embeds(&self) -> bool {
        let Some(window) = window() else {
            return false;
        };
        let Ok(tally) = Reflect::get(&window, &JsValue::from_str("Tally")) else {
            return false;
        };
        if !tally.is_object() {
            return false;
        }
        let Ok(load_embeds) = Reflect::get(&tally, &JsValue::from_str("loadEmbeds")) else {
            return false;
        };
        match load_embeds.dyn_into::<Function>() {
            Ok(load_embeds) => load_embeds.call0(&tally).is_ok(),
            Err(_) => false,
        }
    }
}
