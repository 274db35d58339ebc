//! Google Identity Services button.
//!
//! The GIS script is loaded from `index.html`; this module only binds to the
//! globals it installs and renders the official button into a node we own.
//! The decoded credential is handed back as an opaque JWT string for the
//! server to verify.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Element, console};
use yew::prelude::*;

use crate::config::FrontendConfig;

#[wasm_bindgen]
extern "C" {
    /// `google.accounts.id.initialize(config)`
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn gis_initialize(config: &JsValue);

    /// `google.accounts.id.renderButton(parent, options)`
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn gis_render_button(parent: &Element, options: &JsValue);
}

/// True when `window.google.accounts.id` exists, meaning the GIS script has
/// finished loading.
fn gis_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let mut current: JsValue = window.into();
    for key in ["google", "accounts", "id"] {
        match Reflect::get(&current, &JsValue::from_str(key)) {
            Ok(next) if !next.is_undefined() && !next.is_null() => current = next,
            _ => return false,
        }
    }
    true
}

#[derive(Properties, PartialEq)]
pub struct GoogleSignInProps {
    /// Receives the credential JWT when Google completes a sign-in.
    pub on_credential: Callback<String>,
}

/// Renders the GIS button when a client id is configured, nothing otherwise.
#[function_component(GoogleSignIn)]
pub fn google_sign_in(props: &GoogleSignInProps) -> Html {
    let button_ref = use_node_ref();
    let client_id = FrontendConfig::new().google_client_id().map(str::to_owned);
    let configured = client_id.is_some();

    {
        let button_ref = button_ref.clone();
        let on_credential = props.on_credential.clone();
        use_effect_with(button_ref, move |button_ref| {
            // The callback closure has to outlive the effect body or GIS
            // would call into freed memory. It is dropped on unmount.
            let mut keepalive: Option<Closure<dyn FnMut(JsValue)>> = None;
            if let Some(client_id) = client_id {
                if !gis_loaded() {
                    console::warn_1(&"Google Identity Services script is not loaded".into());
                } else if let Some(target) = button_ref.cast::<Element>() {
                    let closure = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
                        let credential = Reflect::get(&response, &JsValue::from_str("credential"))
                            .ok()
                            .and_then(|value| value.as_string());
                        match credential {
                            Some(credential) => on_credential.emit(credential),
                            None => console::warn_1(
                                &"Google sign-in response carried no credential".into(),
                            ),
                        }
                    });

                    let config = Object::new();
                    let _ = Reflect::set(&config, &"client_id".into(), &client_id.as_str().into());
                    let _ = Reflect::set(&config, &"callback".into(), closure.as_ref());
                    gis_initialize(&config);

                    let options = Object::new();
                    let _ = Reflect::set(&options, &"theme".into(), &"outline".into());
                    let _ = Reflect::set(&options, &"size".into(), &"large".into());
                    gis_render_button(&target, &options);

                    keepalive = Some(closure);
                }
            }
            move || drop(keepalive)
        });
    }

    if !configured {
        return html! {};
    }

    html! {
        <div ref={button_ref} class="google-signin"></div>
    }
}
