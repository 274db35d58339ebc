use crate::{api::StorefrontClient, routes::MainRoute};
use shared::models::PasswordResetRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let email = use_state(String::new);
    let sent = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let sent = sent.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            loading.set(true);
            error.set(None);
            let request = PasswordResetRequest {
                email: email.trim().to_string(),
            };
            let sent = sent.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client.request_password_reset(&request).await {
                    Ok(()) => sent.set(true),
                    Err(_) => error.set(Some(
                        "Something went wrong. Please try again later.".to_string(),
                    )),
                }
                loading.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let body = if *sent {
        // Deliberately the same wording whether or not the address exists.
        html! {
            <>
                <div class="alert alert-success">
                    <span>{"If an account exists for that address, a reset link is on its way."}</span>
                </div>
                <div class="text-sm text-center mt-4">
                    <Link<MainRoute> to={MainRoute::Login} classes="link link-hover">
                        {"Back to sign in"}
                    </Link<MainRoute>>
                </div>
            </>
        }
    } else {
        let is_busy = *loading;
        let disable_submit = (*email).is_empty() || is_busy;
        html! {
            <>
                if let Some(message) = &*error {
                    <div class="alert alert-error">
                        <span>{message.clone()}</span>
                    </div>
                }
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">{"Email"}</span>
                    </label>
                    <input
                        id="email"
                        class="input input-bordered"
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email_change}
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        {if is_busy { "Sending..." } else { "Send reset link" }}
                    </button>
                </div>
                <div class="text-sm text-center mt-2">
                    <Link<MainRoute> to={MainRoute::Login} classes="link link-hover">
                        {"Back to sign in"}
                    </Link<MainRoute>>
                </div>
            </>
        }
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Reset your password"}</h2>
                    { body }
                </form>
            </div>
        </div>
    }
}
