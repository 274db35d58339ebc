use crate::{
    api::StorefrontClient,
    auth::session::use_session,
    routes::MainRoute,
    validation::{
        ValidationError, validate_confirm_password, validate_email, validate_name,
        validate_password,
    },
};
use reqwest::StatusCode;
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let name_error = use_state(|| None::<ValidationError>);
    let email_error = use_state(|| None::<ValidationError>);
    let password_error = use_state(|| None::<ValidationError>);
    let confirm_error = use_state(|| None::<ValidationError>);
    let server_error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let session = use_session();
    let navigator = use_navigator().unwrap();

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let name_error = name_error.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let confirm_error = confirm_error.clone();
        let server_error = server_error.clone();
        let loading = loading.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let name_check = validate_name(&name);
            let email_check = validate_email(&email);
            let password_check = validate_password(&password);
            let confirm_check = validate_confirm_password(&confirm_password, &password);
            name_error.set(name_check.clone().err());
            email_error.set(email_check.clone().err());
            password_error.set(password_check.clone().err());
            confirm_error.set(confirm_check.clone().err());
            if name_check.is_err()
                || email_check.is_err()
                || password_check.is_err()
                || confirm_check.is_err()
            {
                return;
            }

            loading.set(true);
            server_error.set(None);
            let request = RegisterRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let loading_ref = loading.clone();
            let server_error_ref = server_error.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client.register(&request).await {
                    Ok(response) => {
                        session.sign_in(response);
                        navigator.push(&MainRoute::Home);
                    }
                    Err(err) => {
                        let message = err.status().map_or_else(
                            || "Unable to connect to server".to_string(),
                            |status| match status {
                                StatusCode::CONFLICT => {
                                    "An account with this email already exists".to_string()
                                }
                                _ => format!("Registration failed: {status}"),
                            },
                        );
                        server_error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let text_input = |id: &'static str,
                      label: &'static str,
                      input_type: &'static str,
                      value: &UseStateHandle<String>,
                      error: &UseStateHandle<Option<ValidationError>>| {
        let handle = value.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        });
        html! {
            <div class="form-control">
                <label class="label" for={id}>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    {id}
                    class={classes!(
                        "input",
                        "input-bordered",
                        error.is_some().then_some("input-error")
                    )}
                    type={input_type}
                    value={(**value).clone()}
                    {oninput}
                />
                if let Some(error) = &**error {
                    <span class="label-text-alt text-error mt-1">{ error.message() }</span>
                }
            </div>
        }
    };

    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    if let Some(message) = &*server_error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    { text_input("name", "Name", "text", &name, &name_error) }
                    { text_input("email", "Email", "email", &email, &email_error) }
                    { text_input("password", "Password", "password", &password, &password_error) }
                    { text_input(
                        "confirm-password",
                        "Confirm password",
                        "password",
                        &confirm_password,
                        &confirm_error,
                    ) }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                    <div class="text-sm text-center mt-2">
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-hover">
                            {"Already have an account? Sign in"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
