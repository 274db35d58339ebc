use crate::{
    api::StorefrontClient,
    auth::{
        google::GoogleSignIn,
        session::{SessionHandle, use_session},
    },
    routes::{AdminRoute, LoginQuery, MainRoute},
};
use reqwest::StatusCode;
use shared::models::{AuthResponse, GoogleAuthRequest, LoginRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Where to land after signing in.
#[derive(Debug, Clone, PartialEq)]
enum Destination {
    Main(MainRoute),
    Admin(AdminRoute),
}

/// Resolve the `redirect` query parameter to a route we actually serve.
/// Anything unrecognized, and the auth pages themselves, fall back to Home.
fn post_login_destination(redirect: Option<&str>) -> Destination {
    let Some(path) = redirect else {
        return Destination::Main(MainRoute::Home);
    };
    if let Some(route) = AdminRoute::recognize(path) {
        if route != AdminRoute::NotFound {
            return Destination::Admin(route);
        }
    }
    MainRoute::recognize(path)
        .filter(|route| {
            !matches!(
                route,
                MainRoute::Login
                    | MainRoute::Register
                    | MainRoute::ForgotPassword
                    | MainRoute::NotFound
            )
        })
        .map_or(Destination::Main(MainRoute::Home), Destination::Main)
}

fn complete_sign_in(
    session: &SessionHandle,
    navigator: &Navigator,
    redirect: Option<&str>,
    response: AuthResponse,
) {
    session.sign_in(response);
    match post_login_destination(redirect) {
        Destination::Main(route) => navigator.push(&route),
        Destination::Admin(route) => navigator.push(&route),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let session = use_session();
    let navigator = use_navigator().unwrap();
    let redirect = use_location()
        .and_then(|location| location.query::<LoginQuery>().ok())
        .unwrap_or_default()
        .redirect;

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        let redirect = redirect.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                let request = LoginRequest {
                    email: email_value,
                    password: password_value,
                };
                match client.login(&request).await {
                    Ok(response) => {
                        complete_sign_in(&session, &navigator, redirect.as_deref(), response);
                    }
                    Err(err) => {
                        let message = err.status().map_or_else(
                            || "Unable to connect to server".to_string(),
                            |status| match status {
                                StatusCode::UNAUTHORIZED => "Invalid credentials".to_string(),
                                _ => format!("Login failed: {status}"),
                            },
                        );
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_google_credential = {
        let error_handle = error.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        let redirect = redirect.clone();
        Callback::from(move |credential: String| {
            let error_ref = error_handle.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                let request = GoogleAuthRequest { credential };
                match client.login_with_google(&request).await {
                    Ok(response) => {
                        complete_sign_in(&session, &navigator, redirect.as_deref(), response);
                    }
                    Err(_) => error_ref.set(Some("Google sign-in failed".to_string())),
                }
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

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
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
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <div class="divider">{"or"}</div>
                    <GoogleSignIn on_credential={on_google_credential} />
                    <div class="flex justify-between text-sm mt-2">
                        <Link<MainRoute> to={MainRoute::ForgotPassword} classes="link link-hover">
                            {"Forgot password?"}
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-hover">
                            {"Create an account"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_redirect_lands_on_home() {
        assert_eq!(
            post_login_destination(None),
            Destination::Main(MainRoute::Home)
        );
    }

    #[test]
    fn storefront_paths_are_honored() {
        assert_eq!(
            post_login_destination(Some("/cart")),
            Destination::Main(MainRoute::Cart)
        );
        assert_eq!(
            post_login_destination(Some("/products/iphone-12")),
            Destination::Main(MainRoute::Product {
                handle: "iphone-12".to_string()
            })
        );
    }

    #[test]
    fn back_office_paths_resolve_to_admin_routes() {
        assert_eq!(
            post_login_destination(Some("/admin")),
            Destination::Admin(AdminRoute::Reviews)
        );
        assert_eq!(
            post_login_destination(Some("/admin/media")),
            Destination::Admin(AdminRoute::Media)
        );
    }

    #[test]
    fn auth_pages_and_garbage_fall_back_to_home() {
        for path in ["/login", "/register", "/forgot-password", "/definitely-not-a-page"] {
            assert_eq!(
                post_login_destination(Some(path)),
                Destination::Main(MainRoute::Home),
                "{path} should fall back to home"
            );
        }
    }
}
