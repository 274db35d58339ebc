use shared::models::UserRole;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::session::use_session;
use crate::components::verification_banner::VerificationBanner;
use crate::routes::{AdminRoute, MainRoute};

#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().unwrap();

    // The route view only renders this page for a signed-in customer.
    let Some(user) = session.user().cloned() else {
        return html! {};
    };

    let member_since = user.created_at.clone().map_or_else(
        || html! {},
        |created_at| html! {
            <p class="text-sm text-base-content/70">
                {"Member since "}{ created_at.to_html() }
            </p>
        },
    );

    let staff_link = if user.is_admin() {
        html! {
            <Link<AdminRoute> to={AdminRoute::Reviews} classes="btn btn-outline btn-sm">
                {"Open the back office"}
            </Link<AdminRoute>>
        }
    } else {
        html! {}
    };

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.sign_out();
            navigator.push(&MainRoute::Home);
        })
    };

    let role_badge = match user.role {
        UserRole::Customer => html! {},
        UserRole::Admin | UserRole::SuperAdmin => html! {
            <span class="badge badge-neutral">{ user.role.to_string() }</span>
        },
    };

    html! {
        <div class="flex flex-col gap-4 max-w-xl">
            <h1 class="text-2xl font-bold">{"Your account"}</h1>
            <VerificationBanner user={user.clone()} />
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-2">
                    <div class="flex items-center gap-2">
                        <h2 class="card-title">{ user.display_name().to_string() }</h2>
                        { role_badge }
                    </div>
                    <p>{ &user.email }</p>
                    {
                        user.phone.as_ref().map_or_else(
                            || html! {},
                            |phone| html! { <p>{ phone.clone() }</p> },
                        )
                    }
                    { member_since }
                    <div class="card-actions justify-between mt-4">
                        { staff_link }
                        <button class="btn btn-ghost btn-sm" onclick={on_sign_out}>
                            {"Sign out"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
