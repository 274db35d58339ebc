use crate::{
    auth::session::{SessionState, use_session},
    components::{
        cart_badge::CartBadge, user_dropdown::UserDropdown, wishlist_badge::WishlistBadge,
    },
    routes::MainRoute,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();

    // The auth corner waits for the bootstrap instead of flashing a sign-in
    // button at a customer who is about to be recognized.
    let auth_corner = match session.state() {
        SessionState::Bootstrapping => html! {
            <span class="loading loading-spinner loading-sm" aria-label="Loading session"></span>
        },
        SessionState::Authenticated(user) => html! {
            <>
                <span class="text-sm text-base-content/80 mr-2">{ user.display_name().to_string() }</span>
                <UserDropdown />
            </>
        },
        SessionState::Anonymous => html! {
            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                {"Sign in"}
            </Link<MainRoute>>
        },
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"Rewired"}
                </Link<MainRoute>>
            </a>
            <ul class="hidden menu sm:menu-horizontal">
                <li>
                    <Link<MainRoute> to={MainRoute::Home}>{"Shop"}</Link<MainRoute>>
                </li>
            </ul>
            <div class="flex items-center gap-2">
                <WishlistBadge />
                <CartBadge />
                { auth_corner }
            </div>
        </nav>
    }
}
