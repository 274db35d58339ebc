use yew::{Callback, Html, function_component, html};
use yew_router::prelude::*;

use crate::auth::session::SessionProvider;
use crate::bus::{Topic, use_topic};
use crate::components::notices::Notices;
use crate::models::{cart_state, wishlist_state};
use crate::routes::{MainRoute, switch_main};

/// Refetches the shared cart and wishlist whenever the signed-in identity
/// changes: after the initial session resolution, after a sign-in and after a
/// sign-out. Exactly one copy lives under the provider.
#[function_component(StoreSync)]
fn store_sync() -> Html {
    use_topic(
        Topic::AuthStateChanged,
        Callback::from(|_| {
            cart_state::refresh();
            wishlist_state::refresh();
        }),
    );

    html! {}
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <StoreSync />
            <Notices />
            <BrowserRouter>
                <Switch<MainRoute> render={switch_main} />
            </BrowserRouter>
        </SessionProvider>
    }
}
