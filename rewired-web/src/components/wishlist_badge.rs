use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::bus::{Topic, use_topic};
use crate::models::wishlist_state::WishlistStore;
use crate::routes::MainRoute;

const PULSE_MS: u32 = 800;

/// Header wishlist icon, counting saved products.
#[function_component(WishlistBadge)]
pub fn wishlist_badge() -> Html {
    let (store, _) = use_store::<WishlistStore>();
    let pulsing = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pulsing = pulsing.clone();
        use_topic(
            Topic::WishlistUpdated,
            Callback::from(move |_| {
                pulsing.set(true);
                let pulsing = pulsing.clone();
                *pending.borrow_mut() = Some(Timeout::new(PULSE_MS, move || pulsing.set(false)));
            }),
        );
    }

    let count = store.count();

    html! {
        <Link<MainRoute> to={MainRoute::Wishlist} classes="btn btn-ghost btn-circle">
            <div class={classes!("indicator", (*pulsing).then_some("animate-pulse"))}>
                <Icon icon_id={IconId::HeroiconsOutlineHeart} width="22" height="22" />
                {
                    if count > 0 {
                        html! { <span class="badge badge-sm badge-secondary indicator-item">{ count }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </Link<MainRoute>>
    }
}
