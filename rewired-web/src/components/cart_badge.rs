use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::bus::{Topic, use_topic};
use crate::models::cart_state::CartStore;
use crate::routes::MainRoute;

const PULSE_MS: u32 = 800;

/// Header cart icon with the authoritative line count. Pulses briefly
/// whenever the shared cart changes, wherever the change came from.
#[function_component(CartBadge)]
pub fn cart_badge() -> Html {
    let (store, _) = use_store::<CartStore>();
    let pulsing = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pulsing = pulsing.clone();
        use_topic(
            Topic::CartUpdated,
            Callback::from(move |_| {
                pulsing.set(true);
                let pulsing = pulsing.clone();
                // Replacing the handle cancels the previous timer, so rapid
                // updates extend the pulse instead of cutting it short.
                *pending.borrow_mut() = Some(Timeout::new(PULSE_MS, move || pulsing.set(false)));
            }),
        );
    }

    let count = store.total_quantity();

    html! {
        <Link<MainRoute> to={MainRoute::Cart} classes="btn btn-ghost btn-circle">
            <div class={classes!("indicator", (*pulsing).then_some("animate-pulse"))}>
                <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} width="22" height="22" />
                {
                    if count > 0 {
                        html! { <span class="badge badge-sm badge-primary indicator-item">{ count }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </Link<MainRoute>>
    }
}
