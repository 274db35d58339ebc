//! Coupon entry on the cart page.
//!
//! Codes are normalized (trimmed, upper-cased) before they go out; a blank
//! entry never reaches the API. Applied codes the backend kept but could not
//! apply to the current lines are shown with a warning instead of silently
//! doing nothing.

use shared::models::ApplyCouponRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::api::StorefrontClient;
use crate::inflight::use_in_flight;
use crate::models::{cart_state, cart_state::CartStore};
use crate::notify;
use crate::validation::normalize_coupon;

#[function_component(CouponForm)]
pub fn coupon_form() -> Html {
    let (store, _) = use_store::<CartStore>();
    let draft = use_state(String::new);
    let flight = use_in_flight();

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let flight = flight.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(code) = normalize_coupon(&draft) else {
                return;
            };
            let Some(guard) = flight.try_begin() else {
                return;
            };
            let draft = draft.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client.apply_coupon(&ApplyCouponRequest { code }).await {
                    Ok(cart) => {
                        cart_state::adopt(cart);
                        draft.set(String::new());
                        notify::success("Coupon applied");
                    }
                    Err(err) => {
                        web_sys::console::warn_1(&format!("coupon apply failed: {err}").into());
                        notify::error("Could not apply that code");
                    }
                }
                drop(guard);
            });
        })
    };

    let applied = store.cart.as_ref().map_or_else(Vec::new, |cart| {
        cart.discount_codes
            .iter()
            .map(|discount| {
                let code = discount.code.clone();
                let remove = {
                    let code = code.clone();
                    Callback::from(move |_: MouseEvent| {
                        let code = code.clone();
                        spawn_local(async move {
                            let client = StorefrontClient::shared();
                            match client.remove_coupon(&code).await {
                                Ok(cart) => {
                                    cart_state::adopt(cart);
                                    notify::info("Coupon removed");
                                }
                                Err(err) => {
                                    web_sys::console::warn_1(
                                        &format!("coupon removal failed: {err}").into(),
                                    );
                                    notify::error("Could not remove that code");
                                }
                            }
                        });
                    })
                };
                html! {
                    <div key={code.clone()} class="badge badge-outline gap-1 p-3">
                        <span class="font-mono">{ code.clone() }</span>
                        {
                            if discount.applicable {
                                html! {}
                            } else {
                                html! {
                                    <span class="text-warning text-xs">{"(not applicable)"}</span>
                                }
                            }
                        }
                        <button class="ml-1" onclick={remove} aria-label="Remove coupon">
                            {"✕"}
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class="flex flex-col gap-2">
            <form class="join" {onsubmit}>
                <input
                    class="input input-bordered join-item flex-grow"
                    type="text"
                    placeholder="Coupon code"
                    value={(*draft).clone()}
                    {oninput}
                />
                <button
                    class="btn btn-outline join-item"
                    type="submit"
                    disabled={flight.is_busy()}
                >
                    { if flight.is_busy() { "Applying…" } else { "Apply" } }
                </button>
            </form>
            <div class="flex flex-wrap gap-2">
                { for applied.into_iter() }
            </div>
        </div>
    }
}
