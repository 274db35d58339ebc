use shared::models::{CartLine, UpdateCartLineRequest};
use wasm_bindgen_futures::spawn_local;
use yew::{
    Callback, Html, MouseEvent, UseStateHandle, function_component, html, use_effect_with,
    use_state,
};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::api::StorefrontClient;
use crate::components::coupon_form::CouponForm;
use crate::components::grade_badge::GradeBadge;
use crate::components::loading::Loading;
use crate::models::cart_state::{self, CartMutation, CartStore, plan_decrement};
use crate::notify;
use crate::routes::MainRoute;

fn cart_row(line: &CartLine, busy_line: &UseStateHandle<Option<String>>) -> Html {
    let any_busy = busy_line.is_some();

    let on_decrement = {
        let busy_line = busy_line.clone();
        let line_id = line.id.clone();
        let quantity = line.quantity;
        Callback::from(move |_: MouseEvent| {
            if busy_line.is_some() {
                return;
            }
            busy_line.set(Some(line_id.clone()));
            let busy_line = busy_line.clone();
            let line_id = line_id.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                let result = match plan_decrement(quantity) {
                    CartMutation::RemoveLine => client.remove_cart_line(&line_id).await,
                    CartMutation::SetQuantity(next) => {
                        client
                            .update_cart_line(&line_id, &UpdateCartLineRequest { quantity: next })
                            .await
                    }
                };
                match result {
                    Ok(cart) => cart_state::adopt(cart),
                    Err(err) => {
                        web_sys::console::warn_1(&format!("cart update failed: {err}").into());
                        notify::error("Could not update the cart");
                    }
                }
                busy_line.set(None);
            });
        })
    };

    let on_increment = {
        let busy_line = busy_line.clone();
        let line_id = line.id.clone();
        let quantity = line.quantity;
        Callback::from(move |_: MouseEvent| {
            if busy_line.is_some() {
                return;
            }
            busy_line.set(Some(line_id.clone()));
            let busy_line = busy_line.clone();
            let line_id = line_id.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client
                    .update_cart_line(
                        &line_id,
                        &UpdateCartLineRequest {
                            quantity: quantity + 1,
                        },
                    )
                    .await
                {
                    Ok(cart) => cart_state::adopt(cart),
                    Err(err) => {
                        web_sys::console::warn_1(&format!("cart update failed: {err}").into());
                        notify::error("Could not update the cart");
                    }
                }
                busy_line.set(None);
            });
        })
    };

    let on_remove = {
        let busy_line = busy_line.clone();
        let line_id = line.id.clone();
        Callback::from(move |_: MouseEvent| {
            if busy_line.is_some() {
                return;
            }
            busy_line.set(Some(line_id.clone()));
            let busy_line = busy_line.clone();
            let line_id = line_id.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client.remove_cart_line(&line_id).await {
                    Ok(cart) => {
                        cart_state::adopt(cart);
                        notify::info("Removed from cart");
                    }
                    Err(err) => {
                        web_sys::console::warn_1(&format!("cart removal failed: {err}").into());
                        notify::error("Could not remove the item");
                    }
                }
                busy_line.set(None);
            });
        })
    };

    let merchandise = &line.merchandise;
    let thumb = merchandise.image_url.clone().map_or_else(
        || html! { <div class="w-16 h-16 bg-base-200 rounded-box"></div> },
        |url| {
            html! {
                <img
                    class="w-16 h-16 object-cover rounded-box"
                    src={url}
                    alt={merchandise.product_title.clone()}
                />
            }
        },
    );

    html! {
        <div key={line.id.clone()} class="flex items-center gap-4 border-b border-base-300 pb-4">
            { thumb }
            <div class="flex-grow space-y-1">
                <Link<MainRoute>
                    to={MainRoute::Product { handle: merchandise.product_handle.clone() }}
                    classes="font-medium link link-hover"
                >
                    { merchandise.product_title.clone() }
                </Link<MainRoute>>
                <div class="flex items-center gap-2 text-sm text-base-content/60">
                    <span>{ merchandise.title.clone() }</span>
                    <GradeBadge grade={merchandise.grade} />
                </div>
                <div class="text-sm">{ merchandise.price.to_string() }</div>
            </div>
            <div class="join items-center">
                <button
                    class="btn btn-xs join-item"
                    type="button"
                    disabled={any_busy}
                    onclick={on_decrement}
                    aria-label="Decrease quantity"
                >
                    { "−" }
                </button>
                <span class="join-item px-3 text-sm">{ line.quantity }</span>
                <button
                    class="btn btn-xs join-item"
                    type="button"
                    disabled={any_busy}
                    onclick={on_increment}
                    aria-label="Increase quantity"
                >
                    { "+" }
                </button>
            </div>
            <div class="w-24 text-right font-medium">{ line.line_total.to_string() }</div>
            <button
                class="btn btn-ghost btn-xs"
                type="button"
                disabled={any_busy}
                onclick={on_remove}
                aria-label="Remove line"
            >
                { "✕" }
            </button>
        </div>
    }
}

/// Cart page. Renders the shared snapshot and re-fetches it on entry so a
/// stale badge never turns into a stale order.
#[function_component(CartPage)]
pub fn cart_page() -> Html {
    let (store, _) = use_store::<CartStore>();
    let busy_line = use_state(|| None::<String>);
    let settled = use_state(|| false);

    {
        let settled = settled.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match StorefrontClient::shared().get_cart().await {
                    Ok(cart) => cart_state::adopt(cart),
                    Err(_) => cart_state::reset(),
                }
                settled.set(true);
            });
            || ()
        });
    }

    let Some(cart) = store.cart.clone() else {
        if *settled {
            return html! {
                <div class="p-4 space-y-6">
                    <h1 class="text-2xl font-bold">{ "Your cart" }</h1>
                    <p>{ "Your cart is empty." }</p>
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary btn-sm">
                        { "Browse the catalog" }
                    </Link<MainRoute>>
                </div>
            };
        }
        return html! { <Loading /> };
    };

    if cart.is_empty() {
        return html! {
            <div class="p-4 space-y-6">
                <h1 class="text-2xl font-bold">{ "Your cart" }</h1>
                <p>{ "Your cart is empty." }</p>
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary btn-sm">
                    { "Browse the catalog" }
                </Link<MainRoute>>
            </div>
        };
    }

    let discount_row = cart.cost.discount_total.as_ref().map_or_else(
        || html! {},
        |discount| {
            html! {
                <div class="flex justify-between text-success">
                    <span>{ "Coupon savings" }</span>
                    <span>{ format!("−{discount}") }</span>
                </div>
            }
        },
    );

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Your cart" }</h1>
            <div class="grid lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-4">
                    { for cart.lines.iter().map(|line| cart_row(line, &busy_line)) }
                </div>
                <div class="card bg-base-100 shadow-md h-fit">
                    <div class="card-body space-y-4">
                        <h2 class="card-title text-lg">{ "Summary" }</h2>
                        <div class="space-y-1 text-sm">
                            <div class="flex justify-between">
                                <span>{ "Subtotal" }</span>
                                <span>{ cart.cost.subtotal.to_string() }</span>
                            </div>
                            { discount_row }
                            <div class="flex justify-between font-semibold text-base pt-1">
                                <span>{ "Total" }</span>
                                <span>{ cart.cost.total.to_string() }</span>
                            </div>
                        </div>
                        <CouponForm />
                        <a class="btn btn-primary btn-block" href={cart.checkout_url.clone()}>
                            { "Proceed to checkout" }
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
