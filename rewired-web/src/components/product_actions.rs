//! Buy box on the product page: variant picker, cart stepper, save to
//! wishlist. Parents should key this component by product id so switching
//! products resets the picker.

use shared::models::{AddCartLineRequest, AddWishlistItemRequest, Product, UpdateCartLineRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::StorefrontClient;
use crate::auth::session::use_session;
use crate::components::grade_badge::GradeBadge;
use crate::inflight::use_in_flight;
use crate::models::cart_state::{self, CartMutation, CartStore};
use crate::models::{wishlist_state, wishlist_state::WishlistStore};
use crate::notify;
use crate::routes::{LoginQuery, MainRoute};

#[derive(Properties, PartialEq)]
pub struct ProductActionsProps {
    pub product: Product,
}

#[function_component(ProductActions)]
pub fn product_actions(props: &ProductActionsProps) -> Html {
    let product = &props.product;
    let session = use_session();
    let navigator = use_navigator().unwrap();
    let (cart, _) = use_store::<CartStore>();
    let (wishlist, _) = use_store::<WishlistStore>();
    let cart_flight = use_in_flight();
    let wishlist_flight = use_in_flight();

    let selected = use_state(|| {
        product
            .default_variant()
            .map(|variant| variant.id.clone())
    });
    let selected_variant = (*selected)
        .as_ref()
        .and_then(|id| product.variants.iter().find(|variant| &variant.id == id));

    // Counts adds the server acknowledged without listing the variant in the
    // returned snapshot. Ignored as soon as the cart answers for the line.
    let fallback_count = use_state(|| 0i64);

    let cart_line = (*selected)
        .as_deref()
        .and_then(|id| cart.cart.as_ref().and_then(|cart| cart.line_for_variant(id)));
    let stepper_quantity = cart_line.map_or(*fallback_count, |line| line.quantity);

    {
        let fallback_count = fallback_count.clone();
        use_effect_with(
            ((*selected).clone(), cart_line.is_some()),
            move |_| {
                // Variant switched, or the cart now speaks for it.
                if *fallback_count != 0 {
                    fallback_count.set(0);
                }
            },
        );
    }

    let on_variant_change = {
        let selected = selected.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            selected.set(Some(select.value()));
        })
    };

    // One more unit of the selected variant. Serves both the initial add
    // button and the stepper increment.
    let on_add = {
        let flight = cart_flight.clone();
        let selected = selected.clone();
        let fallback_count = fallback_count.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(variant_id) = (*selected).clone() else {
                return;
            };
            let Some(guard) = flight.try_begin() else {
                return;
            };
            let fallback_count = fallback_count.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                let payload = AddCartLineRequest {
                    variant_id: variant_id.clone(),
                    quantity: 1,
                };
                match client.add_cart_line(&payload).await {
                    Ok(cart) => {
                        let confirmed = cart.line_for_variant(&variant_id).is_some();
                        cart_state::adopt_after_add(cart, &variant_id, 1);
                        if confirmed {
                            fallback_count.set(0);
                        } else {
                            fallback_count.set(*fallback_count + 1);
                        }
                        notify::success("Added to cart");
                    }
                    Err(err) => {
                        web_sys::console::warn_1(&format!("add to cart failed: {err}").into());
                        notify::error("Could not add to cart");
                    }
                }
                drop(guard);
            });
        })
    };

    // Stepping down works against the cart's own line, so it stays disabled
    // until the snapshot lists one.
    let on_decrement = {
        let flight = cart_flight.clone();
        let line = cart_line.map(|line| (line.id.clone(), line.quantity));
        Callback::from(move |_: MouseEvent| {
            let Some((line_id, quantity)) = line.clone() else {
                return;
            };
            let Some(guard) = flight.try_begin() else {
                return;
            };
            spawn_local(async move {
                let client = StorefrontClient::shared();
                let result = match cart_state::plan_decrement(quantity) {
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
                drop(guard);
            });
        })
    };

    let saved = wishlist.contains(&product.id);
    let on_toggle_wishlist = {
        let session = session.clone();
        let navigator = navigator;
        let flight = wishlist_flight.clone();
        let wishlist = wishlist.clone();
        let product_id = product.id.clone();
        let product_path = MainRoute::Product {
            handle: product.handle.clone(),
        }
        .to_path();
        Callback::from(move |_: MouseEvent| {
            if !session.is_authenticated() {
                let query = LoginQuery {
                    redirect: Some(product_path.clone()),
                };
                let _ = navigator.push_with_query(&MainRoute::Login, &query);
                return;
            }
            let Some(guard) = flight.try_begin() else {
                return;
            };
            let saved_item = wishlist
                .wishlist
                .as_ref()
                .and_then(|wishlist| wishlist.item_for_product(&product_id))
                .map(|item| item.id.clone());
            let removing = saved_item.is_some();
            let product_id = product_id.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                let result = match saved_item {
                    Some(item_id) => client.remove_wishlist_item(&item_id).await,
                    None => {
                        client
                            .add_wishlist_item(&AddWishlistItemRequest { product_id })
                            .await
                    }
                };
                match result {
                    Ok(updated) => {
                        wishlist_state::adopt(updated);
                        if removing {
                            notify::info("Removed from wishlist");
                        } else {
                            notify::success("Saved to wishlist");
                        }
                    }
                    Err(err) => {
                        web_sys::console::warn_1(&format!("wishlist update failed: {err}").into());
                        notify::error("Could not update your wishlist");
                    }
                }
                drop(guard);
            });
        })
    };

    let price_block = selected_variant.map_or_else(
        || html! { <p class="text-base-content/60">{"Currently unavailable"}</p> },
        |variant| {
            let compare_at = variant.compare_at_price.as_ref().map_or_else(
                || html! {},
                |original| html! {
                    <span class="text-sm line-through text-base-content/50">
                        { original.to_string() }
                    </span>
                },
            );
            html! {
                <div class="flex items-baseline gap-3">
                    <span class="text-2xl font-bold">{ variant.price.to_string() }</span>
                    { compare_at }
                    <GradeBadge grade={variant.grade} />
                </div>
            }
        },
    );

    let warranty = product.warranty_months.map_or_else(
        || html! {},
        |months| html! {
            <p class="text-sm text-base-content/70">
                { format!("{months}-month warranty included") }
            </p>
        },
    );

    let can_add = selected_variant.is_some_and(|variant| variant.available);
    let busy = cart_flight.is_busy();
    let cart_control = if stepper_quantity > 0 {
        html! {
            <div class="join">
                <button
                    class="btn btn-outline join-item"
                    type="button"
                    onclick={on_decrement}
                    disabled={busy || cart_line.is_none()}
                    aria-label="One less"
                >
                    { "−" }
                </button>
                <span class="btn btn-ghost join-item w-14 pointer-events-none">
                    { stepper_quantity }
                </span>
                <button
                    class="btn btn-outline join-item"
                    type="button"
                    onclick={on_add.clone()}
                    disabled={!can_add || busy}
                    aria-label="One more"
                >
                    { "+" }
                </button>
                <span class="self-center pl-3 text-sm text-base-content/60">{ "in your cart" }</span>
            </div>
        }
    } else {
        html! {
            <button
                class="btn btn-primary flex-grow"
                onclick={on_add.clone()}
                disabled={!can_add || busy}
            >
                { if busy { "Adding…" } else { "Add to cart" } }
            </button>
        }
    };

    let heart_icon = if saved {
        IconId::HeroiconsSolidHeart
    } else {
        IconId::HeroiconsOutlineHeart
    };

    html! {
        <div class="flex flex-col gap-3">
            { price_block }
            { warranty }
            <select class="select select-bordered w-full" onchange={on_variant_change}>
                { for product.variants.iter().map(|variant| {
                    let label = format!(
                        "{} · Grade {} · {}",
                        variant.title,
                        variant.grade.as_str(),
                        variant.price
                    );
                    let is_selected = (*selected).as_deref() == Some(variant.id.as_str());
                    html! {
                        <option
                            value={variant.id.clone()}
                            selected={is_selected}
                            disabled={!variant.available}
                        >
                            { if variant.available { label } else { format!("{label} · Sold out") } }
                        </option>
                    }
                }) }
            </select>
            <div class="flex gap-2">
                { cart_control }
                <button
                    class="btn btn-outline btn-square"
                    onclick={on_toggle_wishlist}
                    disabled={wishlist_flight.is_busy()}
                    aria-label={ if saved { "Remove from wishlist" } else { "Save to wishlist" } }
                >
                    <Icon icon_id={heart_icon} width="20" height="20" />
                </button>
            </div>
        </div>
    }
}
