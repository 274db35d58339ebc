use shared::models::{AddCartLineRequest, WishlistItem};
use wasm_bindgen_futures::spawn_local;
use yew::{
    Callback, Html, MouseEvent, UseStateHandle, function_component, html, use_effect_with,
    use_state,
};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::models::cart_state;
use crate::models::wishlist_state::{self, WishlistStore};
use crate::notify;
use crate::routes::MainRoute;

/// Move one saved product into the cart: resolve its sellable variant, add a
/// unit, then drop the wishlist entry. Each step adopts whatever snapshot the
/// server handed back, so a failure after the add still leaves the cart badge
/// correct.
async fn move_to_cart(client: &StorefrontClient, item: &WishlistItem) {
    let product = match client.get_product(&item.product_handle).await {
        Ok(product) => product,
        Err(err) => {
            web_sys::console::warn_1(&format!("product lookup failed: {err}").into());
            notify::error("Could not look up that product");
            return;
        }
    };
    let Some(variant) = product.default_variant().filter(|variant| variant.available) else {
        notify::error("That product is currently out of stock");
        return;
    };

    let request = AddCartLineRequest {
        variant_id: variant.id.clone(),
        quantity: 1,
    };
    match client.add_cart_line(&request).await {
        Ok(cart) => cart_state::adopt_after_add(cart, &variant.id, 1),
        Err(err) => {
            web_sys::console::warn_1(&format!("add to cart failed: {err}").into());
            notify::error("Could not add that product to the cart");
            return;
        }
    }

    match client.remove_wishlist_item(&item.id).await {
        Ok(wishlist) => {
            wishlist_state::adopt(wishlist);
            notify::success("Moved to cart");
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("wishlist removal failed: {err}").into());
            notify::error("Added to the cart, but it is still on the wishlist");
        }
    }
}

fn wishlist_row(item: &WishlistItem, busy_item: &UseStateHandle<Option<String>>) -> Html {
    let any_busy = busy_item.is_some();

    let on_remove = {
        let busy_item = busy_item.clone();
        let item_id = item.id.clone();
        Callback::from(move |_: MouseEvent| {
            if busy_item.is_some() {
                return;
            }
            busy_item.set(Some(item_id.clone()));
            let busy_item = busy_item.clone();
            let item_id = item_id.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client.remove_wishlist_item(&item_id).await {
                    Ok(wishlist) => {
                        wishlist_state::adopt(wishlist);
                        notify::info("Removed from wishlist");
                    }
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("wishlist removal failed: {err}").into(),
                        );
                        notify::error("Could not remove the item");
                    }
                }
                busy_item.set(None);
            });
        })
    };

    let on_move = {
        let busy_item = busy_item.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| {
            if busy_item.is_some() {
                return;
            }
            busy_item.set(Some(item.id.clone()));
            let busy_item = busy_item.clone();
            let item = item.clone();
            spawn_local(async move {
                move_to_cart(&StorefrontClient::shared(), &item).await;
                busy_item.set(None);
            });
        })
    };

    let thumb = item.image_url.clone().map_or_else(
        || html! { <div class="w-16 h-16 bg-base-200 rounded-box"></div> },
        |url| {
            html! {
                <img class="w-16 h-16 object-cover rounded-box" src={url} alt={item.title.clone()} />
            }
        },
    );

    html! {
        <div key={item.id.clone()} class="flex items-center gap-4 border-b border-base-300 pb-4">
            { thumb }
            <div class="flex-grow space-y-1">
                <Link<MainRoute>
                    to={MainRoute::Product { handle: item.product_handle.clone() }}
                    classes="font-medium link link-hover"
                >
                    { item.title.clone() }
                </Link<MainRoute>>
                <div class="text-sm text-base-content/60">
                    { "Saved " }{ item.added_at.to_html() }
                </div>
            </div>
            <div class="w-24 text-right font-medium">{ item.price.to_string() }</div>
            <button
                class="btn btn-primary btn-xs"
                type="button"
                disabled={any_busy}
                onclick={on_move}
            >
                { "Move to cart" }
            </button>
            <button
                class="btn btn-ghost btn-xs"
                type="button"
                disabled={any_busy}
                onclick={on_remove}
                aria-label="Remove from wishlist"
            >
                { "✕" }
            </button>
        </div>
    }
}

/// Saved-products page. Signed-in only; the router sends guests to login.
#[function_component(WishlistPage)]
pub fn wishlist_page() -> Html {
    let (store, _) = use_store::<WishlistStore>();
    let busy_item = use_state(|| None::<String>);
    let settled = use_state(|| false);

    {
        let settled = settled.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match StorefrontClient::shared().get_wishlist().await {
                    Ok(wishlist) => wishlist_state::adopt(wishlist),
                    Err(_) => wishlist_state::reset(),
                }
                settled.set(true);
            });
            || ()
        });
    }

    let empty = html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Your wishlist" }</h1>
            <p>{ "Nothing saved yet. Tap the heart on any product to keep it here." }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary btn-sm">
                { "Browse the catalog" }
            </Link<MainRoute>>
        </div>
    };

    let Some(wishlist) = store.wishlist.clone() else {
        if *settled {
            return empty;
        }
        return html! { <Loading /> };
    };

    if wishlist.items.is_empty() {
        return empty;
    }

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Your wishlist" }</h1>
            <div class="max-w-2xl space-y-4">
                { for wishlist.items.iter().map(|item| wishlist_row(item, &busy_item)) }
            </div>
        </div>
    }
}
