//! Authoritative client-side cart state.
//!
//! Exactly one [`Cart`] snapshot lives here, adopted from whichever API call
//! answered last. Components never hold their own copy: they read the store
//! and issue mutations through the API, and whoever receives the fresh
//! snapshot adopts it for everyone.

use shared::models::Cart;
use wasm_bindgen_futures::spawn_local;
use yewdux::prelude::*;

use crate::api::StorefrontClient;
use crate::bus::{self, Topic};

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CartStore {
    pub cart: Option<Cart>,
}

impl CartStore {
    /// Badge count. Zero both for an empty cart and before the first fetch.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.cart.as_ref().map_or(0, |cart| cart.total_quantity)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cart.is_some()
    }
}

/// What to send the API for a quantity step on an existing line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartMutation {
    /// Replace the line quantity.
    SetQuantity(i64),
    /// Drop the line entirely.
    RemoveLine,
}

/// Stepping down from quantity 1 removes the line instead of leaving a
/// zero-quantity husk behind.
#[must_use]
pub fn plan_decrement(current_quantity: i64) -> CartMutation {
    if current_quantity <= 1 {
        CartMutation::RemoveLine
    } else {
        CartMutation::SetQuantity(current_quantity - 1)
    }
}

/// Adjust a freshly-added-to snapshot whose lines do not mention the variant
/// that was just added. Some backends answer the add before the new line is
/// visible; counting the requested quantity by hand keeps the badge honest
/// until the next full fetch corrects it.
#[must_use]
pub fn reconcile_added_quantity(mut cart: Cart, variant_id: &str, requested: i64) -> Cart {
    if cart.line_for_variant(variant_id).is_none() {
        cart.total_quantity += requested;
    }
    cart
}

/// Install a server snapshot as the shared cart and announce it.
pub fn adopt(cart: Cart) {
    Dispatch::<CartStore>::global().reduce_mut(|store| store.cart = Some(cart));
    bus::publish(Topic::CartUpdated);
}

/// Adopt the snapshot returned by an add-line call, patching the count when
/// the added variant is missing from it.
pub fn adopt_after_add(cart: Cart, variant_id: &str, requested: i64) {
    adopt(reconcile_added_quantity(cart, variant_id, requested));
}

/// Forget the cart, typically on sign-out or a rejected session.
pub fn reset() {
    Dispatch::<CartStore>::global().reduce_mut(|store| store.cart = None);
    bus::publish(Topic::CartUpdated);
}

/// Fetch the authoritative cart and adopt it. Any failure resets the store;
/// a guest without a cart simply sees an empty badge.
pub fn refresh() {
    spawn_local(async move {
        match StorefrontClient::shared().get_cart().await {
            Ok(cart) => adopt(cart),
            Err(_) => reset(),
        }
    });
}
