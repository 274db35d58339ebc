//! Shared wishlist state, mirroring the cart store.
//!
//! The wishlist only exists for signed-in customers; any fetch failure
//! (including the guest 401) resets the store and hides the badge.

use shared::models::Wishlist;
use wasm_bindgen_futures::spawn_local;
use yewdux::prelude::*;

use crate::api::StorefrontClient;
use crate::bus::{self, Topic};

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct WishlistStore {
    pub wishlist: Option<Wishlist>,
}

impl WishlistStore {
    #[must_use]
    pub fn count(&self) -> usize {
        self.wishlist.as_ref().map_or(0, Wishlist::count)
    }

    /// Whether a product is already saved, keyed by product id.
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.wishlist
            .as_ref()
            .is_some_and(|wishlist| wishlist.contains(product_id))
    }
}

/// Install a server snapshot as the shared wishlist and announce it.
pub fn adopt(wishlist: Wishlist) {
    Dispatch::<WishlistStore>::global().reduce_mut(|store| store.wishlist = Some(wishlist));
    bus::publish(Topic::WishlistUpdated);
}

/// Forget the wishlist, on sign-out or a rejected session.
pub fn reset() {
    Dispatch::<WishlistStore>::global().reduce_mut(|store| store.wishlist = None);
    bus::publish(Topic::WishlistUpdated);
}

/// Fetch the wishlist and adopt it; failures reset instead.
pub fn refresh() {
    spawn_local(async move {
        match StorefrontClient::shared().get_wishlist().await {
            Ok(wishlist) => adopt(wishlist),
            Err(_) => reset(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(product_ids: &[&str]) -> Wishlist {
        let items = product_ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{
                        "id": "item-{id}",
                        "productId": "{id}",
                        "productHandle": "handle-{id}",
                        "title": "Product {id}",
                        "price": {{ "amount": "99.00", "currencyCode": "EUR" }},
                        "addedAt": "2024-05-01T10:00:00Z"
                    }}"#
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        serde_json::from_str(&format!(r#"{{ "id": "w1", "items": [{items}] }}"#)).unwrap()
    }

    #[test]
    fn empty_store_counts_zero_and_contains_nothing() {
        let store = WishlistStore::default();
        assert_eq!(store.count(), 0);
        assert!(!store.contains("p1"));
    }

    #[test]
    fn loaded_store_reports_saved_products() {
        let store = WishlistStore {
            wishlist: Some(saved(&["p1", "p2"])),
        };
        assert_eq!(store.count(), 2);
        assert!(store.contains("p1"));
        assert!(store.contains("p2"));
        assert!(!store.contains("p3"));
    }
}
