use serde::{Deserialize, Serialize};

use super::{Money, Timestamp};

/// A saved product on the wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Wishlist entry ID.
    pub id: String,
    /// Saved product ID.
    pub product_id: String,
    /// Product handle, for linking back to the listing.
    pub product_handle: String,
    /// Product title at the time it was saved.
    pub title: String,
    /// Current lowest price of the product.
    pub price: Money,
    /// Thumbnail URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// When the product was saved.
    pub added_at: Timestamp,
}

/// The customer's wishlist as returned by every wishlist endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Wishlist ID.
    pub id: String,
    /// Saved products, newest first.
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Number of saved products, shown on the header badge.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the given product is already saved.
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.item_for_product(product_id).is_some()
    }

    /// The entry saving the given product, needed to remove it again.
    #[must_use]
    pub fn item_for_product(&self, product_id: &str) -> Option<&WishlistItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }
}

/// Input for saving a product to the wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistItemRequest {
    /// Product ID to save.
    pub product_id: String,
}
