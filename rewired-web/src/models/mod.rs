//! Client-side shared state stores.

pub mod cart_state;
pub mod wishlist_state;
