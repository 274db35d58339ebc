//! Wire models shared across the Rewired storefront and back-office client.

pub mod models;
