//! Reusable widgets shared by the storefront and back-office pages.

pub mod admin_tabs;
pub mod cart_badge;
pub mod coupon_form;
pub mod grade_badge;
pub mod loading;
pub mod media_uploader;
pub mod notices;
pub mod product_actions;
pub mod product_card;
pub mod rating_stars;
pub mod review_form;
pub mod review_table;
pub mod user_dropdown;
pub mod verification_banner;
pub mod wishlist_badge;
