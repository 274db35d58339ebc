//! Route-level pages for the storefront and back-office.

pub mod account;
pub mod admin;
pub mod cart;
pub mod error;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod product;
pub mod register;
pub mod wishlist;

pub use account::AccountPage;
pub use admin::{AdminMediaPage, AdminReviewsPage};
pub use cart::CartPage;
pub use error::ErrorPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use product::ProductDetailPage;
pub use register::RegisterPage;
pub use wishlist::WishlistPage;
