pub mod auth;
pub mod cart;
pub mod catalog;
pub mod errors;
pub mod media;
pub mod review;
pub mod timestamp;
pub mod user;
pub mod wishlist;

pub use auth::{
    AuthResponse, GoogleAuthRequest, LoginRequest, PasswordResetRequest, RegisterRequest,
};
pub use cart::{
    AddCartLineRequest, ApplyCouponRequest, Cart, CartCost, CartDiscountCode, CartLine,
    CartLineMerchandise, UpdateCartLineRequest,
};
pub use catalog::{Grade, Money, Product, ProductImage, ProductPage, ProductRating, ProductVariant};
pub use errors::UnknownVariant;
pub use media::{MediaAsset, MediaHostUpload, PersistMediaRequest, UploadSignature};
pub use review::{ModerateReviewRequest, Review, ReviewStatus, SubmitReviewRequest};
pub use timestamp::Timestamp;
pub use user::{User, UserRole};
pub use wishlist::{AddWishlistItemRequest, Wishlist, WishlistItem};
