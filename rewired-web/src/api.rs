use once_cell::unsync::OnceCell;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Error, RequestBuilder};
use shared::models::{
    AddCartLineRequest, AddWishlistItemRequest, ApplyCouponRequest, AuthResponse, Cart,
    GoogleAuthRequest, LoginRequest, MediaAsset, MediaHostUpload, ModerateReviewRequest,
    PasswordResetRequest, PersistMediaRequest, Product, ProductPage, RegisterRequest, Review,
    ReviewStatus, SubmitReviewRequest, UpdateCartLineRequest, UploadSignature, User, Wishlist,
};

use crate::auth::tokens;
use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<StorefrontClient> = OnceCell::new();
}

/// Lightweight API client for storefront and back-office interactions.
#[derive(Clone, Debug)]
pub struct StorefrontClient {
    base_url: String,
    client: Client,
}

impl StorefrontClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token when one is in the store. Requests stay
    /// anonymous otherwise; the server decides what anonymous callers may do.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match tokens::access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, Error> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Create a customer account and sign it in.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, Error> {
        let url = self.api_url("auth/register");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Exchange a Google identity credential for a session.
    pub async fn login_with_google(
        &self,
        payload: &GoogleAuthRequest,
    ) -> Result<AuthResponse, Error> {
        let url = self.api_url("auth/google");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Ask the server to email a password reset link.
    pub async fn request_password_reset(
        &self,
        payload: &PasswordResetRequest,
    ) -> Result<(), Error> {
        let url = self.api_url("auth/password-reset");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Retrieve the profile behind the stored access token.
    pub async fn get_profile(&self) -> Result<User, Error> {
        let url = self.api_url("auth/me");
        let response = self.authorize(self.client.get(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Search the catalog. An empty query lists everything, newest first.
    pub async fn search_products(
        &self,
        query: Option<&str>,
        page: u32,
    ) -> Result<ProductPage, Error> {
        let url = self.api_url("products");
        let mut request = self.client.get(url).query(&[("page", page)]);
        if let Some(query) = query {
            request = request.query(&[("q", query)]);
        }
        let response = request.send().await?;
        response.error_for_status()?.json().await
    }

    /// Fetch a single product by its URL handle.
    pub async fn get_product(&self, handle: &str) -> Result<Product, Error> {
        let url = self.api_url(&format!("products/{handle}"));
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    /// Fetch the approved reviews shown on a product page.
    pub async fn list_product_reviews(&self, product_id: &str) -> Result<Vec<Review>, Error> {
        let url = self.api_url(&format!("products/{product_id}/reviews"));
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    /// Submit a review for moderation.
    pub async fn submit_review(
        &self,
        product_id: &str,
        payload: &SubmitReviewRequest,
    ) -> Result<Review, Error> {
        let url = self.api_url(&format!("products/{product_id}/reviews"));
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Fetch the current cart.
    pub async fn get_cart(&self) -> Result<Cart, Error> {
        let url = self.api_url("cart");
        let response = self.authorize(self.client.get(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Add a variant to the cart and return the updated cart.
    pub async fn add_cart_line(&self, payload: &AddCartLineRequest) -> Result<Cart, Error> {
        let url = self.api_url("cart/lines");
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Set a cart line to an absolute quantity and return the updated cart.
    pub async fn update_cart_line(
        &self,
        line_id: &str,
        payload: &UpdateCartLineRequest,
    ) -> Result<Cart, Error> {
        let url = self.api_url(&format!("cart/lines/{line_id}"));
        let response = self
            .authorize(self.client.patch(url))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Remove a cart line and return the updated cart.
    pub async fn remove_cart_line(&self, line_id: &str) -> Result<Cart, Error> {
        let url = self.api_url(&format!("cart/lines/{line_id}"));
        let response = self.authorize(self.client.delete(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Apply a coupon code and return the updated cart.
    pub async fn apply_coupon(&self, payload: &ApplyCouponRequest) -> Result<Cart, Error> {
        let url = self.api_url("cart/coupons");
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Remove an applied coupon code and return the updated cart.
    pub async fn remove_coupon(&self, code: &str) -> Result<Cart, Error> {
        let url = self.api_url(&format!("cart/coupons/{code}"));
        let response = self.authorize(self.client.delete(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Fetch the wishlist of the signed-in customer.
    pub async fn get_wishlist(&self) -> Result<Wishlist, Error> {
        let url = self.api_url("wishlist");
        let response = self.authorize(self.client.get(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Save a product to the wishlist and return the updated wishlist.
    pub async fn add_wishlist_item(
        &self,
        payload: &AddWishlistItemRequest,
    ) -> Result<Wishlist, Error> {
        let url = self.api_url("wishlist/items");
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Remove a wishlist entry and return the updated wishlist.
    pub async fn remove_wishlist_item(&self, item_id: &str) -> Result<Wishlist, Error> {
        let url = self.api_url(&format!("wishlist/items/{item_id}"));
        let response = self.authorize(self.client.delete(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Fetch the moderation queue filtered to one status.
    pub async fn list_reviews(&self, status: ReviewStatus) -> Result<Vec<Review>, Error> {
        let url = self.api_url("admin/reviews");
        let response = self
            .authorize(self.client.get(url))
            .query(&[("status", status.as_str())])
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Approve or reject a review.
    pub async fn moderate_review(
        &self,
        review_id: &str,
        payload: &ModerateReviewRequest,
    ) -> Result<Review, Error> {
        let url = self.api_url(&format!("admin/reviews/{review_id}"));
        let response = self
            .authorize(self.client.patch(url))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Mint a short-lived signature for one direct-to-host upload.
    pub async fn create_upload_signature(&self) -> Result<UploadSignature, Error> {
        let url = self.api_url("admin/media/signature");
        let response = self.authorize(self.client.post(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Push file bytes straight to the media host named by the signature.
    /// The bearer token is deliberately not attached; the host only honors
    /// the signature fields.
    pub async fn upload_media_file(
        &self,
        signature: &UploadSignature,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaHostUpload, Error> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;
        let mut form = Form::new()
            .text("api_key", signature.api_key.clone())
            .text("timestamp", signature.timestamp.to_string())
            .text("signature", signature.signature.clone())
            .part("file", part);
        if let Some(folder) = &signature.folder {
            form = form.text("folder", folder.clone());
        }

        let response = self
            .client
            .post(&signature.upload_url)
            .multipart(form)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Record a completed host upload with our own API.
    pub async fn record_media_upload(
        &self,
        payload: &PersistMediaRequest,
    ) -> Result<MediaAsset, Error> {
        let url = self.api_url("admin/media");
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// List the media assets known to our API, newest first.
    pub async fn list_media(&self) -> Result<Vec<MediaAsset>, Error> {
        let url = self.api_url("admin/media");
        let response = self.authorize(self.client.get(url)).send().await?;
        response.error_for_status()?.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = StorefrontClient::new("/api/");
        assert_eq!(client.api_url("cart"), "/api/cart");
        assert_eq!(client.api_url("/cart"), "/api/cart");
    }

    #[test]
    fn api_url_joins_nested_paths() {
        let client = StorefrontClient::new("https://rewired.shop/api");
        assert_eq!(
            client.api_url("cart/lines/l1"),
            "https://rewired.shop/api/cart/lines/l1"
        );
        assert_eq!(
            client.api_url(&format!("products/{}/reviews", "p1")),
            "https://rewired.shop/api/products/p1/reviews"
        );
    }
}
