use serde::{Deserialize, Serialize};

use super::{Grade, Money};

/// Variant info attached to a cart line, flattened for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineMerchandise {
    /// Variant ID.
    pub id: String,
    /// Variant title.
    pub title: String,
    /// Cosmetic grade of the unit.
    pub grade: Grade,
    /// Price per unit.
    pub price: Money,
    /// Parent product ID.
    pub product_id: String,
    /// Parent product handle, for linking back to the listing.
    pub product_handle: String,
    /// Parent product title.
    pub product_title: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Cart line ID.
    pub id: String,
    /// Quantity.
    pub quantity: i64,
    /// Line total after discounts.
    pub line_total: Money,
    /// Product variant.
    pub merchandise: CartLineMerchandise,
}

/// Cart cost summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCost {
    /// Subtotal before discounts.
    pub subtotal: Money,
    /// Amount taken off by applied coupons.
    #[serde(default)]
    pub discount_total: Option<Money>,
    /// Total the customer pays.
    pub total: Money,
}

/// Coupon code applied to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDiscountCode {
    /// The coupon code.
    pub code: String,
    /// Whether the code currently applies to the cart contents.
    pub applicable: bool,
}

/// The authoritative cart as returned by every cart endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart ID.
    pub id: String,
    /// Checkout URL.
    pub checkout_url: String,
    /// Total item quantity across all lines.
    pub total_quantity: i64,
    /// Cost summary.
    pub cost: CartCost,
    /// Applied coupon codes.
    #[serde(default)]
    pub discount_codes: Vec<CartDiscountCode>,
    /// Cart lines.
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// The line holding the given variant, when one exists.
    #[must_use]
    pub fn line_for_variant(&self, variant_id: &str) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.merchandise.id == variant_id)
    }

    /// Quantity of the given variant currently in the cart, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, variant_id: &str) -> i64 {
        self.line_for_variant(variant_id)
            .map_or(0, |line| line.quantity)
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Input for adding a variant to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartLineRequest {
    /// Product variant ID.
    pub variant_id: String,
    /// Quantity to add.
    pub quantity: i64,
}

/// Input for setting a cart line to an absolute quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartLineRequest {
    /// New quantity.
    pub quantity: i64,
}

/// Input for applying a coupon code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyCouponRequest {
    /// The coupon code as typed by the customer.
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    fn money(amount: &str) -> Money {
        Money {
            amount: amount.to_string(),
            currency_code: "USD".to_string(),
        }
    }

    fn line(id: &str, variant_id: &str, quantity: i64) -> CartLine {
        CartLine {
            id: id.to_string(),
            quantity,
            line_total: money("10.00"),
            merchandise: CartLineMerchandise {
                id: variant_id.to_string(),
                title: "64 GB".to_string(),
                grade: Grade::B,
                price: money("10.00"),
                product_id: "p1".to_string(),
                product_handle: "refurb-phone".to_string(),
                product_title: "Refurb Phone".to_string(),
                image_url: None,
            },
        }
    }

    fn cart(lines: Vec<CartLine>) -> Cart {
        let total_quantity = lines.iter().map(|line| line.quantity).sum();
        Cart {
            id: "c1".to_string(),
            checkout_url: "https://rewired.shop/checkout/c1".to_string(),
            total_quantity,
            cost: CartCost {
                subtotal: money("10.00"),
                discount_total: None,
                total: money("10.00"),
            },
            discount_codes: vec![],
            lines,
        }
    }

    #[test]
    fn quantity_lookup_by_variant() {
        let cart = cart(vec![line("l1", "v1", 2), line("l2", "v2", 1)]);

        assert_eq!(cart.quantity_of("v1"), 2);
        assert_eq!(cart.quantity_of("v2"), 1);
        assert_eq!(cart.quantity_of("v9"), 0);
        assert_eq!(cart.line_for_variant("v2").unwrap().id, "l2");
    }

    #[test]
    fn empty_cart_reports_empty() {
        let cart = cart(vec![]);
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity, 0);
    }

    #[test]
    fn cart_decodes_camel_case_payload() {
        let json = r#"{
            "id": "c7",
            "checkoutUrl": "https://rewired.shop/checkout/c7",
            "totalQuantity": 3,
            "cost": {
                "subtotal": {"amount": "387.00", "currencyCode": "USD"},
                "discountTotal": {"amount": "38.70", "currencyCode": "USD"},
                "total": {"amount": "348.30", "currencyCode": "USD"}
            },
            "discountCodes": [{"code": "SPRING10", "applicable": true}],
            "lines": [{
                "id": "l1",
                "quantity": 3,
                "lineTotal": {"amount": "387.00", "currencyCode": "USD"},
                "merchandise": {
                    "id": "v1",
                    "title": "128 GB",
                    "grade": "B",
                    "price": {"amount": "129.00", "currencyCode": "USD"},
                    "productId": "p1",
                    "productHandle": "pixel-7",
                    "productTitle": "Pixel 7",
                    "imageUrl": "https://cdn.rewired.shop/pixel7.jpg"
                }
            }]
        }"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.total_quantity, 3);
        assert_eq!(cart.discount_codes[0].code, "SPRING10");
        assert!(cart.discount_codes[0].applicable);
        assert_eq!(cart.quantity_of("v1"), 3);
        assert_eq!(cart.cost.discount_total.as_ref().unwrap().amount, "38.70");
    }

    #[test]
    fn add_request_serializes_variant_id_camel_cased() {
        let request = AddCartLineRequest {
            variant_id: "v1".to_string(),
            quantity: 1,
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert_eq!(serialized, "{\"variantId\":\"v1\",\"quantity\":1}");
    }
}
