use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::UnknownVariant;

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency_code.as_str() {
            "USD" => write!(f, "${}", self.amount),
            "EUR" => write!(f, "\u{20ac}{}", self.amount),
            "GBP" => write!(f, "\u{a3}{}", self.amount),
            _ => write!(f, "{} {}", self.amount, self.currency_code),
        }
    }
}

/// Cosmetic grade assigned to a refurbished unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Short condition summary shown next to the grade badge.
    #[must_use]
    pub fn condition(self) -> &'static str {
        match self {
            Self::A => "Like new",
            Self::B => "Light wear",
            Self::C => "Visible wear",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(UnknownVariant::new("grade", value)),
        }
    }
}

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// Aggregated review rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRating {
    /// Average rating value (e.g., 4.5).
    pub value: f64,
    /// Total number of approved reviews.
    pub count: i64,
}

/// A purchasable refurbished unit of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Variant ID.
    pub id: String,
    /// Variant title (e.g., "128 GB / Midnight").
    pub title: String,
    /// SKU.
    #[serde(default)]
    pub sku: Option<String>,
    /// Cosmetic grade of this unit.
    pub grade: Grade,
    /// Current price.
    pub price: Money,
    /// Original retail price, when known.
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// Whether the unit is in stock.
    pub available: bool,
}

/// A refurbished product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// URL handle.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Long-form description.
    pub description: String,
    /// Warranty period in months, when one is offered.
    #[serde(default)]
    pub warranty_months: Option<u32>,
    /// Gallery images.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Aggregated rating, once the product has approved reviews.
    #[serde(default)]
    pub rating: Option<ProductRating>,
    /// Purchasable units.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// The variant preselected on the product page: the first one in stock,
    /// falling back to the first listed.
    #[must_use]
    pub fn default_variant(&self) -> Option<&ProductVariant> {
        self.variants
            .iter()
            .find(|variant| variant.available)
            .or_else(|| self.variants.first())
    }

    /// First gallery image, used on listing cards.
    #[must_use]
    pub fn featured_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Products on this page.
    pub items: Vec<Product>,
    /// One-based page number.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Total products matching the query.
    pub total: u32,
}

impl ProductPage {
    /// Number of pages the query spans.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Whether a later page exists.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages()
    }
}
