//! Product domain models.
//!
//! Every type here is an immutable value object built once from an upstream
//! payload by `vinmono-client`'s mappers. Fields the upstream may omit carry
//! explicit defaults (`price: 0.0`, `images: []`, `buyable: true`) so callers
//! never see a half-shaped object.

use serde::{Deserialize, Serialize};

use crate::food_pairing::FoodPairing;

/// A classification node (category, country, district...) from any partial
/// upstream sub-document. All fields are independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    pub code: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

impl Category {
    /// Returns `true` when no field carries a value. Mappers drop all-empty
    /// categories instead of emitting them.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.name.is_none() && self.url.is_none()
    }
}

/// Pixel bounds sniffed from a `cache/WIDTHxHEIGHT` substring in an image URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub max_width: u32,
    pub max_height: u32,
}

/// A product image. `size` is derived from the URL, not supplied upstream;
/// URLs without a recognizable size yield `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Upstream format tag, e.g. `"thumbnail"` or `"superZoom"`.
    pub format: String,
    /// Alt text, when present.
    pub description: Option<String>,
    /// Upstream image type, e.g. `"PRIMARY"`.
    pub image_type: String,
    pub url: String,
    pub size: Option<ImageSize>,
}

/// Container volume in the document's native unit (commonly centiliters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub value: f64,
    /// The upstream display string, e.g. `"50 cl"`.
    pub formatted_value: String,
    /// Unit token taken from the formatted string, e.g. `"cl"`.
    pub unit: String,
}

/// An ingredient with an optional share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub id: String,
    pub name: String,
    pub percentage: Option<f64>,
}

/// Sale status vocabulary. The upstream uses three lowercase Norwegian
/// tokens; anything else maps to `None` at the filter layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    OutOfStock,
    Expired,
}

impl ProductStatus {
    /// Resolves the upstream status token. Case-sensitive: the API emits
    /// these exact strings and nothing else has been observed.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "aktiv" => Some(Self::Active),
            "utsolgt" => Some(Self::OutOfStock),
            "utgatt" => Some(Self::Expired),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::OutOfStock => "OUT_OF_STOCK",
            Self::Expired => "EXPIRED",
        }
    }
}

/// A product as returned by the search API (the "base" shape).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseProduct {
    /// Unique upstream product code.
    pub code: String,
    pub name: String,
    /// Relative URL to the retailer's product page.
    pub url: String,
    pub price: f64,
    /// Derived: price divided by the liter-normalized volume. `0.0` when the
    /// volume is missing or carries an unknown unit.
    pub price_per_liter: f64,
    pub images: Vec<ProductImage>,
    pub volume: Option<Volume>,
    pub main_category: Option<Category>,
    pub main_sub_category: Option<Category>,
    pub main_country: Option<Category>,
    pub district: Option<Category>,
    pub sub_district: Option<Category>,
    /// Assortment tier, e.g. `"Basisutvalget"`.
    pub product_selection: String,
    pub buyable: bool,
    pub status: Option<ProductStatus>,
}

impl BaseProduct {
    /// Model defaults for fields the upstream may omit entirely.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            buyable: true,
            ..Self::default()
        }
    }
}

/// The full detail-fetch shape: everything in [`BaseProduct`] plus sensory,
/// provenance, and flag fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PopulatedProduct {
    #[serde(flatten)]
    pub base: BaseProduct,

    /// Alcohol by volume in percent. `0.0` when the traits list carries no
    /// alcohol entry (gift articles and the like).
    pub abv: f64,
    /// Grams of sugar per liter.
    pub sugar: Option<f64>,
    /// Grams of acid per liter.
    pub acid: Option<f64>,
    /// 0-100 scale.
    pub tannins: Option<u8>,
    /// 0-100 scale.
    pub bitterness: Option<u8>,
    /// 0-100 scale.
    pub freshness: Option<u8>,
    /// 0-100 scale.
    pub fullness: Option<u8>,
    pub color: Option<String>,
    pub aroma: Option<String>,
    pub taste: Option<String>,

    pub bio_dynamic: bool,
    pub eco: bool,
    pub fair_trade: bool,
    /// `true` when the product contains gluten.
    pub gluten: bool,
    pub kosher: bool,
    pub environmental_packaging: bool,
    pub expired: bool,

    pub allergens: Option<String>,
    pub food_pairing: Vec<FoodPairing>,
    pub raw_material: Vec<RawMaterial>,
    pub storable: Option<String>,
    pub container_type: Option<String>,
    pub age_limit: u8,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub method: Option<String>,
    pub distributor: Option<String>,
    pub distributor_id: Option<String>,
    pub wholesaler: Option<String>,
    pub vintage: Option<u16>,
}

impl PopulatedProduct {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            base: BaseProduct::empty(),
            ..Self::default()
        }
    }
}

/// A product row from the bulk CSV export. Flatter than the JSON shapes:
/// classification fields are plain strings and the volume is a bare number
/// in the export's native unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamProduct {
    pub code: String,
    pub name: String,
    pub url: Option<String>,
    pub price: Option<f64>,
    pub price_per_liter: Option<f64>,
    pub container_size: Option<f64>,
    pub product_type: Option<String>,
    pub product_selection: Option<String>,
    pub store_category: Option<String>,

    pub fullness: Option<u8>,
    pub freshness: Option<u8>,
    pub tannins: Option<u8>,
    pub bitterness: Option<u8>,
    pub sweetness: Option<u8>,
    pub color: Option<String>,
    pub aroma: Option<String>,
    pub taste: Option<String>,
    pub food_pairing: Vec<FoodPairing>,

    pub main_country: Option<String>,
    pub district: Option<String>,
    pub sub_district: Option<String>,
    pub vintage: Option<u16>,
    pub raw_material: Option<String>,
    pub method: Option<String>,

    pub abv: Option<f64>,
    pub sugar: Option<f64>,
    pub acid: Option<f64>,
    pub storable: Option<String>,

    pub main_producer: Option<String>,
    pub wholesaler: Option<String>,
    pub distributor: Option<String>,
    pub container_type: Option<String>,
    pub cork: Option<String>,
}
